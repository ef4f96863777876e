fn main() {
    let version = chrono::Utc::now().format("%Y.%m.%d-%H%M").to_string();
    println!("cargo:rustc-env=BUILD_VERSION={version}");
    println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
    println!("cargo:rerun-if-env-changed=COMPLETION_URL");
    println!("cargo:rerun-if-env-changed=API_TOKEN");
    println!("cargo:rerun-if-env-changed=DEVICE_NAME");
}
