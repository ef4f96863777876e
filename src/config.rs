pub const CREDENTIALS_PARTITION_OFFSET: u32 = 0x31_0000;
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Name reported with every completed job
pub const DEVICE_NAME: &str = match option_env!("DEVICE_NAME") {
    Some(name) => name,
    None => "web2wire-esp",
};

/// Job report endpoint, plain HTTP
pub(crate) const COMPLETION_URL: &str = match option_env!("COMPLETION_URL") {
    Some(url) => url,
    None => "http://192.168.2.10:5000/api/job/complete",
};

/// Shared secret for the job API and the completion report.
/// Requests are not authenticated when unset.
pub(crate) const API_TOKEN: Option<&str> = option_env!("API_TOKEN");

/// Landing page of the setup portal, every unknown path redirects here
pub(crate) const PORTAL_URL: &str = "http://192.168.4.1/";
