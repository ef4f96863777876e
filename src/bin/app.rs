#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_net::Stack;
use embassy_time::{Duration, Instant, Timer};

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{
    clock::CpuClock,
    gpio::{Level, Output, OutputConfig},
    timer::timg::TimerGroup,
};
#[cfg(feature = "log")]
use esp_println::println;
use esp_radio::wifi::{WifiController, WifiDevice};
use esp_storage::FlashStorage;

use web2wire_core::{Indicator, connectivity::ConnectivityManager, display};
use web2wire_esp::app::{ConnectivityUsecases, JobUsecases, ProvisioningUsecases};
#[cfg(feature = "log")]
use web2wire_esp::config::{BUILD_VERSION, DEVICE_NAME};
use web2wire_esp::config::CREDENTIALS_PARTITION_OFFSET;
use web2wire_esp::controllers::{
    init_job_controllers,
    init_portal_controllers,
    job::JobHttpController,
    portal::PortalHttpController,
    superloop::SuperloopController,
};
use web2wire_esp::domain::ports::CredentialsReader;
use web2wire_esp::infrastructure::config::{DEVICE, DISPLAY, LED, WIFI_AP};
use web2wire_esp::infrastructure::drivers::{
    EspDisplay,
    EspLedDriver,
    init_display,
    init_sta_stack,
    init_wifi,
    join_network,
    start_wifi_ap,
};
use web2wire_esp::infrastructure::repositories::CredentialRepository;
use web2wire_esp::infrastructure::services::{
    CompletionNotifierService,
    IndicatorService,
    LinkService,
    LinkStatusService,
    SystemService,
};
use web2wire_esp::infrastructure::tasks::{
    completion_report_task,
    indicator_task,
    job_http_server_task,
    network_runner_task,
    portal_http_server_task,
    wifi_maintenance_task,
};
use web2wire_esp::infrastructure::types::{
    ConnectivityUsecasesImpl,
    JobUsecasesImpl,
    ProvisioningUsecasesImpl,
};
use web2wire_esp::{backlight_gpio, display_pins, led_gpio, mk_static};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Allocate heap memory (64 + 32 KB)
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    #[cfg(feature = "log")]
    println!("boot: {} firmware {}", DEVICE_NAME, BUILD_VERSION);

    // Read the stored network before touching the radio
    let mut credentials = CredentialRepository::new(
        FlashStorage::new(peripherals.FLASH),
        CREDENTIALS_PARTITION_OFFSET,
    );
    let stored = credentials.read_credentials();

    // Status light
    let mut indicator = IndicatorService::new();
    match EspLedDriver::new(peripherals.RMT, led_gpio!(peripherals), LED.brightness) {
        Ok(driver) => {
            spawner.spawn(indicator_task(driver)).ok();
        }
        Err(_e) => {
            #[cfg(feature = "log")]
            println!("boot: status light unavailable: {:?}", _e);
        }
    }

    // Screen, the backlight stays on for the lifetime of main
    let _backlight = Output::new(
        backlight_gpio!(peripherals),
        Level::High,
        OutputConfig::default(),
    );
    let screen = init_display(peripherals.SPI2, display_pins!(peripherals), &DISPLAY);

    let (mut controller, interfaces) = init_wifi(peripherals.WIFI);
    let mut manager = ConnectivityManager::new(stored.is_some(), Instant::now());
    indicator.set_indicator(manager.indicator_color());

    if let Some(stored) = stored {
        let (stack, runner) = init_sta_stack(interfaces.sta, DEVICE.hostname);
        spawner.spawn(network_runner_task(runner)).ok();

        if join_network(&mut controller, stack, &stored, &mut manager).await {
            run_application(spawner, controller, stack, manager, indicator, screen).await;
        }
        indicator.set_indicator(manager.indicator_color());
    }

    run_provisioning(spawner, controller, interfaces.ap, credentials, screen).await
}

/// Normal operation on the stored network
async fn run_application(
    spawner: Spawner,
    controller: WifiController<'static>,
    stack: Stack<'static>,
    manager: ConnectivityManager,
    indicator: IndicatorService,
    screen: EspDisplay,
) -> ! {
    spawner.spawn(wifi_maintenance_task(controller)).ok();
    spawner.spawn(completion_report_task(stack)).ok();

    let job_usecases = mk_static!(
        JobUsecasesImpl,
        JobUsecases::new(indicator, CompletionNotifierService::new(), LinkStatusService)
    );
    let connectivity_usecases = mk_static!(
        ConnectivityUsecasesImpl,
        ConnectivityUsecases::new(manager, LinkService::new(stack))
    );

    let job_controller = mk_static!(JobHttpController, init_job_controllers(job_usecases));
    spawner.spawn(job_http_server_task(stack, job_controller)).ok();

    SuperloopController::new(screen, connectivity_usecases)
        .run()
        .await
}

/// Setup portal on the open access point, left only by a restart
async fn run_provisioning(
    spawner: Spawner,
    controller: WifiController<'static>,
    ap_device: WifiDevice<'static>,
    credentials: CredentialRepository,
    mut screen: EspDisplay,
) -> ! {
    let stack = start_wifi_ap(spawner, controller, ap_device, &WIFI_AP).await;

    let usecases = mk_static!(
        ProvisioningUsecasesImpl,
        ProvisioningUsecases::new(credentials, SystemService)
    );
    let portal_controller = mk_static!(
        PortalHttpController,
        init_portal_controllers(usecases).await
    );
    spawner
        .spawn(portal_http_server_task(stack, portal_controller))
        .ok();

    if display::render_provisioning(&mut screen, WIFI_AP.ssid, WIFI_AP.ip_address)
        .is_err()
    {
        #[cfg(feature = "log")]
        println!("boot: display write failed");
    }

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
