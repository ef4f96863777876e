mod completion_report;
mod dhcp_server;
mod dns_server;
mod http_server;
mod indicator;
mod network;

pub use completion_report::completion_report_task;
pub use dhcp_server::dhcp_server_task;
pub use dns_server::dns_server_task;
pub use http_server::{job_http_server_task, portal_http_server_task};
pub use indicator::indicator_task;
pub use network::{network_runner_task, wifi_ap_task, wifi_maintenance_task};
