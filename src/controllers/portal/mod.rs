mod http;
mod page;

pub use http::PortalHttpController;
