mod http;

pub use http::JobHttpController;
