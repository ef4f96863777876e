pub mod connectivity;
pub mod credentials;
pub mod job;
pub mod system;

pub use connectivity::*;
pub use credentials::*;
pub use job::*;
pub use system::*;
