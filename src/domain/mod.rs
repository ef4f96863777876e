//! Domain layer - ports and data transfer objects shared by the usecases,
//! the controllers and the infrastructure.

pub mod dto;
pub mod ports;
pub mod types;
