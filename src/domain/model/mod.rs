//! Model domain — remodeling and the device's current model/serial assertions.

pub mod client;
pub mod wire;

pub use wire::RemodelRequest;
