mod backend;
pub mod cpu;

pub use backend::{default_backend, ComputeBackend};
