// handlers/system/mod.rs - Service metadata and liveness (/ and /health)

pub mod health;
pub mod root;

pub use health::health;
pub use root::root;
