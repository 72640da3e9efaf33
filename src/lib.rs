pub mod hello;
pub mod server;
pub mod telemetry;
