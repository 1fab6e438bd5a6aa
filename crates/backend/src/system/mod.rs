pub mod middleware;
pub mod registration;
pub mod tracing;
