pub mod sender;
pub mod service;
