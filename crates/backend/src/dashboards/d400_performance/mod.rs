pub mod aggregation;
pub mod export;
pub mod repository;
pub mod service;
