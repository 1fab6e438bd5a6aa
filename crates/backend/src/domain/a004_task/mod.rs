pub mod keyword_suggester;
pub mod repository;
pub mod service;
