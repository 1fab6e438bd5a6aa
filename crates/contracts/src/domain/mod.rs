pub mod a001_consultant;
pub mod a002_client;
pub mod a003_invoice;
pub mod a004_task;
pub mod common;
