pub mod pages;
pub mod registration;
