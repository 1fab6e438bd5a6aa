pub mod a004_task;
