pub mod date_range_input;
