pub mod add_form;
pub mod list;

pub use list::TaskList;
