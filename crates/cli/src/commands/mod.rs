pub mod check;
pub mod describe;
pub mod table;

pub use check::check_command;
pub use describe::describe_command;
pub use table::table_command;
