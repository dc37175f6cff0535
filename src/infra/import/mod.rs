pub mod csv;
pub mod table;
pub mod xlsx;
