pub mod record_grid;
pub mod state;
