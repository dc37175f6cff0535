pub mod audit;
pub mod dataset;
