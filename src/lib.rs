pub mod browse;
pub mod check;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod render;
pub mod terms;
