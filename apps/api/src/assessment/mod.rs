pub mod classifier;
pub mod handlers;
