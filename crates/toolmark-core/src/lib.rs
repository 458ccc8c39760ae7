pub mod config;
pub mod logging;

pub mod catalog;
pub mod infer;

pub use infer::infer;
