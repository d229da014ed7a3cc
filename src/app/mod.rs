pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;
mod context;

pub use context::AppContext;
