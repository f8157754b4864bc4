pub mod commands;
pub mod config;

pub use commands::Command;
pub use config::CliConfig;
