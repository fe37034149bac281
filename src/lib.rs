pub mod commands;
pub mod config;
pub mod export;
pub mod logging;
pub mod output;
pub mod project;
pub mod prompt;
pub mod scoring;
