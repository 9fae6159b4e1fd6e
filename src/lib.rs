pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod platform;
pub mod state;
pub mod work;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
