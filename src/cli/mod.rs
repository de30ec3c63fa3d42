//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Orderwatch using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Orderwatch - delivery alerts for medical-equipment orders
#[derive(Parser, Debug)]
#[command(name = "orderwatch")]
#[command(version, about, long_about = None)]
#[command(author = "Orderwatch Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "orderwatch.toml", env = "ORDERWATCH_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ORDERWATCH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch pending orders, alert on delivered items and publish the updates
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
