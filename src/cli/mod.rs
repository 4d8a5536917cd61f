//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kitescan")]
#[command(author, version, about = "RSI + Fibonacci retracement signal scanner for Zerodha Kite")]
pub struct Cli {
    /// Configuration file path (created with defaults if missing)
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Log level override (defaults to the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one analysis pass and print the results
    Scan(ScanArgs),
    /// Run the interactive dashboard
    Dashboard(DashboardArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Place a market order when a signal fires (off by default)
    #[arg(long)]
    pub execute: bool,

    /// Quantity for executed orders
    #[arg(long, default_value = "1")]
    pub quantity: u32,
}

#[derive(clap::Args)]
pub struct DashboardArgs {
    /// UI refresh interval in milliseconds
    #[arg(long, default_value = "250")]
    pub refresh_ms: u64,
}
