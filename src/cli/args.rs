//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::services::ReservationRequest;

/// Theater seating chart: middle-out block reservation for customer parties
#[derive(Parser, Debug)]
#[command(name = "seatmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, env = "SEATMAP_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the seating chart
    Show,

    /// Print the order in which rows are offered
    Order,

    /// Reserve seats for one or more parties, in order
    Reserve {
        /// Requests as NAME:SIZE, e.g. Alice:3
        #[arg(required = true, value_parser = parse_request)]
        requests: Vec<ReservationRequest>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Print a config template
    Template,
}

fn parse_request(s: &str) -> Result<ReservationRequest, String> {
    s.parse().map_err(|e: crate::application::ApplicationError| e.to_string())
}
