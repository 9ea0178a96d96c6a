//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::{ReservationRequest, ReservationService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{RowSelector, Theater};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given, see --help".to_string()));
    };

    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Config { command } => run_config(cli, command),
        Commands::Show => {
            let theater = load_theater(cli)?;
            print_chart(&theater);
            Ok(())
        }
        Commands::Order => {
            let theater = load_theater(cli)?;
            print_order(theater.row_selector());
            Ok(())
        }
        Commands::Reserve { requests } => {
            let theater = load_theater(cli)?;
            run_reserve(theater, requests).map(drop)
        }
    }
}

fn load_theater(cli: &Cli) -> CliResult<Theater> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(settings.theater.build()?)
}

fn print_chart(theater: &Theater) {
    output::header(theater.name());
    for row in theater.rows() {
        output::info(row);
    }
}

fn print_order(selector: RowSelector) {
    for row_number in selector {
        output::info(&row_number);
    }
}

fn sold_out_message(request: &ReservationRequest) -> String {
    format!(
        "no row has {} free seats for {}",
        request.party_size, request.customer
    )
}

/// Apply `requests` in order, printing each outcome and then the chart.
#[instrument(skip(theater))]
fn run_reserve(
    theater: Theater,
    requests: &[ReservationRequest],
) -> CliResult<ReservationService> {
    let mut service = ReservationService::new(theater);

    for request in requests {
        match service.reserve(request.party_size, &request.customer)? {
            Some(allocation) => output::success(&allocation),
            None => output::warning(&sold_out_message(request)),
        }
    }

    println!();
    print_chart(service.theater());
    output::detail(&format!("{} seats free", service.theater().available_count()));
    Ok(service)
}

#[instrument(skip(cli))]
fn run_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&format!("global: {}", path.display())),
                None => output::info("global: <no config directory>"),
            }
            if let Some(path) = &cli.config {
                output::info(&format!("file:   {}", path.display()));
            }
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use clap::Parser;

    #[test]
    fn test_missing_command_is_usage_error() {
        let cli = Cli::parse_from(["seatmap"]);
        let err = execute_command(&cli).unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn test_reserve_args_are_parsed() {
        let cli = Cli::parse_from(["seatmap", "reserve", "Alice:2", "Bob:4"]);
        match cli.command {
            Some(Commands::Reserve { requests }) => assert_eq!(
                requests,
                vec![
                    ReservationRequest::new("Alice", 2),
                    ReservationRequest::new("Bob", 4)
                ]
            ),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_reserve_rejects_malformed_request() {
        let res = Cli::try_parse_from(["seatmap", "reserve", "Alice"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_run_reserve_skips_sold_out_party_and_continues() {
        let theater = Theater::generate("Roxy", 2, 3, &BTreeSet::new()).unwrap();
        let requests = vec![
            ReservationRequest::new("Alice", 3),
            ReservationRequest::new("Bob", 4),
            ReservationRequest::new("Carol", 2),
        ];

        let service = run_reserve(theater, &requests).unwrap();

        let rows: Vec<String> = service.theater().rows().iter().map(|r| r.render()).collect();
        assert_eq!(rows, vec!["_ 1 X X X", "_ 2 X X _"]);
        assert_eq!(service.theater().available_count(), 1);
    }

    #[test]
    fn test_run_reserve_empty_customer_is_data_error() {
        let theater = Theater::generate("Roxy", 1, 2, &BTreeSet::new()).unwrap();
        let requests = vec![ReservationRequest::new("", 1)];

        let err = run_reserve(theater, &requests).unwrap_err();

        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn test_sold_out_message() {
        let request = ReservationRequest::new("Bob", 4);
        assert_eq!(sold_out_message(&request), "no row has 4 free seats for Bob");
    }
}
