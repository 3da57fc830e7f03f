//! Command-line front end for cake selection.
//!
//! Prints the cakes to average for a direction or axis.
//!
//! # Usage
//!
//! ```sh
//! cakes vertical --num-cakes 360
//! cakes top --num-cakes 72 --starting-angle -90
//! cakes --list
//! ```
//!
//! Set `RUST_LOG=trace` to see how every reference angle maps onto a cake.

use std::process;

use cakes_core::{AveragingType, UnknownAveragingType};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Direction or axis to average (top, right, bottom, left, vertical, horizontal).
    #[arg(value_name = "AVERAGING_TYPE", required_unless_present = "list")]
    averaging_type: Option<String>,

    /// Number of cakes the circle is split into.
    #[arg(
        short,
        long,
        value_name = "COUNT",
        default_value_t = 360,
        allow_negative_numbers = true
    )]
    num_cakes: i32,

    /// Angle in degrees at which cake 1 starts.
    #[arg(
        short,
        long,
        value_name = "DEGREES",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    starting_angle: i32,

    /// Print every averaging type with its reference angles and exit.
    #[arg(long)]
    list: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    }
}

/// Returns the text to print on stdout.
///
/// The error's message already lists every valid averaging type.
fn run(args: Args) -> Result<String, UnknownAveragingType> {
    let name = match args.averaging_type {
        Some(name) if !args.list => name,
        _ => return Ok(format_table()),
    };
    log::debug!(
        "resolving {name} over {} cakes starting at {} degrees",
        args.num_cakes,
        args.starting_angle
    );

    let cakes = cakes_core::resolve(&name, args.num_cakes, args.starting_angle)?;
    Ok(format_cakes(&cakes))
}

fn format_table() -> String {
    AveragingType::ALL
        .iter()
        .map(|ty| {
            let angles = ty
                .angles()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{ty}: {angles}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_cakes(cakes: &[i64]) -> String {
    cakes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_arguments() {
        let args = Args::try_parse_from(["cakes", "top", "-n", "72", "-s", "-90"]).unwrap();
        assert_eq!(args.averaging_type.as_deref(), Some("top"));
        assert_eq!(args.num_cakes, 72);
        assert_eq!(args.starting_angle, -90);
        assert!(!args.list);

        let args = Args::try_parse_from(["cakes", "vertical"]).unwrap();
        assert_eq!(args.num_cakes, 360);
        assert_eq!(args.starting_angle, 0);
    }

    #[test]
    fn test_list_needs_no_averaging_type() {
        let args = Args::try_parse_from(["cakes", "--list"]).unwrap();
        assert!(args.list);
        assert!(args.averaging_type.is_none());
        assert!(Args::try_parse_from(["cakes"]).is_err());
    }

    #[test]
    fn test_format_cakes() {
        let cakes = cakes_core::resolve("vertical", 360, 0).unwrap();
        assert_eq!(format_cakes(&cakes), "1, 2, 0, 181, 182, 180");
        assert_eq!(format_cakes(&[]), "");
    }

    #[test]
    fn test_run_prints_cakes_and_table() {
        let args = Args::try_parse_from(["cakes", "vertical"]).unwrap();
        assert_eq!(run(args).unwrap(), "1, 2, 0, 181, 182, 180");

        let args = Args::try_parse_from(["cakes", "--list"]).unwrap();
        let table = run(args).unwrap();
        assert_eq!(table.lines().count(), AveragingType::ALL.len());
        assert_eq!(table.lines().next(), Some("top: 0"));
        assert_eq!(table.lines().last(), Some("horizontal: 90, 270"));
    }

    #[test]
    fn test_run_unknown_lists_valid_names_once() {
        let args = Args::try_parse_from(["cakes", "diagonal"]).unwrap();
        let message = run(args).unwrap_err().to_string();
        assert_eq!(message.lines().count(), 1);
        for ty in AveragingType::ALL {
            assert_eq!(message.matches(ty.name()).count(), 1, "{message}");
        }
    }
}
