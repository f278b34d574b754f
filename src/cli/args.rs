//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Org chart queries over the sample hierarchy: headcounts, chain of command and salaries
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print total headcount and the headcount under one employee
    Headcount {
        /// Employee whose team is counted (default: configured focus)
        name: Option<String>,
    },

    /// Show hierarchy as tree
    Tree {
        /// Subtree root (default: top of the chart)
        name: Option<String>,
    },

    /// List employees earning strictly more than AMOUNT
    Over {
        /// Salary threshold (default: configured threshold)
        #[arg(allow_negative_numbers = true)]
        amount: Option<f64>,
        /// Only search below this employee
        #[arg(short, long)]
        under: Option<String>,
    },

    /// Number of levels between an employee and the top
    Depth {
        /// Employee name
        name: String,
    },

    /// Check whether two employees report to the same boss
    Peers {
        /// First employee
        first: String,
        /// Second employee
        second: String,
    },

    /// List direct reports
    Reports {
        /// Employee name
        name: String,
    },

    /// Show merged settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_negative_threshold_when_parsing_over_then_accepts_it() {
        let cli = Cli::try_parse_from(["orgtree", "over", "-5"]).unwrap();
        match cli.command {
            Some(Commands::Over { amount, under }) => {
                assert_eq!(amount, Some(-5.0));
                assert_eq!(under, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_negative_threshold_and_filter_when_parsing_over_then_keeps_both() {
        let cli = Cli::try_parse_from(["orgtree", "over", "-0.5", "--under", "Craig"]).unwrap();
        match cli.command {
            Some(Commands::Over { amount, under }) => {
                assert_eq!(amount, Some(-0.5));
                assert_eq!(under.as_deref(), Some("Craig"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
