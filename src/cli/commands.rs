use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{sample_org, OrgChart};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let chart = sample_org()?;

    match &cli.command {
        None => _headcount(&chart, &settings.focus),
        Some(Commands::Headcount { name }) => {
            _headcount(&chart, name.as_deref().unwrap_or(&settings.focus))
        }
        Some(Commands::Tree { name }) => _tree(&chart, name.as_deref()),
        Some(Commands::Over { amount, under }) => {
            _over(&chart, amount.unwrap_or(settings.threshold), under.as_deref())
        }
        Some(Commands::Depth { name }) => _depth(&chart, name),
        Some(Commands::Peers { first, second }) => _peers(&chart, first, second),
        Some(Commands::Reports { name }) => _reports(&chart, name),
        Some(Commands::Config) => _config(&settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// The two headcount lines: everyone, then the team of `name` (inclusive).
pub fn headcount_lines(chart: &OrgChart, name: &str) -> CliResult<[String; 2]> {
    let focus = chart.find_by_name(name)?;
    Ok([
        format!("Total employees: {}", chart.headcount(chart.root())?),
        format!("Employees Under {}: {}", name, chart.headcount(focus)?),
    ])
}

#[instrument(skip(chart))]
fn _headcount(chart: &OrgChart, name: &str) -> CliResult<()> {
    for line in headcount_lines(chart, name)? {
        output::info(&line);
    }
    Ok(())
}

#[instrument(skip(chart))]
fn _tree(chart: &OrgChart, name: Option<&str>) -> CliResult<()> {
    let tree = match name {
        Some(name) => chart.subtree_to_tree_string(chart.find_by_name(name)?)?,
        None => chart.to_tree_string(),
    };
    output::info(&tree);
    Ok(())
}

#[instrument(skip(chart))]
fn _over(chart: &OrgChart, amount: f64, under: Option<&str>) -> CliResult<()> {
    if amount.is_nan() {
        return Err(CliError::InvalidArgs("threshold must be a number".into()));
    }
    let start = match under {
        Some(name) => chart.find_by_name(name)?,
        None => chart.root(),
    };
    let matches = chart.employees_over(start, amount)?;
    output::header(&format!("Earning over {:.2}: {}", amount, matches.len()));
    for idx in matches {
        let employee = chart.employee(idx)?;
        match employee.salary {
            Some(salary) => output::detail(&format!("{employee}: {salary}")),
            None => output::detail(employee),
        }
    }
    Ok(())
}

#[instrument(skip(chart))]
fn _depth(chart: &OrgChart, name: &str) -> CliResult<()> {
    let idx = chart.find_by_name(name)?;
    let chain = chart
        .chain_of_command(idx)?
        .map(|boss| chart.employee(boss).map(|e| e.name.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    output::info(&chart.depth_to_root(idx)?);
    if !chain.is_empty() {
        output::detail(&format!("{} <- {}", name, chain.iter().join(" <- ")));
    }
    Ok(())
}

#[instrument(skip(chart))]
fn _peers(chart: &OrgChart, first: &str, second: &str) -> CliResult<()> {
    let a = chart.find_by_name(first)?;
    let b = chart.find_by_name(second)?;
    if chart.same_parent(a, b)? {
        output::success(&format!("{first} and {second} have the same boss"));
    } else {
        output::failure(&format!("{first} and {second} have different bosses"));
    }
    Ok(())
}

#[instrument(skip(chart))]
fn _reports(chart: &OrgChart, name: &str) -> CliResult<()> {
    let idx = chart.find_by_name(name)?;
    output::header(&format!(
        "{} direct reports: {}",
        name,
        chart.count_children(idx)?
    ));
    if let Some(node) = chart.get_node(idx) {
        for &child in node.children() {
            output::detail(chart.employee(child)?);
        }
    }
    Ok(())
}

fn _config(settings: &Settings) -> CliResult<()> {
    let rendered = settings
        .to_toml()
        .map_err(|e| CliError::Output(format!("render settings: {e}")))?;
    output::info(rendered.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_sample_org_when_counting_heads_then_matches_reference_output() {
        let chart = sample_org().unwrap();
        let lines = headcount_lines(&chart, "Craig").unwrap();
        assert_eq!(lines[0], "Total employees: 11");
        assert_eq!(lines[1], "Employees Under Craig: 3");
    }

    #[test]
    fn given_unknown_name_when_counting_heads_then_errors() {
        let chart = sample_org().unwrap();
        let err = headcount_lines(&chart, "Zed").unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_nan_threshold_when_listing_then_invalid_args() {
        let chart = sample_org().unwrap();
        let err = _over(&chart, f64::NAN, None).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgs(_)));
    }
}
