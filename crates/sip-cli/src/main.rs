//! `sip` command-line calculator
//!
//! Exit status is 0 on success, 1 when inputs fail validation and 2 on
//! usage or configuration errors.

mod cli;
mod report;

use anyhow::Context;
use clap::ArgMatches;
use report::{IssuesText, PresetReport, PresetsText, ProjectionText, Report};
use sip_core::{Preset, SipCalculator};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let matches = match cli::command().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(matches.get_flag("log-json"));

    match run(&matches) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    let config = cli::load_config(matches)?;
    let mut calc = SipCalculator::new(config).context("invalid configuration")?;
    let mut stdout = std::io::stdout().lock();

    match matches.subcommand() {
        Some(("project", sub)) => {
            let params = cli::resolve_params(sub, calc.config().defaults)?;
            let state = calc.set_parameters(params);
            let valid = state.is_valid();

            if sub.get_flag("json") {
                let report = Report {
                    valid,
                    params: state.params(),
                    issues: state.issues(),
                    result: valid.then(|| state.result()),
                };
                serde_json::to_writer_pretty(&mut stdout, &report)?;
                writeln!(stdout)?;
            } else if valid {
                let text = ProjectionText {
                    params: state.params(),
                    result: state.result(),
                };
                write!(stdout, "{text}")?;
            } else {
                write!(stdout, "{}", IssuesText(state.issues()))?;
            }

            Ok(exit_for(valid))
        }
        Some(("validate", sub)) => {
            let params = cli::resolve_params(sub, calc.config().defaults)?;
            let (issues, _) = calc.evaluate(&params);
            let valid = issues.is_empty();

            if sub.get_flag("json") {
                let report = Report {
                    valid,
                    params: &params,
                    issues: &issues,
                    result: None,
                };
                serde_json::to_writer_pretty(&mut stdout, &report)?;
                writeln!(stdout)?;
            } else {
                write!(stdout, "{}", IssuesText(&issues))?;
            }

            Ok(exit_for(valid))
        }
        Some(("presets", sub)) => {
            let mut rows = Vec::with_capacity(Preset::ALL.len());
            for preset in Preset::ALL {
                let (issues, result) = calc.evaluate(&preset.parameters());
                match result {
                    Some(result) => rows.push(PresetReport::new(preset, &result)),
                    None => tracing::warn!(
                        %preset,
                        issues = issues.len(),
                        "preset rejected by policy"
                    ),
                }
            }

            if sub.get_flag("json") {
                serde_json::to_writer_pretty(&mut stdout, &rows)?;
                writeln!(stdout)?;
            } else {
                write!(stdout, "{}", PresetsText(&rows))?;
            }

            Ok(ExitCode::SUCCESS)
        }
        _ => anyhow::bail!("unknown command"),
    }
}

fn exit_for(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    }
}
