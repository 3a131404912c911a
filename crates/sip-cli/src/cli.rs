//! Command definition and argument resolution

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use sip_core::{Preset, SipConfig};
use sip_engine::RuleSet;
use sip_model::{parse_input, Field, SipParameters};

/// Value arguments and the field each one sets
const FIELD_ARGS: [(&str, Field); 3] = [
    ("amount", Field::MonthlyContribution),
    ("rate", Field::AnnualGrowthRatePercent),
    ("years", Field::DurationYears),
];

pub(crate) fn command() -> Command {
    Command::new("sip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Systematic investment plan projection calculator")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("TOML or JSON file with defaults and validation policy"),
        )
        .arg(
            Arg::new("policy")
                .long("policy")
                .global(true)
                .help("Validation rule set: strict or standard"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(
            plan_args(Command::new("project"))
                .about("Validate inputs and print the projection")
                .arg(json_arg()),
        )
        .subcommand(
            plan_args(Command::new("validate"))
                .about("Validate inputs only")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("presets")
                .about("List quick-start presets with their projections")
                .arg(json_arg()),
        )
}

fn plan_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("amount")
            .long("amount")
            .allow_negative_numbers(true)
            .help("Monthly contribution, e.g. 5000 or ₹5,000"),
    )
    .arg(
        Arg::new("rate")
            .long("rate")
            .allow_negative_numbers(true)
            .help("Expected annual return in percent"),
    )
    .arg(
        Arg::new("years")
            .long("years")
            .allow_negative_numbers(true)
            .help("Investment duration in years"),
    )
    .arg(
        Arg::new("preset")
            .long("preset")
            .help("Start from a named preset (see `sip presets`)"),
    )
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

/// Config from `--config`, with `--policy` applied on top
pub(crate) fn load_config(matches: &ArgMatches) -> anyhow::Result<SipConfig> {
    let mut config = SipConfig::default();
    if let Some(path) = matches.get_one::<String>("config") {
        let context = || format!("loading config {path}");
        config = SipConfig::load(path).with_context(context)?;
    }

    if let Some(name) = matches.get_one::<String>("policy") {
        let rule_set: RuleSet = name.parse()?;
        config = config.with_rule_set(rule_set);
    }

    Ok(config)
}

/// Parameters from the preset (or `base`) with any field arguments applied
///
/// Field values go through the same text parsing as an input box, so an
/// unparseable value reaches the validator as a missing one.
pub(crate) fn resolve_params(
    matches: &ArgMatches,
    base: SipParameters,
) -> anyhow::Result<SipParameters> {
    let mut params = match matches.get_one::<String>("preset") {
        Some(name) => name.parse::<Preset>()?.parameters(),
        None => base,
    };

    for (arg, field) in FIELD_ARGS {
        if let Some(text) = matches.get_one::<String>(arg) {
            params = params.with(field, parse_input(text));
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project_matches(args: &[&str]) -> ArgMatches {
        let matches = command()
            .try_get_matches_from(std::iter::once("sip").chain(args.iter().copied()))
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        sub.clone()
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn missing_args_fall_back_to_base() {
        let sub = project_matches(&["project", "--rate", "8"]);
        let params = resolve_params(&sub, SipParameters::default()).unwrap();
        assert_eq!(params, SipParameters::new(5_000.0, 8.0, 10.0));
    }

    #[test]
    fn preset_then_overrides() {
        let sub = project_matches(&["project", "--preset", "premium", "--years", "30"]);
        let params = resolve_params(&sub, SipParameters::default()).unwrap();
        assert_eq!(params, SipParameters::new(25_000.0, 18.0, 30.0));
    }

    #[test]
    fn negative_values_are_accepted_as_input() {
        let sub = project_matches(&["validate", "--amount", "-100"]);
        let params = resolve_params(&sub, SipParameters::default()).unwrap();
        assert_eq!(params.monthly_contribution, -100.0);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let sub = project_matches(&["project", "--preset", "moonshot"]);
        assert!(resolve_params(&sub, SipParameters::default()).is_err());
    }

    #[test]
    fn policy_flag_overrides_config() {
        let matches = command()
            .try_get_matches_from(["sip", "--policy", "standard", "presets"])
            .unwrap();
        let config = load_config(&matches).unwrap();
        assert_eq!(config.policy, RuleSet::Standard.policy());
    }
}
