//! Text and JSON rendering of calculator output

use serde::Serialize;
use sip_core::Preset;
use sip_model::{
    format_currency, format_rupees, round_money, FieldIssues, ProjectionResult, SipParameters,
};
use std::fmt;

/// Machine-readable output of `project` and `validate`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Report<'a> {
    pub(crate) valid: bool,
    pub(crate) params: &'a SipParameters,
    pub(crate) issues: &'a FieldIssues,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) result: Option<&'a ProjectionResult>,
}

/// One row of `presets --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PresetReport {
    pub(crate) name: &'static str,
    pub(crate) params: SipParameters,
    pub(crate) maturity_value: i64,
    pub(crate) total_principal: i64,
    pub(crate) total_growth: i64,
}

impl PresetReport {
    pub(crate) fn new(preset: Preset, result: &ProjectionResult) -> Self {
        Self {
            name: preset.label(),
            params: preset.parameters(),
            maturity_value: result.maturity_value,
            total_principal: result.total_principal,
            total_growth: result.total_growth,
        }
    }
}

/// Summary block, breakdown and the year-by-year table
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProjectionText<'a> {
    pub(crate) params: &'a SipParameters,
    pub(crate) result: &'a ProjectionResult,
}

impl fmt::Display for ProjectionText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { params, result } = *self;

        writeln!(f, "SIP projection")?;
        writeln!(
            f,
            "  Monthly SIP       {}",
            format_currency(params.monthly_contribution)
        )?;
        writeln!(
            f,
            "  Expected return   {}% p.a.",
            params.annual_growth_rate_percent
        )?;
        writeln!(f, "  Duration          {} years", params.duration_years)?;
        writeln!(f)?;

        amount_line(f, "Invested", result.total_principal)?;
        amount_line(f, "Est. returns", result.total_growth)?;
        amount_line(f, "Maturity value", result.maturity_value)?;
        if let Some(multiple) = result.wealth_multiple() {
            writeln!(f, "  Wealth multiple   {multiple:.2}x")?;
        }
        let shares = (result.invested_share(), result.returns_share());
        if let (Some(invested), Some(returns)) = shares {
            writeln!(
                f,
                "  Breakdown         {invested:.1}% invested, {returns:.1}% returns"
            )?;
        }
        if let Some(gain) = result.gain_percent() {
            writeln!(f, "  Gain              {gain:.1}%")?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Your monthly SIP of {} will grow to {} generating {} in returns.",
            format_currency(params.monthly_contribution),
            short(result.maturity_value),
            short(result.total_growth),
        )?;

        if result.yearly_points.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(
            f,
            "{:>6}  {:>16}  {:>16}  {:>16}",
            "Year", "Invested", "Returns", "Total"
        )?;
        for point in &result.yearly_points {
            writeln!(
                f,
                "{:>6}  {:>16}  {:>16}  {:>16}",
                point.year,
                format_rupees(point.principal_to_date),
                format_rupees(point.growth_to_date),
                format_rupees(point.total_to_date),
            )?;
        }
        Ok(())
    }
}

/// One line per issue, grouped by field
#[derive(Debug, Clone, Copy)]
pub(crate) struct IssuesText<'a>(pub(crate) &'a FieldIssues);

impl fmt::Display for IssuesText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "All inputs are valid.");
        }

        writeln!(f, "Invalid inputs:")?;
        for issue in self.0.iter() {
            writeln!(f, "  - {}: {}", issue.field.label(), issue.message)?;
        }
        Ok(())
    }
}

/// Table of presets with their maturity values
#[derive(Debug, Clone, Copy)]
pub(crate) struct PresetsText<'a>(pub(crate) &'a [PresetReport]);

impl fmt::Display for PresetsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<14}{:>12}{:>8}{:>8}{:>14}",
            "Preset", "Monthly", "Rate", "Years", "Maturity"
        )?;
        for row in self.0 {
            writeln!(
                f,
                "{:<14}{:>12}{:>7}%{:>8}{:>14}",
                row.name,
                format_rupees(round_money(row.params.monthly_contribution)),
                row.params.annual_growth_rate_percent,
                row.params.duration_years,
                short(row.maturity_value),
            )?;
        }
        Ok(())
    }
}

fn amount_line(f: &mut fmt::Formatter<'_>, label: &str, amount: i64) -> fmt::Result {
    writeln!(
        f,
        "  {label:<16}  {:<12} {}",
        short(amount),
        format_rupees(amount)
    )
}

#[allow(clippy::cast_precision_loss)]
fn short(amount: i64) -> String {
    format_currency(amount as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sip_engine::{project, validate};
    use sip_model::Field;

    #[test]
    fn projection_summary_for_reference_plan() {
        let params = SipParameters::new(5_000.0, 12.0, 10.0);
        let result = project(&params);
        let text = ProjectionText {
            params: &params,
            result: &result,
        }
        .to_string();

        assert!(text.contains("Monthly SIP       ₹5.00 K"));
        assert!(text.contains("  Invested          ₹6.00 L      ₹6,00,000"));
        assert!(text.contains("₹11,61,695"));
        let sentence = "will grow to ₹11.62 L generating ₹5.62 L in returns";
        assert!(text.contains(sentence));

        // one row per year
        let rows = text
            .lines()
            .filter(|l| l.trim_start().starts_with(char::is_numeric))
            .count();
        assert_eq!(rows, 10);
    }

    #[test]
    fn projection_shows_breakdown() {
        let params = SipParameters::new(5_000.0, 12.0, 10.0);
        let result = project(&params);
        let text = ProjectionText {
            params: &params,
            result: &result,
        }
        .to_string();

        let breakdown = "  Breakdown         51.6% invested, 48.4% returns\n";
        assert!(text.contains(breakdown));
        assert!(text.contains("  Gain              93.6%\n"));
    }

    #[test]
    fn issues_listed_by_field() {
        let issues = validate(&SipParameters::new(0.0, 12.0, 0.1));
        assert_eq!(
            IssuesText(&issues).to_string(),
            "Invalid inputs:\n  - SIP amount: SIP amount must be greater than zero\n  \
             - Duration: Duration must be at least 0.5 years\n"
        );
        assert!(issues.has(Field::MonthlyContribution));
    }

    #[test]
    fn no_issues_message() {
        assert_eq!(
            IssuesText(&FieldIssues::new()).to_string(),
            "All inputs are valid.\n"
        );
    }

    #[test]
    fn json_report_omits_missing_result() {
        let params = SipParameters::new(-1.0, 12.0, 10.0);
        let issues = validate(&params);
        let report = Report {
            valid: false,
            params: &params,
            issues: &issues,
            result: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json.get("result").is_none());
        assert_eq!(json["params"]["monthlyContribution"], -1.0);
    }

    #[test]
    fn presets_table_has_every_preset() {
        let rows: Vec<_> = Preset::ALL
            .iter()
            .map(|&preset| PresetReport::new(preset, &project(&preset.parameters())))
            .collect();
        let text = PresetsText(&rows).to_string();
        assert_eq!(text.lines().count(), Preset::ALL.len() + 1);
        assert!(text.contains("Moderate"));
        assert!(text.contains("₹11.62 L"));
    }
}
