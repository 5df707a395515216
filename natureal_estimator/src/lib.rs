#![forbid(unsafe_code)]

//! Command-line front end for the Natureal footprint estimator.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use natureal_footprint::{Dashboard, SampleCategories};
use natureal_forms::recommendations::{greeting, random_tip, CATEGORY_TIPS};
use rand::Rng;
use tracing::info;

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
pub mod session;

pub use cli::Command;
pub use config::EstimatorConfig;
pub use report::{EstimateReport, EstimateRequest};

/// Executes one command, writing its result to `out`.
pub fn execute(
    command: Command,
    config: &EstimatorConfig,
    input: impl BufRead,
    mut out: impl Write,
    rng: &mut impl Rng,
) -> Result<()> {
    match command {
        Command::Help => write!(out, "{}", cli::USAGE)?,
        Command::Estimate { inputs, json } => {
            let raw = std::fs::read_to_string(&inputs)
                .with_context(|| format!("reading inputs {}", inputs.display()))?;
            let request: EstimateRequest = serde_json::from_str(&raw)
                .with_context(|| format!("parsing inputs {}", inputs.display()))?;
            let report = EstimateReport::build(request, &config.feedback_policy());
            info!(
                path = %inputs.display(),
                total = report.dashboard.total,
                "estimated footprint"
            );
            if json || config.json_output {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", report::render_estimate(&report))?;
            }
        }
        Command::Dashboard { json } => {
            let dashboard = Dashboard::build(&SampleCategories(config.dashboard));
            if json || config.json_output {
                serde_json::to_writer_pretty(&mut out, &dashboard)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", report::render_dashboard(&dashboard))?;
            }
        }
        Command::Session { domain } => {
            session::run(domain, input, out, &config.feedback_policy())?;
        }
        Command::Tip { name } => {
            let tip = random_tip(rng);
            writeln!(out, "{}", greeting(name.as_deref(), tip))?;
        }
        Command::Tips => {
            for section in &CATEGORY_TIPS {
                writeln!(out, "{}", section.category.label())?;
                for tip in section.tips {
                    writeln!(out, "  - {tip}")?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use natureal_forms::recommendations::ECO_FRIENDLY_TIPS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn run(command: Command, config: &EstimatorConfig) -> String {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        execute(command, config, Cursor::new(""), &mut out, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tip_greets_by_name() {
        let out = run(
            Command::Tip {
                name: Some("Sam".into()),
            },
            &EstimatorConfig::default(),
        );
        let tip = out.trim_end().strip_prefix("Hey Sam, ").unwrap();
        assert!(ECO_FRIENDLY_TIPS.contains(&tip));
    }

    #[test]
    fn test_tips_lists_every_category() {
        let out = run(Command::Tips, &EstimatorConfig::default());
        assert_eq!(out.lines().count(), 4 * 5);
        assert!(out.starts_with("Personal\n  - Switch to a plant-based diet for some meals\n"));
    }

    #[test]
    fn test_dashboard_json_uses_configured_values() {
        let config = EstimatorConfig::from_json(
            r#"{"dashboard": {"personal": 1, "travel": 1, "energy": 1, "waste": 1}}"#,
        )
        .unwrap();
        let out = run(Command::Dashboard { json: true }, &config);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total"], 4.0);
        assert_eq!(value["pie"][0]["share"], 0.25);
    }

    #[test]
    fn test_estimate_missing_file_is_an_error() {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        let err = execute(
            Command::Estimate {
                inputs: "/nonexistent/inputs.json".into(),
                json: false,
            },
            &EstimatorConfig::default(),
            Cursor::new(""),
            &mut out,
            &mut rng,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("reading inputs"));
    }

    #[test]
    fn test_help() {
        let out = run(Command::Help, &EstimatorConfig::default());
        assert!(out.starts_with("usage: natureal"));
    }
}
