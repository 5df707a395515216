#![forbid(unsafe_code)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use natureal_footprint::DomainKind;
use natureal_forms::{
    EnergyForm, FeedbackPolicy, Form, FormField, FormSession, PageFeedback, PersonalForm,
    TravelForm, WasteForm,
};
use tracing::{info, warn};

/// Feeds `field=value` lines into a fresh session for `domain`, printing
/// the recomputed footprint after each accepted line.
pub fn run(
    domain: DomainKind,
    input: impl BufRead,
    output: impl Write,
    policy: &FeedbackPolicy,
) -> Result<()> {
    match domain {
        DomainKind::Personal => drive::<PersonalForm>(input, output, policy),
        DomainKind::Travel => drive::<TravelForm>(input, output, policy),
        DomainKind::Energy => drive::<EnergyForm>(input, output, policy),
        DomainKind::Waste => drive::<WasteForm>(input, output, policy),
    }
}

fn drive<F: Form>(
    mut input: impl BufRead,
    mut output: impl Write,
    policy: &FeedbackPolicy,
) -> Result<()> {
    let domain = <F::Field as FormField>::DOMAIN;
    let mut session = FormSession::<F>::default();
    let fields: Vec<_> = <F::Field as FormField>::ALL.iter().map(|f| f.name()).collect();
    info!(%domain, fields = %fields.join(","), "session started");

    writeln!(output, "{domain}: {}", session.footprint())?;
    let mut buf = Vec::new();
    let mut lineno = 0usize;
    loop {
        buf.clear();
        if input
            .read_until(b'\n', &mut buf)
            .context("reading session input")?
            == 0
        {
            break;
        }
        lineno += 1;
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = lineno, error = %e, "skipping session input");
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match session.apply_line(trimmed) {
            Ok(footprint) => {
                let page = PageFeedback::new(domain, footprint, policy);
                write!(output, "{trimmed} -> {footprint} ({:.0}%)", page.gauge_percent)?;
                if let Some(hint) = page.suggestion {
                    write!(output, " {hint}")?;
                }
                writeln!(output)?;
            }
            Err(e) => warn!(line = lineno, error = %e, "skipping session input"),
        }
    }
    info!(%domain, updates = session.revision(), footprint = %session.footprint(), "session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_to_string(domain: DomainKind, script: &str) -> String {
        let mut out = Vec::new();
        run(domain, Cursor::new(script), &mut out, &FeedbackPolicy::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_travel_session_transcript() {
        let out = run_to_string(
            DomainKind::Travel,
            "carType=electric\nmileagePerYear=10000\n\n# flights\nflightsPerYear.long=2\n",
        );
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "travel: 0.00",
                "carType=electric -> 0.00 (0%)",
                "mileagePerYear=10000 -> 1000.00 (5000%)",
                "flightsPerYear.long=2 -> 1006.00 (5030%)",
            ]
        );
    }

    #[test]
    fn test_bad_lines_are_skipped() {
        let out = run_to_string(DomainKind::Waste, "bogus\nfoodWaste=1\nnope=2\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, ["waste: 2.00", "foodWaste=1 -> 5.00 (25%)"]);
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let mut out = Vec::new();
        let script: &[u8] = b"foodWaste=1\nfoodWaste=\xff\xfe\nfoodWaste=2\n";
        run(DomainKind::Waste, script, &mut out, &FeedbackPolicy::default()).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "waste: 2.00",
                "foodWaste=1 -> 5.00 (25%)",
                "foodWaste=2 -> 8.00 (40%)",
            ]
        );
    }

    #[test]
    fn test_personal_session_shows_suggestion() {
        let out = run_to_string(DomainKind::Personal, "householdSize=6\n");
        assert!(out.contains("householdSize=6 -> 13.00 (130%) Consider using"));
    }
}
