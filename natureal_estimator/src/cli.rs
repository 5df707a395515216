#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Result};
use natureal_footprint::DomainKind;
use natureal_forms::parse_domain;

pub const USAGE: &str = "\
usage: natureal <command>

commands:
  estimate <inputs.json> [--json]   footprints, hints and dashboard for a filled-in form
  dashboard [--json]                dashboard from the configured sample values
  session <domain>                  read field=value lines from stdin, recompute after each
  tip [name]                        draw a random eco tip
  tips                              list recommendations per category
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Estimate { inputs: PathBuf, json: bool },
    Dashboard { json: bool },
    Session { domain: DomainKind },
    Tip { name: Option<String> },
    Tips,
    Help,
}

impl Command {
    /// Parses arguments after the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let json = args.iter().any(|a| a == "--json");
        let positional: Vec<&str> = args
            .iter()
            .map(String::as_str)
            .filter(|a| *a != "--json")
            .collect();

        let command = match positional.as_slice() {
            [] | ["help"] | ["-h"] | ["--help"] => Command::Help,
            ["estimate", path] => Command::Estimate {
                inputs: PathBuf::from(*path),
                json,
            },
            ["estimate"] => bail!("estimate needs an inputs file"),
            ["dashboard"] => Command::Dashboard { json },
            ["session", domain] => Command::Session {
                domain: parse_domain(domain)?,
            },
            ["session"] => bail!("session needs a domain: personal, travel, energy or waste"),
            ["tip"] => Command::Tip { name: None },
            ["tip", name @ ..] => Command::Tip {
                name: Some(name.join(" ")),
            },
            ["tips"] => Command::Tips,
            other => bail!("unrecognized arguments: {}", other.join(" ")),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(Vec::<String>::new()).unwrap(), Command::Help);
        assert_eq!(
            Command::parse(["estimate", "me.json", "--json"]).unwrap(),
            Command::Estimate {
                inputs: PathBuf::from("me.json"),
                json: true
            }
        );
        assert_eq!(
            Command::parse(["dashboard"]).unwrap(),
            Command::Dashboard { json: false }
        );
        assert_eq!(
            Command::parse(["session", "Travel"]).unwrap(),
            Command::Session {
                domain: DomainKind::Travel
            }
        );
        assert_eq!(
            Command::parse(["tip", "Mary", "Jane"]).unwrap(),
            Command::Tip {
                name: Some("Mary Jane".into())
            }
        );
        assert_eq!(Command::parse(["tips"]).unwrap(), Command::Tips);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse(["estimate"]).is_err());
        assert!(Command::parse(["session"]).is_err());
        let err = Command::parse(["session", "dashboard"]).unwrap_err();
        assert!(err.to_string().contains("dashboard"));
        assert!(Command::parse(["frobnicate"]).is_err());
    }
}
