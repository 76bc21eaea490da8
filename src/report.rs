/// External crates for the reporter
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

use crate::filterconfig::OutputFormat;
use crate::matcher::MatchResult;
use crate::suggest::AllowedChars;


/// The one result a run prints.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Found { address: String },
    Enable { chars: String },
    NotFound,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found { address } => write!(f, "Found: {}", address),
            Outcome::Enable { chars } => write!(f, "Enable: {}", chars),
            Outcome::NotFound => write!(f, "Not found"),
        }
    }
}


/// Picks the outcome: a unique match wins, then a non-empty suggestion set.
pub fn decide(matches: &MatchResult, allowed: &AllowedChars) -> Outcome {
    if let Some(address) = matches.unique() {
        Outcome::Found { address: address.to_string() }
    } else if !allowed.is_empty() {
        Outcome::Enable { chars: allowed.to_string() }
    } else {
        Outcome::NotFound
    }
}


/// Writes the outcome as a single line in the requested format.
///
/// # Errors
/// Returns any error raised by `out`.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{}", outcome),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, outcome)?;
            writeln!(out)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::addresses::AddressList;
    use crate::matcher::find_address;
    use crate::suggest::allowed_chars;

    fn outcome_for(prefix: &str, entries: &[&str]) -> Outcome {
        let mut addresses = AddressList::with_capacity(entries.len());
        for entry in entries {
            addresses.push(entry.to_string());
        }
        decide(&find_address(prefix, &addresses), &allowed_chars(prefix, &addresses))
    }

    fn render(outcome: &Outcome, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_outcome(&mut out, outcome, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn unique_match_beats_suggestions() {
        // BR also allows N here
        assert_eq!(
            outcome_for("BR", &["BRNO", "PRAGUE"]),
            Outcome::Found { address: "BRNO".into() }
        );
    }

    #[test]
    fn several_matches_fall_back_to_suggestions() {
        assert_eq!(
            outcome_for("B", &["BRNO", "BUDAPEST"]),
            Outcome::Enable { chars: "RU".into() }
        );
    }

    #[test]
    fn duplicate_exact_entries_are_not_found() {
        assert_eq!(outcome_for("BRNO", &["BRNO", "BRNO"]), Outcome::NotFound);
    }

    #[test]
    fn plain_lines() {
        assert_eq!(render(&Outcome::Found { address: "PRAGUE".into() }, OutputFormat::Plain), "Found: PRAGUE\n");
        assert_eq!(render(&Outcome::Enable { chars: "RU".into() }, OutputFormat::Plain), "Enable: RU\n");
        assert_eq!(render(&Outcome::NotFound, OutputFormat::Plain), "Not found\n");
    }

    #[test]
    fn json_lines() {
        assert_eq!(
            render(&Outcome::Found { address: "PRAGUE".into() }, OutputFormat::Json),
            "{\"outcome\":\"found\",\"address\":\"PRAGUE\"}\n"
        );
        assert_eq!(
            render(&Outcome::Enable { chars: "RU".into() }, OutputFormat::Json),
            "{\"outcome\":\"enable\",\"chars\":\"RU\"}\n"
        );
        assert_eq!(render(&Outcome::NotFound, OutputFormat::Json), "{\"outcome\":\"not_found\"}\n");
    }
}
