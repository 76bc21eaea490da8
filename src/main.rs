//! # Address Key Filter
//!
//! This file serves as the main module that initializes and links all other sub-modules.
//! Addresses are read from standard input and matched against a prefix given on the
//! command line. A run prints the unique matching address, the characters that may
//! extend the prefix, or `Not found`.


/// Modules included in the filter
mod filterconfig;
mod addresses;
mod matcher;
mod suggest;
mod report;



/// Internal imports from the application's modules
use filterconfig::{FilterConfig, OutputFormat};
use addresses::{load_addresses, normalize_prefix};
use matcher::find_address;
use suggest::allowed_chars;
use report::{decide, write_outcome, Outcome};


/// External crates for the filter
use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};


/// Filters addresses from standard input by prefix and suggests the next characters
#[derive(Parser, Debug)]
#[command(name = "keyfilter", version, long_about = None,
          override_usage = "keyfilter [PREFIX [OPTIONS]]",
          after_help = "The first argument is always the prefix, even when it starts with '-'.\n\
                        Pass \"\" as the prefix to use options without one, e.g. keyfilter \"\" --help.")]
struct Cli {
    /// Prefix to search for (case-insensitive); empty when omitted
    #[arg(value_name = "PREFIX", default_value = "")]
    prefix: OsString,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,

    /// Maximum number of addresses read from standard input
    #[arg(long, value_name = "N", default_value_t = filterconfig::MAX_ADDRESSES,
          value_parser = clap::value_parser!(u16).range(1..))]
    max_addresses: u16,

    /// Maximum length of an address in bytes; longer lines are truncated
    #[arg(long = "max-length", value_name = "N", default_value_t = filterconfig::MAX_ADDRESS_LENGTH,
          value_parser = clap::value_parser!(u16).range(1..))]
    max_address_length: u16,

    /// Report diagnostics on standard error
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Cli> for FilterConfig {
    fn from(cli: &Cli) -> Self {
        FilterConfig {
            max_addresses: usize::from(cli.max_addresses),
            max_address_length: usize::from(cli.max_address_length),
            output: if cli.json { OutputFormat::Json } else { OutputFormat::Plain },
            verbose: cli.verbose,
        }
    }
}


/// Moves the first argument behind `--` so clap always reads it as the prefix.
///
/// `keyfilter -v` therefore searches for `-V`, while `keyfilter "" -v`
/// turns on diagnostics.
fn prefix_first<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() > 1 {
        let prefix = args.remove(1);
        args.push(OsString::from("--"));
        args.push(prefix);
    }
    args
}


/// Runs one filtering pass from `input` to `out`.
///
/// # Arguments
/// - `input`: Source of newline-separated addresses.
/// - `out`: Destination of the single result line.
/// - `diag`: Destination of `--verbose` diagnostics, normally standard error.
/// - `raw_prefix`: The prefix as given on the command line, lossily decoded.
/// - `config`: Bounds, output format and verbosity.
///
/// # Returns
/// The `Outcome` that was written.
///
/// # Errors
/// Only I/O failures on `input` or `out` are reported. Diagnostics that
/// cannot be written are dropped.
fn run<R, W, E>(input: &mut R, out: &mut W, diag: &mut E, raw_prefix: &str, config: &FilterConfig) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    if config.verbose {
        match serde_json::to_string(config) {
            Ok(json) => { let _ = writeln!(diag, "Configuration: {}", json); }
            Err(e) => { let _ = writeln!(diag, "Failed to serialize configuration: {}", e); }
        }
    }

    let addresses = load_addresses(input, config).context("Failed to read addresses from standard input")?;
    let prefix = normalize_prefix(raw_prefix, config.max_address_length);

    let allowed = allowed_chars(&prefix, &addresses);
    let matches = find_address(&prefix, &addresses);

    if config.verbose {
        let _ = writeln!(diag, "Loaded {} address(es), prefix '{}'", addresses.len(), prefix);
        let _ = writeln!(diag, "Matches: {}, allowed {} character(s): '{}'", matches.count, allowed.len(), allowed);
    }

    let outcome = decide(&matches, &allowed);
    write_outcome(out, &outcome, config.output).context("Failed to write the result")?;
    Ok(outcome)
}


/// Main function of the filter.
///
/// Parses the command line, runs the filter over locked standard input and
/// prints exactly one result line. The exit status is success for every
/// outcome, `Not found` included.
fn main() -> Result<()> {
    let cli = Cli::parse_from(prefix_first(std::env::args_os()));
    let config = FilterConfig::from(&cli);
    let prefix = cli.prefix.to_string_lossy();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut stdin.lock(), &mut out, &mut io::stderr().lock(), &prefix, &config)?;
    out.flush().context("Failed to flush standard output")?;
    Ok(())
}
