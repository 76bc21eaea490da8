/// External crates for the filter configuration
use serde::Serialize;


/// Maximum number of addresses consumed from standard input.
pub const MAX_ADDRESSES: u16 = 42;

/// Maximum length of one address (and of the prefix), in bytes.
pub const MAX_ADDRESS_LENGTH: u16 = 100;


/// How the single result line is written to standard output.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Plain,
    Json,
}


/// Represents the configuration for one filtering run.

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FilterConfig {
    pub max_addresses: usize,
    pub max_address_length: usize,
    pub output: OutputFormat,
    pub verbose: bool,
}


impl Default for FilterConfig {

    /// Provides the default values for `FilterConfig`.

    fn default() -> Self {
        Self {
            max_addresses: usize::from(MAX_ADDRESSES),
            max_address_length: usize::from(MAX_ADDRESS_LENGTH),
            output: OutputFormat::Plain,
            verbose: false,
        }
    }
}
