use std::error;
use std::fmt;

/// Error type for failures when constructing a `Genome` from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGenome {
    /// A symbol was not part of the configured alphabet.
    InvalidSymbol(char),
}

impl fmt::Display for InvalidGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol(c) => write!(f, "Invalid symbol in genome: '{c}'"),
        }
    }
}

impl error::Error for InvalidGenome {}

/// Configuration errors raised before any population is generated.
///
/// All of these are fatal: a run never starts from an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Genome length must be at least 1
    ZeroGenomeLength,
    /// Population size must be at least 1
    ZeroPopulationSize,
    /// The alphabet has no symbols
    EmptyAlphabet,
    /// The ecosystem is shorter than the genome length
    EcosystemTooShort {
        ecosystem_length: usize,
        genome_length: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroGenomeLength => {
                write!(f, "Genome length must be greater than 0")
            }
            Self::ZeroPopulationSize => {
                write!(f, "Population size must be greater than 0")
            }
            Self::EmptyAlphabet => {
                write!(f, "Alphabet must contain at least one symbol")
            }
            Self::EcosystemTooShort {
                ecosystem_length,
                genome_length,
            } => {
                write!(
                    f,
                    "Ecosystem length {ecosystem_length} is shorter than genome length {genome_length}"
                )
            }
        }
    }
}

impl error::Error for ConfigError {}
