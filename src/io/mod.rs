//! Line-oriented readers and writers for the supported geometry formats,
//! the [`Format`] codec set, and the [`CodecRegistry`] that dispatches
//! between them by content probing.
//!
//! [`CodecRegistry`]: registry::CodecRegistry

use std::fmt;
use std::io::{BufRead, Write};

use crate::model::molecule::Molecule;
use error::Error;

pub mod error;
pub mod registry;
pub mod units;
pub mod util;

pub mod orca;
pub mod turbomole;
pub mod xyz;

/// The geometry formats the converter understands.
///
/// Each variant is a complete codec: signature probing, decoding, output
/// token matching, and encoding. The set is closed; dispatch across it is
/// the registry's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xyz,
    Turbomole,
    Orca,
}

impl Format {
    /// Scans `reader` for this format's signature. Malformed content is
    /// never an error here; the probe simply returns false.
    pub fn can_decode<R: BufRead>(&self, reader: R) -> bool {
        match self {
            Format::Xyz => xyz::reader::probe(reader),
            Format::Turbomole => turbomole::reader::probe(reader),
            Format::Orca => orca::reader::probe(reader),
        }
    }

    /// Parses one molecule from `reader` according to this format.
    pub fn decode<R: BufRead>(&self, reader: R) -> Result<Molecule, Error> {
        match self {
            Format::Xyz => xyz::reader::read(reader),
            Format::Turbomole => turbomole::reader::read(reader),
            Format::Orca => orca::reader::read(reader),
        }
    }

    /// Returns true if `token` names this format as an output target.
    /// Tokens are case-sensitive closed sets: the full name, its lowercase
    /// form, and a single letter.
    pub fn can_encode(&self, token: &str) -> bool {
        match self {
            Format::Xyz => matches!(token, "XYZ" | "xyz" | "x"),
            Format::Turbomole => matches!(token, "TURBOMOLE" | "turbomole" | "t"),
            Format::Orca => matches!(token, "ORCA" | "orca" | "o"),
        }
    }

    /// Renders `molecule` to `writer` in this format.
    pub fn encode<W: Write>(&self, writer: W, molecule: &Molecule) -> Result<(), Error> {
        match self {
            Format::Xyz => xyz::writer::write(writer, molecule),
            Format::Turbomole => turbomole::writer::write(writer, molecule),
            Format::Orca => orca::writer::write(writer, molecule),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Xyz => write!(f, "XYZ"),
            Format::Turbomole => write!(f, "TURBOMOLE"),
            Format::Orca => write!(f, "ORCA"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Format::Xyz.to_string(), "XYZ");
        assert_eq!(Format::Turbomole.to_string(), "TURBOMOLE");
        assert_eq!(Format::Orca.to_string(), "ORCA");
    }

    #[test]
    fn output_tokens_are_case_sensitive_closed_sets() {
        assert!(Format::Xyz.can_encode("XYZ"));
        assert!(Format::Xyz.can_encode("xyz"));
        assert!(Format::Xyz.can_encode("x"));
        assert!(!Format::Xyz.can_encode("Xyz"));
        assert!(!Format::Xyz.can_encode("X"));
        assert!(!Format::Xyz.can_encode(""));

        assert!(Format::Turbomole.can_encode("TURBOMOLE"));
        assert!(Format::Turbomole.can_encode("turbomole"));
        assert!(Format::Turbomole.can_encode("t"));
        assert!(!Format::Turbomole.can_encode("tm"));
        assert!(!Format::Turbomole.can_encode("Turbomole"));

        assert!(Format::Orca.can_encode("ORCA"));
        assert!(Format::Orca.can_encode("orca"));
        assert!(Format::Orca.can_encode("o"));
        assert!(!Format::Orca.can_encode("orca "));
    }

    #[test]
    fn tokens_never_match_across_formats() {
        for token in ["XYZ", "xyz", "x"] {
            assert!(!Format::Turbomole.can_encode(token));
            assert!(!Format::Orca.can_encode(token));
        }
        for token in ["TURBOMOLE", "turbomole", "t"] {
            assert!(!Format::Xyz.can_encode(token));
            assert!(!Format::Orca.can_encode(token));
        }
    }
}
