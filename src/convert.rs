//! Lazy conversion pipeline over a list of candidate source files.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::slice;

use crate::io::error::Error;
use crate::io::registry::CodecRegistry;
use crate::model::molecule::Molecule;

/// Drives conversions through a [`CodecRegistry`].
///
/// [`Converter::process`] walks source files and decodes each one with
/// the first codec that recognizes it; [`Converter::encode`] renders a
/// decoded [`Molecule`] into the format named by an output token.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    registry: CodecRegistry,
}

impl Converter {
    /// Creates a converter backed by `registry`.
    pub fn new(registry: CodecRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry used for probing and token lookup.
    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    /// Returns a lazy iterator over the decoded molecules of `sources`.
    ///
    /// Without `batch` only the first source is considered; with it
    /// every source is visited in order. Sources no codec recognizes
    /// are skipped without an item, while I/O failures and fatal parse
    /// errors surface as `Err` items so the caller decides whether to
    /// continue.
    pub fn process<'a>(&'a self, sources: &'a [PathBuf], batch: bool) -> Conversions<'a> {
        let window = if batch {
            sources
        } else {
            &sources[..sources.len().min(1)]
        };
        Conversions {
            registry: &self.registry,
            sources: window.iter(),
        }
    }

    /// Renders `molecule` in the format named by `token`.
    ///
    /// Returns [`Error::UnsupportedOutputFormat`] when no registered
    /// codec claims the token, leaving nothing written.
    pub fn encode(&self, molecule: &Molecule, token: &str) -> Result<String, Error> {
        let format = self
            .registry
            .encoder_for(token)
            .ok_or_else(|| Error::UnsupportedOutputFormat(token.to_string()))?;
        let mut buffer = Vec::new();
        format.encode(&mut buffer, molecule)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Iterator returned by [`Converter::process`].
///
/// Each call probes the next source against the registry and decodes
/// it on a match, so no file is opened before its item is requested.
#[derive(Debug)]
pub struct Conversions<'a> {
    registry: &'a CodecRegistry,
    sources: slice::Iter<'a, PathBuf>,
}

impl Iterator for Conversions<'_> {
    type Item = Result<Molecule, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = self.sources.next()?;
            match self.registry.decoder_for(path) {
                Ok(Some(format)) => {
                    let file = match File::open(path) {
                        Ok(file) => file,
                        Err(source) => {
                            return Some(Err(Error::from_io(source, Some(path.clone()))));
                        }
                    };
                    return Some(
                        format
                            .decode(BufReader::new(file))
                            .map_err(|error| error.with_path(path)),
                    );
                }
                Ok(None) => continue,
                Err(error) => return Some(Err(error)),
            }
        }
    }
}
