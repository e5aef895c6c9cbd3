//! Ordered codec lookup for decode probing and encode token matching.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::io::Format;
use crate::io::error::Error;

/// An ordered collection of codecs.
///
/// Lookups scan the codecs in registration order and return the first
/// match, so when two codecs both recognize a source the earlier one
/// wins. The [`Default`] registry holds XYZ, TURBOMOLE and ORCA in
/// that order.
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    codecs: Vec<Format>,
}

impl CodecRegistry {
    /// Creates a registry with an explicit codec order.
    pub fn new(codecs: Vec<Format>) -> Self {
        Self { codecs }
    }

    /// Probes `path` with each codec in order and returns the first
    /// one that recognizes the content, or `None` when no codec does.
    ///
    /// Every probe re-opens the file so each codec reads from the
    /// start. Failing to open the file is reported as an I/O error
    /// carrying the path.
    pub fn decoder_for(&self, path: &Path) -> Result<Option<Format>, Error> {
        for &format in &self.codecs {
            let file = File::open(path)
                .map_err(|source| Error::from_io(source, Some(path.to_path_buf())))?;
            if format.can_decode(BufReader::new(file)) {
                return Ok(Some(format));
            }
        }
        Ok(None)
    }

    /// Returns the first codec whose token set contains `token`, or
    /// `None` when the token names no registered format.
    pub fn encoder_for(&self, token: &str) -> Option<Format> {
        self.codecs.iter().copied().find(|format| format.can_encode(token))
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new(vec![Format::Xyz, Format::Turbomole, Format::Orca])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    #[test]
    fn recognizes_each_format_by_content() {
        let registry = CodecRegistry::default();

        let xyz = fixture("geoconv_registry_probe.xyz", "1\n\n H 0.0 0.0 0.0\n");
        let tm = fixture(
            "geoconv_registry_probe.coord",
            "$coord\n 1.0 1.0 1.0 h\n$end\n",
        );
        let orca = fixture(
            "geoconv_registry_probe.inp",
            "! hf\n*xyz 0 1\n H 1.0 1.0 1.0\n*\n",
        );

        assert_eq!(registry.decoder_for(&xyz).expect("probe"), Some(Format::Xyz));
        assert_eq!(
            registry.decoder_for(&tm).expect("probe"),
            Some(Format::Turbomole)
        );
        assert_eq!(
            registry.decoder_for(&orca).expect("probe"),
            Some(Format::Orca)
        );

        for path in [xyz, tm, orca] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn unrecognized_content_matches_no_codec() {
        let registry = CodecRegistry::default();
        let path = fixture("geoconv_registry_garbage.txt", "hello world\nno geometry\n");
        assert_eq!(registry.decoder_for(&path).expect("probe"), None);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn registration_order_breaks_probe_ties() {
        // Recognized by both the TURBOMOLE and the ORCA probe.
        let contents = "! $coord\n 1.0 2.0 3.0 h\n*xyz 0 1\n C 1.0 2.0 3.0\n$end\n";
        assert!(Format::Turbomole.can_decode(Cursor::new(contents)));
        assert!(Format::Orca.can_decode(Cursor::new(contents)));
        assert!(!Format::Xyz.can_decode(Cursor::new(contents)));

        let path = fixture("geoconv_registry_ambiguous.txt", contents);

        let default_order = CodecRegistry::default();
        assert_eq!(
            default_order.decoder_for(&path).expect("probe"),
            Some(Format::Turbomole)
        );

        let orca_first = CodecRegistry::new(vec![Format::Orca, Format::Turbomole]);
        assert_eq!(
            orca_first.decoder_for(&path).expect("probe"),
            Some(Format::Orca)
        );

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let registry = CodecRegistry::default();
        let path = std::env::temp_dir().join("geoconv_registry_missing.xyz");
        let result = registry.decoder_for(&path);
        assert!(matches!(result, Err(Error::Io { path: Some(_), .. })));
    }

    #[test]
    fn encoder_tokens_are_exact_matches() {
        let registry = CodecRegistry::default();

        assert_eq!(registry.encoder_for("XYZ"), Some(Format::Xyz));
        assert_eq!(registry.encoder_for("xyz"), Some(Format::Xyz));
        assert_eq!(registry.encoder_for("x"), Some(Format::Xyz));
        assert_eq!(registry.encoder_for("TURBOMOLE"), Some(Format::Turbomole));
        assert_eq!(registry.encoder_for("turbomole"), Some(Format::Turbomole));
        assert_eq!(registry.encoder_for("t"), Some(Format::Turbomole));
        assert_eq!(registry.encoder_for("ORCA"), Some(Format::Orca));
        assert_eq!(registry.encoder_for("orca"), Some(Format::Orca));
        assert_eq!(registry.encoder_for("o"), Some(Format::Orca));

        assert_eq!(registry.encoder_for("pdb"), None);
        assert_eq!(registry.encoder_for("X"), None);
        assert_eq!(registry.encoder_for(""), None);
    }
}
