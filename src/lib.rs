//! A pure Rust converter between molecular geometry file formats.
//! It decodes XYZ, TURBOMOLE coord, and ORCA input files into a shared
//! molecule model and re-encodes that model in any supported format,
//! recognizing the source format by content rather than by file name.
//!
//! # Features
//!
//! - **Content probing** — Sources are identified by their structural
//!   signature, so extensions and file names never matter
//! - **Three codecs** — XYZ, TURBOMOLE coord, and ORCA input geometry
//!   blocks, each with full decode and encode support
//! - **Lazy pipeline** — [`Converter::process`] decodes sources on
//!   demand and silently skips files no codec recognizes
//! - **Unit handling** — TURBOMOLE coordinates are converted between
//!   Bohr on disk and Ångström in the model
//!
//! # Quick Start
//!
//! ```
//! use geoconv::{Converter, Molecule, MoleculeAtom};
//!
//! // Build a water molecule in Ångström
//! let mut builder = Molecule::builder();
//! builder.name("water");
//! builder.push_atom(MoleculeAtom::new("O", [0.0, 0.0, 0.0]));
//! builder.push_atom(MoleculeAtom::new("H", [0.7586, 0.0, 0.5043]));
//! builder.push_atom(MoleculeAtom::new("H", [-0.7586, 0.0, 0.5043]));
//! let water = builder.build();
//!
//! // Render it in XYZ form
//! let converter = Converter::default();
//! let block = converter.encode(&water, "xyz")?;
//! assert!(block.starts_with("\t3\n\n O\t"));
//!
//! // The same molecule as a TURBOMOLE coord block, in Bohr
//! let coord = converter.encode(&water, "t")?;
//! assert!(coord.starts_with("$coord\n"));
//! assert!(coord.ends_with("$end"));
//! # Ok::<(), geoconv::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Format codecs (XYZ, TURBOMOLE, ORCA), the
//!   [`CodecRegistry`], and unit conversion helpers
//! - [`Converter`] — Conversion pipeline and output rendering
//!
//! # Data Types
//!
//! - [`Molecule`] — Decoded geometry with optional name, description,
//!   charge, and spin multiplicity
//! - [`MoleculeAtom`] — Single atom as an element symbol plus Cartesian
//!   coordinates in Ångström
//! - [`MoleculeBuilder`] — Incremental construction used by the decoders
//! - [`Format`] — The closed set of supported codecs
//! - [`CodecRegistry`] — Ordered, first-match codec dispatch
//! - [`Error`] — I/O, parse, and unsupported-output failures

mod convert;
mod model;

pub mod io;

pub use convert::{Conversions, Converter};

pub use io::Format;
pub use io::error::Error;
pub use io::registry::CodecRegistry;

pub use model::atom::MoleculeAtom;
pub use model::molecule::{Molecule, MoleculeBuilder};
