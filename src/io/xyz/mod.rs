//! The XYZ format: an atom count line, a comment line, then one
//! `<symbol> <x> <y> <z>` record per atom, coordinates in Angstrom.

pub mod reader;
pub mod writer;
