//! The TURBOMOLE coord format: a `$coord` header, `<x> <y> <z> <symbol>`
//! records with coordinates in Bohr, and a `$`-keyword terminator line.

pub mod reader;
pub mod writer;
