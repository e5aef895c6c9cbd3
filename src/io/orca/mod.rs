//! The ORCA input format: a `!` header line, free description text, a
//! `*xyz <charge> <spin>` geometry opener, then `<symbol> <x> <y> <z>`
//! records in Angstrom up to the closing `*`.

pub mod reader;
pub mod writer;
