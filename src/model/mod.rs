//! Core data structures shared by every geometry format.
//!
//! - [`atom`] – Minimal atom representation with element symbol and Cartesian coordinates.
//! - [`molecule`] – The aggregate entity a decode produces and an encode consumes,
//!   plus the builder the parsers accumulate into.
//!
//! A [`Molecule`] is built by exactly one decode call and treated as immutable
//! afterwards; the codecs in [`crate::io`] only ever read it.
//!
//! [`Molecule`]: molecule::Molecule

pub mod atom;
pub mod molecule;
