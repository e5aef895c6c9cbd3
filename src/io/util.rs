//! Token classification and record parsing shared by the format readers.
//!
//! The formats agree on what their fields look like even though the field
//! order differs: coordinates are fixed-point decimals, symbols are bare
//! words, counts are bare digit runs. Lines are matched structurally on
//! whitespace-split tokens, so leading or trailing whitespace never decides
//! whether a line is a record.

use super::{Format, error::Error};
use crate::model::atom::MoleculeAtom;

/// Returns true if `token` is a non-empty run of ASCII digits.
pub fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `token` has the fixed-point coordinate shape
/// `-?digits.digits`. Exponents, bare integers, and a bare fraction part
/// do not qualify.
pub fn is_coordinate(token: &str) -> bool {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    match unsigned.split_once('.') {
        Some((whole, frac)) => is_integer(whole) && is_integer(frac),
        None => false,
    }
}

/// Returns true if `token` is a word of ASCII alphanumerics or
/// underscores. Element symbols are never validated beyond this.
pub fn is_word(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Returns true if `line` has the `<symbol> <x> <y> <z>` record shape used
/// by the XYZ and ORCA bodies.
pub fn is_atom_record(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens[..] {
        [symbol, x, y, z] => {
            is_word(symbol) && is_coordinate(x) && is_coordinate(y) && is_coordinate(z)
        }
        _ => false,
    }
}

/// Parses a `<symbol> <x> <y> <z>` record with coordinates in Angstrom.
///
/// `Ok(None)` means the line does not have the record shape and the caller
/// should skip it; an error is returned only when a field with the right
/// shape fails numeric conversion.
pub fn parse_atom_record(
    line: &str,
    format: Format,
    line_no: usize,
) -> Result<Option<MoleculeAtom>, Error> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [symbol, x, y, z] = tokens[..] else {
        return Ok(None);
    };
    if !is_word(symbol) || !is_coordinate(x) || !is_coordinate(y) || !is_coordinate(z) {
        return Ok(None);
    }
    let position = [
        parse_coordinate(x, format, line_no, "x")?,
        parse_coordinate(y, format, line_no, "y")?,
        parse_coordinate(z, format, line_no, "z")?,
    ];
    Ok(Some(MoleculeAtom::new(symbol, position)))
}

/// Converts one coordinate token, reporting the axis on failure.
pub fn parse_coordinate(
    token: &str,
    format: Format,
    line_no: usize,
    axis: &str,
) -> Result<f64, Error> {
    token.parse::<f64>().map_err(|_| {
        Error::parse(
            format,
            line_no,
            format!("invalid {axis} coordinate in atom line"),
        )
    })
}
