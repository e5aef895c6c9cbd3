use std::io::BufRead;

use crate::io::{Format, error::Error, util};
use crate::model::molecule::Molecule;

/// Parser position within an ORCA input. Capturing charge and spin and
/// leaving the description happen on the same geometry-opening line, so
/// the opener is an edge here, not a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    Description,
    AtomBody,
}

/// Reads an ORCA input file.
///
/// The first line must start with `!`; its remaining text, trimmed,
/// becomes the molecule name. Lines before the `*xyz <charge> <spin>`
/// opener accumulate into the description with newlines stripped. After
/// the opener, record lines append atoms until end of input; the
/// conventional trailing `*` is simply ignored.
pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let mut builder = Molecule::builder();
    let mut state = State::Header;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        match state {
            State::Header => {
                if line_no == 1 && line.starts_with('!') {
                    builder.name(line[1..].trim());
                    state = State::Description;
                }
            }
            State::Description => {
                if let Some((charge, spin)) = parse_geometry_open(&line, line_no)? {
                    builder.charge(charge);
                    builder.spin(spin);
                    state = State::AtomBody;
                } else {
                    builder.append_description(&line);
                }
            }
            State::AtomBody => {
                if let Some(atom) = util::parse_atom_record(&line, Format::Orca, line_no)? {
                    builder.push_atom(atom);
                }
            }
        }
    }

    Ok(builder.build())
}

/// Checks for the ORCA signature: a `!` header line, a geometry-opening
/// line, and at least one atom record after it.
pub fn probe<R: BufRead>(reader: R) -> bool {
    let mut lines = reader.lines();

    let Some(Ok(first)) = lines.next() else {
        return false;
    };
    if !first.starts_with('!') {
        return false;
    }

    let mut opened = false;
    for line in lines {
        let Ok(line) = line else {
            return false;
        };
        if !opened {
            opened = is_geometry_open(&line);
        } else if util::is_atom_record(&line) {
            return true;
        }
    }
    false
}

/// Recognizes `*xyz <charge> <spin>`: no leading whitespace, exactly
/// three tokens. Once the shape matches, both fields must parse as
/// integers.
fn parse_geometry_open(line: &str, line_no: usize) -> Result<Option<(i32, u32)>, Error> {
    if !is_geometry_open(line) {
        return Ok(None);
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let charge = tokens[1]
        .parse::<i32>()
        .map_err(|_| Error::parse(Format::Orca, line_no, "invalid charge in geometry header"))?;
    let spin = tokens[2].parse::<u32>().map_err(|_| {
        Error::parse(
            Format::Orca,
            line_no,
            "invalid spin multiplicity in geometry header",
        )
    })?;
    Ok(Some((charge, spin)))
}

fn is_geometry_open(line: &str) -> bool {
    if !line.starts_with("*xyz") {
        return false;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    matches!(tokens[..], ["*xyz", _, _])
}
