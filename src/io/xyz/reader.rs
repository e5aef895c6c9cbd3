use std::io::BufRead;

use crate::io::{Format, error::Error, util};
use crate::model::molecule::Molecule;

/// Parser position within an XYZ source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitCount,
    AwaitComment,
    AtomBody,
}

/// Reads an XYZ molecule.
///
/// The first line declares the atom count when it is a single integer
/// token; the second line is a comment and always consumed. Both
/// transitions happen unconditionally, so a malformed header does not
/// stop the body from being parsed. Body lines that are not atom records
/// are ignored.
pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let mut builder = Molecule::builder();
    let mut state = State::AwaitCount;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        match state {
            State::AwaitCount => {
                let tokens: Vec<&str> = line.split_whitespace().collect();
                if let [token] = tokens[..] {
                    if util::is_integer(token) {
                        let count = token.parse::<usize>().map_err(|_| {
                            Error::parse(Format::Xyz, line_no, "invalid atom count")
                        })?;
                        builder.declare_atom_count(count);
                    }
                }
                state = State::AwaitComment;
            }
            State::AwaitComment => {
                state = State::AtomBody;
            }
            State::AtomBody => {
                if let Some(atom) = util::parse_atom_record(&line, Format::Xyz, line_no)? {
                    builder.push_atom(atom);
                }
            }
        }
    }

    Ok(builder.build())
}

/// Checks for the XYZ signature: an integer count line, a comment line,
/// and at least one atom record somewhere after it.
pub fn probe<R: BufRead>(reader: R) -> bool {
    let mut lines = reader.lines();

    let Some(Ok(first)) = lines.next() else {
        return false;
    };
    let tokens: Vec<&str> = first.split_whitespace().collect();
    if !matches!(tokens[..], [token] if util::is_integer(token)) {
        return false;
    }

    let Some(Ok(_)) = lines.next() else {
        return false;
    };

    for line in lines {
        let Ok(line) = line else {
            return false;
        };
        if util::is_atom_record(&line) {
            return true;
        }
    }
    false
}
