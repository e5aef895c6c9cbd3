use std::io::BufRead;

use crate::io::{Format, error::Error, units, util};
use crate::model::{atom::MoleculeAtom, molecule::Molecule};

/// Parser position within a TURBOMOLE source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitHeader,
    Body,
    Done,
}

/// Reads a TURBOMOLE coord block.
///
/// The first line must contain `$coord`; without it nothing is parsed.
/// Body records carry coordinates in Bohr and are converted to Angstrom
/// as they are read. Any line containing a `$`-prefixed keyword closes
/// the block, but only once at least one atom has been read; everything
/// after the terminator is ignored.
pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let mut builder = Molecule::builder();
    let mut state = State::AwaitHeader;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        match state {
            State::AwaitHeader => {
                if line_no == 1 && line.contains("$coord") {
                    state = State::Body;
                }
            }
            State::Body => {
                if let Some(atom) = parse_record(&line, line_no)? {
                    builder.push_atom(atom);
                } else if is_keyword_line(&line) && !builder.atoms().is_empty() {
                    state = State::Done;
                }
            }
            State::Done => break,
        }
    }

    Ok(builder.build())
}

/// Checks for the TURBOMOLE signature: `$coord` on the first line, at
/// least one atom record, and a closing `$`-keyword line after it.
pub fn probe<R: BufRead>(reader: R) -> bool {
    let mut lines = reader.lines();

    let Some(Ok(first)) = lines.next() else {
        return false;
    };
    if !first.contains("$coord") {
        return false;
    }

    let mut seen_atom = false;
    for line in lines {
        let Ok(line) = line else {
            return false;
        };
        if is_record(&line) {
            seen_atom = true;
        } else if is_keyword_line(&line) && seen_atom {
            return true;
        }
    }
    false
}

/// Parses a `<x> <y> <z> <symbol>` record, converting Bohr to Angstrom.
fn parse_record(line: &str, line_no: usize) -> Result<Option<MoleculeAtom>, Error> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y, z, symbol] = tokens[..] else {
        return Ok(None);
    };
    if !util::is_coordinate(x)
        || !util::is_coordinate(y)
        || !util::is_coordinate(z)
        || !util::is_word(symbol)
    {
        return Ok(None);
    }
    let position = [
        units::bohr_to_angstrom(util::parse_coordinate(x, Format::Turbomole, line_no, "x")?),
        units::bohr_to_angstrom(util::parse_coordinate(y, Format::Turbomole, line_no, "y")?),
        units::bohr_to_angstrom(util::parse_coordinate(z, Format::Turbomole, line_no, "z")?),
    ];
    Ok(Some(MoleculeAtom::new(symbol, position)))
}

fn is_record(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens[..] {
        [x, y, z, symbol] => {
            util::is_coordinate(x)
                && util::is_coordinate(y)
                && util::is_coordinate(z)
                && util::is_word(symbol)
        }
        _ => false,
    }
}

/// A `$` immediately followed by a word character, anywhere on the line,
/// marks a keyword line; `$end` is the conventional terminator.
fn is_keyword_line(line: &str) -> bool {
    line.as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'$' && (pair[1].is_ascii_alphanumeric() || pair[1] == b'_'))
}
