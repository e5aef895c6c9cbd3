use std::io::Write;

use crate::io::error::Error;
use crate::model::molecule::Molecule;

/// Writes an ORCA input skeleton: an empty `!` header, `*xyz` with the
/// charge always forced to 0 and the stored spin (1 when unset), one
/// record per atom at 14 fractional digits with the symbol uppercased,
/// and a closing `*` without a trailing newline. Neither the name nor
/// the description is round-tripped.
pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    writeln!(writer, "! ")?;
    writeln!(writer, "*xyz 0 {}", molecule.spin.unwrap_or(1))?;
    for atom in &molecule.atoms {
        writeln!(
            writer,
            " {}\t{:.14}\t{:.14}\t{:.14}",
            atom.symbol.to_uppercase(),
            atom.position[0],
            atom.position[1],
            atom.position[2]
        )?;
    }
    write!(writer, "*")?;
    Ok(())
}
