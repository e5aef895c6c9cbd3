use std::io::Write;

use crate::io::error::Error;
use crate::model::molecule::Molecule;

/// Writes the XYZ form: the atom count, a blank comment line, then one
/// tab-separated record per atom at 14 fractional digits with the symbol
/// uppercased. The emitted count is always `atoms.len()`, never the
/// stored header value.
pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    writeln!(writer, "\t{}", molecule.atoms.len())?;
    writeln!(writer)?;
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
    Ok(())
}
