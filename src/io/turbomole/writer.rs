use std::io::Write;

use crate::io::{error::Error, units};
use crate::model::molecule::Molecule;

/// Writes a TURBOMOLE coord block: the `$coord` header, one record per
/// atom with coordinates converted Angstrom to Bohr at 14 fractional
/// digits and the symbol lowercased, then a `$end` trailer without a
/// trailing newline.
pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    writeln!(writer, "$coord")?;
    for atom in &molecule.atoms {
        writeln!(
            writer,
            "\t{:.14}\t{:.14}\t{:.14}\t{}",
            units::angstrom_to_bohr(atom.position[0]),
            units::angstrom_to_bohr(atom.position[1]),
            units::angstrom_to_bohr(atom.position[2]),
            atom.symbol.to_lowercase()
        )?;
    }
    write!(writer, "$end")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::turbomole::reader;
    use crate::model::atom::MoleculeAtom;
    use std::io::Cursor;

    fn render(molecule: &Molecule) -> String {
        let mut buf = Vec::new();
        write(&mut buf, molecule).expect("write coord block");
        String::from_utf8(buf).expect("ascii output")
    }

    #[test]
    fn writes_exact_bytes_for_origin_atom() {
        let mut builder = Molecule::builder();
        builder.push_atom(MoleculeAtom::new("h", [0.0, 0.0, 0.0]));
        let expected =
            "$coord\n\t0.00000000000000\t0.00000000000000\t0.00000000000000\th\n$end";
        assert_eq!(render(&builder.build()), expected);
    }

    #[test]
    fn decoded_block_re_encodes_to_the_same_bytes() {
        let input = "$coord\n 0.00000000 0.00000000 0.00000000 h\n$end\n";
        let molecule = reader::read(Cursor::new(input)).expect("valid coord block");
        let expected =
            "$coord\n\t0.00000000000000\t0.00000000000000\t0.00000000000000\th\n$end";
        assert_eq!(render(&molecule), expected);
    }

    #[test]
    fn symbols_are_lowercased_and_coordinates_converted() {
        let mut builder = Molecule::builder();
        builder.push_atom(MoleculeAtom::new("HE", [0.529177, 0.0, -0.529177]));
        let rendered = render(&builder.build());
        assert!(rendered.contains(
            "\t1.00000000000000\t0.00000000000000\t-1.00000000000000\the\n"
        ));
    }

    #[test]
    fn writes_and_reads_roundtrip() {
        let mut builder = Molecule::builder();
        builder.push_atom(MoleculeAtom::new("o", [0.0, 0.0, 0.1173]));
        builder.push_atom(MoleculeAtom::new("h", [0.0, 0.7572, -0.4692]));
        builder.push_atom(MoleculeAtom::new("h", [0.0, -0.7572, -0.4692]));
        let molecule = builder.build();

        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write coord block");
        let parsed = reader::read(Cursor::new(buf)).expect("read back");

        assert_eq!(parsed.atom_count, molecule.atoms.len());
        assert_eq!(parsed.atoms.len(), molecule.atoms.len());
        for (a, b) in molecule.atoms.iter().zip(parsed.atoms.iter()) {
            assert_eq!(a.symbol, b.symbol);
            for k in 0..3 {
                assert!((a.position[k] - b.position[k]).abs() < 1e-10);
            }
        }
    }
}
