use super::atom::MoleculeAtom;

/// A molecular geometry together with the metadata the geometry formats
/// carry.
///
/// `atom_count` is the count as the source declared it: the XYZ header
/// value when one was present, otherwise the number of atom records seen.
/// A lying header is kept verbatim, so `atom_count` may differ from
/// `atoms.len()`; writers always derive the emitted count from the atom
/// list itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub name: String,
    pub description: String,
    pub atom_count: usize,
    pub charge: Option<i32>,
    pub spin: Option<u32>,
    pub atoms: Vec<MoleculeAtom>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MoleculeBuilder {
        MoleculeBuilder::default()
    }
}

/// Accumulates decoded fields and produces the finished [`Molecule`] in
/// one step once parsing is complete.
#[derive(Debug, Default)]
pub struct MoleculeBuilder {
    name: String,
    description: String,
    declared_atom_count: Option<usize>,
    charge: Option<i32>,
    spin: Option<u32>,
    atoms: Vec<MoleculeAtom>,
}

impl MoleculeBuilder {
    pub fn name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends `text` to the free-form description, without a separator.
    pub fn append_description(&mut self, text: &str) {
        self.description.push_str(text);
    }

    /// Records an atom count declared by a header line.
    pub fn declare_atom_count(&mut self, count: usize) {
        self.declared_atom_count = Some(count);
    }

    pub fn charge(&mut self, charge: i32) {
        self.charge = Some(charge);
    }

    pub fn spin(&mut self, spin: u32) {
        self.spin = Some(spin);
    }

    pub fn push_atom(&mut self, atom: MoleculeAtom) {
        self.atoms.push(atom);
    }

    #[inline]
    pub fn atoms(&self) -> &[MoleculeAtom] {
        &self.atoms
    }

    /// Builds the molecule. When no header declared an atom count, the
    /// count falls back to the number of atoms collected.
    pub fn build(self) -> Molecule {
        let atom_count = self.declared_atom_count.unwrap_or(self.atoms.len());
        Molecule {
            name: self.name,
            description: self.description,
            atom_count,
            charge: self.charge,
            spin: self.spin,
            atoms: self.atoms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_gives_default_molecule() {
        let molecule = Molecule::builder().build();
        assert_eq!(molecule, Molecule::new());
        assert_eq!(molecule.name, "");
        assert_eq!(molecule.description, "");
        assert_eq!(molecule.atom_count, 0);
        assert_eq!(molecule.charge, None);
        assert_eq!(molecule.spin, None);
        assert!(molecule.atoms.is_empty());
    }

    #[test]
    fn declared_count_wins_over_atom_list_length() {
        let mut builder = Molecule::builder();
        builder.declare_atom_count(5);
        builder.push_atom(MoleculeAtom::new("H", [0.0, 0.0, 0.0]));
        let molecule = builder.build();
        assert_eq!(molecule.atom_count, 5);
        assert_eq!(molecule.atoms.len(), 1);
    }

    #[test]
    fn count_falls_back_to_collected_atoms() {
        let mut builder = Molecule::builder();
        builder.push_atom(MoleculeAtom::new("C", [0.0, 0.0, 0.0]));
        builder.push_atom(MoleculeAtom::new("O", [1.2, 0.0, 0.0]));
        assert_eq!(builder.atoms().len(), 2);
        assert_eq!(builder.build().atom_count, 2);
    }

    #[test]
    fn atom_order_is_insertion_order() {
        let mut builder = Molecule::builder();
        for (i, symbol) in ["N", "C", "C", "O"].iter().enumerate() {
            builder.push_atom(MoleculeAtom::new(*symbol, [i as f64, 0.0, 0.0]));
        }
        let molecule = builder.build();
        let symbols: Vec<&str> = molecule.atoms.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, ["N", "C", "C", "O"]);
        assert_eq!(molecule.atoms[2].position, [2.0, 0.0, 0.0]);
    }

    #[test]
    fn metadata_fields_are_carried_through() {
        let mut builder = Molecule::builder();
        builder.name("benzene");
        builder.append_description("first");
        builder.append_description("second");
        builder.charge(-1);
        builder.spin(2);
        let molecule = builder.build();
        assert_eq!(molecule.name, "benzene");
        assert_eq!(molecule.description, "firstsecond");
        assert_eq!(molecule.charge, Some(-1));
        assert_eq!(molecule.spin, Some(2));
    }
}
