/// One atom of a molecule: an element symbol and a Cartesian position.
///
/// The symbol is stored exactly as it appeared in the source, with no
/// chemical validation. Positions are always in Angstrom.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeAtom {
    pub symbol: String,
    pub position: [f64; 3],
}

impl MoleculeAtom {
    pub fn new(symbol: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            symbol: symbol.into(),
            position,
        }
    }
}
