//! Bohr/Angstrom length conversion used by the TURBOMOLE format.

/// Length of one Bohr radius in Angstrom.
pub const BOHR_IN_ANGSTROM: f64 = 0.529177;

/// Converts a length in Bohr to Angstrom.
#[inline]
pub fn bohr_to_angstrom(value: f64) -> f64 {
    value * BOHR_IN_ANGSTROM
}

/// Converts a length in Angstrom to Bohr.
#[inline]
pub fn angstrom_to_bohr(value: f64) -> f64 {
    value / BOHR_IN_ANGSTROM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_are_mutually_inverse() {
        for v in [0.0, 1.0, -3.5, 0.529177, 12.345678901234] {
            assert!((angstrom_to_bohr(bohr_to_angstrom(v)) - v).abs() < 1e-12);
            assert!((bohr_to_angstrom(angstrom_to_bohr(v)) - v).abs() < 1e-12);
        }
    }

    #[test]
    fn one_bohr_in_angstrom() {
        assert!((bohr_to_angstrom(1.0) - 0.529177).abs() < 1e-15);
        assert!((angstrom_to_bohr(0.529177) - 1.0).abs() < 1e-15);
    }
}
