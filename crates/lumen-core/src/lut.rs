//! 256-entry lookup tables

/// Maps an input sample value [0..255] to an output sample value [0..255].
pub type LookupTable = [u8; 256];

/// The identity mapping `i -> i`.
pub fn identity_lut() -> LookupTable {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = i as u8;
    }
    lut
}

/// Whether the table is non-decreasing.
pub fn is_monotone(lut: &LookupTable) -> bool {
    lut.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let lut = identity_lut();
        assert_eq!(lut[0], 0);
        assert_eq!(lut[128], 128);
        assert_eq!(lut[255], 255);
        assert!(is_monotone(&lut));
    }

    #[test]
    fn test_not_monotone() {
        let mut lut = identity_lut();
        lut[10] = 3;
        assert!(!is_monotone(&lut));
    }
}
