//! Row address register
//!
//! Four address lines (A..D) select one of 16 row-pairs. Pair `n` drives
//! physical row `n` in the top half and row `n + 16` in the bottom half.

/// Number of row-pairs the address lines can select
pub const ROW_PAIRS: u8 = 16;

/// Active row-pair index in `0..16`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowAddress(u8);

impl RowAddress {
    /// Create from a zero-based row-pair index
    ///
    /// # Panics
    /// If `index >= 16`.
    pub fn new(index: u8) -> Self {
        assert!(index < ROW_PAIRS, "row-pair index {} out of range", index);
        Self(index)
    }

    /// Convert the 1-based row number used by `select_row` callers
    ///
    /// Stores `(row - 1) mod 16`. Row 1 is pair 0, row 16 is pair 15,
    /// row 17 wraps back to pair 0 and row 0 wraps to pair 15.
    pub const fn from_one_based(row: u8) -> Self {
        Self(row.wrapping_sub(1) & (ROW_PAIRS - 1))
    }

    /// The 1-based row number that selects this pair
    pub const fn one_based(self) -> u8 {
        self.0 + 1
    }

    /// Zero-based row-pair index
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Physical row in the top half
    pub const fn top(self) -> usize {
        self.0 as usize
    }

    /// Physical row in the bottom half
    pub const fn bottom(self) -> usize {
        self.0 as usize + ROW_PAIRS as usize
    }

    /// All row-pairs in scan order
    pub fn all() -> impl Iterator<Item = RowAddress> {
        (0..ROW_PAIRS).map(RowAddress)
    }
}

impl From<RowAddress> for u8 {
    fn from(addr: RowAddress) -> u8 {
        addr.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_offset() {
        assert_eq!(RowAddress::from_one_based(1).index(), 0);
        assert_eq!(RowAddress::from_one_based(2).index(), 1);
        assert_eq!(RowAddress::from_one_based(16).index(), 15);
    }

    #[test]
    fn test_wraps_modulo_16() {
        assert_eq!(RowAddress::from_one_based(17), RowAddress::from_one_based(1));
        assert_eq!(RowAddress::from_one_based(33).index(), 0);
        assert_eq!(RowAddress::from_one_based(0).index(), 15);
        assert_eq!(RowAddress::from_one_based(255).index(), 14);
    }

    #[test]
    fn test_round_trip_one_based() {
        for addr in RowAddress::all() {
            assert_eq!(RowAddress::from_one_based(addr.one_based()), addr);
        }
    }

    #[test]
    fn test_top_and_bottom_rows() {
        let addr = RowAddress::new(5);
        assert_eq!(addr.top(), 5);
        assert_eq!(addr.bottom(), 21);
    }

    #[test]
    fn test_scan_order() {
        let mut expected = 0;
        for addr in RowAddress::all() {
            assert_eq!(addr.index(), expected);
            expected += 1;
        }
        assert_eq!(expected, 16);
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_out_of_range() {
        RowAddress::new(16);
    }
}
