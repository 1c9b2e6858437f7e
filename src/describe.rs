//! Human-readable move locations.

use tracing::{instrument, warn};

/// Sentinel returned for cell indices outside the 3x3 grid.
pub const UNKNOWN_LOCATION: &str = "unknown";

/// Describes a cell index (0-8) as a column/row location.
///
/// Columns and rows are numbered 1-3, so `locate_move(4)` yields
/// `"col 2, row 2"`. Indices outside 0-8 yield the [`UNKNOWN_LOCATION`]
/// sentinel rather than a blank value.
#[instrument]
pub fn locate_move(cell: usize) -> String {
    if cell >= 9 {
        warn!(cell, "cell index outside the board");
        return UNKNOWN_LOCATION.to_string();
    }
    let col = cell % 3 + 1;
    let row = cell / 3 + 1;
    format!("col {col}, row {row}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_cells() {
        assert_eq!(locate_move(0), "col 1, row 1");
        assert_eq!(locate_move(2), "col 3, row 1");
        assert_eq!(locate_move(6), "col 1, row 3");
        assert_eq!(locate_move(8), "col 3, row 3");
    }

    #[test]
    fn test_center_cell() {
        assert_eq!(locate_move(4), "col 2, row 2");
    }

    #[test]
    fn test_all_cells_distinct() {
        let mut seen = std::collections::HashSet::new();
        for cell in 0..9 {
            assert!(seen.insert(locate_move(cell)));
        }
    }

    #[test]
    fn test_out_of_range_is_sentinel() {
        assert_eq!(locate_move(9), UNKNOWN_LOCATION);
        assert_eq!(locate_move(usize::MAX), UNKNOWN_LOCATION);
    }
}
