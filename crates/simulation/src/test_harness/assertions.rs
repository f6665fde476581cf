//! Assertion helpers for `TestCity` integration tests.

use super::TestCity;

impl TestCity {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert every cell of the rectangle is occupied.
    pub fn assert_occupied(&self, x: i32, z: i32, size_x: i32, size_z: i32) {
        for cx in x..x + size_x {
            for cz in z..z + size_z {
                assert!(
                    self.grid().is_occupied(cx, cz),
                    "Expected ({cx}, {cz}) to be occupied"
                );
            }
        }
    }

    /// Assert every cell of the rectangle is free.
    pub fn assert_free(&self, x: i32, z: i32, size_x: i32, size_z: i32) {
        for cx in x..x + size_x {
            for cz in z..z + size_z {
                assert!(
                    !self.grid().is_occupied(cx, cz),
                    "Expected ({cx}, {cz}) to be free"
                );
            }
        }
    }

    /// Assert the occupancy flags agree exactly with the placement list and
    /// that no two placements overlap.
    pub fn assert_consistent(&self) {
        let placements = self.placements();
        for (i, a) in placements.iter().enumerate() {
            for b in &placements[i + 1..] {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
        for (x, z, cell) in self.grid().cells() {
            let owned = placements.iter().any(|p| p.contains(x, z));
            assert_eq!(
                cell.occupied, owned,
                "Cell ({x}, {z}) occupied={} but owned={owned}",
                cell.occupied
            );
        }
    }

    pub fn assert_placement_count(&self, expected: usize) {
        let count = self.placements().len();
        assert_eq!(count, expected, "Expected {expected} placements, got {count}");
    }
}
