use bevy::prelude::*;

use crate::grid::WorldGrid;
use crate::tools::ToolType;

/// Cells previewed under the pointer for the active tool.
///
/// Rebuilt from scratch on every hover change; the previous set is always
/// dropped before the new one is computed.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct HoverHighlight {
    hovered: Option<(i32, i32)>,
    cells: Vec<(i32, i32)>,
    valid: bool,
}

impl HoverHighlight {
    pub fn hovered(&self) -> Option<(i32, i32)> {
        self.hovered
    }

    pub fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }

    /// Whether the previewed footprint can be placed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, x: i32, z: i32) -> bool {
        self.cells.contains(&(x, z))
    }

    /// Drop every highlighted cell. Returns the cells that were highlighted.
    pub fn clear(&mut self) -> Vec<(i32, i32)> {
        self.hovered = None;
        self.valid = false;
        std::mem::take(&mut self.cells)
    }

    /// Recompute the preview for `hovered`. Cells of the footprint that fall
    /// outside the grid are skipped. Returns the previously highlighted cells.
    pub fn update(
        &mut self,
        grid: &WorldGrid,
        hovered: Option<(i32, i32)>,
        tool: ToolType,
    ) -> Vec<(i32, i32)> {
        let previous = self.clear();
        let Some((hx, hz)) = hovered else {
            return previous;
        };

        let (size_x, size_z) = tool.footprint();
        self.hovered = Some((hx, hz));
        self.valid = grid.can_place(hx, hz, size_x, size_z);
        self.cells = (hx..hx.saturating_add(size_x))
            .flat_map(|x| (hz..hz.saturating_add(size_z)).map(move |z| (x, z)))
            .filter(|&(x, z)| grid.in_bounds(x, z))
            .collect();
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::placement::PlacementKind;

    fn grid() -> WorldGrid {
        WorldGrid::new(GridConfig::square(10, 2.0))
    }

    #[test]
    fn test_free_footprint_is_valid() {
        let grid = grid();
        let mut highlight = HoverHighlight::default();
        highlight.update(&grid, Some((2, 2)), ToolType::Building);
        assert!(highlight.is_valid());
        assert_eq!(highlight.cells(), &[(2, 2), (2, 3), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_occupied_cell_marks_whole_footprint_invalid() {
        let mut grid = grid();
        grid.place(3, 3, 1, 1, PlacementKind::Road).unwrap();
        let mut highlight = HoverHighlight::default();
        highlight.update(&grid, Some((2, 2)), ToolType::Building);
        assert!(!highlight.is_valid());
        assert_eq!(highlight.cells().len(), 4);
    }

    #[test]
    fn test_edge_footprint_skips_out_of_range_cells() {
        let grid = grid();
        let mut highlight = HoverHighlight::default();
        highlight.update(&grid, Some((9, 9)), ToolType::Building);
        assert!(!highlight.is_valid());
        assert_eq!(highlight.cells(), &[(9, 9)]);
    }

    #[test]
    fn test_hover_nothing_clears_everything() {
        let grid = grid();
        let mut highlight = HoverHighlight::default();
        highlight.update(&grid, Some((4, 4)), ToolType::Building);
        let cleared = highlight.update(&grid, None, ToolType::Building);
        assert_eq!(cleared.len(), 4);
        assert!(highlight.is_empty());
        assert_eq!(highlight.hovered(), None);
    }

    #[test]
    fn test_moving_hover_leaves_no_stale_cells() {
        let grid = grid();
        let mut highlight = HoverHighlight::default();
        highlight.update(&grid, Some((0, 0)), ToolType::Building);
        let cleared = highlight.update(&grid, Some((5, 5)), ToolType::Road);
        assert_eq!(cleared, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(highlight.cells(), &[(5, 5)]);
        assert!(!highlight.contains(0, 0));
    }

    #[test]
    fn test_hover_at_coordinate_limit_is_empty_and_invalid() {
        let grid = grid();
        let mut highlight = HoverHighlight::default();
        for hovered in [(i32::MAX, 0), (0, i32::MAX), (i32::MAX, i32::MAX)] {
            highlight.update(&grid, Some(hovered), ToolType::Building);
            assert_eq!(highlight.hovered(), Some(hovered));
            assert!(highlight.is_empty());
            assert!(!highlight.is_valid());
        }
    }
}
