#[cfg(test)]
mod tests {
    use bevy::math::{Dir3, Ray3d, Vec2, Vec3};
    use bevy::prelude::KeyCode;

    use simulation::config::GridConfig;
    use simulation::grid::WorldGrid;
    use simulation::tools::ToolType;

    use super::super::{ground_hit, tool_for_key, CursorGridPos, GROUND_PICK_HEIGHT};

    fn ray(origin: Vec3, direction: Vec3) -> Ray3d {
        Ray3d {
            origin,
            direction: Dir3::new(direction).unwrap(),
        }
    }

    #[test]
    fn test_straight_down_ray_hits_below_origin() {
        let hit = ground_hit(ray(Vec3::new(4.0, 10.0, 6.0), Vec3::NEG_Y), GROUND_PICK_HEIGHT)
            .unwrap();
        assert!((hit - Vec3::new(4.0, GROUND_PICK_HEIGHT, 6.0)).length() < 1e-5);
    }

    #[test]
    fn test_ray_pointing_up_misses() {
        assert!(ground_hit(ray(Vec3::new(0.0, 10.0, 0.0), Vec3::Y), 0.0).is_none());
    }

    #[test]
    fn test_horizontal_ray_misses() {
        assert!(ground_hit(ray(Vec3::new(0.0, 10.0, 0.0), Vec3::X), 0.0).is_none());
    }

    #[test]
    fn test_oblique_ray_maps_to_expected_cell() {
        let grid = WorldGrid::new(GridConfig::square(100, 2.0));
        // From (10, 10, 10) heading down at 45 degrees along +x.
        let hit = ground_hit(ray(Vec3::new(10.0, 10.1, 10.0), Vec3::new(1.0, -1.0, 0.0)), 0.1)
            .unwrap();
        assert!((hit.x - 20.0).abs() < 1e-4);
        assert_eq!(grid.world_to_cell(hit.x, hit.z), Some((10, 5)));
    }

    #[test]
    fn test_hit_off_grid_has_no_cell() {
        let grid = WorldGrid::new(GridConfig::square(10, 2.0));
        let hit = ground_hit(ray(Vec3::new(-30.0, 5.0, 4.0), Vec3::NEG_Y), 0.0).unwrap();
        assert_eq!(grid.world_to_cell(hit.x, hit.z), None);
    }

    #[test]
    fn test_number_keys_select_tools() {
        assert_eq!(tool_for_key(KeyCode::Digit1), Some(ToolType::Building));
        assert_eq!(tool_for_key(KeyCode::Digit2), Some(ToolType::Road));
        assert_eq!(tool_for_key(KeyCode::Numpad2), Some(ToolType::Road));
        assert_eq!(tool_for_key(KeyCode::Digit3), None);
    }

    #[test]
    fn test_motion_inside_one_cell_is_reported() {
        let before = CursorGridPos {
            screen_pos: Some(Vec2::new(100.0, 100.0)),
            cell: Some((5, 5)),
        };
        let nudged = CursorGridPos {
            screen_pos: Some(Vec2::new(101.0, 100.0)),
            cell: Some((5, 5)),
        };
        assert!(before.moved_to(&nudged));
        assert!(!nudged.moved_to(&nudged));
    }

    #[test]
    fn test_cell_change_under_still_pointer_is_reported() {
        let before = CursorGridPos {
            screen_pos: Some(Vec2::new(100.0, 100.0)),
            cell: Some((5, 5)),
        };
        let panned = CursorGridPos {
            cell: Some((6, 5)),
            ..before
        };
        assert!(before.moved_to(&panned));
    }

    #[test]
    fn test_leaving_window_is_reported() {
        let before = CursorGridPos {
            screen_pos: Some(Vec2::new(100.0, 100.0)),
            cell: Some((5, 5)),
        };
        assert!(before.moved_to(&CursorGridPos::default()));
    }
}
