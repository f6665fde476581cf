//! Ground tiles: one box per cell, recolored from occupancy and hover preview.
//!
//! Tiles share a small palette of materials; recoloring swaps the material
//! handle. The renderer keeps its own coordinate -> entity map so no domain
//! state lives on the tiles themselves.

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use simulation::config::CELL_GAP;
use simulation::grid::WorldGrid;
use simulation::highlight::HoverHighlight;
use simulation::interaction::PlacementChanged;
use simulation::placement::PlacementKind;

const TILE_HEIGHT: f32 = 0.2;

/// Marker for a ground tile entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct GridTile {
    pub x: i32,
    pub z: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTint {
    Light,
    Dark,
    BuildingLight,
    BuildingDark,
    Road,
    Valid,
    Invalid,
}

impl CellTint {
    pub fn color(self) -> Color {
        match self {
            CellTint::Light => Color::srgb_u8(0xcc, 0xcc, 0xcc),
            CellTint::Dark => Color::srgb_u8(0x99, 0x99, 0x99),
            CellTint::BuildingLight => Color::srgb_u8(0x66, 0x66, 0x66),
            CellTint::BuildingDark | CellTint::Road => Color::srgb_u8(0x44, 0x44, 0x44),
            CellTint::Valid => Color::srgb_u8(0x00, 0xff, 0x00),
            CellTint::Invalid => Color::srgb_u8(0xff, 0x00, 0x00),
        }
    }
}

/// Resting tint of a cell: checkerboard, darkened under buildings and roads.
pub fn base_tint(grid: &WorldGrid, x: i32, z: i32) -> CellTint {
    let even = (x + z) % 2 == 0;
    match grid.placement_at(x, z).map(|p| p.kind) {
        None if even => CellTint::Light,
        None => CellTint::Dark,
        Some(PlacementKind::Building) if even => CellTint::BuildingLight,
        Some(PlacementKind::Building) => CellTint::BuildingDark,
        Some(PlacementKind::Road) => CellTint::Road,
    }
}

/// Shared tile materials, one per tint.
#[derive(Resource)]
pub struct TilePalette {
    light: Handle<StandardMaterial>,
    dark: Handle<StandardMaterial>,
    building_light: Handle<StandardMaterial>,
    building_dark: Handle<StandardMaterial>,
    valid: Handle<StandardMaterial>,
    invalid: Handle<StandardMaterial>,
}

impl TilePalette {
    fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        let mut add = |tint: CellTint| materials.add(StandardMaterial::from(tint.color()));
        Self {
            light: add(CellTint::Light),
            dark: add(CellTint::Dark),
            building_light: add(CellTint::BuildingLight),
            building_dark: add(CellTint::BuildingDark),
            valid: add(CellTint::Valid),
            invalid: add(CellTint::Invalid),
        }
    }

    pub fn material(&self, tint: CellTint) -> Handle<StandardMaterial> {
        match tint {
            CellTint::Light => self.light.clone(),
            CellTint::Dark => self.dark.clone(),
            CellTint::BuildingLight => self.building_light.clone(),
            CellTint::BuildingDark | CellTint::Road => self.building_dark.clone(),
            CellTint::Valid => self.valid.clone(),
            CellTint::Invalid => self.invalid.clone(),
        }
    }
}

/// Tile entities indexed like the grid (`z * width + x`).
#[derive(Resource, Default)]
pub struct GridTiles {
    width: usize,
    entities: Vec<Entity>,
}

impl GridTiles {
    pub fn get(&self, x: i32, z: i32) -> Option<Entity> {
        if x < 0 || z < 0 || x as usize >= self.width {
            return None;
        }
        self.entities.get(z as usize * self.width + x as usize).copied()
    }
}

pub fn spawn_grid_tiles(
    mut commands: Commands,
    grid: Res<WorldGrid>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let side = grid.cell_size() - CELL_GAP;
    let mesh = meshes.add(Cuboid::new(side, TILE_HEIGHT, side));
    let palette = TilePalette::new(&mut materials);

    let mut entities = Vec::with_capacity(grid.width() * grid.depth());
    for (x, z, _) in grid.cells() {
        let (wx, wz) = grid.world_position(x, z);
        let entity = commands
            .spawn((
                GridTile { x, z },
                Mesh3d(mesh.clone()),
                MeshMaterial3d(palette.material(base_tint(&grid, x, z))),
                Transform::from_xyz(wx, 0.0, wz),
                NotShadowCaster,
            ))
            .id();
        entities.push(entity);
    }

    info!("Spawned {} grid tiles", entities.len());
    commands.insert_resource(GridTiles {
        width: grid.width(),
        entities,
    });
    commands.insert_resource(palette);
}

/// Restore resting tints for changed footprints and repaint the hover preview.
///
/// `painted` remembers the cells tinted for the previous preview so each
/// one is restored before the new preview is applied.
pub fn recolor_grid_tiles(
    grid: Res<WorldGrid>,
    highlight: Res<HoverHighlight>,
    palette: Res<TilePalette>,
    tiles: Res<GridTiles>,
    mut changes: EventReader<PlacementChanged>,
    mut painted: Local<Vec<(i32, i32)>>,
    mut query: Query<&mut MeshMaterial3d<StandardMaterial>, With<GridTile>>,
) {
    let mut paint = |x: i32, z: i32, tint: CellTint| {
        let Some(entity) = tiles.get(x, z) else {
            return;
        };
        if let Ok(mut material) = query.get_mut(entity) {
            material.0 = palette.material(tint);
        }
    };

    for change in changes.read() {
        let (PlacementChanged::Added(placement) | PlacementChanged::Removed(placement)) = change;
        for (x, z) in placement.cells() {
            paint(x, z, base_tint(&grid, x, z));
        }
    }

    if !highlight.is_changed() {
        return;
    }

    for (x, z) in painted.drain(..) {
        paint(x, z, base_tint(&grid, x, z));
    }

    let tint = if highlight.is_valid() {
        CellTint::Valid
    } else {
        CellTint::Invalid
    };
    for &(x, z) in highlight.cells() {
        paint(x, z, tint);
        painted.push((x, z));
    }
}
