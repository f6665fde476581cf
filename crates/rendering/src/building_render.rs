use std::collections::HashMap;

use bevy::prelude::*;
use rand::Rng;

use simulation::config::CELL_GAP;
use simulation::grid::WorldGrid;
use simulation::interaction::PlacementChanged;
use simulation::placement::{Placement, PlacementId, PlacementKind};
use simulation::sim_rng::SimRng;

const MIN_BUILDING_HEIGHT: f32 = 2.0;
const MAX_BUILDING_HEIGHT: f32 = 5.0;
const ROAD_HEIGHT: f32 = 0.1;
const ROAD_ELEVATION: f32 = 0.15;

/// Marker for the mesh standing on a placement's footprint.
#[derive(Component)]
pub struct PlacementMesh3d {
    pub id: PlacementId,
}

/// Spawned mesh entity plus the assets it owns, keyed by placement.
#[derive(Resource, Default)]
pub struct PlacementMeshes {
    entries: HashMap<PlacementId, PlacementMeshEntry>,
}

struct PlacementMeshEntry {
    entity: Entity,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

impl PlacementMeshes {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entity(&self, id: PlacementId) -> Option<Entity> {
        self.entries.get(&id).map(|e| e.entity)
    }
}

/// Box dimensions and vertical centre for a placement.
pub fn placement_dimensions(
    placement: &Placement,
    cell_size: f32,
    rng: &mut impl Rng,
) -> (Vec3, f32) {
    let width = (cell_size - CELL_GAP) * placement.size_x as f32;
    let depth = (cell_size - CELL_GAP) * placement.size_z as f32;
    match placement.kind {
        PlacementKind::Building => {
            let height = rng.gen_range(MIN_BUILDING_HEIGHT..MAX_BUILDING_HEIGHT);
            (Vec3::new(width, height, depth), height / 2.0)
        }
        PlacementKind::Road => (Vec3::new(width, ROAD_HEIGHT, depth), ROAD_ELEVATION),
    }
}

pub fn placement_color(kind: PlacementKind, rng: &mut impl Rng) -> Color {
    match kind {
        PlacementKind::Building => Color::srgb(rng.gen(), rng.gen(), rng.gen()),
        PlacementKind::Road => Color::srgb_u8(0x33, 0x33, 0x33),
    }
}

/// Spawn meshes for new placements and despawn meshes of removed ones,
/// releasing their mesh and material assets.
pub fn sync_placement_meshes(
    mut commands: Commands,
    mut changes: EventReader<PlacementChanged>,
    grid: Res<WorldGrid>,
    mut rng: ResMut<SimRng>,
    mut registry: ResMut<PlacementMeshes>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for change in changes.read() {
        match change {
            PlacementChanged::Added(placement) => {
                let (size, y) = placement_dimensions(placement, grid.cell_size(), &mut rng.0);
                let color = placement_color(placement.kind, &mut rng.0);
                let anchor = placement.anchor(grid.cell_size());

                let mesh = meshes.add(Cuboid::from_size(size));
                let material = materials.add(StandardMaterial::from(color));
                let entity = commands
                    .spawn((
                        PlacementMesh3d { id: placement.id },
                        Mesh3d(mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_xyz(anchor.x, y, anchor.y),
                    ))
                    .id();

                registry.entries.insert(
                    placement.id,
                    PlacementMeshEntry {
                        entity,
                        mesh,
                        material,
                    },
                );
            }
            PlacementChanged::Removed(placement) => {
                let Some(entry) = registry.entries.remove(&placement.id) else {
                    warn!("No mesh registered for placement #{}", placement.id.0);
                    continue;
                };
                commands.entity(entry.entity).despawn_recursive();
                meshes.remove(&entry.mesh);
                materials.remove(&entry.material);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use simulation::config::GridConfig;

    fn mesh_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .insert_resource(WorldGrid::new(GridConfig::square(10, 2.0)))
            .insert_resource(SimRng::from_seed(11))
            .init_resource::<PlacementMeshes>()
            .add_event::<PlacementChanged>()
            .add_systems(Update, sync_placement_meshes);
        app
    }

    fn spawned_meshes(app: &mut App) -> Vec<(Entity, PlacementId)> {
        let mut query = app.world_mut().query::<(Entity, &PlacementMesh3d)>();
        query
            .iter(app.world())
            .map(|(entity, mesh)| (entity, mesh.id))
            .collect()
    }

    fn placement(kind: PlacementKind, size: i32) -> Placement {
        Placement {
            id: PlacementId(1),
            origin_x: 3,
            origin_z: 4,
            size_x: size,
            size_z: size,
            kind,
        }
    }

    #[test]
    fn test_building_height_in_range_and_stands_on_ground() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let (size, y) =
                placement_dimensions(&placement(PlacementKind::Building, 2), 2.0, &mut rng);
            assert!(size.y >= MIN_BUILDING_HEIGHT && size.y < MAX_BUILDING_HEIGHT);
            assert!((y - size.y / 2.0).abs() < f32::EPSILON);
            assert!((size.x - 3.6).abs() < 1e-5);
            assert!((size.z - 3.6).abs() < 1e-5);
        }
    }

    #[test]
    fn test_road_is_flat_slab() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (size, y) = placement_dimensions(&placement(PlacementKind::Road, 1), 2.0, &mut rng);
        assert!((size - Vec3::new(1.8, ROAD_HEIGHT, 1.8)).length() < 1e-5);
        assert!((y - ROAD_ELEVATION).abs() < f32::EPSILON);
    }

    #[test]
    fn test_road_color_is_fixed() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let a = placement_color(PlacementKind::Road, &mut rng);
        let b = placement_color(PlacementKind::Road, &mut rng);
        assert_eq!(a, b);
    }

    #[test]
    fn test_added_placement_spawns_mesh_at_anchor() {
        let mut app = mesh_app();
        let building = placement(PlacementKind::Building, 2);
        app.world_mut()
            .send_event(PlacementChanged::Added(building));
        app.update();

        let registry = app.world().resource::<PlacementMeshes>();
        assert_eq!(registry.len(), 1);
        let entity = registry.entity(building.id).unwrap();
        assert_eq!(spawned_meshes(&mut app), vec![(entity, building.id)]);

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert!((transform.translation.x - 7.0).abs() < 1e-5);
        assert!((transform.translation.z - 9.0).abs() < 1e-5);
        assert!(transform.translation.y >= MIN_BUILDING_HEIGHT / 2.0);
    }

    #[test]
    fn test_removed_placement_releases_entity_and_assets() {
        let mut app = mesh_app();
        let road = placement(PlacementKind::Road, 1);
        app.world_mut().send_event(PlacementChanged::Added(road));
        app.update();

        let entity = app
            .world()
            .resource::<PlacementMeshes>()
            .entity(road.id)
            .unwrap();
        let mesh = app.world().get::<Mesh3d>(entity).unwrap().0.clone();
        let material = app
            .world()
            .get::<MeshMaterial3d<StandardMaterial>>(entity)
            .unwrap()
            .0
            .clone();
        assert!(app.world().resource::<Assets<Mesh>>().get(&mesh).is_some());

        app.world_mut().send_event(PlacementChanged::Removed(road));
        app.update();

        assert!(app.world().resource::<PlacementMeshes>().is_empty());
        assert!(spawned_meshes(&mut app).is_empty());
        assert!(app.world().resource::<Assets<Mesh>>().get(&mesh).is_none());
        assert!(app
            .world()
            .resource::<Assets<StandardMaterial>>()
            .get(&material)
            .is_none());
    }

    #[test]
    fn test_removing_unknown_placement_is_ignored() {
        let mut app = mesh_app();
        let road = placement(PlacementKind::Road, 1);
        app.world_mut().send_event(PlacementChanged::Removed(road));
        app.update();
        assert!(app.world().resource::<PlacementMeshes>().is_empty());
    }
}
