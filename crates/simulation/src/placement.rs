//! Footprint validation and the atomic place / remove operations on `WorldGrid`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grid::WorldGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementKind {
    Building,
    Road,
}

impl PlacementKind {
    pub fn name(self) -> &'static str {
        match self {
            PlacementKind::Building => "building",
            PlacementKind::Road => "road",
        }
    }
}

/// Stable identity of a placement for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlacementId(pub u32);

/// A building or road covering `[origin_x, origin_x + size_x) x [origin_z, origin_z + size_z)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub id: PlacementId,
    pub origin_x: i32,
    pub origin_z: i32,
    pub size_x: i32,
    pub size_z: i32,
    pub kind: PlacementKind,
}

impl Placement {
    #[inline]
    pub fn contains(&self, x: i32, z: i32) -> bool {
        x >= self.origin_x
            && x < self.origin_x.saturating_add(self.size_x)
            && z >= self.origin_z
            && z < self.origin_z.saturating_add(self.size_z)
    }

    /// Every covered cell, x-major.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (ox, oz, sx, sz) = (self.origin_x, self.origin_z, self.size_x, self.size_z);
        (ox..ox.saturating_add(sx)).flat_map(move |x| (oz..oz.saturating_add(sz)).map(move |z| (x, z)))
    }

    /// Render anchor: midpoint between the first and last covered cell centres.
    pub fn anchor(&self, cell_size: f32) -> Vec2 {
        let first_x = self.origin_x as f32 * cell_size;
        let last_x = (self.origin_x + self.size_x - 1) as f32 * cell_size;
        let first_z = self.origin_z as f32 * cell_size;
        let last_z = (self.origin_z + self.size_z - 1) as f32 * cell_size;
        Vec2::new((first_x + last_x) / 2.0, (first_z + last_z) / 2.0)
    }

    pub fn overlaps(&self, other: &Placement) -> bool {
        self.origin_x < other.origin_x.saturating_add(other.size_x)
            && other.origin_x < self.origin_x.saturating_add(self.size_x)
            && self.origin_z < other.origin_z.saturating_add(other.size_z)
            && other.origin_z < self.origin_z.saturating_add(self.size_z)
    }
}

impl WorldGrid {
    /// True iff every cell of the rectangle is in range and free.
    pub fn can_place(&self, origin_x: i32, origin_z: i32, size_x: i32, size_z: i32) -> bool {
        if size_x <= 0 || size_z <= 0 {
            return false;
        }
        let (Some(end_x), Some(end_z)) = (origin_x.checked_add(size_x), origin_z.checked_add(size_z))
        else {
            return false;
        };
        (origin_x..end_x).all(|x| {
            (origin_z..end_z).all(|z| self.in_bounds(x, z) && !self.is_occupied(x, z))
        })
    }

    /// Validate and commit in one step. Returns `None` without touching any
    /// cell when the footprint is unavailable.
    pub fn place(
        &mut self,
        origin_x: i32,
        origin_z: i32,
        size_x: i32,
        size_z: i32,
        kind: PlacementKind,
    ) -> Option<Placement> {
        if !self.can_place(origin_x, origin_z, size_x, size_z) {
            return None;
        }

        let placement = Placement {
            id: PlacementId(self.next_placement_id),
            origin_x,
            origin_z,
            size_x,
            size_z,
            kind,
        };
        self.next_placement_id += 1;

        for (x, z) in placement.cells() {
            self.set_occupied(x, z, true);
        }
        self.placements.push(placement);
        Some(placement)
    }

    /// Remove the placement covering `(x, z)` and free its whole footprint.
    pub fn remove_at(&mut self, x: i32, z: i32) -> Option<Placement> {
        let idx = self.placements.iter().position(|p| p.contains(x, z))?;
        let placement = self.placements.remove(idx);
        for (cx, cz) in placement.cells() {
            self.set_occupied(cx, cz, false);
        }
        Some(placement)
    }

    pub fn placement_at(&self, x: i32, z: i32) -> Option<&Placement> {
        self.placements.iter().find(|p| p.contains(x, z))
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}
