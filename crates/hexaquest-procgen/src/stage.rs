//! Stage composition and spawn layout.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;

use hexaquest_core::constants::*;

/// One group of identical enemies in a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnGroup {
    pub is_boss: bool,
    pub count: u32,
}

/// Everything the director needs to populate a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageComposition {
    pub stage: u32,
    pub boss_stage: bool,
    /// Spawn order; the boss (if any) comes first.
    pub groups: Vec<SpawnGroup>,
}

impl StageComposition {
    pub fn total_enemies(&self) -> u32 {
        self.groups.iter().map(|g| g.count).sum()
    }

    pub fn boss_count(&self) -> u32 {
        self.groups
            .iter()
            .filter(|g| g.is_boss)
            .map(|g| g.count)
            .sum()
    }
}

pub fn is_boss_stage(stage: u32) -> bool {
    stage > 0 && stage % BOSS_STAGE_INTERVAL == 0
}

/// Build the enemy roster for `stage`.
pub fn compose_stage(stage: u32) -> StageComposition {
    let boss_stage = is_boss_stage(stage);
    let groups = if boss_stage {
        vec![
            SpawnGroup {
                is_boss: true,
                count: 1,
            },
            SpawnGroup {
                is_boss: false,
                count: BOSS_ESCORT_COUNT,
            },
        ]
    } else {
        let count = BASE_ENEMY_COUNT + (stage as f64 / ENEMY_COUNT_STAGE_DIVISOR).floor() as u32;
        vec![SpawnGroup {
            is_boss: false,
            count,
        }]
    };
    StageComposition {
        stage,
        boss_stage,
        groups,
    }
}

/// Random point on the spawn ring around the origin.
pub fn spawn_point<R: Rng + ?Sized>(rng: &mut R) -> DVec2 {
    let angle = rng.gen::<f64>() * TAU;
    let radius = SPAWN_RING_MIN + rng.gen::<f64>() * SPAWN_RING_SPAN;
    DVec2::new(angle.cos(), angle.sin()) * radius
}

/// Biome index for `stage`: a new biome every few stages, cycling.
pub fn biome_index(stage: u32) -> usize {
    (stage.saturating_sub(1) / BIOME_STAGE_SPAN) as usize % BIOME_HUES.len()
}

/// Sky hue (degrees) of the biome `stage` belongs to.
pub fn biome_hue(stage: u32) -> u16 {
    BIOME_HUES[biome_index(stage)]
}

/// Where the exit portal opens relative to the player.
pub fn portal_position(player: DVec2) -> DVec2 {
    player + DVec2::new(PORTAL_OFFSET_X, PORTAL_OFFSET_Y)
}
