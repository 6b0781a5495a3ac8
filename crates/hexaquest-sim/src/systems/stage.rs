//! Stage director: stage setup, portal opening, and stage advance.

use hecs::World;
use log::debug;
use rand_chacha::ChaCha8Rng;

use hexaquest_ai::profiles;
use hexaquest_core::components::{Enemy, Health, Portal};
use hexaquest_core::constants::PORTAL_CONTACT_RADIUS;
use hexaquest_core::enums::{GamePhase, NotificationKind};
use hexaquest_core::events::SimEvent;
use hexaquest_core::state::BossSummary;
use hexaquest_core::types::Position;
use hexaquest_procgen::stage::{self as layout, compose_stage};

use crate::session::Session;
use crate::world_setup;

/// Tear down the current stage and populate `session.stage.stage` afresh.
pub fn start_stage(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng) {
    world.clear();
    session.scheduler.clear_entity_tasks();
    session.active_boss = None;

    let stage = session.stage.stage;
    let composition = compose_stage(stage);
    session.stage.boss_stage = composition.boss_stage;

    for group in &composition.groups {
        for _ in 0..group.count {
            let id = session.allocate_enemy_id();
            let at = Position(layout::spawn_point(rng));
            let entity = world_setup::spawn_enemy(world, rng, id, stage, group.is_boss, at);
            if group.is_boss {
                let max_hp = world
                    .get::<&Health>(entity)
                    .map(|health| health.max_hp)
                    .unwrap_or_default();
                session.active_boss = Some(BossSummary {
                    name: profiles::boss_name(stage),
                    hp: max_hp,
                    max_hp,
                });
            }
        }
    }

    session.player.position = Position::default();
    session.phase = GamePhase::InProgress;
    if composition.boss_stage {
        session.notify(format!("BOSS BATTLE: STAGE {stage}"), NotificationKind::Boss);
    } else {
        session.notify(format!("Entering Stage {stage}"), NotificationKind::Info);
    }
    session.emit(SimEvent::StageStarted {
        stage,
        boss: composition.boss_stage,
    });
    session.mark_progress();
    debug!(
        "stage {stage} started with {} enemies (biome hue {})",
        composition.total_enemies(),
        layout::biome_hue(stage)
    );
}

/// Open the portal once the stage is clear; advance when the player steps in.
pub fn run(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng) {
    match session.phase {
        GamePhase::InProgress => {
            if live_enemies(world) == 0 && portal_position(world).is_none() {
                let at = Position(layout::portal_position(session.player.position.0));
                world_setup::spawn_portal(world, at);
                session.phase = GamePhase::Transitioning;
                session.notify("Portal Opened!", NotificationKind::Info);
                session.emit(SimEvent::PortalOpened { position: at });
            }
        }
        GamePhase::Transitioning => {
            let entered = portal_position(world)
                .is_some_and(|at| at.range_to(&session.player.position) < PORTAL_CONTACT_RADIUS);
            if entered {
                session.stage.stage = session.stage.stage.saturating_add(1);
                start_stage(world, session, rng);
            }
        }
        GamePhase::MainMenu => {}
    }
}

/// Enemies with hp left. Dead ones linger until end-of-tick compaction.
pub fn live_enemies(world: &World) -> usize {
    world
        .query::<(&Enemy, &Health)>()
        .iter()
        .filter(|(_, (_, health))| health.hp > 0.0)
        .count()
}

pub fn portal_position(world: &World) -> Option<Position> {
    world
        .query::<(&Portal, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
