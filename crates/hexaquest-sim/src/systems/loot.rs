//! Loot pickup: drops within reach of the player go into the bag.

use hecs::{Entity, World};

use hexaquest_campaign::LedgerError;
use hexaquest_core::components::LootDrop;
use hexaquest_core::constants::LOOT_PICKUP_RADIUS;
use hexaquest_core::enums::{LogKind, NotificationKind};
use hexaquest_core::events::SimEvent;
use hexaquest_core::items::Item;
use hexaquest_core::types::Position;

use crate::session::Session;

/// Collect every drop in pickup range. With a full bag the drop stays on
/// the floor and the warning is shown once per drop.
pub fn run(world: &mut World, session: &mut Session, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let player = session.player.position;
    let mut in_reach: Vec<(Entity, Item)> = Vec::new();

    for (entity, (drop, pos)) in world.query_mut::<(&LootDrop, &Position)>() {
        if pos.range_to(&player) < LOOT_PICKUP_RADIUS {
            in_reach.push((entity, drop.item.clone()));
        }
    }

    for (entity, item) in in_reach {
        let name = item.name.clone();
        let item_id = item.id.clone();
        match session.ledger.add_item(item) {
            Ok(()) => {
                session.notify(format!("Obtained: {name}"), NotificationKind::Loot);
                session.emit(SimEvent::ItemPickedUp { item_id });
                session.mark_progress();
                despawn_buffer.push(entity);
            }
            Err(LedgerError::InventoryFull) => {
                if let Ok(mut drop) = world.get::<&mut LootDrop>(entity) {
                    if !drop.full_warned {
                        drop.full_warned = true;
                        session.log(LedgerError::InventoryFull.to_string(), LogKind::Info);
                    }
                }
            }
            Err(err) => session.log(err.to_string(), LogKind::Info),
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
