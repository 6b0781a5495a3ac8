//! Delayed tasks on simulation time.
//!
//! Tasks are drained in due-time order (ties in insertion order). Tasks
//! that touch an entity must tolerate the entity having been despawned.

use hecs::Entity;

/// Something to do once simulation time reaches a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    ExpireNotification(u64),
    ClearHitFlash(Entity),
    ClearLunge(Entity),
}

#[derive(Debug, Clone, Copy)]
struct ScheduledTask {
    due: f64,
    seq: u64,
    action: TaskAction,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: f64, action: TaskAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(ScheduledTask { due, seq, action });
    }

    /// Remove and return every task due at or before `now`.
    pub fn drain_due(&mut self, now: f64) -> Vec<TaskAction> {
        let mut due: Vec<ScheduledTask> = Vec::new();
        self.tasks.retain(|task| {
            if task.due <= now {
                due.push(*task);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|task| task.action).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop tasks bound to entities. Notification expiries survive.
    pub fn clear_entity_tasks(&mut self) {
        self.tasks
            .retain(|task| matches!(task.action, TaskAction::ExpireNotification(_)));
    }
}
