//! Optimistic Status Reconciliation
//!
//! A checkbox toggle shows its new status at once while the PATCH is in
//! flight. Each toggle is recorded as a local override tagged with a
//! generation number. When the authoritative list arrives, every override
//! up to the generation that triggered the reload is dropped: the server
//! wins.

use std::collections::HashMap;

use crate::task::{Task, TaskId, TaskStatus};

/// Delay between a toggle response and the reconciling reload
pub const RECONCILE_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Override {
    status: TaskStatus,
    generation: u64,
}

/// An optimistic guess the server disagreed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConflict {
    pub id: TaskId,
    pub optimistic: TaskStatus,
    /// `None` when the task is gone from the server list
    pub server: Option<TaskStatus>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusOverlay {
    overrides: HashMap<TaskId, Override>,
    generation: u64,
}

impl StatusOverlay {
    /// Record an optimistic status; returns the generation to reconcile through.
    pub fn apply(&mut self, id: TaskId, status: TaskStatus) -> u64 {
        self.generation += 1;
        self.overrides.insert(id, Override { status, generation: self.generation });
        self.generation
    }

    /// Status to display: the local override if any, else the server's
    pub fn effective(&self, task: &Task) -> TaskStatus {
        self.overrides
            .get(&task.id)
            .map_or(task.status, |o| o.status)
    }

    /// A toggle for this task is still awaiting reconciliation
    pub fn is_pending(&self, id: &TaskId) -> bool {
        self.overrides.contains_key(id)
    }

    /// Drop overrides issued up to `through` and report the ones the server contradicts.
    pub fn reconcile(&mut self, server: &[Task], through: u64) -> Vec<StatusConflict> {
        let mut conflicts = Vec::new();
        self.overrides.retain(|id, o| {
            if o.generation > through {
                return true;
            }
            let server_status = server.iter().find(|t| &t.id == id).map(|t| t.status);
            if server_status != Some(o.status) {
                conflicts.push(StatusConflict {
                    id: id.clone(),
                    optimistic: o.status,
                    server: server_status,
                });
            }
            false
        });
        conflicts.sort_by(|a, b| a.id.cmp(&b.id));
        conflicts
    }

    /// Drop every override, reporting conflicts, for reloads not tied to a toggle
    pub fn reconcile_all(&mut self, server: &[Task]) -> Vec<StatusConflict> {
        self.reconcile(server, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: TaskId::from(id),
            title: "t".into(),
            description: None,
            state: None,
            anomaly_type: None,
            priority: Priority::Medium,
            status,
            assigned_to: None,
        }
    }

    #[test]
    fn test_optimistic_status_shows_before_response() {
        let mut overlay = StatusOverlay::default();
        let t = task("1", TaskStatus::Pending);
        overlay.apply(t.id.clone(), TaskStatus::Done);
        assert_eq!(overlay.effective(&t), TaskStatus::Done);
        assert_eq!(overlay.effective(&t).label(), "DONE");
        assert!(overlay.is_pending(&t.id));
    }

    #[test]
    fn test_server_wins_on_wrong_guess() {
        let mut overlay = StatusOverlay::default();
        let generation = overlay.apply(TaskId::from("1"), TaskStatus::Done);

        let server = vec![task("1", TaskStatus::InProgress)];
        let conflicts = overlay.reconcile(&server, generation);

        assert_eq!(overlay.effective(&server[0]), TaskStatus::InProgress);
        assert!(!overlay.is_pending(&TaskId::from("1")));
        assert_eq!(conflicts, vec![StatusConflict {
            id: TaskId::from("1"),
            optimistic: TaskStatus::Done,
            server: Some(TaskStatus::InProgress),
        }]);
    }

    #[test]
    fn test_confirmed_guess_has_no_conflict() {
        let mut overlay = StatusOverlay::default();
        let generation = overlay.apply(TaskId::from("1"), TaskStatus::Done);
        let conflicts = overlay.reconcile(&[task("1", TaskStatus::Done)], generation);
        assert!(conflicts.is_empty());
        assert!(!overlay.is_pending(&TaskId::from("1")));
    }

    #[test]
    fn test_later_toggles_survive_earlier_reconcile() {
        let mut overlay = StatusOverlay::default();
        let first = overlay.apply(TaskId::from("1"), TaskStatus::Done);
        overlay.apply(TaskId::from("2"), TaskStatus::Done);

        let server = vec![task("1", TaskStatus::Done), task("2", TaskStatus::Pending)];
        overlay.reconcile(&server, first);

        assert!(!overlay.is_pending(&TaskId::from("1")));
        assert!(overlay.is_pending(&TaskId::from("2")));
        assert_eq!(overlay.effective(&server[1]), TaskStatus::Done);

        overlay.reconcile_all(&server);
        assert_eq!(overlay.effective(&server[1]), TaskStatus::Pending);
    }

    #[test]
    fn test_deleted_task_reported() {
        let mut overlay = StatusOverlay::default();
        overlay.apply(TaskId::from("9"), TaskStatus::Done);
        let conflicts = overlay.reconcile_all(&[]);
        assert_eq!(conflicts[0].server, None);
    }
}
