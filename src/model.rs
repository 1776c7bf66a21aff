//! Core data models for Sentinel Command.
//!
//! Map entities and heat samples are created once at catalog initialization
//! and never mutated; identity is the `id`. Notifications live in a reducer
//! owned by the App component and shared through a context provider.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::geo::GeoPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Threat,
    Friendly,
    Camera,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapEntity {
    pub id: &'static str,
    pub kind: EntityKind,
    pub label: &'static str,
    pub position: GeoPoint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatKind {
    Activity,
    Threat,
    Movement,
}

impl HeatKind {
    pub fn label(&self) -> &'static str {
        match self {
            HeatKind::Activity => "ACTIVITY",
            HeatKind::Threat => "THREAT",
            HeatKind::Movement => "MOVEMENT",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatSample {
    pub id: &'static str,
    pub kind: HeatKind,
    /// Normalized intensity in [0, 1]; drives the gradient's center alpha.
    pub intensity: f64,
    pub position: GeoPoint,
    /// Blob radius in untransformed canvas units (pixels at zoom 1).
    pub radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One entry in the notification feed. Threat metadata fields are optional:
/// prediction-driven alerts carry a sector, catalog alerts carry all three.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub severity: Severity,
    pub threat_type: Option<String>,
    pub sector: Option<String>,
    pub coordinates: Option<String>,
    pub read: bool,
}

/// Fields the engine emits; id/timestamp/read are assigned by the reducer.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub threat_type: Option<String>,
    pub sector: Option<String>,
    pub coordinates: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    next_id: u64,
}

pub enum NotifyAction {
    Push {
        draft: NotificationDraft,
        timestamp: String,
    },
    MarkRead {
        id: u64,
    },
    ClearAll,
}

impl NotificationState {
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }
}

impl Reducible for NotificationState {
    type Action = NotifyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NotifyAction::Push { draft, timestamp } => {
                let id = next.next_id;
                next.next_id += 1;
                // Newest first, mirroring the feed panel's display order.
                next.items.insert(
                    0,
                    Notification {
                        id,
                        title: draft.title,
                        message: draft.message,
                        timestamp,
                        severity: draft.severity,
                        threat_type: draft.threat_type,
                        sector: draft.sector,
                        coordinates: draft.coordinates,
                        read: false,
                    },
                );
            }
            NotifyAction::MarkRead { id } => {
                if let Some(n) = next.items.iter_mut().find(|n| n.id == id) {
                    n.read = true;
                }
            }
            NotifyAction::ClearAll => {
                next.items.clear();
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> NotificationDraft {
        NotificationDraft {
            title: title.to_string(),
            message: "msg".to_string(),
            severity: Severity::Medium,
            threat_type: None,
            sector: None,
            coordinates: None,
        }
    }

    fn push(state: Rc<NotificationState>, title: &str) -> Rc<NotificationState> {
        state.reduce(NotifyAction::Push {
            draft: draft(title),
            timestamp: "12:00:00".to_string(),
        })
    }

    #[test]
    fn push_prepends_and_assigns_unique_ids() {
        let s = push(Rc::new(NotificationState::default()), "first");
        let s = push(s, "second");
        assert_eq!(s.items.len(), 2);
        assert_eq!(s.items[0].title, "second");
        assert_ne!(s.items[0].id, s.items[1].id);
        assert_eq!(s.unread_count(), 2);
    }

    #[test]
    fn mark_read_targets_one_entry() {
        let s = push(Rc::new(NotificationState::default()), "a");
        let s = push(s, "b");
        let target = s.items[1].id;
        let s = s.reduce(NotifyAction::MarkRead { id: target });
        assert!(s.items[1].read);
        assert!(!s.items[0].read);
        assert_eq!(s.unread_count(), 1);
    }

    #[test]
    fn ids_keep_advancing_after_clear() {
        let s = push(Rc::new(NotificationState::default()), "a");
        let first_id = s.items[0].id;
        let s = s.reduce(NotifyAction::ClearAll);
        assert!(s.items.is_empty());
        let s = push(s, "b");
        assert!(s.items[0].id > first_id);
    }
}
