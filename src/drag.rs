//! Drag-and-drop placement protocol.
//!
//! A drag gesture is tracked in a single [`DragSlot`]. The slot is either idle
//! or holds one [`DragSession`], so a second concurrent session cannot exist.
//! [`transition`] is a pure function from `(slot, event)` to the next slot plus
//! the outcomes the engine must apply. It never touches the document itself.
//!
//! The nesting counter exists because the browser fires `dragleave` on the
//! canvas whenever the pointer crosses into one of its descendants. Only the
//! leave that brings the counter back to zero means the pointer actually left.
//!
//! The transferred payload is the JSON encoding of a [`ComponentDef`]. A drop
//! whose payload fails to decode aborts the session and reports
//! [`DropError::Decode`]; the document is untouched.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use serde::{Deserialize, Serialize};

use crate::registry::ComponentDef;

/// Error raised while moving a payload through the drag transfer encoding.
#[derive(Debug, thiserror::Error)]
pub enum DropError {
    /// The dropped data is not a valid component definition.
    #[error("failed to decode drag payload: {0}")]
    Decode(#[source] serde_json::Error),
    /// The dragged definition could not be serialized at drag-start.
    #[error("failed to encode drag payload: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Serialize a definition for the drag transfer.
///
/// # Errors
///
/// Returns [`DropError::Encode`] if serialization fails.
pub fn encode_payload(def: &ComponentDef) -> Result<String, DropError> {
    serde_json::to_string(def).map_err(DropError::Encode)
}

/// Deserialize a dropped transfer string back into a definition.
///
/// # Errors
///
/// Returns [`DropError::Decode`] if `data` is not a JSON-encoded definition of
/// a registered component type.
pub fn decode_payload(data: &str) -> Result<ComponentDef, DropError> {
    serde_json::from_str(data).map_err(DropError::Decode)
}

/// Raw drag events delivered for the canvas drop target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragEvent {
    /// A palette entry started dragging.
    Start(ComponentDef),
    /// The pointer entered the canvas or one of its descendants.
    Enter,
    /// The pointer left the canvas or one of its descendants.
    Leave,
    /// The pointer moved while over the canvas.
    Over,
    /// The payload was released over the canvas. `data` is the transferred
    /// string; when absent the session's own encoding is used.
    Drop {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<String>,
    },
    /// The gesture ended without a drop.
    End,
}

/// State of an in-progress drag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    /// Definition being dragged, if the drag started from the palette.
    pub payload: Option<ComponentDef>,
    /// Transfer encoding of `payload` set at drag-start.
    pub transfer: Option<String>,
    /// Whether the canvas is currently highlighted as a drop target.
    pub drop_zone_active: bool,
    /// Net enter/leave count for the canvas and its descendants.
    pub depth: u32,
}

/// Single drag-session slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSlot {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Active(DragSession),
}

/// Coarse protocol phase, derived from the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    DropZoneArmed,
}

impl DragSlot {
    /// Current protocol phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self {
            Self::Idle => DragPhase::Idle,
            Self::Active(s) if s.drop_zone_active => DragPhase::DropZoneArmed,
            Self::Active(_) => DragPhase::Dragging,
        }
    }

    /// Whether the canvas should render its drop-target highlight.
    #[must_use]
    pub fn drop_zone_active(&self) -> bool {
        matches!(self, Self::Active(s) if s.drop_zone_active)
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Active(s) => Some(s),
        }
    }
}

/// Side effects requested by a transition.
#[derive(Debug)]
pub enum DragOutcome {
    /// The drop-target highlight turned on or off.
    DropZone(bool),
    /// Place a new instance of this definition and select it.
    Place(ComponentDef),
    /// The drop was aborted; nothing is placed.
    Rejected(DropError),
}

/// Advance the drag protocol by one event.
#[must_use]
pub fn transition(slot: DragSlot, event: DragEvent) -> (DragSlot, Vec<DragOutcome>) {
    let mut outcomes = Vec::new();

    let next = match (slot, event) {
        (prev, DragEvent::Start(def)) => {
            if prev.drop_zone_active() {
                outcomes.push(DragOutcome::DropZone(false));
            }
            match encode_payload(&def) {
                Ok(transfer) => DragSlot::Active(DragSession {
                    payload: Some(def),
                    transfer: Some(transfer),
                    drop_zone_active: false,
                    depth: 0,
                }),
                Err(e) => {
                    outcomes.push(DragOutcome::Rejected(e));
                    DragSlot::Idle
                }
            }
        }

        (DragSlot::Idle, DragEvent::Enter) => {
            outcomes.push(DragOutcome::DropZone(true));
            DragSlot::Active(DragSession { drop_zone_active: true, depth: 1, ..DragSession::default() })
        }
        (DragSlot::Active(mut session), DragEvent::Enter) => {
            session.depth += 1;
            if session.depth == 1 && !session.drop_zone_active {
                session.drop_zone_active = true;
                outcomes.push(DragOutcome::DropZone(true));
            }
            DragSlot::Active(session)
        }

        (DragSlot::Idle, DragEvent::Leave | DragEvent::Over | DragEvent::End) => DragSlot::Idle,
        (DragSlot::Active(mut session), DragEvent::Leave) => {
            session.depth = session.depth.saturating_sub(1);
            if session.depth == 0 && session.drop_zone_active {
                session.drop_zone_active = false;
                outcomes.push(DragOutcome::DropZone(false));
            }
            if session.depth == 0 && session.payload.is_none() {
                // Foreign drags never deliver dragend to us.
                DragSlot::Idle
            } else {
                DragSlot::Active(session)
            }
        }
        (active @ DragSlot::Active(_), DragEvent::Over) => active,

        (prev, DragEvent::Drop { data }) => {
            if prev.drop_zone_active() {
                outcomes.push(DragOutcome::DropZone(false));
            }
            let fallback = match prev {
                DragSlot::Active(session) => session.transfer,
                DragSlot::Idle => None,
            };
            let raw = data.or(fallback).unwrap_or_default();
            match decode_payload(&raw) {
                Ok(def) => outcomes.push(DragOutcome::Place(def)),
                Err(e) => outcomes.push(DragOutcome::Rejected(e)),
            }
            DragSlot::Idle
        }

        (DragSlot::Active(session), DragEvent::End) => {
            if session.drop_zone_active {
                outcomes.push(DragOutcome::DropZone(false));
            }
            DragSlot::Idle
        }
    };

    (next, outcomes)
}
