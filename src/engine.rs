//! Engine: the single owner of builder state.
//!
//! [`Engine`] holds the document, the selection, the drag slot and the
//! viewport. Every mutation goes through [`Engine::handle`] (or the direct
//! operations it delegates to), which applies one event to completion and
//! returns the resulting [`Action`]s for the host. Nothing else can write this
//! state, so a drop's reset, placement and selection are observed together.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::doc::{ComponentInstance, Document, InstanceId};
use crate::drag::{self, DragEvent, DragOutcome, DragSlot};
use crate::editor::{self, PropertyPanel};
use crate::input::{Event, Viewport};
use crate::registry::{self, ComponentDef, PropMap};
use crate::render::{self, VNode};
use crate::selection::Selection;

/// Effects returned from event handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// A new instance was appended to the document.
    Placed { instance: ComponentInstance },
    /// Properties of an instance were merged.
    Updated { id: InstanceId, props: PropMap },
    /// An instance was removed.
    Removed { id: InstanceId },
    /// The selection now points at `id` (or nothing).
    SelectionChanged { id: Option<InstanceId> },
    /// The canvas drop-target highlight turned on or off.
    DropZoneChanged { active: bool },
    /// A drop was aborted; the document is unchanged.
    DropRejected { reason: String },
    /// The viewport preset changed.
    ViewportChanged { viewport: Viewport },
    /// Visible state changed; views must re-render.
    RenderNeeded,
}

/// Builder state and the event dispatcher that owns it.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    doc: Document,
    selection: Selection,
    drag: DragSlot,
    viewport: Viewport,
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine starting in the configured viewport.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { viewport: config.viewport, config, ..Self::default() }
    }

    // --- Event dispatch ---

    /// Apply one UI event.
    pub fn handle(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::BeginDrag(kind) => self.drag(DragEvent::Start(registry::definition(kind))),
            Event::Drag(ev) => self.drag(ev),
            Event::Select(id) => self.select(id),
            Event::ClearSelection => self.clear_selection(),
            Event::Delete(id) => self.remove(&id),
            Event::EditField { key, value } => self.edit_field(&key, &value),
            Event::SetViewport(viewport) => self.set_viewport(viewport),
            Event::Toolbar(action) => {
                tracing::debug!(?action, "toolbar action has no handler");
                Vec::new()
            }
        }
    }

    /// Feed one drag event through the placement protocol.
    pub fn drag(&mut self, event: DragEvent) -> Vec<Action> {
        let slot = std::mem::take(&mut self.drag);
        let (next, outcomes) = drag::transition(slot, event);
        self.drag = next;

        let mut actions = Vec::new();
        for outcome in outcomes {
            match outcome {
                DragOutcome::DropZone(active) => actions.push(Action::DropZoneChanged { active }),
                DragOutcome::Place(def) => {
                    let instance = self.doc.place(&def).clone();
                    tracing::debug!(id = %instance.id, kind = ?instance.kind, "component dropped");
                    self.selection.select(instance.id);
                    actions.push(Action::SelectionChanged { id: Some(instance.id) });
                    actions.push(Action::Placed { instance });
                }
                DragOutcome::Rejected(e) => {
                    tracing::warn!(error = %e, "drop aborted");
                    actions.push(Action::DropRejected { reason: e.to_string() });
                }
            }
        }

        if actions.iter().any(|a| !matches!(a, Action::DropRejected { .. })) {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Document operations ---

    /// Append a new instance of `def` without touching the selection.
    pub fn place(&mut self, def: &ComponentDef) -> Vec<Action> {
        let instance = self.doc.place(def).clone();
        tracing::debug!(id = %instance.id, kind = ?instance.kind, "component placed");
        vec![Action::Placed { instance }, Action::RenderNeeded]
    }

    /// Merge `partial` into an instance's properties. No-op if `id` is absent.
    pub fn update(&mut self, id: &InstanceId, partial: &PropMap) -> Vec<Action> {
        if !self.doc.update(id, partial) {
            return Vec::new();
        }
        vec![Action::Updated { id: *id, props: partial.clone() }, Action::RenderNeeded]
    }

    /// Delete an instance, clearing the selection if it pointed there.
    pub fn remove(&mut self, id: &InstanceId) -> Vec<Action> {
        if self.doc.remove(id).is_none() {
            return Vec::new();
        }
        tracing::debug!(%id, "component deleted");
        let mut actions = vec![Action::Removed { id: *id }];
        if self.selection.forget(id) {
            actions.push(Action::SelectionChanged { id: None });
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Selection ---

    /// Select `id`. Stale ids are accepted and highlight nothing.
    pub fn select(&mut self, id: InstanceId) -> Vec<Action> {
        if self.selection.is_selected(&id) {
            return Vec::new();
        }
        self.selection.select(id);
        vec![Action::SelectionChanged { id: Some(id) }, Action::RenderNeeded]
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        if self.selection.current().is_none() {
            return Vec::new();
        }
        self.selection.clear();
        vec![Action::SelectionChanged { id: None }, Action::RenderNeeded]
    }

    // --- Property editor ---

    /// Commit a raw control value for `key` on the selected instance.
    pub fn edit_field(&mut self, key: &str, value: &str) -> Vec<Action> {
        match editor::commit(&mut self.doc, &self.selection, key, value) {
            Some(commit) => vec![Action::Updated { id: commit.id, props: commit.patch }, Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Viewport ---

    pub fn set_viewport(&mut self, viewport: Viewport) -> Vec<Action> {
        if self.viewport == viewport {
            return Vec::new();
        }
        tracing::debug!(%viewport, "viewport changed");
        self.viewport = viewport;
        vec![Action::ViewportChanged { viewport }, Action::RenderNeeded]
    }

    // --- Queries ---

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    #[must_use]
    pub fn selection(&self) -> Option<InstanceId> {
        self.selection.current()
    }

    #[must_use]
    pub fn find(&self, id: &InstanceId) -> Option<&ComponentInstance> {
        self.doc.find(id)
    }

    #[must_use]
    pub fn drag_slot(&self) -> &DragSlot {
        &self.drag
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Property panel for the current selection.
    #[must_use]
    pub fn panel(&self) -> Option<PropertyPanel> {
        editor::panel(&self.doc, &self.selection)
    }

    /// Visual tree for the canvas in its current state.
    #[must_use]
    pub fn render(&self) -> VNode {
        render::render_canvas(
            &self.doc,
            &self.selection,
            self.drag.drop_zone_active(),
            self.viewport,
            &self.config.highlight,
        )
    }

    /// Visual tree for the component palette.
    #[must_use]
    pub fn palette(&self) -> VNode {
        render::render_palette()
    }
}
