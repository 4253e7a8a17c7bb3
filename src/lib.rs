//! Document state engine for the drag-and-drop page builder.
//!
//! This crate owns everything with real invariants in the builder: the catalog
//! of placeable component types, the ordered document of placed instances, the
//! drag-and-drop placement protocol, single selection, the schema-driven
//! property editor, and the render dispatcher that turns state into a visual
//! tree. The host UI layer is responsible only for wiring DOM events into
//! [`engine::Engine::handle`] and drawing the returned [`render::VNode`] trees.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Single-owner state object; consumes events, returns actions |
//! | [`registry`] | Static component catalog: defaults and field schemas |
//! | [`doc`] | Ordered document of placed component instances |
//! | [`drag`] | Drag session slot and the placement state machine |
//! | [`selection`] | Zero-or-one selected instance |
//! | [`editor`] | Property panel generation and per-kind edit coercion |
//! | [`render`] | Pure instance/canvas/palette to visual tree mapping |
//! | [`input`] | Event types delivered by the host |
//! | [`config`] | Environment-derived engine settings |
//! | [`color`] | Hex color parsing for the color swatch |
//! | [`consts`] | Shared visual constants (highlight, viewport widths, etc.) |

pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod drag;
pub mod editor;
pub mod engine;
pub mod input;
pub mod registry;
pub mod render;
pub mod selection;
