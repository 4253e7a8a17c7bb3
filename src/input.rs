//! Input model: the events the host delivers to the engine.
//!
//! Every state change in the builder starts as one of these events. Render
//! output refers back to them too: a node's click or drag-start binding is the
//! [`Event`] the host should dispatch when it fires.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DESKTOP_MAX_WIDTH, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};
use crate::doc::InstanceId;
use crate::drag::DragEvent;
use crate::registry::ComponentKind;

/// Canvas preview width preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Viewport {
    /// Max width of the canvas frame for this preset.
    #[must_use]
    pub fn max_width(self) -> &'static str {
        match self {
            Self::Mobile => MOBILE_MAX_WIDTH,
            Self::Tablet => TABLET_MAX_WIDTH,
            Self::Desktop => DESKTOP_MAX_WIDTH,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown viewport name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown viewport `{0}` (expected mobile, tablet or desktop)")]
pub struct UnknownViewport(pub String);

impl FromStr for Viewport {
    type Err = UnknownViewport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Self::Mobile),
            "tablet" => Ok(Self::Tablet),
            "desktop" => Ok(Self::Desktop),
            _ => Err(UnknownViewport(s.to_owned())),
        }
    }
}

/// Toolbar buttons that have no engine behavior yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolbarAction {
    Undo,
    Redo,
    Save,
    Preview,
}

/// A discrete UI event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// A palette entry for `kind` started dragging.
    BeginDrag(ComponentKind),
    /// Raw drag event on the canvas drop target.
    Drag(DragEvent),
    /// An instance was clicked.
    Select(InstanceId),
    /// The canvas background was clicked.
    ClearSelection,
    /// The delete control of an instance was clicked.
    Delete(InstanceId),
    /// A property panel control produced a new raw value.
    EditField { key: String, value: String },
    /// The viewport preset changed.
    SetViewport(Viewport),
    /// A toolbar button was pressed.
    Toolbar(ToolbarAction),
}
