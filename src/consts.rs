//! Shared visual constants for the page builder.

// ── Selection ───────────────────────────────────────────────────

/// Default outline color for the selected instance.
pub const DEFAULT_HIGHLIGHT: &str = "#3b82f6";

/// Outline width drawn around the selected instance.
pub const HIGHLIGHT_WIDTH: &str = "2px";

/// Gap between an instance and its selection outline.
pub const HIGHLIGHT_OFFSET: &str = "2px";

/// Vertical gap below every rendered instance.
pub const INSTANCE_SPACING: &str = "16px";

// ── Placeholders ────────────────────────────────────────────────

/// Dashed border used for layout placeholders (container, columns).
pub const PLACEHOLDER_BORDER: &str = "2px dashed #dee2e6";

/// Dashed border used for individual column slots.
pub const SLOT_BORDER: &str = "1px dashed #dee2e6";

/// Fill color of individual column slots.
pub const SLOT_FILL: &str = "#f8f9fa";

/// Muted text color for placeholder captions.
pub const PLACEHOLDER_TEXT: &str = "#6b7280";

/// Column count used when a `columns` instance carries no readable count.
pub const DEFAULT_COLUMN_COUNT: usize = 2;

// ── Canvas frame ────────────────────────────────────────────────

/// Canvas frame max width for the mobile viewport (CSS `max-w-sm`).
pub const MOBILE_MAX_WIDTH: &str = "384px";

/// Canvas frame max width for the tablet viewport (CSS `max-w-2xl`).
pub const TABLET_MAX_WIDTH: &str = "672px";

/// Canvas frame max width for the desktop viewport (CSS `max-w-6xl`).
pub const DESKTOP_MAX_WIDTH: &str = "1152px";

/// Number of rows shown by long-text editors.
pub const TEXTAREA_ROWS: u32 = 3;
