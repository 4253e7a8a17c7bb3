//! Schema-driven property editor.
//!
//! The panel for the selected instance is derived entirely from its type's
//! field schema: fields are grouped by their declared group (first-seen order)
//! and each becomes a [`Control`] chosen by its [`InputKind`]. Edits arrive as
//! the raw string a control produced and are coerced per kind:
//!
//! | Kind | Coercion |
//! |------|----------|
//! | text / long-text / url | passthrough |
//! | single-select | must match an option; commits the option's typed value |
//! | color | passthrough from either the swatch or the raw input |
//! | numeric-range | leading integer, declared minimum on failure, `<n><unit>` |
//!
//! A committed edit is exactly one [`Document::update`] on the selected
//! instance with a single-key patch.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use serde::Serialize;

use crate::color::normalize_hex_color;
use crate::consts::TEXTAREA_ROWS;
use crate::doc::{Document, InstanceId, Props};
use crate::registry::{self, ComponentKind, FieldDescriptor, InputKind, PropMap, PropValue};
use crate::selection::Selection;

/// Editable control for one field, populated with the current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    TextInput { value: String },
    TextArea { value: String, rows: u32 },
    UrlInput { value: String },
    Select { options: Vec<String>, selected: Option<usize> },
    /// Both views show the same underlying string.
    Color { swatch: String, raw: String },
    Range { value: i64, min: i64, max: i64, unit: &'static str, readout: String },
}

/// One labelled control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub control: Control,
}

/// A titled section of the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldGroup {
    pub name: &'static str,
    pub fields: Vec<FieldView>,
}

/// The full property panel for the selected instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyPanel {
    pub instance: InstanceId,
    pub kind: ComponentKind,
    pub title: &'static str,
    pub groups: Vec<FieldGroup>,
}

/// A committed single-key edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: InstanceId,
    pub patch: PropMap,
}

/// Build the panel for the current selection. `None` when nothing is
/// selected or the selection is stale.
#[must_use]
pub fn panel(doc: &Document, selection: &Selection) -> Option<PropertyPanel> {
    let id = selection.resolve(doc)?;
    let inst = doc.find(&id)?;
    let props = Props::new(&inst.props);

    let mut groups: Vec<FieldGroup> = Vec::new();
    for field in registry::field_schema(inst.kind) {
        let view = FieldView { key: field.key, label: field.label, control: control_for(&field, &props) };
        match groups.iter_mut().find(|g| g.name == field.group) {
            Some(group) => group.fields.push(view),
            None => groups.push(FieldGroup { name: field.group, fields: vec![view] }),
        }
    }

    Some(PropertyPanel { instance: id, kind: inst.kind, title: inst.kind.display_name(), groups })
}

/// Build the control for `field` from the instance's current properties.
#[must_use]
pub fn control_for(field: &FieldDescriptor, props: &Props<'_>) -> Control {
    let value = props.str(field.key);
    match &field.input {
        InputKind::Text => Control::TextInput { value },
        InputKind::LongText => Control::TextArea { value, rows: TEXTAREA_ROWS },
        InputKind::Url => Control::UrlInput { value },
        InputKind::Select { options } => {
            let selected = props.get(field.key).and_then(|current| options.iter().position(|o| o == current));
            Control::Select { options: options.iter().map(ToString::to_string).collect(), selected }
        }
        InputKind::Color => Control::Color { swatch: normalize_hex_color(&value, "#000000"), raw: value },
        InputKind::Range { min, max, unit } => {
            let n = range_value(&value, *min);
            Control::Range { value: n, min: *min, max: *max, unit: *unit, readout: format!("{n}{unit}") }
        }
    }
}

/// Parse the leading integer of `raw` the way a browser's `parseInt` does:
/// optional whitespace and sign, then digits, ignoring any trailing suffix.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude: i64 = match rest[..digits].parse() {
        Ok(n) => n,
        Err(_) => return None,
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Numeric portion of a range value, falling back to `min` when unparseable.
#[must_use]
pub fn range_value(raw: &str, min: i64) -> i64 {
    parse_leading_int(raw).unwrap_or(min)
}

/// Coerce a raw control value into the property value for `field`.
///
/// Returns `None` only for a single-select value outside the declared options.
#[must_use]
pub fn coerce(field: &FieldDescriptor, raw: &str) -> Option<PropValue> {
    match &field.input {
        InputKind::Text | InputKind::LongText | InputKind::Url | InputKind::Color => {
            Some(PropValue::from(raw))
        }
        InputKind::Select { options } => options.iter().find(|o| o.to_string() == raw).cloned(),
        InputKind::Range { min, unit, .. } => {
            Some(PropValue::Text(format!("{}{unit}", range_value(raw, *min))))
        }
    }
}

/// Apply an edit of `key` to the selected instance.
///
/// Returns the committed patch, or `None` when nothing is selected, the
/// selection is stale, `key` is not in the instance's schema, or a select
/// value is off-list.
pub fn commit(doc: &mut Document, selection: &Selection, key: &str, raw: &str) -> Option<Commit> {
    let id = selection.current()?;
    let kind = doc.find(&id)?.kind;
    let Some(field) = registry::field_for(kind, key) else {
        tracing::debug!(?kind, key, "edit for field outside schema ignored");
        return None;
    };
    let Some(value) = coerce(&field, raw) else {
        tracing::debug!(?kind, key, raw, "select value not in options ignored");
        return None;
    };

    let mut patch = PropMap::new();
    patch.insert(field.key.to_owned(), value);
    doc.update(&id, &patch);
    Some(Commit { id, patch })
}
