//! Component registry: the fixed catalog of placeable component types.
//!
//! Each [`ComponentKind`] has a default property map and an ordered field
//! schema describing which properties are user-editable and how. The catalog is
//! compiled in; every lookup here is pure and total.
//!
//! Property values are strings except for the integer column count, which is
//! why [`PropValue`] is a two-variant sum rather than a plain `String`.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Integer value (only `columnCount` uses this today).
    Int(i64),
    /// String value: CSS lengths, colors, text content, URLs.
    Text(String),
}

impl PropValue {
    /// The string payload, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// The integer payload, if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Property key to value mapping.
pub type PropMap = BTreeMap<String, PropValue>;

/// The closed set of component types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Paragraph of free text.
    Text,
    /// Heading rendered with a configurable `h1`..`h6` tag.
    Heading,
    /// Call-to-action button with a link target.
    Button,
    /// Image loaded from a URL.
    Image,
    /// Styled layout box (placeholder only, never holds children).
    Container,
    /// Grid of evenly spaced placeholder column slots.
    Columns,
}

impl ComponentKind {
    /// Every kind, in library order.
    pub const ALL: [Self; 6] = [
        Self::Text,
        Self::Heading,
        Self::Button,
        Self::Image,
        Self::Container,
        Self::Columns,
    ];

    /// Human-readable name shown in the palette and the property panel header.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Text => "Text Block",
            Self::Heading => "Heading",
            Self::Button => "Button",
            Self::Image => "Image",
            Self::Container => "Container",
            Self::Columns => "2 Columns",
        }
    }

    /// Palette category this kind is listed under.
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::Text | Self::Heading | Self::Button => Category::Basic,
            Self::Image => Category::Media,
            Self::Container | Self::Columns => Category::Layout,
        }
    }
}

/// Palette grouping for component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Basic,
    Media,
    Layout,
}

impl Category {
    /// Section heading shown in the palette.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Media => "Media",
            Self::Layout => "Layout",
        }
    }
}

/// How a field is edited, with the per-kind constraints attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InputKind {
    /// Single-line text input.
    Text,
    /// Multi-line text area.
    LongText,
    /// URL input.
    Url,
    /// Color swatch plus raw string input.
    Color,
    /// Drop-down restricted to `options`.
    Select { options: Vec<PropValue> },
    /// Slider over `min..=max`, stored as `<number><unit>`.
    Range { min: i64, max: i64, unit: &'static str },
}

/// One editable field in a type's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Property key this field edits.
    pub key: &'static str,
    /// Label shown above the control.
    pub label: &'static str,
    /// Control kind and constraints.
    pub input: InputKind,
    /// Panel section the field is listed under.
    pub group: &'static str,
}

/// A component type definition: what gets dragged out of the palette.
///
/// Serialized with the `type` / `defaultProps` keys used by the drag transfer
/// encoding. Decoding reads only those two keys; `name` and `category` are
/// palette display data and are always derived from the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DefinitionWire")]
pub struct ComponentDef {
    /// Component type discriminator.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Display name.
    pub name: String,
    /// Palette category.
    pub category: Category,
    /// Initial property values for new instances.
    #[serde(rename = "defaultProps")]
    pub default_props: PropMap,
}

/// Decoded form of a drag payload.
#[derive(Deserialize)]
struct DefinitionWire {
    #[serde(rename = "type")]
    kind: ComponentKind,
    #[serde(rename = "defaultProps", default)]
    default_props: PropMap,
}

impl From<DefinitionWire> for ComponentDef {
    fn from(wire: DefinitionWire) -> Self {
        Self {
            kind: wire.kind,
            name: wire.kind.display_name().to_owned(),
            category: wire.kind.category(),
            default_props: wire.default_props,
        }
    }
}

/// Full definition for `kind`.
#[must_use]
pub fn definition(kind: ComponentKind) -> ComponentDef {
    ComponentDef {
        kind,
        name: kind.display_name().to_owned(),
        category: kind.category(),
        default_props: default_props(kind),
    }
}

/// Every component definition, in library order.
#[must_use]
pub fn list_types() -> Vec<ComponentDef> {
    ComponentKind::ALL.into_iter().map(definition).collect()
}

/// Library grouped by category, preserving first-seen category order.
#[must_use]
pub fn categories() -> Vec<(Category, Vec<ComponentDef>)> {
    let mut groups: Vec<(Category, Vec<ComponentDef>)> = Vec::new();
    for def in list_types() {
        match groups.iter_mut().find(|(c, _)| *c == def.category) {
            Some((_, defs)) => defs.push(def),
            None => groups.push((def.category, vec![def])),
        }
    }
    groups
}

fn props<const N: usize>(pairs: [(&str, PropValue); N]) -> PropMap {
    pairs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
}

fn t(value: &str) -> PropValue {
    PropValue::from(value)
}

/// Default properties for a new instance of `kind`.
#[must_use]
pub fn default_props(kind: ComponentKind) -> PropMap {
    match kind {
        ComponentKind::Text => props([
            ("content", t("Your text here...")),
            ("fontSize", t("16px")),
            ("color", t("#333333")),
            ("textAlign", t("left")),
            ("fontWeight", t("normal")),
            ("width", t("100%")),
            ("height", t("40px")),
            ("padding", t("8px")),
            ("margin", t("8px")),
        ]),
        ComponentKind::Heading => props([
            ("content", t("Your Heading")),
            ("level", t("h2")),
            ("fontSize", t("32px")),
            ("color", t("#1a1a1a")),
            ("textAlign", t("left")),
            ("fontWeight", t("bold")),
            ("width", t("100%")),
            ("height", t("60px")),
            ("padding", t("16px")),
            ("margin", t("8px")),
        ]),
        ComponentKind::Button => props([
            ("text", t("Click Me")),
            ("backgroundColor", t("#3b82f6")),
            ("color", t("#ffffff")),
            ("padding", t("12px")),
            ("borderRadius", t("8px")),
            ("fontSize", t("16px")),
            ("href", t("#")),
            ("width", t("200px")),
            ("height", t("45px")),
        ]),
        ComponentKind::Image => props([
            ("src", t("https://via.placeholder.com/300x200?text=Your+Image")),
            ("alt", t("Image description")),
            ("width", t("300px")),
            ("height", t("200px")),
            ("borderRadius", t("0px")),
            ("objectFit", t("cover")),
        ]),
        ComponentKind::Container => props([
            ("backgroundColor", t("#f8f9fa")),
            ("padding", t("20px")),
            ("borderRadius", t("8px")),
            ("minHeight", t("100px")),
            ("border", t("2px dashed #dee2e6")),
            ("width", t("100%")),
            ("height", t("200px")),
            ("margin", t("8px")),
        ]),
        ComponentKind::Columns => props([
            ("columnCount", PropValue::Int(2)),
            ("gap", t("20px")),
            ("backgroundColor", t("transparent")),
            ("padding", t("10px")),
            ("width", t("100%")),
            ("height", t("300px")),
        ]),
    }
}

fn field(key: &'static str, label: &'static str, input: InputKind, group: &'static str) -> FieldDescriptor {
    FieldDescriptor { key, label, input, group }
}

fn select(options: &[&str]) -> InputKind {
    InputKind::Select { options: options.iter().map(|o| t(o)).collect() }
}

fn range(min: i64, max: i64, unit: &'static str) -> InputKind {
    InputKind::Range { min, max, unit }
}

const ALIGN: [&str; 3] = ["left", "center", "right"];

/// Ordered editable-field schema for `kind`.
#[must_use]
pub fn field_schema(kind: ComponentKind) -> Vec<FieldDescriptor> {
    match kind {
        ComponentKind::Text => vec![
            field("content", "Content", InputKind::LongText, "Content"),
            field("fontSize", "Font Size", select(&["12px", "14px", "16px", "18px", "20px", "24px"]), "Style"),
            field("color", "Text Color", InputKind::Color, "Style"),
            field("textAlign", "Text Align", select(&ALIGN), "Style"),
            field(
                "fontWeight",
                "Font Weight",
                select(&["normal", "bold", "300", "400", "500", "600", "700"]),
                "Style",
            ),
            field("width", "Width", range(50, 100, "%"), "Size"),
            field("height", "Height", range(20, 200, "px"), "Size"),
            field("padding", "Padding", range(0, 50, "px"), "Size"),
            field("margin", "Margin", range(0, 50, "px"), "Size"),
        ],
        ComponentKind::Heading => vec![
            field("content", "Heading Text", InputKind::Text, "Content"),
            field("level", "Heading Level", select(&["h1", "h2", "h3", "h4", "h5", "h6"]), "Content"),
            field("fontSize", "Font Size", select(&["18px", "24px", "32px", "40px", "48px", "56px"]), "Style"),
            field("color", "Color", InputKind::Color, "Style"),
            field("textAlign", "Text Align", select(&ALIGN), "Style"),
            field("width", "Width", range(30, 100, "%"), "Size"),
            field("height", "Height", range(30, 150, "px"), "Size"),
            field("padding", "Padding", range(0, 50, "px"), "Size"),
            field("margin", "Margin", range(0, 50, "px"), "Size"),
        ],
        ComponentKind::Button => vec![
            field("text", "Button Text", InputKind::Text, "Content"),
            field("href", "Link URL", InputKind::Url, "Content"),
            field("backgroundColor", "Background Color", InputKind::Color, "Style"),
            field("color", "Text Color", InputKind::Color, "Style"),
            field("fontSize", "Font Size", select(&["12px", "14px", "16px", "18px", "20px"]), "Style"),
            field(
                "borderRadius",
                "Border Radius",
                select(&["0px", "4px", "8px", "12px", "16px", "24px"]),
                "Style",
            ),
            field("width", "Width", range(80, 400, "px"), "Size"),
            field("height", "Height", range(25, 80, "px"), "Size"),
            field("padding", "Padding", range(5, 30, "px"), "Size"),
        ],
        ComponentKind::Image => vec![
            field("src", "Image URL", InputKind::Url, "Content"),
            field("alt", "Alt Text", InputKind::Text, "Content"),
            field("borderRadius", "Border Radius", select(&["0px", "4px", "8px", "12px", "16px"]), "Style"),
            field("width", "Width", range(50, 800, "px"), "Size"),
            field("height", "Height", range(50, 600, "px"), "Size"),
            field("objectFit", "Image Fit", select(&["cover", "contain", "fill", "scale-down"]), "Style"),
        ],
        ComponentKind::Container => vec![
            field("backgroundColor", "Background Color", InputKind::Color, "Style"),
            field("padding", "Padding", range(0, 100, "px"), "Style"),
            field("borderRadius", "Border Radius", select(&["0px", "4px", "8px", "12px", "16px"]), "Style"),
            field("width", "Width", range(20, 100, "%"), "Size"),
            field("height", "Height", range(50, 800, "px"), "Size"),
            field("margin", "Margin", range(0, 50, "px"), "Size"),
        ],
        ComponentKind::Columns => vec![
            field(
                "columnCount",
                "Columns",
                InputKind::Select { options: (1..=4).map(PropValue::Int).collect() },
                "Layout",
            ),
            field("gap", "Gap", select(&["10px", "20px", "30px", "40px"]), "Layout"),
            field("backgroundColor", "Background", InputKind::Color, "Style"),
            field("padding", "Padding", range(0, 60, "px"), "Style"),
            field("width", "Width", range(30, 100, "%"), "Size"),
            field("height", "Height", range(100, 800, "px"), "Size"),
        ],
    }
}

/// Look up the descriptor for `key` in `kind`'s schema.
#[must_use]
pub fn field_for(kind: ComponentKind, key: &str) -> Option<FieldDescriptor> {
    field_schema(kind).into_iter().find(|f| f.key == key)
}
