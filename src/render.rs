//! Rendering: maps document state to a declarative visual tree.
//!
//! Everything here is a pure function of its arguments. The host turns the
//! returned [`VNode`] tree into DOM and wires each node's `on_click` /
//! `on_drag_start` binding back into [`crate::engine::Engine::handle`].
//!
//! Each component kind has a fixed, total mapping from its properties to CSS.
//! Whenever a property is absent the literal fallback for that slot is used.
//! Selection only adds an outline and a delete control; it never changes any
//! other attribute.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::consts::{
    DEFAULT_COLUMN_COUNT, DEFAULT_HIGHLIGHT, HIGHLIGHT_OFFSET, HIGHLIGHT_WIDTH, INSTANCE_SPACING, PLACEHOLDER_BORDER,
    PLACEHOLDER_TEXT, SLOT_BORDER, SLOT_FILL,
};
use crate::doc::{ComponentInstance, Document, Props};
use crate::input::{Event, Viewport};
use crate::registry::{self, ComponentKind};
use crate::selection::Selection;

/// Upper bound on rendered column slots, whatever `columnCount` says.
const MAX_COLUMN_SLOTS: usize = 12;

/// Heading tags a `level` property may name.
const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// A node in the visual tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VNode {
    Element(Element),
    Text(String),
}

/// An element node with attributes, inline style and event bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<&'static str, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<&'static str, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_drag_start: Option<Event>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VNode>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    #[must_use]
    pub fn style(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.style.insert(name, value.into());
        self
    }

    #[must_use]
    pub fn on_click(mut self, event: Event) -> Self {
        self.on_click = Some(event);
        self
    }

    #[must_use]
    pub fn on_drag_start(mut self, event: Event) -> Self {
        self.on_drag_start = Some(event);
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<VNode>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(VNode::Text(text.into()))
    }

    /// Inline style value for `name`.
    #[must_use]
    pub fn style_of(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }
}

impl From<Element> for VNode {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl VNode {
    /// The element, if this is not a text node.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Element(el) => el.children.iter().map(Self::text_content).collect(),
        }
    }
}

// =============================================================
// Instance dispatch
// =============================================================

/// Render one instance with the default highlight color.
#[must_use]
pub fn render_instance(inst: &ComponentInstance, is_selected: bool) -> VNode {
    render_instance_with(inst, is_selected, DEFAULT_HIGHLIGHT)
}

/// Render one instance, outlining it in `highlight` when selected.
#[must_use]
pub fn render_instance_with(inst: &ComponentInstance, is_selected: bool, highlight: &str) -> VNode {
    let props = Props::new(&inst.props);
    let root = base(inst, is_selected, highlight);

    let root = match inst.kind {
        ComponentKind::Text => render_text(root, &props),
        ComponentKind::Heading => render_heading(root, &props),
        ComponentKind::Button => render_button(root, &props),
        ComponentKind::Image => render_image(root, &props),
        ComponentKind::Container => render_container(root, &props),
        ComponentKind::Columns => render_columns(root, &props),
    };

    if is_selected {
        root.child(delete_control(inst)).into()
    } else {
        root.into()
    }
}

fn base(inst: &ComponentInstance, is_selected: bool, highlight: &str) -> Element {
    let outline = if is_selected { format!("{HIGHLIGHT_WIDTH} solid {highlight}") } else { "none".to_owned() };
    Element::new("div")
        .key(inst.id.to_string())
        .attr("data-component", kind_name(inst.kind))
        .style("cursor", "pointer")
        .style("position", "relative")
        .style("outline", outline)
        .style("outline-offset", HIGHLIGHT_OFFSET)
        .style("margin-bottom", INSTANCE_SPACING)
        .on_click(Event::Select(inst.id))
}

fn kind_name(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Text => "text",
        ComponentKind::Heading => "heading",
        ComponentKind::Button => "button",
        ComponentKind::Image => "image",
        ComponentKind::Container => "container",
        ComponentKind::Columns => "columns",
    }
}

fn delete_control(inst: &ComponentInstance) -> Element {
    Element::new("div").attr("class", "component-controls").child(
        Element::new("button")
            .attr("title", "Delete component")
            .on_click(Event::Delete(inst.id))
            .text("Delete"),
    )
}

// =============================================================
// Per-kind renderers
// =============================================================

fn typography(el: Element, props: &Props<'_>, weight: &str) -> Element {
    el.style("font-size", props.str_or("fontSize", "inherit"))
        .style("color", props.str_or("color", "inherit"))
        .style("text-align", props.str_or("textAlign", "left"))
        .style("font-weight", props.str_or("fontWeight", weight))
}

fn render_text(root: Element, props: &Props<'_>) -> Element {
    typography(root, props, "normal")
        .style("padding", props.str_or("padding", "8px"))
        .style("margin", props.str_or("margin", "8px"))
        .style("width", props.str_or("width", "100%"))
        .style("height", props.str_or("height", "auto"))
        .style("min-height", "20px")
        .style("box-sizing", "border-box")
        .style("display", "flex")
        .style("align-items", "center")
        .text(props.str("content"))
}

fn render_heading(mut root: Element, props: &Props<'_>) -> Element {
    let level = props.str_or("level", "h2");
    root.tag = if HEADING_TAGS.contains(&level.as_str()) { level } else { "h2".to_owned() };
    typography(root, props, "bold")
        .style("margin", props.str_or("margin", "8px"))
        .style("padding", props.str_or("padding", "16px"))
        .style("width", props.str_or("width", "100%"))
        .style("height", props.str_or("height", "auto"))
        .style("box-sizing", "border-box")
        .style("display", "flex")
        .style("align-items", "center")
        .text(props.str("content"))
}

fn render_button(root: Element, props: &Props<'_>) -> Element {
    let button = Element::new("a")
        .attr("role", "button")
        .attr("href", props.str_or("href", "#"))
        .style("background-color", props.str_or("backgroundColor", "transparent"))
        .style("color", props.str_or("color", "inherit"))
        .style("padding", props.str_or("padding", "12px"))
        .style("border-radius", props.str_or("borderRadius", "0px"))
        .style("font-size", props.str_or("fontSize", "inherit"))
        .style("border", "none")
        .style("cursor", "pointer")
        .style("width", props.str_or("width", "200px"))
        .style("height", props.str_or("height", "45px"))
        .style("box-sizing", "border-box")
        .style("display", "flex")
        .style("align-items", "center")
        .style("justify-content", "center")
        .text(props.str("text"));
    root.style("display", "inline-block").style("margin", "8px").child(button)
}

fn render_image(root: Element, props: &Props<'_>) -> Element {
    let img = Element::new("img")
        .attr("src", props.str("src"))
        .attr("alt", props.str("alt"))
        .style("width", props.str_or("width", "300px"))
        .style("height", props.str_or("height", "200px"))
        .style("border-radius", props.str_or("borderRadius", "0px"))
        .style("display", "block")
        .style("object-fit", props.str_or("objectFit", "cover"))
        .style("box-sizing", "border-box");
    root.style("padding", "8px").style("display", "inline-block").child(img)
}

fn render_container(root: Element, props: &Props<'_>) -> Element {
    let caption = Element::new("div")
        .style("color", PLACEHOLDER_TEXT)
        .style("text-align", "center")
        .style("padding", "20px")
        .text("Container - Drop components here");
    root.style("background-color", props.str_or("backgroundColor", "transparent"))
        .style("padding", props.str_or("padding", "20px"))
        .style("border-radius", props.str_or("borderRadius", "0px"))
        .style("min-height", props.str_or("minHeight", "100px"))
        .style("border", props.str_or("border", PLACEHOLDER_BORDER))
        .style("margin", props.str_or("margin", "8px"))
        .style("width", props.str_or("width", "100%"))
        .style("height", props.str_or("height", "200px"))
        .style("box-sizing", "border-box")
        .child(caption)
}

/// Number of placeholder slots a `columns` instance expands into.
#[must_use]
pub fn column_slots(props: &Props<'_>) -> usize {
    let Some(count) = props.int("columnCount") else {
        return DEFAULT_COLUMN_COUNT;
    };
    usize::try_from(count.max(0)).unwrap_or(MAX_COLUMN_SLOTS).min(MAX_COLUMN_SLOTS)
}

fn render_columns(root: Element, props: &Props<'_>) -> Element {
    let count = column_slots(props);
    let mut root = root
        .style("display", "grid")
        .style("grid-template-columns", format!("repeat({count}, 1fr)"))
        .style("gap", props.str_or("gap", "0px"))
        .style("background-color", props.str_or("backgroundColor", "transparent"))
        .style("padding", props.str_or("padding", "0px"))
        .style("width", props.str_or("width", "100%"))
        .style("height", props.str_or("height", "auto"))
        .style("margin", "8px 0")
        .style("border", PLACEHOLDER_BORDER)
        .style("border-radius", "8px")
        .style("min-height", "200px");

    for index in 0..count {
        root = root.child(
            Element::new("div")
                .key(index.to_string())
                .style("min-height", "100px")
                .style("background-color", SLOT_FILL)
                .style("border", SLOT_BORDER)
                .style("border-radius", "4px")
                .style("display", "flex")
                .style("align-items", "center")
                .style("justify-content", "center")
                .style("color", PLACEHOLDER_TEXT)
                .style("font-size", "14px")
                .text(format!("Column {}", index + 1)),
        );
    }
    root
}

// =============================================================
// Canvas and palette
// =============================================================

/// Render the canvas drop target with every placed instance in order.
#[must_use]
pub fn render_canvas(
    doc: &Document,
    selection: &Selection,
    drop_zone_active: bool,
    viewport: Viewport,
    highlight: &str,
) -> VNode {
    let (background, border) = if drop_zone_active {
        ("#eff6ff", "2px dashed #60a5fa")
    } else {
        ("#f1f5f9", "2px solid #e5e7eb")
    };

    let body = if doc.is_empty() {
        Element::new("div")
            .attr("class", "empty-state")
            .style("text-align", "center")
            .style("padding", "80px 0")
            .child(Element::new("h3").text("Start Building Your Website"))
            .child(Element::new("p").text("Drag components from the sidebar to get started"))
    } else {
        doc.iter().fold(Element::new("div").attr("class", "instances"), |list, inst| {
            list.child(render_instance_with(inst, selection.is_selected(&inst.id), highlight))
        })
    };

    let frame = Element::new("div")
        .attr("class", "canvas-frame")
        .attr("data-viewport", viewport.as_str())
        .style("max-width", viewport.max_width())
        .style("margin", "0 auto")
        .style("min-height", "100%")
        .style("padding", "32px")
        .style("background-color", "#ffffff")
        .style("border", border)
        .child(body);

    Element::new("div")
        .attr("class", "canvas")
        .style("background-color", background)
        .style("padding", "32px")
        .on_click(Event::ClearSelection)
        .child(frame)
        .into()
}

/// Render the component palette, grouped by category.
#[must_use]
pub fn render_palette() -> VNode {
    registry::categories()
        .into_iter()
        .fold(Element::new("div").attr("class", "palette"), |palette, (category, defs)| {
            let grid = defs.into_iter().fold(Element::new("div").attr("class", "palette-grid"), |grid, def| {
                grid.child(
                    Element::new("div")
                        .key(kind_name(def.kind))
                        .attr("draggable", "true")
                        .on_drag_start(Event::BeginDrag(def.kind))
                        .text(def.name),
                )
            });
            palette.child(
                Element::new("section")
                    .child(Element::new("h3").text(category.label()))
                    .child(grid),
            )
        })
        .into()
}
