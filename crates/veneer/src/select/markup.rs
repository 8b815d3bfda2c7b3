//! Element-tree renderer.
//!
//! [`MarkupRenderer`] materializes a widget as a small element tree and
//! keeps it current through the [`Renderer`] notifications:
//!
//! ```text
//! div.custom-select            (+ opened / disabled / focus)
//! ├── select.custom-select-hidden
//! ├── span.custom-select-trigger   "Banana"
//! └── div.custom-options
//!     ├── span.custom-option               data-value="a"  "Apple"
//!     ├── span.custom-option.selection     data-value="b"  "Banana"
//!     └── span.custom-option               data-value="c"  "Cherry"
//! ```
//!
//! Class names come from the instance's [`ClassNames`]. The tree sits behind
//! an `Arc<Mutex<_>>` so the host can inspect or serialize it while the
//! widget owns the renderer.

use std::fmt::Write as FmtWrite;
use std::sync::Arc;

use parking_lot::Mutex;
use veneer_core::logging::targets;

use super::renderer::{RenderHandle, Renderer};
use super::state::SelectModel;
use crate::config::{ClassNames, SelectConfig};

const NATIVE: usize = 0;
const TRIGGER: usize = 1;
const LIST: usize = 2;

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with one class.
    pub fn new(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: vec![class.into()],
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set the text content using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set an attribute using builder pattern.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child using builder pattern.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The class list, in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether `class` is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add or remove `class`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        let present = self.has_class(class);
        if on && !present {
            self.classes.push(class.to_string());
        } else if !on && present {
            self.classes.retain(|c| c != class);
        }
    }

    /// Look up an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set or replace an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// The text content.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// The child elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.children.get_mut(index)
    }

    fn write_markup(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out.push('>');

        if self.children.is_empty() {
            if let Some(text) = &self.text {
                out.push_str(&escape(text));
            }
            let _ = writeln!(out, "</{}>", self.tag);
            return;
        }

        out.push('\n');
        if let Some(text) = &self.text {
            let _ = writeln!(out, "{indent}  {}", escape(text));
        }
        for child in &self.children {
            child.write_markup(out, depth + 1);
        }
        let _ = writeln!(out, "{indent}</{}>", self.tag);
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// The rendered widget. Empty until the first `render_initial`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupTree {
    root: Option<Element>,
}

impl MarkupTree {
    /// The container element, once rendered.
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// The trigger element, once rendered.
    pub fn trigger(&self) -> Option<&Element> {
        self.root.as_ref()?.children.get(TRIGGER)
    }

    /// The option elements, in document order.
    pub fn options(&self) -> &[Element] {
        self.root
            .as_ref()
            .and_then(|root| root.children.get(LIST))
            .map(|list| list.children())
            .unwrap_or(&[])
    }

    /// Serialize the tree as indented HTML-like text.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        if let Some(root) = &self.root {
            root.write_markup(&mut out, 0);
        }
        out
    }

    fn root_mut(&mut self) -> Option<&mut Element> {
        self.root.as_mut()
    }

    fn part_mut(&mut self, part: usize) -> Option<&mut Element> {
        self.root_mut()?.child_mut(part)
    }

    fn option_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.part_mut(LIST)?.child_mut(index)
    }
}

/// A [`Renderer`] that maintains a [`MarkupTree`].
///
/// # Example
///
/// ```
/// use veneer::{CustomSelect, MarkupRenderer, NativeSelect, SelectConfig};
///
/// let renderer = MarkupRenderer::new();
/// let tree = renderer.tree();
/// let native = NativeSelect::new().with_entry("a", "Apple").with_entry("b", "Banana");
/// let mut select = CustomSelect::new(native, renderer, SelectConfig::default()).unwrap();
///
/// select.select("b").unwrap();
/// let tree = tree.lock();
/// assert_eq!(tree.trigger().and_then(|t| t.text()), Some("Banana"));
/// assert!(tree.options()[1].has_class("selection"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkupRenderer {
    tree: Arc<Mutex<MarkupTree>>,
    classes: ClassNames,
    renders: u64,
}

impl MarkupRenderer {
    /// Create a renderer with an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the rendered tree.
    pub fn tree(&self) -> Arc<Mutex<MarkupTree>> {
        self.tree.clone()
    }

    /// Serialize the current tree.
    pub fn to_markup(&self) -> String {
        self.tree.lock().to_markup()
    }

    fn build(model: &SelectModel, config: &SelectConfig) -> Element {
        let classes = &config.classes;
        let state = model.state();

        let mut native = Element::new("select", &classes.hidden_native)
            .with_attr("data-value", model.selected_option().value());
        if state.is_disabled() {
            native.set_attr("disabled", "disabled");
        }

        let mut trigger =
            Element::new("span", &classes.trigger).with_text(model.selected_option().label());
        if let Some(placeholder) = &config.placeholder {
            trigger.set_attr("data-placeholder", placeholder);
        }

        let mut list = Element::new("div", &classes.list);
        for (index, option) in model.options().iter().enumerate() {
            let mut element = Element::new("span", &classes.option)
                .with_attr("data-value", option.value())
                .with_text(option.label());
            element.set_class(&classes.selected, model.is_selected(index));
            list = list.with_child(element);
        }

        let mut root = Element::new("div", &classes.container)
            .with_child(native)
            .with_child(trigger)
            .with_child(list);
        root.set_class(&classes.open, state.is_expanded());
        root.set_class(&classes.disabled, state.is_disabled());
        root.set_class(&classes.focused, state.is_focused());
        root
    }

    fn update_root(&self, class: &str, on: bool) {
        match self.tree.lock().root_mut() {
            Some(root) => root.set_class(class, on),
            None => tracing::trace!(target: targets::SELECT, class, "update before initial render"),
        }
    }
}

impl Renderer for MarkupRenderer {
    fn render_initial(&mut self, model: &SelectModel, config: &SelectConfig) -> RenderHandle {
        self.classes = config.classes.clone();
        self.tree.lock().root = Some(Self::build(model, config));
        self.renders += 1;
        tracing::debug!(target: targets::SELECT, options = model.options().len(), "markup rendered");
        RenderHandle::new(self.renders)
    }

    fn set_selected_visual(&mut self, index: usize, previous: usize) {
        let mut tree = self.tree.lock();
        if let Some(option) = tree.option_mut(previous) {
            option.set_class(&self.classes.selected, false);
        }
        if let Some(option) = tree.option_mut(index) {
            option.set_class(&self.classes.selected, true);
        }
        let value = tree.options().get(index).and_then(|o| o.attr("data-value")).map(str::to_owned);
        if let (Some(native), Some(value)) = (tree.part_mut(NATIVE), value) {
            native.set_attr("data-value", value);
        }
    }

    fn set_trigger_label(&mut self, text: &str) {
        if let Some(trigger) = self.tree.lock().part_mut(TRIGGER) {
            trigger.set_text(text);
        }
    }

    fn set_expanded_visual(&mut self, expanded: bool) {
        self.update_root(&self.classes.open, expanded);
    }

    fn set_disabled_visual(&mut self, disabled: bool) {
        self.update_root(&self.classes.disabled, disabled);
        if disabled && let Some(native) = self.tree.lock().part_mut(NATIVE) {
            native.set_attr("disabled", "disabled");
        }
    }

    fn set_focused_visual(&mut self, focused: bool) {
        self.update_root(&self.classes.focused, focused);
    }
}

static_assertions::assert_impl_all!(MarkupRenderer: Send, Sync);
