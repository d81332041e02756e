//! In-memory element model for a single host page.
//!
//! Elements are stored in document order and addressed through [`ElementId`]
//! handles. Lookups by id or marker class return `Option<ElementId>` so the
//! absent case is always handled at the call site instead of being
//! dereferenced blindly.

use serde::{Deserialize, Serialize};

pub mod fixture;

/// Handle into a page's element list.
///
/// Handles stay valid for the lifetime of the `Dom` they came from; elements
/// are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) usize);

/// Display mode of an element. `None` means visually hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    #[default]
    Block,
    Inline,
    None,
}

/// A single page element: tag, optional id, marker classes, text content,
/// display mode, and (for file inputs) the current file selection.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    display: Display,
    files: Vec<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            display: Display::default(),
            files: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    /// Selected file names, first selection first.
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }
}

/// Flat element collection for one page.
#[derive(Debug, Default)]
pub struct Dom {
    elements: Vec<Element>,
}

impl Dom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, preserving document order.
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    /// First element whose id attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
            .map(ElementId)
    }

    /// First element in document order carrying the marker class.
    pub fn first_by_class(&self, class: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|el| el.classes.iter().any(|c| c == class))
            .map(ElementId)
    }

    pub fn tag(&self, element: ElementId) -> &str {
        &self.elements[element.0].tag
    }

    pub fn text_content(&self, element: ElementId) -> &str {
        &self.elements[element.0].text
    }

    pub fn set_text_content(&mut self, element: ElementId, text: impl Into<String>) {
        self.elements[element.0].text = text.into();
    }

    pub fn display(&self, element: ElementId) -> Display {
        self.elements[element.0].display
    }

    pub fn set_display(&mut self, element: ElementId, display: Display) {
        self.elements[element.0].display = display;
    }

    pub fn selected_files(&self, element: ElementId) -> &[String] {
        &self.elements[element.0].files
    }

    pub fn set_selected_files(&mut self, element: ElementId, files: Vec<String>) {
        self.elements[element.0].files = files;
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
