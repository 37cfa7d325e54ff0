//! In-memory document
//!
//! Records what the renderer and panels did to each region, every alert,
//! and every download, so the dashboard can run headless.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Dom, Element, ListItem};
use crate::error::{DashboardError, Result};

/// Snapshot of one element
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    pub text: String,
    pub color: Option<String>,
    pub visible: bool,
    pub markup: String,
    pub items: Vec<ListItem>,
    pub value: String,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: None,
            visible: true,
            markup: String::new(),
            items: Vec::new(),
            value: String::new(),
        }
    }
}

/// A file handed to the download path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime: String,
    pub contents: String,
}

#[derive(Debug, Default)]
struct Document {
    elements: HashMap<String, Rc<RefCell<NodeState>>>,
    alerts: Vec<String>,
    downloads: Vec<Download>,
    refuse_downloads: bool,
}

/// Cheaply clonable handle to a shared in-memory document
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    doc: Rc<RefCell<Document>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing the given (empty) elements
    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let dom = Self::new();
        for id in ids {
            dom.add_element(id);
        }
        dom
    }

    /// Add an empty element; an existing element is kept as is
    pub fn add_element(&self, id: &str) {
        self.doc
            .borrow_mut()
            .elements
            .entry(id.to_string())
            .or_default();
    }

    /// Snapshot of an element's state
    pub fn node(&self, id: &str) -> Option<NodeState> {
        self.doc
            .borrow()
            .elements
            .get(id)
            .map(|node| node.borrow().clone())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.doc.borrow().alerts.clone()
    }

    pub fn downloads(&self) -> Vec<Download> {
        self.doc.borrow().downloads.clone()
    }

    /// Make every later download fail, as a page that blocks them would
    pub fn refuse_downloads(&self) {
        self.doc.borrow_mut().refuse_downloads = true;
    }
}

impl Dom for MemoryDom {
    type Element = MemoryElement;

    fn element(&self, id: &str) -> Option<MemoryElement> {
        self.doc
            .borrow()
            .elements
            .get(id)
            .map(|node| MemoryElement(Rc::clone(node)))
    }

    fn alert(&self, message: &str) {
        self.doc.borrow_mut().alerts.push(message.to_string());
    }

    fn download(&self, file_name: &str, mime: &str, contents: &str) -> Result<()> {
        let mut doc = self.doc.borrow_mut();
        if doc.refuse_downloads {
            return Err(DashboardError::Dom(format!("download of {file_name} refused")));
        }
        doc.downloads.push(Download {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            contents: contents.to_string(),
        });
        Ok(())
    }
}

/// Handle to one in-memory element
#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<NodeState>>);

impl Element for MemoryElement {
    fn set_text(&self, text: &str) {
        let mut node = self.0.borrow_mut();
        node.items.clear();
        node.markup.clear();
        node.text = text.to_string();
    }

    fn set_color(&self, color: &str) {
        self.0.borrow_mut().color = Some(color.to_string());
    }

    fn set_visible(&self, visible: bool) {
        self.0.borrow_mut().visible = visible;
    }

    fn set_markup(&self, markup: &str) {
        let mut node = self.0.borrow_mut();
        node.items.clear();
        node.text.clear();
        node.markup = markup.to_string();
    }

    fn clear(&self) {
        let mut node = self.0.borrow_mut();
        node.items.clear();
        node.text.clear();
        node.markup.clear();
    }

    fn append_item(&self, item: &ListItem) {
        self.0.borrow_mut().items.push(item.clone());
    }

    fn value(&self) -> Option<String> {
        Some(self.0.borrow().value.clone())
    }

    fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }
}
