//! In-memory page document.
//!
//! A [`Page`] holds the body's appended elements in order plus named
//! containers whose inner HTML can be replaced. Clones share one document,
//! so a timer task can remove an element the caller appended.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::ViewError;

/// What an element displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Literal text, never interpreted as markup.
    Text(String),
    /// Pre-rendered markup.
    Html(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: Option<String>,
    pub class: String,
    pub content: Content,
}

impl Element {
    #[must_use]
    pub fn text(class: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: None,
            class: class.into(),
            content: Content::Text(text.into()),
        }
    }

    #[must_use]
    pub fn html(class: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            id: None,
            class: class.into(),
            content: Content::Html(html.into()),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Identifies one appended element for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(u64);

#[derive(Debug, Default)]
struct Document {
    body: Vec<(ElementHandle, Element)>,
    containers: HashMap<String, String>,
    next_handle: u64,
}

/// Shared handle to one document.
#[derive(Debug, Clone, Default)]
pub struct Page {
    document: Arc<Mutex<Document>>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with empty containers for each of `ids`.
    #[must_use]
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let document = Document {
            containers: ids.into_iter().map(|id| (id.into(), String::new())).collect(),
            ..Document::default()
        };
        Self {
            document: Arc::new(Mutex::new(document)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Document>, ViewError> {
        self.document
            .lock()
            .map_err(|e| ViewError::LockPoisoned(e.to_string()))
    }

    /// Append `element` to the end of the body.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::LockPoisoned`] if a previous holder panicked.
    pub fn append(&self, element: Element) -> Result<ElementHandle, ViewError> {
        let mut doc = self.lock()?;
        let handle = ElementHandle(doc.next_handle);
        doc.next_handle += 1;
        doc.body.push((handle, element));
        Ok(handle)
    }

    /// Remove an appended element. Returns whether it was still present.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::LockPoisoned`] if a previous holder panicked.
    pub fn remove(&self, handle: ElementHandle) -> Result<bool, ViewError> {
        let mut doc = self.lock()?;
        let before = doc.body.len();
        doc.body.retain(|(h, _)| *h != handle);
        Ok(doc.body.len() != before)
    }

    /// Remove the first body element with `id`. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::LockPoisoned`] if a previous holder panicked.
    pub fn remove_by_id(&self, id: &str) -> Result<bool, ViewError> {
        let mut doc = self.lock()?;
        let position = doc
            .body
            .iter()
            .position(|(_, el)| el.id.as_deref() == Some(id));
        Ok(position.map(|i| doc.body.remove(i)).is_some())
    }

    /// # Errors
    ///
    /// Returns [`ViewError::LockPoisoned`] if a previous holder panicked.
    pub fn element_by_id(&self, id: &str) -> Result<Option<Element>, ViewError> {
        let doc = self.lock()?;
        Ok(doc
            .body
            .iter()
            .find(|(_, el)| el.id.as_deref() == Some(id))
            .map(|(_, el)| el.clone()))
    }

    /// Snapshot of the body in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::LockPoisoned`] if a previous holder panicked.
    pub fn body(&self) -> Result<Vec<Element>, ViewError> {
        let doc = self.lock()?;
        Ok(doc.body.iter().map(|(_, el)| el.clone()).collect())
    }

    /// Create an empty container if none exists with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::LockPoisoned`] if a previous holder panicked.
    pub fn add_container(&self, id: impl Into<String>) -> Result<(), ViewError> {
        self.lock()?.containers.entry(id.into()).or_default();
        Ok(())
    }

    /// Replace a container's markup. Returns `false` if there is no such
    /// container.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::LockPoisoned`] if a previous holder panicked.
    pub fn set_inner_html(&self, id: &str, html: String) -> Result<bool, ViewError> {
        let mut doc = self.lock()?;
        Ok(doc.containers.get_mut(id).map(|slot| *slot = html).is_some())
    }

    /// # Errors
    ///
    /// Returns [`ViewError::LockPoisoned`] if a previous holder panicked.
    pub fn inner_html(&self, id: &str) -> Result<Option<String>, ViewError> {
        Ok(self.lock()?.containers.get(id).cloned())
    }
}
