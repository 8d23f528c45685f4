//! Versioned element store.

use crate::element::{Element, ElementId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("element already exists: {0}")]
    IdentityConflict(ElementId),
    #[error("element not found: {0}")]
    NotFound(ElementId),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Authoritative ordered collection of elements; all mutation goes through
/// this type.
///
/// Insertion order is the render z-order (later elements draw on top) and is
/// preserved by updates (in-place replace) and soft-deletes. Deleted elements
/// stay in the collection with `is_deleted` set; [`ElementStore::visible`]
/// derives the live subset on every read.
///
/// Single logical writer, synchronous calls; a multi-threaded host wraps the
/// whole store in one mutual-exclusion boundary per document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ElementStore {
    elements: Vec<Element>,
    /// Bumped on every successful mutation so a UI can poll for changes.
    #[serde(skip)]
    revision: u64,
}

impl ElementStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, forcing its version to 1 regardless of the input.
    ///
    /// A colliding id is rejected with [`StoreError::IdentityConflict`];
    /// the store is left untouched.
    pub fn add(&mut self, mut element: Element) -> StoreResult<ElementId> {
        let id = element.id();
        if self.index_of(id).is_some() {
            return Err(StoreError::IdentityConflict(id));
        }
        element.version = 1;
        log::debug!("add element {id} ({:?})", element.kind);
        self.elements.push(element);
        self.revision += 1;
        Ok(id)
    }

    /// Replace a stored element's fields with the input's, forcing the
    /// version to stored + 1 and keeping its z-order position.
    ///
    /// An unknown id is surfaced as [`StoreError::NotFound`] rather than
    /// silently ignored.
    pub fn update(&mut self, element: Element) -> StoreResult<()> {
        let id = element.id();
        let index = self.index_of(id).ok_or(StoreError::NotFound(id))?;
        let next_version = self.elements[index].version + 1;
        self.elements[index] = element;
        self.elements[index].version = next_version;
        log::trace!("update element {id} -> v{next_version}");
        self.revision += 1;
        Ok(())
    }

    /// Mark an element deleted, incrementing its version and leaving every
    /// other field (and its slot in the order) unchanged.
    ///
    /// Deleting an already-deleted element bumps the version again; the
    /// version trail is the point of soft deletion, so repeats are not
    /// deduplicated.
    pub fn soft_delete(&mut self, id: ElementId) -> StoreResult<()> {
        let index = self.index_of(id).ok_or(StoreError::NotFound(id))?;
        let element = &mut self.elements[index];
        element.is_deleted = true;
        element.version += 1;
        log::debug!("soft-delete element {id} -> v{}", element.version);
        self.revision += 1;
        Ok(())
    }

    /// Iterate the live elements in insertion order (back to front).
    ///
    /// Recomputed on every call, so it always reflects the latest mutation.
    pub fn visible(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| !e.is_deleted)
    }

    /// Iterate all elements, deleted ones included, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Look up an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.index_of(id).map(|i| &self.elements[i])
    }

    /// Total element count, deleted ones included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the store holds no elements at all.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Monotonic change counter; equal revisions mean no mutation happened
    /// in between.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }
}
