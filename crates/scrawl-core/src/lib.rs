//! Scrawl core library.
//!
//! In-memory element model, hit-testing, and selection logic for the Scrawl
//! freehand diagramming canvas. Rendering and input plumbing live in the host
//! application; this crate answers what exists, what changed, and what the
//! pointer is over.

pub mod canvas;
pub mod element;
pub mod render;
pub mod selection;
pub mod store;

pub use canvas::Canvas;
pub use element::{Element, ElementId, ElementKind, ElementStyle, Rgba};
pub use hit_test::hit_test;
pub use render::{render_scene, RenderBackend};
pub use selection::{SelectionController, SelectionState};
pub use store::{ElementStore, StoreError, StoreResult};
