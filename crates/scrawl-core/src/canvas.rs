//! Canvas facade: wires pointer events to the store and selection.
//!
//! Pointer coordinates are canvas-local; the host applies device-pixel-ratio
//! and pan/zoom transforms before calling in.

use crate::element::ElementId;
use crate::selection::SelectionController;
use crate::store::{ElementStore, StoreResult};
use kurbo::Point;

/// A canvas document: the element store plus interactive selection state.
#[derive(Debug, Default)]
pub struct Canvas {
    store: ElementStore,
    selection: SelectionController,
}

impl Canvas {
    /// Create a new empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// The element store.
    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    /// Mutable access to the element store (for adding and deleting
    /// elements; drag moves go through the pointer methods).
    pub fn store_mut(&mut self) -> &mut ElementStore {
        &mut self.store
    }

    /// The selection controller.
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Pointer pressed: pick the topmost visible element under `point` and
    /// start dragging it. Returns the hit element, if any.
    pub fn pointer_down(&mut self, point: Point) -> Option<ElementId> {
        let hit = self.selection.select_at(point, self.store.visible());
        if hit.is_some() {
            self.selection.begin_drag();
        }
        hit
    }

    /// Pointer moved: while dragging, move the selected element so the grab
    /// point stays under the cursor. Each move is a store update and bumps
    /// the element's version. Returns whether an element moved.
    pub fn pointer_moved(&mut self, point: Point) -> StoreResult<bool> {
        if !self.selection.is_dragging() {
            return Ok(false);
        }
        let Some(id) = self.selection.selected() else {
            return Ok(false);
        };
        let Some(element) = self.store.get(id) else {
            return Ok(false);
        };

        let mut moved = element.clone();
        moved.set_anchor(self.selection.drag_anchor(point));
        self.store.update(moved)?;
        Ok(true)
    }

    /// Pointer released: end the drag, keeping the selection.
    pub fn pointer_up(&mut self) {
        self.selection.end_drag();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::selection::SelectionState;

    #[test]
    fn test_drag_moves_element_and_bumps_version() {
        let mut canvas = Canvas::new();
        let id = canvas
            .store_mut()
            .add(Element::rectangle(10.0, 10.0, 100.0, 100.0))
            .unwrap();

        // Grab at (40, 40), i.e. offset (30, 30) from the anchor.
        assert_eq!(canvas.pointer_down(Point::new(40.0, 40.0)), Some(id));
        assert!(canvas.pointer_moved(Point::new(90.0, 90.0)).unwrap());
        canvas.pointer_up();

        let element = canvas.store().get(id).unwrap();
        assert!((element.x - 60.0).abs() < f64::EPSILON);
        assert!((element.y - 60.0).abs() < f64::EPSILON);
        assert_eq!(element.version(), 2);
        assert_eq!(canvas.selection().state(), SelectionState::Selected);
    }

    #[test]
    fn test_pointer_down_on_empty_space_clears_selection() {
        let mut canvas = Canvas::new();
        canvas
            .store_mut()
            .add(Element::rectangle(0.0, 0.0, 10.0, 10.0))
            .unwrap();

        canvas.pointer_down(Point::new(5.0, 5.0));
        assert_eq!(canvas.pointer_down(Point::new(500.0, 500.0)), None);
        assert_eq!(canvas.selection().state(), SelectionState::Idle);
    }

    #[test]
    fn test_move_without_drag_is_a_no_op() {
        let mut canvas = Canvas::new();
        let id = canvas
            .store_mut()
            .add(Element::rectangle(0.0, 0.0, 10.0, 10.0))
            .unwrap();

        assert!(!canvas.pointer_moved(Point::new(50.0, 50.0)).unwrap());
        assert_eq!(canvas.store().get(id).unwrap().version(), 1);
    }

    #[test]
    fn test_deleted_element_cannot_be_picked() {
        let mut canvas = Canvas::new();
        let id = canvas
            .store_mut()
            .add(Element::rectangle(0.0, 0.0, 10.0, 10.0))
            .unwrap();
        canvas.store_mut().soft_delete(id).unwrap();

        assert_eq!(canvas.pointer_down(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_drag_translates_arrow_rigidly() {
        let mut canvas = Canvas::new();
        let id = canvas
            .store_mut()
            .add(Element::arrow(0.0, 0.0, 10.0, 0.0))
            .unwrap();

        canvas.pointer_down(Point::new(5.0, 0.0));
        canvas.pointer_moved(Point::new(25.0, 10.0)).unwrap();

        let arrow = canvas.store().get(id).unwrap();
        assert!((arrow.x - 20.0).abs() < f64::EPSILON);
        assert!((arrow.y - 10.0).abs() < f64::EPSILON);
        // The extent (segment direction) is untouched.
        assert!((arrow.width - 10.0).abs() < f64::EPSILON);
        assert!(arrow.height.abs() < f64::EPSILON);
    }
}
