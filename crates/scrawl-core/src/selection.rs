//! Selection and drag state.

use crate::element::{Element, ElementId};
use crate::hit_test::hit_test;
use kurbo::{Point, Vec2};

/// Discrete view of the selection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selected,
    Dragging,
}

/// Translates pointer positions into a selected element and tracks the
/// active drag.
///
/// The drag offset is the vector from the selected element's anchor to the
/// pointer at selection time; it keeps the grab point stable while dragging.
/// It is only meaningful while something is selected.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<ElementId>,
    dragging: bool,
    drag_offset: Vec2,
}

impl SelectionController {
    /// Create a new controller in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the element under `point`, re-evaluating the selection from
    /// scratch (any in-progress drag ends).
    ///
    /// `visible` must be in z-order, back to front; the last hit wins, so
    /// overlaps resolve to the topmost (most recently added) element.
    pub fn select_at<'a>(
        &mut self,
        point: Point,
        visible: impl Iterator<Item = &'a Element>,
    ) -> Option<ElementId> {
        self.dragging = false;

        let mut hit = None;
        for element in visible {
            if hit_test(element, point) {
                hit = Some((element.id(), point - element.anchor()));
            }
        }

        match hit {
            Some((id, offset)) => {
                log::trace!("selected element {id} at {point:?}");
                self.selected = Some(id);
                self.drag_offset = offset;
                Some(id)
            }
            None => {
                self.selected = None;
                None
            }
        }
    }

    /// Start dragging the current selection; no-op when nothing is selected.
    pub fn begin_drag(&mut self) {
        if self.selected.is_some() {
            self.dragging = true;
        }
    }

    /// Stop dragging. The selection itself is kept.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// The currently selected element, if any.
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The grab offset captured at selection time.
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    /// Where the selected element's anchor should move for a pointer at
    /// `point`, keeping the grab point under the cursor.
    pub fn drag_anchor(&self, point: Point) -> Point {
        point - self.drag_offset
    }

    /// Current state of the `Idle -> Selected -> Dragging` machine.
    pub fn state(&self) -> SelectionState {
        match (self.selected, self.dragging) {
            (Some(_), true) => SelectionState::Dragging,
            (Some(_), false) => SelectionState::Selected,
            (None, _) => SelectionState::Idle,
        }
    }
}
