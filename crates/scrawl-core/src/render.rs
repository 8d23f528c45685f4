//! Backend-agnostic rendering contract.
//!
//! The core does not rasterize anything. [`render_scene`] walks elements in
//! z-order and hands primitives to a [`RenderBackend`] (typically a
//! rough-style stroke renderer), style passed through untouched. Backends
//! read elements and never mutate them.

use crate::element::{Element, ElementKind, ElementStyle};
use kurbo::{Point, Rect};
use std::f64::consts::FRAC_PI_6;

/// Arrow-head barb length in canvas units.
pub const ARROW_HEAD_LENGTH: f64 = 20.0;

/// Drawing primitives a backend must provide.
pub trait RenderBackend {
    fn draw_rectangle(&mut self, rect: Rect, style: &ElementStyle);
    fn draw_ellipse(&mut self, center: Point, radius_x: f64, radius_y: f64, style: &ElementStyle);
    fn draw_line(&mut self, from: Point, to: Point, style: &ElementStyle);
    fn draw_text(&mut self, origin: Point, content: &str, style: &ElementStyle);
}

/// The two barb segments of an arrow head at `to`, angled back toward `from`.
pub fn arrow_head_lines(from: Point, to: Point) -> [(Point, Point); 2] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let barb = |a: f64| {
        Point::new(
            to.x - ARROW_HEAD_LENGTH * a.cos(),
            to.y - ARROW_HEAD_LENGTH * a.sin(),
        )
    };
    [
        (to, barb(angle - FRAC_PI_6)),
        (to, barb(angle + FRAC_PI_6)),
    ]
}

/// Draw elements in iteration order (later elements end up on top).
///
/// Callers normally pass [`crate::ElementStore::visible`].
pub fn render_scene<'a, B: RenderBackend>(
    backend: &mut B,
    elements: impl Iterator<Item = &'a Element>,
) {
    for element in elements {
        match &element.kind {
            ElementKind::Rectangle => backend.draw_rectangle(element.bounds(), &element.style),
            ElementKind::Ellipse => {
                let center = Point::new(
                    element.x + element.width / 2.0,
                    element.y + element.height / 2.0,
                );
                backend.draw_ellipse(
                    center,
                    (element.width / 2.0).abs(),
                    (element.height / 2.0).abs(),
                    &element.style,
                );
            }
            ElementKind::Arrow => {
                let from = element.anchor();
                let to = Point::new(element.x + element.width, element.y + element.height);
                backend.draw_line(from, to, &element.style);
                for (a, b) in arrow_head_lines(from, to) {
                    backend.draw_line(a, b, &element.style);
                }
            }
            ElementKind::Text { content } => {
                backend.draw_text(element.anchor(), content, &element.style)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ElementStore;

    /// Records which primitives were requested, in order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl RenderBackend for Recorder {
        fn draw_rectangle(&mut self, rect: Rect, _style: &ElementStyle) {
            self.calls.push(format!("rect {},{}", rect.x0, rect.y0));
        }

        fn draw_ellipse(&mut self, center: Point, rx: f64, ry: f64, _style: &ElementStyle) {
            self.calls
                .push(format!("ellipse {},{} {rx}x{ry}", center.x, center.y));
        }

        fn draw_line(&mut self, from: Point, to: Point, _style: &ElementStyle) {
            self.calls
                .push(format!("line {},{}->{},{}", from.x, from.y, to.x, to.y));
        }

        fn draw_text(&mut self, origin: Point, content: &str, _style: &ElementStyle) {
            self.calls
                .push(format!("text {},{} {content:?}", origin.x, origin.y));
        }
    }

    #[test]
    fn test_scene_walks_visible_elements_in_order() {
        let mut store = ElementStore::new();
        store
            .add(crate::Element::rectangle(0.0, 0.0, 10.0, 10.0))
            .unwrap();
        let deleted = store
            .add(crate::Element::text(0.0, 0.0, "gone"))
            .unwrap();
        store
            .add(crate::Element::ellipse(20.0, 20.0, 10.0, 10.0))
            .unwrap();
        store.soft_delete(deleted).unwrap();

        let mut backend = Recorder::default();
        render_scene(&mut backend, store.visible());

        assert_eq!(
            backend.calls,
            vec!["rect 0,0".to_string(), "ellipse 25,25 5x5".to_string()]
        );
    }

    #[test]
    fn test_arrow_draws_shaft_and_two_barbs() {
        let arrow = crate::Element::arrow(0.0, 0.0, 100.0, 0.0);
        let mut backend = Recorder::default();
        render_scene(&mut backend, std::iter::once(&arrow));

        assert_eq!(backend.calls.len(), 3);
        assert_eq!(backend.calls[0], "line 0,0->100,0");
    }

    #[test]
    fn test_arrow_head_geometry() {
        // Horizontal arrow pointing right: barbs sit behind the tip,
        // mirrored above and below the shaft.
        let [(tip_a, barb_a), (tip_b, barb_b)] =
            arrow_head_lines(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(tip_a, Point::new(100.0, 0.0));
        assert_eq!(tip_b, Point::new(100.0, 0.0));

        let expected_back = 100.0 - ARROW_HEAD_LENGTH * FRAC_PI_6.cos();
        assert!((barb_a.x - expected_back).abs() < 1e-9);
        assert!((barb_b.x - expected_back).abs() < 1e-9);
        assert!((barb_a.y + barb_b.y).abs() < 1e-9);
        assert!(barb_a.y.abs() > 1.0);
    }

    #[test]
    fn test_text_passes_content_through() {
        let text = crate::Element::text(5.0, 7.0, "hello");
        let mut backend = Recorder::default();
        render_scene(&mut backend, std::iter::once(&text));
        assert_eq!(backend.calls, vec!["text 5,7 \"hello\"".to_string()]);
    }
}
