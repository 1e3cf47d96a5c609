//! Image-space points and rectangles

use serde::{Deserialize, Serialize};

/// 2D point in image space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move every edge inwards by the given amounts (negative values grow the rectangle)
    pub fn inset(&mut self, x_inset: f64, y_inset: f64) {
        self.x += x_inset;
        self.y += y_inset;
        self.width -= x_inset * 2.0;
        self.height -= y_inset * 2.0;
    }

    /// Whether `other` lies entirely inside this rectangle (edges inclusive)
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// Scale position and size; `scale_y` defaults to `scale_x`
    pub fn scaled_by(&self, scale_x: f64, scale_y: Option<f64>) -> Rect {
        let scale_y = scale_y.unwrap_or(scale_x);
        Rect::new(
            self.x * scale_x,
            self.y * scale_y,
            self.width * scale_x,
            self.height * scale_y,
        )
    }

    /// Mirror horizontally within a plane of the given width
    pub fn mirrored(&self, plane_width: f64) -> Rect {
        Rect::new(plane_width - self.x - self.width, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_center() {
        let rect = Rect::new(10.0, 20.0, 40.0, 60.0);
        assert_eq!(rect.center(), Point::new(30.0, 50.0));
        assert_eq!(rect.right(), 50.0);
        assert_eq!(rect.bottom(), 80.0);
    }

    #[test]
    fn test_inset() {
        let mut rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        rect.inset(10.0, 5.0);
        assert_eq!(rect, Rect::new(10.0, 5.0, 80.0, 40.0));

        rect.inset(-10.0, -5.0);
        assert_eq!(rect, Rect::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_contains() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(outer.contains(&outer));
        // Below the outer rectangle
        assert!(!outer.contains(&Rect::new(10.0, 90.0, 20.0, 20.0)));
        // Above the outer rectangle
        assert!(!outer.contains(&Rect::new(10.0, -5.0, 20.0, 20.0)));
        assert!(!outer.contains(&Rect::new(-1.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_scaled_by() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.scaled_by(2.0, None), Rect::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(rect.scaled_by(2.0, Some(0.5)), Rect::new(2.0, 1.0, 6.0, 2.0));
    }

    #[test]
    fn test_mirrored() {
        let rect = Rect::new(10.0, 5.0, 30.0, 20.0);
        assert_eq!(rect.mirrored(100.0), Rect::new(60.0, 5.0, 30.0, 20.0));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"width":3.0,"height":4.0}"#);
    }

    proptest! {
        #[test]
        fn prop_mirror_twice_is_identity(x in 0.0f64..100.0, w in 0.0f64..100.0, plane in 200.0f64..400.0) {
            let rect = Rect::new(x, 0.0, w, 10.0);
            let back = rect.mirrored(plane).mirrored(plane);
            prop_assert!((back.x - rect.x).abs() < 1e-9);
        }
    }
}
