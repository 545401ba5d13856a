//! Pointer and scroll driven transforms: ripple, card tilt, parallax, the
//! navbar shadow and the scroll-to-top button.

/// Viewport-relative box of an element, as read from its client rect
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a viewport (client) point into this box's own coordinates
    pub fn local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

/// Circle spawned where a button was clicked
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Ripple for a click at (`x`, `y`) relative to a `width` x `height` box
    pub fn at(width: f64, height: f64, x: f64, y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: x - size / 2.0,
            top: y - size / 2.0,
        }
    }

    /// Ripple for a click at a viewport point over `bounds`
    pub fn in_bounds(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let (x, y) = bounds.local(client_x, client_y);
        Self::at(bounds.width, bounds.height, x, y)
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

/// 3D tilt applied to a card under the pointer
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Transform of a card at rest
    pub const REST: &'static str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1)";

    pub fn from_pointer(width: f64, height: f64, x: f64, y: f64) -> Self {
        Self {
            rotate_x: (y - height / 2.0) / 10.0,
            rotate_y: -(x - width / 2.0) / 10.0,
        }
    }

    /// Tilt for a pointer at a viewport point over `bounds`
    pub fn in_bounds(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let (x, y) = bounds.local(client_x, client_y);
        Self::from_pointer(bounds.width, bounds.height, x, y)
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale(1.05)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Vertical offset of the `index`-th floating card for a scroll position
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    let rate = scroll_y * -0.5;
    let speed = (index + 1) as f64 * 0.1;
    rate * speed
}

pub fn parallax_transform(scroll_y: f64, index: usize) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, index))
}

/// Navbar box-shadow for a scroll position
pub fn navbar_shadow(scroll_y: f64, threshold: u32) -> &'static str {
    if scroll_y > f64::from(threshold) {
        "0 4px 20px rgba(0,0,0,0.2)"
    } else {
        "0 2px 10px rgba(0,0,0,0.1)"
    }
}

/// Whether the scroll-to-top button should be shown
pub fn scroll_to_top_visible(scroll_y: f64, threshold: u32) -> bool {
    scroll_y > f64::from(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_centered_on_click() {
        let ripple = Ripple::at(120.0, 40.0, 60.0, 20.0);
        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -40.0);
        assert_eq!(ripple.style(), "width: 120px; height: 120px; left: 0px; top: -40px;");
    }

    #[test]
    fn test_tilt_center_is_flat() {
        let tilt = Tilt::from_pointer(200.0, 300.0, 100.0, 150.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn test_tilt_corner() {
        let tilt = Tilt::from_pointer(200.0, 300.0, 0.0, 0.0);
        assert_eq!(tilt.rotate_x, -15.0);
        assert_eq!(tilt.rotate_y, 10.0);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(-15deg) rotateY(10deg) scale(1.05)"
        );
    }

    #[test]
    fn test_tilt_uses_card_bounds_not_child() {
        // 220x420 card at (40, 100); pointer at the horizontal center,
        // 320px down the card (inside the body, 20px below its top)
        let card = Bounds::new(40.0, 100.0, 220.0, 420.0);
        let tilt = Tilt::in_bounds(card, 150.0, 420.0);
        assert_eq!(tilt.rotate_x, 11.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn test_ripple_in_bounds() {
        let button = Bounds::new(10.0, 500.0, 120.0, 40.0);
        let ripple = Ripple::in_bounds(button, 70.0, 520.0);
        assert_eq!(ripple, Ripple::at(120.0, 40.0, 60.0, 20.0));
    }

    #[test]
    fn test_scroll_to_top_threshold() {
        assert!(!scroll_to_top_visible(0.0, 300));
        assert!(!scroll_to_top_visible(300.0, 300));
        assert!(scroll_to_top_visible(301.0, 300));
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(0.0, 3), 0.0);
        assert_eq!(parallax_offset(200.0, 0), -10.0);
        assert_eq!(parallax_offset(200.0, 1), -20.0);
        assert_eq!(parallax_transform(200.0, 0), "translateY(-10px)");
    }

    #[test]
    fn test_navbar_shadow_threshold() {
        assert_eq!(navbar_shadow(100.0, 100), "0 2px 10px rgba(0,0,0,0.1)");
        assert_eq!(navbar_shadow(101.0, 100), "0 4px 20px rgba(0,0,0,0.2)");
    }
}
