//! Panel geometry
//!
//! The controller's window commands do not clamp, so any rectangle that
//! reaches the wire must already lie inside the panel. These helpers do the
//! checks in `u32` so `x + width` can never wrap.

/// Panel width in pixels
pub const PANEL_WIDTH: u16 = 240;

/// Panel height in pixels
pub const PANEL_HEIGHT: u16 = 240;

/// Check if a single pixel lies on the panel
pub const fn pixel_in_panel(x: u16, y: u16) -> bool {
    x < PANEL_WIDTH && y < PANEL_HEIGHT
}

/// Rectangular region of panel memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle (not validated)
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole panel
    pub const fn full_panel() -> Self {
        Self::new(0, 0, PANEL_WIDTH, PANEL_HEIGHT)
    }

    /// Check for a zero-sized region
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check that the region lies entirely inside the panel
    ///
    /// Empty regions never fit.
    pub const fn fits_panel(&self) -> bool {
        !self.is_empty()
            && self.x as u32 + self.width as u32 <= PANEL_WIDTH as u32
            && self.y as u32 + self.height as u32 <= PANEL_HEIGHT as u32
    }

    /// Last column covered (inclusive)
    ///
    /// Only meaningful for non-empty rectangles.
    pub const fn x_end(&self) -> u16 {
        self.x + self.width - 1
    }

    /// Last row covered (inclusive)
    ///
    /// Only meaningful for non-empty rectangles.
    pub const fn y_end(&self) -> u16 {
        self.y + self.height - 1
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_panel() {
        let rect = Rect::full_panel();
        assert!(rect.fits_panel());
        assert_eq!(rect.x_end(), 239);
        assert_eq!(rect.y_end(), 239);
        assert_eq!(rect.area(), 57_600);
    }

    #[test]
    fn test_edges() {
        assert!(Rect::new(239, 239, 1, 1).fits_panel());
        assert!(!Rect::new(239, 0, 2, 1).fits_panel());
        assert!(!Rect::new(0, 240, 1, 1).fits_panel());
        assert!(!Rect::new(10, 10, 0, 5).fits_panel());
        assert!(!Rect::new(10, 10, 5, 0).fits_panel());
    }

    #[test]
    fn test_no_wraparound() {
        // u16 addition would wrap to a small number here
        assert!(!Rect::new(u16::MAX, 0, 2, 1).fits_panel());
        assert!(!Rect::new(0, 100, 1, u16::MAX).fits_panel());
    }

    #[test]
    fn test_pixel_in_panel() {
        assert!(pixel_in_panel(0, 0));
        assert!(pixel_in_panel(239, 239));
        assert!(!pixel_in_panel(240, 0));
        assert!(!pixel_in_panel(0, 240));
    }

    proptest! {
        #[test]
        fn prop_fits_matches_bounds(x in any::<u16>(), y in any::<u16>(), w in any::<u16>(), h in any::<u16>()) {
            let rect = Rect::new(x, y, w, h);
            let expected = w > 0
                && h > 0
                && u32::from(x) + u32::from(w) <= 240
                && u32::from(y) + u32::from(h) <= 240;
            prop_assert_eq!(rect.fits_panel(), expected);
        }
    }
}
