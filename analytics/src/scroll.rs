//! Scroll-depth measurement.
//!
//! The host reports raw document geometry as [`ScrollMetrics`]; this module
//! turns it into a rounded percentage and then into a 25% [`ScrollDepth`]
//! bucket. Pages that cannot scroll produce no measurement at all.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use serde::Serialize;

/// A scroll-depth milestone: one of 0, 25, 50, 75, or 100 percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ScrollDepth(u8);

impl ScrollDepth {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);
    /// Width of one milestone bucket, in percent.
    pub const STEP: u8 = 25;

    /// Bucket a percentage down to the nearest milestone, capping at 100.
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        let capped = percent.min(Self::FULL.0);
        Self(capped / Self::STEP * Self::STEP)
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl From<ScrollDepth> for u8 {
    fn from(depth: ScrollDepth) -> Self {
        depth.0
    }
}

/// Document geometry sampled when a scroll signal is handled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset (`window.scrollY`).
    pub scroll_y: f64,
    /// Full document height (`documentElement.scrollHeight`).
    pub scroll_height: f64,
    /// Viewport height (`window.innerHeight`).
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self { scroll_y, scroll_height, viewport_height }
    }

    /// Distance the page can scroll, in pixels.
    #[must_use]
    pub fn scrollable_height(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }

    /// Rounded scroll percentage clamped to `0..=100`.
    ///
    /// `None` when the page is not scrollable or the geometry is not finite.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> Option<u8> {
        let scrollable = self.scrollable_height();
        if !scrollable.is_finite() || !self.scroll_y.is_finite() || scrollable <= 0.0 {
            return None;
        }
        // Overscroll bounce can report offsets outside the document.
        let percent = (self.scroll_y / scrollable * 100.0).round().clamp(0.0, 100.0);
        Some(percent as u8)
    }

    /// Milestone bucket for the current position.
    #[must_use]
    pub fn milestone(&self) -> Option<ScrollDepth> {
        self.percent().map(ScrollDepth::from_percent)
    }
}
