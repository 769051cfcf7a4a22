//! Token geometry: placements, padding, and the overlap predicate.
//!
//! Tokens are drawn as circles (or irregular blobs) but laid out as squares
//! of a single `size`. Collision uses the circle approximation with a small
//! tolerance, so neighbouring blobs may touch slightly before they count as
//! overlapping.
//!
//! # Example
//!
//! ```
//! use bubblelayout::{Placement, overlaps};
//!
//! let a = Placement::new(0.0, 0.0, 100.0);
//! let b = Placement::new(95.0, 0.0, 100.0);
//!
//! // Centers are 95px apart; the collision threshold is 0.9 × 100 = 90px.
//! assert!(!overlaps(&a, &b));
//! assert!(overlaps(&a, &Placement::new(80.0, 0.0, 100.0)));
//! ```

use num_traits::Float;

/// Fraction of the summed radii two token centers must be apart.
///
/// `0.9` lets blobs overlap visually by up to 10% of their combined radius
/// before they are rejected as colliding.
pub const OVERLAP_TOLERANCE: f64 = 0.9;

/// Position and size assigned to one token.
///
/// The bounding box is `[left, left + size) × [top, top + size)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Left edge in container pixels.
    pub left: f64,
    /// Top edge in container pixels.
    pub top: f64,
    /// Width and height of the token box.
    pub size: f64,
    /// Placed at the fallback size after the normal attempts ran out.
    pub degraded: bool,
}

impl Placement {
    /// Create a placement at normal size.
    pub const fn new(left: f64, top: f64, size: f64) -> Self {
        Self {
            left,
            top,
            size,
            degraded: false,
        }
    }

    /// Create a placement produced by the degradation pass.
    pub const fn degraded(left: f64, top: f64, size: f64) -> Self {
        Self {
            left,
            top,
            size,
            degraded: true,
        }
    }

    /// Center of the token box.
    pub fn center(&self) -> (f64, f64) {
        let r = self.size / 2.0;
        (self.left + r, self.top + r)
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> f64 {
        self.left + self.size
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> f64 {
        self.top + self.size
    }

    /// Euclidean distance between the two centers.
    pub fn distance_to(&self, other: &Placement) -> f64 {
        let (ax, ay) = self.center();
        let (bx, by) = other.center();
        Float::hypot(ax - bx, ay - by)
    }

    /// Whether the box lies inside the usable rectangle of a container.
    pub fn is_within(&self, container_w: f64, container_h: f64, padding: &Padding) -> bool {
        self.left >= padding.left
            && self.top >= padding.top
            && self.right() <= container_w - padding.right
            && self.bottom() <= container_h - padding.bottom
    }
}

/// Whether two tokens collide.
///
/// True iff the distance between centers is strictly less than
/// [`OVERLAP_TOLERANCE`] × the mean of the two sizes. Identical centers
/// always collide. Both sizes must be positive.
pub fn overlaps(a: &Placement, b: &Placement) -> bool {
    a.distance_to(b) < OVERLAP_TOLERANCE * (a.size + b.size) / 2.0
}

/// Per-edge inset of the usable rectangle, in container pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    /// Padding in CSS order: top, right, bottom, left.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same inset on every edge.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Width and height left after subtracting opposing edges.
    ///
    /// May be zero or negative for small containers.
    pub fn usable_extent(&self, container_w: f64, container_h: f64) -> (f64, f64) {
        (
            container_w - self.left - self.right,
            container_h - self.top - self.bottom,
        )
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite()
    }

    pub(crate) fn is_non_negative(&self) -> bool {
        self.left >= 0.0 && self.right >= 0.0 && self.top >= 0.0 && self.bottom >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── overlaps ────────────────────────────────────────────────────────

    #[test]
    fn identical_centers_overlap() {
        let a = Placement::new(10.0, 10.0, 60.0);
        assert!(overlaps(&a, &a));
        // Different sizes, same center.
        let b = Placement::new(20.0, 20.0, 40.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn far_apart_do_not_overlap() {
        let a = Placement::new(0.0, 0.0, 80.0);
        let b = Placement::new(500.0, 500.0, 80.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn threshold_is_strict() {
        // Equal sizes 100 → threshold 90. Exactly 90 apart is not a collision.
        let a = Placement::new(0.0, 0.0, 100.0);
        let at = Placement::new(90.0, 0.0, 100.0);
        let inside = Placement::new(89.9, 0.0, 100.0);
        assert!(!overlaps(&a, &at));
        assert!(overlaps(&a, &inside));
    }

    #[test]
    fn tolerance_allows_touching_boxes_to_overlap_slightly() {
        // Boxes of 100 whose edges overlap by 5px: centers 95 apart ≥ 90.
        let a = Placement::new(0.0, 0.0, 100.0);
        let b = Placement::new(95.0, 0.0, 100.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn mixed_sizes_use_mean_radius() {
        // Sizes 60 and 120 → threshold 0.9 × 90 = 81.
        let small = Placement::new(0.0, 0.0, 60.0);
        // Center of small at (30, 30). Big center at (30 + d, 30).
        let big_at = |d: f64| Placement::new(30.0 + d - 60.0, 30.0 - 60.0, 120.0);
        assert!(overlaps(&small, &big_at(80.0)));
        assert!(!overlaps(&small, &big_at(81.0)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Placement::new(12.5, 40.0, 70.0);
        let b = Placement::new(70.0, 55.0, 90.0);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn diagonal_distance() {
        let a = Placement::new(0.0, 0.0, 10.0);
        let b = Placement::new(30.0, 40.0, 10.0);
        assert!((a.distance_to(&b) - 50.0).abs() < 1e-9);
    }

    // ── containment ─────────────────────────────────────────────────────

    #[test]
    fn within_padding() {
        let pad = Padding::new(20.0, 20.0, 150.0, 20.0);
        assert!(Placement::new(20.0, 20.0, 80.0).is_within(800.0, 400.0, &pad));
        // Right edge exactly at container_w - padding.right is allowed.
        assert!(Placement::new(700.0, 20.0, 80.0).is_within(800.0, 400.0, &pad));
        assert!(!Placement::new(19.0, 20.0, 80.0).is_within(800.0, 400.0, &pad));
        assert!(!Placement::new(20.0, 171.0, 80.0).is_within(800.0, 400.0, &pad));
    }

    #[test]
    fn usable_extent_can_go_negative() {
        let pad = Padding::new(20.0, 20.0, 150.0, 20.0);
        assert_eq!(pad.usable_extent(800.0, 400.0), (760.0, 230.0));
        assert_eq!(pad.usable_extent(100.0, 100.0), (60.0, -70.0));
    }

    #[test]
    fn padding_css_order() {
        let pad = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            (pad.top, pad.right, pad.bottom, pad.left),
            (1.0, 2.0, 3.0, 4.0)
        );
        assert!(pad.is_non_negative());
        assert!(!Padding::uniform(-1.0).is_non_negative());
        assert!(!Padding::uniform(f64::NAN).is_finite());
    }
}
