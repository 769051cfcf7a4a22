//! Layout entry points consumed by the rendering layer.
//!
//! Every call recomputes from scratch; nothing is cached between calls.
//! Callers re-invoke on container resize, item-list change, or when the
//! viewport crosses [`MOBILE_BREAKPOINT`](crate::policy::MOBILE_BREAKPOINT),
//! and debounce those events themselves.
//!
//! # Example
//!
//! ```
//! use bubblelayout::{LayoutRequest, Termination};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let messages = ["hi", "hello", "hey"];
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let result = LayoutRequest::new(5000.0, 5000.0)
//!     .viewport_width(1200.0)
//!     .compute(&messages, &mut rng);
//!
//! assert_eq!(result.accepted_count(), 3);
//! assert_eq!(result.termination, Termination::AllPlaced);
//! for (msg, p) in result.pair_with(&messages) {
//!     assert!(!msg.is_empty() && p.size >= 80.0);
//! }
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::placement::{LayoutResult, place};
use crate::policy::{PlacementConstraints, derive_policy};

/// Compute a layout for `items` in a `container_w × container_h` container,
/// using the device policy for `viewport_width`.
///
/// Total over its inputs: degenerate containers or an empty list give an
/// empty result.
pub fn compute_layout<T, R: Rng + ?Sized>(
    items: &[T],
    container_w: f64,
    container_h: f64,
    viewport_width: f64,
    rng: &mut R,
) -> LayoutResult {
    LayoutRequest::new(container_w, container_h)
        .viewport_width(viewport_width)
        .compute(items, rng)
}

/// [`compute_layout`] with a [`SmallRng`] seeded from `seed`.
///
/// The same seed and inputs always produce the same layout.
pub fn compute_layout_seeded<T>(
    items: &[T],
    container_w: f64,
    container_h: f64,
    viewport_width: f64,
    seed: u64,
) -> LayoutResult {
    let mut rng = SmallRng::seed_from_u64(seed);
    compute_layout(items, container_w, container_h, viewport_width, &mut rng)
}

/// Builder for a single layout computation.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRequest {
    container_w: f64,
    container_h: f64,
    viewport_width: f64,
    constraints: Option<PlacementConstraints>,
}

impl LayoutRequest {
    /// Start a request for a measured container. The viewport defaults to
    /// the container width.
    pub fn new(container_w: f64, container_h: f64) -> Self {
        Self {
            container_w,
            container_h,
            viewport_width: container_w,
            constraints: None,
        }
    }

    /// Viewport width used to pick the device class.
    pub fn viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }

    /// Use explicit constraints instead of the device policy.
    pub fn constraints(mut self, constraints: PlacementConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// The constraints this request resolves to.
    pub fn resolved_constraints(&self) -> PlacementConstraints {
        match &self.constraints {
            Some(c) => c.clone(),
            None => derive_policy(self.viewport_width),
        }
    }

    /// Run the placement pass.
    pub fn compute<T, R: Rng + ?Sized>(&self, items: &[T], rng: &mut R) -> LayoutResult {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "compute_layout",
            items = items.len(),
            w = self.container_w,
            h = self.container_h,
            viewport = self.viewport_width
        )
        .entered();

        let constraints = self.resolved_constraints();
        place(items, &constraints, self.container_w, self.container_h, rng)
    }
}
