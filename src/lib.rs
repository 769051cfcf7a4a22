//! Randomized, collision-avoiding placement of sized tokens in a viewport.
//!
//! Lays out a variable number of circular tokens inside a padded container
//! without overlap, sized by a coarse device class. Pure computation — no
//! I/O, no global state, `no_std` compatible (needs `alloc`). Randomness is
//! injected by the caller, so seeded generators give reproducible layouts.
//!
//! # Modules
//!
//! - [`geometry`] — Placements, padding, and the overlap predicate
//! - [`policy`] — Device class, size/count policy, custom constraints
//! - [`placement`] — Bounded random search with a degradation pass
//! - [`layout`] — Entry points: [`compute_layout`] and [`LayoutRequest`]
//! - `svg` — SVG visualization of a layout (feature `svg`)
//!
//! # Example
//!
//! ```
//! use bubblelayout::{compute_layout, overlaps};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let items: Vec<u32> = (0..12).collect();
//! let mut rng = SmallRng::seed_from_u64(1);
//! let result = compute_layout(&items, 800.0, 400.0, 1200.0, &mut rng);
//!
//! assert!(result.accepted_count() <= 12);
//! for (i, a) in result.iter().enumerate() {
//!     for b in result.iter().skip(i + 1) {
//!         assert!(!overlaps(a, b));
//!     }
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod geometry;
pub mod layout;
pub mod placement;
pub mod policy;
#[cfg(feature = "svg")]
pub mod svg;

pub use geometry::{OVERLAP_TOLERANCE, Padding, Placement, overlaps};
pub use layout::{LayoutRequest, compute_layout, compute_layout_seeded};
pub use placement::{DEGRADED_ATTEMPTS, LayoutResult, PLACEMENT_ATTEMPTS, Termination, place};
pub use policy::{
    ConstraintError, DeviceClass, MOBILE_BREAKPOINT, PlacementConstraints, derive_policy,
};
