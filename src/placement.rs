//! Randomized placement loop with a fallback degradation pass.
//!
//! Items are placed one at a time, in list order, against every token
//! accepted so far. Each item gets [`PLACEMENT_ATTEMPTS`] random
//! position/size draws at policy size, then [`DEGRADED_ATTEMPTS`] draws at
//! the fallback size. A pass stops at the first item that cannot be placed;
//! later items are not tried even if they might fit.
//!
//! Worst case per call is `max_tokens × (PLACEMENT_ATTEMPTS + DEGRADED_ATTEMPTS)`
//! candidates, each tested against at most `max_tokens - 1` accepted tokens.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::geometry::{Placement, overlaps};
use crate::policy::PlacementConstraints;

/// Random draws per item at policy size before degrading.
pub const PLACEMENT_ATTEMPTS: u32 = 50;
/// Random draws per item at the fallback size.
pub const DEGRADED_ATTEMPTS: u32 = 20;

/// Why a placement pass ended.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Every item was placed (the list fit under the token cap).
    AllPlaced,
    /// The token cap was reached with items left over.
    CapReached,
    /// A drawn size did not fit the usable rectangle at all.
    NoRoom,
    /// Normal and degraded attempts all collided for one item.
    Exhausted,
    /// Container or constraints were degenerate; nothing was attempted.
    Invalid,
}

/// Placements for the accepted prefix of an item list.
///
/// `placements[i]` belongs to `items[i]` for `i < accepted_count()`. Items
/// past that are simply not shown this pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    /// Accepted placements, in item order.
    pub placements: Vec<Placement>,
    /// Why the pass stopped.
    pub termination: Termination,
    /// Candidate positions evaluated across all items.
    pub candidates_tried: u32,
}

impl LayoutResult {
    /// An empty result with the given termination.
    pub fn empty(termination: Termination) -> Self {
        Self {
            placements: Vec::new(),
            termination,
            candidates_tried: 0,
        }
    }

    /// Number of items placed.
    pub fn accepted_count(&self) -> usize {
        self.placements.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterate placements in item order.
    pub fn iter(&self) -> core::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    /// Pair the accepted prefix of `items` with its placements.
    ///
    /// `items` must be the list the layout was computed from.
    pub fn pair_with<'a, T>(
        &'a self,
        items: &'a [T],
    ) -> impl Iterator<Item = (&'a T, &'a Placement)> + 'a {
        items.iter().zip(self.placements.iter())
    }

    /// Number of tokens placed at the fallback size.
    pub fn degraded_count(&self) -> usize {
        self.placements.iter().filter(|p| p.degraded).count()
    }
}

impl<'a> IntoIterator for &'a LayoutResult {
    type Item = &'a Placement;
    type IntoIter = core::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// Outcome of trying to place a single item.
enum Attempt {
    Placed(Placement),
    NoRoom,
    Exhausted,
}

/// Place up to `min(items.len(), constraints.max_tokens)` tokens inside a
/// `container_w × container_h` container.
///
/// Never fails: non-positive or non-finite container dimensions and invalid
/// constraints produce an empty result with [`Termination::Invalid`].
pub fn place<T, R: Rng + ?Sized>(
    items: &[T],
    constraints: &PlacementConstraints,
    container_w: f64,
    container_h: f64,
    rng: &mut R,
) -> LayoutResult {
    let dims_ok = container_w.is_finite()
        && container_h.is_finite()
        && container_w > 0.0
        && container_h > 0.0;
    if !dims_ok {
        return LayoutResult::empty(Termination::Invalid);
    }
    if let Err(_e) = constraints.validate() {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %_e, "rejecting placement constraints");
        return LayoutResult::empty(Termination::Invalid);
    }

    let limit = items.len().min(constraints.max_tokens);
    let mut pass = Pass {
        constraints,
        container_w,
        container_h,
        accepted: Vec::with_capacity(limit),
        tried: 0,
    };

    let mut termination = if limit < items.len() {
        Termination::CapReached
    } else {
        Termination::AllPlaced
    };

    for _index in 0..limit {
        match pass.place_one(rng) {
            Attempt::Placed(p) => pass.accepted.push(p),
            Attempt::NoRoom => {
                termination = Termination::NoRoom;
                break;
            }
            Attempt::Exhausted => {
                #[cfg(feature = "tracing")]
                tracing::debug!(index = _index, "degraded attempts exhausted, ending pass");
                termination = Termination::Exhausted;
                break;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        accepted = pass.accepted.len(),
        requested = items.len(),
        candidates = pass.tried,
        ?termination,
        "placement pass finished"
    );

    LayoutResult {
        placements: pass.accepted,
        termination,
        candidates_tried: pass.tried,
    }
}

/// State of one in-progress placement pass.
struct Pass<'c> {
    constraints: &'c PlacementConstraints,
    container_w: f64,
    container_h: f64,
    accepted: Vec<Placement>,
    tried: u32,
}

impl Pass<'_> {
    fn place_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Attempt {
        let c = self.constraints;
        let (usable_w, usable_h) = c.padding.usable_extent(self.container_w, self.container_h);

        for _ in 0..PLACEMENT_ATTEMPTS {
            let size = rng.gen_range(c.min_size..c.max_size) as f64;
            let max_left = usable_w - size;
            let max_top = usable_h - size;
            if max_left <= 0.0 || max_top <= 0.0 {
                return Attempt::NoRoom;
            }
            let candidate = Placement::new(
                c.padding.left + rng.gen_range(0.0..max_left),
                c.padding.top + rng.gen_range(0.0..max_top),
                size,
            );
            if self.accepts(&candidate) {
                return Attempt::Placed(candidate);
            }
        }

        // Degradation: fixed fallback size, fresh positions.
        let size = c.fallback_size as f64;
        let max_left = usable_w - size;
        let max_top = usable_h - size;
        if max_left <= 0.0 || max_top <= 0.0 {
            return Attempt::Exhausted;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            placed = self.accepted.len(),
            size,
            "normal attempts collided, degrading"
        );

        for _ in 0..DEGRADED_ATTEMPTS {
            let candidate = Placement::degraded(
                c.padding.left + rng.gen_range(0.0..max_left),
                c.padding.top + rng.gen_range(0.0..max_top),
                size,
            );
            if self.accepts(&candidate) {
                return Attempt::Placed(candidate);
            }
        }
        Attempt::Exhausted
    }

    /// Count the candidate and test it against bounds and every accepted token.
    fn accepts(&mut self, candidate: &Placement) -> bool {
        self.tried += 1;
        // Guards the far edge against float rounding in left + size.
        if !candidate.is_within(self.container_w, self.container_h, &self.constraints.padding) {
            return false;
        }
        let collides = self.accepted.iter().any(|p| overlaps(candidate, p));
        #[cfg(feature = "tracing")]
        if collides {
            tracing::trace!(
                left = candidate.left,
                top = candidate.top,
                size = candidate.size,
                "candidate collides"
            );
        }
        !collides
    }
}
