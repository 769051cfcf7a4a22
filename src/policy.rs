//! Device-aware sizing policy and placement constraints.
//!
//! The device class is derived from a caller-supplied viewport width; the
//! engine never reads viewport state on its own.
//!
//! | parameter            | mobile    | desktop    |
//! |----------------------|-----------|------------|
//! | size range           | `[60, 90)`| `[80, 120)`|
//! | fallback size        | 50        | 60         |
//! | max tokens           | 8         | 12         |
//! | padding left/right/top | 20      | 20         |
//! | padding bottom       | 100       | 150        |

use core::fmt;

use crate::geometry::Padding;

/// Viewports at or below this width (logical pixels) are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Inset on the left, right, and top edges for both device classes.
pub const EDGE_PADDING: f64 = 20.0;
/// Bottom inset on mobile (leaves room for the compose bar).
pub const MOBILE_BOTTOM_PADDING: f64 = 100.0;
/// Bottom inset on desktop.
pub const DESKTOP_BOTTOM_PADDING: f64 = 150.0;

/// Mobile token sizes, `[min, max)`.
pub const MOBILE_SIZE_RANGE: (u32, u32) = (60, 90);
/// Desktop token sizes, `[min, max)`.
pub const DESKTOP_SIZE_RANGE: (u32, u32) = (80, 120);
/// Mobile degradation size.
pub const MOBILE_FALLBACK_SIZE: u32 = 50;
/// Desktop degradation size.
pub const DESKTOP_FALLBACK_SIZE: u32 = 60;
/// Mobile token cap per pass.
pub const MOBILE_MAX_TOKENS: usize = 8;
/// Desktop token cap per pass.
pub const DESKTOP_MAX_TOKENS: usize = 12;

/// Coarse device classification driving size and count policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Viewport width ≤ [`MOBILE_BREAKPOINT`].
    Mobile,
    /// Everything wider.
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width. Non-finite widths count as desktop.
    pub fn from_viewport_width(viewport_width: f64) -> Self {
        if viewport_width <= MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// The placement constraints for this device class.
    pub fn policy(self) -> PlacementConstraints {
        match self {
            Self::Mobile => PlacementConstraints {
                padding: Padding::new(
                    EDGE_PADDING,
                    EDGE_PADDING,
                    MOBILE_BOTTOM_PADDING,
                    EDGE_PADDING,
                ),
                min_size: MOBILE_SIZE_RANGE.0,
                max_size: MOBILE_SIZE_RANGE.1,
                fallback_size: MOBILE_FALLBACK_SIZE,
                max_tokens: MOBILE_MAX_TOKENS,
            },
            Self::Desktop => PlacementConstraints {
                padding: Padding::new(
                    EDGE_PADDING,
                    EDGE_PADDING,
                    DESKTOP_BOTTOM_PADDING,
                    EDGE_PADDING,
                ),
                min_size: DESKTOP_SIZE_RANGE.0,
                max_size: DESKTOP_SIZE_RANGE.1,
                fallback_size: DESKTOP_FALLBACK_SIZE,
                max_tokens: DESKTOP_MAX_TOKENS,
            },
        }
    }
}

/// Derive placement constraints from the viewport width.
///
/// Shorthand for `DeviceClass::from_viewport_width(w).policy()`.
pub fn derive_policy(viewport_width: f64) -> PlacementConstraints {
    DeviceClass::from_viewport_width(viewport_width).policy()
}

/// Sizing, padding, and count limits for one placement pass.
///
/// Sizes are drawn as integers from `[min_size, max_size)`. When a token
/// cannot be placed at those sizes it is retried once more at
/// `fallback_size`.
///
/// # Example
///
/// ```
/// use bubblelayout::{Padding, PlacementConstraints};
///
/// let c = PlacementConstraints::new()
///     .padding(Padding::uniform(10.0))
///     .size_range(40, 64)
///     .fallback_size(32)
///     .max_tokens(20);
/// assert!(c.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementConstraints {
    pub padding: Padding,
    /// Smallest size drawn on a normal attempt (inclusive).
    pub min_size: u32,
    /// Upper bound of normal sizes (exclusive).
    pub max_size: u32,
    /// Fixed size used by the degradation pass.
    pub fallback_size: u32,
    /// Maximum number of tokens placed per pass.
    pub max_tokens: usize,
}

impl Default for PlacementConstraints {
    fn default() -> Self {
        DeviceClass::Desktop.policy()
    }
}

impl PlacementConstraints {
    /// Desktop policy as a starting point for customization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set per-edge padding.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the normal size range `[min, max)`.
    pub fn size_range(mut self, min: u32, max: u32) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// Set the degradation size.
    pub fn fallback_size(mut self, size: u32) -> Self {
        self.fallback_size = size;
        self
    }

    /// Set the per-pass token cap.
    pub fn max_tokens(mut self, n: usize) -> Self {
        self.max_tokens = n;
        self
    }

    /// Check that the constraint set can drive a placement pass.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        if !self.padding.is_finite() {
            return Err(ConstraintError::NonFiniteValue);
        }
        if !self.padding.is_non_negative() {
            return Err(ConstraintError::NegativePadding);
        }
        if self.min_size == 0 || self.fallback_size == 0 {
            return Err(ConstraintError::NonPositiveSize);
        }
        if self.min_size >= self.max_size {
            return Err(ConstraintError::EmptySizeRange);
        }
        Ok(())
    }
}

/// Why a [`PlacementConstraints`] cannot be used.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConstraintError {
    /// `min_size >= max_size`, so no size can be drawn.
    EmptySizeRange,
    /// A size bound or the fallback size is zero.
    NonPositiveSize,
    /// An edge has negative padding.
    NegativePadding,
    /// Padding contains NaN or infinity.
    NonFiniteValue,
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySizeRange => f.write_str("size range is empty (min_size >= max_size)"),
            Self::NonPositiveSize => f.write_str("token sizes must be positive"),
            Self::NegativePadding => f.write_str("padding must not be negative"),
            Self::NonFiniteValue => f.write_str("padding must be finite"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConstraintError {}
