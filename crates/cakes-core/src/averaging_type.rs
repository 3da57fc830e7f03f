//! Averaging types and their reference angles.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Comma-separated names of every [`AveragingType`], in table order.
const VALID_NAMES: &str = "top, right, bottom, left, vertical, horizontal";

/// A direction or axis whose reference angles are approximated by averaging
/// nearby cakes.
///
/// Angles are measured in degrees, clockwise from `top`. The four cardinal
/// types carry a single reference angle; the two axes carry both opposite
/// sides.
///
/// # Examples
///
/// ```
/// use cakes_core::AveragingType;
///
/// let ty: AveragingType = "vertical".parse()?;
/// assert_eq!(ty, AveragingType::Vertical);
/// assert_eq!(ty.angles(), &[0, 180]);
/// assert_eq!(ty.to_string(), "vertical");
/// # Ok::<(), cakes_core::UnknownAveragingType>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AveragingType {
    /// The top of the circle (0°).
    Top,
    /// The right side of the circle (90°).
    Right,
    /// The bottom of the circle (180°).
    Bottom,
    /// The left side of the circle (270°).
    Left,
    /// The vertical axis (0° and 180°).
    Vertical,
    /// The horizontal axis (90° and 270°).
    Horizontal,
}

impl AveragingType {
    /// Array containing all averaging types in table order.
    pub const ALL: [Self; 6] = [
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::Vertical,
        Self::Horizontal,
    ];

    /// Returns the name this averaging type is looked up by.
    ///
    /// # Examples
    ///
    /// ```
    /// use cakes_core::AveragingType;
    ///
    /// assert_eq!(AveragingType::Horizontal.name(), "horizontal");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }

    /// Returns the reference angles in degrees, in the order their cakes are
    /// emitted.
    ///
    /// The slice is never empty and every angle lies in `0..360`.
    #[must_use]
    pub const fn angles(self) -> &'static [i32] {
        match self {
            Self::Top => &[0],
            Self::Right => &[90],
            Self::Bottom => &[180],
            Self::Left => &[270],
            Self::Vertical => &[0, 180],
            Self::Horizontal => &[90, 270],
        }
    }
}

impl Display for AveragingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AveragingType {
    type Err = UnknownAveragingType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| UnknownAveragingType { name: s.to_owned() })
    }
}

/// Error returned when a name does not match any [`AveragingType`].
///
/// The message names the rejected input and lists every valid name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{name} is an unknown averaging type. Use one of: {}", VALID_NAMES)]
pub struct UnknownAveragingType {
    name: String,
}

impl UnknownAveragingType {
    /// Returns the name that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
