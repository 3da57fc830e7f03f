//! Resolution of averaging types into cake indices.

use crate::{AveragingType, UnknownAveragingType};

/// Number of cake indices emitted per reference angle.
pub const CAKES_PER_ANGLE: usize = 3;

/// Resolves an averaging type by name and returns the cakes to average.
///
/// The name is parsed into an [`AveragingType`] and passed on to
/// [`cakes_to_average`]. An unknown name is logged as a warning and returned as
/// an error; it never yields an empty result.
///
/// # Errors
///
/// Returns [`UnknownAveragingType`] if `name` is not one of the names listed in
/// [`AveragingType::ALL`].
///
/// # Examples
///
/// ```
/// let cakes = cakes_core::resolve("vertical", 360, 0)?;
/// assert_eq!(cakes, [1, 2, 0, 181, 182, 180]);
///
/// assert!(cakes_core::resolve("diagonal", 360, 0).is_err());
/// # Ok::<(), cakes_core::UnknownAveragingType>(())
/// ```
pub fn resolve(
    name: &str,
    num_cakes: i32,
    starting_angle: i32,
) -> Result<Vec<i64>, UnknownAveragingType> {
    let averaging_type = name.parse::<AveragingType>().inspect_err(|err| {
        log::warn!("{err}");
    })?;
    Ok(cakes_to_average(averaging_type, num_cakes, starting_angle))
}

/// Returns the cakes to average for each reference angle of `averaging_type`.
///
/// For every angle, in table order, three indices are emitted: the cake
/// containing the angle, the next cake and the previous cake. Cakes are
/// 1-based, cake 1 starting at `starting_angle`. The result is neither
/// deduplicated nor wrapped into `1..=num_cakes`, so the neighbours of the
/// first and last cake fall outside that range.
///
/// # Examples
///
/// ```
/// use cakes_core::{AveragingType, cakes_to_average};
///
/// assert_eq!(cakes_to_average(AveragingType::Top, 360, 0), [1, 2, 0]);
/// assert_eq!(cakes_to_average(AveragingType::Right, 4, 90), [1, 2, 0]);
/// ```
#[must_use]
pub fn cakes_to_average(
    averaging_type: AveragingType,
    num_cakes: i32,
    starting_angle: i32,
) -> Vec<i64> {
    let angles = averaging_type.angles();
    let mut cakes = Vec::with_capacity(angles.len() * CAKES_PER_ANGLE);
    for &angle in angles {
        let position = cake_position(angle, num_cakes, starting_angle);
        let center = truncate(position);
        log::trace!(
            "{averaging_type}: angle {angle} -> position {position} -> cake {center}"
        );
        cakes.extend([center, center + 1, center - 1]);
    }
    cakes
}

/// Returns the fractional, 1-based cake position of `angle`.
///
/// The angle is taken relative to `starting_angle` and wrapped into `0..360`
/// before being scaled onto `num_cakes` subdivisions.
///
/// # Examples
///
/// ```
/// use cakes_core::cake_position;
///
/// assert_eq!(cake_position(180, 360, 0), 181.0);
/// assert_eq!(cake_position(0, 4, 90), 4.0);
/// assert_eq!(cake_position(0, 8, -45), 2.0);
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn cake_position(angle: i32, num_cakes: i32, starting_angle: i32) -> f64 {
    let delta = (i64::from(angle) - i64::from(starting_angle)).rem_euclid(360);
    delta as f64 / 360.0 * f64::from(num_cakes) + 1.0
}

// Truncates toward zero, saturating at the `i64` bounds.
#[expect(clippy::cast_possible_truncation)]
fn truncate(position: f64) -> i64 {
    position as i64
}
