//! Nullable spherical geometry functions
//!
//! These functions take every argument as an `Option<f64>` so that a
//! missing (`NULL`) argument can be expressed directly. They never panic:
//! missing, non-finite or out-of-range input yields an undefined result.

use crate::types::{Circle, Coordinate, Membership};

/// Test whether a point lies inside a circle on the sphere
///
/// All arguments are in degrees. `lon` and `center_lon` may be any finite
/// value, `lat` and `center_lat` must lie in `[-90, 90]` and `radius` in
/// `[0, 180]`. Returns [`Membership::Undefined`] if any argument is missing
/// or invalid.
///
/// The point is [`Membership::Inside`] when its great-circle separation from
/// the center is strictly less than `radius`. A point exactly on the boundary
/// is [`Membership::Outside`].
///
/// ```
/// use scisql::Membership;
/// use scisql::geometry::s2_pt_in_circle;
///
/// let inside = s2_pt_in_circle(Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(1.0));
/// assert_eq!(inside, Membership::Inside);
///
/// let outside = s2_pt_in_circle(Some(1.0), Some(1.0), Some(0.0), Some(0.0), Some(1.0));
/// assert_eq!(outside, Membership::Outside);
/// ```
pub fn s2_pt_in_circle(
    lon: Option<f64>,
    lat: Option<f64>,
    center_lon: Option<f64>,
    center_lat: Option<f64>,
    radius: Option<f64>,
) -> Membership {
    let (Some(lon), Some(lat), Some(center_lon), Some(center_lat), Some(radius)) =
        (lon, lat, center_lon, center_lat, radius)
    else {
        return Membership::Undefined;
    };

    let Some(point) = Coordinate::new(lon, lat) else {
        return Membership::Undefined;
    };
    let Some(circle) = Coordinate::new(center_lon, center_lat).and_then(|c| Circle::new(c, radius))
    else {
        return Membership::Undefined;
    };

    circle.membership(point)
}

/// Angular separation in degrees between two positions on the sphere
///
/// Returns `None` if any argument is missing or non-finite, or if either
/// latitude lies outside `[-90, 90]`.
pub fn ang_sep(
    lon1: Option<f64>,
    lat1: Option<f64>,
    lon2: Option<f64>,
    lat2: Option<f64>,
) -> Option<f64> {
    let a = Coordinate::new(lon1?, lat1?)?;
    let b = Coordinate::new(lon2?, lat2?)?;
    Some(a.angular_separation(b))
}
