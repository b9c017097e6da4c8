/// A position on the celestial sphere
///
/// Longitude (right ascension) and latitude (declination) are stored in
/// degrees. Longitude is normalized to `[0, 360)`, latitude always lies
/// within `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Create a coordinate from longitude and latitude in degrees
    ///
    /// Any finite longitude is accepted and wrapped into `[0, 360)`.
    /// Returns `None` if either value is NaN or infinite, or if `lat` lies
    /// outside `[-90, 90]`. Latitudes are never clamped.
    pub fn new(lon: f64, lat: f64) -> Option<Self> {
        if !lon.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return None;
        }

        Some(Self {
            lon: normalize_lon(lon),
            lat,
        })
    }

    /// Longitude in degrees, within `[0, 360)`
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees, within `[-90, 90]`
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Position on the unit sphere
    pub fn to_vector(self) -> Vector3 {
        let (sin_lon, cos_lon) = sin_cos_deg(self.lon);
        let (sin_lat, cos_lat) = sin_cos_deg(self.lat);

        Vector3 {
            x: cos_lat * cos_lon,
            y: cos_lat * sin_lon,
            z: sin_lat,
        }
    }

    /// Great-circle angular separation in degrees, within `[0, 180]`
    pub fn angular_separation(self, other: Coordinate) -> f64 {
        self.to_vector().angle_to(other.to_vector()).to_degrees()
    }
}

/// Sine and cosine of an angle in degrees
///
/// The argument is reduced to `[-45, 45]` about the nearest multiple of 90
/// before conversion to radians, so multiples of 90 give exact `0` and `±1`.
fn sin_cos_deg(x: f64) -> (f64, f64) {
    let (r, q) = libm::remquo(x, 90.0);
    let (s, c) = r.to_radians().sin_cos();

    match q & 3 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

fn normalize_lon(lon: f64) -> f64 {
    let lon = lon.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to the modulus itself
    if lon >= 360.0 { 0.0 } else { lon }
}

/// Cartesian 3-vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean length
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Angle between two vectors in radians, within `[0, π]`
    ///
    /// Uses `atan2(|a × b|, a · b)`, which stays accurate for nearly
    /// parallel and nearly antiparallel vectors where `acos(a · b)` loses
    /// most of its significant digits.
    pub fn angle_to(self, other: Vector3) -> f64 {
        self.cross(other).norm().atan2(self.dot(other))
    }
}
