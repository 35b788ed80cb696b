//! Geographic coordinates and great-circle travel time.
//!
//! `GeoPoint` stores double-precision latitude/longitude in degrees.  Every
//! constant that feeds the distance formula (Earth radius, travel speed, and
//! the value of π used for degree→radian conversion) lives on [`GeoModel`] so
//! tests can substitute controlled values.

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// `true` if latitude is within [-90, 90] and longitude within [-180, 180].
    #[inline]
    pub fn in_range(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── GeoModel ──────────────────────────────────────────────────────────────────

/// Mean Earth radius, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Default courier speed, km/h.
pub const DEFAULT_SPEED_KMH: f64 = 20.0;

/// Parameters of the haversine distance and constant-speed travel model.
///
/// `GeoModel` is `Copy` and holds no heap data; pass it by value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoModel {
    /// Sphere radius in kilometres.  Default: 6371.
    pub earth_radius_km: f64,
    /// Constant travel speed in km/h.  Default: 20.
    pub speed_kmh: f64,
    /// Value of π used for degree→radian conversion.
    pub pi: f64,
}

impl Default for GeoModel {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            speed_kmh:       DEFAULT_SPEED_KMH,
            pi:              std::f64::consts::PI,
        }
    }
}

impl GeoModel {
    /// Default model travelling at `speed_kmh`.
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self { speed_kmh, ..Self::default() }
    }

    /// The model the order service historically shipped with: π truncated
    /// to `3.14159`.  Only useful for reproducing old totals.
    pub fn legacy() -> Self {
        Self { pi: 3.14159, ..Self::default() }
    }

    #[inline]
    fn to_radians(&self, degrees: f64) -> f64 {
        degrees * (self.pi / 180.0)
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Finite, non-negative inputs always produce a finite, non-negative
    /// result: the intermediate `a` term is clamped to [0, 1] so rounding
    /// near antipodal points cannot push `sqrt(1 - a)` into NaN.
    pub fn distance_km(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        let d_lat = self.to_radians(b.lat - a.lat);
        let d_lon = self.to_radians(b.lon - a.lon);

        let lat1 = self.to_radians(a.lat);
        let lat2 = self.to_radians(b.lat);

        let h = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
        let h = h.clamp(0.0, 1.0);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        self.earth_radius_km * c
    }

    /// Minutes needed to cover `km` at the configured speed.
    #[inline]
    pub fn minutes_for_km(&self, km: f64) -> f64 {
        km / self.speed_kmh * 60.0
    }

    /// Travel time from `a` to `b` in minutes at the configured speed.
    #[inline]
    pub fn travel_minutes(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        self.minutes_for_km(self.distance_km(a, b))
    }

    /// Travel time from `a` to `b` in minutes at an explicit speed.
    #[inline]
    pub fn travel_minutes_at(&self, a: GeoPoint, b: GeoPoint, speed_kmh: f64) -> f64 {
        self.distance_km(a, b) / speed_kmh * 60.0
    }
}
