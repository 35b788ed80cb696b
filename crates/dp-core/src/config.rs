//! Route engine configuration.
//!
//! `RouteConfig` is a plain value: build it in code, or read it from the
//! process environment with [`RouteConfig::from_env`].  Missing variables
//! fall back to defaults; a variable that is present but malformed is an
//! error rather than a silent fallback.
//!
//! | Variable                   | Field                 | Default     |
//! |----------------------------|-----------------------|-------------|
//! | `DISPATCH_SPEED_KMH`       | `geo.speed_kmh`       | `20`        |
//! | `DISPATCH_EARTH_RADIUS_KM` | `geo.earth_radius_km` | `6371`      |
//! | `DISPATCH_MAX_ORDERS`      | `max_orders`          | `6`         |
//! | `DISPATCH_PREP_POLICY`     | `prep_policy`         | `per-order` |

use std::str::FromStr;

use crate::{DpError, DpResult, GeoModel};

pub const ENV_SPEED_KMH:       &str = "DISPATCH_SPEED_KMH";
pub const ENV_EARTH_RADIUS_KM: &str = "DISPATCH_EARTH_RADIUS_KM";
pub const ENV_MAX_ORDERS:      &str = "DISPATCH_MAX_ORDERS";
pub const ENV_PREP_POLICY:     &str = "DISPATCH_PREP_POLICY";

/// Exhaustive search over 6 orders scores ~7.5 M orderings.
pub const DEFAULT_MAX_ORDERS: usize = 6;

// ── PrepTimePolicy ────────────────────────────────────────────────────────────

/// How order preparation time is charged while walking a route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PrepTimePolicy {
    /// Each pickup stop waits for its own order only.
    #[default]
    PerOrder,
    /// Every stop whose location is the pickup location of some order waits
    /// for that order, once per visit.  Orders sharing a pickup location are
    /// charged at each of their pickups, and a dropoff at another order's
    /// pickup location is charged too.
    PerLocation,
}

impl PrepTimePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            PrepTimePolicy::PerOrder    => "per-order",
            PrepTimePolicy::PerLocation => "per-location",
        }
    }
}

impl FromStr for PrepTimePolicy {
    type Err = DpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "per-order"    => Ok(PrepTimePolicy::PerOrder),
            "per-location" => Ok(PrepTimePolicy::PerLocation),
            other => Err(DpError::Parse(format!(
                "invalid prep time policy {other:?}: expected \"per-order\" or \"per-location\""
            ))),
        }
    }
}

impl std::fmt::Display for PrepTimePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RouteConfig ───────────────────────────────────────────────────────────────

/// Everything the route engine needs besides the per-call inputs.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteConfig {
    /// Distance and travel-time constants.
    pub geo: GeoModel,

    /// Largest order set accepted for exhaustive search.  The number of
    /// candidate orderings is `(2n)! / 2^n`, so this is the caller's search
    /// budget.
    pub max_orders: usize,

    pub prep_policy: PrepTimePolicy,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            geo:         GeoModel::default(),
            max_orders:  DEFAULT_MAX_ORDERS,
            prep_policy: PrepTimePolicy::default(),
        }
    }
}

impl RouteConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> DpResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Useful for testing (pass a closure over a `HashMap`) without touching
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> DpResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = parse_var::<f64, _>(&lookup, ENV_SPEED_KMH)? {
            cfg.geo.speed_kmh = v;
        }
        if let Some(v) = parse_var::<f64, _>(&lookup, ENV_EARTH_RADIUS_KM)? {
            cfg.geo.earth_radius_km = v;
        }
        if let Some(v) = parse_var::<usize, _>(&lookup, ENV_MAX_ORDERS)? {
            cfg.max_orders = v;
        }
        if let Some(raw) = lookup(ENV_PREP_POLICY) {
            cfg.prep_policy = raw
                .parse()
                .map_err(|e| DpError::Config(format!("{ENV_PREP_POLICY}: {e}")))?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the engine cannot compute with.
    pub fn validate(&self) -> DpResult<()> {
        let speed = self.geo.speed_kmh;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(DpError::Config(format!("speed must be a positive number of km/h, got {speed}")));
        }
        let radius = self.geo.earth_radius_km;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(DpError::Config(format!("earth radius must be positive, got {radius}")));
        }
        if !self.geo.pi.is_finite() {
            return Err(DpError::Config(format!("pi must be finite, got {}", self.geo.pi)));
        }
        if self.max_orders == 0 {
            return Err(DpError::Config("max_orders must be at least 1".to_owned()));
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_var<T, F>(lookup: &F, key: &str) -> DpResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| DpError::Config(format!("{key}={raw:?}: {e}"))),
    }
}
