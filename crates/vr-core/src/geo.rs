//! Geographic coordinates and metric distance via reprojection.
//!
//! Raw latitude/longitude deltas are not metrically meaningful, so every
//! distance is measured in a projected CRS: both points are pushed through a
//! Universal Transverse Mercator projection and the Euclidean distance of the
//! resulting easting/northing pairs is returned in metres.
//!
//! The forward projection follows Snyder's series expansion on the WGS-84
//! ellipsoid ("Map Projections: A Working Manual", USGS 1987, p. 61).  At
//! checkpoint-network scale (a few tens of kilometres inside one zone) the
//! error against a full geodesic is well under 0.1 %.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── WGS-84 / UTM constants ────────────────────────────────────────────────────

const WGS84_A: f64 = 6_378_137.0;
const WGS84_F: f64 = 1.0 / 298.257_223_563;
const UTM_K0: f64 = 0.9996;
const UTM_FALSE_EASTING: f64 = 500_000.0;
const UTM_FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A geographic coordinate in decimal degrees.
///
/// Ranges are not validated here; the store collaborator owns input checks.
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

    /// Planar distance in metres after reprojecting both points with
    /// `projection`.
    ///
    /// Pure: identical inputs always give identical output, and
    /// `p.distance_m(p, _)` is exactly `0.0`.
    pub fn distance_m(self, other: GeoPoint, projection: Projection) -> f64 {
        let (utm, hemisphere) = projection.resolve(self, other);
        let a = utm.forward(self, hemisphere);
        let b = utm.forward(other, hemisphere);
        a.distance(b)
    }

    /// Point halfway between `self` and `other` in degree space.
    #[inline]
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint::new((self.lat + other.lat) * 0.5, (self.lon + other.lon) * 0.5)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lon)
    }
}

// ── PlanarPoint ───────────────────────────────────────────────────────────────

/// Easting/northing pair in metres in some projected CRS.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    #[inline]
    pub fn distance(self, other: PlanarPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    #[inline]
    pub fn of(lat: f64) -> Hemisphere {
        if lat < 0.0 { Hemisphere::South } else { Hemisphere::North }
    }
}

/// Projected CRS used to measure edge lengths.
///
/// | Variant   | Zone selection                                         |
/// |-----------|--------------------------------------------------------|
/// | `Utm`     | fixed zone/hemisphere for the whole network            |
/// | `AutoUtm` | zone of the midpoint of the two measured points        |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Projection {
    Utm { zone: u8, hemisphere: Hemisphere },
    #[default]
    AutoUtm,
}

impl Projection {
    /// A fixed UTM zone.  Fails unless `zone` is in `1..=60`.
    pub fn utm(zone: u8, hemisphere: Hemisphere) -> CoreResult<Projection> {
        if !(1..=60).contains(&zone) {
            return Err(CoreError::InvalidUtmZone(zone));
        }
        Ok(Projection::Utm { zone, hemisphere })
    }

    /// Project a single point.  `AutoUtm` picks the point's own zone.
    pub fn project(self, p: GeoPoint) -> PlanarPoint {
        let (utm, hemisphere) = self.resolve(p, p);
        utm.forward(p, hemisphere)
    }

    fn resolve(self, a: GeoPoint, b: GeoPoint) -> (UtmZone, Hemisphere) {
        match self {
            Projection::Utm { zone, hemisphere } => (UtmZone::new(zone), hemisphere),
            Projection::AutoUtm => {
                let mid = a.midpoint(b);
                (UtmZone::containing(mid.lon), Hemisphere::of(mid.lat))
            }
        }
    }
}

// ── UTM forward projection ────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct UtmZone {
    /// Central meridian in radians.
    lon0: f64,
}

impl UtmZone {
    fn new(zone: u8) -> Self {
        let zone = zone.clamp(1, 60);
        let lon0_deg = (zone as f64 - 1.0) * 6.0 - 180.0 + 3.0;
        Self { lon0: lon0_deg.to_radians() }
    }

    fn containing(lon: f64) -> Self {
        let zone = ((lon + 180.0) / 6.0).floor() as i32 + 1;
        Self::new(zone.clamp(1, 60) as u8)
    }

    fn forward(self, p: GeoPoint, hemisphere: Hemisphere) -> PlanarPoint {
        let e2 = WGS84_F * (2.0 - WGS84_F);
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        let ep2 = e2 / (1.0 - e2);

        let phi = p.lat.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = sin_phi / cos_phi;

        let n = WGS84_A / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let a = cos_phi * (p.lon.to_radians() - self.lon0);

        // Meridian arc length from the equator.
        let m = WGS84_A
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * phi).sin());

        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let x = UTM_K0
            * n
            * (a + (1.0 - t + c) * a3 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a5 / 120.0)
            + UTM_FALSE_EASTING;

        let mut y = UTM_K0
            * (m + n
                * tan_phi
                * (a2 / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a6 / 720.0));

        if hemisphere == Hemisphere::South {
            y += UTM_FALSE_NORTHING_SOUTH;
        }

        PlanarPoint { x, y }
    }
}
