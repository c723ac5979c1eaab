//! Unit tests for vr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId, PackageId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn next_allocates_sequentially() {
        assert_eq!(EdgeId(0).next(), Some(EdgeId(1)));
        assert_eq!(PackageId(9).next(), Some(PackageId(10)));
    }

    #[test]
    fn next_stops_at_the_top_of_the_id_space() {
        assert_eq!(NodeId(u32::MAX - 1).next(), Some(NodeId(u32::MAX)));
        assert_eq!(NodeId(u32::MAX).next(), None);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{CoreError, GeoPoint, Hemisphere, Projection};

    const LA_ESTRELLA: GeoPoint = GeoPoint { lat: 6.1599234, lon: -75.6376913 };
    const SABANETA: GeoPoint = GeoPoint { lat: 6.1531035, lon: -75.6167576 };

    #[test]
    fn identical_points_are_exactly_zero() {
        assert_eq!(LA_ESTRELLA.distance_m(LA_ESTRELLA, Projection::AutoUtm), 0.0);
        let fixed = Projection::utm(18, Hemisphere::North).unwrap();
        assert_eq!(SABANETA.distance_m(SABANETA, fixed), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = LA_ESTRELLA.distance_m(SABANETA, Projection::AutoUtm);
        let ba = SABANETA.distance_m(LA_ESTRELLA, Projection::AutoUtm);
        assert_eq!(ab, ba);
    }

    #[test]
    fn short_hop_matches_ground_distance() {
        // Roughly 754 m north-south and 2.32 km east-west.
        let d = LA_ESTRELLA.distance_m(SABANETA, Projection::AutoUtm);
        assert!((d - 2_436.0).abs() < 30.0, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude_on_central_meridian() {
        // Zone 18 is centred on -75°, where the UTM scale factor is 0.9996.
        let a = GeoPoint::new(6.0, -75.0);
        let b = GeoPoint::new(7.0, -75.0);
        let d = a.distance_m(b, Projection::AutoUtm);
        assert!((d - 110_540.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn auto_zone_agrees_with_fixed_zone_inside_the_zone() {
        let fixed = Projection::utm(18, Hemisphere::North).unwrap();
        let auto = LA_ESTRELLA.distance_m(SABANETA, Projection::AutoUtm);
        let pinned = LA_ESTRELLA.distance_m(SABANETA, fixed);
        assert!((auto - pinned).abs() < 1e-6);
    }

    #[test]
    fn central_meridian_on_equator_projects_to_false_origin() {
        let p = Projection::utm(18, Hemisphere::North)
            .unwrap()
            .project(GeoPoint::new(0.0, -75.0));
        assert_eq!(p.x, 500_000.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn southern_hemisphere_uses_false_northing() {
        let p = Projection::AutoUtm.project(GeoPoint::new(-1.0, -75.0));
        assert!(p.y > 9_000_000.0, "got {}", p.y);
    }

    #[test]
    fn zone_validation() {
        assert!(matches!(
            Projection::utm(0, Hemisphere::North),
            Err(CoreError::InvalidUtmZone(0))
        ));
        assert!(Projection::utm(61, Hemisphere::South).is_err());
        assert!(Projection::utm(60, Hemisphere::South).is_ok());
    }
}

#[cfg(test)]
mod record {
    use crate::{Checkpoint, EdgeId, EdgeRecord, GeoPoint, NodeId};

    #[test]
    fn self_loop_detection() {
        let e = EdgeRecord { id: EdgeId(0), start: NodeId(3), end: NodeId(3), distance_m: 0.0 };
        assert!(e.is_self_loop());
        let e = EdgeRecord { id: EdgeId(1), start: NodeId(3), end: NodeId(4), distance_m: 1.0 };
        assert!(!e.is_self_loop());
    }

    #[test]
    fn checkpoint_constructor() {
        let c = Checkpoint::new(NodeId(1), "Sabaneta", GeoPoint::new(6.15, -75.61));
        assert_eq!(c.name, "Sabaneta");
        assert_eq!(c.id, NodeId(1));
    }
}
