//! Built-in Aburrá Valley checkpoint network.
//!
//! 19 checkpoints from La Estrella in the south to Girardota in the north,
//! joined by 30 undirected roads.  Edge lengths are not listed here; the
//! service derives them from the coordinates on import.

use vr_core::{Checkpoint, GeoPoint, NodeId};
use vr_store::EdgePair;

const CHECKPOINTS: [(&str, f64, f64); 19] = [
    ("La Estrella",            6.1599234, -75.6376913),
    ("Sabaneta",               6.1531035, -75.6167576),
    ("Itagui",                 6.1700374, -75.6183442),
    ("Polideportivo Envigado", 6.1630497, -75.5968338),
    ("Envigado",               6.1684628, -75.5846479),
    ("Itagui Sur",             6.1886324, -75.6026334),
    ("Poblado",                6.2024487, -75.5745657),
    ("La Milagrosa",           6.2369277, -75.5519432),
    ("Medellin Centro",        6.2456915, -75.5782263),
    ("Laureles",               6.2379977, -75.5986600),
    ("Divino Niño",            6.2591130, -75.6218592),
    ("El Diamante",            6.2854838, -75.5866328),
    ("Aranjuez",               6.2752501, -75.5590806),
    ("Pedregal",               6.3011736, -75.5750302),
    ("Bello",                  6.3364196, -75.5604546),
    ("La Camila",              6.3328052, -75.5429982),
    ("Copacabana",             6.3502126, -75.5117512),
    ("Comfama Copacabana",     6.3775514, -75.4831091),
    ("Girardota",              6.3766278, -75.4469395),
];

const ROADS: [(u32, u32); 30] = [
    (0, 1),   (0, 2),   (2, 3),   (2, 5),   (3, 5),
    (5, 4),   (3, 4),   (4, 6),   (5, 6),   (6, 9),
    (6, 8),   (6, 7),   (9, 8),   (9, 10),  (9, 11),
    (10, 11), (8, 12),  (7, 12),  (11, 12), (11, 13),
    (13, 12), (12, 15), (13, 15), (13, 14), (14, 15),
    (14, 16), (16, 15), (16, 17), (16, 18), (18, 17),
];

/// Checkpoints with ids `0..19` in list order.
pub fn checkpoints() -> Vec<Checkpoint> {
    CHECKPOINTS
        .iter()
        .zip(0u32..)
        .map(|(&(name, lat, lon), id)| Checkpoint::new(NodeId(id), name, GeoPoint::new(lat, lon)))
        .collect()
}

pub fn roads() -> Vec<EdgePair> {
    ROADS
        .iter()
        .map(|&(a, b)| EdgePair { start: NodeId(a), end: NodeId(b) })
        .collect()
}

#[cfg(test)]
mod tests {
    use vr_route::{RouteConfig, RouteService};
    use vr_store::InMemoryStore;

    use super::*;

    #[test]
    fn whole_valley_is_connected() {
        let store = InMemoryStore::with_checkpoints(checkpoints()).unwrap();
        let svc = RouteService::new(store, RouteConfig::default());
        assert_eq!(svc.import_edges(&roads()).unwrap().len(), 30);

        for dest in 1..19 {
            let r = svc.resolve_route(NodeId(0), NodeId(dest)).unwrap();
            assert_eq!(r.path.first().map(|c| c.id), Some(NodeId(0)));
            assert_eq!(r.path.last().map(|c| c.id), Some(NodeId(dest)));
        }
    }

    #[test]
    fn south_to_north_is_tens_of_kilometres() {
        let store = InMemoryStore::with_checkpoints(checkpoints()).unwrap();
        let svc = RouteService::new(store, RouteConfig::default());
        svc.import_edges(&roads()).unwrap();
        let r = svc.resolve_route(NodeId(0), NodeId(18)).unwrap();
        assert!(r.distance_m > 25_000.0 && r.distance_m < 50_000.0, "got {}", r.distance_m);
    }
}
