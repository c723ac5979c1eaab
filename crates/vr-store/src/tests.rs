//! Unit tests for vr-store.

#[cfg(test)]
mod memory {
    use vr_core::{Checkpoint, GeoPoint, NodeId, PackageId};

    use crate::{EdgeStore, InMemoryStore, NodeStore, PackageStore, StoreError};

    fn seeded() -> InMemoryStore {
        InMemoryStore::with_checkpoints([
            Checkpoint::new(NodeId(0), "La Estrella", GeoPoint::new(6.1599234, -75.6376913)),
            Checkpoint::new(NodeId(1), "Sabaneta", GeoPoint::new(6.1531035, -75.6167576)),
        ])
        .unwrap()
    }

    #[test]
    fn create_node_allocates_after_max_id() {
        let store = seeded();
        let c = store.create_node("Itagui", GeoPoint::new(6.17, -75.61)).unwrap();
        assert_eq!(c.id, NodeId(2));
        assert_eq!(store.get_node(NodeId(2)).unwrap(), Some(c));
    }

    #[test]
    fn first_node_in_empty_store_is_zero() {
        let store = InMemoryStore::new();
        let c = store.create_node("first", GeoPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(c.id, NodeId(0));
    }

    #[test]
    fn create_node_past_max_id_is_table_full() {
        let store = InMemoryStore::with_checkpoints([
            Checkpoint::new(NodeId(0), "south", GeoPoint::new(0.0, 0.0)),
            Checkpoint::new(NodeId(u32::MAX), "last", GeoPoint::new(1.0, 1.0)),
        ])
        .unwrap();
        let err = store.create_node("overflow", GeoPoint::new(2.0, 2.0)).unwrap_err();
        assert!(matches!(err, StoreError::TableFull("node")));
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.get_node(NodeId(0)).unwrap().map(|c| c.name), Some("south".into()));
    }

    #[test]
    fn list_nodes_is_sorted_by_id() {
        let store = InMemoryStore::with_checkpoints([
            Checkpoint::new(NodeId(5), "b", GeoPoint::new(0.0, 0.0)),
            Checkpoint::new(NodeId(2), "a", GeoPoint::new(0.0, 0.0)),
        ])
        .unwrap();
        let ids: Vec<_> = store.list_nodes().unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![NodeId(2), NodeId(5)]);
    }

    #[test]
    fn duplicate_seed_id_is_rejected() {
        let store = seeded();
        let err = store
            .insert_checkpoint(Checkpoint::new(NodeId(1), "again", GeoPoint::new(0.0, 0.0)))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateNode(NodeId(1))));
    }

    #[test]
    fn unknown_node_is_none() {
        assert_eq!(seeded().get_node(NodeId(9)).unwrap(), None);
    }

    #[test]
    fn edges_require_existing_endpoints() {
        let store = seeded();
        let e = store.create_edge(NodeId(0), NodeId(1), 2_435.0).unwrap();
        assert_eq!(e.distance_m, 2_435.0);
        assert_eq!(store.edge_count(), 1);

        let err = store.create_edge(NodeId(0), NodeId(7), 1.0).unwrap_err();
        assert!(matches!(err, StoreError::NodeNotFound(NodeId(7))));
        assert_eq!(store.list_edges().unwrap().len(), 1);
    }

    #[test]
    fn packages_round_trip_through_store() {
        let store = seeded();
        let p = store.create_package("documents", NodeId(0), NodeId(1)).unwrap();
        assert_eq!(p.id, PackageId(0));
        assert_eq!(store.get_package(PackageId(0)).unwrap(), Some(p));
        assert_eq!(store.get_package(PackageId(1)).unwrap(), None);
        assert!(store.create_package("lost", NodeId(0), NodeId(3)).is_err());
        assert_eq!(store.list_packages().unwrap().len(), 1);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use vr_core::NodeId;

    use crate::{load_checkpoints_reader, load_edge_pairs_reader, EdgePair, StoreError};

    #[test]
    fn checkpoints_parse_with_whitespace() {
        let csv = "id, name, lat, lon\n0, La Estrella, 6.1599234, -75.6376913\n1,Sabaneta,6.1531035,-75.6167576\n";
        let rows = load_checkpoints_reader(Cursor::new(csv)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "La Estrella");
        assert_eq!(rows[1].id, NodeId(1));
        assert_eq!(rows[1].pos.lon, -75.6167576);
    }

    #[test]
    fn edge_pairs_parse() {
        let csv = "start,end\n0,1\n1,2\n";
        let rows = load_edge_pairs_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            rows,
            vec![
                EdgePair { start: NodeId(0), end: NodeId(1) },
                EdgePair { start: NodeId(1), end: NodeId(2) },
            ]
        );
    }

    #[test]
    fn bad_row_is_a_parse_error() {
        let csv = "id,name,lat,lon\nx,nowhere,0,0\n";
        let err = load_checkpoints_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_edge_pairs_csv(std::path::Path::new("/nonexistent/edges.csv"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
