//! Static entity catalog: the demo's map points and heat samples.
//!
//! Read-only input to the render loops; nothing here depends on viewport
//! state and rendering never mutates it.

use crate::geo::GeoPoint;
use crate::model::{EntityKind, HeatKind, HeatSample, MapEntity};

pub fn map_entities() -> Vec<MapEntity> {
    vec![
        MapEntity {
            id: "threat-1",
            kind: EntityKind::Threat,
            label: "Active Threat",
            position: GeoPoint::new(35.6762, 139.6503),
        },
        MapEntity {
            id: "threat-2",
            kind: EntityKind::Threat,
            label: "Suspicious Activity",
            position: GeoPoint::new(35.6768, 139.6512),
        },
        MapEntity {
            id: "friendly-1",
            kind: EntityKind::Friendly,
            label: "Alpha Team",
            position: GeoPoint::new(35.6765, 139.6510),
        },
        MapEntity {
            id: "friendly-2",
            kind: EntityKind::Friendly,
            label: "Bravo Team",
            position: GeoPoint::new(35.6758, 139.6498),
        },
        MapEntity {
            id: "friendly-3",
            kind: EntityKind::Friendly,
            label: "Charlie Team",
            position: GeoPoint::new(35.6772, 139.6508),
        },
        MapEntity {
            id: "camera-1",
            kind: EntityKind::Camera,
            label: "CAM-01",
            position: GeoPoint::new(35.6760, 139.6505),
        },
        MapEntity {
            id: "camera-2",
            kind: EntityKind::Camera,
            label: "CAM-02",
            position: GeoPoint::new(35.6770, 139.6515),
        },
        MapEntity {
            id: "camera-3",
            kind: EntityKind::Camera,
            label: "CAM-03",
            position: GeoPoint::new(35.6755, 139.6490),
        },
        MapEntity {
            id: "camera-4",
            kind: EntityKind::Camera,
            label: "CAM-04",
            position: GeoPoint::new(35.6768, 139.6495),
        },
    ]
}

pub fn heat_samples() -> Vec<HeatSample> {
    vec![
        HeatSample {
            id: "heat-1",
            kind: HeatKind::Activity,
            intensity: 0.8,
            position: GeoPoint::new(35.6762, 139.6503),
            radius: 50.0,
        },
        HeatSample {
            id: "heat-2",
            kind: HeatKind::Threat,
            intensity: 0.9,
            position: GeoPoint::new(35.6768, 139.6512),
            radius: 40.0,
        },
        HeatSample {
            id: "heat-3",
            kind: HeatKind::Movement,
            intensity: 0.6,
            position: GeoPoint::new(35.6765, 139.6510),
            radius: 60.0,
        },
        HeatSample {
            id: "heat-4",
            kind: HeatKind::Activity,
            intensity: 0.4,
            position: GeoPoint::new(35.6758, 139.6498),
            radius: 30.0,
        },
    ]
}

/// The heat layer draws only the currently selected kind.
pub fn samples_of_kind(samples: &[HeatSample], kind: HeatKind) -> Vec<&HeatSample> {
    samples.iter().filter(|s| s.kind == kind).collect()
}

pub fn entities_of_kind(entities: &[MapEntity], kind: EntityKind) -> Vec<&MapEntity> {
    entities.iter().filter(|e| e.kind == kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let entities = map_entities();
        for (i, a) in entities.iter().enumerate() {
            for b in &entities[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn heat_filter_selects_exactly_the_requested_kind() {
        let samples = heat_samples();
        // Demo set is activity x2, threat x1, movement x1.
        assert_eq!(samples_of_kind(&samples, HeatKind::Activity).len(), 2);
        let threats = samples_of_kind(&samples, HeatKind::Threat);
        assert_eq!(threats.len(), 1);
        assert!(threats.iter().all(|s| s.kind == HeatKind::Threat));
        assert_eq!(samples_of_kind(&samples, HeatKind::Movement).len(), 1);
    }

    #[test]
    fn intensities_are_normalized() {
        for s in heat_samples() {
            assert!((0.0..=1.0).contains(&s.intensity), "{}", s.id);
        }
    }

    #[test]
    fn catalog_positions_sit_inside_the_projection_window() {
        use crate::geo::{LAT_ORIGIN, LAT_SPAN, LON_ORIGIN, LON_SPAN};
        for e in map_entities() {
            let p = e.position;
            assert!(p.lng >= LON_ORIGIN && p.lng <= LON_ORIGIN + LON_SPAN, "{}", e.id);
            assert!(p.lat >= LAT_ORIGIN && p.lat <= LAT_ORIGIN + LAT_SPAN, "{}", e.id);
        }
    }
}
