//! Data model for the tracker backend's vehicles API.
//! Mirrors the JSON served at `/api/vehicles`, which is built from the
//! GTFS-realtime VehiclePosition feed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One vehicle from the realtime position feed. Every field is optional:
/// the feed omits any sub-message a vehicle did not report, and the backend
/// passes those through as null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: Option<String>,
    pub route_id: Option<String>,
    pub trip_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Heading in degrees clockwise from north.
    pub bearing: Option<f64>,
    /// Meters per second; zero while stopped on some vehicles.
    pub speed: Option<f64>,
    /// Unix seconds of the position report.
    pub timestamp: Option<u64>,
}

impl Vehicle {
    /// Does this vehicle belong to the given route filter? `None` means
    /// "all routes".
    pub fn on_route(&self, filter: Option<&str>) -> bool {
        match filter {
            Some(route) => self.route_id.as_deref() == Some(route),
            None => true,
        }
    }
}

/// Envelope returned by `/api/vehicles`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehiclesResponse {
    pub success: bool,
    pub count: usize,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    /// Active vehicle count per route ID.
    #[serde(default)]
    pub route_counts: HashMap<String, usize>,
    /// Sorted route IDs with at least one active vehicle.
    #[serde(default)]
    pub routes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "success": true,
        "count": 2,
        "vehicles": [
            {
                "vehicle_id": "6101",
                "route_id": "A",
                "trip_id": "113520801",
                "latitude": 39.7729,
                "longitude": -104.8911,
                "bearing": 90.0,
                "speed": 24.3,
                "timestamp": 1735689600
            },
            {
                "vehicle_id": "3204",
                "route_id": "15",
                "trip_id": null,
                "latitude": 39.7402,
                "longitude": -104.9847,
                "bearing": null,
                "speed": null,
                "timestamp": 1735689612
            }
        ],
        "route_counts": {"A": 1, "15": 1},
        "routes": ["15", "A"]
    }"#;

    #[test]
    fn decodes_vehicles_payload() {
        let resp: VehiclesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert!(resp.success);
        assert_eq!(resp.count, 2);
        assert_eq!(resp.vehicles.len(), 2);
        assert_eq!(resp.vehicles[0].route_id.as_deref(), Some("A"));
        assert_eq!(resp.vehicles[1].speed, None);
        assert_eq!(resp.route_counts.get("15"), Some(&1));
        assert_eq!(resp.routes, vec!["15", "A"]);
    }

    #[test]
    fn decodes_minimal_vehicle() {
        // A vehicle that reported nothing but its entity wrapper.
        let v: Vehicle = serde_json::from_str(
            r#"{"vehicle_id": null, "route_id": null, "trip_id": null,
                "latitude": null, "longitude": null, "bearing": null,
                "speed": null, "timestamp": null}"#,
        )
        .unwrap();
        assert_eq!(v, Vehicle::default());
    }

    #[test]
    fn route_filter_matching() {
        let v: Vehicle = Vehicle {
            route_id: Some("A".to_string()),
            ..Default::default()
        };
        assert!(v.on_route(None));
        assert!(v.on_route(Some("A")));
        assert!(!v.on_route(Some("15")));
        assert!(!Vehicle::default().on_route(Some("A")));
    }
}
