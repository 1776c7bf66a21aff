//! Notification drafting for the feed.
//!
//! The engine only produces records; display, read state and clearing belong
//! to the notification panel. Randomness is injected as plain `f64` rolls
//! (call sites pass `js_sys::Math::random()`) so the drafting stays pure.

use crate::geo::GeoPoint;
use crate::model::{MapEntity, NotificationDraft, Severity};
use crate::predict::{PredictionRecord, RiskLevel};

pub fn severity_for(level: RiskLevel) -> Severity {
    match level {
        RiskLevel::High => Severity::High,
        RiskLevel::Medium => Severity::Medium,
        RiskLevel::Low => Severity::Low,
    }
}

fn threat_type_for(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "Critical Security Alert",
        RiskLevel::Medium => "Elevated Risk Warning",
        RiskLevel::Low => "Routine Monitoring Alert",
    }
}

/// Sector labels run A-1 through E-9.
pub fn sector_code(roll_letter: f64, roll_digit: f64) -> String {
    let letter = (b'A' + (roll_letter * 5.0).floor().min(4.0) as u8) as char;
    let digit = (roll_digit * 9.0).floor().min(8.0) as u32 + 1;
    format!("{}-{}", letter, digit)
}

pub fn format_coordinates(p: GeoPoint) -> String {
    format!("{:.4}, {:.4}", p.lat, p.lng)
}

/// Republishes a freshly arrived prediction record into the feed.
pub fn prediction_alert(record: &PredictionRecord, sector: String) -> NotificationDraft {
    let level = record.risk_level;
    let lead = record
        .recommendations
        .first()
        .map(String::as_str)
        .unwrap_or("");
    NotificationDraft {
        title: format!("{} Risk Level Detected", level.label()),
        message: format!(
            "Risk score: {:.1} in sector {}. Environmental factors: Wind {}km/h, Temp {}\u{b0}C. {}",
            record.risk_score,
            sector,
            record.environmental_factors.wind_speed,
            record.environmental_factors.temperature,
            lead,
        ),
        severity: severity_for(level),
        threat_type: Some(threat_type_for(level).to_string()),
        sector: Some(sector),
        coordinates: Some(format!(
            "{:.4}, {:.4}",
            record.coordinates.lat, record.coordinates.lon
        )),
    }
}

/// Descriptions for the threat points seeded in the catalog.
fn catalog_threat_description(label: &str) -> &'static str {
    match label {
        "Active Threat" => "Armed hostile entity with confirmed aggressive intent",
        "Suspicious Activity" => "Unidentified movement pattern indicating potential hostile action",
        "Perimeter Breach" => "Security boundary compromised by unknown entity",
        "Unauthorized Access" => "Entry detected in restricted area without proper clearance",
        "Sensor Trigger" => "Perimeter detection system activated by unidentified presence",
        _ => "Unknown threat type",
    }
}

/// One startup alert per catalog threat point.
pub fn catalog_threat_alert(entity: &MapEntity, sector: String) -> NotificationDraft {
    let coords = format_coordinates(entity.position);
    NotificationDraft {
        title: format!("Threat Alert: {}", entity.label),
        message: format!(
            "{} in sector {}. Coordinates: {}",
            catalog_threat_description(entity.label),
            sector,
            coords
        ),
        severity: Severity::High,
        threat_type: Some(entity.label.to_string()),
        sector: Some(sector),
        coordinates: Some(coords),
    }
}

pub struct ThreatScenario {
    pub kind: &'static str,
    pub description: &'static str,
    pub response: &'static str,
}

pub const THREAT_SCENARIOS: &[ThreatScenario] = &[
    ThreatScenario {
        kind: "Unauthorized Access",
        description: "Security breach detected with unauthorized credentials",
        response: "Deploy security team for immediate containment",
    },
    ThreatScenario {
        kind: "Suspicious Movement",
        description: "Irregular movement pattern detected by motion sensors",
        response: "Increase surveillance in affected area",
    },
    ThreatScenario {
        kind: "Perimeter Breach",
        description: "Physical security barrier compromised",
        response: "Lock down affected sector and deploy response team",
    },
    ThreatScenario {
        kind: "Unidentified Vehicle",
        description: "Vehicle without proper identification in restricted zone",
        response: "Dispatch patrol to intercept and identify",
    },
    ThreatScenario {
        kind: "Sensor Trigger",
        description: "Multiple security sensors activated simultaneously",
        response: "Initiate full spectrum scan of affected area",
    },
    ThreatScenario {
        kind: "Communication Disruption",
        description: "Interference detected in secure communication channels",
        response: "Switch to backup frequency and trace source",
    },
    ThreatScenario {
        kind: "Drone Detection",
        description: "Unauthorized aerial vehicle in restricted airspace",
        response: "Activate counter-drone measures",
    },
    ThreatScenario {
        kind: "Cyber Intrusion",
        description: "Attempted breach of digital security systems",
        response: "Isolate affected systems and trace attack vector",
    },
];

/// Draft for the periodic simulated threat feed. `roll_scenario` and
/// `roll_severity` are uniform [0,1) draws; severity skews high 30% of the
/// time. Coordinates are random within the projection window.
pub fn simulated_threat(
    roll_scenario: f64,
    roll_severity: f64,
    position: GeoPoint,
    sector: String,
) -> NotificationDraft {
    let idx = ((roll_scenario * THREAT_SCENARIOS.len() as f64).floor() as usize)
        .min(THREAT_SCENARIOS.len() - 1);
    let scenario = &THREAT_SCENARIOS[idx];
    let severity = if roll_severity > 0.7 {
        Severity::High
    } else {
        Severity::Medium
    };
    NotificationDraft {
        title: format!("New Threat: {}", scenario.kind),
        message: format!(
            "{} in sector {}. {}. Coordinates: {}",
            scenario.description,
            sector,
            scenario.response,
            format_coordinates(position)
        ),
        severity,
        threat_type: Some(scenario.kind.to_string()),
        sector: Some(sector),
        coordinates: Some(format_coordinates(position)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::{fallback_record, PredictionRequest};

    #[test]
    fn severity_tracks_risk_level() {
        assert_eq!(severity_for(RiskLevel::High), Severity::High);
        assert_eq!(severity_for(RiskLevel::Medium), Severity::Medium);
        assert_eq!(severity_for(RiskLevel::Low), Severity::Low);
    }

    #[test]
    fn sector_codes_stay_in_range() {
        assert_eq!(sector_code(0.0, 0.0), "A-1");
        assert_eq!(sector_code(0.999, 0.999), "E-9");
        assert_eq!(sector_code(0.5, 0.5), "C-5");
    }

    #[test]
    fn prediction_alert_carries_sector_and_coordinates() {
        let rec = fallback_record(&PredictionRequest::default(), String::new());
        let draft = prediction_alert(&rec, "B-3".to_string());
        assert!(draft.title.contains(rec.risk_level.label()));
        assert_eq!(draft.sector.as_deref(), Some("B-3"));
        assert_eq!(draft.coordinates.as_deref(), Some("28.6100, 77.2000"));
        assert!(draft.message.contains("sector B-3"));
    }

    #[test]
    fn simulated_threat_severity_split() {
        let pos = GeoPoint::new(35.675, 139.65);
        let high = simulated_threat(0.0, 0.9, pos, "A-1".to_string());
        assert_eq!(high.severity, Severity::High);
        let medium = simulated_threat(0.0, 0.5, pos, "A-1".to_string());
        assert_eq!(medium.severity, Severity::Medium);
    }

    #[test]
    fn scenario_roll_never_indexes_out_of_bounds() {
        let pos = GeoPoint::new(35.675, 139.65);
        let draft = simulated_threat(0.999999, 0.0, pos, "A-1".to_string());
        let last = THREAT_SCENARIOS.last().unwrap();
        assert_eq!(draft.threat_type.as_deref(), Some(last.kind));
    }

    #[test]
    fn catalog_alert_uses_the_known_description() {
        let entities = crate::catalog::map_entities();
        let threat = &entities[0];
        let draft = catalog_threat_alert(threat, "D-4".to_string());
        assert!(draft.message.contains("Armed hostile entity"));
        assert_eq!(draft.severity, Severity::High);
        assert_eq!(draft.threat_type.as_deref(), Some("Active Threat"));
    }
}
