//! Prediction feed boundary.
//!
//! The risk engine is an external stub (`POST /predict`). Its payload is
//! treated as an opaque signal: we never validate it beyond decoding, and on
//! any transport or decode failure we substitute a locally computed fallback
//! record so the badge and feed never go stale. The local formula matches
//! the client-side calculator the predictor page uses.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

pub const PREDICT_URL: &str = "http://localhost:8000/predict";

/// Poll cadence for the background prediction refresh, in milliseconds.
pub const POLL_INTERVAL_MS: i32 = 15_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub lat: f64,
    pub lon: f64,
    pub wind_speed: f64,
    pub temperature: f64,
    pub last_threat_count: u32,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        // Fixed sensor snapshot the dashboard polls with.
        Self {
            lat: 28.61,
            lon: 77.20,
            wind_speed: 10.0,
            temperature: 25.0,
            last_threat_count: 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalFactors {
    pub wind_speed: f64,
    pub temperature: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreatHistory {
    pub last_threat_count: u32,
}

/// Superseded wholesale by the next record; no merging.
/// Only `risk_level` and `risk_score` are guaranteed on the wire (the stub
/// engine returns nothing else), so the remaining fields default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub environmental_factors: EnvironmentalFactors,
    #[serde(default)]
    pub threat_history: ThreatHistory,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// risk_score = 0.3*wind/100 + 0.2*(temp+10)/50 + 0.5*threats/10,
/// rounded to two decimals.
pub fn local_risk_score(wind_speed: f64, temperature: f64, last_threat_count: u32) -> f64 {
    let score = 0.3 * wind_speed / 100.0
        + 0.2 * (temperature + 10.0) / 50.0
        + 0.5 * last_threat_count as f64 / 10.0;
    (score * 100.0).round() / 100.0
}

pub fn classify_risk(score: f64) -> RiskLevel {
    if score > 0.7 {
        RiskLevel::High
    } else if score > 0.3 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Locally synthesized record used when the engine is unreachable.
pub fn fallback_record(req: &PredictionRequest, timestamp: String) -> PredictionRecord {
    let score = local_risk_score(req.wind_speed, req.temperature, req.last_threat_count);
    PredictionRecord {
        risk_level: classify_risk(score),
        risk_score: score,
        timestamp,
        coordinates: Coordinates {
            lat: req.lat,
            lon: req.lon,
        },
        environmental_factors: EnvironmentalFactors {
            wind_speed: req.wind_speed,
            temperature: req.temperature,
        },
        threat_history: ThreatHistory {
            last_threat_count: req.last_threat_count,
        },
        recommendations: vec![
            "Increase patrol frequency in sector A-7".to_string(),
            "Deploy additional surveillance in high-risk areas".to_string(),
            "Monitor weather conditions for visibility impact".to_string(),
        ],
    }
}

/// Single asynchronous suspension point of the engine. Every failure mode
/// (transport, HTTP status, decode) collapses into `Err`; the caller flips
/// the offline badge and substitutes `fallback_record`.
pub async fn fetch_prediction(req: &PredictionRequest) -> Result<PredictionRecord, gloo_net::Error> {
    let response = Request::post(PREDICT_URL).json(req)?.send().await?;
    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "predict endpoint returned HTTP {}",
            response.status()
        )));
    }
    response.json::<PredictionRecord>().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_formula_matches_reference_values() {
        // wind 50, temp 20, threats 5: 0.15 + 0.12 + 0.25 = 0.52
        assert_eq!(local_risk_score(50.0, 20.0, 5), 0.52);
        assert_eq!(local_risk_score(0.0, -10.0, 0), 0.0);
        assert_eq!(local_risk_score(100.0, 40.0, 10), 1.0);
    }

    #[test]
    fn classification_thresholds() {
        assert_eq!(classify_risk(0.0), RiskLevel::Low);
        assert_eq!(classify_risk(0.3), RiskLevel::Low);
        assert_eq!(classify_risk(0.31), RiskLevel::Medium);
        assert_eq!(classify_risk(0.7), RiskLevel::Medium);
        assert_eq!(classify_risk(0.71), RiskLevel::High);
    }

    #[test]
    fn fallback_record_mirrors_the_request() {
        let req = PredictionRequest::default();
        let rec = fallback_record(&req, "t".to_string());
        assert_eq!(rec.coordinates.lat, req.lat);
        assert_eq!(rec.environmental_factors.wind_speed, req.wind_speed);
        assert_eq!(rec.threat_history.last_threat_count, req.last_threat_count);
        assert_eq!(rec.risk_level, classify_risk(rec.risk_score));
        assert!(!rec.recommendations.is_empty());
    }

    #[test]
    fn decodes_the_stub_engine_payload() {
        // The reference engine returns only these two fields.
        let rec: PredictionRecord =
            serde_json::from_str(r#"{"risk_score": 0.42, "risk_level": "MEDIUM"}"#).unwrap();
        assert_eq!(rec.risk_level, RiskLevel::Medium);
        assert_eq!(rec.risk_score, 0.42);
        assert!(rec.recommendations.is_empty());
        assert_eq!(rec.timestamp, "");
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let json = serde_json::to_value(PredictionRequest::default()).unwrap();
        assert_eq!(json["lon"], 77.20);
        assert_eq!(json["last_threat_count"], 2);
        assert!(json.get("wind_speed").is_some());
    }
}
