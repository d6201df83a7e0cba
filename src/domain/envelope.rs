// Backend response envelope
use super::metric_series::MetricSeries;
use serde::Deserialize;

/// `{"status": "success", "data": {...}}` or `{"status": "error", "message": "..."}`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiEnvelope {
    Success { data: MetricSeries },
    Error {
        #[serde(default)]
        message: String,
    },
}

impl ApiEnvelope {
    pub fn into_result(self) -> Result<MetricSeries, String> {
        match self {
            ApiEnvelope::Success { data } => Ok(data),
            ApiEnvelope::Error { message } => Err(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = r#"{"status": "success", "data": {"labels": ["2024.1Q"], "icr_ratio": [12.5]}}"#;
        let envelope: ApiEnvelope = serde_json::from_str(json).unwrap();
        let data = envelope.into_result().unwrap();
        assert_eq!(data.series("icr_ratio"), Some(&[Some(12.5)][..]));
    }

    #[test]
    fn test_error_envelope() {
        let json = r#"{"status": "error", "message": "데이터 가공 실패"}"#;
        let envelope: ApiEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_result(), Err("데이터 가공 실패".to_string()));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"status": "pending"}"#;
        assert!(serde_json::from_str::<ApiEnvelope>(json).is_err());
    }
}
