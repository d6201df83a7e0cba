// Dashboard domain model
use super::chart_spec::ChartSpec;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Mount point advertised to the page before any chart data arrives
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MountPoint {
    pub mount_id: String,
    pub endpoint: String,
    pub title: String,
}

/// One line of the progressive dashboard stream
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DashboardEvent {
    Skeleton {
        company_id: String,
        started_at: DateTime<Utc>,
        mounts: Vec<MountPoint>,
    },
    Chart {
        spec: ChartSpec,
    },
    Alert {
        message: String,
    },
}

/// Every chart that rendered for one company, after all loads finished
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub company_id: String,
    pub charts: Vec<ChartSpec>,
    pub alerts: Vec<String>,
}

impl Dashboard {
    pub fn new(company_id: String, charts: Vec<ChartSpec>, alerts: Vec<String>) -> Self {
        Self {
            company_id,
            charts,
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tagging() {
        let event = DashboardEvent::Alert {
            message: "down".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "alert");
        assert_eq!(json["message"], "down");
    }

    #[test]
    fn test_skeleton_fields_match_snapshot_casing() {
        let event = DashboardEvent::Skeleton {
            company_id: "00126380".to_string(),
            started_at: Utc::now(),
            mounts: vec![MountPoint {
                mount_id: "revenueChart".to_string(),
                endpoint: "quarterly-data".to_string(),
                title: "분기별 주요 손익".to_string(),
            }],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "skeleton");
        assert_eq!(json["companyId"], "00126380");
        assert!(json.get("startedAt").is_some());
        assert!(json.get("company_id").is_none());
        assert_eq!(json["mounts"][0]["mountId"], "revenueChart");

        let snapshot = serde_json::to_value(Dashboard::new("00126380".to_string(), vec![], vec![])).unwrap();
        assert_eq!(snapshot["companyId"], json["companyId"]);
    }
}
