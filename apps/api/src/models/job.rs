use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pipeline position of a job application. The serialized names are the
/// wire format shared with the board UI and the stored documents — do not
/// rename them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Wishlist,
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl Stage {
    /// Board column order.
    pub const ALL: [Stage; 5] = [
        Stage::Wishlist,
        Stage::Applied,
        Stage::Interview,
        Stage::Offer,
        Stage::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Wishlist => "Wishlist",
            Stage::Applied => "Applied",
            Stage::Interview => "Interview",
            Stage::Offer => "Offer",
            Stage::Rejected => "Rejected",
        }
    }

    /// Parses a wire stage value. Returns `None` for anything outside the
    /// fixed enumeration — callers must reject the request, never coerce.
    pub fn parse(s: &str) -> Option<Stage> {
        Stage::ALL.iter().copied().find(|stage| stage.as_str() == s)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job application record, owned by exactly one user.
///
/// Serialization uses the primary wire names (`title`, `applied_date`,
/// `stage`); the aliases cover the older `role`/`date_applied`/`status`
/// spellings still present in stored documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: Uuid,
    pub company: String,
    #[serde(alias = "role")]
    pub title: String,
    pub location: Option<String>,
    #[serde(alias = "date_applied")]
    pub applied_date: NaiveDate,
    #[serde(alias = "status")]
    pub stage: Stage,
    #[serde(default)]
    pub notes: String,
    /// Set by the server at creation, immutable afterwards.
    pub created_at: DateTime<Utc>,
}

/// Validated input for `RecordStore::create_job`. Handlers parse and
/// validate the wire request before building one of these, so an invalid
/// stage can never reach the store.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub company: String,
    pub title: String,
    pub location: Option<String>,
    pub applied_date: NaiveDate,
    pub stage: Stage,
    pub notes: String,
}

/// Partial update for `RecordStore::update_job`. `None` leaves the field
/// untouched; `created_at` is deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub company: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub applied_date: Option<NaiveDate>,
    pub stage: Option<Stage>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_round_trips_through_wire_names() {
        for stage in Stage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));
            let back: Stage = serde_json::from_str(&json).unwrap();
            assert_eq!(back, stage);
        }
    }

    #[test]
    fn test_stage_parse_rejects_unknown_values() {
        assert_eq!(Stage::parse("Applied"), Some(Stage::Applied));
        assert_eq!(Stage::parse("On Hold"), None);
        assert_eq!(Stage::parse("applied"), None);
        assert_eq!(Stage::parse(""), None);
    }

    #[test]
    fn test_job_record_accepts_legacy_aliases() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "company": "Acme",
            "role": "Backend Engineer",
            "location": "Berlin",
            "date_applied": "2025-06-01",
            "status": "Interview",
            "notes": "phone screen done",
            "created_at": "2025-06-01T12:00:00Z"
        });
        let record: JobRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.title, "Backend Engineer");
        assert_eq!(record.stage, Stage::Interview);
        assert_eq!(
            record.applied_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_job_record_serializes_primary_names() {
        let record = JobRecord {
            id: Uuid::new_v4(),
            company: "Acme".to_string(),
            title: "Backend Engineer".to_string(),
            location: None,
            applied_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            stage: Stage::Wishlist,
            notes: String::new(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("title").is_some());
        assert!(value.get("applied_date").is_some());
        assert_eq!(value["stage"], "Wishlist");
        assert!(value.get("role").is_none());
        assert!(value.get("status").is_none());
    }
}
