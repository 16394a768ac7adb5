//! Job tracker — per-user CRUD over job application records plus the
//! Kanban board grouping.

pub mod handlers;

use serde::Serialize;

use crate::models::job::{JobRecord, Stage};

/// One board column. Columns always appear in `Stage::ALL` order, empty
/// or not, so the client can render a stable five-column board.
#[derive(Debug, Serialize)]
pub struct StageColumn {
    pub stage: Stage,
    pub jobs: Vec<JobRecord>,
}

/// Groups a user's records into board columns.
pub fn board(jobs: Vec<JobRecord>) -> Vec<StageColumn> {
    let mut columns: Vec<StageColumn> = Stage::ALL
        .iter()
        .map(|&stage| StageColumn {
            stage,
            jobs: Vec::new(),
        })
        .collect();
    for job in jobs {
        if let Some(column) = columns.iter_mut().find(|c| c.stage == job.stage) {
            column.jobs.push(job);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn record(company: &str, stage: Stage) -> JobRecord {
        JobRecord {
            id: Uuid::new_v4(),
            company: company.to_string(),
            title: "Engineer".to_string(),
            location: None,
            applied_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            stage,
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_board_always_has_all_five_columns() {
        let columns = board(vec![]);
        assert_eq!(columns.len(), 5);
        let stages: Vec<Stage> = columns.iter().map(|c| c.stage).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
        assert!(columns.iter().all(|c| c.jobs.is_empty()));
    }

    #[test]
    fn test_board_groups_records_under_their_stage() {
        let columns = board(vec![
            record("Acme", Stage::Applied),
            record("Globex", Stage::Applied),
            record("Initech", Stage::Offer),
        ]);
        let applied = columns.iter().find(|c| c.stage == Stage::Applied).unwrap();
        let offer = columns.iter().find(|c| c.stage == Stage::Offer).unwrap();
        assert_eq!(applied.jobs.len(), 2);
        assert_eq!(offer.jobs.len(), 1);
        assert_eq!(offer.jobs[0].company, "Initech");
    }
}
