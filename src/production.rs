// 🔬 Production Tracker - operating-room procedure roster
// Static roster plus the status/search filtering the tracker page performs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcedureStatus {
    Scheduled,
    Prep,
    InProgress,
    Completed,
}

impl ProcedureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcedureStatus::Scheduled => "scheduled",
            ProcedureStatus::Prep => "prep",
            ProcedureStatus::InProgress => "in-progress",
            ProcedureStatus::Completed => "completed",
        }
    }

    /// Parse the tracker's status-filter value; "all" and unknown values
    /// deselect the filter.
    pub fn from_filter(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(ProcedureStatus::Scheduled),
            "prep" => Some(ProcedureStatus::Prep),
            "in-progress" => Some(ProcedureStatus::InProgress),
            "completed" => Some(ProcedureStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Procedure {
    pub id: &'static str,
    pub procedure: &'static str,
    pub patient: &'static str,
    pub surgeon: &'static str,
    pub room: &'static str,
    pub start_time: &'static str,
    pub estimated_duration: &'static str,
    pub status: ProcedureStatus,
    /// Completion percentage, 0-100
    pub progress: u8,
}

pub fn procedures() -> Vec<Procedure> {
    vec![
        Procedure {
            id: "PROC001",
            procedure: "Cardiac Surgery",
            patient: "John Doe",
            surgeon: "Dr. Smith",
            room: "OR-3",
            start_time: "08:00",
            estimated_duration: "4h 30m",
            status: ProcedureStatus::InProgress,
            progress: 65,
        },
        Procedure {
            id: "PROC002",
            procedure: "Appendectomy",
            patient: "Jane Wilson",
            surgeon: "Dr. Johnson",
            room: "OR-1",
            start_time: "09:30",
            estimated_duration: "1h 45m",
            status: ProcedureStatus::Completed,
            progress: 100,
        },
        Procedure {
            id: "PROC003",
            procedure: "Hip Replacement",
            patient: "Robert Brown",
            surgeon: "Dr. Davis",
            room: "OR-2",
            start_time: "11:00",
            estimated_duration: "3h 15m",
            status: ProcedureStatus::Scheduled,
            progress: 0,
        },
        Procedure {
            id: "PROC004",
            procedure: "Cataract Surgery",
            patient: "Mary Johnson",
            surgeon: "Dr. Wilson",
            room: "OR-4",
            start_time: "14:00",
            estimated_duration: "45m",
            status: ProcedureStatus::Prep,
            progress: 15,
        },
    ]
}

/// Apply the tracker's status filter and free-text search. The query matches
/// id, procedure, patient and surgeon, case-insensitively.
pub fn filter_procedures<'a>(
    procedures: &'a [Procedure],
    status: Option<ProcedureStatus>,
    query: &str,
) -> Vec<&'a Procedure> {
    let query = query.trim().to_lowercase();

    procedures
        .iter()
        .filter(|p| status.map_or(true, |s| p.status == s))
        .filter(|p| {
            query.is_empty()
                || p.id.to_lowercase().contains(&query)
                || p.procedure.to_lowercase().contains(&query)
                || p.patient.to_lowercase().contains(&query)
                || p.surgeon.to_lowercase().contains(&query)
        })
        .collect()
}

/// Per-status roster counts for the tracker's summary row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub scheduled: usize,
    pub prep: usize,
    pub in_progress: usize,
    pub completed: usize,
}

pub fn status_counts(procedures: &[Procedure]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for p in procedures {
        match p.status {
            ProcedureStatus::Scheduled => counts.scheduled += 1,
            ProcedureStatus::Prep => counts.prep += 1,
            ProcedureStatus::InProgress => counts.in_progress += 1,
            ProcedureStatus::Completed => counts.completed += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter() {
        let roster = procedures();
        let completed = filter_procedures(&roster, Some(ProcedureStatus::Completed), "");
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "PROC002");
    }

    #[test]
    fn test_search_matches_surgeon_case_insensitive() {
        let roster = procedures();
        let hits = filter_procedures(&roster, None, "dr. wilson");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "PROC004");
    }

    #[test]
    fn test_search_combined_with_status() {
        let roster = procedures();
        // "surgery" matches PROC001 and PROC004; only PROC004 is in prep
        let hits = filter_procedures(&roster, Some(ProcedureStatus::Prep), "surgery");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "PROC004");
    }

    #[test]
    fn test_empty_query_returns_all() {
        let roster = procedures();
        assert_eq!(filter_procedures(&roster, None, "  ").len(), roster.len());
    }

    #[test]
    fn test_status_counts() {
        let counts = status_counts(&procedures());
        assert_eq!(
            counts,
            StatusCounts {
                scheduled: 1,
                prep: 1,
                in_progress: 1,
                completed: 1,
            }
        );
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!(ProcedureStatus::from_filter("in-progress"), Some(ProcedureStatus::InProgress));
        assert_eq!(ProcedureStatus::from_filter("all"), None);
        assert_eq!(ProcedureStatus::from_filter(""), None);
    }
}
