// 📋 SOP Reference - standard operating procedures browser
// Nested static catalogue (category → procedure → steps) plus free-text
// search across titles and steps.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SopProcedure {
    pub id: &'static str,
    pub title: &'static str,
    pub version: &'static str,
    pub last_updated: &'static str,
    pub steps: &'static [&'static str],
    pub warnings: &'static [&'static str],
    pub materials: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SopCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Total procedures in the category (catalogue holds a sample)
    pub count: u32,
    pub priority: Priority,
    pub procedures: Vec<SopProcedure>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SopUpdate {
    pub id: &'static str,
    pub procedure: &'static str,
    pub category: &'static str,
    pub version: &'static str,
    pub date: &'static str,
    pub update_type: &'static str,
}

pub fn sop_categories() -> Vec<SopCategory> {
    vec![
        SopCategory {
            id: "emergency",
            title: "Emergency Procedures",
            description: "Critical care and emergency response protocols",
            count: 12,
            priority: Priority::High,
            procedures: vec![
                SopProcedure {
                    id: "emer-001",
                    title: "Cardiac Arrest Response",
                    version: "2.1",
                    last_updated: "2024-01-15",
                    steps: &[
                        "Call emergency team immediately",
                        "Begin CPR compressions at 100-120 per minute",
                        "Attach AED/defibrillator if available",
                        "Establish IV access",
                        "Administer medications per ACLS protocol",
                    ],
                    warnings: &["Ensure proper PPE", "Check pulse every 2 minutes"],
                    materials: &["AED", "IV kit", "Emergency medications", "Oxygen"],
                },
                SopProcedure {
                    id: "emer-002",
                    title: "Severe Bleeding Control",
                    version: "1.8",
                    last_updated: "2024-01-10",
                    steps: &[
                        "Apply direct pressure to wound",
                        "Elevate injured area if possible",
                        "Apply pressure bandage",
                        "Monitor vital signs",
                        "Prepare for potential transfusion",
                    ],
                    warnings: &["Universal precautions required"],
                    materials: &["Gauze pads", "Pressure bandages", "Gloves"],
                },
            ],
        },
        SopCategory {
            id: "surgical",
            title: "Surgical Protocols",
            description: "Pre, intra, and post-operative procedures",
            count: 25,
            priority: Priority::Medium,
            procedures: vec![SopProcedure {
                id: "surg-001",
                title: "Pre-operative Preparation",
                version: "3.2",
                last_updated: "2024-01-20",
                steps: &[
                    "Verify patient identity and surgical site",
                    "Confirm consent forms signed",
                    "Review medical history and allergies",
                    "Ensure NPO status maintained",
                    "Complete surgical site marking",
                    "Perform safety checklist",
                ],
                warnings: &["Verify correct patient", "Confirm surgical site"],
                materials: &["Surgical marker", "Consent forms", "Patient chart"],
            }],
        },
        SopCategory {
            id: "infection",
            title: "Infection Control",
            description: "Prevention and management of healthcare-associated infections",
            count: 18,
            priority: Priority::High,
            procedures: vec![],
        },
        SopCategory {
            id: "medication",
            title: "Medication Administration",
            description: "Safe medication handling and administration protocols",
            count: 22,
            priority: Priority::Medium,
            procedures: vec![],
        },
    ]
}

pub fn recent_updates() -> Vec<SopUpdate> {
    vec![
        SopUpdate {
            id: "update-001",
            procedure: "Hand Hygiene Protocol",
            category: "Infection Control",
            version: "4.1",
            date: "2024-01-25",
            update_type: "Major Update",
        },
        SopUpdate {
            id: "update-002",
            procedure: "IV Medication Safety",
            category: "Medication Administration",
            version: "2.8",
            date: "2024-01-23",
            update_type: "Minor Update",
        },
        SopUpdate {
            id: "update-003",
            procedure: "Surgical Timeout Checklist",
            category: "Surgical Protocols",
            version: "1.5",
            date: "2024-01-20",
            update_type: "Revision",
        },
    ]
}

/// Search procedures across all categories; matches procedure titles and
/// individual steps, case-insensitively. An empty query matches everything.
pub fn search_procedures<'a>(
    categories: &'a [SopCategory],
    query: &str,
) -> Vec<(&'a SopCategory, &'a SopProcedure)> {
    let query = query.trim().to_lowercase();

    categories
        .iter()
        .flat_map(|category| category.procedures.iter().map(move |p| (category, p)))
        .filter(|(_, procedure)| {
            query.is_empty()
                || procedure.title.to_lowercase().contains(&query)
                || procedure
                    .steps
                    .iter()
                    .any(|step| step.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        let categories = sop_categories();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].procedures.len(), 2);
        assert_eq!(recent_updates().len(), 3);
    }

    #[test]
    fn test_search_by_title() {
        let categories = sop_categories();
        let hits = search_procedures(&categories, "bleeding");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.id, "emer-002");
        assert_eq!(hits[0].0.id, "emergency");
    }

    #[test]
    fn test_search_reaches_into_steps() {
        let categories = sop_categories();
        // "consent" appears only in a pre-op step
        let hits = search_procedures(&categories, "consent");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.id, "surg-001");
    }

    #[test]
    fn test_empty_query_lists_all_procedures() {
        let categories = sop_categories();
        assert_eq!(search_procedures(&categories, "").len(), 3);
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::High.label(), "High Priority");
        assert_eq!(Priority::Low.label(), "Low Priority");
    }
}
