// 🔗 Useful Links - curated healthcare resource directory
// Static categorized links with tag-aware search.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LinkEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub links: Vec<LinkEntry>,
}

pub fn link_categories() -> Vec<LinkCategory> {
    vec![
        LinkCategory {
            id: "medical",
            title: "Medical Resources",
            description: "Clinical guidelines, research, and medical databases",
            links: vec![
                LinkEntry {
                    title: "PubMed",
                    description: "National Library of Medicine database",
                    url: "https://pubmed.ncbi.nlm.nih.gov/",
                    category: "Research",
                    tags: &["research", "articles", "medical"],
                },
                LinkEntry {
                    title: "UpToDate",
                    description: "Evidence-based clinical decision support",
                    url: "https://www.uptodate.com/",
                    category: "Clinical",
                    tags: &["clinical", "guidelines", "evidence"],
                },
                LinkEntry {
                    title: "WHO Guidelines",
                    description: "World Health Organization clinical guidelines",
                    url: "https://www.who.int/publications/guidelines",
                    category: "Guidelines",
                    tags: &["who", "guidelines", "international"],
                },
                LinkEntry {
                    title: "FDA Drug Database",
                    description: "US Food and Drug Administration drug information",
                    url: "https://www.fda.gov/drugs",
                    category: "Pharmaceuticals",
                    tags: &["fda", "drugs", "pharmaceuticals"],
                },
            ],
        },
        LinkCategory {
            id: "healthcare",
            title: "Healthcare Management",
            description: "Healthcare administration and management tools",
            links: vec![
                LinkEntry {
                    title: "CMS.gov",
                    description: "Centers for Medicare & Medicaid Services",
                    url: "https://www.cms.gov/",
                    category: "Regulatory",
                    tags: &["cms", "medicare", "medicaid"],
                },
                LinkEntry {
                    title: "Joint Commission",
                    description: "Healthcare quality and safety standards",
                    url: "https://www.jointcommission.org/",
                    category: "Quality",
                    tags: &["quality", "safety", "accreditation"],
                },
                LinkEntry {
                    title: "HIMSS",
                    description: "Healthcare Information Management Systems",
                    url: "https://www.himss.org/",
                    category: "Technology",
                    tags: &["himss", "technology", "systems"],
                },
                LinkEntry {
                    title: "AHRQ",
                    description: "Agency for Healthcare Research and Quality",
                    url: "https://www.ahrq.gov/",
                    category: "Research",
                    tags: &["ahrq", "research", "quality"],
                },
            ],
        },
        LinkCategory {
            id: "tools",
            title: "Online Tools",
            description: "Calculators, converters, and utility tools",
            links: vec![
                LinkEntry {
                    title: "MDCalc",
                    description: "Medical calculators for clinical use",
                    url: "https://www.mdcalc.com/",
                    category: "Calculator",
                    tags: &["calculator", "clinical", "tools"],
                },
                LinkEntry {
                    title: "Medscape Drug Interaction Checker",
                    description: "Check for drug interactions",
                    url: "https://reference.medscape.com/drug-interactionchecker",
                    category: "Pharmaceuticals",
                    tags: &["drugs", "interactions", "safety"],
                },
                LinkEntry {
                    title: "BMI Calculator",
                    description: "Body Mass Index calculator",
                    url: "https://www.nhlbi.nih.gov/health/educational/lose_wt/BMI/bmicalc.htm",
                    category: "Calculator",
                    tags: &["bmi", "calculator", "health"],
                },
                LinkEntry {
                    title: "Lab Values Reference",
                    description: "Normal laboratory values reference",
                    url: "https://www.labvaluesreference.com/",
                    category: "Reference",
                    tags: &["lab", "values", "reference"],
                },
            ],
        },
        LinkCategory {
            id: "education",
            title: "Education & Training",
            description: "Medical education and continuing education resources",
            links: vec![
                LinkEntry {
                    title: "NEJM Knowledge+",
                    description: "New England Journal of Medicine education",
                    url: "https://knowledgeplus.nejm.org/",
                    category: "Education",
                    tags: &["nejm", "education", "training"],
                },
                LinkEntry {
                    title: "Coursera Healthcare Courses",
                    description: "Online healthcare and medical courses",
                    url: "https://www.coursera.org/browse/health",
                    category: "Education",
                    tags: &["coursera", "courses", "online"],
                },
                LinkEntry {
                    title: "Khan Academy Health & Medicine",
                    description: "Free medical education videos",
                    url: "https://www.khanacademy.org/science/health-and-medicine",
                    category: "Education",
                    tags: &["khan", "videos", "free"],
                },
                LinkEntry {
                    title: "Medline Plus",
                    description: "Patient education and health information",
                    url: "https://medlineplus.gov/",
                    category: "Patient Education",
                    tags: &["patient", "education", "information"],
                },
            ],
        },
    ]
}

/// Flattened search over every link: matches title, description or any tag,
/// case-insensitively. Returns (category, link) pairs in catalogue order.
pub fn search_links<'a>(
    categories: &'a [LinkCategory],
    query: &str,
) -> Vec<(&'a LinkCategory, &'a LinkEntry)> {
    let query = query.trim().to_lowercase();

    categories
        .iter()
        .flat_map(|category| category.links.iter().map(move |link| (category, link)))
        .filter(|(_, link)| {
            query.is_empty()
                || link.title.to_lowercase().contains(&query)
                || link.description.to_lowercase().contains(&query)
                || link.tags.iter().any(|tag| tag.contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_shape() {
        let categories = link_categories();
        assert_eq!(categories.len(), 4);
        assert!(categories.iter().all(|c| c.links.len() == 4));
    }

    #[test]
    fn test_search_by_tag() {
        let categories = link_categories();
        let hits = search_links(&categories, "bmi");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.title, "BMI Calculator");
        assert_eq!(hits[0].0.id, "tools");
    }

    #[test]
    fn test_search_by_description() {
        let categories = link_categories();
        let hits = search_links(&categories, "medicare");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.title, "CMS.gov");
    }

    #[test]
    fn test_empty_query_returns_all_links() {
        let categories = link_categories();
        assert_eq!(search_links(&categories, "").len(), 16);
    }
}
