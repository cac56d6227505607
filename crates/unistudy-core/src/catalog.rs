//! Static resource catalog: department → category → topic names.
//!
//! The taxonomy is fixed reference data; topic *content* is fetched on
//! demand through [`TopicContentProvider`] and memoized by the catalog
//! service in the application layer.

use async_trait::async_trait;

use crate::department::Department;
use crate::error::{Result, StudyError};

/// A named group of topics within a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub topics: &'static [&'static str],
}

/// The resource categories offered for a department.
pub fn categories(department: Department) -> &'static [Category] {
    match department {
        Department::Engineering => &[
            Category {
                name: "Mathematics",
                topics: &[
                    "Calculus",
                    "Differential Equations",
                    "Linear Algebra",
                    "Statistics",
                ],
            },
            Category {
                name: "Physics",
                topics: &[
                    "Mechanics",
                    "Thermodynamics",
                    "Electromagnetics",
                    "Quantum Physics",
                ],
            },
            Category {
                name: "Design",
                topics: &[
                    "CAD Tutorials",
                    "Design Principles",
                    "Materials Science",
                    "Manufacturing",
                ],
            },
        ],
        Department::ComputerScience => &[
            Category {
                name: "Programming",
                topics: &[
                    "Data Structures",
                    "Algorithms",
                    "OOP Concepts",
                    "Design Patterns",
                ],
            },
            Category {
                name: "Systems",
                topics: &[
                    "Operating Systems",
                    "Networks",
                    "Databases",
                    "Distributed Systems",
                ],
            },
            Category {
                name: "AI/ML",
                topics: &[
                    "Machine Learning",
                    "Deep Learning",
                    "NLP",
                    "Computer Vision",
                ],
            },
        ],
        Department::Medicine => &[
            Category {
                name: "Basic Sciences",
                topics: &["Anatomy", "Physiology", "Biochemistry", "Pathology"],
            },
            Category {
                name: "Clinical",
                topics: &[
                    "Internal Medicine",
                    "Surgery",
                    "Pediatrics",
                    "Pharmacology",
                ],
            },
            Category {
                name: "Research",
                topics: &[
                    "Clinical Trials",
                    "Medical Statistics",
                    "Research Methods",
                    "Ethics",
                ],
            },
        ],
        Department::Business => &[
            Category {
                name: "Core Subjects",
                topics: &["Accounting", "Finance", "Marketing", "Management"],
            },
            Category {
                name: "Analytics",
                topics: &[
                    "Business Intelligence",
                    "Financial Modeling",
                    "Market Research",
                    "Operations Management",
                ],
            },
            Category {
                name: "Strategy",
                topics: &[
                    "Strategic Planning",
                    "Entrepreneurship",
                    "Global Business",
                    "Ethics in Business",
                ],
            },
        ],
        Department::Law => &[
            Category {
                name: "Foundational",
                topics: &[
                    "Constitutional Law",
                    "Criminal Law",
                    "Contract Law",
                    "Tort Law",
                ],
            },
            Category {
                name: "Specialized",
                topics: &[
                    "Corporate Law",
                    "Environmental Law",
                    "International Law",
                    "Family Law",
                ],
            },
            Category {
                name: "Practice",
                topics: &[
                    "Legal Research",
                    "Moot Court",
                    "Client Counseling",
                    "Legal Ethics",
                ],
            },
        ],
        Department::Arts => &[
            Category {
                name: "Literature",
                topics: &[
                    "Literary Theory",
                    "Poetry Analysis",
                    "World Literature",
                    "Creative Writing",
                ],
            },
            Category {
                name: "History",
                topics: &[
                    "Ancient Civilizations",
                    "Modern History",
                    "Art History",
                    "Historiography",
                ],
            },
            Category {
                name: "Philosophy",
                topics: &["Ethics", "Metaphysics", "Epistemology", "Logic"],
            },
        ],
        Department::Science => &[
            Category {
                name: "Chemistry",
                topics: &[
                    "Organic Chemistry",
                    "Inorganic Chemistry",
                    "Physical Chemistry",
                    "Analytical Chemistry",
                ],
            },
            Category {
                name: "Biology",
                topics: &["Cell Biology", "Genetics", "Ecology", "Microbiology"],
            },
            Category {
                name: "Physics",
                topics: &[
                    "Quantum Mechanics",
                    "Relativity",
                    "Astrophysics",
                    "Condensed Matter Physics",
                ],
            },
        ],
        Department::General => &[
            Category {
                name: "Study Skills",
                topics: &[
                    "Time Management",
                    "Note-Taking",
                    "Exam Preparation",
                    "Critical Thinking",
                ],
            },
            Category {
                name: "Research",
                topics: &[
                    "Academic Writing",
                    "Research Methods",
                    "Citation Styles",
                    "Data Analysis",
                ],
            },
            Category {
                name: "Well-being",
                topics: &[
                    "Stress Management",
                    "Mindfulness",
                    "Healthy Habits",
                    "Goal Setting",
                ],
            },
        ],
    }
}

/// A validated `(department, category, topic)` coordinate into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicKey {
    pub department: Department,
    pub category: String,
    pub topic: String,
}

impl TopicKey {
    /// Builds a key, verifying that the category and topic exist in the
    /// static taxonomy for the department.
    pub fn new(department: Department, category: &str, topic: &str) -> Result<Self> {
        let known = categories(department)
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.topics.contains(&topic))
            .unwrap_or(false);

        if !known {
            return Err(StudyError::not_found(
                "catalog topic",
                format!("{}/{}/{}", department, category, topic),
            ));
        }

        Ok(Self {
            department,
            category: category.to_string(),
            topic: topic.to_string(),
        })
    }
}

/// On-demand provider of descriptive topic content.
///
/// The production front end simulates this; a real deployment would fetch
/// from a content API. Either way the catalog service memoizes per key, so
/// a provider is consulted at most once per topic.
#[async_trait]
pub trait TopicContentProvider: Send + Sync {
    async fn fetch(&self, key: &TopicKey) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_department_has_three_categories_of_four() {
        for dept in Department::iter() {
            let cats = categories(dept);
            assert_eq!(cats.len(), 3, "{dept}");
            for cat in cats {
                assert_eq!(cat.topics.len(), 4, "{dept}/{}", cat.name);
            }
        }
    }

    #[test]
    fn test_topic_key_validates_against_taxonomy() {
        assert!(TopicKey::new(Department::ComputerScience, "Systems", "Databases").is_ok());
        assert!(TopicKey::new(Department::ComputerScience, "Systems", "Databases ").is_err());
        assert!(TopicKey::new(Department::Law, "Systems", "Databases").is_err());
    }
}
