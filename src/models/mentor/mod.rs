// Mentor module

use serde::{Deserialize, Serialize};

/// A mentor profile shown on the discovery grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub expertise: Vec<String>,
    pub bio: String,
    pub rating: f32,
    pub total_reviews: u32,
    pub experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<u32>,
}

impl Mentor {
    /// Case-insensitive match against name or any expertise tag,
    /// used by the discovery search box. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self
                .expertise
                .iter()
                .any(|skill| skill.to_lowercase().contains(&query))
    }

    /// Up-to-two-letter initials for the avatar placeholder
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .filter(|c| c.is_alphabetic())
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mentor() -> Mentor {
        Mentor {
            id: "m3".to_string(),
            name: "Emily Chen".to_string(),
            expertise: vec![
                "Computer Science".to_string(),
                "Python".to_string(),
                "Machine Learning".to_string(),
            ],
            bio: "Software engineer at a leading tech company.".to_string(),
            rating: 5.0,
            total_reviews: 156,
            experience: "6 years".to_string(),
            hourly_rate: Some(60),
        }
    }

    #[test]
    fn test_matches_query_by_name() {
        let mentor = sample_mentor();
        assert!(mentor.matches_query("emily"));
        assert!(mentor.matches_query("CHEN"));
        assert!(!mentor.matches_query("rodriguez"));
    }

    #[test]
    fn test_matches_query_by_expertise() {
        let mentor = sample_mentor();
        assert!(mentor.matches_query("python"));
        assert!(mentor.matches_query("machine"));
        assert!(!mentor.matches_query("physics"));
    }

    #[test]
    fn test_empty_query_matches() {
        let mentor = sample_mentor();
        assert!(mentor.matches_query(""));
        assert!(mentor.matches_query("   "));
    }

    #[test]
    fn test_initials() {
        assert_eq!(sample_mentor().initials(), "EC");

        let mut mentor = sample_mentor();
        mentor.name = "Dr. Sarah Mitchell".to_string();
        assert_eq!(mentor.initials(), "DS");
    }
}
