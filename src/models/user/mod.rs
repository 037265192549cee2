// User module
// Demo identities - no real accounts or security

use serde::{Deserialize, Serialize};

/// Which portal the signed-in demo user sees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Mentor,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Mentor => "Mentor",
        }
    }
}

/// A signed-in demo identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserProfile {
    /// First name for the welcome banner
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Last word of the name, used to greet mentors ("Welcome back, Mitchell!")
    pub fn last_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
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

    #[test]
    fn test_name_parts() {
        let profile = UserProfile {
            id: "s1".to_string(),
            name: "Jessica Parker".to_string(),
            email: "jessica.parker@email.com".to_string(),
        };
        assert_eq!(profile.first_name(), "Jessica");
        assert_eq!(profile.last_name(), "Parker");
        assert_eq!(profile.initials(), "JP");
    }
}
