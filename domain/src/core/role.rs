//! User role value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Role of the person talking to the assistant (Value Object)
///
/// The role shapes the tone of drafts and conversational answers: advocates
/// get court-ready material, students get annotated material, members of the
/// public get simplified templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Advocate,
    Student,
    #[default]
    Public,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Advocate => "Advocate",
            UserRole::Student => "Student",
            UserRole::Public => "Public",
        }
    }

    pub fn all() -> [UserRole; 3] {
        [UserRole::Advocate, UserRole::Student, UserRole::Public]
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advocate" => Ok(UserRole::Advocate),
            "student" => Ok(UserRole::Student),
            "public" => Ok(UserRole::Public),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}
