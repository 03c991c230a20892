use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    fn parse_str(s: &str) -> Result<Self, StorageError> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" | "MEN" => Ok(Self::Male),
            "F" | "FEMALE" | "WOMEN" => Ok(Self::Female),
            _ => Err(StorageError::InvalidInput(format!(
                "Invalid gender: '{}'. Must be 'Male' or 'Female'",
                s
            ))),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Age bracket a participant races in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Category {
    U18,
    U20,
    Senior,
    Masters,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::U18 => "U18",
            Self::U20 => "U20",
            Self::Senior => "Senior",
            Self::Masters => "Masters",
        }
    }

    pub fn all() -> &'static [Category] {
        &[Self::U18, Self::U20, Self::Senior, Self::Masters]
    }

    fn parse_str(s: &str) -> Result<Self, StorageError> {
        let normalized = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == normalized)
            .ok_or_else(|| {
                StorageError::InvalidInput(format!(
                    "Unknown category: '{}'. Available: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

impl std::str::FromStr for Category {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_accepts_short_forms() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("X".parse::<Gender>().is_err());
    }

    #[test]
    fn test_category_case_insensitive() {
        assert_eq!("senior".parse::<Category>().unwrap(), Category::Senior);
        assert_eq!("u18".parse::<Category>().unwrap(), Category::U18);
        assert!("Juniors".parse::<Category>().is_err());
    }
}
