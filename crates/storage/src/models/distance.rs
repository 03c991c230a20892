use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StorageError;

/// Race distance. Each distance carries its own gold/base reference times.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Distance {
    #[serde(rename = "500m")]
    M500,
    #[serde(rename = "1000m")]
    M1000,
    #[serde(rename = "1500m")]
    M1500,
}

impl Distance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M500 => "500m",
            Self::M1000 => "1000m",
            Self::M1500 => "1500m",
        }
    }

    pub fn all() -> &'static [Distance] {
        &[Self::M500, Self::M1000, Self::M1500]
    }

    fn parse_str(s: &str) -> Result<Self, StorageError> {
        match s.trim().to_lowercase().as_str() {
            "500m" | "500" => Ok(Self::M500),
            "1000m" | "1000" => Ok(Self::M1000),
            "1500m" | "1500" => Ok(Self::M1500),
            _ => Err(StorageError::InvalidInput(format!(
                "Unknown distance: '{}'. Available: {}",
                s,
                Self::all()
                    .iter()
                    .map(|d| d.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl TryFrom<&str> for Distance {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for Distance {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_parsing() {
        use std::str::FromStr;

        assert_eq!(Distance::from_str("500m").unwrap(), Distance::M500);
        assert_eq!(Distance::try_from("1000M").unwrap(), Distance::M1000);
        assert_eq!("1500".parse::<Distance>().unwrap(), Distance::M1500);

        assert!(Distance::from_str("400m").is_err());
        assert!(Distance::try_from("").is_err());
    }

    #[test]
    fn test_distance_serde_uses_display_names() {
        let json = serde_json::to_string(&Distance::M1000).unwrap();
        assert_eq!(json, "\"1000m\"");

        let parsed: Distance = serde_json::from_str("\"500m\"").unwrap();
        assert_eq!(parsed, Distance::M500);
    }
}
