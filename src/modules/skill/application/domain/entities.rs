use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::application::{domain::entities::Document, ports::outgoing::StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl FromStr for SkillLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Self::Beginner),
            "Intermediate" => Ok(Self::Intermediate),
            "Advanced" => Ok(Self::Advanced),
            "Expert" => Ok(Self::Expert),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        };
        f.write_str(label)
    }
}

/// Fields of a `skills/{id}` document. Optional fields are left out when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillData {
    #[serde(default)]
    pub name: String,
    /// Font Awesome class list, e.g. `fab fa-rust`.
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Skill {
    pub fn from_data(id: String, data: SkillData) -> Self {
        Self {
            id,
            name: data.name,
            icon: data.icon,
            level: data.level,
            description: data.description,
        }
    }
}

impl TryFrom<&Document> for Skill {
    type Error = StoreError;

    fn try_from(doc: &Document) -> Result<Self, Self::Error> {
        Ok(Self::from_data(doc.id.clone(), doc.decode()?))
    }
}
