use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::text::{clean, clean_opt, is_blank};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimelineValidationError {
    #[error("{0}")]
    MissingRequired(&'static str),
}

/// One element of the array held in `portfolio/{DOC_ID}` under `FIELD`.
///
/// Entries have no id of their own; they are addressed by position.
pub trait TimelineEntry: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const DOC_ID: &'static str;
    const FIELD: &'static str;

    fn normalize(self) -> Self;

    fn validate(&self) -> Result<(), TimelineValidationError>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimelineEntry for Experience {
    const DOC_ID: &'static str = "experience";
    const FIELD: &'static str = "experiences";

    fn normalize(self) -> Self {
        Self {
            position: clean(&self.position),
            company: clean(&self.company),
            duration: clean(&self.duration),
            description: clean_opt(self.description),
        }
    }

    fn validate(&self) -> Result<(), TimelineValidationError> {
        if is_blank(&self.position) || is_blank(&self.company) || is_blank(&self.duration) {
            return Err(TimelineValidationError::MissingRequired(
                "Position, company, and duration are required",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimelineEntry for Education {
    const DOC_ID: &'static str = "education";
    const FIELD: &'static str = "education";

    fn normalize(self) -> Self {
        Self {
            degree: clean(&self.degree),
            institution: clean(&self.institution),
            year: clean(&self.year),
            description: clean_opt(self.description),
        }
    }

    fn validate(&self) -> Result<(), TimelineValidationError> {
        if is_blank(&self.degree) || is_blank(&self.institution) || is_blank(&self.year) {
            return Err(TimelineValidationError::MissingRequired(
                "Degree, institution, and year are required",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

impl TimelineEntry for Award {
    const DOC_ID: &'static str = "awards";
    const FIELD: &'static str = "awards";

    fn normalize(self) -> Self {
        Self {
            title: clean(&self.title),
            issuer: clean(&self.issuer),
            date: clean(&self.date),
            description: clean_opt(self.description),
            credential_url: clean_opt(self.credential_url),
        }
    }

    fn validate(&self) -> Result<(), TimelineValidationError> {
        if is_blank(&self.title) || is_blank(&self.issuer) || is_blank(&self.date) {
            return Err(TimelineValidationError::MissingRequired(
                "Title, issuer, and date are required",
            ));
        }
        Ok(())
    }
}

/// An entry together with its current position in the array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineItem<E> {
    pub index: usize,
    #[serde(flatten)]
    pub entry: E,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn experience_requires_all_three_fields() {
        let result = Experience {
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            duration: " ".to_string(),
            description: None,
        }
        .normalize()
        .validate();

        assert_eq!(
            result.unwrap_err().to_string(),
            "Position, company, and duration are required"
        );
    }

    #[test]
    fn empty_description_is_left_out() {
        let award = Award {
            title: "Best Paper".to_string(),
            issuer: "ACM".to_string(),
            date: "2023".to_string(),
            description: Some("  ".to_string()),
            credential_url: Some(" https://example.com/c ".to_string()),
        }
        .normalize();

        let value = serde_json::to_value(&award).unwrap();
        assert!(value.get("description").is_none());
        assert_eq!(value["credentialUrl"], "https://example.com/c");
    }

    #[test]
    fn item_serializes_index_beside_fields() {
        let item = TimelineItem {
            index: 2,
            entry: Education {
                degree: "BSc".to_string(),
                institution: "MIT".to_string(),
                year: "2015".to_string(),
                description: None,
            },
        };

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "index": 2, "degree": "BSc", "institution": "MIT", "year": "2015" })
        );
    }
}
