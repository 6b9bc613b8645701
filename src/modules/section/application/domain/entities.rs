use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::text::{clean, is_blank};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionValidationError {
    #[error("{0}")]
    MissingRequired(&'static str),
}

/// A page section stored as the single document `portfolio/{KEY}`.
///
/// Saving always replaces the whole document, so `normalize` must produce
/// every field the section owns.
pub trait SectionDocument:
    Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static
{
    const KEY: &'static str;

    /// Trim every free-text field.
    fn normalize(self) -> Self;

    fn validate(&self) -> Result<(), SectionValidationError>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl SocialLink {
    fn normalize(self) -> Self {
        Self {
            name: clean(&self.name),
            url: clean(&self.url),
            icon: clean(&self.icon),
        }
    }
}

fn normalize_links(links: Vec<SocialLink>) -> Vec<SocialLink> {
    links.into_iter().map(SocialLink::normalize).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub name: String,
    pub bio: String,
    pub image_url: String,
    pub cv_url: String,
    pub social_links: Vec<SocialLink>,
}

impl SectionDocument for Hero {
    const KEY: &'static str = "hero";

    fn normalize(self) -> Self {
        Self {
            name: clean(&self.name),
            bio: clean(&self.bio),
            image_url: clean(&self.image_url),
            cv_url: clean(&self.cv_url),
            social_links: normalize_links(self.social_links),
        }
    }

    fn validate(&self) -> Result<(), SectionValidationError> {
        if is_blank(&self.name) || is_blank(&self.bio) {
            return Err(SectionValidationError::MissingRequired(
                "Name and bio are required",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutFacts {
    pub location: String,
    pub experience: String,
    pub education: String,
    pub interests: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub title: String,
    pub description: String,
    /// Overrides the hero bio on the public page when set.
    pub hero_bio: String,
    pub image_url: String,
    pub facts: AboutFacts,
}

impl SectionDocument for About {
    const KEY: &'static str = "about";

    fn normalize(self) -> Self {
        Self {
            title: clean(&self.title),
            description: clean(&self.description),
            hero_bio: clean(&self.hero_bio),
            image_url: clean(&self.image_url),
            facts: AboutFacts {
                location: clean(&self.facts.location),
                experience: clean(&self.facts.experience),
                education: clean(&self.facts.education),
                interests: clean(&self.facts.interests),
            },
        }
    }

    fn validate(&self) -> Result<(), SectionValidationError> {
        if is_blank(&self.description) {
            return Err(SectionValidationError::MissingRequired(
                "Description is required",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social_links: Vec<SocialLink>,
}

impl SectionDocument for Contact {
    const KEY: &'static str = "contact";

    fn normalize(self) -> Self {
        Self {
            email: clean(&self.email),
            phone: clean(&self.phone),
            location: clean(&self.location),
            social_links: normalize_links(self.social_links),
        }
    }

    fn validate(&self) -> Result<(), SectionValidationError> {
        if is_blank(&self.email) {
            return Err(SectionValidationError::MissingRequired(
                "Email address is required",
            ));
        }
        Ok(())
    }
}
