/**
 * Profile Documents
 *
 * One profile per user, holding ordered experience and education lists.
 * New entries are prepended, so both lists read newest first.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::store::Document;

/// Social links; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Work history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    /// Absent while `current` is set
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Schooling entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    /// Absent while `current` is set
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// A user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    /// Owner; unique across profiles
    pub user: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    #[serde(default)]
    pub social: Social,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl Document for Profile {
    const COLLECTION: &'static str = "profiles";
    const UNIQUE_FIELDS: &'static [&'static str] = &["user"];

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Profile {
    /// Empty profile owned by `user`
    pub fn new(user: Uuid, status: String, skills: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            company: None,
            website: None,
            location: None,
            status,
            skills,
            bio: None,
            githubusername: None,
            social: Social::default(),
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    /// Remove the experience entry with `id`; false if there is none
    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        match self.experience.iter().position(|e| e.id == id) {
            Some(index) => {
                self.experience.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    /// Remove the education entry with `id`; false if there is none
    pub fn remove_education(&mut self, id: Uuid) -> bool {
        match self.education.iter().position(|e| e.id == id) {
            Some(index) => {
                self.education.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Split a comma-separated skills string, dropping empty items
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
