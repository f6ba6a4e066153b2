/**
 * Profile Handler Types
 *
 * Request bodies for the profile routes, their validation, and the read
 * view that embeds the owner's name and avatar.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::profile::model::{parse_skills, Education, Experience, Profile, Social};
use crate::shared::validation::Validator;

/// Create or update request
///
/// Empty strings count as "not provided".
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ProfileRequest {
    pub company: String,
    pub website: String,
    pub location: String,
    pub bio: String,
    pub status: String,
    pub githubusername: String,
    /// Comma-separated list
    pub skills: String,
    pub youtube: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
    pub instagram: String,
}

fn provided(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ProfileRequest {
    pub fn validate(&self) -> Result<(), BackendError> {
        let mut v = Validator::new();
        v.require("status", &self.status, "Status is required");
        if parse_skills(&self.skills).is_empty() {
            v.reject("skills", "Skills is required");
        }
        v.finish().map_err(BackendError::from)
    }

    fn social(&self) -> Social {
        Social {
            youtube: provided(&self.youtube),
            twitter: provided(&self.twitter),
            facebook: provided(&self.facebook),
            linkedin: provided(&self.linkedin),
            instagram: provided(&self.instagram),
        }
    }

    /// New profile for `user` built from this request
    pub fn build(&self, user: Uuid) -> Profile {
        let mut profile = Profile::new(user, String::new(), Vec::new());
        self.apply(&mut profile);
        profile
    }

    /// Overwrite the provided fields of an existing profile
    ///
    /// Scalar fields left empty keep their stored value. The social block
    /// is replaced as a whole. Experience and education are untouched.
    pub fn apply(&self, profile: &mut Profile) {
        let scalars = [
            (&mut profile.company, &self.company),
            (&mut profile.website, &self.website),
            (&mut profile.location, &self.location),
            (&mut profile.bio, &self.bio),
            (&mut profile.githubusername, &self.githubusername),
        ];
        for (field, value) in scalars {
            if let Some(value) = provided(value) {
                *field = Some(value);
            }
        }
        if let Some(status) = provided(&self.status) {
            profile.status = status;
        }
        let skills = parse_skills(&self.skills);
        if !skills.is_empty() {
            profile.skills = skills;
        }
        profile.social = self.social();
    }
}

/// Validate an optional end date against the start date
fn date_range(
    v: &mut Validator,
    from: Option<NaiveDate>,
    to_raw: &str,
    current: bool,
) -> Option<NaiveDate> {
    if current || to_raw.trim().is_empty() {
        return None;
    }
    let to = v.date("to", to_raw, "To date must be a valid date")?;
    if let Some(from) = from {
        if to < from {
            v.reject("to", "To date must not be before from date");
        }
    }
    Some(to)
}

/// Add-experience request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct ExperienceRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: String,
    pub to: String,
    pub current: bool,
    pub description: String,
}

impl ExperienceRequest {
    /// Validate and turn into a new entry
    pub fn into_entry(self) -> Result<Experience, BackendError> {
        let mut v = Validator::new();
        v.require("title", &self.title, "Title is required");
        v.require("company", &self.company, "Company is required");
        let from = if v.require("from", &self.from, "From date is required") {
            v.date("from", &self.from, "From date must be a valid date")
        } else {
            None
        };
        let to = date_range(&mut v, from, &self.to, self.current);
        v.finish()?;

        let from = from.ok_or_else(|| BackendError::invalid("from", "From date is required"))?;
        Ok(Experience {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: provided(&self.location),
            from,
            to,
            current: self.current,
            description: provided(&self.description),
        })
    }
}

/// Add-education request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct EducationRequest {
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    pub to: String,
    pub current: bool,
    pub description: String,
}

impl EducationRequest {
    /// Validate and turn into a new entry
    pub fn into_entry(self) -> Result<Education, BackendError> {
        let mut v = Validator::new();
        v.require("school", &self.school, "School is required");
        v.require("degree", &self.degree, "Degree is required");
        v.require("fieldofstudy", &self.fieldofstudy, "Field of study is required");
        let from = if v.require("from", &self.from, "From date is required") {
            v.date("from", &self.from, "From date must be a valid date")
        } else {
            None
        };
        let to = date_range(&mut v, from, &self.to, self.current);
        v.finish()?;

        let from = from.ok_or_else(|| BackendError::invalid("from", "From date is required"))?;
        Ok(Education {
            id: Uuid::new_v4(),
            school: self.school.trim().to_string(),
            degree: self.degree.trim().to_string(),
            fieldofstudy: self.fieldofstudy.trim().to_string(),
            from,
            to,
            current: self.current,
            description: provided(&self.description),
        })
    }
}

/// Owner fields embedded in profile reads
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileOwner {
    pub id: Uuid,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// Profile as returned by the read routes
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user: ProfileOwner,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl ProfileResponse {
    /// Combine a profile with its owner, if the owner still exists
    pub fn new(profile: Profile, owner: Option<&User>) -> Self {
        Self {
            id: profile.id,
            user: ProfileOwner {
                id: profile.user,
                name: owner.map(|u| u.name.clone()),
                avatar: owner.map(|u| u.avatar.clone()),
            },
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            skills: profile.skills,
            bio: profile.bio,
            githubusername: profile.githubusername,
            social: profile.social,
            experience: profile.experience,
            education: profile.education,
            date: profile.date,
        }
    }
}
