/**
 * Post Documents
 *
 * A post carries its likes and comments inline. `name` and `avatar` on a
 * post or comment are copies of the author's values at creation time and
 * are not refreshed when the account changes.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::store::Document;

/// One like; at most one per user on a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: &User, text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text: text.trim().to_string(),
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Author
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    /// Newest first
    #[serde(default)]
    pub likes: Vec<Like>,
    /// Newest first
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Document for Post {
    const COLLECTION: &'static str = "posts";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Post {
    pub fn new(author: &User, text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text: text.trim().to_string(),
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn is_liked_by(&self, user: Uuid) -> bool {
        self.likes.iter().any(|like| like.user == user)
    }

    /// Prepend a like from `user`; false if that user already liked
    pub fn add_like(&mut self, user: Uuid) -> bool {
        if self.is_liked_by(user) {
            return false;
        }
        self.likes.insert(0, Like { user });
        true
    }

    /// Remove the like from `user`; false if there is none
    pub fn remove_like(&mut self, user: Uuid) -> bool {
        match self.likes.iter().position(|like| like.user == user) {
            Some(index) => {
                self.likes.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn comment(&self, id: Uuid) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// Remove the comment with `id`, returning it
    pub fn remove_comment(&mut self, id: Uuid) -> Option<Comment> {
        let index = self.comments.iter().position(|c| c.id == id)?;
        Some(self.comments.remove(index))
    }
}
