use serde::{Deserialize, Serialize};

use super::{Profile, User};

/// The whole persisted document: `{ "users": [...], "profiles": [...] }`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StoreState {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl StoreState {
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn find_user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_profile(&self, user_id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.user_id == user_id)
    }

    /// Replaces the profile for `profile.user_id` wholesale, or appends it
    pub fn upsert_profile(&mut self, profile: Profile) {
        match self.profiles.iter().position(|p| p.user_id == profile.user_id) {
            Some(index) => self.profiles[index] = profile,
            None => self.profiles.push(profile),
        }
    }
}
