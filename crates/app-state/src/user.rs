//! Signed-in user context

use app_core::profile::{ProfileUpdate, UserProfile};
use parking_lot::RwLock;

/// Holds the current user, if any
///
/// Starts with the demo profile; there is no backend to sign in against.
#[derive(Debug)]
pub struct UserProvider {
    user: RwLock<Option<UserProfile>>,
}

impl Default for UserProvider {
    fn default() -> Self {
        Self::new(Some(UserProfile::default()))
    }
}

impl UserProvider {
    /// Provider holding `user`
    pub fn new(user: Option<UserProfile>) -> Self {
        Self {
            user: RwLock::new(user),
        }
    }

    /// Current user
    pub fn user(&self) -> Option<UserProfile> {
        self.user.read().clone()
    }

    /// Replace the user
    pub fn set_user(&self, user: Option<UserProfile>) {
        *self.user.write() = user;
    }

    /// Apply a partial update; no-op without a user
    pub fn update_user(&self, update: ProfileUpdate) -> bool {
        match self.user.write().as_mut() {
            Some(user) => {
                user.apply(update);
                true
            }
            None => false,
        }
    }
}
