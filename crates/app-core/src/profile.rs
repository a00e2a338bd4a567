//! Signed-in user profile and the profile editor

use serde::{Deserialize, Serialize};

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Role title (e.g. "Lorry Supplier")
    pub role: String,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            full_name: "Ramesh Kamenani".to_string(),
            email: "ramesh@goodseva.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            role: "Lorry Supplier".to_string(),
            avatar: Some("https://i.pravatar.cc/150?img=12".to_string()),
        }
    }
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New name
    pub full_name: Option<String>,
    /// New email
    pub email: Option<String>,
    /// New phone
    pub phone: Option<String>,
    /// New role title
    pub role: Option<String>,
    /// New avatar
    pub avatar: Option<String>,
}

impl UserProfile {
    /// Apply a partial update
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(v) = update.full_name {
            self.full_name = v;
        }
        if let Some(v) = update.email {
            self.email = v;
        }
        if let Some(v) = update.phone {
            self.phone = v;
        }
        if let Some(v) = update.role {
            self.role = v;
        }
        if update.avatar.is_some() {
            self.avatar = update.avatar;
        }
    }

    /// Up to two initials for the avatar fallback
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Profile screen edit state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEditor {
    editing: bool,
    /// Name field
    pub full_name: String,
    /// Email field
    pub email: String,
    /// Phone field
    pub phone: String,
}

impl ProfileEditor {
    /// Editor seeded from a profile
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            editing: false,
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
        }
    }

    /// Whether fields are editable
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enter edit mode
    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    /// Leave edit mode, returning the update to apply
    pub fn save(&mut self) -> ProfileUpdate {
        self.editing = false;
        ProfileUpdate {
            full_name: Some(self.full_name.clone()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user() {
        let user = UserProfile::default();
        assert_eq!(user.full_name, "Ramesh Kamenani");
        assert_eq!(user.role, "Lorry Supplier");
        assert_eq!(user.initials(), "RK");
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut user = UserProfile::default();
        user.apply(ProfileUpdate { email: Some("r@example.com".to_string()), ..Default::default() });

        assert_eq!(user.email, "r@example.com");
        assert_eq!(user.full_name, "Ramesh Kamenani");
        assert!(user.avatar.is_some());
    }

    #[test]
    fn test_editor_save_leaves_edit_mode() {
        let mut user = UserProfile::default();
        let mut editor = ProfileEditor::from_profile(&user);
        editor.start_editing();
        editor.phone = "+91 90000 11111".to_string();

        user.apply(editor.save());

        assert!(!editor.is_editing());
        assert_eq!(user.phone, "+91 90000 11111");
        assert_eq!(user.role, "Lorry Supplier");
    }
}
