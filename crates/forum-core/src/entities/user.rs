//! User entity - represents a forum account

use chrono::{DateTime, Utc};

/// User entity keyed by its unique username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active, non-staff User
    pub fn new(username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            username,
            email,
            display_name: None,
            is_active: true,
            is_staff: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name shown in listings, falling back to the username
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    /// Check if the account can act (deactivated accounts are read-only)
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Check if the account has site-wide staff privileges
    #[inline]
    pub fn is_staff(&self) -> bool {
        self.is_staff
    }

    /// Update the display name
    pub fn set_display_name(&mut self, display_name: Option<String>) {
        self.display_name = display_name;
        self.updated_at = Utc::now();
    }

    /// Deactivate the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivate the account
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults() {
        let user = User::new("alice".to_string(), "alice@example.com".to_string());
        assert!(user.is_active());
        assert!(!user.is_staff());
        assert_eq!(user.shown_name(), "alice");
    }

    #[test]
    fn test_shown_name_prefers_display_name() {
        let mut user = User::new("alice".to_string(), "alice@example.com".to_string());
        user.set_display_name(Some("Alice L.".to_string()));
        assert_eq!(user.shown_name(), "Alice L.");
    }

    #[test]
    fn test_deactivate_and_activate() {
        let mut user = User::new("bob".to_string(), "bob@example.com".to_string());
        user.deactivate();
        assert!(!user.is_active());
        user.activate();
        assert!(user.is_active());
    }
}
