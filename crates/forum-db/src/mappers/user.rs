//! User entity <-> model mapper

use forum_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            username: model.username,
            email: model.email,
            display_name: model.display_name,
            is_active: model.is_active,
            is_staff: model.is_staff,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
