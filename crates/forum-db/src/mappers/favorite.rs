//! Favorite entity <-> model mapper

use forum_core::entities::Favorite;
use forum_core::error::DomainError;
use forum_core::value_objects::{ChannelName, ThreadKey};

use crate::models::FavoriteModel;

/// Convert FavoriteModel to Favorite entity
pub fn favorite_from_model(model: FavoriteModel) -> Result<Favorite, DomainError> {
    let channel = ChannelName::parse(&model.channel_name)
        .map_err(|e| DomainError::InvalidChannelName(e.to_string()))?;

    Ok(Favorite {
        username: model.username,
        thread: ThreadKey::new(channel, model.thread_id),
        created_at: model.created_at,
    })
}
