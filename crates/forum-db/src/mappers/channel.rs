//! Channel entity <-> model mapper

use forum_core::entities::Channel;
use forum_core::error::DomainError;
use forum_core::value_objects::ChannelName;

use crate::models::ChannelModel;

/// Convert ChannelModel to Channel entity
pub fn channel_from_model(model: ChannelModel) -> Result<Channel, DomainError> {
    let name = ChannelName::parse(&model.channel_name)
        .map_err(|e| DomainError::InvalidChannelName(e.to_string()))?;

    Ok(Channel {
        name,
        description: model.description,
        owner: model.owner,
        moderators: model.moderators.0,
        banned: model.banned.0,
        created_at: model.created_at,
        recent_at: model.recent_at,
    })
}
