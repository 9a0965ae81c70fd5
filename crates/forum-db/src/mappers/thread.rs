//! Thread entity <-> model mapper

use forum_core::entities::Thread;
use forum_core::error::DomainError;
use forum_core::value_objects::ChannelName;

use crate::models::ThreadModel;

/// Convert ThreadModel to Thread entity
pub fn thread_from_model(model: ThreadModel) -> Result<Thread, DomainError> {
    let channel = ChannelName::parse(&model.channel_name)
        .map_err(|e| DomainError::InvalidChannelName(e.to_string()))?;

    Ok(Thread {
        channel,
        thread_id: model.thread_id,
        name: model.name,
        description: model.description,
        owner: model.owner,
        pinned: model.pinned,
        created_at: model.created_at,
        recent_at: model.recent_at,
    })
}
