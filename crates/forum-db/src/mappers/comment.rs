//! Comment entity <-> model mapper

use forum_core::entities::Comment;
use forum_core::error::DomainError;
use forum_core::value_objects::{ChannelName, ThreadKey};

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
pub fn comment_from_model(model: CommentModel) -> Result<Comment, DomainError> {
    let channel = ChannelName::parse(&model.channel_name)
        .map_err(|e| DomainError::InvalidChannelName(e.to_string()))?;

    Ok(Comment {
        thread: ThreadKey::new(channel, model.thread_id),
        comment_id: model.comment_id,
        text: model.text,
        owner: model.owner,
        created_at: model.created_at,
    })
}
