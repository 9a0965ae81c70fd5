//! Domain traits (ports)

mod repositories;

pub use repositories::{
    ChannelRepository, CommentRepository, FavoriteRepository, RepoResult, ThreadRepository,
    UserRepository,
};
