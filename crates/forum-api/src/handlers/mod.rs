//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod channels;
pub mod comments;
pub mod favorites;
pub mod health;
pub mod threads;
pub mod users;
