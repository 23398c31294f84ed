//! Feed domain
//!
//! The only stateful piece of the app: an ordered, newest-first list of
//! posts that grows when the logged-in user publishes something.
//!
//! - attachment: Tagged image references (device file, remote URL, bundled asset)
//! - post: Post and author types
//! - seed: Fixed sample content loaded at startup
//! - store: FeedStore container with id assignment and change notifications

pub mod attachment;
pub mod post;
pub mod seed;
pub mod store;

pub use attachment::AttachmentRef;
pub use post::{Author, Post, PostId};
pub use store::{FeedError, FeedEvent, FeedStore};
