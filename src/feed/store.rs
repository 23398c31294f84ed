//! Feed store
//!
//! Owns the newest-first list of posts. The only mutation is publishing a
//! new post, which lands at the head. Interested parties subscribe to a
//! channel and drain it from the event loop.

use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::attachment::AttachmentRef;
use super::post::{Author, Post, PostId};
use super::seed;

/// Display string stamped on freshly created posts
pub const NOW_LABEL: &str = "now";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("post body is empty")]
    BlankBody,
    #[error("no post ids left after {0}")]
    IdsExhausted(PostId),
}

/// Change notification sent to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    PostCreated { id: PostId },
}

#[derive(Debug)]
pub struct FeedStore {
    /// Logged-in user; author of every post created here
    author: Author,
    /// Head is the most recently created post
    posts: Vec<Post>,
    subscribers: Vec<UnboundedSender<FeedEvent>>,
}

impl FeedStore {
    /// Store seeded with the fixed sample timeline
    pub fn initialize() -> Self {
        Self::with_posts(seed::default_author(), seed::sample_posts())
    }

    pub fn empty(author: Author) -> Self {
        Self::with_posts(author, Vec::new())
    }

    /// Store holding `posts` in the given (display) order
    pub fn with_posts(author: Author, posts: Vec<Post>) -> Self {
        Self {
            author,
            posts,
            subscribers: Vec::new(),
        }
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Current posts, newest first
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn posts_by<'a>(&'a self, handle: &'a str) -> impl Iterator<Item = &'a Post> + 'a {
        self.posts.iter().filter(move |post| post.is_by(handle))
    }

    /// Id the next created post will receive: one past the highest id, or 1
    pub fn next_id(&self) -> Result<PostId, FeedError> {
        match self.posts.iter().map(|post| post.id).max() {
            Some(max) => max.next().ok_or(FeedError::IdsExhausted(max)),
            None => Ok(PostId(1)),
        }
    }

    /// Publish a post as the logged-in user and put it at the head.
    ///
    /// A blank body is refused and leaves the store untouched, as does a
    /// store whose highest id is already `u32::MAX`.
    pub fn create_post(
        &mut self,
        body: &str,
        attachment: Option<AttachmentRef>,
    ) -> Result<&Post, FeedError> {
        if body.trim().is_empty() {
            return Err(FeedError::BlankBody);
        }

        let post = Post {
            id: self.next_id()?,
            author: self.author.clone(),
            body: body.to_string(),
            posted_at: NOW_LABEL.to_string(),
            reply_count: 0,
            repost_count: 0,
            like_count: 0,
            attachment,
        };
        let id = post.id;
        self.posts.insert(0, post);
        self.notify(FeedEvent::PostCreated { id });

        Ok(&self.posts[0])
    }

    /// Register for change notifications
    pub fn subscribe(&mut self) -> UnboundedReceiver<FeedEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, event: FeedEvent) {
        // Receivers that were dropped are pruned here
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32) -> Post {
        Post {
            id: PostId(id),
            author: Author::new("Someone", "someone"),
            body: format!("post {}", id),
            posted_at: "1h".to_string(),
            reply_count: 1,
            repost_count: 2,
            like_count: 3,
            attachment: None,
        }
    }

    fn store_with(ids: &[u32]) -> FeedStore {
        FeedStore::with_posts(
            Author::new("Tevin Muchiri", "tevin_muchiri"),
            ids.iter().copied().map(post).collect(),
        )
    }

    #[test]
    fn test_next_id_empty_store() {
        let store = store_with(&[]);
        assert_eq!(store.next_id(), Ok(PostId(1)));
    }

    #[test]
    fn test_next_id_uses_max_not_head() {
        // Order on screen does not matter, only the largest id
        let store = store_with(&[3, 9, 4]);
        assert_eq!(store.next_id(), Ok(PostId(10)));
    }

    #[test]
    fn test_id_space_exhausted() {
        let mut store = store_with(&[7, u32::MAX]);
        let mut rx = store.subscribe();

        assert_eq!(store.next_id(), Err(FeedError::IdsExhausted(PostId(u32::MAX))));
        assert_eq!(
            store.create_post("one too many", None).unwrap_err(),
            FeedError::IdsExhausted(PostId(u32::MAX))
        );
        assert_eq!(store.len(), 2);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_create_post_on_empty_store() {
        let mut store = store_with(&[]);
        let created = store.create_post("first!", None).unwrap();
        assert_eq!(created.id, PostId(1));
        assert_eq!(created.posted_at, NOW_LABEL);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_post_prepends_and_keeps_order() {
        let mut store = store_with(&[5, 2, 7]);
        store.create_post("hi", None).unwrap();

        let ids: Vec<u32> = store.list().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![8, 5, 2, 7]);
    }

    #[test]
    fn test_create_post_uses_logged_in_author_and_zero_counters() {
        let mut store = store_with(&[1]);
        let created = store.create_post("hello", None).unwrap();
        assert_eq!(created.author.handle, "tevin_muchiri");
        assert_eq!(created.reply_count, 0);
        assert_eq!(created.repost_count, 0);
        assert_eq!(created.like_count, 0);
    }

    #[test]
    fn test_create_post_keeps_attachment() {
        let mut store = store_with(&[]);
        let attachment = AttachmentRef::Bundled("bmw".to_string());
        let created = store.create_post("look", Some(attachment.clone())).unwrap();
        assert_eq!(created.attachment, Some(attachment));
    }

    #[test]
    fn test_blank_body_rejected_without_consuming_id() {
        let mut store = store_with(&[1, 2]);
        assert_eq!(store.create_post("", None).unwrap_err(), FeedError::BlankBody);
        assert_eq!(store.create_post(" \n\t ", None).unwrap_err(), FeedError::BlankBody);
        assert_eq!(store.len(), 2);

        let created = store.create_post("real", None).unwrap();
        assert_eq!(created.id, PostId(3));
    }

    #[test]
    fn test_subscribers_get_notified() {
        let mut store = store_with(&[1]);
        let mut rx = store.subscribe();

        store.create_post("ping", None).unwrap();
        assert_eq!(rx.try_recv().unwrap(), FeedEvent::PostCreated { id: PostId(2) });
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_rejected_post_sends_nothing() {
        let mut store = store_with(&[1]);
        let mut rx = store.subscribe();

        let _ = store.create_post("   ", None);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut store = store_with(&[]);
        let rx = store.subscribe();
        let mut live = store.subscribe();
        drop(rx);

        store.create_post("one", None).unwrap();
        assert_eq!(store.subscribers.len(), 1);
        assert!(live.try_recv().is_ok());
    }

    #[test]
    fn test_posts_by_handle() {
        let mut store = store_with(&[1, 2]);
        store.create_post("mine", None).unwrap();
        assert_eq!(store.posts_by("tevin_muchiri").count(), 1);
        assert_eq!(store.posts_by("someone").count(), 2);
        assert_eq!(store.posts_by("nobody").count(), 0);
    }

    #[test]
    fn test_get_by_id() {
        let store = store_with(&[4, 6]);
        assert_eq!(store.get(PostId(6)).map(|p| p.body.as_str()), Some("post 6"));
        assert!(store.get(PostId(5)).is_none());
    }
}
