// The social-feed subsystem: the in-memory post/comment store and the
// live-feed notifier that turns store growth into a stream of events.

pub mod notifier;
pub mod store;

pub use notifier::{feed_stream, FeedCursor, FeedEvent};
pub use store::{Comment, FeedStore, Post, StoreError};
