// In-memory post/comment store.
//
// Append-only: posts are never deleted or reordered, comments are never
// deleted, and the only mutations are appending a comment and bumping the
// like/share counters. All mutation is serialized through one RwLock so
// concurrent request handlers can't lose updates.
//
// Classifier calls are slow (model inference). Callers run the decision
// engine BEFORE calling in here and pass the finished verdict, so the lock
// is never held across inference.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::moderation::ModerationResult;

use super::notifier::{FeedCursor, FeedEvent};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no post with id {0}")]
    PostNotFound(u64),
}

/// A comment on a post. Owned by its parent post; never mutated after
/// creation.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub moderation: ModerationResult,
}

/// A post in the feed. Mutated only by appending a comment or incrementing
/// a counter.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// 1-based sequential id, assigned at append time. Strictly increasing,
    /// never reused.
    pub id: u64,
    pub author: String,
    pub text: String,
    /// Stored filename of an uploaded image, if any.
    pub attached_media: Option<String>,
    pub likes: u64,
    pub shares: u64,
    pub comments: Vec<Comment>,
    pub moderation: ModerationResult,
    pub created_at: DateTime<Utc>,
}

/// The shared in-memory store. Cheap to construct, shared via Arc.
#[derive(Default)]
pub struct FeedStore {
    posts: RwLock<Vec<Post>>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new post with its (already computed) moderation verdict.
    /// Returns a clone of the stored record, id assigned.
    pub async fn append_post(
        &self,
        author: &str,
        text: &str,
        attached_media: Option<String>,
        moderation: ModerationResult,
    ) -> Post {
        let mut posts = self.posts.write().await;
        let post = Post {
            id: posts.len() as u64 + 1,
            author: author.to_string(),
            text: text.to_string(),
            attached_media,
            likes: 0,
            shares: 0,
            comments: Vec::new(),
            moderation,
            created_at: Utc::now(),
        };
        posts.push(post.clone());
        info!(post_id = post.id, flagged = post.moderation.is_flagged(), "Post appended");
        post
    }

    /// Append a comment to the post with the given id. Unknown ids are an
    /// error, not a silent no-op — the store stays unchanged.
    pub async fn append_comment(
        &self,
        post_id: u64,
        author: &str,
        text: &str,
        moderation: ModerationResult,
    ) -> Result<Comment, StoreError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(StoreError::PostNotFound(post_id))?;
        let comment = Comment {
            author: author.to_string(),
            text: text.to_string(),
            moderation,
        };
        post.comments.push(comment.clone());
        info!(post_id, flagged = comment.moderation.is_flagged(), "Comment appended");
        Ok(comment)
    }

    /// Increment the like counter. Returns the new count.
    pub async fn like(&self, post_id: u64) -> Result<u64, StoreError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(StoreError::PostNotFound(post_id))?;
        post.likes += 1;
        Ok(post.likes)
    }

    /// Increment the share counter. Returns the new count.
    pub async fn share(&self, post_id: u64) -> Result<u64, StoreError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(StoreError::PostNotFound(post_id))?;
        post.shares += 1;
        Ok(post.shares)
    }

    /// Snapshot of all posts, in append order.
    pub async fn posts(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    pub async fn post_count(&self) -> usize {
        self.posts.read().await.len()
    }

    /// One poll of the live feed: everything appended since the cursor last
    /// looked, as discrete events. New posts first (ascending id), then new
    /// comments in post-then-insertion order. A comment landing on a post
    /// discovered in the same poll shows up both embedded in the post event
    /// and as its own comment event, matching the feed's contract.
    pub async fn collect_new(&self, cursor: &mut FeedCursor) -> Vec<FeedEvent> {
        let posts = self.posts.read().await;
        let mut events = Vec::new();

        for post in posts.iter().skip(cursor.seen_posts) {
            events.push(FeedEvent::Post { post: post.clone() });
            cursor.seen_comments.insert(post.id, 0);
        }
        cursor.seen_posts = posts.len();

        for post in posts.iter() {
            let seen = cursor.seen_comments.entry(post.id).or_insert(0);
            if post.comments.len() > *seen {
                for comment in &post.comments[*seen..] {
                    events.push(FeedEvent::Comment {
                        post_id: post.id,
                        comment: comment.clone(),
                    });
                }
                *seen = post.comments.len();
            }
        }

        events
    }
}
