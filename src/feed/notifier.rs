// Live feed notifier — polling-based change detection over the store.
//
// Each subscriber gets its own cursor and its own poll loop:
// POLL (diff the store against the cursor) -> EMIT (one event per new post,
// then per new comment) -> SLEEP -> POLL. The first poll emits the entire
// existing backlog, so a late subscriber sees every post from id 1 up.
//
// There is no missed-event guarantee tighter than "observed by the next
// poll"; everything that arrived during one sleep interval comes out in the
// next poll, in order. Each subscriber rescans the whole store every
// interval — fine at demo scale, not a design for many subscribers.
//
// Cancellation is by drop: when the subscriber's connection closes, the
// transport drops the stream, which cancels a pending sleep immediately
// rather than leaking the loop.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};
use serde::Serialize;

use super::store::{Comment, FeedStore, Post};

/// How far into the store one subscriber has already looked.
/// One instance per subscription; discarded on disconnect.
#[derive(Debug, Default, Clone)]
pub struct FeedCursor {
    /// Number of posts already emitted.
    pub seen_posts: usize,
    /// Per post id, number of comments already emitted.
    pub seen_comments: HashMap<u64, usize>,
}

/// One discrete live-feed event, serialized as `{"type": "post", ...}` /
/// `{"type": "comment", ...}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeedEvent {
    Post { post: Post },
    Comment { post_id: u64, comment: Comment },
}

/// Build the per-subscriber event stream: poll the store, flush any new
/// events, sleep for `interval`, repeat. The stream only ends when the
/// subscriber drops it.
pub fn feed_stream(store: Arc<FeedStore>, interval: Duration) -> impl Stream<Item = FeedEvent> {
    stream::unfold(
        (store, FeedCursor::default()),
        move |(store, mut cursor)| async move {
            loop {
                let batch = store.collect_new(&mut cursor).await;
                if !batch.is_empty() {
                    return Some((stream::iter(batch), (store, cursor)));
                }
                tokio::time::sleep(interval).await;
            }
        },
    )
    .flatten()
}
