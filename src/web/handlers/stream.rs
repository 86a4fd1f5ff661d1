// GET /facebook/stream — the live feed as server-sent events.
//
// Each feed event becomes one `data: <json>\n\n` frame. The poll loop lives
// in feed::notifier; this handler only adapts it to SSE framing. When the
// client disconnects, axum drops the stream and the poll loop (including a
// pending sleep) is cancelled with it.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{Stream, StreamExt};

use crate::feed::feed_stream;
use crate::web::AppState;

pub async fn feed_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let events = feed_stream(state.store.clone(), state.config.poll_interval).map(|event| {
        // FeedEvent serialization cannot fail; fall back to an empty frame
        // rather than killing the stream if it somehow does.
        let frame = Event::default()
            .json_data(&event)
            .unwrap_or_else(|_| Event::default().data("{}"));
        Ok(frame)
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
