use crossterm::event::{Event, EventStream};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type EventResult = Result<Event, std::io::Error>;

/// Forwards terminal events into a channel for as long as it lives.
///
/// There is exactly one reader per running loop; dropping the guard aborts the
/// reader task, which closes the channel.
pub struct InputListener {
    handle: JoinHandle<()>,
}

impl InputListener {
    /// Listens to the real terminal.
    pub fn spawn() -> (Self, mpsc::Receiver<EventResult>) {
        Self::from_stream(EventStream::new())
    }

    pub fn from_stream<S>(mut events: S) -> (Self, mpsc::Receiver<EventResult>)
    where
        S: Stream<Item = EventResult> + Send + Unpin + 'static,
    {
        let (tx, rx) = mpsc::channel(100);
        let handle = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                let failed = event.is_err();
                if tx.send(event).await.is_err() || failed {
                    break;
                }
            }
            tracing::debug!("input listener stopped");
        });
        (Self { handle }, rx)
    }
}

impl Drop for InputListener {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[tokio::test]
    async fn test_forwards_events() {
        let key = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        let (_listener, mut rx) = InputListener::from_stream(futures::stream::iter(vec![Ok(key.clone())]));
        assert_eq!(rx.recv().await.unwrap().unwrap(), key);
    }

    #[tokio::test]
    async fn test_drop_tears_down_reader() {
        let (listener, mut rx) = InputListener::from_stream(futures::stream::pending::<EventResult>());
        drop(listener);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_stops_after_read_error() {
        let events = futures::stream::iter(vec![
            Err(std::io::Error::other("tty gone")),
            Ok(Event::FocusGained),
        ]);
        let (_listener, mut rx) = InputListener::from_stream(events);
        assert!(rx.recv().await.unwrap().is_err());
        assert!(rx.recv().await.is_none());
    }
}
