//! Output events and sinks.
//!
//! The renderer pushes text into a [`RenderSink`]. Chunks arrive in document
//! order; concatenating them yields the Markdown document.

use tokio::sync::mpsc;

/// Notification sent to render subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    /// One incremental piece of output.
    Write(String),
    /// The document is complete. Sent once, after the last write.
    End,
}

/// Receiver of rendered output.
pub trait RenderSink {
    /// Accept the next chunk of output.
    fn write(&mut self, chunk: String);

    /// Called once after the last chunk of a successful render.
    fn end(&mut self) {}
}

/// Accumulates the whole document.
impl RenderSink for String {
    fn write(&mut self, chunk: String) {
        self.push_str(&chunk);
    }
}

/// Records every chunk separately.
impl RenderSink for Vec<String> {
    fn write(&mut self, chunk: String) {
        self.push(chunk);
    }
}

/// Forwards output as [`RenderEvent`]s over a channel.
///
/// A dropped receiver is not an error: events are discarded.
pub(crate) struct ChannelSink {
    tx: mpsc::UnboundedSender<RenderEvent>,
}

impl ChannelSink {
    pub(crate) fn new(tx: mpsc::UnboundedSender<RenderEvent>) -> Self {
        Self { tx }
    }
}

impl RenderSink for ChannelSink {
    fn write(&mut self, chunk: String) {
        let _ = self.tx.send(RenderEvent::Write(chunk));
    }

    fn end(&mut self) {
        let _ = self.tx.send(RenderEvent::End);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_concatenates() {
        let mut sink = String::new();
        sink.write("# Btn ".to_owned());
        sink.write("\n".to_owned());
        sink.end();

        assert_eq!(sink, "# Btn \n");
    }

    #[test]
    fn test_vec_sink_keeps_chunks() {
        let mut sink = Vec::new();
        sink.write("a ".to_owned());
        sink.write("\n".to_owned());

        assert_eq!(sink, vec!["a ".to_owned(), "\n".to_owned()]);
    }

    #[test]
    fn test_channel_sink_sends_events() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut sink = ChannelSink::new(tx);

        sink.write("chunk ".to_owned());
        sink.end();

        assert_eq!(rx.try_recv().unwrap(), RenderEvent::Write("chunk ".to_owned()));
        assert_eq!(rx.try_recv().unwrap(), RenderEvent::End);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_sink_ignores_dropped_receiver() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut sink = ChannelSink::new(tx);
        drop(rx);

        sink.write("lost ".to_owned());
        sink.end(); // Should not panic
    }
}
