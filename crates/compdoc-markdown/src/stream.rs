//! Deferred, event-based rendering.
//!
//! [`render`] returns immediately with a [`RenderStream`]. The document is
//! produced on a spawned tokio task that starts only after the caller holds
//! the stream, so no event can be missed.

use compdoc_config::RenderOptions;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::component::Component;
use crate::error::RenderError;
use crate::renderer::emit;
use crate::sink::{ChannelSink, RenderEvent, RenderSink};

/// Start rendering `component` in the background.
///
/// Options are resolved before this returns; later changes to `options` have
/// no effect on the running render.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
#[must_use]
pub fn render(component: Component, options: &RenderOptions) -> RenderStream {
    let resolved = options.resolve();
    let (tx, rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(async move {
        tokio::task::yield_now().await;

        let mut sink = ChannelSink::new(tx);
        let result = emit(&component, &resolved, &mut sink);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "Render aborted");
        }
        result
    });

    RenderStream { rx, task }
}

/// Handle to a running render.
///
/// Yields [`RenderEvent::Write`] chunks in document order followed by one
/// [`RenderEvent::End`]. A failed render closes the stream without `End`;
/// the failure is reported by [`join`](Self::join).
pub struct RenderStream {
    rx: mpsc::UnboundedReceiver<RenderEvent>,
    task: JoinHandle<Result<(), RenderError>>,
}

impl RenderStream {
    /// Wait for the next event.
    ///
    /// Returns `None` once the render task has finished and every event was
    /// received.
    pub async fn next_event(&mut self) -> Option<RenderEvent> {
        self.rx.recv().await
    }

    /// Take the next event if one is already available.
    pub fn try_next_event(&mut self) -> Option<RenderEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the render task and return its result.
    ///
    /// Events not yet received are discarded.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::UnknownNode` for an invalid print order and
    /// `RenderError::Task` if the task panicked.
    pub async fn join(self) -> Result<(), RenderError> {
        self.task.await?
    }

    /// Forward every event into `sink`, then return the render result.
    ///
    /// # Errors
    ///
    /// Same as [`join`](Self::join).
    pub async fn pipe_to(mut self, sink: &mut dyn RenderSink) -> Result<(), RenderError> {
        while let Some(event) = self.rx.recv().await {
            match event {
                RenderEvent::Write(chunk) => sink.write(chunk),
                RenderEvent::End => sink.end(),
            }
        }
        self.join().await
    }

    /// Collect the whole document.
    ///
    /// # Errors
    ///
    /// Same as [`join`](Self::join).
    pub async fn finish(self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.pipe_to(&mut out).await?;
        Ok(out)
    }
}
