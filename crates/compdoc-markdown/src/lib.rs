//! Streaming Markdown documentation for UI components.
//!
//! Turns a [`Component`] descriptor (name, description, props, methods, slots,
//! events) into a Markdown document.
//!
//! # Architecture
//!
//! - [`format`]: pure Markdown primitives (headings, emphasis, list items)
//! - category writers: one per member category, dispatched through [`Members`]
//! - [`emit`]: the synchronous engine writing into any [`RenderSink`]
//! - [`render`]: the async driver, emitting [`RenderEvent`]s from a spawned task
//!
//! # Example
//!
//! ```
//! use compdoc_markdown::{Component, RenderOptions, render};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let component = Component::from_json(r#"{
//!     "name": "Btn",
//!     "props": [{ "name": "label", "value": { "type": "string", "required": true } }],
//!     "methods": [], "slots": [], "events": []
//! }"#).unwrap();
//!
//! let markdown = render(component, &RenderOptions::new()).finish().await.unwrap();
//! assert!(markdown.starts_with("# Btn \n## props \n"));
//! # });
//! ```

mod component;
mod context;
mod error;
pub mod format;
mod renderer;
mod sink;
mod stream;
mod writer;

pub use compdoc_config::{Category, RenderOptions, ResolvedOptions};
pub use component::{
    Component, ComponentError, Event, Member, Members, Method, Prop, PropDescriptor, PropValue,
    Slot,
};
pub use error::RenderError;
pub use renderer::{emit, render_to_string};
pub use sink::{RenderEvent, RenderSink};
pub use stream::{RenderStream, render};
