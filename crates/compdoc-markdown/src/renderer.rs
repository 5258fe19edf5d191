//! Synchronous render engine.
//!
//! [`emit`] writes a whole document into a [`RenderSink`] in one pass. The
//! async driver in [`crate::stream`] runs the same engine on a spawned task.

use compdoc_config::{Category, RenderOptions, ResolvedOptions};

use crate::component::Component;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::format::heading;
use crate::sink::RenderSink;

/// Render `component` into `sink`.
///
/// Writes the name heading and description (unless suppressed), then every
/// category in print order, then calls [`RenderSink::end`]. Category headings
/// nest one level below the name heading. Empty categories produce a single
/// blank line.
///
/// # Errors
///
/// Returns `RenderError::UnknownNode` when a print-order key is not a known
/// category or the descriptor lacks it. Output already written for earlier
/// categories stays in the sink and `end` is not called.
pub fn emit(
    component: &Component,
    options: &ResolvedOptions,
    sink: &mut dyn RenderSink,
) -> Result<(), RenderError> {
    let mut ctx = RenderContext::new(options.level(), sink);

    if !options.ignore_name()
        && let Some(name) = component.name.as_deref().filter(|name| !name.is_empty())
    {
        tracing::debug!(component = name, "Rendering component");
        ctx.println(&[&heading(name, ctx.level())]);
        ctx.descend();
    }

    if !options.ignore_description()
        && let Some(description) = component
            .description
            .as_deref()
            .filter(|description| !description.is_empty())
    {
        ctx.println(&[description]);
        ctx.blank_line();
    }

    for key in options.print_order() {
        let Some((category, members)) = Category::from_key(key)
            .and_then(|category| Some((category, component.members(category)?)))
        else {
            tracing::warn!(node = %key, "Unknown print order node");
            return Err(RenderError::UnknownNode(key.clone()));
        };

        if members.is_empty() {
            ctx.blank_line();
            continue;
        }

        tracing::debug!(category = %category, count = members.len(), "Rendering category");
        members.write(&mut ctx, options.title(category));
    }

    ctx.end();
    Ok(())
}

/// Render `component` into a string without a runtime.
///
/// # Errors
///
/// Returns `RenderError::UnknownNode` as [`emit`] does.
pub fn render_to_string(
    component: &Component,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut out = String::new();
    emit(component, &options.resolve(), &mut out)?;
    Ok(out)
}
