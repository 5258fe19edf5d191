//! Category writers.
//!
//! One writer per member category. Each emits a heading at the context level
//! followed by one entry per member.

use serde_json::Value;

use crate::component::{Member, Members, Prop, PropValue, is_truthy, is_zero};
use crate::context::RenderContext;
use crate::format::{bold, heading, inline_code, italic, list_item, parenthesis};

/// Type name used when a property declares none.
const ANY_TYPE: &str = "any";

/// Whether a property must be set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Nature {
    Required,
    Optional,
}

impl Nature {
    fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
        }
    }
}

/// Property fields derived from its [`PropValue`].
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ResolvedProp<'a> {
    pub(crate) name: &'a str,
    pub(crate) type_name: &'a str,
    pub(crate) nature: Nature,
    pub(crate) two_way: Option<String>,
    pub(crate) default: Option<String>,
}

impl<'a> ResolvedProp<'a> {
    pub(crate) fn new(prop: &'a Prop) -> Self {
        let (type_name, nature, two_way, default) = match &prop.value {
            PropValue::Type(type_name) => (type_name.as_str(), Nature::Optional, None, None),
            PropValue::Descriptor(descriptor) => (
                descriptor.type_name.as_deref().unwrap_or_default(),
                if descriptor.is_required() {
                    Nature::Required
                } else {
                    Nature::Optional
                },
                descriptor.two_way.as_ref().and_then(truthy_text),
                descriptor.default.as_ref().and_then(render_default),
            ),
        };

        Self {
            name: &prop.name,
            type_name: if type_name.is_empty() {
                ANY_TYPE
            } else {
                type_name
            },
            nature,
            two_way,
            default,
        }
    }
}

/// Render a default value for the `default:` annotation.
///
/// Returns `None` when the annotation is suppressed (zero, empty string).
pub(crate) fn render_default(value: &Value) -> Option<String> {
    match value {
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null => Some("null".to_owned()),
        Value::String(text) if text.is_empty() => None,
        // Single quotes are substituted with themselves, so inner quotes stay unescaped.
        Value::String(text) => Some(format!("'{}'", text.replace('\'', "'"))),
        Value::Number(number) if is_zero(number) => None,
        other => Some(plain_text(other)),
    }
}

/// Text of a truthy value, `None` for `null`, `false`, zero and `""`.
fn truthy_text(value: &Value) -> Option<String> {
    is_truthy(value).then(|| plain_text(value))
}

/// Plain-text form of a value as a template literal would print it.
///
/// Strings are unquoted, arrays join their elements with `,` (`null` elements
/// become empty), objects print as `[object Object]`.
fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => plain_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
        other => other.to_string(),
    }
}

/// Description text, `None` when absent or empty.
fn non_empty(description: Option<&String>) -> Option<&str> {
    description.map(String::as_str).filter(|text| !text.is_empty())
}

impl Members<'_> {
    /// Write this category under `title`.
    pub(crate) fn write(self, ctx: &mut RenderContext<'_>, title: &str) {
        match self {
            Self::Props(props) => write_props(ctx, props, title),
            Self::Methods(methods) => write_methods(ctx, methods, title),
            Self::Slots(members) | Self::Events(members) => write_members(ctx, members, title),
        }
    }
}

fn write_props(ctx: &mut RenderContext<'_>, props: &[Prop], title: &str) {
    ctx.println(&[&heading(title, ctx.level())]);

    for prop in props {
        let resolved = ResolvedProp::new(prop);

        ctx.print(&[
            &list_item(&inline_code(resolved.name)),
            &bold(&italic(resolved.type_name)),
            &parenthesis(&italic(resolved.nature.as_str())),
        ]);

        if let Some(two_way) = &resolved.two_way {
            ctx.print(&[&inline_code(&format!("twoWay = {two_way}"))]);
        }

        if let Some(default) = &resolved.default {
            ctx.print(&[&inline_code(&format!("default: {default}"))]);
        }

        ctx.blank_line();

        if let Some(description) = non_empty(prop.description.as_ref()) {
            ctx.println(&[description]);
            ctx.blank_line();
        }
    }
}

fn write_methods(ctx: &mut RenderContext<'_>, methods: &[Member], title: &str) {
    ctx.println(&[&heading(title, ctx.level())]);

    for method in methods {
        ctx.println(&[&list_item(&inline_code(&format!("{}()", method.name)))]);

        if let Some(description) = non_empty(method.description.as_ref()) {
            ctx.println(&[description]);
        }

        ctx.blank_line();
    }

    ctx.blank_line();
}

/// Slots and events share one layout: name and description on one line.
fn write_members(ctx: &mut RenderContext<'_>, members: &[Member], title: &str) {
    ctx.println(&[&heading(title, ctx.level())]);

    for member in members {
        let item = list_item(&inline_code(&member.name));
        match &member.description {
            Some(description) => ctx.println(&[&item, description]),
            None => ctx.println(&[&item]),
        }
        ctx.blank_line();
    }
}
