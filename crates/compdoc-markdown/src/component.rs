//! Component descriptor model.
//!
//! Descriptors are produced outside this crate (source parsers, schema
//! extractors) and handed over as JSON or built in code:
//!
//! ```
//! use compdoc_markdown::Component;
//!
//! let component = Component::from_json(r#"{
//!     "name": "Btn",
//!     "props": [{ "name": "label", "value": "string" }],
//!     "methods": [], "slots": [], "events": []
//! }"#).unwrap();
//!
//! assert_eq!(component.name.as_deref(), Some("Btn"));
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use compdoc_config::Category;

/// A UI component and its documented members.
///
/// Categories are optional: a category missing from the descriptor is not the
/// same as an empty one, and the renderer rejects print orders naming a
/// missing category.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Component {
    /// Display name.
    pub name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Properties.
    pub props: Option<Vec<Prop>>,
    /// Methods.
    pub methods: Option<Vec<Method>>,
    /// Slots.
    pub slots: Option<Vec<Slot>>,
    /// Events.
    pub events: Option<Vec<Event>>,
}

/// A component property.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Prop {
    /// Property name.
    pub name: String,
    /// Type information.
    pub value: PropValue,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Type information of a property: a bare type name or a full record.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PropValue {
    /// Bare type name (e.g. `"string"`).
    Type(String),
    /// Full record with requiredness, binding and default value.
    Descriptor(PropDescriptor),
}

/// Full property record.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PropDescriptor {
    /// Type name, `"any"` when absent.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Requiredness marker. Any truthy value marks the property required.
    pub required: Value,
    /// Two-way binding marker. Truthy values are printed verbatim.
    #[serde(rename = "twoWay", alias = "two_way")]
    pub two_way: Option<Value>,
    /// Default value. `Some(Value::Null)` is an explicit `null`, `None` means
    /// no default was declared.
    #[serde(deserialize_with = "deserialize_present")]
    pub default: Option<Value>,
}

/// A named member with an optional description (method, slot or event).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Member {
    /// Member name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Member {
    /// Create a member without description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A component method.
pub type Method = Member;
/// A component slot.
pub type Slot = Member;
/// A component event.
pub type Event = Member;

/// Members of one category, borrowed from a [`Component`].
#[derive(Clone, Copy, Debug)]
pub enum Members<'a> {
    /// Properties.
    Props(&'a [Prop]),
    /// Methods.
    Methods(&'a [Method]),
    /// Slots.
    Slots(&'a [Slot]),
    /// Events.
    Events(&'a [Event]),
}

impl Members<'_> {
    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Props(props) => props.len(),
            Self::Methods(members) | Self::Slots(members) | Self::Events(members) => members.len(),
        }
    }

    /// Whether the category has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PropDescriptor {
    /// Whether the property must be set.
    #[must_use]
    pub fn is_required(&self) -> bool {
        is_truthy(&self.required)
    }
}

/// Truthiness of a loosely typed descriptor value.
///
/// `null`, `false`, zero and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => !is_zero(number),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[allow(clippy::float_cmp)]
pub(crate) fn is_zero(number: &serde_json::Number) -> bool {
    number.as_f64() == Some(0.0)
}

impl Component {
    /// Parse a descriptor from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError::Json` if the document is not a valid descriptor.
    pub fn from_json(json: &str) -> Result<Self, ComponentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Members of `category`, or `None` if the descriptor lacks it.
    #[must_use]
    pub fn members(&self, category: Category) -> Option<Members<'_>> {
        match category {
            Category::Props => self.props.as_deref().map(Members::Props),
            Category::Methods => self.methods.as_deref().map(Members::Methods),
            Category::Slots => self.slots.as_deref().map(Members::Slots),
            Category::Events => self.events.as_deref().map(Members::Events),
        }
    }
}

/// Descriptor loading error.
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    /// JSON parsing error.
    #[error("Invalid component descriptor: {0}")]
    Json(#[from] serde_json::Error),
}

/// Keep explicit `null` as `Some(Value::Null)`; absence is handled by
/// `#[serde(default)]`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bare_type_prop() {
        let prop: Prop = serde_json::from_value(json!({
            "name": "label",
            "value": "string"
        }))
        .unwrap();

        assert_eq!(prop.value, PropValue::Type("string".to_owned()));
        assert!(prop.description.is_none());
    }

    #[test]
    fn test_parse_descriptor_prop() {
        let prop: Prop = serde_json::from_value(json!({
            "name": "value",
            "value": { "type": "number", "required": true, "twoWay": "update:value", "default": 3 },
            "description": "Current value"
        }))
        .unwrap();

        let PropValue::Descriptor(descriptor) = prop.value else {
            panic!("Expected descriptor value");
        };
        assert_eq!(descriptor.type_name.as_deref(), Some("number"));
        assert!(descriptor.is_required());
        assert_eq!(descriptor.two_way, Some(json!("update:value")));
        assert_eq!(descriptor.default, Some(json!(3)));
        assert_eq!(prop.description.as_deref(), Some("Current value"));
    }

    #[test]
    fn test_parse_explicit_null_default() {
        let descriptor: PropDescriptor =
            serde_json::from_value(json!({ "default": null })).unwrap();
        assert_eq!(descriptor.default, Some(Value::Null));
    }

    #[test]
    fn test_parse_missing_default() {
        let descriptor: PropDescriptor = serde_json::from_value(json!({})).unwrap();
        assert_eq!(descriptor.default, None);
        assert_eq!(descriptor.type_name, None);
        assert!(!descriptor.is_required());
    }

    #[test]
    fn test_parse_truthy_required() {
        let descriptor: PropDescriptor =
            serde_json::from_value(json!({ "required": 1 })).unwrap();
        assert!(descriptor.is_required());

        let descriptor: PropDescriptor =
            serde_json::from_value(json!({ "required": "" })).unwrap();
        assert!(!descriptor.is_required());
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }

    #[test]
    fn test_missing_category_differs_from_empty() {
        let component = Component::from_json(r#"{ "name": "Btn", "props": [] }"#).unwrap();

        assert!(component.members(Category::Props).is_some_and(|m| m.is_empty()));
        assert!(component.members(Category::Slots).is_none());
    }

    #[test]
    fn test_members_len() {
        let component = Component {
            events: Some(vec![Member::new("click"), Member::new("focus")]),
            ..Component::default()
        };

        let members = component.members(Category::Events).unwrap();
        assert_eq!(members.len(), 2);
        assert!(!members.is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Component::from_json("{ \"props\": 3 }").unwrap_err();
        assert!(err.to_string().starts_with("Invalid component descriptor"));
    }

    #[test]
    fn test_member_builder() {
        let member = Member::new("default").with_description("Main content");
        assert_eq!(member.name, "default");
        assert_eq!(member.description.as_deref(), Some("Main content"));
    }
}
