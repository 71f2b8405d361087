// src/domain/column/entity.rs
use crate::domain::column::value_objects::ColumnId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publish_date::parse_publish_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A labelled external link curated inside a column.
///
/// Every field is optional: hand-edited records are still presented, and
/// ordered, when part of them is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw editorial value of any JSON type, kept verbatim so reads never
    /// rewrite stored data.
    #[serde(default)]
    pub publish_date: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LinkItem {
    const PUBLISH_DATE_KEY: &'static str = "publishDate";

    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            url: Some(url.into()),
            description: None,
            publish_date: None,
            extra: Map::new(),
        }
    }

    pub fn with_publish_date(mut self, raw: impl Into<String>) -> Self {
        self.publish_date = Some(Value::String(raw.into()));
        self
    }

    /// Read one stored link record. A record whose known fields have the
    /// wrong type keeps its attributes untyped; only a non-object is
    /// rejected.
    fn from_record(record: Value) -> Option<Self> {
        let Value::Object(mut attributes) = record else {
            return None;
        };
        if let Ok(link) = serde_json::from_value(Value::Object(attributes.clone())) {
            return Some(link);
        }
        let publish_date = attributes.remove(Self::PUBLISH_DATE_KEY);
        Some(Self {
            label: None,
            url: None,
            description: None,
            publish_date,
            extra: attributes,
        })
    }

    /// The publish instant, or `None` when absent, not text, or unparseable.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.publish_date
            .as_ref()
            .and_then(Value::as_str)
            .and_then(parse_publish_date)
    }
}

/// The `links` attribute of a stored column.
///
/// Documents written by hand or by older schema versions may carry a value
/// that is not a list of link records; that value is kept as-is in
/// `Malformed` so it can be passed through untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ColumnLinks {
    #[default]
    Missing,
    List(Vec<LinkItem>),
    Malformed(Value),
}

impl ColumnLinks {
    pub fn from_value(raw: Value) -> Self {
        match raw {
            Value::Array(items) => {
                let parsed = items
                    .iter()
                    .cloned()
                    .map(LinkItem::from_record)
                    .collect::<Option<Vec<_>>>();
                match parsed {
                    Some(links) => Self::List(links),
                    None => Self::Malformed(Value::Array(items)),
                }
            }
            other => Self::Malformed(other),
        }
    }

    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_list(&self) -> Option<&[LinkItem]> {
        match self {
            Self::List(links) => Some(links),
            _ => None,
        }
    }
}

impl Serialize for ColumnLinks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Missing => serializer.serialize_none(),
            Self::List(links) => links.serialize(serializer),
            Self::Malformed(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ColumnLinks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// Populated author relation. Columns only reference authors, they never
/// own them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: i64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    #[serde(default, skip_serializing_if = "ColumnLinks::is_missing")]
    pub links: ColumnLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRef>,
    /// Every other stored attribute (title, slug, timestamps, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Column {
    pub const COLLECTION: &'static str = "columns";
    pub const LINKS_RELATION: &'static str = "links";
    pub const AUTHOR_RELATION: &'static str = "author";

    pub fn from_document(document: Value) -> DomainResult<Self> {
        serde_json::from_value(document)
            .map_err(|err| DomainError::Persistence(format!("corrupt column document: {err}")))
    }
}
