use crate::domain::column::{AuthorRef, Column, ColumnLinks, LinkItem};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItemDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub publish_date: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<LinkItem> for LinkItemDto {
    fn from(link: LinkItem) -> Self {
        Self {
            label: link.label,
            url: link.url,
            description: link.description,
            publish_date: link.publish_date,
            extra: link.extra,
        }
    }
}

/// Links as they leave the API: a sorted list, or the stored value verbatim
/// when it was not a list.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ColumnLinksDto {
    List(Vec<LinkItemDto>),
    Raw(Value),
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorDto {
    pub id: i64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<AuthorRef> for AuthorDto {
    fn from(author: AuthorRef) -> Self {
        Self {
            id: author.id,
            attributes: author.attributes,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnDto {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ColumnLinksDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<Column> for ColumnDto {
    fn from(column: Column) -> Self {
        let links = match column.links {
            ColumnLinks::Missing => None,
            ColumnLinks::List(links) => Some(ColumnLinksDto::List(
                links.into_iter().map(Into::into).collect(),
            )),
            ColumnLinks::Malformed(raw) => Some(ColumnLinksDto::Raw(raw)),
        };

        Self {
            id: column.id.into(),
            links,
            author: column.author.map(Into::into),
            attributes: column.attributes,
        }
    }
}
