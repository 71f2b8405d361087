// tests/support/builders.rs
use serde_json::{Value, json};

/// Builds a stored column document in its populated shape.
pub struct ColumnDocBuilder {
    id: i64,
    title: String,
    links: Option<Value>,
    author: Option<Value>,
}

impl ColumnDocBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Column {id}"),
            links: None,
            author: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn links(mut self, links: Value) -> Self {
        self.links = Some(links);
        self
    }

    pub fn author(mut self, id: i64, name: &str) -> Self {
        self.author = Some(json!({ "id": id, "name": name }));
        self
    }

    pub fn build(self) -> Value {
        let mut doc = json!({ "id": self.id, "title": self.title });
        if let Some(links) = self.links {
            doc["links"] = links;
        }
        if let Some(author) = self.author {
            doc["author"] = author;
        }
        doc
    }
}

pub fn link(label: &str, publish_date: Option<&str>) -> Value {
    json!({
        "label": label,
        "url": format!("https://example.it/{label}"),
        "publishDate": publish_date,
    })
}

pub fn content_doc(id: i64, slug: Option<&str>, publish_date: Option<&str>) -> Value {
    json!({ "id": id, "slug": slug, "publishDate": publish_date })
}

/// Labels of a serialized link list, in order.
pub fn labels(links: &Value) -> Vec<String> {
    links
        .as_array()
        .expect("links should be a list")
        .iter()
        .map(|link| link["label"].as_str().unwrap_or_default().to_string())
        .collect()
}
