// src/infrastructure/document_store/relations.rs
//! Relation references inside stored documents.
//!
//! A relation attribute holds `{"$ref": {"collection": "authors", "id": 3}}`
//! or a non-empty array of such objects. Everything else (plain values and
//! embedded components such as column links) is ordinary data.

use crate::application::ports::document_store::FetchOptions;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub const REF_KEY: &str = "$ref";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentRef {
    pub collection: String,
    pub id: i64,
}

/// Related documents already loaded, keyed by reference.
pub type ResolvedDocuments = HashMap<DocumentRef, Value>;

enum Relation {
    One(DocumentRef),
    Many(Vec<DocumentRef>),
}

fn parse_ref(value: &Value) -> Option<DocumentRef> {
    let target = value.as_object()?.get(REF_KEY)?.as_object()?;
    Some(DocumentRef {
        collection: target.get("collection")?.as_str()?.to_string(),
        id: target.get("id")?.as_i64()?,
    })
}

fn relation_of(value: &Value) -> Option<Relation> {
    if let Some(reference) = parse_ref(value) {
        return Some(Relation::One(reference));
    }
    let items = value.as_array().filter(|items| !items.is_empty())?;
    items
        .iter()
        .map(parse_ref)
        .collect::<Option<Vec<_>>>()
        .map(Relation::Many)
}

/// Group the references that `options` asks to populate by collection.
pub fn collect_refs(documents: &[Value], options: &FetchOptions) -> BTreeMap<String, BTreeSet<i64>> {
    let mut wanted: BTreeMap<String, BTreeSet<i64>> = BTreeMap::new();
    for document in documents {
        let Some(attributes) = document.as_object() else {
            continue;
        };
        for (name, value) in attributes {
            if !options.populates(name) {
                continue;
            }
            let refs = match relation_of(value) {
                Some(Relation::One(reference)) => vec![reference],
                Some(Relation::Many(refs)) => refs,
                None => continue,
            };
            for reference in refs {
                wanted
                    .entry(reference.collection)
                    .or_default()
                    .insert(reference.id);
            }
        }
    }
    wanted
}

/// Replace populated relations with their documents and drop the rest.
///
/// A dangling single reference becomes `null`; dangling entries of a
/// to-many relation are left out.
pub fn resolve_relations(document: &mut Value, options: &FetchOptions, resolved: &ResolvedDocuments) {
    let Some(attributes) = document.as_object_mut() else {
        return;
    };

    let names: Vec<String> = attributes.keys().cloned().collect();
    for name in names {
        let Some(relation) = attributes.get(&name).and_then(relation_of) else {
            continue;
        };
        if !options.populates(&name) {
            attributes.remove(&name);
            continue;
        }
        let value = match relation {
            Relation::One(reference) => resolved.get(&reference).cloned().unwrap_or(Value::Null),
            Relation::Many(refs) => Value::Array(
                refs.iter()
                    .filter_map(|reference| resolved.get(reference).cloned())
                    .collect(),
            ),
        };
        attributes.insert(name, value);
    }
}

/// Remove every relation attribute. Populated documents are resolved one
/// level deep only.
pub fn strip_relations(document: &mut Value) {
    resolve_relations(document, &FetchOptions::default(), &ResolvedDocuments::new());
}
