pub mod entity;
pub mod link_order;
pub mod repository;
pub mod value_objects;

pub use entity::{AuthorRef, Column, ColumnLinks, LinkItem};
pub use link_order::{compare_links, normalize_column, normalize_columns, sort_links};
pub use repository::ColumnReadRepository;
pub use value_objects::{ColumnId, ColumnListWindow};
