pub mod column;
pub mod errors;
pub mod publish_date;
pub mod sitemap;
