//! The read-only product catalog and the two queries served over it.
//!
//! [`Catalog::search`] filters by case-insensitive substring;
//! [`Catalog::trending`] ranks by mention count.

pub mod catalog;
pub mod error;
pub mod search;
pub mod seed;
pub mod trending;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use search::search;
pub use trending::{trending, TRENDING_LIMIT};
