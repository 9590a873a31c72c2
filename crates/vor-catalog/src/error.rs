use thiserror::Error;
use vor_core::ConfigError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product name must be non-empty (id '{0}')")]
    EmptyName(String),

    #[error("product '{0}' has an empty slug")]
    EmptySlug(String),

    #[error("duplicate product id: '{0}'")]
    DuplicateId(String),

    #[error("duplicate product slug: '{slug}' (from product '{id}')")]
    DuplicateSlug { slug: String, id: String },

    #[error("discussion '{item_id}' references product '{product_id}', not its owner")]
    OrphanedDiscussion { item_id: String, product_id: String },

    #[error("discussion '{item_id}' has sentiment {score} outside [-1, 1]")]
    SentimentOutOfRange { item_id: String, score: f64 },

    #[error("product '{product_id}' has average sentiment {average} outside [-1, 1]")]
    AverageSentimentOutOfRange { product_id: String, average: f64 },

    #[error("product '{product_id}' lists subreddit '{subreddit}' more than once")]
    DuplicateSubreddit { product_id: String, subreddit: String },

    #[error("failed to load catalog: {0}")]
    Load(#[from] ConfigError),
}
