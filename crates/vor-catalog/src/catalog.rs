use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use vor_core::{generate_slug, DiscussionItem, Product, ProductWithAggregates};

use crate::error::CatalogError;
use crate::search::search;
use crate::seed::seed_products;
use crate::trending::{trending, TRENDING_LIMIT};

/// Immutable, validated collection of products.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<ProductWithAggregates>,
}

/// Top level of a catalog YAML file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    /// Defaults to the slug.
    id: Option<String>,
    name: String,
    /// Defaults to `generate_slug(name)`.
    slug: Option<String>,
    brand: Option<String>,
    category: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    discussions: Vec<DiscussionRecord>,
    total_mentions: Option<u32>,
    average_sentiment: Option<f64>,
    top_subreddits: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct DiscussionRecord {
    id: String,
    reddit_id: Option<String>,
    /// Defaults to the enclosing product.
    product_id: Option<String>,
    subreddit: String,
    title: Option<String>,
    content: String,
    author: String,
    #[serde(default)]
    score: i64,
    url: Option<String>,
    permalink: Option<String>,
    created_at: DateTime<Utc>,
    fetched_at: Option<DateTime<Utc>>,
    sentiment_score: Option<f64>,
}

impl ProductRecord {
    fn into_product(self, loaded_at: DateTime<Utc>) -> ProductWithAggregates {
        let slug = self.slug.unwrap_or_else(|| generate_slug(&self.name));
        let id = self.id.unwrap_or_else(|| slug.clone());
        let created_at = self.created_at.unwrap_or(loaded_at);

        let items = self
            .discussions
            .into_iter()
            .map(|d| DiscussionItem {
                reddit_id: d.reddit_id.unwrap_or_else(|| d.id.clone()),
                id: d.id,
                product_id: d.product_id.unwrap_or_else(|| id.clone()),
                subreddit: d.subreddit,
                title: d.title,
                content: d.content,
                author: d.author,
                score: d.score,
                url: d.url,
                permalink: d.permalink,
                fetched_at: d.fetched_at.unwrap_or(d.created_at),
                created_at: d.created_at,
                sentiment_score: d.sentiment_score,
            })
            .collect();

        let mut product = ProductWithAggregates::new(
            Product {
                id,
                name: self.name,
                brand: self.brand,
                category: self.category,
                description: self.description,
                image_url: self.image_url,
                slug,
                created_at,
                updated_at: self.updated_at.unwrap_or(created_at),
            },
            items,
        );

        if let Some(total) = self.total_mentions {
            product = product.with_total_mentions(total);
        }
        if let Some(avg) = self.average_sentiment {
            product = product.with_average_sentiment(avg);
        }
        if let Some(subs) = self.top_subreddits {
            product = product.with_top_subreddits(subs);
        }
        product
    }
}

impl Catalog {
    /// Validate and wrap `products`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a name or slug is empty, an id or slug is
    /// repeated, a discussion points at a different product, or a sentiment
    /// score falls outside `[-1, 1]`.
    pub fn new(products: Vec<ProductWithAggregates>) -> Result<Self, CatalogError> {
        validate(&products)?;
        Ok(Self { products })
    }

    /// The built-in sample catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Load a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Load`] if the file cannot be read or parsed,
    /// and any validation error from [`Catalog::new`].
    pub fn from_yaml_file(path: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile = vor_core::config::read_yaml_file(path)?;
        let loaded_at = Utc::now();
        let products = file
            .products
            .into_iter()
            .map(|record| record.into_product(loaded_at))
            .collect();
        let catalog = Self::new(products)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise use the seed products.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_yaml_file`].
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => {
                let catalog = Self::seed();
                tracing::info!(products = catalog.len(), "using built-in seed catalog");
                Ok(catalog)
            }
        }
    }

    #[must_use]
    pub fn products(&self) -> &[ProductWithAggregates] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// See [`crate::search::search`].
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&ProductWithAggregates> {
        search(&self.products, query)
    }

    /// The top [`TRENDING_LIMIT`] products by mention count.
    #[must_use]
    pub fn trending(&self) -> Vec<&ProductWithAggregates> {
        trending(&self.products, TRENDING_LIMIT)
    }
}

fn validate(products: &[ProductWithAggregates]) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for p in products {
        let product = &p.product;
        if product.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(product.id.clone()));
        }
        if product.slug.is_empty() {
            return Err(CatalogError::EmptySlug(product.id.clone()));
        }
        if !seen_ids.insert(product.id.as_str()) {
            return Err(CatalogError::DuplicateId(product.id.clone()));
        }
        if !seen_slugs.insert(product.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug {
                slug: product.slug.clone(),
                id: product.id.clone(),
            });
        }

        if let Some(average) = p.average_sentiment {
            if !(-1.0..=1.0).contains(&average) {
                return Err(CatalogError::AverageSentimentOutOfRange {
                    product_id: product.id.clone(),
                    average,
                });
            }
        }
        let mut seen_subreddits = HashSet::new();
        for subreddit in &p.top_subreddits {
            if !seen_subreddits.insert(subreddit.as_str()) {
                return Err(CatalogError::DuplicateSubreddit {
                    product_id: product.id.clone(),
                    subreddit: subreddit.clone(),
                });
            }
        }

        for item in &p.reddit_content {
            if item.product_id != product.id {
                return Err(CatalogError::OrphanedDiscussion {
                    item_id: item.id.clone(),
                    product_id: item.product_id.clone(),
                });
            }
            if let Some(score) = item.sentiment_score {
                if !(-1.0..=1.0).contains(&score) {
                    return Err(CatalogError::SentimentOutOfRange {
                        item_id: item.id.clone(),
                        score,
                    });
                }
            }
        }
    }

    Ok(())
}
