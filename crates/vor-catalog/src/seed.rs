//! Built-in sample products served when no catalog file is configured.

use chrono::{DateTime, TimeZone, Utc};
use vor_core::{DiscussionItem, Product, ProductWithAggregates};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed date")
}

struct SeedPost {
    id: &'static str,
    reddit_id: &'static str,
    subreddit: &'static str,
    title: &'static str,
    content: &'static str,
    author: &'static str,
    score: i64,
    slug: &'static str,
    day: u32,
    sentiment: f64,
}

impl SeedPost {
    fn into_item(self, product_id: &str) -> DiscussionItem {
        let at = date(2024, 1, self.day);
        DiscussionItem {
            id: self.id.to_string(),
            reddit_id: self.reddit_id.to_string(),
            product_id: product_id.to_string(),
            subreddit: self.subreddit.to_string(),
            title: Some(self.title.to_string()),
            content: self.content.to_string(),
            author: self.author.to_string(),
            score: self.score,
            url: Some(format!(
                "https://reddit.com/r/{}/comments/{}",
                self.subreddit, self.reddit_id
            )),
            permalink: Some(format!(
                "/r/{}/comments/{}/{}/",
                self.subreddit, self.reddit_id, self.slug
            )),
            created_at: at,
            fetched_at: at,
            sentiment_score: Some(self.sentiment),
        }
    }
}

fn product(
    id: &str,
    name: &str,
    brand: &str,
    category: &str,
    description: &str,
    image: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: Some(brand.to_string()),
        category: Some(category.to_string()),
        description: Some(description.to_string()),
        image_url: Some(format!(
            "https://images.unsplash.com/{image}?w=400&h=400&fit=crop"
        )),
        slug: id.to_string(),
        created_at: date(2024, 1, 1),
        updated_at: date(2024, 1, 1),
    }
}

/// The sample catalog: iPhone 15 Pro, MacBook Air M3, Tesla Model 3.
///
/// Mention counts, averages and community lists are curated totals rather
/// than values derived from the few sample posts attached here.
#[must_use]
pub fn seed_products() -> Vec<ProductWithAggregates> {
    let iphone = ProductWithAggregates::new(
        product(
            "iphone-15-pro",
            "iPhone 15 Pro",
            "Apple",
            "Technology",
            "Latest iPhone with titanium design and advanced camera system",
            "photo-1592750475338-74b7b21085ab",
        ),
        vec![
            SeedPost {
                id: "1",
                reddit_id: "abc123",
                subreddit: "apple",
                title: "iPhone 15 Pro Review - Worth the Upgrade?",
                content: "Just got my iPhone 15 Pro and I have to say, the camera improvements \
                          are incredible. The titanium build feels premium and the battery life \
                          is noticeably better than my 14 Pro.",
                author: "techreviewguy",
                score: 234,
                slug: "iphone_15_pro_review",
                day: 15,
                sentiment: 0.8,
            }
            .into_item("iphone-15-pro"),
            SeedPost {
                id: "2",
                reddit_id: "def456",
                subreddit: "iphone",
                title: "iPhone 15 Pro overheating issues?",
                content: "Anyone else experiencing overheating with their iPhone 15 Pro? Mine \
                          gets pretty warm during gaming and video recording.",
                author: "mobilegamer",
                score: 89,
                slug: "iphone_15_pro_overheating",
                day: 10,
                sentiment: -0.3,
            }
            .into_item("iphone-15-pro"),
        ],
    )
    .with_average_sentiment(0.7)
    .with_total_mentions(45)
    .with_top_subreddits(["apple", "iphone", "technology"]);

    let macbook = ProductWithAggregates::new(
        product(
            "macbook-air-m3",
            "MacBook Air M3",
            "Apple",
            "Technology",
            "Ultra-thin laptop with M3 chip for exceptional performance and battery life",
            "photo-1541807084-5c52b6b3adef",
        ),
        vec![SeedPost {
            id: "3",
            reddit_id: "ghi789",
            subreddit: "apple",
            title: "MacBook Air M3 - Perfect for developers",
            content: "Been using the MacBook Air M3 for development work and it handles \
                      everything I throw at it. Xcode, Docker, multiple browsers - no slowdown. \
                      Battery lasts all day.",
            author: "devlife",
            score: 156,
            slug: "macbook_air_m3_perfect",
            day: 12,
            sentiment: 0.9,
        }
        .into_item("macbook-air-m3")],
    )
    .with_average_sentiment(0.85)
    .with_total_mentions(67)
    .with_top_subreddits(["apple", "macbook", "laptops"]);

    let tesla = ProductWithAggregates::new(
        product(
            "tesla-model-3",
            "Tesla Model 3",
            "Tesla",
            "Automotive",
            "Electric sedan with autopilot and over-the-air updates",
            "photo-1560958089-b8a1929cea89",
        ),
        vec![SeedPost {
            id: "4",
            reddit_id: "jkl012",
            subreddit: "teslamotors",
            title: "6 months with Model 3 - honest review",
            content: "Love the tech and efficiency, but build quality issues are frustrating. \
                      Panel gaps and paint imperfections. Service experience has been mixed.",
            author: "evowner",
            score: 445,
            slug: "6_months_model_3",
            day: 8,
            sentiment: 0.2,
        }
        .into_item("tesla-model-3")],
    )
    .with_average_sentiment(0.6)
    .with_total_mentions(123)
    .with_top_subreddits(["teslamotors", "electricvehicles", "cars"]);

    vec![iphone, macbook, tesla]
}

#[cfg(test)]
mod tests {
    use vor_core::generate_slug;

    use super::*;

    #[test]
    fn seed_has_three_products_with_curated_mentions() {
        let products = seed_products();
        let mentions: Vec<u32> = products.iter().map(ProductWithAggregates::mentions).collect();
        assert_eq!(mentions, vec![45, 67, 123]);
    }

    #[test]
    fn seed_slugs_match_generated_slugs() {
        for p in seed_products() {
            assert_eq!(p.product.slug, generate_slug(&p.product.name));
        }
    }

    #[test]
    fn seed_discussions_belong_to_their_product() {
        for p in seed_products() {
            assert!(p
                .reddit_content
                .iter()
                .all(|item| item.product_id == p.product.id));
        }
    }

    #[test]
    fn seed_content_keeps_single_spaces_across_line_breaks() {
        let products = seed_products();
        let content = &products[0].reddit_content[0].content;
        assert!(content.contains("camera improvements are incredible"));
        assert!(!content.contains("  "));
    }
}
