use vor_core::ProductWithAggregates;

/// Maximum number of products returned by [`trending`].
pub const TRENDING_LIMIT: usize = 10;

/// Up to `limit` products by descending mention count.
///
/// Equal counts keep catalog order. The input slice is not reordered.
#[must_use]
pub fn trending(products: &[ProductWithAggregates], limit: usize) -> Vec<&ProductWithAggregates> {
    let mut ranked: Vec<&ProductWithAggregates> = products.iter().collect();
    // `sort_by` is stable, which the tie ordering relies on.
    ranked.sort_by(|a, b| b.mentions().cmp(&a.mentions()));
    ranked.truncate(limit);
    ranked
}
