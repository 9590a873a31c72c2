use vor_core::ProductWithAggregates;

/// Products whose name, brand, category, or description contains `query`,
/// ignoring case, in catalog order.
///
/// `query` is matched literally. An empty query matches every product.
#[must_use]
pub fn search<'a>(
    products: &'a [ProductWithAggregates],
    query: &str,
) -> Vec<&'a ProductWithAggregates> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| matches_query(p, &needle))
        .collect()
}

fn matches_query(p: &ProductWithAggregates, needle: &str) -> bool {
    let product = &p.product;
    [
        Some(product.name.as_str()),
        product.brand.as_deref(),
        product.category.as_deref(),
        product.description.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}
