use super::model::Product;

/// Active filter predicates for the catalog. All predicates are optional and
/// combine with AND; an empty filter passes everything.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Free text; every whitespace-separated word must match at least one
    /// of brand name, salt name, company or category.
    pub query: Option<String>,
    pub categories: Vec<String>,
    pub companies: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub new_arrivals_only: bool,
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(query) = &self.query
            && !matches_query(product, query)
        {
            return false;
        }
        if !self.categories.is_empty()
            && !self
                .categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&product.category))
        {
            return false;
        }
        if !self.companies.is_empty()
            && !self
                .companies
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&product.company))
        {
            return false;
        }
        if let Some(min) = self.min_price
            && product.mrp < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.mrp > max
        {
            return false;
        }
        if self.new_arrivals_only && !product.new_arrival {
            return false;
        }
        if self.in_stock_only && !product.in_stock {
            return false;
        }
        true
    }
}

fn matches_query(product: &Product, query: &str) -> bool {
    let fields = [
        product.brand_name.to_lowercase(),
        product.salt_name.to_lowercase(),
        product.company.to_lowercase(),
        product.category.to_lowercase(),
    ];
    query
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .all(|word| fields.iter().any(|field| field.contains(&word)))
}

/// Applies the filter and sorts the survivors alphabetically by brand name.
pub fn apply(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| {
        a.brand_name
            .to_lowercase()
            .cmp(&b.brand_name.to_lowercase())
    });
    filtered
}
