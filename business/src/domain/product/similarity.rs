use super::model::Product;
use super::value_objects::ProductId;

/// Candidates scoring below this are not considered similar at all.
const MIN_SIMILARITY: f64 = 0.4;

/// Classic dynamic-programming Levenshtein distance, case-sensitive.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Normalized similarity in [0, 1]: 1 is an exact match (ignoring case).
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(&a, &b) as f64 / max_len as f64
}

/// Ranks `candidates` by how close their brand or salt name is to the
/// anchor's, best first. The anchor itself is excluded, as is anything
/// scoring below the similarity floor.
pub fn rank_similar(anchor: &Product, candidates: &[Product], limit: usize) -> Vec<Product> {
    let mut scored: Vec<(f64, &Product)> = candidates
        .iter()
        .filter(|c| c.id != anchor.id)
        .map(|c| {
            let score = similarity(&anchor.brand_name, &c.brand_name)
                .max(similarity(&anchor.salt_name, &c.salt_name));
            (score, c)
        })
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, p)| p.clone())
        .collect()
}

pub fn find_by_id<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|p| &p.id == id)
}
