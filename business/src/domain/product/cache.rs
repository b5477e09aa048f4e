use std::sync::RwLock;
use std::time::{Duration, Instant};

use super::model::Product;

pub const DEFAULT_CATALOG_TTL: Duration = Duration::from_secs(5 * 60);

/// Time source port so the cache expiry is testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CachedCatalog {
    products: Vec<Product>,
    fetched_at: Instant,
}

/// In-memory catalog cache with a fixed TTL. One instance is owned by the
/// composition root and shared by every catalog consumer, so an
/// invalidation is seen by all of them. Expired entries are never served;
/// a failed refresh leaves the cache empty rather than serving stale data.
pub struct CatalogCache {
    ttl: Duration,
    clock: Box<dyn Clock>,
    cached: RwLock<Option<CachedCatalog>>,
}

impl CatalogCache {
    pub fn new(ttl: Duration, clock: Box<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            cached: RwLock::new(None),
        }
    }

    /// The cached product list, if present and within the TTL.
    pub fn get(&self) -> Option<Vec<Product>> {
        let guard = self.cached.read().ok()?;
        let cached = guard.as_ref()?;
        if self.clock.now().duration_since(cached.fetched_at) < self.ttl {
            Some(cached.products.clone())
        } else {
            None
        }
    }

    pub fn store(&self, products: Vec<Product>) {
        if let Ok(mut guard) = self.cached.write() {
            *guard = Some(CachedCatalog {
                products,
                fetched_at: self.clock.now(),
            });
        }
    }

    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.cached.write() {
            *guard = None;
        }
    }
}
