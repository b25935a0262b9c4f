use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::{watch, RwLock};
use uuid::Uuid;

use crate::{error::Result, queries::catalog_queries};

use super::CatalogProduct;

type Snapshot = Arc<Vec<CatalogProduct>>;

/// Explicit cache of the full catalog snapshot used by search, filtering and
/// the featured views. Readers take the current snapshot (loaded lazily from
/// the store); every confirmed mutation calls `invalidate`, which drops the
/// snapshot and bumps a watch channel so subscribers can refresh.
#[derive(Clone)]
pub struct CatalogCache {
    snapshot: Arc<RwLock<Option<Snapshot>>>,
    generation_tx: Arc<watch::Sender<u64>>,
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogCache {
    pub fn new() -> Self {
        let (generation_tx, _) = watch::channel(0);
        Self {
            snapshot: Arc::new(RwLock::new(None)),
            generation_tx: Arc::new(generation_tx),
        }
    }

    pub async fn snapshot(&self, pool: &PgPool) -> Result<Snapshot> {
        if let Some(snapshot) = self.snapshot.read().await.clone() {
            return Ok(snapshot);
        }

        let catalog = catalog_queries::load_catalog(pool).await?;
        let snapshot: Snapshot = Arc::new(catalog);
        *self.snapshot.write().await = Some(snapshot.clone());

        tracing::debug!("Catalog snapshot loaded ({} products)", snapshot.len());

        Ok(snapshot)
    }

    /// Drop the snapshot and notify subscribers. Called after every confirmed
    /// catalog mutation.
    pub async fn invalidate(&self) {
        *self.snapshot.write().await = None;
        self.generation_tx.send_modify(|generation| *generation += 1);
    }

    /// Change-notification interface: the value increments on every
    /// invalidation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.generation_tx.subscribe()
    }

    pub fn generation(&self) -> u64 {
        *self.generation_tx.borrow()
    }

    /// Stage an optimistic featured toggle against the cached snapshot. The
    /// tentative state is visible to readers immediately; the caller then
    /// attempts the store write and either commits or rolls back.
    pub async fn stage_featured(
        &self,
        product_id: Uuid,
        is_featured: bool,
        featured_at: Option<DateTime<Utc>>,
    ) -> StagedToggle {
        let mut guard = self.snapshot.write().await;
        let previous = guard.clone();

        if let Some(snapshot) = guard.as_ref() {
            let mut next: Vec<CatalogProduct> = snapshot.as_ref().clone();
            if let Some(product) = next.iter_mut().find(|p| p.id == product_id) {
                product.is_featured = is_featured;
                product.featured_at = featured_at;
            }
            *guard = Some(Arc::new(next));
        }

        StagedToggle {
            cache: self.clone(),
            previous,
            phase: TogglePhase::Pending,
        }
    }

    #[cfg(test)]
    pub(crate) async fn prime(&self, catalog: Vec<CatalogProduct>) {
        *self.snapshot.write().await = Some(Arc::new(catalog));
    }

    #[cfg(test)]
    pub(crate) async fn cached(&self) -> Option<Snapshot> {
        self.snapshot.read().await.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TogglePhase {
    Pending,
    Committed,
    RolledBack,
}

/// One staged toggle: Pending until the caller settles it. Commit invalidates
/// the cache so the next read sees the store's truth; rollback restores the
/// pre-toggle snapshot. Settling twice is a no-op.
pub struct StagedToggle {
    cache: CatalogCache,
    previous: Option<Snapshot>,
    phase: TogglePhase,
}

impl StagedToggle {
    pub fn phase(&self) -> TogglePhase {
        self.phase
    }

    pub async fn commit(&mut self) {
        if self.phase != TogglePhase::Pending {
            return;
        }
        self.phase = TogglePhase::Committed;
        self.cache.invalidate().await;
    }

    pub async fn rollback(&mut self) {
        if self.phase != TogglePhase::Pending {
            return;
        }
        self.phase = TogglePhase::RolledBack;
        *self.cache.snapshot.write().await = self.previous.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testutil::product;

    fn two_products() -> Vec<CatalogProduct> {
        let category = Uuid::new_v4();
        vec![
            product("Dolo 650", "30.00", category, "Medicines"),
            product("Crocin", "25.00", category, "Medicines"),
        ]
    }

    #[tokio::test]
    async fn invalidate_bumps_generation_and_drops_snapshot() {
        let cache = CatalogCache::new();
        cache.prime(two_products()).await;

        let mut rx = cache.subscribe();
        assert_eq!(cache.generation(), 0);

        cache.invalidate().await;

        assert_eq!(cache.generation(), 1);
        assert!(rx.has_changed().unwrap());
        assert!(cache.cached().await.is_none());
    }

    #[tokio::test]
    async fn staged_toggle_is_visible_while_pending() {
        let cache = CatalogCache::new();
        let catalog = two_products();
        let target = catalog[0].id;
        cache.prime(catalog).await;

        let stamp = Utc::now();
        let toggle = cache.stage_featured(target, true, Some(stamp)).await;
        assert_eq!(toggle.phase(), TogglePhase::Pending);

        let snapshot = cache.cached().await.unwrap();
        let staged = snapshot.iter().find(|p| p.id == target).unwrap();
        assert!(staged.is_featured);
        assert_eq!(staged.featured_at, Some(stamp));
    }

    #[tokio::test]
    async fn commit_invalidates_for_a_fresh_read() {
        let cache = CatalogCache::new();
        let catalog = two_products();
        let target = catalog[0].id;
        cache.prime(catalog).await;

        let mut toggle = cache.stage_featured(target, true, Some(Utc::now())).await;
        toggle.commit().await;

        assert_eq!(toggle.phase(), TogglePhase::Committed);
        assert_eq!(cache.generation(), 1);
        assert!(cache.cached().await.is_none());
    }

    #[tokio::test]
    async fn rollback_restores_the_previous_snapshot() {
        let cache = CatalogCache::new();
        let catalog = two_products();
        let target = catalog[0].id;
        cache.prime(catalog).await;

        let mut toggle = cache.stage_featured(target, true, Some(Utc::now())).await;
        toggle.rollback().await;

        assert_eq!(toggle.phase(), TogglePhase::RolledBack);
        let snapshot = cache.cached().await.unwrap();
        let restored = snapshot.iter().find(|p| p.id == target).unwrap();
        assert!(!restored.is_featured);
        // Rollback must not look like a confirmed mutation.
        assert_eq!(cache.generation(), 0);
    }

    #[tokio::test]
    async fn settling_twice_is_a_no_op() {
        let cache = CatalogCache::new();
        let catalog = two_products();
        let target = catalog[0].id;
        cache.prime(catalog).await;

        let mut toggle = cache.stage_featured(target, true, Some(Utc::now())).await;
        toggle.commit().await;
        toggle.rollback().await;

        assert_eq!(toggle.phase(), TogglePhase::Committed);
        assert_eq!(cache.generation(), 1);
    }
}
