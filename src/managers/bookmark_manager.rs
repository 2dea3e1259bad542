//! Bookmark Manager for Matchbook.
//!
//! Implements `BookmarkManagerTrait`: save, list and remove saved players
//! across a primary store and a fallback cache.
//!
//! The primary store is the source of truth whenever it answers with data.
//! Every successful primary write is mirrored into the fallback cache, and
//! every non-empty primary listing overwrites it. When the primary store
//! fails, the same call is served by the fallback cache instead. A single
//! mutex guards both stores, so one operation's primary and cache steps are
//! never interleaved with another's.

use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, error, info, trace, warn};

use crate::stores::{BookmarkStore, StoreOutcome};
use crate::types::errors::BookmarkError;
use crate::types::player::{BookmarkRecord, BookmarkSet};

/// Trait defining the operations the presentation layer may call.
pub trait BookmarkManagerTrait {
    /// Saves or updates a player. `Err` only for blank input; `Ok(false)`
    /// when neither store accepted the write.
    fn save(&self, id: &str, nickname: &str) -> Result<bool, BookmarkError>;
    /// Lists saved players. Never fails; worst case is an empty list.
    fn list(&self) -> Vec<BookmarkRecord>;
    /// Removes a player. Returns whether a record was removed.
    fn remove(&self, id: &str) -> bool;
}

/// Which store answered a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    Primary,
    Fallback,
    /// Neither store could be read.
    Unavailable,
}

/// Decision produced by [`resolve_listing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub records: BookmarkSet,
    pub source: ListingSource,
}

impl Listing {
    /// A primary answer is authoritative and must be copied into the cache.
    pub fn mirrors_to_fallback(&self) -> bool {
        self.source == ListingSource::Primary
    }
}

/// Decides what a listing returns from the two store outcomes.
///
/// A non-empty primary set wins outright. An empty or unavailable primary
/// defers to the fallback cache; `read_fallback` is only invoked then.
pub fn resolve_listing<F>(primary: StoreOutcome, read_fallback: F) -> Listing
where
    F: FnOnce() -> StoreOutcome,
{
    match primary {
        StoreOutcome::Ok(set) if !set.is_empty() => Listing {
            records: set,
            source: ListingSource::Primary,
        },
        _ => match read_fallback() {
            StoreOutcome::Ok(set) => Listing {
                records: set,
                source: ListingSource::Fallback,
            },
            StoreOutcome::Unavailable(_) => Listing {
                records: BookmarkSet::new(),
                source: ListingSource::Unavailable,
            },
        },
    }
}

/// Checks and trims save input.
pub fn validate_input<'a>(id: &'a str, nickname: &'a str) -> Result<(&'a str, &'a str), BookmarkError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(BookmarkError::Validation("player id must not be empty".to_string()));
    }
    let nickname = nickname.trim();
    if nickname.is_empty() {
        return Err(BookmarkError::Validation("nickname must not be empty".to_string()));
    }
    Ok((id, nickname))
}

type Clock = Box<dyn Fn() -> i64 + Send + Sync>;

/// Returns the current UNIX timestamp in seconds.
fn system_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

struct Stores<P, F> {
    primary: P,
    fallback: F,
}

/// Bookmark manager over a primary store `P` and a fallback cache `F`.
pub struct BookmarkManager<P, F> {
    stores: Mutex<Stores<P, F>>,
    clock: Clock,
}

impl<P: BookmarkStore, F: BookmarkStore> BookmarkManager<P, F> {
    /// Creates a manager using the system clock.
    pub fn new(primary: P, fallback: F) -> Self {
        Self::with_clock(primary, fallback, system_now)
    }

    /// Creates a manager with a custom clock returning epoch seconds.
    pub fn with_clock<C>(primary: P, fallback: F, clock: C) -> Self
    where
        C: Fn() -> i64 + Send + Sync + 'static,
    {
        Self {
            stores: Mutex::new(Stores { primary, fallback }),
            clock: Box::new(clock),
        }
    }

    // Store state stays consistent across a panic in another caller, so a
    // poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Stores<P, F>> {
        self.stores.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs before every operation. Reconciliation happens as part of
    /// `list`, so there is no queued work to apply here.
    fn reconcile(&self, stores: &Stores<P, F>) {
        trace!(
            primary = stores.primary.name(),
            fallback = stores.fallback.name(),
            "reconcile: nothing pending"
        );
    }
}

impl<P: BookmarkStore, F: BookmarkStore> Stores<P, F> {
    /// After a successful primary write, copy the primary's full set into the cache.
    fn mirror_after_save(&mut self, record: &BookmarkRecord) -> bool {
        match self.primary.get_all() {
            Ok(set) => match self.fallback.replace_all(&set) {
                Ok(()) => true,
                Err(e) => {
                    error!(id = %record.id, error = %e, "saved to primary but could not mirror into fallback cache");
                    false
                }
            },
            Err(e) => {
                // The write landed; keep the cache in step with just this record.
                warn!(id = %record.id, error = %e, "primary re-read failed after save, updating cache entry only");
                match self.fallback.put(record) {
                    Ok(()) => true,
                    Err(e) => {
                        error!(id = %record.id, error = %e, "fallback cache update failed");
                        false
                    }
                }
            }
        }
    }

    fn remove_from_fallback(&mut self, id: &str) -> bool {
        match self.fallback.delete(id) {
            Ok(removed) => removed,
            Err(e) => {
                error!(id, error = %e, "fallback cache delete failed");
                false
            }
        }
    }
}

impl<P: BookmarkStore, F: BookmarkStore> BookmarkManagerTrait for BookmarkManager<P, F> {
    fn save(&self, id: &str, nickname: &str) -> Result<bool, BookmarkError> {
        let (id, nickname) = validate_input(id, nickname)?;

        let mut stores = self.lock();
        self.reconcile(&stores);

        let record = BookmarkRecord::new(id, nickname, (self.clock)());

        match stores.primary.put(&record) {
            Ok(()) => {
                debug!(id, "saved player to primary store");
                Ok(stores.mirror_after_save(&record))
            }
            Err(e) => {
                warn!(id, error = %BookmarkError::PrimaryUnavailable(e.to_string()), "falling back to cache for save");
                match stores.fallback.put(&record) {
                    Ok(()) => {
                        info!(id, "saved player to fallback cache only");
                        Ok(true)
                    }
                    Err(e) => {
                        error!(id, error = %BookmarkError::FallbackUnavailable(e.to_string()), "save failed on both stores");
                        Ok(false)
                    }
                }
            }
        }
    }

    fn list(&self) -> Vec<BookmarkRecord> {
        let mut stores = self.lock();
        self.reconcile(&stores);

        let primary = StoreOutcome::from(stores.primary.get_all());
        if let StoreOutcome::Unavailable(reason) = &primary {
            warn!(error = %reason, "primary store unavailable, listing from fallback cache");
        }

        let fallback = &stores.fallback;
        let listing = resolve_listing(primary, || {
            let outcome = StoreOutcome::from(fallback.get_all());
            if let StoreOutcome::Unavailable(reason) = &outcome {
                error!(error = %BookmarkError::FallbackUnavailable(reason.clone()), "no store could be listed");
            }
            outcome
        });

        if listing.mirrors_to_fallback() {
            if let Err(e) = stores.fallback.replace_all(&listing.records) {
                warn!(error = %e, "could not reconcile fallback cache with primary store");
            }
        }

        debug!(count = listing.records.len(), source = ?listing.source, "listed saved players");
        listing.records.into_vec()
    }

    fn remove(&self, id: &str) -> bool {
        let id = id.trim();
        let mut stores = self.lock();
        self.reconcile(&stores);

        match stores.primary.delete(id) {
            Ok(removed) => match stores.primary.get_all() {
                Ok(set) if removed || !set.is_empty() => {
                    if !removed {
                        debug!(id, "{}", BookmarkError::NotFound(id.to_string()));
                    }
                    match stores.fallback.replace_all(&set) {
                        Ok(()) => removed,
                        Err(e) => {
                            error!(id, error = %e, "removed from primary but could not mirror into fallback cache");
                            false
                        }
                    }
                }
                // The primary never held anything, so the cache is what
                // listings currently show.
                Ok(_) => stores.remove_from_fallback(id),
                Err(e) => {
                    warn!(id, error = %e, "primary re-read failed after remove, updating cache entry only");
                    let cached = stores.remove_from_fallback(id);
                    removed || cached
                }
            },
            Err(e) => {
                warn!(id, error = %BookmarkError::PrimaryUnavailable(e.to_string()), "falling back to cache for remove");
                stores.remove_from_fallback(id)
            }
        }
    }
}
