use crate::api::{ApiError, CoachApi, Session};
use crate::models::Day;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

const DEFAULT_CAPACITY: usize = 512;

/// A client's plan days fetched from the COACH API on behalf of one session.
#[derive(Debug, Clone)]
pub struct RemoteDays {
    pub api: CoachApi,
    pub session: Session,
    pub client_id: String,
}

impl RemoteDays {
    pub fn new(api: CoachApi, session: Session, client_id: impl Into<String>) -> Self {
        Self {
            api,
            session,
            client_id: client_id.into(),
        }
    }

    pub async fn load(&self) -> Result<Vec<Day>, ApiError> {
        let details = self.api.client_details(&self.session, &self.client_id).await?;
        Ok(details.into_days())
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            session: self.session.fingerprint(),
            client_id: self.client_id.clone(),
        }
    }
}

/// Cached lists belong to one viewer: a session never sees days fetched with
/// another session's token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    session: String,
    client_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: CacheKey,
    generation: u64,
}

#[derive(Debug, Default)]
struct CacheEntry {
    issued: u64,
    last_used: u64,
    days: Option<Vec<Day>>,
}

#[derive(Debug, Default)]
struct Entries {
    clock: u64,
    map: HashMap<CacheKey, CacheEntry>,
}

/// Last committed day list per session and client. Each fetch takes a
/// ticket, and only the newest ticket issued for a key may commit. The least
/// recently used key is evicted once `capacity` keys are held.
#[derive(Debug)]
pub struct PlanDayCache {
    capacity: usize,
    entries: Mutex<Entries>,
}

impl Default for PlanDayCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[derive(Debug)]
pub struct Refreshed {
    pub days: Vec<Day>,
    pub error: Option<ApiError>,
}

impl PlanDayCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(Entries::default()),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.map.len()
    }

    pub async fn begin(&self, key: &CacheKey) -> FetchTicket {
        let mut entries = self.entries.lock().await;
        if !entries.map.contains_key(key) && entries.map.len() >= self.capacity {
            let oldest = entries
                .map
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                entries.map.remove(&oldest);
            }
        }

        entries.clock += 1;
        let now = entries.clock;
        let entry = entries.map.entry(key.clone()).or_default();
        entry.issued += 1;
        entry.last_used = now;
        FetchTicket {
            key: key.clone(),
            generation: entry.issued,
        }
    }

    pub async fn commit(&self, ticket: &FetchTicket, days: Vec<Day>) -> bool {
        let mut entries = self.entries.lock().await;
        match entries.map.get_mut(&ticket.key) {
            Some(entry) if entry.issued == ticket.generation => {
                entry.days = Some(days);
                true
            }
            _ => false,
        }
    }

    pub async fn snapshot(&self, key: &CacheKey) -> Option<Vec<Day>> {
        let entries = self.entries.lock().await;
        entries.map.get(key).and_then(|entry| entry.days.clone())
    }

    pub async fn forget(&self, key: &CacheKey) {
        self.entries.lock().await.map.remove(key);
    }

    /// Loads `source` once. On failure the last list committed for the same
    /// session and client (or nothing) is returned alongside the error; a
    /// rejected session gets nothing and its entry is dropped.
    pub async fn refresh(&self, source: &RemoteDays) -> Refreshed {
        let key = source.cache_key();
        let client_id = source.client_id.as_str();
        let ticket = self.begin(&key).await;

        match source.load().await {
            Ok(days) => {
                if self.commit(&ticket, days.clone()).await {
                    return Refreshed { days, error: None };
                }
                debug!(client_id, generation = ticket.generation, "discarding stale plan days");
                let days = self.snapshot(&key).await.unwrap_or(days);
                Refreshed { days, error: None }
            }
            Err(ApiError::Unauthorized) => {
                warn!(client_id, "COACH API rejected the session for plan days");
                self.forget(&key).await;
                Refreshed {
                    days: Vec::new(),
                    error: Some(ApiError::Unauthorized),
                }
            }
            Err(error) => {
                warn!(client_id, %error, "failed to fetch plan days");
                Refreshed {
                    days: self.snapshot(&key).await.unwrap_or_default(),
                    error: Some(error),
                }
            }
        }
    }
}
