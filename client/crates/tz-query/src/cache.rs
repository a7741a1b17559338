//! The query cache.
//!
//! Per-key contract:
//! - identical keys share one in-flight request and one cached result;
//! - a resolution from a superseded generation (the key was invalidated, or
//!   a newer fetch took over) is delivered to its own awaiters but never
//!   written to the shared cache, so displayed state never moves backwards;
//! - an abandoned fetch (its initiator was dropped) writes nothing; waiters
//!   restart it;
//! - errors are not cached - the next access retries.

use crate::QueryKey;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::watch;
use tz_api::{ApiError, ApiResult};

type FetchResult = ApiResult<Value>;
type FlightReceiver = watch::Receiver<Option<FetchResult>>;

struct Slot {
    /// Bumped on every new flight and every invalidation; a flight only
    /// records its result while its generation is still current.
    generation: u64,
    state: SlotState,
}

enum SlotState {
    InFlight(FlightReceiver),
    Ready { value: Value, stale: bool },
}

enum Plan {
    Hit(Value),
    Join(FlightReceiver),
    Start {
        generation: u64,
        sender: watch::Sender<Option<FetchResult>>,
    },
}

#[derive(Default)]
pub struct QueryCache {
    slots: Mutex<HashMap<QueryKey, Slot>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached read. A fresh hit returns immediately; a key with a request in
    /// flight joins it; anything else (miss, stale, abandoned) runs the
    /// fetcher. The fetcher may be invoked again if a joined flight is
    /// abandoned, hence `Fn` rather than `FnOnce`.
    pub async fn fetch<T, F, Fut>(&self, key: &QueryKey, fetcher: F) -> ApiResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        loop {
            match self.plan(key) {
                Plan::Hit(value) => return decode(&value),
                Plan::Join(mut rx) => {
                    match rx.wait_for(|result| result.is_some()).await {
                        Ok(resolved) => {
                            // wait_for only yields once the slot holds a result
                            let result = resolved.clone().unwrap_or(Err(ApiError::Decode));
                            return match result {
                                Ok(value) => decode(&value),
                                Err(e) => Err(e),
                            };
                        }
                        // The initiating fetch was dropped mid-flight;
                        // restart with our own request.
                        Err(_) => continue,
                    }
                }
                Plan::Start { generation, sender } => {
                    let typed = fetcher().await;

                    let result: FetchResult = match &typed {
                        Ok(value) => serde_json::to_value(value).map_err(|e| {
                            log::debug!("Failed to encode cache value for {key}: {e}");
                            ApiError::Decode
                        }),
                        Err(e) => Err(e.clone()),
                    };

                    self.complete(key, generation, &result);
                    let _ = sender.send(Some(result));
                    return typed;
                }
            }
        }
    }

    /// Last-known value for a key, fresh or stale. Used for optimistic
    /// overlays; never triggers a fetch.
    pub fn peek<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let slots = self.slots.lock().expect("cache lock poisoned");
        match slots.get(key)? {
            Slot {
                state: SlotState::Ready { value, .. },
                ..
            } => decode(value).ok(),
            _ => None,
        }
    }

    /// Mark every key under `prefix` stale and orphan its in-flight
    /// generations; the next access refetches.
    pub fn invalidate(&self, prefix: &QueryKey) {
        let mut slots = self.slots.lock().expect("cache lock poisoned");
        for (key, slot) in slots.iter_mut() {
            if key.starts_with(prefix) {
                slot.generation += 1;
                if let SlotState::Ready { stale, .. } = &mut slot.state {
                    *stale = true;
                }
            }
        }
    }

    /// Drop everything; used when the session ends.
    pub fn clear(&self) {
        self.slots.lock().expect("cache lock poisoned").clear();
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        let slots = self.slots.lock().expect("cache lock poisoned");
        matches!(
            slots.get(key),
            Some(Slot {
                state: SlotState::Ready { stale: true, .. },
                ..
            })
        )
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.slots
            .lock()
            .expect("cache lock poisoned")
            .contains_key(key)
    }

    fn plan(&self, key: &QueryKey) -> Plan {
        let mut slots = self.slots.lock().expect("cache lock poisoned");

        match slots.get_mut(key) {
            Some(slot) => {
                enum Action {
                    Hit(Value),
                    Join(FlightReceiver),
                    Restart,
                }

                let action = match &slot.state {
                    SlotState::Ready {
                        value,
                        stale: false,
                    } => Action::Hit(value.clone()),
                    // Joinable only while unresolved and the initiator still
                    // alive (has_changed errs once the sender is dropped).
                    // A resolved-but-unrecorded flight (superseded by an
                    // invalidation) and an abandoned one both restart.
                    SlotState::InFlight(rx)
                        if rx.borrow().is_none() && rx.has_changed().is_ok() =>
                    {
                        Action::Join(rx.clone())
                    }
                    _ => Action::Restart,
                };

                match action {
                    Action::Hit(value) => Plan::Hit(value),
                    Action::Join(rx) => Plan::Join(rx),
                    Action::Restart => {
                        let (sender, rx) = watch::channel(None);
                        slot.generation += 1;
                        slot.state = SlotState::InFlight(rx);
                        Plan::Start {
                            generation: slot.generation,
                            sender,
                        }
                    }
                }
            }
            None => {
                let (sender, rx) = watch::channel(None);
                slots.insert(
                    key.clone(),
                    Slot {
                        generation: 1,
                        state: SlotState::InFlight(rx),
                    },
                );
                Plan::Start {
                    generation: 1,
                    sender,
                }
            }
        }
    }

    /// Record a flight's outcome - unless the generation moved on, in which
    /// case the shared cache is left untouched.
    fn complete(&self, key: &QueryKey, generation: u64, result: &FetchResult) {
        let mut slots = self.slots.lock().expect("cache lock poisoned");

        let Some(slot) = slots.get_mut(key) else {
            return;
        };
        if slot.generation != generation {
            return;
        }

        match result {
            Ok(value) => {
                slot.state = SlotState::Ready {
                    value: value.clone(),
                    stale: false,
                };
            }
            Err(_) => {
                // Errors are not cached; the next access retries.
                slots.remove(key);
            }
        }
    }
}

fn decode<T: DeserializeOwned>(value: &Value) -> ApiResult<T> {
    serde_json::from_value(value.clone()).map_err(|e| {
        log::debug!("Failed to decode cached value: {e}");
        ApiError::Decode
    })
}
