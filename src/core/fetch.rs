//! # Keyed Fetch State
//!
//! A `Fetcher<T>` owns the tri-state result of one view's data request and
//! the key (URL) it was requested for.
//!
//! ```text
//!   mount(url_a) ──► Pending(gen 1) ──resolve(1, ok)──► Success(data)
//!                        │
//!   mount(url_b) ──► Pending(gen 2)      resolve(1, ..) → dropped (stale)
//!                        │
//!                        └──resolve(2, err)──► Failure(msg)
//! ```
//!
//! Each `mount` with a new key bumps the generation. A result is committed
//! only when its generation is still current and the state is still
//! `Pending`, so a superseded request can never overwrite the state of a
//! newer one, and a request resolves at most once.

use log::debug;

use crate::api::FetchError;

/// Tri-state result of one asynchronous request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Success(T),
    Failure(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Pending
    }
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }
}

/// Handed to the runtime when a fetch must be issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub url: String,
}

#[derive(Debug)]
pub struct Fetcher<T> {
    key: Option<String>,
    generation: u64,
    state: FetchState<T>,
}

impl<T> Default for Fetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Fetcher<T> {
    pub fn new() -> Self {
        Self {
            key: None,
            generation: 0,
            state: FetchState::Pending,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// The URL this fetcher is currently bound to, if mounted.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Binds the fetcher to `url`.
    ///
    /// Returns `None` if it is already bound to the same URL. Otherwise
    /// resets to `Pending` under a fresh generation and returns the ticket
    /// for the request to issue.
    pub fn mount(&mut self, url: String) -> Option<FetchTicket> {
        if self.key.as_deref() == Some(url.as_str()) {
            return None;
        }
        self.generation += 1;
        self.state = FetchState::Pending;
        self.key = Some(url.clone());
        debug!("Fetcher mounted: gen={} url={}", self.generation, url);
        Some(FetchTicket {
            generation: self.generation,
            url,
        })
    }

    /// Detaches the fetcher. Any in-flight result becomes stale.
    pub fn unmount(&mut self) {
        if self.key.take().is_some() {
            self.generation += 1;
            self.state = FetchState::Pending;
        }
    }

    /// Commits a result for `generation`. Returns `false` if it was dropped.
    pub fn resolve(&mut self, generation: u64, result: Result<T, FetchError>) -> bool {
        if generation != self.generation || self.key.is_none() || !self.state.is_pending() {
            debug!(
                "Dropping stale fetch result: gen={} current={} mounted={}",
                generation,
                self.generation,
                self.key.is_some()
            );
            return false;
        }
        self.state = match result {
            Ok(data) => FetchState::Success(data),
            Err(e) => FetchState::Failure(e.to_string()),
        };
        true
    }
}
