//! Load lifecycle of one narrative page.
//!
//! A page shows [`PageState::Loading`] until the source answers. Each fetch
//! is issued under a [`PageLoad`] ticket; results delivered after the page
//! was torn down, or after a newer fetch started, are discarded.

use crate::io::SourceError;
use crate::models::Narrative;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Ready { key: String, narrative: Narrative },
    NotFound { key: String },
    Failed { key: String, message: String },
}

impl PageState {
    pub fn from_fetch(key: &str, result: Result<Narrative, SourceError>) -> Self {
        match result {
            Ok(narrative) => PageState::Ready {
                key: key.to_string(),
                narrative,
            },
            Err(e) if e.is_not_found() => PageState::NotFound {
                key: key.to_string(),
            },
            Err(e) => {
                log::error!("Failed to load narrative {key}: {e}");
                PageState::Failed {
                    key: key.to_string(),
                    message: e.to_string(),
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn narrative(&self) -> Option<&Narrative> {
        match self {
            PageState::Ready { narrative, .. } => Some(narrative),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Lifecycle {
    mounted: Cell<bool>,
    generation: Cell<u64>,
}

/// Owned by the page for as long as it is mounted
#[derive(Debug)]
pub struct PageLifecycle {
    inner: Rc<Lifecycle>,
}

impl PageLifecycle {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Lifecycle {
                mounted: Cell::new(true),
                generation: Cell::new(0),
            }),
        }
    }

    /// Start a fetch, superseding any fetch still in flight
    pub fn begin_load(&self) -> PageLoad {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        PageLoad {
            lifecycle: Rc::clone(&self.inner),
            generation,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    pub fn teardown(&self) {
        self.inner.mounted.set(false);
    }
}

impl Default for PageLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PageLifecycle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Ticket for one in-flight fetch
#[derive(Debug)]
pub struct PageLoad {
    lifecycle: Rc<Lifecycle>,
    generation: u64,
}

impl PageLoad {
    pub fn is_current(&self) -> bool {
        self.lifecycle.mounted.get() && self.lifecycle.generation.get() == self.generation
    }

    /// Turn the fetch result into page state, or `None` if it must be discarded
    pub fn deliver(self, key: &str, result: Result<Narrative, SourceError>) -> Option<PageState> {
        if !self.is_current() {
            log::debug!("Discarding stale narrative result for {key}");
            return None;
        }
        Some(PageState::from_fetch(key, result))
    }
}
