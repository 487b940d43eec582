//! The navigation collaborator
//!
//! The store never owns the address. It reads a snapshot from a `Navigator`
//! and hands back a complete replacement; the navigator decides how that
//! becomes the new current address (history entry, re-render, reload).

use std::cell::RefCell;
use std::rc::Rc;

use crate::address::{Address, QueryMap};

/// Options attached to every navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Update the address without discarding client-side state
    pub no_full_reload: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self {
            no_full_reload: true,
        }
    }
}

/// Whether a request adds a history entry or overwrites the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
}

pub trait Navigator {
    /// Snapshot of the current address.
    fn current_address(&self) -> Address;

    /// Adopt a new address as a new history entry.
    fn navigate_push(&self, path: &str, query: QueryMap, options: NavigateOptions);

    /// Adopt a new address in place of the current history entry.
    fn navigate_replace(&self, path: &str, query: QueryMap, options: NavigateOptions);
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn current_address(&self) -> Address {
        (**self).current_address()
    }

    fn navigate_push(&self, path: &str, query: QueryMap, options: NavigateOptions) {
        (**self).navigate_push(path, query, options)
    }

    fn navigate_replace(&self, path: &str, query: QueryMap, options: NavigateOptions) {
        (**self).navigate_replace(path, query, options)
    }
}

/// A navigation request as received by `MemoryNavigator`
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    pub kind: NavigationKind,
    pub address: Address,
    pub options: NavigateOptions,
}

#[derive(Debug, Default)]
struct MemoryHistory {
    entries: Vec<Address>,
    index: usize,
    requests: Vec<NavigationRequest>,
}

/// In-memory history for tests and non-browser hosts.
///
/// Clones share the same history, so a test can keep one handle while the
/// store owns another.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    inner: Rc<RefCell<MemoryHistory>>,
}

impl MemoryNavigator {
    pub fn new(initial: Address) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryHistory {
                entries: vec![initial],
                index: 0,
                requests: Vec::new(),
            })),
        }
    }

    /// Start from an href such as `"/list?tag=a&tag=b"`.
    pub fn from_href(href: &str) -> Self {
        Self::new(Address::parse(href))
    }

    /// Step back one entry. Returns false when already at the oldest entry.
    pub fn back(&self) -> bool {
        let mut history = self.inner.borrow_mut();
        if history.index == 0 {
            return false;
        }
        history.index -= 1;
        true
    }

    /// Step forward one entry. Returns false when already at the newest entry.
    pub fn forward(&self) -> bool {
        let mut history = self.inner.borrow_mut();
        if history.index + 1 >= history.entries.len() {
            return false;
        }
        history.index += 1;
        true
    }

    pub fn history_len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Every navigation request received so far, oldest first.
    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }

    fn record(&self, kind: NavigationKind, address: Address, options: NavigateOptions) {
        let mut history = self.inner.borrow_mut();
        history.requests.push(NavigationRequest {
            kind,
            address: address.clone(),
            options,
        });
        match kind {
            NavigationKind::Push => {
                let keep = history.index + 1;
                history.entries.truncate(keep);
                history.entries.push(address);
                history.index = keep;
            }
            NavigationKind::Replace => {
                let index = history.index;
                history.entries[index] = address;
            }
        }
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new(Address::new("/", QueryMap::new()))
    }
}

impl Navigator for MemoryNavigator {
    fn current_address(&self) -> Address {
        let history = self.inner.borrow();
        history.entries[history.index].clone()
    }

    fn navigate_push(&self, path: &str, query: QueryMap, options: NavigateOptions) {
        self.record(NavigationKind::Push, Address::new(path, query), options);
    }

    fn navigate_replace(&self, path: &str, query: QueryMap, options: NavigateOptions) {
        self.record(NavigationKind::Replace, Address::new(path, query), options);
    }
}
