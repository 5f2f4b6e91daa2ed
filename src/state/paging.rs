//! Paged-list state shared by search results, the moderation queue, and the
//! admin user table.
//!
//! DESIGN
//! ======
//! Each fetch increments a generation counter before it starts and carries
//! that number to completion. A completion whose generation no longer matches
//! the counter lost the race to a newer fetch and is dropped, so rapid
//! filter or page changes can never paint stale results over fresh ones.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

/// One page of server-side results plus fetch bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct PagedState<T> {
    pub items: Vec<T>,
    /// Total matching items across all pages, as reported by the server.
    pub total: u64,
    /// Current 1-based page.
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for PagedState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            total_pages: 1,
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> PagedState<T> {
    /// Mark a fetch as started and return its generation token.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Install results from the fetch identified by `generation`.
    ///
    /// Returns false (and changes nothing) when a newer fetch has started
    /// since, in which case the caller's results are already obsolete.
    pub fn apply(
        &mut self,
        generation: u64,
        items: Vec<T>,
        total: u64,
        page: u32,
        total_pages: u32,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.items = items;
        self.total = total;
        self.page = page.max(1);
        self.total_pages = total_pages.max(1);
        self.loading = false;
        self.error = None;
        true
    }

    /// Record a fetch failure, keeping whatever was on screen before.
    ///
    /// Stale failures are dropped the same way stale results are.
    pub fn fail(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    /// Drop items matching `predicate` after a successful delete or
    /// moderation call, adjusting the reported total.
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        let removed = before - self.items.len();
        if removed == 0 {
            return false;
        }
        self.total = self
            .total
            .saturating_sub(u64::try_from(removed).unwrap_or(u64::MAX));
        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
