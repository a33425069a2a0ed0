//! Page bookkeeping and the accumulated result list.
//!
//! Every fetch is tagged with a [`Ticket`]. Only the completion whose ticket
//! matches the pending one is merged; anything older belongs to a superseded
//! filter or page and is dropped.

use crate::catalog::ResultItem;
use std::collections::HashSet;

/// Identifies one issued fetch: the filter session and the page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub session: u64,
    pub page: u32,
}

/// Current page, known page count and the fetch in flight.
#[derive(Debug, Clone)]
pub struct Pagination {
    session: u64,
    current_page: u32,
    total_pages: Option<u32>,
    pending: Option<Ticket>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            session: 0,
            current_page: 1,
            total_pages: None,
            pending: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket for the first page of the current session.
    pub fn start(&mut self) -> Ticket {
        self.issue()
    }

    /// Open a new session at page 1 with an unknown page count. Any fetch
    /// still in flight becomes stale.
    pub fn reset(&mut self) -> Ticket {
        self.session += 1;
        self.current_page = 1;
        self.total_pages = None;
        self.issue()
    }

    /// Move to the next page if one is known to exist and nothing is in
    /// flight.
    pub fn advance(&mut self) -> Option<Ticket> {
        if self.pending.is_some() {
            return None;
        }
        match self.total_pages {
            Some(total) if self.current_page < total => {
                self.current_page += 1;
                Some(self.issue())
            }
            _ => None,
        }
    }

    /// Accept a completion. Returns `false` for stale tickets, which must be
    /// ignored.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        true
    }

    /// Record the page count reported with a merged page.
    pub fn record_total(&mut self, total_pages: u32) {
        self.total_pages = Some(total_pages);
    }

    /// Undo the page advance of a failed fetch, so the page is requested
    /// again on the next advance.
    pub fn rewind(&mut self, ticket: Ticket) {
        if ticket.session == self.session && ticket.page == self.current_page && ticket.page > 1 {
            self.current_page -= 1;
        }
    }

    fn issue(&mut self) -> Ticket {
        let ticket = Ticket {
            session: self.session,
            page: self.current_page,
        };
        self.pending = Some(ticket);
        ticket
    }
}

/// Results gathered across the pages of one session, in arrival order and
/// without repeated ids.
#[derive(Debug, Clone, Default)]
pub struct Accumulated {
    items: Vec<ResultItem>,
    ids: HashSet<String>,
}

impl Accumulated {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `page`, skipping ids already present. Returns how many items
    /// were added.
    pub fn extend(&mut self, page: Vec<ResultItem>) -> usize {
        let before = self.items.len();
        for item in page {
            if self.ids.insert(item.id.clone()) {
                self.items.push(item);
            }
        }
        self.items.len() - before
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ResultItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
