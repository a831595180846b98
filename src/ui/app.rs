use crate::catalog::{CatalogError, MoviePage, SortMode};
use crate::ui::fetch::{FetchIntent, FetchLifecycle, FetchReducer};
use crate::ui::footer::PaginationView;
use crate::ui::mvi::Reducer;
use crate::ui::query::{QueryIntent, QueryReducer, QueryState};
use crate::ui::worker::{FetchCommand, FetchSender};

/// Which control owns keyboard input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    Sort,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owner of the query state and fetch lifecycle.
///
/// Orchestration discipline: every distinct query transition issues exactly
/// one fetch command, tagged with a monotonically increasing sequence
/// number. An in-flight request is never aborted; its outcome is simply
/// dropped if a newer command has been issued since ("last request wins by
/// sequence number"). The view only reads snapshots and never mutates
/// state directly.
pub struct App {
    should_quit: bool,
    focus: Focus,
    query: QueryState,
    lifecycle: FetchLifecycle,
    fetch_tx: FetchSender,
    /// Sequence number of the most recently issued fetch command.
    issued_seq: u64,
    /// Raw search buffer as typed; the query state holds the trimmed term.
    search_input: String,
    sort_cursor: usize,
    /// False until the user picks a sort option; the selector shows the
    /// placeholder while false.
    sort_chosen: bool,
    /// First visible row of the result list.
    scroll: usize,
}

impl App {
    pub fn new(fetch_tx: FetchSender) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Search,
            query: QueryState::default(),
            lifecycle: FetchLifecycle::default(),
            fetch_tx,
            issued_seq: 0,
            search_input: String::new(),
            sort_cursor: 0,
            sort_chosen: false,
            scroll: 0,
        }
    }

    /// Issues the initial fetch for the default query.
    pub fn start(&mut self) {
        self.begin_fetch();
    }

    // --- Orchestration ---

    /// Runs a query transition and, if it produced a distinct state,
    /// issues exactly one fetch for it.
    fn dispatch_query(&mut self, intent: QueryIntent) {
        let previous = self.query.clone();
        dispatch_mvi!(self, query, QueryReducer, intent);
        if self.query != previous {
            self.begin_fetch();
        }
    }

    fn begin_fetch(&mut self) {
        self.issued_seq += 1;
        dispatch_mvi!(self, lifecycle, FetchReducer, FetchIntent::Started);
        self.scroll = 0;

        let command = FetchCommand {
            seq: self.issued_seq,
            snapshot: self.query.snapshot(),
        };
        if self.fetch_tx.send(command).is_err() {
            tracing::error!("fetch worker is gone; quitting");
            self.should_quit = true;
        }
    }

    /// Applies a fetch outcome, unless a newer command supersedes it.
    pub fn on_fetch_finished(&mut self, seq: u64, outcome: Result<MoviePage, CatalogError>) {
        if seq != self.issued_seq {
            tracing::debug!(seq, latest = self.issued_seq, "dropping stale fetch outcome");
            return;
        }
        match outcome {
            Ok(page) => {
                dispatch_mvi!(self, lifecycle, FetchReducer, FetchIntent::Loaded { page });
                // Back to the top of the list, the TUI rendition of
                // scroll-to-origin after a fresh page.
                self.scroll = 0;
            }
            Err(_) => {
                dispatch_mvi!(self, lifecycle, FetchReducer, FetchIntent::Failed);
            }
        }
    }

    // --- Search input ---

    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.emit_search();
    }

    pub fn backspace_search(&mut self) {
        self.search_input.pop();
        self.emit_search();
    }

    fn emit_search(&mut self) {
        let term = self.search_input.trim().to_string();
        self.sort_chosen = false;
        self.dispatch_query(QueryIntent::Search { term });
    }

    // --- Sort selector ---

    pub fn sort_cursor_up(&mut self) {
        self.sort_cursor = if self.sort_cursor == 0 {
            SortMode::MENU.len() - 1
        } else {
            self.sort_cursor - 1
        };
    }

    pub fn sort_cursor_down(&mut self) {
        self.sort_cursor = (self.sort_cursor + 1) % SortMode::MENU.len();
    }

    pub fn choose_sort(&mut self) {
        let mode = SortMode::MENU[self.sort_cursor];
        self.sort_chosen = true;
        self.search_input.clear();
        self.dispatch_query(QueryIntent::Sort { mode });
    }

    // --- Pagination ---

    pub fn request_previous_page(&mut self) {
        if let Some(view) = self.pagination() {
            if view.prev_enabled() {
                let page = self.query.page - 1;
                self.dispatch_query(QueryIntent::Page { page });
            }
        }
    }

    pub fn request_next_page(&mut self) {
        if let Some(view) = self.pagination() {
            if view.next_enabled() {
                let page = self.query.page + 1;
                self.dispatch_query(QueryIntent::Page { page });
            }
        }
    }

    /// Pagination controls, present only after a successful fetch.
    pub fn pagination(&self) -> Option<PaginationView> {
        self.lifecycle.page().map(|page| PaginationView {
            page: self.query.page,
            total_pages: page.total_pages,
        })
    }

    // --- List scrolling ---

    pub fn scroll_down(&mut self, rows: usize) {
        let len = self.lifecycle.page().map_or(0, |p| p.results.len());
        self.scroll = (self.scroll + rows).min(len.saturating_sub(1));
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    // --- Snapshots for the view ---

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn lifecycle(&self) -> &FetchLifecycle {
        &self.lifecycle
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Sort,
            Focus::Sort => Focus::Search,
        };
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// The sort option under the selector cursor.
    pub fn highlighted_sort(&self) -> SortMode {
        SortMode::MENU[self.sort_cursor]
    }

    /// Label for the sort selector; the placeholder until a choice is made.
    pub fn sort_selector_label(&self) -> &'static str {
        if self.sort_chosen {
            self.query.sort.label()
        } else {
            "Sort By"
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
