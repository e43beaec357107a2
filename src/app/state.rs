use std::sync::mpsc::{Receiver, Sender};

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::api::{ApiRequest, ApiResponse, Drug, DrugDetails};
use crate::autocomplete::AutocompleteState;
use crate::dataset::{DrugSummary, SummaryStore};
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::suggest::SuggestionIndex;
use crate::widgets::spinner::Spinner;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchInput,
    Results,
}

/// Detail tabs for a selected drug
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Summary,
    Sentiment,
    Recommendations,
    SideEffects,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Summary,
        DetailTab::Sentiment,
        DetailTab::Recommendations,
        DetailTab::SideEffects,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DetailTab::Summary => "Community Insights",
            DetailTab::Sentiment => "Sentiment",
            DetailTab::Recommendations => "Recommendations",
            DetailTab::SideEffects => "Side Effects",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DetailTab::Summary => DetailTab::Sentiment,
            DetailTab::Sentiment => DetailTab::Recommendations,
            DetailTab::Recommendations => DetailTab::SideEffects,
            DetailTab::SideEffects => DetailTab::Summary,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            DetailTab::Summary => DetailTab::SideEffects,
            DetailTab::Sentiment => DetailTab::Summary,
            DetailTab::Recommendations => DetailTab::Sentiment,
            DetailTab::SideEffects => DetailTab::Recommendations,
        }
    }
}

/// Application state
pub struct App {
    pub input: TextArea<'static>,
    pub autocomplete: AutocompleteState,
    pub index: SuggestionIndex,
    pub summaries: SummaryStore,
    pub notification: NotificationState,
    pub spinner: Spinner,
    pub regions: LayoutRegions,
    pub focus: Focus,
    pub active_tab: DetailTab,
    pub search_results: Vec<Drug>,
    pub result_cursor: usize,
    pub selected: Option<Drug>,
    pub summary: Option<DrugSummary>,
    pub details: Option<DrugDetails>,
    pub should_quit: bool,
    pub request_tx: Option<Sender<ApiRequest>>,
    pub response_rx: Option<Receiver<ApiResponse>>,
    /// Monotonic request counter; stale responses carry an older id
    pub(super) next_request_id: u64,
    pub(super) pending_search_id: Option<u64>,
    pub(super) pending_details_id: Option<u64>,
}

impl App {
    /// Create a new App instance with the candidate set and local dataset
    pub fn new(index: SuggestionIndex, summaries: SummaryStore) -> Self {
        let mut input = TextArea::default();
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search for a drug ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        input.set_cursor_line_style(Style::default());

        Self {
            input,
            autocomplete: AutocompleteState::new(),
            index,
            summaries,
            notification: NotificationState::new(),
            spinner: Spinner::new(),
            regions: LayoutRegions::default(),
            focus: Focus::SearchInput,
            active_tab: DetailTab::Summary,
            search_results: Vec::new(),
            result_cursor: 0,
            selected: None,
            summary: None,
            details: None,
            should_quit: false,
            request_tx: None,
            response_rx: None,
            next_request_id: 0,
            pending_search_id: None,
            pending_details_id: None,
        }
    }

    /// Wire up the channels to the API worker thread
    pub fn set_channels(&mut self, request_tx: Sender<ApiRequest>, response_rx: Receiver<ApiResponse>) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.input.lines()[0].as_ref()
    }

    /// Replace the query text with the given string
    pub fn set_query(&mut self, text: &str) {
        self.input.select_all();
        self.input.cut();
        self.input.insert_str(text);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether any network request is outstanding
    pub fn is_loading(&self) -> bool {
        self.pending_search_id.is_some() || self.pending_details_id.is_some()
    }

    /// Recompute the suggestion list after the query text changed
    pub fn refresh_suggestions(&mut self) {
        let query = self.query().to_string();
        self.autocomplete.recompute(&self.index, &query);
    }

    /// Adopt a suggestion as the new query text and return to idle
    pub fn adopt_suggestion(&mut self, suggestion: &str) {
        self.set_query(suggestion);
        self.autocomplete.hide();
    }

    /// Submit the current query to the remote search endpoint
    ///
    /// A blank query is ignored. The request is tagged so a late response
    /// for an older search cannot clobber a newer one.
    pub fn submit_search(&mut self) {
        let query = self.query().trim().to_string();
        if query.is_empty() {
            return;
        }
        self.autocomplete.hide();

        let request_id = self.allocate_request_id();
        if let Some(tx) = &self.request_tx
            && tx.send(ApiRequest::Search { query, request_id }).is_ok()
        {
            self.pending_search_id = Some(request_id);
        }
    }

    /// Select a drug from the search results
    ///
    /// Looks up the local summary synchronously and fires the tagged
    /// aggregate detail fetch. Previously fetched details stay visible
    /// until the new response lands (or fails, in which case they remain).
    pub fn select_drug(&mut self, index: usize) {
        let Some(drug) = self.search_results.get(index).cloned() else {
            return;
        };

        self.result_cursor = index;
        self.summary = self.summaries.find(&drug.name).cloned();

        let request_id = self.allocate_request_id();
        if let Some(tx) = &self.request_tx
            && tx
                .send(ApiRequest::Details {
                    drug_name: drug.name.clone(),
                    request_id,
                })
                .is_ok()
        {
            self.pending_details_id = Some(request_id);
        }

        self.selected = Some(drug);
        self.active_tab = DetailTab::Summary;
    }

    /// Move the result highlight down one card
    pub fn result_cursor_down(&mut self) {
        if !self.search_results.is_empty() {
            self.result_cursor = (self.result_cursor + 1).min(self.search_results.len() - 1);
        }
    }

    /// Move the result highlight up one card
    pub fn result_cursor_up(&mut self) {
        self.result_cursor = self.result_cursor.saturating_sub(1);
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
    }

    /// Switch focus between the search field and the results pane
    ///
    /// Leaving the input hides the dropdown (blur); returning re-shows the
    /// last computed list without a recompute.
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        match focus {
            Focus::SearchInput => {
                let query = self.query().to_string();
                self.autocomplete.show_existing(&query);
            }
            Focus::Results => self.autocomplete.hide(),
        }
        self.focus = focus;
    }

    pub(super) fn allocate_request_id(&mut self) -> u64 {
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.next_request_id
    }
}
