//! Main application state and event loop logic.
//!
//! This module implements The Elm Architecture (TEA) pattern: `update`
//! applies events, `handle_api_message` applies background results and
//! `view` renders the current state. Operations that need the network are
//! queued as pending work and picked up by the main loop, which hands them
//! to the task spawner.

use tracing::{debug, info, trace, warn};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::Settings;
use crate::controller::{PageNav, PageTicket, SelectionController};
use crate::events::{Action, Event, KeyBindings};
use crate::tasks::ApiMessage;
use crate::ui::{
    render_context_help, ArtworkTableView, HelpView, KeyContext, LoadingIndicator,
    SelectRowsAction, SelectRowsPrompt,
};

/// The current view/screen state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Displaying the artwork table.
    #[default]
    Table,
    /// Help screen is displayed.
    Help,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// The current view state.
    state: AppState,
    /// Whether the application should quit.
    should_quit: bool,
    /// Table data and the cross-page selection.
    controller: SelectionController,
    /// The artwork table view.
    table_view: ArtworkTableView,
    /// The help screen.
    help_view: HelpView,
    /// The select-rows prompt.
    prompt: SelectRowsPrompt,
    /// Spinner for page loads.
    loading: LoadingIndicator,
    /// Spinner for bulk selections.
    bulk_loading: LoadingIndicator,
    /// Key bindings for the table.
    key_bindings: KeyBindings,
    /// Page loads waiting to be spawned.
    pending_page_loads: Vec<PageTicket>,
    /// Bulk selection waiting to be spawned.
    pending_bulk_select: Option<usize>,
    /// URL waiting to be opened in a browser.
    pending_open_url: Option<String>,
}

impl App {
    /// Create a new application showing the page at `start_page` (0-based).
    ///
    /// The load for the first page is queued immediately.
    pub fn new(start_page: usize, settings: &Settings) -> Self {
        debug!(start_page, "Creating new application instance");

        let mut controller = SelectionController::new();
        let ticket = controller.begin_page_load(start_page);

        let mut loading = LoadingIndicator::with_message("Loading artworks...");
        loading.start();

        Self {
            state: AppState::Table,
            should_quit: false,
            controller,
            table_view: ArtworkTableView::new(),
            help_view: HelpView::new(),
            prompt: SelectRowsPrompt::new(),
            loading,
            bulk_loading: LoadingIndicator::new(),
            key_bindings: KeyBindings::new(settings.vim_mode),
            pending_page_loads: vec![ticket],
            pending_bulk_select: None,
            pending_open_url: None,
        }
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Get a reference to the selection controller.
    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Get a reference to the table view.
    pub fn table_view(&self) -> &ArtworkTableView {
        &self.table_view
    }

    /// Check if a page load or bulk selection is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading.is_active() || self.bulk_loading.is_active()
    }

    // ========================================================================
    // Pending work for the main loop
    // ========================================================================

    /// Take the page loads that need to be spawned.
    pub fn take_page_loads(&mut self) -> Vec<PageTicket> {
        std::mem::take(&mut self.pending_page_loads)
    }

    /// Take the bulk selection that needs to be spawned.
    pub fn take_bulk_select(&mut self) -> Option<usize> {
        self.pending_bulk_select.take()
    }

    /// Take the URL that needs to be opened.
    pub fn take_open_url(&mut self) -> Option<String> {
        self.pending_open_url.take()
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.quit();
            }
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.handle_tick(),
        }
    }

    /// Apply the result of a background task.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::PageFetched { ticket, result } => {
                if self.controller.finish_page_load(ticket, result) {
                    self.table_view.clamp_cursor(self.controller.artworks().len());
                }
                self.loading.set_active(self.controller.is_loading());
            }
            ApiMessage::BulkSelectFetched {
                requested,
                artworks,
            } => {
                if artworks.len() < requested {
                    warn!(
                        requested,
                        selected = artworks.len(),
                        "Bulk selection came back short"
                    );
                }
                self.controller.apply_bulk_selection(artworks);
                self.prompt.reset();
                self.bulk_loading.stop();
            }
        }
    }

    fn quit(&mut self) {
        self.should_quit = true;
        self.state = AppState::Exiting;
    }

    /// Handle keyboard input events.
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Quit on Ctrl+C (always works)
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.quit();
            return;
        }

        match self.state {
            AppState::Help => {
                if key_event.code == KeyCode::Esc
                    || (key_event.code == KeyCode::Char('q')
                        && key_event.modifiers == KeyModifiers::NONE)
                {
                    self.state = AppState::Table;
                }
            }
            AppState::Table if self.controller.is_count_prompt_open() => {
                self.handle_prompt_key(key_event);
            }
            AppState::Table => {
                if let Some(action) = self.key_bindings.action_for(key_event) {
                    self.handle_table_action(action);
                }
            }
            AppState::Exiting => {}
        }
    }

    /// Handle a key while the select-rows prompt is open.
    fn handle_prompt_key(&mut self, key_event: KeyEvent) {
        match self.prompt.handle_input(key_event) {
            Some(SelectRowsAction::Submit(requested)) => self.submit_bulk_select(requested),
            Some(SelectRowsAction::Cancel) => {
                debug!("Select-rows prompt closed");
                self.controller.close_count_prompt();
                self.prompt.reset();
            }
            None => {}
        }
    }

    /// Queue a bulk selection of the first `requested` artworks.
    fn submit_bulk_select(&mut self, requested: i64) {
        let Some(target) = SelectionController::bulk_target(requested) else {
            debug!(requested, "Ignoring non-positive bulk selection");
            return;
        };

        info!(count = target, "Selecting first artworks");
        self.pending_bulk_select = Some(target);
        self.bulk_loading
            .start_with_message(format!("Selecting {} artworks...", target));
    }

    /// Handle an action on the artwork table.
    fn handle_table_action(&mut self, action: Action) {
        let row_count = self.controller.artworks().len();
        match action {
            Action::CursorDown => self.table_view.cursor_down(row_count),
            Action::CursorUp => self.table_view.cursor_up(),
            Action::ToggleRow => self.controller.toggle_row(self.table_view.cursor()),
            Action::TogglePage => self.controller.toggle_page(),
            Action::Page(nav) => self.navigate(nav),
            Action::SelectRowsPrompt => {
                self.controller.toggle_count_prompt();
                if !self.controller.is_count_prompt_open() {
                    self.prompt.reset();
                }
            }
            Action::OpenInBrowser => {
                if let Some(artwork) = self.controller.artworks().get(self.table_view.cursor()) {
                    debug!(id = artwork.id, "Opening artwork in browser");
                    self.pending_open_url = Some(artwork.web_url());
                }
            }
            Action::Help => self.state = AppState::Help,
            Action::Quit => self.quit(),
        }
    }

    /// Move through the pages, queueing a load when the page changes.
    fn navigate(&mut self, nav: PageNav) {
        if let Some(ticket) = self.controller.navigate(nav) {
            debug!(page = ticket.window.api_page(), "Changing page");
            if nav != PageNav::Reload {
                self.table_view.reset_cursor();
            }
            self.pending_page_loads.push(ticket);
            self.loading.start();
        }
    }

    /// Handle periodic tick events.
    fn handle_tick(&mut self) {
        self.loading.set_active(self.controller.is_loading());
        self.loading.tick();
        self.bulk_loading.tick();
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Footer/help bar
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_content(frame, chunks[1]);
        render_context_help(frame, chunks[2], self.key_context());
    }

    fn key_context(&self) -> KeyContext {
        match self.state {
            AppState::Help => KeyContext::Help,
            _ if self.controller.is_count_prompt_open() => KeyContext::SelectRows,
            _ => KeyContext::Table,
        }
    }

    /// Render the application header.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("Art Institute of Chicago - Artworks")
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(title, area);
    }

    /// Render the main content area based on current state.
    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.state {
            AppState::Help => self.help_view.render(frame, area),
            AppState::Table | AppState::Exiting => {
                let loading_text = self.loading.text();
                let table_area =
                    self.table_view
                        .render(frame, area, &self.controller, &loading_text);

                if self.controller.is_count_prompt_open() {
                    let busy = self.bulk_loading.text();
                    let busy = (!busy.is_empty()).then_some(busy.as_str());
                    self.prompt.render(frame, table_area, busy);
                }
            }
        }
    }
}
