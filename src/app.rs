use crate::router::Route;
use crate::theme::{ColorScheme, Theme};
use crate::types::{AppEvent, FetchRequest, SpecSummary};
use std::time::{Duration, Instant};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode { Normal, Filter }

/// Load state of the provider list, derived from fetch bookkeeping
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListPhase {
    Loading,   // Request outstanding
    Empty,     // Loaded, nothing to show (includes failed fetches)
    Ready,     // Loaded with at least one provider
}

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct App {
    quit: bool,
    route: Route,
    theme: Theme,

    // Home screen state
    providers: Vec<String>,        // Provider ids exactly as listed by the catalog
    providers_loading: bool,       // True while a providers request is outstanding
    panel_open: bool,              // Provider panel visible (button disabled while true)
    panel_selection: usize,        // Selected row, index into the FILTERED list
    panel_offset: usize,           // List scroll offset (written back by the UI layer)

    // Panel filter state
    filter_query: String,
    input_mode: InputMode,

    // Details screen state
    spec: Option<SpecSummary>,     // Loaded summary for the current provider
    loading_spec: Option<String>,  // Provider id of the in-flight spec request
    details_scroll: u16,
    details_viewport_height: u16,  // Visible description height (set by UI layer)

    fps: u32,
    fps_choices: Vec<u32>,

    // Channel to the fetch worker
    fetch_tx: Option<tokio::sync::mpsc::UnboundedSender<FetchRequest>>,

    spinner_frame: usize,

    // Debug log (for development)
    debug_log: Vec<String>,        // Rolling buffer of debug messages
    debug_visible: bool,           // Toggle debug panel visibility (Ctrl+D)

    // Toast notification state
    toast_message: Option<(String, Instant)>,  // (message, timestamp)
}

impl App {
    pub fn new(
        fps: u32,
        fps_choices: Vec<u32>,
        theme: Theme,
        fetch_tx: Option<tokio::sync::mpsc::UnboundedSender<FetchRequest>>,
    ) -> Self {
        Self {
            quit: false,
            route: Route::Home,
            theme,
            providers: Vec::new(),
            providers_loading: false,
            panel_open: false,
            panel_selection: 0,
            panel_offset: 0,
            filter_query: String::new(),
            input_mode: InputMode::Normal,
            spec: None,
            loading_spec: None,
            details_scroll: 0,
            details_viewport_height: 20,  // Default estimate, updated by UI
            fps, fps_choices,
            fetch_tx,
            spinner_frame: 0,
            debug_log: Vec::new(),
            debug_visible: false,  // Hidden by default
            toast_message: None,
        }
    }

    // ----- getters -----
    pub fn fps(&self)->u32{ self.fps }
    pub fn quit_flag(&self)->bool{ self.quit }
    pub fn route(&self)->&Route { &self.route }
    pub fn theme(&self)->ColorScheme { self.theme.colors() }
    pub fn providers_len(&self)->usize { self.providers.len() }
    pub fn panel_open(&self)->bool{ self.panel_open }
    pub fn panel_selection(&self)->usize{ self.panel_selection }
    pub fn panel_offset(&self)->usize{ self.panel_offset }
    pub fn input_mode(&self)->InputMode { self.input_mode }
    pub fn filter_query(&self)->&str { &self.filter_query }
    pub fn spec(&self)->Option<&SpecSummary> { self.spec.as_ref() }
    pub fn loading_spec(&self)->Option<&str> { self.loading_spec.as_deref() }
    pub fn details_scroll(&self)->u16 { self.details_scroll }
    pub fn debug_log(&self)->&[String] { &self.debug_log }
    pub fn debug_visible(&self)->bool { self.debug_visible }

    /// Current phase of the provider list
    pub fn list_phase(&self) -> ListPhase {
        if self.providers_loading {
            ListPhase::Loading
        } else if self.providers.is_empty() {
            ListPhase::Empty
        } else {
            ListPhase::Ready
        }
    }

    /// Provider ids visible in the panel (case-insensitive substring filter)
    pub fn filtered_providers(&self) -> Vec<String> {
        if self.filter_query.is_empty() {
            return self.providers.clone();
        }
        let needle = self.filter_query.to_lowercase();
        self.providers
            .iter()
            .filter(|id| id.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// True when the filter bar row is visible (home screen only)
    pub fn filter_expanded(&self) -> bool {
        matches!(self.route, Route::Home)
            && (self.input_mode == InputMode::Filter || !self.filter_query.is_empty())
    }

    /// True when the debug panel row is visible
    pub fn debug_panel_visible(&self) -> bool {
        self.debug_visible && !self.debug_log.is_empty()
    }

    /// Set the visible description height (called from UI layer)
    pub fn set_details_viewport_height(&mut self, height: u16) {
        self.details_viewport_height = height;
    }

    /// Record the panel list offset after render (called from UI layer)
    pub fn set_panel_offset(&mut self, offset: usize) {
        self.panel_offset = offset;
    }

    /// Show a toast notification for 2 seconds
    pub fn show_toast(&mut self, msg: String) {
        self.toast_message = Some((msg, Instant::now()));
    }

    /// Get current toast message if still active (visible for 2 seconds)
    pub fn toast_message(&self) -> Option<&str> {
        const TOAST_DURATION: Duration = Duration::from_secs(2);
        self.toast_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed() < TOAST_DURATION {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }

    /// Advance the spinner while any fetch is outstanding
    pub fn tick_spinner(&mut self) {
        if self.providers_loading || self.loading_spec.is_some() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    // ----- knobs -----
    pub fn cycle_fps(&mut self){
        if self.fps_choices.is_empty() { return; }
        let mut idx = self.fps_choices.iter().position(|&v| v==self.fps).unwrap_or(0);
        idx = (idx+1)%self.fps_choices.len();
        self.fps = self.fps_choices[idx];
    }

    pub fn log_debug(&mut self, msg: String) {
        const MAX_LOG_ENTRIES: usize = 50;

        log::debug!("{msg}");
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        self.debug_log.push(format!("[{timestamp}] {msg}"));
        if self.debug_log.len() > MAX_LOG_ENTRIES {
            self.debug_log.remove(0);
        }
    }

    /// Toggle debug panel visibility (Ctrl+D)
    pub fn toggle_debug_panel(&mut self) {
        self.debug_visible = !self.debug_visible;
        self.log_debug(format!(
            "Debug panel: {}",
            if self.debug_visible { "visible" } else { "hidden" }
        ));
    }

    // ----- routing -----
    /// Apply a parsed route (startup argument or in-app navigation)
    pub fn apply_route(&mut self, route: &Route) {
        match route {
            Route::Home => self.go_home(),
            Route::ApiDetails { provider } => self.open_details(provider.clone()),
        }
    }

    /// Return to the home screen. Details state is dropped wholesale and the
    /// provider list is fetched fresh, so every visit starts from scratch.
    pub fn go_home(&mut self) {
        self.route = Route::Home;
        self.spec = None;
        self.loading_spec = None;
        self.panel_open = false;
        self.panel_selection = 0;
        self.panel_offset = 0;
        self.filter_query.clear();
        self.input_mode = InputMode::Normal;
        self.details_scroll = 0;
        self.request_providers();
    }

    fn request_providers(&mut self) {
        self.providers.clear();
        self.providers_loading = true;
        let tx = self.fetch_tx.clone();
        if let Some(tx) = tx {
            if let Err(e) = tx.send(FetchRequest::Providers) {
                self.log_debug(format!("Failed to send providers request: {e}"));
                self.providers_loading = false;
            }
        } else {
            self.providers_loading = false;
        }
    }

    /// Navigate to the details screen for one provider
    pub fn open_details(&mut self, provider: String) {
        self.log_debug(format!("Open details for {provider}"));
        self.route = Route::ApiDetails { provider };
        // Mouse activation can land here mid filter entry
        self.input_mode = InputMode::Normal;
        self.details_scroll = 0;
        self.maybe_request_spec();
    }

    /// Request the spec document unless a summary is already loaded or a
    /// request is already in flight.
    ///
    /// The guard looks only at whether a summary exists, not at which
    /// provider it belongs to. Navigation always passes through the home
    /// screen, which clears both fields, so a fresh details visit always
    /// fetches.
    fn maybe_request_spec(&mut self) {
        if self.spec.is_some() || self.loading_spec.is_some() {
            return;
        }
        let provider = match &self.route {
            Route::ApiDetails { provider } => provider.clone(),
            Route::Home => return,
        };
        self.loading_spec = Some(provider.clone());
        let tx = self.fetch_tx.clone();
        if let Some(tx) = tx {
            if let Err(e) = tx.send(FetchRequest::Spec { provider }) {
                self.log_debug(format!("Failed to send spec request: {e}"));
                self.loading_spec = None;
            }
        } else {
            self.loading_spec = None;
        }
    }

    // ----- provider panel -----
    /// Open the provider panel. The button is a no-op while the panel is
    /// already open and until the list is loaded with at least one provider.
    pub fn press_show_providers(&mut self) {
        if self.panel_open || self.list_phase() != ListPhase::Ready {
            return;
        }
        self.panel_open = true;
        self.panel_selection = 0;
        self.panel_offset = 0;
        self.log_debug("Provider panel opened".into());
    }

    /// Close the provider panel (outside click or Esc)
    pub fn close_panel(&mut self) {
        if self.panel_open {
            self.panel_open = false;
            self.filter_query.clear();
            self.input_mode = InputMode::Normal;
            self.log_debug("Provider panel closed".into());
        }
    }

    pub fn panel_up(&mut self) {
        if self.panel_selection > 0 {
            self.panel_selection -= 1;
        }
    }

    pub fn panel_down(&mut self) {
        let len = self.filtered_providers().len();
        if self.panel_selection + 1 < len {
            self.panel_selection += 1;
        }
    }

    /// Open details for the panel row at `idx` (index into the filtered list)
    pub fn activate_panel_index(&mut self, idx: usize) {
        let filtered = self.filtered_providers();
        if let Some(id) = filtered.get(idx) {
            let id = id.clone();
            self.panel_selection = idx;
            self.open_details(id);
        }
    }

    pub fn activate_selected(&mut self) {
        self.activate_panel_index(self.panel_selection);
    }

    // ----- filter methods -----
    pub fn start_filter(&mut self) {
        if self.panel_open {
            self.input_mode = InputMode::Filter;
        }
    }

    pub fn apply_filter(&mut self) {
        self.input_mode = InputMode::Normal;
        self.clamp_panel_selection();
    }

    pub fn clear_filter(&mut self) {
        self.filter_query.clear();
        self.input_mode = InputMode::Normal;
        self.clamp_panel_selection();
    }

    pub fn filter_add_char(&mut self, ch: char) {
        self.filter_query.push(ch);
        self.clamp_panel_selection();
    }

    pub fn filter_backspace(&mut self) {
        self.filter_query.pop();
        self.clamp_panel_selection();
    }

    fn clamp_panel_selection(&mut self) {
        let len = self.filtered_providers().len();
        if self.panel_selection >= len {
            self.panel_selection = len.saturating_sub(1);
        }
    }

    // ----- details scrolling -----
    pub fn scroll_details_by(&mut self, delta: i32) {
        let cur = self.details_scroll as i32;
        let max_scroll = self.details_max_scroll();
        let next = (cur + delta).max(0).min(max_scroll as i32);
        self.details_scroll = next as u16;
    }

    pub fn scroll_details_home(&mut self) {
        self.details_scroll = 0;
    }

    pub fn scroll_details_end(&mut self) {
        self.details_scroll = self.details_max_scroll();
    }

    /// Upper scroll bound from the raw description line count. Wrapped long
    /// lines can exceed this, which just means End stops a little early.
    fn details_max_scroll(&self) -> u16 {
        let content_lines = self
            .spec
            .as_ref()
            .map(|s| u16::try_from(s.description.lines().count()).unwrap_or(u16::MAX))
            .unwrap_or(0);
        content_lines.saturating_sub(self.details_viewport_height)
    }

    // ----- events -----
    pub fn on_event(&mut self, ev: AppEvent) {
        match ev {
            AppEvent::Quit => self.quit = true,
            AppEvent::ProvidersLoaded(ids) => {
                if !self.providers_loading {
                    self.log_debug("Stale providers response dropped".into());
                    return;
                }
                self.providers_loading = false;
                self.log_debug(format!("Providers loaded ({} ids)", ids.len()));
                self.providers = ids;
                self.panel_selection = 0;
                self.panel_offset = 0;
            }
            AppEvent::SpecLoaded { provider, summary } => {
                if self.loading_spec.as_deref() != Some(provider.as_str()) {
                    self.log_debug(format!("Stale spec response for {provider} dropped"));
                    return;
                }
                self.loading_spec = None;
                match summary {
                    Some(s) => {
                        self.log_debug(format!(
                            "Spec loaded for {provider} (version {})",
                            s.version
                        ));
                        self.spec = Some(s);
                    }
                    None => {
                        // Failed or unusable fetch: the screen keeps its
                        // loading display; Esc returns home
                        self.log_debug(format!("No spec available for {provider}"));
                    }
                }
            }
        }
    }
}
