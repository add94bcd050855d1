use chrono::{DateTime, Local};

use super::palette::Palette;
use super::util::{max_scroll, scroll_down, scroll_to_bottom, scroll_up};
use crate::loader::{LoadOutcome, ViewState};

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) show_help: bool,
    pub(crate) status_message: String,
    pub(crate) api_url: String,

    pub(crate) state: ViewState,
    pub(crate) palette: Palette,
    pub(crate) loading: bool,
    pub(crate) last_loaded: Option<DateTime<Local>>,

    // Chart list
    pub(crate) scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_charts: usize,
}

impl App {
    pub(crate) fn new(api_url: impl Into<String>) -> Self {
        Self {
            running: true,
            show_help: false,
            status_message: String::new(),
            api_url: api_url.into(),

            state: ViewState::default(),
            palette: Palette::default(),
            loading: false,
            last_loaded: None,

            scroll: 0,

            visible_charts: 1,
        }
    }

    pub(crate) fn begin_load(&mut self) {
        self.loading = true;
        self.set_status("Loading expenditures…");
    }

    /// Commit a finished load. Failures were already logged by the loader
    /// and are not surfaced here.
    pub(crate) fn apply_load(&mut self, outcome: LoadOutcome) {
        self.loading = false;
        self.state.apply(outcome);
        self.palette.assign(self.state.series().categories());
        self.last_loaded = Some(Local::now());

        let months = self.state.series().len();
        self.scroll = self.scroll.min(max_scroll(months, self.visible_charts));
        self.set_status(format!(
            "Loaded {months} month{}",
            if months == 1 { "" } else { "s" }
        ));
    }

    /// The load task went away without a result.
    pub(crate) fn abandon_load(&mut self) {
        self.loading = false;
        self.status_message.clear();
    }

    pub(crate) fn month_count(&self) -> usize {
        self.state.series().len()
    }

    pub(crate) fn scroll_down(&mut self) {
        let len = self.month_count();
        scroll_down(&mut self.scroll, len, self.visible_charts);
    }

    pub(crate) fn scroll_up(&mut self) {
        scroll_up(&mut self.scroll);
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub(crate) fn scroll_to_bottom(&mut self) {
        let len = self.month_count();
        scroll_to_bottom(&mut self.scroll, len, self.visible_charts);
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
