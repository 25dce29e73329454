use std::io;
use strum::IntoEnumIterator;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::{ListState, TableState},
};
use tracing::info;

use crate::{
    api::MarketData,
    app::{Dashboard, ui},
    models::{ApiProvider, DashboardReport, DashboardRequest, Lookback},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Symbols,
    Lookback,
}

/// What the event loop must do after a key in normal mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Refresh,
    Quit,
}

impl InputField {
    fn toggle(self) -> Self {
        match self {
            InputField::Symbols => InputField::Lookback,
            InputField::Lookback => InputField::Symbols,
        }
    }
}

pub struct App {
    pub(crate) dashboard: Dashboard<MarketData>,
    pub(crate) symbols_input: String,
    pub(crate) lookback_input: String,
    pub(crate) input_mode: InputMode,
    pub(crate) focus: InputField,
    pub(crate) show_table: bool,
    pub(crate) show_line_chart: bool,
    pub(crate) show_bar_chart: bool,
    pub(crate) report: Option<DashboardReport>,
    pub(crate) table_state: TableState,
    pub(crate) popup_message: Option<String>,
    pub(crate) error_popup: Option<String>,
    pub(crate) show_api_popup: bool,
    pub(crate) default_api_state: ListState,
}

impl App {
    pub fn new(dashboard: Dashboard<MarketData>, symbols: &str, lookback: &str) -> Self {
        let mut default_api_list_state = ListState::default();
        let selected = ApiProvider::iter()
            .position(|api| api == dashboard.provider().api())
            .unwrap_or(0);
        default_api_list_state.select(Some(selected));
        Self {
            dashboard,
            symbols_input: symbols.to_string(),
            lookback_input: lookback.to_string(),
            input_mode: InputMode::Normal,
            focus: InputField::Symbols,
            show_table: true,
            show_line_chart: true,
            show_bar_chart: true,
            report: None,
            table_state: TableState::default(),
            popup_message: None,
            error_popup: None,
            show_api_popup: false,
            default_api_state: default_api_list_state,
        }
    }

    pub fn request(&self) -> (DashboardRequest, Option<String>) {
        DashboardRequest::from_inputs(&self.symbols_input, &self.lookback_input)
    }

    pub fn clear_inputs(&mut self) {
        self.symbols_input.clear();
        self.lookback_input = Lookback::DEFAULT.to_string();
        self.table_state.select(None);
    }

    pub fn select_api(&mut self, api: ApiProvider) {
        info!(api = api.to_str(), "switching price provider");
        self.dashboard.set_provider(MarketData::new(api));
    }

    fn show_popup(&mut self, message: &str) {
        self.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.popup_message = None;
    }

    fn show_error_popup(&mut self, message: &str) {
        self.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.error_popup = None;
    }

    pub async fn refresh(&mut self) {
        let (request, notice) = self.request();
        let mut report = self.dashboard.run(&request).await;
        if let Some(notice) = notice {
            report.prepend_notice(notice);
        }

        if !request.symbols().is_empty() && report.rows().iter().all(|row| row.window().is_empty())
        {
            self.show_error_popup("No price data available for the selected symbols.");
        }
        self.table_state.select(None);
        self.report = Some(report);
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| ui::render(frame, self))?;
        Ok(())
    }

    async fn refresh_with_popup<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.show_popup("Fetching prices...");
        self.draw(terminal)?;

        self.refresh().await;

        self.clear_popup();
        self.draw(terminal)
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.refresh_with_popup(terminal).await?;

        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                if self.error_popup.is_some() {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                        self.clear_error_popup();
                    }
                    continue;
                }

                if self.show_api_popup {
                    if self.handle_api_popup_key(key)? {
                        self.refresh_with_popup(terminal).await?;
                    }
                    continue;
                }

                match self.input_mode {
                    InputMode::Editing => {
                        if self.handle_editing_key(key) {
                            self.refresh_with_popup(terminal).await?;
                        }
                    }
                    InputMode::Normal => match self.handle_normal_key(key) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Refresh => self.refresh_with_popup(terminal).await?,
                        KeyAction::None => {}
                    },
                }
            }
        }
    }

    pub(crate) fn handle_normal_key(&mut self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('q') => return KeyAction::Quit,
            KeyCode::Char('s') => {
                self.focus = InputField::Symbols;
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Char('l') => {
                self.focus = InputField::Lookback;
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Char('1') | KeyCode::F(1) => self.show_table = !self.show_table,
            KeyCode::Char('2') | KeyCode::F(2) => self.show_line_chart = !self.show_line_chart,
            KeyCode::Char('3') | KeyCode::F(3) => self.show_bar_chart = !self.show_bar_chart,
            KeyCode::Char('r') | KeyCode::F(5) => return KeyAction::Refresh,
            KeyCode::Char('c') | KeyCode::F(6) => {
                self.clear_inputs();
                return KeyAction::Refresh;
            }
            KeyCode::Char('p') | KeyCode::F(8) => {
                self.table_state.select(None);
                self.show_api_popup = true;
            }
            KeyCode::Esc => self.table_state.select(None),
            KeyCode::Down => self.select_next_row(),
            KeyCode::Up => self.select_previous_row(),
            _ => {}
        }

        KeyAction::None
    }

    /// Returns true when the inputs were applied and the report must be rebuilt.
    pub(crate) fn handle_editing_key(&mut self, key: KeyEvent) -> bool {
        let field = match self.focus {
            InputField::Symbols => &mut self.symbols_input,
            InputField::Lookback => &mut self.lookback_input,
        };

        match key.code {
            KeyCode::Char(c) => field.push(c),
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                return true;
            }
            _ => {}
        }

        false
    }

    /// Returns true when a new provider was chosen.
    pub(crate) fn handle_api_popup_key(&mut self, key: KeyEvent) -> Result<bool> {
        let count = ApiProvider::iter().len();
        match key.code {
            KeyCode::Esc => self.show_api_popup = false,
            KeyCode::Down => {
                let i = match self.default_api_state.selected() {
                    Some(i) if i < count - 1 => i + 1,
                    _ => 0,
                };
                self.default_api_state.select(Some(i));
            }
            KeyCode::Up => {
                let i = match self.default_api_state.selected() {
                    Some(0) | None => count - 1,
                    Some(i) => i - 1,
                };
                self.default_api_state.select(Some(i));
            }
            KeyCode::Enter => {
                if let Some(i) = self.default_api_state.selected() {
                    let api = ApiProvider::iter()
                        .nth(i)
                        .with_context(|| "Cannot select")?;
                    self.show_api_popup = false;
                    if api != self.dashboard.provider().api() {
                        self.select_api(api);
                        return Ok(true);
                    }
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn row_count(&self) -> usize {
        self.report.as_ref().map_or(0, |report| report.rows().len())
    }

    fn select_next_row(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i < rows - 1 => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn select_previous_row(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => rows - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }
}
