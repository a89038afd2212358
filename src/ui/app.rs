//! Application host: terminal setup, the event loop, and navigation between
//! the tasks screen and destinations owned elsewhere.

use crate::config::Config;
use crate::icons::IconService;
use crate::navigation::Destination;
use crate::store::TaskStore;
use crate::ui::components::{DestinationPlaceholder, StatusBar};
use crate::ui::core::{Action, Component, EventHandler, EventType, Lifecycle};
use crate::ui::layout::LayoutManager;
use crate::ui::screens::TasksScreen;
use crate::ui::theme::Theme;
use crate::view_model::LocalTasksViewModel;
use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Duration;

pub struct App {
    screen: TasksScreen<LocalTasksViewModel>,
    navigation_rx: mpsc::UnboundedReceiver<Destination>,
    // None while the task list itself is shown
    current: Option<Destination>,
    has_focus: bool,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(view_model: Arc<LocalTasksViewModel>, title: impl Into<String>, theme: Theme) -> Self {
        let (tx, navigation_rx) = mpsc::unbounded_channel();
        let open_screen = move |destination: Destination| {
            if tx.send(destination).is_err() {
                warn!("Navigation request dropped, host is gone");
            }
        };

        Self {
            screen: TasksScreen::new(view_model, open_screen, title, theme.clone()),
            navigation_rx,
            current: None,
            has_focus: true,
            should_quit: false,
            theme,
        }
    }

    /// Bring the tasks screen to the started state.
    pub fn start(&mut self) {
        self.sync_lifecycle();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_destination(&self) -> Option<&Destination> {
        self.current.as_ref()
    }

    pub fn screen(&self) -> &TasksScreen<LocalTasksViewModel> {
        &self.screen
    }

    pub fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => self.handle_key(key),
            EventType::FocusGained => self.has_focus = true,
            EventType::FocusLost => self.has_focus = false,
            EventType::Tick => {
                self.screen.tick();
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }

        self.drain_navigation();
        self.sync_lifecycle();
    }

    pub fn render(&mut self, f: &mut Frame) {
        let chunks = LayoutManager::main_layout(f.area());

        self.screen.render(f, chunks[0]);

        let route = self.current.as_ref().map(Destination::route);
        if let Some(route) = route.as_deref() {
            DestinationPlaceholder::new(route).render(f, chunks[0], &self.theme);
        }
        StatusBar::render(f, chunks[1], route.as_deref());
    }

    pub fn dispose(&mut self) {
        self.screen.dispose();
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let action = match self.handle_global_key(key) {
            Action::None if self.current.is_none() => {
                let action = self.screen.handle_key_events(key);
                self.screen.update(action)
            }
            action => action,
        };
        self.apply(action);
    }

    /// Handle keyboard shortcuts that aren't screen-specific
    fn handle_global_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Esc if self.current.is_some() => Action::Back,
            _ => Action::None,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("Quitting");
                self.should_quit = true;
            }
            Action::Back => {
                if let Some(destination) = self.current.take() {
                    info!("Leaving {destination}");
                }
            }
            _ => {}
        }
    }

    fn drain_navigation(&mut self) {
        while let Ok(destination) = self.navigation_rx.try_recv() {
            self.navigate(destination);
        }
    }

    fn navigate(&mut self, destination: Destination) {
        info!("Navigating to {destination}");
        self.current = Some(destination);
    }

    fn sync_lifecycle(&mut self) {
        let visible = self.current.is_none() && self.has_focus;
        match (visible, self.screen.lifecycle()) {
            (true, Lifecycle::Initialized | Lifecycle::Stopped) => self.screen.on_start(),
            (false, Lifecycle::Started) => self.screen.on_stop(),
            _ => {}
        }
    }
}

/// Run the main TUI application
pub async fn run_app(config: &Config, store: TaskStore) -> Result<()> {
    let view_model = Arc::new(LocalTasksViewModel::new(store, config.tasks.show_edit_option));
    let theme = Theme::new(IconService::new(config.ui.icon_theme));
    let mut app = App::new(view_model, config.ui.title.clone(), theme);
    let mut events = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &mut events).await;
    app.dispose();

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    app.start();

    loop {
        terminal.draw(|f| app.render(f))?;

        let event = events.next_event().await?;
        app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
