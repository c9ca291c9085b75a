pub mod commands;
pub mod events;
pub mod router;
pub mod state;
pub mod views;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::future::Future;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::api::TopicsClient;
use crate::config::Config;
use crate::ui::UI;
use commands::Command;
use events::{ApiEvent, AppEvent, InputEvent};
use router::Route;
use state::{AppMode, AppState};

pub struct App {
    state: AppState,
    ui: UI,
    client: TopicsClient,
    config: Config,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let client = TopicsClient::new(&config.api)?;

        info!("Using Help Center API at {}", client.topics_url());

        Ok(Self {
            state: AppState::new(),
            ui: UI::new(),
            client,
            config,
            event_rx,
            event_tx,
            should_quit: false,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn navigate(&mut self, path: &str) {
        self.go_to(Route::resolve(path));
    }

    /// Entering the route already on screen is a no-op; use `reload` to refetch.
    pub fn go_to(&mut self, route: Route) {
        if self.state.history.last() == Some(&route) {
            debug!("Already at {}", route);
            return;
        }
        info!("Navigating to {}", route);
        self.state.push_history(route.clone());
        self.activate(route);
    }

    pub fn back(&mut self) {
        if self.state.history.len() < 2 || self.submission_in_flight() {
            return;
        }
        self.state.history.pop();
        if let Some(previous) = self.state.history.last().cloned() {
            info!("Navigating back to {}", previous);
            self.activate(previous);
        }
    }

    pub fn reload(&mut self) {
        if self.submission_in_flight() {
            debug!("Topic submission in flight, not reloading the form");
            return;
        }
        let route = self.state.route.clone();
        info!("Reloading {}", route);
        self.activate(route);
    }

    /// A pending POST would be discarded as stale if the form were re-entered.
    fn submission_in_flight(&self) -> bool {
        self.state.route == Route::CreateTopic && self.state.create_topic.submitting
    }

    fn activate(&mut self, route: Route) {
        let activation = self.state.enter(route.clone());

        match route {
            Route::Home => {}
            Route::TopicList => {
                self.state.topic_list.begin();
                let client = self.client.clone();
                self.spawn_api(async move {
                    ApiEvent::TopicsLoaded {
                        activation,
                        result: client.list_topics().await,
                    }
                });
            }
            Route::TopicDetail { id } => {
                self.state.topic_detail.begin(&id);
                let client = self.client.clone();
                self.spawn_api(async move {
                    ApiEvent::TopicLoaded {
                        activation,
                        result: client.get_topic(&id).await,
                    }
                });
            }
            Route::CreateTopic => self.state.create_topic.begin(),
        }
    }

    /// Posts the create form; invalid or duplicate submissions never reach the network.
    pub fn submit_form(&mut self) {
        if self.state.route != Route::CreateTopic {
            return;
        }

        let Some(body) = self.state.create_topic.submit() else {
            if let Some(message) = &self.state.create_topic.error {
                warn!("Topic form not submitted: {}", message);
            }
            return;
        };

        let activation = self.state.activation;
        let client = self.client.clone();
        self.spawn_api(async move {
            ApiEvent::TopicCreated {
                activation,
                result: client.create_topic(&body).await,
            }
        });
    }

    fn schedule_redirect(&self, activation: u64) {
        let delay = self.config.ui.redirect_delay();
        debug!("Returning to topic list in {:?}", delay);
        self.spawn_api(async move {
            tokio::time::sleep(delay).await;
            ApiEvent::RedirectDue { activation }
        });
    }

    fn spawn_api<F>(&self, work: F)
    where
        F: Future<Output = ApiEvent> + Send + 'static,
    {
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            if event_tx.send(AppEvent::Api(work.await)).is_err() {
                debug!("Event loop closed, dropping API result");
            }
        });
    }

    /// Waits for one event and applies it. Returns `false` once the channel is closed.
    pub async fn process_next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Spawn input handler task
        self.spawn_input_handler();
        let result = self.event_loop(&mut terminal).await;

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            // Draw UI
            terminal.draw(|f| self.ui.render(f, &self.state))?;

            // Handle events
            while let Ok(event) = self.event_rx.try_recv() {
                self.handle_event(event);
            }

            // Small delay to prevent busy waiting
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
        Ok(())
    }

    fn spawn_input_handler(&self) {
        let event_tx = self.event_tx.clone();
        let tick_rate = self.config.ui.tick_rate();

        tokio::task::spawn_blocking(move || {
            let mut last_tick = Instant::now();

            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                if event::poll(timeout).unwrap_or(false) {
                    let input = match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Some(InputEvent::Key(key)),
                        Ok(Event::Mouse(mouse)) => Some(InputEvent::Mouse(mouse)),
                        Ok(Event::Resize(w, h)) => Some(InputEvent::Resize(w, h)),
                        Ok(_) => None,
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            None
                        }
                    };
                    if let Some(input) = input {
                        if event_tx.send(AppEvent::Input(input)).is_err() {
                            break;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(input_event) => self.handle_input_event(input_event),
            AppEvent::Tick => {
                self.state.tick = self.state.tick.wrapping_add(1);
            }
            AppEvent::Api(api_event) => self.handle_api_event(api_event),
        }
    }

    fn handle_api_event(&mut self, event: ApiEvent) {
        let activation = event.activation();
        if !self.state.is_current(activation) {
            warn!(
                "Discarding stale result from activation {} (current is {})",
                activation, self.state.activation
            );
            return;
        }

        match event {
            ApiEvent::TopicsLoaded { result, .. } => {
                self.state.topic_list.finish(result);
                let message = match self.state.topic_list.error() {
                    Some(error) => error.to_string(),
                    None => format!("Loaded {} topics", self.state.topic_list.topics().len()),
                };
                self.state.set_status_message(&message);
            }
            ApiEvent::TopicLoaded { result, .. } => {
                self.state.topic_detail.finish(result);
                if let Some(message) = self.state.topic_detail.state.error().map(str::to_string) {
                    self.state.set_status_message(&message);
                }
            }
            ApiEvent::TopicCreated { result, .. } => {
                self.state.create_topic.finish(result);
                if self.state.create_topic.success {
                    self.state.set_status_message("Topic created successfully");
                    self.schedule_redirect(activation);
                } else if let Some(message) = self.state.create_topic.error.clone() {
                    self.state.set_status_message(&message);
                }
            }
            ApiEvent::RedirectDue { .. } => {
                if self.state.route == Route::CreateTopic {
                    self.go_to(Route::TopicList);
                }
            }
        }
    }

    fn handle_input_event(&mut self, input_event: InputEvent) {
        match input_event {
            InputEvent::Key(key) => {
                debug!("Key pressed: {:?}", key.code);
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    self.should_quit = true;
                    return;
                }
                match self.state.mode {
                    AppMode::Normal => self.handle_normal_mode_key(key),
                    AppMode::Command => self.handle_command_mode_key(key),
                    AppMode::Form => self.handle_form_key(key),
                }
            }
            InputEvent::Mouse(_mouse) => {}
            InputEvent::Resize(w, h) => {
                info!("Terminal resized to {}x{}", w, h);
            }
        }
    }

    fn handle_normal_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char(':') => {
                self.state.mode = AppMode::Command;
                self.state.command_input.clear();
            }
            KeyCode::Tab => self.go_to(self.state.route.next_tab()),
            KeyCode::BackTab => self.go_to(self.state.route.previous_tab()),
            KeyCode::Char('1') => self.go_to(Route::Home),
            KeyCode::Char('2') => self.go_to(Route::TopicList),
            KeyCode::Char('3') | KeyCode::Char('n') => self.go_to(Route::CreateTopic),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Esc | KeyCode::Backspace => self.back(),
            _ => match self.state.route {
                Route::TopicList => self.handle_topic_list_key(key),
                Route::TopicDetail { .. } => self.handle_topic_detail_key(key),
                Route::CreateTopic => {
                    if matches!(key.code, KeyCode::Char('i') | KeyCode::Enter) {
                        self.state.mode = AppMode::Form;
                    }
                }
                Route::Home => {
                    if key.code == KeyCode::Enter {
                        self.go_to(Route::TopicList);
                    }
                }
            },
        }
    }

    fn handle_topic_list_key(&mut self, key: KeyEvent) {
        let list = &mut self.state.topic_list;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => list.move_down(),
            KeyCode::Char('k') | KeyCode::Up => list.move_up(),
            KeyCode::Char('g') => {
                // 'gg' jumps to the top
                if self.state.last_key == Some('g') {
                    list.go_to_top();
                    self.state.last_key = None;
                } else {
                    self.state.last_key = Some('g');
                }
                return;
            }
            KeyCode::Char('G') => list.go_to_bottom(),
            KeyCode::Enter | KeyCode::Char('l') => {
                if let Some(topic) = list.selected() {
                    let id = topic.topic_id.to_string();
                    self.go_to(Route::TopicDetail { id });
                }
            }
            _ => {}
        }
        self.state.last_key = None;
    }

    fn handle_topic_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.topic_detail.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.topic_detail.scroll_up(),
            KeyCode::Char('h') | KeyCode::Left => self.go_to(Route::TopicList),
            _ => {}
        }
    }

    fn handle_command_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.mode = AppMode::Normal;
                self.state.command_input.clear();
            }
            KeyCode::Char(c) => {
                self.state.command_input.push(c);
            }
            KeyCode::Backspace => {
                self.state.command_input.pop();
            }
            KeyCode::Enter => {
                let command = std::mem::take(&mut self.state.command_input);
                self.state.mode = AppMode::Normal;
                self.execute_command(&command);
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.create_topic.form;
        match key.code {
            KeyCode::Esc => {
                self.state.mode = AppMode::Normal;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit_form(),
            KeyCode::Enter => {
                if form.current_field.is_last() {
                    self.submit_form();
                } else {
                    form.next_field();
                }
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.add_char(c),
            _ => {}
        }
    }

    pub fn execute_command(&mut self, input: &str) {
        match Command::parse(input) {
            Command::Go(route) => self.go_to(route),
            Command::Reload => self.reload(),
            Command::Back => self.back(),
            Command::Quit => {
                self.should_quit = true;
            }
            Command::Unknown(msg) => {
                warn!("{}", msg);
                self.state.set_status_message(&msg);
            }
        }
    }
}
