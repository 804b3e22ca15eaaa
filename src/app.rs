//! Application state and core logic for the portal TUI.
//!
//! The `App` struct owns every piece of view-model state: the journey
//! orchestration loop, the trade-name check, the chat dock, and the
//! license-compatibility evaluation. Key events and clock ticks arrive
//! here and fan out to the reducers.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::chat::ChatDock;
use crate::cli::CliConfig;
use crate::compat::{
    build_request, CompatClient, CompatError, CompatibilityResponse, Evaluation,
};
use crate::journey::JourneyState;
use crate::models::InputMode;
use crate::registration::TradeNameCheck;
use crate::store::Store;

/// Stage whose focus view triggers the compatibility evaluation
pub const LICENSING_STAGE_ID: &str = "business-licensing";

/// Stage whose focus view hosts the trade-name check
pub const REGISTRATION_STAGE_ID: &str = "business-registration";

/// Pulse indicators flip on this cadence
const ANIMATION_TICK_INTERVAL: Duration = Duration::from_millis(500);

type EvaluationResult = (u64, Result<CompatibilityResponse, CompatError>);

/// Application state
pub struct App {
    pub journey: JourneyState,
    pub registration: TradeNameCheck,
    pub chat: ChatDock,
    pub evaluation: Evaluation,
    pub store: Store,
    pub input_mode: InputMode,
    /// Cursor into the to-do bank
    pub todo_cursor: usize,
    // Animation state
    pub animation_tick: u64,
    last_animation_update: Instant,
    pub should_quit: bool,
    client: Option<CompatClient>,
    results_tx: UnboundedSender<EvaluationResult>,
    results_rx: UnboundedReceiver<EvaluationResult>,
    /// Last stage the evaluation wiring saw, to detect selection changes
    last_selected_stage: &'static str,
}

impl App {
    pub fn new(config: &CliConfig, store: Store, now: Instant) -> Self {
        let journey = JourneyState::new(now);
        let mut chat = ChatDock::new(config.category, &store);
        let mut store = store;
        if config.chat_open {
            chat.open_dock(&mut store);
        }
        if let Some(message) = &config.initial_message {
            chat.send(message.clone());
        }

        let client = config
            .api_base
            .as_deref()
            .and_then(|base| CompatClient::new(base).ok());
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let last_selected_stage = journey.selected_stage_id;

        Self {
            journey,
            registration: TradeNameCheck::new(now),
            chat,
            evaluation: Evaluation::new(),
            store,
            input_mode: InputMode::Normal,
            todo_cursor: 0,
            animation_tick: 0,
            last_animation_update: now,
            should_quit: false,
            client,
            results_tx,
            results_rx,
            last_selected_stage,
        }
    }

    /// Apply a key event according to the modal input mode
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.on_normal_key(key, now),
            InputMode::TradeName => self.on_trade_name_key(key, now),
            InputMode::Chat => self.on_chat_key(key),
        }
    }

    fn on_normal_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => {
                self.journey.select_adjacent(-1);
                self.sync_evaluation();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.journey.select_adjacent(1);
                self.sync_evaluation();
            }
            KeyCode::Char('r') => {
                self.journey.resume_automation(now);
                self.sync_evaluation();
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_todo_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_todo_cursor(-1),
            KeyCode::Char(' ') => {
                if let Some(action) = self.journey.actions.get(self.todo_cursor) {
                    let id = action.id;
                    self.journey.toggle_action(id);
                }
            }
            KeyCode::Char('c') => {
                if self.chat.open {
                    self.chat.close_dock(&mut self.store);
                } else {
                    self.chat.open_dock(&mut self.store);
                }
            }
            KeyCode::Char('i') => {
                if self.chat.open {
                    self.input_mode = InputMode::Chat;
                }
            }
            KeyCode::Char('b') => {
                if self.chat.open {
                    self.chat.cycle_breakout();
                }
            }
            KeyCode::Char('n') => {
                if self.journey.selected_stage_id == REGISTRATION_STAGE_ID {
                    self.input_mode = InputMode::TradeName;
                }
            }
            KeyCode::Esc => {
                if self.chat.breakout.is_some() {
                    self.chat.close_breakout();
                } else if self.chat.open {
                    self.chat.close_dock(&mut self.store);
                }
            }
            _ => {}
        }
    }

    fn on_trade_name_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.registration.submit(now);
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => self.registration.pop_char(),
            KeyCode::Char(c) => self.registration.push_char(c),
            _ => {}
        }
    }

    fn on_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.chat.send_input();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.chat.input.pop();
            }
            KeyCode::Char(c) => self.chat.input.push(c),
            _ => {}
        }
    }

    fn move_todo_cursor(&mut self, offset: isize) {
        let len = self.journey.actions.len();
        if len == 0 {
            return;
        }
        let next = self.todo_cursor as isize + offset;
        self.todo_cursor = next.clamp(0, len as isize - 1) as usize;
    }

    /// Advance the clock: animation pulse, journey automation, trade-name
    /// check, and any finished evaluation results.
    pub fn on_tick(&mut self, now: Instant) {
        if now.duration_since(self.last_animation_update) >= ANIMATION_TICK_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = now;
        }

        self.journey.tick(now);
        self.registration.tick(now);

        while let Ok((generation, result)) = self.results_rx.try_recv() {
            self.evaluation.accept(generation, result);
        }

        self.sync_evaluation();
    }

    /// Start or cancel the compatibility evaluation when the selected
    /// stage changes. Entering the licensing focus issues exactly one
    /// request; leaving it aborts whatever is in flight.
    fn sync_evaluation(&mut self) {
        let selected = self.journey.selected_stage_id;
        if selected == self.last_selected_stage {
            return;
        }
        let left_licensing = self.last_selected_stage == LICENSING_STAGE_ID;
        self.last_selected_stage = selected;

        if selected == LICENSING_STAGE_ID {
            self.start_evaluation();
        } else if left_licensing {
            self.evaluation.cancel();
        }
    }

    fn start_evaluation(&mut self) {
        let generation = self.evaluation.begin();
        let Some(client) = self.client.clone() else {
            self.evaluation.accept(
                generation,
                Err(CompatError::Request(
                    "no trade-license API base configured".to_string(),
                )),
            );
            return;
        };

        let request = build_request(&self.registration.evaluation_name());
        let tx = self.results_tx.clone();
        let handle = tokio::spawn(async move {
            let result = client.validate(&request).await;
            let _ = tx.send((generation, result));
        });
        self.evaluation.attach(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::{EvaluationOutcome, UNAVAILABLE_MESSAGE};
    use crossterm::event::KeyEvent;

    fn offline_config() -> CliConfig {
        CliConfig {
            chat_open: false,
            category: "restaurants",
            initial_message: None,
            api_base: None,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn new_app() -> App {
        App::new(&offline_config(), Store::ephemeral(), Instant::now())
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        let mut app = new_app();
        app.on_key(key(KeyCode::Char('q')), now);
        assert!(app.should_quit);

        let mut app = new_app();
        app.on_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now,
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_selecting_licensing_offline_fails_with_single_message() {
        let now = Instant::now();
        let mut app = new_app();

        app.journey.select_stage(LICENSING_STAGE_ID);
        app.on_tick(now);

        assert_eq!(
            app.evaluation.outcome,
            EvaluationOutcome::Failed(UNAVAILABLE_MESSAGE.to_string())
        );
        assert!(app.evaluation.last_error.is_some());
    }

    #[test]
    fn test_leaving_licensing_clears_failed_to_idle_on_next_entry_only() {
        let now = Instant::now();
        let mut app = new_app();

        app.journey.select_stage(LICENSING_STAGE_ID);
        app.on_tick(now);
        app.journey.select_stage(REGISTRATION_STAGE_ID);
        app.on_tick(now);

        // Failed outcome persists as prior state is only cleared while
        // loading; re-entering restarts the evaluation
        app.journey.select_stage(LICENSING_STAGE_ID);
        app.on_tick(now);
        assert!(matches!(app.evaluation.outcome, EvaluationOutcome::Failed(_)));
    }

    #[test]
    fn test_todo_cursor_clamps_and_toggles() {
        let now = Instant::now();
        let mut app = new_app();
        let count = app.journey.actions.len();
        assert!(count > 0);

        for _ in 0..count + 5 {
            app.on_key(key(KeyCode::Down), now);
        }
        assert_eq!(app.todo_cursor, count - 1);

        let id = app.journey.actions[app.todo_cursor].id;
        let before = app.journey.is_action_complete(id);
        app.on_key(key(KeyCode::Char(' ')), now);
        assert_eq!(app.journey.is_action_complete(id), !before);
        app.on_key(key(KeyCode::Char(' ')), now);
        assert_eq!(app.journey.is_action_complete(id), before);
    }

    #[test]
    fn test_trade_name_mode_requires_registration_stage() {
        let now = Instant::now();
        let mut app = new_app();

        app.journey.select_stage("questionnaire");
        app.on_key(key(KeyCode::Char('n')), now);
        assert_eq!(app.input_mode, InputMode::Normal);

        app.journey.select_stage(REGISTRATION_STAGE_ID);
        app.on_key(key(KeyCode::Char('n')), now);
        assert_eq!(app.input_mode, InputMode::TradeName);

        app.on_key(key(KeyCode::Char('m')), now);
        app.on_key(key(KeyCode::Char('a')), now);
        assert_eq!(app.registration.input, "ma");
        app.on_key(key(KeyCode::Esc), now);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_chat_open_close_and_compose() {
        let now = Instant::now();
        let mut app = new_app();

        app.on_key(key(KeyCode::Char('c')), now);
        assert!(app.chat.open);

        app.on_key(key(KeyCode::Char('i')), now);
        assert_eq!(app.input_mode, InputMode::Chat);
        app.on_key(key(KeyCode::Char('h')), now);
        app.on_key(key(KeyCode::Char('i')), now);
        app.on_key(key(KeyCode::Enter), now);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.chat.messages.len(), 3);

        app.on_key(key(KeyCode::Esc), now);
        assert!(!app.chat.open);
    }

    #[test]
    fn test_breakout_only_while_chat_open() {
        let now = Instant::now();
        let mut app = new_app();

        app.on_key(key(KeyCode::Char('b')), now);
        assert!(app.chat.breakout.is_none());

        app.on_key(key(KeyCode::Char('c')), now);
        app.on_key(key(KeyCode::Char('b')), now);
        assert_eq!(app.chat.breakout, Some(0));

        app.on_key(key(KeyCode::Esc), now);
        assert!(app.chat.breakout.is_none());
        assert!(app.chat.open);
    }

    #[test]
    fn test_config_preopens_chat_and_seeds_message() {
        let config = CliConfig {
            chat_open: true,
            category: "restaurants",
            initial_message: Some("I want a BBQ license".to_string()),
            api_base: None,
        };
        let app = App::new(&config, Store::ephemeral(), Instant::now());
        assert!(app.chat.open);
        // Opener + applicant message + scripted reply
        assert_eq!(app.chat.messages.len(), 3);
    }

    #[test]
    fn test_animation_tick_advances_on_interval() {
        let start = Instant::now();
        let mut app = App::new(&offline_config(), Store::ephemeral(), start);
        assert_eq!(app.animation_tick, 0);

        app.on_tick(start + Duration::from_millis(100));
        assert_eq!(app.animation_tick, 0);
        app.on_tick(start + Duration::from_millis(600));
        assert_eq!(app.animation_tick, 1);
    }
}
