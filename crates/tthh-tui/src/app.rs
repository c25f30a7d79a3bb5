/// Main application struct and event loop
use crate::actions::Action;
use crate::config::TuiConfig;
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::effects::Effects;
use crate::keyboard;
use crate::logger::{self, LogBuffer};
use crate::models::Employee;
use crate::stores::{AppLogsStore, FormStore, UIStore};
use crate::ui::render_layout;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;
use tthh_core::InputConfig;

/// The main application structure following flux architecture
pub struct App {
    /// Dispatcher for sending actions
    dispatcher: Dispatcher,

    /// Store for UI state
    ui_store: UIStore,

    /// Store for the absence form
    form_store: FormStore,

    /// Store for application logs
    app_logs_store: AppLogsStore,

    /// Effects handler for side effects
    effects: Effects,

    poll_interval: Duration,
}

impl App {
    pub fn new(
        input_config: InputConfig,
        tui_config: TuiConfig,
        employee: Employee,
    ) -> (Self, ActionReceiver) {
        let (dispatcher, action_receiver) = Dispatcher::new();

        let log_buffer = match logger::init_buffered_logger(tui_config.max_log_lines) {
            Ok(buffer) => buffer,
            Err(e) => {
                // someone else owns the global logger; the logs tab stays empty
                log::warn!("Logs tab disabled: {}", e);
                LogBuffer::new(tui_config.max_log_lines)
            }
        };

        let ui_store = UIStore::new();
        let form_store = FormStore::new(input_config, employee);
        let app_logs_store = AppLogsStore::new(log_buffer);
        let effects = Effects::new(dispatcher.clone(), form_store.clone());

        (
            Self {
                dispatcher,
                ui_store,
                form_store,
                app_logs_store,
                effects,
                poll_interval: Duration::from_millis(tui_config.poll_interval_ms),
            },
            action_receiver,
        )
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> io::Result<()> {
        log::info!(
            "Absence form started for {}",
            self.form_store.get_state().employee.name
        );

        loop {
            terminal.draw(|frame| {
                render_layout(
                    frame,
                    &self.ui_store,
                    &self.form_store,
                    &self.app_logs_store,
                );
            })?;

            if self.ui_store.should_exit() {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key_event) = event::read()? {
                            // Only process key press events (not release)
                            if key_event.kind == KeyEventKind::Press {
                                if let Some(action) = keyboard::handle_key_event(
                                    key_event,
                                    &self.ui_store,
                                    &self.form_store,
                                    &self.app_logs_store,
                                ) {
                                    self.dispatcher.dispatch(action);
                                }
                            }
                        }
                    }
                }

                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                }
            }
        }

        Ok(())
    }

    /// Route an action to the stores, then to effects
    fn handle_action(&mut self, action: &Action) {
        log::debug!("Handling action: {:?}", action);

        self.ui_store.reduce(action);
        self.form_store.reduce(action);
        self.app_logs_store.reduce(action);

        self.effects.handle(action);
    }
}
