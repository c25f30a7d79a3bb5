use std::io;

// Flux architecture modules
mod actions;
mod app;
mod dispatcher;
mod effects;
mod keyboard;
mod logger;
mod stores;
mod ui;

mod common;
mod config;
mod models;
mod tui;

pub use actions::{Action, FieldId, FieldKey, TabId};
pub use app::App;
pub use config::{TTHH_TUI_MAX_LOG_LINES, TTHH_TUI_POLL_INTERVAL_MS, TuiConfig};
pub use dispatcher::{ActionReceiver, Dispatcher};
pub use effects::{ABSENCE_ENDPOINT, Effects};
pub use models::{AbsenceKind, AbsenceRequest, Employee, FormError};
pub use stores::form_store::FormState;
pub use stores::{FormStore, UIStore};
pub use tthh_core::InputConfig;

/// Run the absence form until the user quits
pub async fn tui_main(input_config: InputConfig, employee: Employee) -> io::Result<()> {
    // Install color-eyre for better error messages BEFORE terminal init
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: Failed to install color-eyre: {}", e);
    }

    let tui_config = TuiConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut terminal = tui::init(&employee.name)?;
    let (mut app, action_receiver) = App::new(input_config, tui_config, employee);

    let result = app.run(&mut terminal, action_receiver).await;

    // Always restore terminal
    let _ = tui::restore();

    if let Err(e) = result {
        eprintln!("Application error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
