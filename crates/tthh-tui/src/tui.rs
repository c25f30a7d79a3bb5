use std::io::{self, Stdout, stdout};
use std::panic;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        cursor::{Hide, Show},
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
            enable_raw_mode,
        },
    },
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Take over the terminal for the form of `employee`. The fields draw their
/// own block cursor, so the hardware one stays hidden until [`restore`].
pub fn init(employee: &str) -> io::Result<Tui> {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous_hook(info);
    }));

    enable_raw_mode()?;
    execute!(
        stdout(),
        EnterAlternateScreen,
        Hide,
        SetTitle(format!("tthh: ausencia de {employee}"))
    )?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Undo [`init`]. Safe to call twice, the panic hook may already have run it.
pub fn restore() -> io::Result<()> {
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}
