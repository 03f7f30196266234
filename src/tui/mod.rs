use crate::app::state::AppState;
use crate::config::Config;
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::panic;

pub mod theme;
pub mod widgets;

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and (optionally) mouse capture for as long as
/// it lives.
pub struct TerminalGuard {
    terminal: TuiTerminal,
    mouse: bool,
}

impl TerminalGuard {
    pub fn enter(mouse: bool) -> anyhow::Result<Self> {
        install_panic_hook(mouse);
        enable_raw_mode().context("enable raw mode")?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("enter alt screen")?;
        if mouse {
            execute!(stdout, EnableMouseCapture).context("enable mouse capture")?;
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("create terminal")?;

        Ok(Self { terminal, mouse })
    }

    pub fn terminal_mut(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }
}

fn restore(mouse: bool) {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if mouse {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    let _ = execute!(stdout, LeaveAlternateScreen, crossterm::cursor::Show);
}

/// A panic inside the draw loop would otherwise leave the shell in raw mode
/// with the message hidden on the alternate screen.
fn install_panic_hook(mouse: bool) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore(mouse);
        match info.location() {
            Some(location) => tracing::error!(%location, "panic: {info}"),
            None => tracing::error!("panic: {info}"),
        }
        previous(info);
    }));
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best-effort; never panic in Drop.
        restore(self.mouse);
        let _ = self.terminal.show_cursor();
    }
}

pub fn draw(terminal: &mut TuiTerminal, cfg: &Config, state: &mut AppState) -> anyhow::Result<()> {
    state.expire_toast();
    terminal
        .draw(|f| widgets::root::render(f, cfg, state))
        .context("terminal draw")?;
    Ok(())
}
