use crate::app::actions::{Action, Nav, SnippetFormat};
use crate::app::events::InputEvent;
use crate::app::state::AppState;
use crate::gradient::{ColorStyle, GradientType};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Owns the terminal reader task. Dropping it stops the task within one
/// poll interval, so the listener never outlives the UI that consumes it.
pub struct InputSubscription {
    stop: Arc<AtomicBool>,
}

impl InputSubscription {
    pub fn spawn(tx: mpsc::Sender<InputEvent>, mouse_enabled: bool) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        tokio::task::spawn_blocking(move || {
            while !flag.load(Ordering::Relaxed) {
                let ev = if event::poll(POLL_INTERVAL).unwrap_or(false) {
                    match event::read() {
                        Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                        Ok(CtEvent::Mouse(m)) if mouse_enabled => InputEvent::Mouse(m),
                        Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                        _ => continue,
                    }
                } else {
                    InputEvent::Tick
                };
                if tx.blocking_send(ev).is_err() {
                    break;
                }
            }
            debug!("input reader stopped");
        });

        Self { stop }
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Tick => Some(Action::Tick),
        InputEvent::Mouse(m) => handle_mouse(state, m),
        InputEvent::Key(k) if state.show_help => handle_help_overlay(k),
        InputEvent::Key(k) => handle_grid(state, k),
    }
}

fn handle_help_overlay(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
            Some(Action::ToggleHelp)
        }
        _ => None,
    }
}

fn handle_grid(state: &AppState, k: KeyEvent) -> Option<Action> {
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
    let copy = |format| Action::Copy {
        index: state.selected,
        format,
    };

    match k.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('d') if ctrl => Some(Action::Nav(Nav::PageDown)),
        KeyCode::Char('u') if ctrl => Some(Action::Nav(Nav::PageUp)),
        KeyCode::Char('r') if ctrl => Some(Action::Refresh),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),

        // Controls
        KeyCode::Char('t') => Some(Action::CycleType),
        KeyCode::Char('T') => Some(Action::CycleTypeBack),
        KeyCode::Char('s') => Some(Action::CycleStyle),
        KeyCode::Char('S') => Some(Action::CycleStyleBack),
        KeyCode::Char('1') => Some(Action::SetType(GradientType::Linear)),
        KeyCode::Char('2') => Some(Action::SetType(GradientType::Radial)),
        KeyCode::Char('3') => Some(Action::SetType(GradientType::Conical)),
        KeyCode::Char(c @ '4'..='6') => {
            let slot = usize::from(c as u8 - b'4');
            ColorStyle::SELECTABLE.get(slot).copied().map(Action::SetStyle)
        }
        KeyCode::Char('r') | KeyCode::F(5) => Some(Action::Refresh),

        // Copy
        KeyCode::Char('c') | KeyCode::Enter => Some(copy(SnippetFormat::Css)),
        KeyCode::Char('w') | KeyCode::Char('y') => Some(copy(SnippetFormat::Tailwind)),

        // Navigation - vim style
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Nav(Nav::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Nav(Nav::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Nav(Nav::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Nav(Nav::Down)),
        KeyCode::PageUp => Some(Action::Nav(Nav::PageUp)),
        KeyCode::PageDown => Some(Action::Nav(Nav::PageDown)),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Nav(Nav::Top)),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Nav(Nav::Bottom)),
        _ => None,
    }
}

fn handle_mouse(state: &AppState, m: MouseEvent) -> Option<Action> {
    match m.kind {
        MouseEventKind::ScrollUp if !state.show_help => Some(Action::Nav(Nav::WheelUp)),
        MouseEventKind::ScrollDown if !state.show_help => Some(Action::Nav(Nav::WheelDown)),
        MouseEventKind::Down(MouseButton::Left) if state.show_help => Some(Action::ToggleHelp),
        MouseEventKind::Down(MouseButton::Left) => click(state, Position::new(m.column, m.row)),
        _ => None,
    }
}

fn click(state: &AppState, pos: Position) -> Option<Action> {
    let hb = &state.hitboxes;
    if hb.type_control.contains(pos) {
        return Some(Action::CycleType);
    }
    if hb.style_control.contains(pos) {
        return Some(Action::CycleStyle);
    }
    if hb.refresh.contains(pos) {
        return Some(Action::Refresh);
    }

    let tile = hb.tile_at(pos)?;
    let action = if tile.css.contains(pos) {
        Action::Copy {
            index: tile.index,
            format: SnippetFormat::Css,
        }
    } else if tile.tailwind.contains(pos) {
        Action::Copy {
            index: tile.index,
            format: SnippetFormat::Tailwind,
        }
    } else {
        Action::Select(tile.index)
    };
    Some(action)
}
