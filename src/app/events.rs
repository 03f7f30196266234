#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
    /// No terminal event within the poll interval; lets toasts expire.
    Tick,
}
