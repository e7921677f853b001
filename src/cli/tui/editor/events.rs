use ratatui::crossterm::event::KeyEvent;

/// All possible events in the editor
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // UI events
    Tick, // ages status messages
}
