use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event (key, mouse, resize)
    Terminal(CrosstermEvent),

    /// Tick for UI refresh
    Tick,
}
