use crate::config::AppConfig;
use ratatui::layout::Rect;

/// The four exercises hosted by the application. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Profile,
    Shell,
    Counter,
    SharedCounters,
}

impl Demo {
    pub const ALL: [Demo; 4] = [
        Demo::Profile,
        Demo::Shell,
        Demo::Counter,
        Demo::SharedCounters,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Demo::Profile => "Profilo",
            Demo::Shell => "App",
            Demo::Counter => "Contatore",
            Demo::SharedCounters => "Contatori indipendenti",
        }
    }

    pub fn next(self) -> Demo {
        match self {
            Demo::Profile => Demo::Shell,
            Demo::Shell => Demo::Counter,
            Demo::Counter => Demo::SharedCounters,
            Demo::SharedCounters => Demo::Profile,
        }
    }

    pub fn prev(self) -> Demo {
        match self {
            Demo::Profile => Demo::SharedCounters,
            Demo::Shell => Demo::Profile,
            Demo::Counter => Demo::Shell,
            Demo::SharedCounters => Demo::Counter,
        }
    }
}

/// Component-local click counter. Starts at zero when the instance is
/// created and only ever moves forward, one click at a time.
#[derive(Debug, Default)]
pub struct CounterState {
    pub count: u64,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(&mut self) {
        self.count += 1;
    }
}

/// The app-shell exercise owns its embedded counter instance; the header
/// and welcome children are stateless.
#[derive(Debug, Default)]
pub struct ShellState {
    pub counter: CounterState,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedButton {
    First,
    Second,
}

/// State for the "Contatori indipendenti" exercise.
///
/// Despite the name, the two buttons are NOT independent: the count is
/// lifted to this parent and both siblings drive it through the same
/// increment path, so they always display the same value. That is the
/// literal behavior of the source exercise and is preserved on purpose.
#[derive(Debug)]
pub struct SharedCountersState {
    pub count: u64,
    pub focused: SharedButton,
}

impl SharedCountersState {
    pub fn new() -> Self {
        Self {
            count: 0,
            focused: SharedButton::First,
        }
    }

    /// Shared increment path: both buttons land here.
    pub fn click(&mut self) {
        self.count += 1;
    }

    pub fn focus_first(&mut self) {
        self.focused = SharedButton::First;
    }

    pub fn focus_second(&mut self) {
        self.focused = SharedButton::Second;
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub active: Demo,
    pub counter: CounterState,
    pub shell: ShellState,
    pub shared: SharedCountersState,
    /// Last known terminal area, kept in sync by resize events so mouse
    /// hit-testing can recompute the same layout the renderer used.
    pub last_area: Rect,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            active: Demo::Profile,
            counter: CounterState::new(),
            shell: ShellState::new(),
            shared: SharedCountersState::new(),
            last_area: Rect::default(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Switch the active demo. Leaving a demo unmounts it: its local state
    /// is dropped and rebuilt fresh, so a counter revisited later starts
    /// from zero again.
    pub fn select_demo(&mut self, demo: Demo) {
        if demo == self.active {
            return;
        }
        match self.active {
            Demo::Profile => {}
            Demo::Shell => self.shell = ShellState::new(),
            Demo::Counter => self.counter = CounterState::new(),
            Demo::SharedCounters => self.shared = SharedCountersState::new(),
        }
        self.active = demo;
        self.dirty = true;
    }

    pub fn select_next_demo(&mut self) {
        self.select_demo(self.active.next());
    }

    pub fn select_prev_demo(&mut self) {
        self.select_demo(self.active.prev());
    }

    pub fn status_line(&self) -> String {
        match self.active {
            Demo::Profile => "Scheda profilo".to_string(),
            Demo::Shell => format!("App: {} click", self.shell.counter.count),
            Demo::Counter => format!("Contatore: {} click", self.counter.count),
            Demo::SharedCounters => {
                format!("Contatore condiviso: {} click", self.shared.count)
            }
        }
    }
}
