//! Mobile menu state machine.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Inputs the header reacts to
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderEvent {
    /// Hamburger / close button pressed
    ToggleMenu,
    /// A section anchor was found and scrolled into view
    SectionReached,
    /// Window width changed; `desktop` is true at or above the breakpoint
    ViewportResized { desktop: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub menu: MenuState,
}

impl HeaderState {
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Apply an event. Returns `true` if the state changed.
    pub fn apply(&mut self, event: HeaderEvent) -> bool {
        let next = match event {
            HeaderEvent::ToggleMenu => self.menu.toggled(),
            HeaderEvent::SectionReached => MenuState::Closed,
            HeaderEvent::ViewportResized { desktop: true } => MenuState::Closed,
            HeaderEvent::ViewportResized { desktop: false } => self.menu,
        };

        let changed = next != self.menu;
        self.menu = next;
        changed
    }
}
