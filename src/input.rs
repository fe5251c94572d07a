//! Button Input
//!
//! Edge interrupts (or their async tasks) only record that a button was
//! pressed; the control loop collects and clears everything once per tick.
//! Each button has a single slot, so any number of edges between two ticks
//! collapse into one press.

use core::cell::Cell;

use critical_section::Mutex;

/// Front panel button, left to right
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// Leftmost: back / confirm / accept
    A,
    /// Increase-side edit or first descent
    B,
    /// Decrease-side edit or second descent
    C,
    /// Rightmost: increment / mute / delete
    D,
}

impl Button {
    /// All buttons in dispatch order
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    const fn mask(self) -> u8 {
        match self {
            Self::A => 0b0001,
            Self::B => 0b0010,
            Self::C => 0b0100,
            Self::D => 0b1000,
        }
    }

    /// Panel number printed next to the button
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::A => 1,
            Self::B => 2,
            Self::C => 3,
            Self::D => 4,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Button {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Button{}", self.number());
    }
}

/// Set of buttons pressed since the last tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PendingButtons(u8);

impl PendingButtons {
    /// No presses
    pub const NONE: Self = Self(0);

    /// Add a press (returns new set)
    #[must_use]
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask())
    }

    /// Check whether `button` was pressed
    #[must_use]
    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    /// Check whether nothing was pressed
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Pressed buttons in dispatch order (A first)
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl From<Button> for PendingButtons {
    fn from(button: Button) -> Self {
        Self::NONE.with(button)
    }
}

/// Interrupt-safe single-slot-per-button latch
pub struct ButtonLatch {
    pending: Mutex<Cell<u8>>,
}

impl ButtonLatch {
    /// Create an empty latch (usable in a `static`)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(0)),
        }
    }

    /// Record a press; never blocks beyond a critical section
    pub fn press(&self, button: Button) {
        critical_section::with(|cs| {
            let cell = self.pending.borrow(cs);
            cell.set(cell.get() | button.mask());
        });
    }

    /// Take every recorded press and clear the latch
    pub fn take(&self) -> PendingButtons {
        critical_section::with(|cs| PendingButtons(self.pending.borrow(cs).replace(0)))
    }
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}
