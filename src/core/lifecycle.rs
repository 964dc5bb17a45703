//! Running/stopped state machine for a cursor instance.

/// `Stopped` is terminal; a stopped instance never runs again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Active,
    Stopped,
}

/// What the frame loop should do after the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    Next,
    Done,
}

impl Lifecycle {
    pub fn is_active(self) -> bool {
        self == Lifecycle::Active
    }

    /// Returns true only for the call that actually stopped it.
    pub fn stop(&mut self) -> bool {
        let was_active = self.is_active();
        *self = Lifecycle::Stopped;
        was_active
    }

    pub fn schedule(self) -> Schedule {
        match self {
            Lifecycle::Active => Schedule::Next,
            Lifecycle::Stopped => Schedule::Done,
        }
    }
}
