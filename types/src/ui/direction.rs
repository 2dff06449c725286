/// Logical horizontal travel of a slide transition, in renderer units.
pub const SLIDE_DISTANCE: f32 = 1000.0;

/// Navigation direction of the carousel.
///
/// Forward slides enter from the positive side and leave toward the
/// negative side; Backward is the mirror. `None` is the state before the
/// first navigation and carries no offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
            Self::None => 0.0,
        }
    }

    /// Offset an entering slide starts from.
    #[must_use]
    pub fn enter_offset(self) -> f32 {
        self.sign() * SLIDE_DISTANCE
    }

    /// Offset an outgoing slide travels to.
    #[must_use]
    pub fn exit_offset(self) -> f32 {
        -self.sign() * SLIDE_DISTANCE
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::None => "none",
        }
    }
}
