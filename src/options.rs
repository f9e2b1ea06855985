//! Game configuration options.

use alloc::borrow::Cow;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 17;

/// Maximum number of cards a player may swap in one discard-and-draw turn.
pub const MAX_DISCARD: usize = 9;

/// Which seat the human occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HumanSeat {
    /// The human sits at seat 0 and the computer at seat 1.
    #[default]
    First,
    /// The computer sits at seat 0 and the human at seat 1.
    Second,
}

impl HumanSeat {
    /// Returns the seat index of the human player.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use climbrs::{GameOptions, HumanSeat};
///
/// let options = GameOptions::default()
///     .with_human_name("Alice")
///     .with_ai_name("Bot")
///     .with_human_seat(HumanSeat::Second);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Display name of the human player.
    pub human_name: Cow<'static, str>,
    /// Display name of the computer player.
    pub ai_name: Cow<'static, str>,
    /// Seat of the human player.
    pub human_seat: HumanSeat,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            human_name: Cow::Borrowed("Player"),
            ai_name: Cow::Borrowed("Computer"),
            human_seat: HumanSeat::First,
        }
    }
}

impl GameOptions {
    /// Sets the human player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use climbrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_human_name("Alice");
    /// assert_eq!(options.human_name, "Alice");
    /// ```
    #[must_use]
    pub fn with_human_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.human_name = name.into();
        self
    }

    /// Sets the computer player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use climbrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_ai_name("Bot");
    /// assert_eq!(options.ai_name, "Bot");
    /// ```
    #[must_use]
    pub fn with_ai_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.ai_name = name.into();
        self
    }

    /// Sets which seat the human occupies.
    ///
    /// # Example
    ///
    /// ```
    /// use climbrs::{GameOptions, HumanSeat};
    ///
    /// let options = GameOptions::default().with_human_seat(HumanSeat::Second);
    /// assert_eq!(options.human_seat, HumanSeat::Second);
    /// ```
    #[must_use]
    pub const fn with_human_seat(mut self, seat: HumanSeat) -> Self {
        self.human_seat = seat;
        self
    }
}
