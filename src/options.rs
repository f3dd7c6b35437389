//! Game rule constants.

/// Rules for a Twenty-One match.
///
/// The defaults are the house rules; the builder methods exist so tests and
/// embedders can shorten a match or rename the dealer:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default().with_win_limit(3);
/// assert_eq!(options.win_limit, 3);
/// assert_eq!(options.bust_value, 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Round wins needed to become champion.
    pub win_limit: u32,
    /// Totals above this value are bust.
    pub bust_value: u8,
    /// The dealer stops hitting once its total reaches this value.
    pub dealer_stay: u8,
    /// The dealer's name, which the player may not take.
    pub dealer_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            win_limit: 5,
            bust_value: 21,
            dealer_stay: 17,
            dealer_name: String::from("Alice"),
        }
    }
}

impl GameOptions {
    /// Sets the number of round wins needed to become champion.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_limit(1);
    /// assert_eq!(options.win_limit, 1);
    /// ```
    #[must_use]
    pub const fn with_win_limit(mut self, win_limit: u32) -> Self {
        self.win_limit = win_limit;
        self
    }

    /// Sets the bust value.
    #[must_use]
    pub const fn with_bust_value(mut self, bust_value: u8) -> Self {
        self.bust_value = bust_value;
        self
    }

    /// Sets the total at which the dealer stays.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stay(16);
    /// assert_eq!(options.dealer_stay, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stay(mut self, dealer_stay: u8) -> Self {
        self.dealer_stay = dealer_stay;
        self
    }

    /// Sets the dealer's name.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }
}
