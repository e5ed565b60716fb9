//! Type definitions for the application state.

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Order list for the configured site
    #[default]
    Orders,
    /// Product settings browser
    ProductSettings,
}

impl Screen {
    /// The screen Tab moves to from this one.
    pub fn next(self) -> Self {
        match self {
            Screen::Orders => Screen::ProductSettings,
            Screen::ProductSettings => Screen::Orders,
        }
    }
}
