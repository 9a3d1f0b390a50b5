//! Menu options and their parsing.

use core::str::FromStr;

/// An action the player can pick from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Collect,
    Discard,
    Inspect,
    Search,
    Quit,
}

impl MenuOption {
    /// Options in the order they are printed.
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Collect,
        MenuOption::Discard,
        MenuOption::Inspect,
        MenuOption::Search,
        MenuOption::Quit,
    ];

    pub fn code(self) -> i64 {
        match self {
            MenuOption::Collect => 1,
            MenuOption::Discard => 2,
            MenuOption::Inspect => 3,
            MenuOption::Search => 4,
            MenuOption::Quit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Collect => "Collect item (insert)",
            MenuOption::Discard => "Discard item (remove)",
            MenuOption::Inspect => "Inspect backpack (list)",
            MenuOption::Search => "Search for item (find)",
            MenuOption::Quit => "Quit game",
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.code() == code)
    }
}

/// Why a menu line was not an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMenuError {
    /// Not a number at all.
    NotANumber,
    /// A number with no option attached.
    Unknown(i64),
}

impl FromStr for MenuOption {
    type Err = ParseMenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: i64 = s.trim().parse().map_err(|_| ParseMenuError::NotANumber)?;
        Self::from_code(code).ok_or(ParseMenuError::Unknown(code))
    }
}
