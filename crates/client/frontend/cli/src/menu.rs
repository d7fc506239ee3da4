//! Numbered menus.

use strum::{EnumIter, FromRepr, IntoEnumIterator};

/// Main menu entries, numbered as shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, FromRepr)]
#[repr(u8)]
pub enum MenuChoice {
    Create = 1,
    ViewAll = 2,
    ViewOne = 3,
    Update = 4,
    Delete = 5,
    Battle = 6,
    Exit = 7,
}

impl MenuChoice {
    /// Look up the entry for a typed number.
    pub fn from_number(number: i64) -> Option<Self> {
        u8::try_from(number).ok().and_then(Self::from_repr)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "CREATE - Add a new character",
            Self::ViewAll => "READ   - View all characters",
            Self::ViewOne => "READ   - View single character",
            Self::Update => "UPDATE - Modify a character",
            Self::Delete => "DELETE - Remove a character",
            Self::Battle => "BATTLE - Simulate a battle",
            Self::Exit => "EXIT   - Quit the game",
        }
    }

    /// Menu lines in display order.
    pub fn lines() -> impl Iterator<Item = String> {
        Self::iter().map(|choice| format!("{}. {}", choice.number(), choice.label()))
    }
}

/// Update sub-menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, FromRepr)]
#[repr(u8)]
pub enum UpdateChoice {
    Name = 1,
    Class = 2,
    Level = 3,
    All = 4,
}

impl UpdateChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        u8::try_from(number).ok().and_then(Self::from_repr)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Class => "Class",
            Self::Level => "Level",
            Self::All => "All attributes",
        }
    }

    pub fn lines() -> impl Iterator<Item = String> {
        Self::iter().map(|choice| format!("{}. {}", choice as u8, choice.label()))
    }

    pub fn touches_name(self) -> bool {
        matches!(self, Self::Name | Self::All)
    }

    pub fn touches_class(self) -> bool {
        matches!(self, Self::Class | Self::All)
    }

    pub fn touches_level(self) -> bool {
        matches!(self, Self::Level | Self::All)
    }
}
