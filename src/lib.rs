//! Expo Guide library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod api;
pub mod core;
pub mod resolver;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// The guide's tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Participants,
    Offers,
    News,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Participants, Screen::Offers, Screen::News];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Participants => "Participants",
            Screen::Offers => "Offers",
            Screen::News => "News",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Participants => 0,
            Screen::Offers => 1,
            Screen::News => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_cycle_wraps() {
        assert_eq!(Screen::News.next(), Screen::Participants);
        assert_eq!(Screen::Participants.previous(), Screen::News);
        assert_eq!(Screen::Offers.next(), Screen::News);
    }
}
