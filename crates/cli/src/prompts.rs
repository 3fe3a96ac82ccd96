//! All user-facing text, gathered in one configuration struct.
//!
//! Passed explicitly into the shell so nothing engine-side depends on
//! presentation strings, and tests can substitute their own wording.

use polyquiz::prelude::Coord;

use crate::input::ParseError;

/// Static prompt/report strings. Lines parameterized by session state
/// (vertex numbers, coordinates) are produced by the helper methods.
#[derive(Clone, Debug)]
pub struct Prompts {
    pub welcome: &'static str,
    pub goodbye: &'static str,
    pub invalid_mode: &'static str,
    pub query_prompt: &'static str,
    pub incomplete_banner: &'static str,
    pub complete_banner: &'static str,
    pub finalized_banner: &'static str,
    pub random_banner: &'static str,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            welcome: "Welcome to the geometry puzzle app\n\
                      [1] Create a custom shape\n\
                      [2] Generate a random shape",
            goodbye: "Thank you for playing the geometry puzzle app\nHave a nice day!",
            invalid_mode: "Invalid application mode",
            query_prompt: "Please key in test coordinates in x y format or enter # to quit the game",
            incomplete_banner: "Your current shape is incomplete",
            complete_banner: "Your current shape is valid and is complete",
            finalized_banner: "Your finalized shape is",
            random_banner: "Your random shape is",
        }
    }
}

impl Prompts {
    pub fn enter_coordinate(&self, ordinal: usize) -> String {
        format!("Please enter coordinates {ordinal} in x y format")
    }

    pub fn finalize_or_enter(&self, ordinal: usize) -> String {
        format!(
            "Please enter # to finalize your shape or enter coordinates {ordinal} in x y format"
        )
    }

    pub fn rejected(&self, coord: Coord) -> String {
        format!(
            "New coordinates{coord} is invalid!!!\nNot adding new coordinates to the current shape"
        )
    }

    pub fn inside(&self, coord: Coord) -> String {
        format!("Coordinates {coord} is within your finalized shape")
    }

    pub fn outside(&self, coord: Coord) -> String {
        format!("Sorry, coordinates {coord} is outside of your finalized shape")
    }

    pub fn unreadable(&self, reason: &ParseError) -> String {
        format!("Could not read coordinates: {reason}")
    }
}
