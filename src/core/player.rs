//! Colors, per-color storage, and players.
//!
//! ## Color
//!
//! The two sides of the game. White always moves on odd turns and Black
//! on even turns (1-indexed), bonus turns aside.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for anything the game
//! keeps once per side: players, entrance squares, "next" links.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::entity::{PieceId, SquareId};

/// One side of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Moves first.
    White,
    /// Moves second.
    Black,
}

impl Color {
    /// Both colors in turn order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Slot index used by `ColorMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Leading character of this color's piece symbols.
    #[must_use]
    pub const fn symbol_prefix(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }

    /// Color that owns a 1-indexed turn number: White on odd, Black on even.
    ///
    /// ```
    /// use royal_ur::core::Color;
    ///
    /// assert_eq!(Color::for_turn(1), Color::White);
    /// assert_eq!(Color::for_turn(2), Color::Black);
    /// assert_eq!(Color::for_turn(7), Color::White);
    /// ```
    #[must_use]
    pub const fn for_turn(turn: u32) -> Self {
        if turn % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use royal_ur::core::{Color, ColorMap};
///
/// let mut names = ColorMap::new(|color| color.to_string());
/// assert_eq!(names[Color::Black], "Black");
///
/// names[Color::White] = "Ada".to_string();
/// assert_eq!(names[Color::White], "Ada");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Color) -> T) -> Self {
        Self {
            data: [factory(Color::White), factory(Color::Black)],
        }
    }

    /// Create a map from explicit white and black values.
    pub fn from_pair(white: T, black: T) -> Self {
        Self {
            data: [white, black],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's entry.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's entry.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Transform every entry, keeping the color association.
    pub fn map<U>(self, mut f: impl FnMut(Color, T) -> U) -> ColorMap<U> {
        let [white, black] = self.data;
        ColorMap {
            data: [f(Color::White, white), f(Color::Black, black)],
        }
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

/// A participant: a name, a color, that color's pieces, and where they
/// enter and leave the track.
///
/// Entrance and exit are copied from the loaded board when the game is
/// set up and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    color: Color,
    name: String,
    pieces: Vec<PieceId>,
    entrance: SquareId,
    exit: SquareId,
}

impl Player {
    /// Create a player.
    #[must_use]
    pub fn new(
        color: Color,
        name: impl Into<String>,
        pieces: Vec<PieceId>,
        entrance: SquareId,
        exit: SquareId,
    ) -> Self {
        Self {
            color,
            name: name.into(),
            pieces,
            entrance,
            exit,
        }
    }

    /// The player's color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's pieces in ordinal order.
    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    /// Square where this player's pieces enter the track.
    #[must_use]
    pub fn entrance(&self) -> SquareId {
        self.entrance
    }

    /// Last square of this player's path.
    #[must_use]
    pub fn exit(&self) -> SquareId {
        self.exit
    }
}
