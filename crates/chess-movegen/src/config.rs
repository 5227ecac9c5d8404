//! Evaluation weight configuration.
//!
//! Weights are measured in tenths of a pawn and parsed from TOML text. Missing
//! fields fall back to the standard material values. Reading the text from a
//! file or elsewhere is up to the embedding driver.

use chess_core::Piece;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted weight, in tenths of a pawn.
///
/// With every weight at this bound, 64 pieces of material plus a mobility
/// difference of a few thousand moves still fits in an `i32` score.
pub const MAX_WEIGHT: i32 = 100_000;

/// Errors that can occur when parsing evaluation weights.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse the configuration as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A weight was negative.
    #[error("Weight `{name}` must not be negative, got {value}")]
    NegativeWeight { name: &'static str, value: i32 },
    /// A weight was above [`MAX_WEIGHT`].
    #[error("Weight `{name}` must be at most {MAX_WEIGHT}, got {value}")]
    WeightTooLarge { name: &'static str, value: i32 },
}

/// Per-piece material values and the mobility weight, in tenths of a pawn.
///
/// The defaults score a king as 200 pawns, a queen as 9, a rook as 5, minor
/// pieces as 3 and a pawn as 1, with each extra pseudo-legal move worth 0.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvalWeights {
    #[serde(default = "default_king")]
    pub king: i32,
    #[serde(default = "default_queen")]
    pub queen: i32,
    #[serde(default = "default_rook")]
    pub rook: i32,
    #[serde(default = "default_minor")]
    pub bishop: i32,
    #[serde(default = "default_minor")]
    pub knight: i32,
    #[serde(default = "default_pawn")]
    pub pawn: i32,
    /// Value of each pseudo-legal move one side has over the other.
    #[serde(default = "default_mobility")]
    pub mobility: i32,
}

fn default_king() -> i32 {
    2000
}

fn default_queen() -> i32 {
    90
}

fn default_rook() -> i32 {
    50
}

fn default_minor() -> i32 {
    30
}

fn default_pawn() -> i32 {
    10
}

fn default_mobility() -> i32 {
    1
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            king: default_king(),
            queen: default_queen(),
            rook: default_rook(),
            bishop: default_minor(),
            knight: default_minor(),
            pawn: default_pawn(),
            mobility: default_mobility(),
        }
    }
}

impl EvalWeights {
    /// Returns the material value of one piece of the given type.
    #[inline]
    pub const fn piece(&self, piece: Piece) -> i32 {
        match piece {
            Piece::Pawn => self.pawn,
            Piece::Knight => self.knight,
            Piece::Bishop => self.bishop,
            Piece::Rook => self.rook,
            Piece::Queen => self.queen,
            Piece::King => self.king,
        }
    }

    /// Parses weights from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if the text is not valid TOML for
    /// this structure, or the error from [`Self::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let weights: Self = toml::from_str(content)?;
        weights.validate()?;
        tracing::debug!(?weights, "parsed evaluation weights");
        Ok(weights)
    }

    /// Checks that every weight lies in `0..=MAX_WEIGHT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeWeight`] or [`ConfigError::WeightTooLarge`]
    /// for the first weight out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("king", self.king),
            ("queen", self.queen),
            ("rook", self.rook),
            ("bishop", self.bishop),
            ("knight", self.knight),
            ("pawn", self.pawn),
            ("mobility", self.mobility),
        ];
        for (name, value) in named {
            if value < 0 {
                return Err(ConfigError::NegativeWeight { name, value });
            }
            if value > MAX_WEIGHT {
                return Err(ConfigError::WeightTooLarge { name, value });
            }
        }
        Ok(())
    }
}
