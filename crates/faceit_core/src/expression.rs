//! Facial expression model
//!
//! A [`FacialExpression`] is a small `Copy` value made of three discrete
//! features. Mouth and eyebrows are ordered and move one step at a time;
//! stepping past either end saturates at that end instead of wrapping.
//!
//! # Example
//!
//! ```rust
//! use faceit_core::expression::{EyeBrows, Eyes, FacialExpression, Mouth, Move};
//!
//! let face = FacialExpression::new(Eyes::Open, EyeBrows::Normal, Mouth::Grin);
//!
//! let face = face.apply(Move::Happier).apply(Move::Happier);
//! assert_eq!(face.mouth, Mouth::Smile);
//!
//! let face = face.apply(Move::ToggleEyes);
//! assert_eq!(face.eyes, Eyes::Closed);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FaceError;

// ─────────────────────────────────────────────────────────────────────────────
// Ordered enums
// ─────────────────────────────────────────────────────────────────────────────

/// A closed, ordered set of variants with saturating steps.
pub trait Ordered: Copy + PartialEq + 'static {
    /// Every variant, lowest first
    const ALL: &'static [Self];

    /// Index of this variant within [`Ordered::ALL`]
    fn position(self) -> usize;

    /// One step up; the last variant maps to itself
    fn next(self) -> Self {
        Self::ALL.get(self.position() + 1).copied().unwrap_or(self)
    }

    /// One step down; the first variant maps to itself
    fn previous(self) -> Self {
        self.position()
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
            .unwrap_or(self)
    }

    fn is_first(self) -> bool {
        self.position() == 0
    }

    fn is_last(self) -> bool {
        self.position() + 1 == Self::ALL.len()
    }
}

fn parse_variant<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    name: fn(T) -> &'static str,
) -> Result<T, FaceError> {
    let needle = value.trim();
    all.iter()
        .copied()
        .find(|variant| name(*variant).eq_ignore_ascii_case(needle))
        .ok_or_else(|| FaceError::UnknownVariant {
            kind,
            value: value.to_string(),
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// Features
// ─────────────────────────────────────────────────────────────────────────────

/// Eye state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Eyes {
    Open,
    Closed,
    Squinting,
}

impl Eyes {
    pub const ALL: [Eyes; 3] = [Eyes::Open, Eyes::Closed, Eyes::Squinting];

    /// Swap open and closed eyes.
    ///
    /// Squinting is a separate mode and is left as is.
    pub fn toggled(self) -> Self {
        match self {
            Eyes::Open => Eyes::Closed,
            Eyes::Closed => Eyes::Open,
            Eyes::Squinting => Eyes::Squinting,
        }
    }

    /// Whether the eyes are drawn open. Squinting draws as closed.
    pub fn is_open(self) -> bool {
        matches!(self, Eyes::Open)
    }

    pub fn name(self) -> &'static str {
        match self {
            Eyes::Open => "open",
            Eyes::Closed => "closed",
            Eyes::Squinting => "squinting",
        }
    }
}

/// Eyebrow state, ordered from relaxed to furrowed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EyeBrows {
    Relaxed,
    Normal,
    Furrowed,
}

impl Ordered for EyeBrows {
    const ALL: &'static [Self] = &[EyeBrows::Relaxed, EyeBrows::Normal, EyeBrows::Furrowed];

    fn position(self) -> usize {
        self as usize
    }
}

impl EyeBrows {
    pub fn more_relaxed(self) -> Self {
        self.previous()
    }

    pub fn more_furrowed(self) -> Self {
        self.next()
    }

    pub fn name(self) -> &'static str {
        match self {
            EyeBrows::Relaxed => "relaxed",
            EyeBrows::Normal => "normal",
            EyeBrows::Furrowed => "furrowed",
        }
    }
}

/// Mouth state, ordered from frown to smile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Mouth {
    Frown,
    Smirk,
    Neutral,
    Grin,
    Smile,
}

impl Ordered for Mouth {
    const ALL: &'static [Self] = &[
        Mouth::Frown,
        Mouth::Smirk,
        Mouth::Neutral,
        Mouth::Grin,
        Mouth::Smile,
    ];

    fn position(self) -> usize {
        self as usize
    }
}

impl Mouth {
    pub fn happier(self) -> Self {
        self.next()
    }

    pub fn sadder(self) -> Self {
        self.previous()
    }

    pub fn name(self) -> &'static str {
        match self {
            Mouth::Frown => "frown",
            Mouth::Smirk => "smirk",
            Mouth::Neutral => "neutral",
            Mouth::Grin => "grin",
            Mouth::Smile => "smile",
        }
    }
}

impl FromStr for Eyes {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("eyes", s, &Eyes::ALL, Eyes::name)
    }
}

impl FromStr for EyeBrows {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("eyebrows", s, EyeBrows::ALL, EyeBrows::name)
    }
}

impl FromStr for Mouth {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("mouth", s, Mouth::ALL, Mouth::name)
    }
}

/// Deserialize through `FromStr` so config files and CLI flags accept the
/// same spellings.
macro_rules! impl_try_from_string {
    ($($ty:ty),+) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = FaceError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }
        )+
    };
}

impl_try_from_string!(Eyes, EyeBrows, Mouth);

impl fmt::Display for Eyes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for EyeBrows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Mouth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Moves
// ─────────────────────────────────────────────────────────────────────────────

/// A single change to an expression, as requested by the host UI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Move {
    Happier,
    Sadder,
    Relax,
    Furrow,
    ToggleEyes,
}

impl Move {
    pub const ALL: [Move; 5] = [
        Move::Happier,
        Move::Sadder,
        Move::Relax,
        Move::Furrow,
        Move::ToggleEyes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Move::Happier => "happier",
            Move::Sadder => "sadder",
            Move::Relax => "relax",
            Move::Furrow => "furrow",
            Move::ToggleEyes => "toggle-eyes",
        }
    }
}

impl FromStr for Move {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("move", &s.replace('_', "-"), &Move::ALL, Move::name).map_err(|_| {
            FaceError::UnknownVariant {
                kind: "move",
                value: s.to_string(),
            }
        })
    }
}

impl_try_from_string!(Move);

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Expression
// ─────────────────────────────────────────────────────────────────────────────

/// The discrete state of the face
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FacialExpression {
    pub eyes: Eyes,
    #[serde(alias = "eyebrows")]
    pub eye_brows: EyeBrows,
    pub mouth: Mouth,
}

impl FacialExpression {
    pub const fn new(eyes: Eyes, eye_brows: EyeBrows, mouth: Mouth) -> Self {
        Self {
            eyes,
            eye_brows,
            mouth,
        }
    }

    pub fn happier(self) -> Self {
        Self {
            mouth: self.mouth.happier(),
            ..self
        }
    }

    pub fn sadder(self) -> Self {
        Self {
            mouth: self.mouth.sadder(),
            ..self
        }
    }

    pub fn relax(self) -> Self {
        Self {
            eye_brows: self.eye_brows.more_relaxed(),
            ..self
        }
    }

    pub fn furrow(self) -> Self {
        Self {
            eye_brows: self.eye_brows.more_furrowed(),
            ..self
        }
    }

    pub fn toggle_eyes(self) -> Self {
        Self {
            eyes: self.eyes.toggled(),
            ..self
        }
    }

    /// Apply a move, returning the new expression
    pub fn apply(self, mv: Move) -> Self {
        match mv {
            Move::Happier => self.happier(),
            Move::Sadder => self.sadder(),
            Move::Relax => self.relax(),
            Move::Furrow => self.furrow(),
            Move::ToggleEyes => self.toggle_eyes(),
        }
    }
}

impl Default for FacialExpression {
    /// Closed eyes, relaxed brows and a smirk: the face a new controller shows.
    fn default() -> Self {
        Self::new(Eyes::Closed, EyeBrows::Relaxed, Mouth::Smirk)
    }
}

impl From<(Eyes, EyeBrows, Mouth)> for FacialExpression {
    fn from((eyes, eye_brows, mouth): (Eyes, EyeBrows, Mouth)) -> Self {
        Self::new(eyes, eye_brows, mouth)
    }
}

impl fmt::Display for FacialExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eyes={} eyebrows={} mouth={}",
            self.eyes, self.eye_brows, self.mouth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happier_never_decreases() {
        for &mouth in Mouth::ALL {
            assert!(mouth.happier().position() >= mouth.position());
            assert!(mouth.happier() >= mouth);
        }
        assert_eq!(Mouth::Smile.happier(), Mouth::Smile);
    }

    #[test]
    fn test_sadder_saturates_at_frown() {
        assert_eq!(Mouth::Frown.sadder(), Mouth::Frown);
        for &mouth in Mouth::ALL {
            assert!(mouth.sadder() <= mouth);
        }
    }

    #[test]
    fn test_alternating_steps_round_trip() {
        for &mouth in Mouth::ALL {
            if !mouth.is_last() {
                assert_eq!(mouth.happier().sadder(), mouth);
            }
            if !mouth.is_first() {
                assert_eq!(mouth.sadder().happier(), mouth);
            }
        }
    }

    #[test]
    fn test_mouth_walk() {
        let mut mouth = Mouth::Frown;
        let mut seen = vec![mouth];
        for _ in 0..10 {
            mouth = mouth.happier();
            seen.push(mouth);
        }
        assert_eq!(
            &seen[..6],
            &[
                Mouth::Frown,
                Mouth::Smirk,
                Mouth::Neutral,
                Mouth::Grin,
                Mouth::Smile,
                Mouth::Smile
            ]
        );
        assert!(seen[5..].iter().all(|m| *m == Mouth::Smile));
    }

    #[test]
    fn test_brow_steps_saturate() {
        assert_eq!(EyeBrows::Relaxed.more_relaxed(), EyeBrows::Relaxed);
        assert_eq!(EyeBrows::Normal.more_relaxed(), EyeBrows::Relaxed);
        assert_eq!(EyeBrows::Normal.more_furrowed(), EyeBrows::Furrowed);
        assert_eq!(EyeBrows::Furrowed.more_furrowed(), EyeBrows::Furrowed);
    }

    #[test]
    fn test_toggle_eyes() {
        assert_eq!(Eyes::Open.toggled(), Eyes::Closed);
        assert_eq!(Eyes::Closed.toggled(), Eyes::Open);
        assert_eq!(Eyes::Squinting.toggled(), Eyes::Squinting);
    }

    #[test]
    fn test_eyes_open_only_when_open() {
        assert!(Eyes::Open.is_open());
        assert!(!Eyes::Closed.is_open());
        assert!(!Eyes::Squinting.is_open());
    }

    #[test]
    fn test_expression_moves_touch_one_field() {
        let face = FacialExpression::new(Eyes::Open, EyeBrows::Normal, Mouth::Neutral);

        let happier = face.apply(Move::Happier);
        assert_eq!(happier.mouth, Mouth::Grin);
        assert_eq!(happier.eyes, face.eyes);
        assert_eq!(happier.eye_brows, face.eye_brows);

        let furrowed = face.apply(Move::Furrow);
        assert_eq!(furrowed.eye_brows, EyeBrows::Furrowed);
        assert_eq!(furrowed.mouth, face.mouth);

        let relaxed = face.apply(Move::Relax);
        assert_eq!(relaxed.eye_brows, EyeBrows::Relaxed);

        let closed = face.apply(Move::ToggleEyes);
        assert_eq!(closed.eyes, Eyes::Closed);
        assert_eq!(closed.mouth, face.mouth);
    }

    #[test]
    fn test_from_tuple_and_default() {
        let face: FacialExpression = (Eyes::Squinting, EyeBrows::Furrowed, Mouth::Frown).into();
        assert_eq!(face.eyes, Eyes::Squinting);
        assert_eq!(face.eye_brows, EyeBrows::Furrowed);
        assert_eq!(face.mouth, Mouth::Frown);

        let initial = FacialExpression::default();
        assert_eq!(
            initial,
            FacialExpression::new(Eyes::Closed, EyeBrows::Relaxed, Mouth::Smirk)
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Smile".parse::<Mouth>().unwrap(), Mouth::Smile);
        assert_eq!(" furrowed ".parse::<EyeBrows>().unwrap(), EyeBrows::Furrowed);
        assert_eq!("squinting".parse::<Eyes>().unwrap(), Eyes::Squinting);
        assert_eq!("toggle_eyes".parse::<Move>().unwrap(), Move::ToggleEyes);
        assert_eq!("toggle-eyes".parse::<Move>().unwrap(), Move::ToggleEyes);

        let err = "grimace".parse::<Mouth>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown mouth: 'grimace'");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for &mouth in Mouth::ALL {
            assert_eq!(mouth.to_string().parse::<Mouth>().unwrap(), mouth);
        }
        for mv in Move::ALL {
            assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
        }
    }

    #[test]
    fn test_deserialize_accepts_parse_spellings() {
        let face: FacialExpression =
            serde_json::from_str(r#"{"eyes": "Open", "eyebrows": " FURROWED ", "mouth": "Smile"}"#)
                .unwrap();
        assert_eq!(
            face,
            FacialExpression::new(Eyes::Open, EyeBrows::Furrowed, Mouth::Smile)
        );

        let moves: Vec<Move> = serde_json::from_str(r#"["toggle_eyes", "Happier"]"#).unwrap();
        assert_eq!(moves, vec![Move::ToggleEyes, Move::Happier]);

        let err = serde_json::from_str::<Mouth>(r#""grimace""#).unwrap_err();
        assert!(err.to_string().contains("Unknown mouth: 'grimace'"));
    }

    #[test]
    fn test_serialize_uses_canonical_names() {
        let json = serde_json::to_value(FacialExpression::default()).unwrap();
        assert_eq!(json["eyes"], "closed");
        assert_eq!(json["eye_brows"], "relaxed");
        assert_eq!(json["mouth"], "smirk");
        assert_eq!(serde_json::to_value(Move::ToggleEyes).unwrap(), "toggle-eyes");
    }
}
