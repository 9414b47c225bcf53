//! Shared class-word tokens and token parsing.

use std::rc::Rc;

use thiserror::Error;

/// Caller-supplied message constructor (`on_toggle`, `on_select`, ...).
pub type MessageFn<A, Msg> = Rc<dyn Fn(A) -> Msg>;

/// Caller-supplied formatter turning an option into display or form text.
pub type Formatter<O> = Rc<dyn Fn(&O) -> String>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Token parsing failures.
pub enum TokenParseError {
    /// The input is not a token of the named kind.
    #[error("unknown {kind} token `{input}`")]
    Unknown {
        /// Token family being parsed.
        kind: &'static str,
        /// Rejected input.
        input: String,
    },
}

impl TokenParseError {
    pub(crate) fn unknown(kind: &'static str, input: &str) -> Self {
        Self::Unknown {
            kind,
            input: input.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Framework size variations.
pub enum Size {
    /// `mini`
    Mini,
    /// `tiny`
    Tiny,
    /// `small`
    Small,
    /// No size class.
    #[default]
    Medium,
    /// `large`
    Large,
    /// `big`
    Big,
    /// `huge`
    Huge,
    /// `massive`
    Massive,
}

impl Size {
    /// Class word, `None` for the framework default.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Mini => Some("mini"),
            Self::Tiny => Some("tiny"),
            Self::Small => Some("small"),
            Self::Medium => None,
            Self::Large => Some("large"),
            Self::Big => Some("big"),
            Self::Huge => Some("huge"),
            Self::Massive => Some("massive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Framework color names.
pub enum Color {
    /// `red`
    Red,
    /// `orange`
    Orange,
    /// `yellow`
    Yellow,
    /// `olive`
    Olive,
    /// `green`
    Green,
    /// `teal`
    Teal,
    /// `blue`
    Blue,
    /// `violet`
    Violet,
    /// `purple`
    Purple,
    /// `pink`
    Pink,
    /// `brown`
    Brown,
    /// `grey`
    Grey,
    /// `black`
    Black,
}

impl Color {
    /// Class word.
    pub fn class(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Olive => "olive",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Brown => "brown",
            Self::Grey => "grey",
            Self::Black => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Emphasis levels for buttons.
pub enum Emphasis {
    /// No emphasis class.
    #[default]
    Normal,
    /// `primary`
    Primary,
    /// `secondary`
    Secondary,
    /// `positive`
    Positive,
    /// `negative`
    Negative,
}

impl Emphasis {
    /// Class word, `None` for the unemphasized default.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Primary => Some("primary"),
            Self::Secondary => Some("secondary"),
            Self::Positive => Some("positive"),
            Self::Negative => Some("negative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text alignment variations.
pub enum Alignment {
    /// `left aligned`
    Left,
    /// `center aligned`
    Center,
    /// `right aligned`
    Right,
    /// `justified`
    Justified,
}

impl Alignment {
    /// Class words.
    pub fn class(self) -> &'static str {
        match self {
            Self::Left => "left aligned",
            Self::Center => "center aligned",
            Self::Right => "right aligned",
            Self::Justified => "justified",
        }
    }
}

const WIDTH_WORDS: [&str; 16] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// Grid column count or span, clamped to the framework's 1..=16 range.
pub struct Width(u8);

impl Width {
    /// Width of `columns`, clamped to 1..=16.
    pub fn new(columns: u8) -> Self {
        Self(columns.clamp(1, 16))
    }

    /// Numeric width.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Number word used by the grid classes (`"four"`).
    pub fn word(self) -> &'static str {
        WIDTH_WORDS[usize::from(self.0 - 1)]
    }
}
