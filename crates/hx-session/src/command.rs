//! Session commands — the tokens typed at the main prompt.
//!
//! Every line read at the prompt is parsed into a [`Command`]. Matching is
//! case-insensitive and ignores surrounding whitespace. Anything that is not
//! a known token becomes [`Command::Unknown`], which the session reports
//! before prompting again.
//!
//! # Supported commands
//!
//! | Token    | Action                                        |
//! |----------|-----------------------------------------------|
//! | `n`      | Move to the next color                        |
//! | `p`      | Move to the previous color                    |
//! | `j`      | Jump to a hex code                            |
//! | `i`      | Jump to a decimal index                       |
//! | `r`      | Jump to a random color                        |
//! | `m`      | Mix with a hex code                           |
//! | `mixr`   | Mix with a random color                       |
//! | `mixi`   | Mix with a decimal index                      |
//! | `grad`   | Gradient from the current color to a hex code |
//! | `cs`     | Harmony scheme of the current color           |
//! | `export` | Export the current color to JSON              |
//! | `cb`     | Color-blindness simulation                    |
//! | `rcs`    | Harmony scheme of a random color              |
//! | `help`   | Show the command reference                    |
//! | `q`      | Quit                                          |

/// A parsed main-prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `n` — index + 1, saturating at the maximum.
    Next,

    /// `p` — index - 1, saturating at zero.
    Previous,

    /// `j` — prompt for a hex code and jump to it.
    JumpHex,

    /// `i` — prompt for a decimal index and jump to it.
    JumpIndex,

    /// `r` — jump to a uniformly random color.
    Random,

    /// `m` — prompt for a hex code and mix it with the current color.
    MixHex,

    /// `mixr` — mix the current color with a random one.
    MixRandom,

    /// `mixi` — prompt for a decimal index and mix it with the current color.
    MixIndex,

    /// `grad` — prompt for an end hex and step count, show the gradient.
    Gradient,

    /// `cs` — harmony scheme of the current color.
    Harmony,

    /// `export` — write the current color's metadata to JSON.
    Export,

    /// `cb` — color-blindness simulation of the current color.
    ColorBlindness,

    /// `rcs` — harmony scheme of a random base color.
    RandomScheme,

    /// `help` — command reference.
    Help,

    /// `q` — end the session.
    Quit,

    /// Anything else — the normalized input, for error reporting.
    Unknown(String),
}

/// `(token, description)` rows for the help screen, in display order.
pub const COMMAND_TABLE: &[(&str, &str)] = &[
    ("n", "Move to next color"),
    ("p", "Move to previous color"),
    ("j", "Jump to custom HEX"),
    ("i", "Jump to decimal index (0 to 16777215)"),
    ("r", "Jump to random color"),
    ("m", "Mix color with HEX"),
    ("mixr", "Mix with random color"),
    ("mixi", "Mix with decimal index (0 to 16777215)"),
    ("grad", "Gradient from current to specific HEX"),
    ("cs", "Show color harmony scheme for current color"),
    ("export", "Export current color to JSON"),
    ("cb", "Color blindness simulation of current color"),
    ("rcs", "Generate random color schemes"),
    ("help", "Show this help menu"),
    ("q", "Quit (or Ctrl+C)"),
];

impl Command {
    /// Parse one line of prompt input.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let token = input.trim().to_ascii_lowercase();
        match token.as_str() {
            "n" => Self::Next,
            "p" => Self::Previous,
            "j" => Self::JumpHex,
            "i" => Self::JumpIndex,
            "r" => Self::Random,
            "m" => Self::MixHex,
            "mixr" => Self::MixRandom,
            "mixi" => Self::MixIndex,
            "grad" => Self::Gradient,
            "cs" => Self::Harmony,
            "export" => Self::Export,
            "cb" => Self::ColorBlindness,
            "rcs" => Self::RandomScheme,
            "help" => Self::Help,
            "q" => Self::Quit,
            _ => Self::Unknown(token),
        }
    }
}

/// The prompt line listing every token.
#[must_use]
pub fn prompt_line() -> String {
    let tokens: Vec<&str> = COMMAND_TABLE.iter().map(|&(token, _)| token).collect();
    format!("Type [{}]: ", tokens.join("/"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
