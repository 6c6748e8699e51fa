//! The interactive session: one current color and a command loop.
//!
//! ```text
//!   ┌──────────────┐   line    ┌─────────┐  Command  ┌─────────┐
//!   │ Prompt<R>    │ ────────▶ │ parse   │ ────────▶ │ execute │
//!   └──────────────┘           └─────────┘           └────┬────┘
//!          ▲                                              │
//!          │  sub-prompts (hex, index, steps)             │ hx-color
//!          └──────────────────────────────────────────────┤
//!                                                         ▼
//!                                Painter<W>  ◀── status, swatches, errors
//!                                Exporter    ◀── mix / gradient / color records
//! ```
//!
//! Invalid input and failed exports are reported and leave the current color
//! untouched. Only terminal I/O failures end the loop early.

use std::io::{self, BufRead, Write};
use std::num::NonZeroU32;

use hx_color::blend::{DEFAULT_GRADIENT_STEPS, MAX_GRADIENT_STEPS};
use hx_color::metadata::format_ratio;
use hx_color::{
    COLOR_COUNT, Color, ColorError, ColorMetadata, HarmonyScheme, MAX_INDEX, gradient,
    harmony_scheme, mix, negative, parse_index, random_color, random_scheme,
    simulate_color_blindness,
};
use hx_term::Painter;
use rand::Rng;
use thiserror::Error;

use crate::command::{COMMAND_TABLE, Command, prompt_line};
use crate::export::{ExportRecord, Exporter};
use crate::prompt::{Prompt, strip_hash};

/// Width of the role / deficiency column in scheme listings.
const LABEL_WIDTH: usize = 13;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Unrecoverable session failure.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Outcome of a sub-prompt.
enum Answer<T> {
    Value(T),
    Invalid(ColorError),
    Eof,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Owns the current color and the collaborators it draws and exports with.
pub struct Session<W: Write, E: Exporter, R: Rng> {
    current: Color,
    painter: Painter<W>,
    exporter: E,
    rng: R,
}

impl<W: Write, E: Exporter, R: Rng> Session<W, E, R> {
    pub const fn new(start: Color, painter: Painter<W>, exporter: E, rng: R) -> Self {
        Self {
            current: start,
            painter,
            exporter,
            rng,
        }
    }

    /// The color the session is positioned on.
    #[must_use]
    pub const fn current(&self) -> Color {
        self.current
    }

    pub const fn painter(&self) -> &Painter<W> {
        &self.painter
    }

    pub const fn exporter(&self) -> &E {
        &self.exporter
    }

    /// Show status, read a command, execute it; repeat until `q` or end of
    /// input.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the terminal cannot be written or
    /// input cannot be read.
    pub fn run<B: BufRead>(&mut self, prompt: &mut Prompt<B>) -> Result<(), SessionError> {
        loop {
            self.show_status()?;
            self.painter.blank()?;
            self.painter.text(&prompt_line())?;

            let command = match prompt.read_line()? {
                Some(line) => Command::parse(&line),
                None => {
                    self.painter.blank()?;
                    Command::Quit
                }
            };
            if self.execute(command, prompt)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Execute one command, reading any follow-up input from `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] on terminal failures. Bad input and
    /// export failures are reported to the user instead.
    pub fn execute<B: BufRead>(
        &mut self,
        command: Command,
        prompt: &mut Prompt<B>,
    ) -> Result<Flow, SessionError> {
        tracing::debug!(?command, current = %self.current, "execute");

        match command {
            Command::Next => self.move_to(self.current.next()),
            Command::Previous => self.move_to(self.current.previous()),
            Command::JumpHex => {
                match self.ask_hex(prompt, "Jump to HEX (without #, e.g. FF0000): ")? {
                    Answer::Value(color) => self.move_to(color),
                    Answer::Invalid(err) => self.reject("invalid HEX entered", &err)?,
                    Answer::Eof => return Ok(Flow::Quit),
                }
            }
            Command::JumpIndex => {
                match self.ask_index(prompt, "Jump to index (0 to 16777215): ")? {
                    Answer::Value(color) => self.move_to(color),
                    Answer::Invalid(err) => self.reject("invalid index entered", &err)?,
                    Answer::Eof => return Ok(Flow::Quit),
                }
            }
            Command::Random => {
                let color = random_color(&mut self.rng);
                self.move_to(color);
            }
            Command::MixHex => {
                match self.ask_hex(prompt, "Second HEX to mix (without #, e.g. FF0000): ")? {
                    Answer::Value(other) => self.show_mix(other)?,
                    Answer::Invalid(err) => self.reject("invalid HEX entered", &err)?,
                    Answer::Eof => return Ok(Flow::Quit),
                }
            }
            Command::MixRandom => {
                let other = random_color(&mut self.rng);
                self.painter.line(format_args!("Random HEX to mix: #{other}"))?;
                self.show_mix(other)?;
            }
            Command::MixIndex => {
                match self.ask_index(prompt, "Decimal index to mix (0 to 16777215): ")? {
                    Answer::Value(other) => self.show_mix(other)?,
                    Answer::Invalid(err) => self.reject("invalid index entered", &err)?,
                    Answer::Eof => return Ok(Flow::Quit),
                }
            }
            Command::Gradient => {
                let question = "Second HEX for gradient (without #, e.g. FF0000): ";
                let to = match self.ask_hex(prompt, question)? {
                    Answer::Value(to) => to,
                    Answer::Invalid(err) => {
                        self.reject("invalid HEX entered", &err)?;
                        return Ok(Flow::Continue);
                    }
                    Answer::Eof => return Ok(Flow::Quit),
                };
                self.painter.text("Steps (default 5): ")?;
                let Some(input) = prompt.read_line()? else {
                    return Ok(Flow::Quit);
                };
                match parse_steps(&input) {
                    Ok(steps) => self.show_gradient(to, steps)?,
                    Err(err) => self.reject(
                        &format!("too many steps, the maximum is {MAX_GRADIENT_STEPS}"),
                        &err,
                    )?,
                }
            }
            Command::Harmony => {
                self.painter.blank()?;
                self.painter.line(format_args!("Color scheme for #{}", self.current))?;
                self.painter.hex_swatch(self.current)?;
                self.show_scheme(&harmony_scheme(self.current))?;
            }
            Command::Export => self.export(&ExportRecord::color(self.current))?,
            Command::ColorBlindness => self.show_color_blindness()?,
            Command::RandomScheme => {
                let scheme = random_scheme(&mut self.rng);
                self.painter.blank()?;
                self.painter.line(format_args!("Random base color: #{}", scheme.base()))?;
                self.painter.hex_swatch(scheme.base())?;
                self.painter.blank()?;
                self.painter.heading("Random color schemes:")?;
                self.show_scheme(&scheme)?;
            }
            Command::Help => write_help(&mut self.painter)?,
            Command::Quit => {
                self.painter.line(format_args!("Goodbye from hexplorer!"))?;
                self.painter.flush()?;
                return Ok(Flow::Quit);
            }
            Command::Unknown(token) => {
                tracing::debug!(%token, "unknown command");
                self.painter.error(&format!(
                    "unknown command `{token}`, type `help` to list all commands"
                ))?;
            }
        }
        Ok(Flow::Continue)
    }

    // -- Navigation ---------------------------------------------------------

    fn move_to(&mut self, color: Color) {
        if color != self.current {
            tracing::debug!(from = %self.current, to = %color, "move");
        }
        self.current = color;
    }

    // -- Sub-prompts --------------------------------------------------------

    fn ask<B: BufRead>(
        &mut self,
        prompt: &mut Prompt<B>,
        question: &str,
    ) -> Result<Option<String>, SessionError> {
        self.painter.text(question)?;
        Ok(prompt.read_line()?)
    }

    fn ask_hex<B: BufRead>(
        &mut self,
        prompt: &mut Prompt<B>,
        question: &str,
    ) -> Result<Answer<Color>, SessionError> {
        Ok(match self.ask(prompt, question)? {
            Some(line) => match Color::hex(strip_hash(&line)) {
                Ok(color) => Answer::Value(color),
                Err(err) => Answer::Invalid(err),
            },
            None => Answer::Eof,
        })
    }

    fn ask_index<B: BufRead>(
        &mut self,
        prompt: &mut Prompt<B>,
        question: &str,
    ) -> Result<Answer<Color>, SessionError> {
        Ok(match self.ask(prompt, question)? {
            Some(line) => match parse_index(&line) {
                Ok(index) => Answer::Value(Color::from_index(index)),
                Err(err) => Answer::Invalid(err),
            },
            None => Answer::Eof,
        })
    }

    fn reject(&mut self, message: &str, err: &ColorError) -> io::Result<()> {
        tracing::warn!(%err, "rejected input");
        self.painter.error(message)
    }

    // -- Views --------------------------------------------------------------

    fn show_status(&mut self) -> io::Result<()> {
        let current = self.current;
        let neg = negative(current.index());

        self.painter.blank()?;
        self.painter.line(format_args!("Current Color   : #{current}"))?;
        self.painter.hex_swatch(current)?;
        self.painter.line(format_args!("Negative Color  : #{neg}"))?;
        self.painter.hex_swatch(neg)?;
        self.painter.line(format_args!(
            "Decimal Index   : {} / {MAX_INDEX}",
            current.index()
        ))?;
        self.show_tech_info(current)
    }

    fn show_tech_info(&mut self, color: Color) -> io::Result<()> {
        let meta = ColorMetadata::of(color);
        let (r, g, b) = color.to_rgb8();
        self.painter.heading("Technical Info:")?;
        self.painter.line(format_args!("   RGB              : {r}, {g}, {b}"))?;
        self.painter.line(format_args!("   Luminance        : {:.6}", meta.luminance))?;
        self.painter.line(format_args!(
            "   Contrast vs White: {}",
            format_ratio(meta.contrast_vs_white)
        ))?;
        self.painter.line(format_args!("   Name             : {}", meta.name))
    }

    fn show_mix(&mut self, other: Color) -> Result<(), SessionError> {
        let base = self.current;
        let mixed = mix(base, other);
        let neg = negative(mixed.index());

        self.painter.blank()?;
        self.painter.line(format_args!("Mixing #{base} + #{other} => #{mixed}"))?;
        self.painter.hex_swatch(base)?;
        self.painter.hex_swatch(other)?;
        self.painter.line(format_args!("Result:"))?;
        self.painter.hex_swatch(mixed)?;
        self.painter.line(format_args!("Negative Color      : #{neg}"))?;
        self.painter.hex_swatch(neg)?;
        self.painter.line(format_args!(
            "Mixed Color Index   : {} / {MAX_INDEX}",
            mixed.index()
        ))?;
        self.show_tech_info(mixed)?;

        self.export(&ExportRecord::mix(base, other, mixed))
    }

    fn show_gradient(&mut self, to: Color, steps: NonZeroU32) -> Result<(), SessionError> {
        let from = self.current;
        let colors = gradient(from, to, steps);

        self.painter.blank()?;
        self.painter
            .line(format_args!("Gradient: #{from} -> #{to} ({steps} steps)"))?;
        for &color in &colors {
            self.painter.hex_swatch(color)?;
        }

        self.export(&ExportRecord::gradient(from, to, steps, &colors))
    }

    fn show_scheme(&mut self, scheme: &HarmonyScheme) -> io::Result<()> {
        for &(role, color) in scheme.entries() {
            self.painter.swatch(
                color,
                &format!("{:<width$} #{color}", role.name(), width = LABEL_WIDTH),
            )?;
        }
        Ok(())
    }

    fn show_color_blindness(&mut self) -> io::Result<()> {
        let current = self.current;
        self.painter.blank()?;
        self.painter
            .line(format_args!("Color blindness simulation for #{current}:"))?;
        self.painter.hex_swatch(current)?;
        for (deficiency, color) in simulate_color_blindness(current) {
            self.painter.swatch(
                color,
                &format!("{:<width$} #{color}", deficiency.name(), width = LABEL_WIDTH),
            )?;
        }
        Ok(())
    }

    // -- Export -------------------------------------------------------------

    fn export(&mut self, record: &ExportRecord) -> Result<(), SessionError> {
        match self.exporter.export(record) {
            Ok(path) => {
                self.painter
                    .line(format_args!("Exported to: {}", path.display()))?;
            }
            Err(err) => {
                tracing::warn!(%err, file = %record.file_name(), "export failed");
                self.painter.error(&format!("failed to export JSON: {err}"))?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Parse the gradient step count.
///
/// Input that is not a positive integer (empty, signed, zero, non-numeric)
/// means the default.
///
/// # Errors
///
/// [`ColorError::InvalidNumber`] for a count above [`MAX_GRADIENT_STEPS`].
pub fn parse_steps(input: &str) -> Result<NonZeroU32, ColorError> {
    let input = input.trim();
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(DEFAULT_GRADIENT_STEPS);
    }
    let digits = input.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(DEFAULT_GRADIENT_STEPS);
    }
    match digits.parse::<u32>().ok().and_then(NonZeroU32::new) {
        Some(steps) if steps <= MAX_GRADIENT_STEPS => Ok(steps),
        _ => Err(ColorError::InvalidNumber(input.to_string())),
    }
}

/// Print the welcome banner.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_banner<W: Write>(painter: &mut Painter<W>) -> io::Result<()> {
    const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

    painter.line(format_args!("{RULE}"))?;
    painter.heading("Welcome to hexplorer - explore colors by HEX and decimal")?;
    painter.line(format_args!("{RULE}"))?;
    write_help(painter)?;
    painter.line(format_args!("{RULE}"))?;
    painter.line(format_args!(
        "Color index range: 0 to {MAX_INDEX} (total: {COLOR_COUNT} colors)"
    ))?;
    painter.line(format_args!("{RULE}"))
}

/// Print the command reference.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_help<W: Write>(painter: &mut Painter<W>) -> io::Result<()> {
    painter.blank()?;
    painter.heading("Available commands:")?;
    painter.blank()?;
    for &(token, description) in COMMAND_TABLE {
        painter.line(format_args!("   {token:<7} {description}"))?;
    }
    Ok(())
}

/// Ask for the starting color until a valid hex is entered. `None` at end of
/// input.
///
/// # Errors
///
/// Returns [`SessionError::Io`] on terminal failures.
pub fn ask_start_color<W: Write, B: BufRead>(
    painter: &mut Painter<W>,
    prompt: &mut Prompt<B>,
) -> Result<Option<Color>, SessionError> {
    loop {
        painter.blank()?;
        painter.text("Start by entering a 6-digit HEX (without #, e.g. FF0000): ")?;
        let Some(line) = prompt.read_line()? else {
            return Ok(None);
        };
        match Color::hex(strip_hash(&line)) {
            Ok(color) => return Ok(Some(color)),
            Err(err) => {
                tracing::debug!(%err, "invalid start color");
                painter.error("invalid HEX, try again")?;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
