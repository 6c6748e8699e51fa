//! Harmony schemes: colors derived from a base by fixed channel rules.
//!
//! | Role          | Rule                         |
//! |---------------|------------------------------|
//! | Complementary | `(255-r, 255-g, 255-b)`      |
//! | Analogous 1   | `(r, g+30, b)`, clamped      |
//! | Analogous 2   | `(r, g-30, b)`, clamped      |
//! | Triadic 1     | `(b, r, g)`                  |
//! | Triadic 2     | `(g, b, r)`                  |
//! | Tetradic 1    | `(255-r, 255-g, b)`          |
//! | Tetradic 2    | `(r, g, 255-b)`              |
//!
//! A [`HarmonyScheme`] keeps its entries in the table's order so display and
//! export are deterministic.

use std::fmt;

use rand::Rng;

use crate::color::{Color, random_color};

/// Green-channel shift for the analogous roles.
pub const ANALOGOUS_SHIFT: u8 = 30;

// ---------------------------------------------------------------------------
// HarmonyRole
// ---------------------------------------------------------------------------

/// One named member of a harmony scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyRole {
    Complementary,
    Analogous1,
    Analogous2,
    Triadic1,
    Triadic2,
    Tetradic1,
    Tetradic2,
}

impl HarmonyRole {
    /// Every role, in display order.
    pub const ALL: [Self; 7] = [
        Self::Complementary,
        Self::Analogous1,
        Self::Analogous2,
        Self::Triadic1,
        Self::Triadic2,
        Self::Tetradic1,
        Self::Tetradic2,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous1 => "Analogous 1",
            Self::Analogous2 => "Analogous 2",
            Self::Triadic1 => "Triadic 1",
            Self::Triadic2 => "Triadic 2",
            Self::Tetradic1 => "Tetradic 1",
            Self::Tetradic2 => "Tetradic 2",
        }
    }

    /// Apply this role's rule to `base`.
    #[must_use]
    pub const fn derive(self, base: Color) -> Color {
        let Color { r, g, b } = base;
        match self {
            Self::Complementary => Color::rgb(255 - r, 255 - g, 255 - b),
            Self::Analogous1 => Color::rgb(r, g.saturating_add(ANALOGOUS_SHIFT), b),
            Self::Analogous2 => Color::rgb(r, g.saturating_sub(ANALOGOUS_SHIFT), b),
            Self::Triadic1 => Color::rgb(b, r, g),
            Self::Triadic2 => Color::rgb(g, b, r),
            Self::Tetradic1 => Color::rgb(255 - r, 255 - g, b),
            Self::Tetradic2 => Color::rgb(r, g, 255 - b),
        }
    }
}

impl fmt::Display for HarmonyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// HarmonyScheme
// ---------------------------------------------------------------------------

/// A base color and its seven derived harmony colors, in fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmonyScheme {
    base: Color,
    entries: [(HarmonyRole, Color); 7],
}

impl HarmonyScheme {
    /// The color the scheme was derived from.
    #[must_use]
    pub const fn base(&self) -> Color {
        self.base
    }

    /// `(role, color)` pairs in display order.
    #[must_use]
    pub const fn entries(&self) -> &[(HarmonyRole, Color)] {
        &self.entries
    }
}

/// Derive the harmony scheme of `base`.
#[must_use]
pub fn harmony_scheme(base: Color) -> HarmonyScheme {
    HarmonyScheme {
        base,
        entries: HarmonyRole::ALL.map(|role| (role, role.derive(base))),
    }
}

/// Pick a uniformly random base color and derive its scheme.
pub fn random_scheme<R: Rng + ?Sized>(rng: &mut R) -> HarmonyScheme {
    harmony_scheme(random_color(rng))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
