//! Ayu palette definitions for the three scheme variants.
//!
//! Each variant exposes the same fixed set of semantic roles, grouped into
//! common/syntax/editor/ui/vcs categories. The role list is the contract
//! between the palette and both the color collector and the document
//! template; there is no dynamic discovery.

mod dark;
mod light;
mod mirage;

use std::fmt;
use std::str::FromStr;

use crate::color::Color;

/// The named Ayu scheme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeName {
    /// Light background variant.
    Light,
    /// Dark background variant.
    Dark,
    /// Mirage (muted dark) variant.
    Mirage,
}

impl SchemeName {
    /// All variants, in the order they are generated.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Mirage];

    /// Human-facing theme title, also used as the output file stem.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Light => "Ayu Light",
            Self::Dark => "Ayu Dark",
            Self::Mirage => "Ayu Mirage",
        }
    }
}

impl fmt::Display for SchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Mirage => "mirage",
        };
        f.write_str(s)
    }
}

impl FromStr for SchemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "mirage" => Ok(Self::Mirage),
            other => Err(format!(
                "unknown scheme variant {other:?} (expected light, dark, or mirage)"
            )),
        }
    }
}

/// Accent and state colors shared across the UI.
#[derive(Debug, Clone, Copy)]
pub struct Common {
    /// Primary accent (insertion point, debugger input).
    pub accent: Color,
    /// Error/danger state color.
    pub error: Color,
}

/// Syntax-highlighting token colors.
#[derive(Debug, Clone, Copy)]
pub struct Syntax {
    /// Tags and system identifiers.
    pub tag: Color,
    /// Functions and other declarations.
    pub func: Color,
    /// Types and classes.
    pub entity: Color,
    /// String literals and URLs.
    pub string: Color,
    /// Regular expressions.
    pub regexp: Color,
    /// Markup and doc comments.
    pub markup: Color,
    /// Keywords.
    pub keyword: Color,
    /// Preprocessor, macros, and system functions.
    pub special: Color,
    /// Comments.
    pub comment: Color,
    /// Numeric and character constants.
    pub constant: Color,
    /// Operators.
    pub operator: Color,
}

/// Editor surface colors.
#[derive(Debug, Clone, Copy)]
pub struct Editor {
    /// Plain text foreground.
    pub fg: Color,
    /// Editor background.
    pub bg: Color,
    /// Current-line highlight.
    pub line: Color,
    /// Active selection background.
    pub selection: Color,
}

/// UI chrome colors.
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    /// Separator/invisibles color.
    pub line: Color,
    /// Secondary foreground.
    pub fg: Color,
}

/// Version-control status colors.
#[derive(Debug, Clone, Copy)]
pub struct Vcs {
    /// Modified-lines marker.
    pub modified: Color,
}

/// A full scheme: every semantic role the template references.
#[derive(Debug, Clone, Copy)]
pub struct Scheme {
    /// Common accent/state colors.
    pub common: Common,
    /// Syntax token colors.
    pub syntax: Syntax,
    /// Editor surface colors.
    pub editor: Editor,
    /// UI chrome colors.
    pub ui: Ui,
    /// Version-control colors.
    pub vcs: Vcs,
}

/// Return the palette for the given scheme variant.
#[must_use]
pub fn scheme(name: SchemeName) -> Scheme {
    match name {
        SchemeName::Light => light::scheme(),
        SchemeName::Dark => dark::scheme(),
        SchemeName::Mirage => mirage::scheme(),
    }
}
