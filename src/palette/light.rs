//! Ayu Light palette values.

use super::{Common, Editor, Scheme, Syntax, Ui, Vcs};
use crate::color::Color;

/// Return the Ayu Light scheme.
pub fn scheme() -> Scheme {
    Scheme {
        common: Common {
            accent: Color::rgb(0xFF, 0xAA, 0x33),
            error: Color::rgb(0xE6, 0x50, 0x50),
        },
        syntax: Syntax {
            tag: Color::rgb(0x55, 0xB4, 0xD4),
            func: Color::rgb(0xF2, 0xAE, 0x49),
            entity: Color::rgb(0x39, 0x9E, 0xE6),
            string: Color::rgb(0x86, 0xB3, 0x00),
            regexp: Color::rgb(0x4C, 0xBF, 0x99),
            markup: Color::rgb(0xF0, 0x71, 0x71),
            keyword: Color::rgb(0xFA, 0x8D, 0x3E),
            special: Color::rgb(0xE6, 0xBA, 0x7E),
            comment: Color::rgb(0x78, 0x7B, 0x80),
            constant: Color::rgb(0xA3, 0x7A, 0xCC),
            operator: Color::rgb(0xED, 0x93, 0x66),
        },
        editor: Editor {
            fg: Color::rgb(0x5C, 0x61, 0x66),
            bg: Color::rgb(0xFC, 0xFC, 0xFC),
            line: Color::rgb(0x8A, 0x91, 0x99).fade(0.1),
            selection: Color::rgb(0x03, 0x5B, 0xD6).fade(0.15),
        },
        ui: Ui {
            line: Color::rgb(0x6B, 0x7D, 0x8F).fade(0.12),
            fg: Color::rgb(0x8A, 0x91, 0x99),
        },
        vcs: Vcs {
            modified: Color::rgb(0x47, 0x8A, 0xCC),
        },
    }
}
