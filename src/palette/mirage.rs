//! Ayu Mirage palette values.

use super::{Common, Editor, Scheme, Syntax, Ui, Vcs};
use crate::color::Color;

/// Return the Ayu Mirage scheme.
pub fn scheme() -> Scheme {
    Scheme {
        common: Common {
            accent: Color::rgb(0xFF, 0xCC, 0x66),
            error: Color::rgb(0xFF, 0x66, 0x66),
        },
        syntax: Syntax {
            tag: Color::rgb(0x5C, 0xCF, 0xE6),
            func: Color::rgb(0xFF, 0xD1, 0x73),
            entity: Color::rgb(0x73, 0xD0, 0xFF),
            string: Color::rgb(0xD5, 0xFF, 0x80),
            regexp: Color::rgb(0x95, 0xE6, 0xCB),
            markup: Color::rgb(0xF2, 0x87, 0x79),
            keyword: Color::rgb(0xFF, 0xAD, 0x66),
            special: Color::rgb(0xFF, 0xDF, 0xB3),
            comment: Color::rgb(0xB8, 0xCF, 0xE6).fade(0.5),
            constant: Color::rgb(0xDF, 0xBF, 0xFF),
            operator: Color::rgb(0xF2, 0x9E, 0x74),
        },
        editor: Editor {
            fg: Color::rgb(0xCC, 0xCA, 0xC2),
            bg: Color::rgb(0x24, 0x29, 0x36),
            line: Color::rgb(0x1A, 0x1F, 0x29),
            selection: Color::rgb(0x40, 0x9F, 0xFF).fade(0.25),
        },
        ui: Ui {
            line: Color::rgb(0x17, 0x1B, 0x24),
            fg: Color::rgb(0x70, 0x7A, 0x8C),
        },
        vcs: Vcs {
            modified: Color::rgb(0x77, 0xA8, 0xD9),
        },
    }
}
