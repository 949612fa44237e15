//! Ayu Dark palette values.

use super::{Common, Editor, Scheme, Syntax, Ui, Vcs};
use crate::color::Color;

/// Return the Ayu Dark scheme.
pub fn scheme() -> Scheme {
    Scheme {
        common: Common {
            accent: Color::rgb(0xE6, 0xB4, 0x50),
            error: Color::rgb(0xD9, 0x57, 0x57),
        },
        syntax: Syntax {
            tag: Color::rgb(0x39, 0xBA, 0xE6),
            func: Color::rgb(0xFF, 0xB4, 0x54),
            entity: Color::rgb(0x59, 0xC2, 0xFF),
            string: Color::rgb(0xAA, 0xD9, 0x4C),
            regexp: Color::rgb(0x95, 0xE6, 0xCB),
            markup: Color::rgb(0xF0, 0x71, 0x78),
            keyword: Color::rgb(0xFF, 0x8F, 0x40),
            special: Color::rgb(0xE6, 0xB6, 0x73),
            comment: Color::rgb(0xAC, 0xB6, 0xBF).fade(0.55),
            constant: Color::rgb(0xD2, 0xA6, 0xFF),
            operator: Color::rgb(0xF2, 0x96, 0x68),
        },
        editor: Editor {
            fg: Color::rgb(0xBF, 0xBD, 0xB6),
            bg: Color::rgb(0x0D, 0x10, 0x17),
            line: Color::rgb(0x13, 0x17, 0x21),
            selection: Color::rgb(0x40, 0x9F, 0xFF).fade(0.3),
        },
        ui: Ui {
            line: Color::rgb(0x11, 0x15, 0x1C),
            fg: Color::rgb(0x56, 0x5B, 0x66),
        },
        vcs: Vcs {
            modified: Color::rgb(0x73, 0xB8, 0xFF),
        },
    }
}
