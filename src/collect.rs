//! Color collector: the deduplicated set of hex keys a scheme references.

use std::collections::BTreeSet;

use crate::color::Color;
use crate::palette::Scheme;

/// What: Collect every distinct hex key referenced by a scheme.
///
/// Inputs:
/// - `scheme`: Palette for one variant; the role walk below is the fixed
///   contract with the palette module.
///
/// Output:
/// - Ordered set of canonical hex keys. Roles sharing an RGB value contribute
///   one key; alpha plays no part.
///
/// Details:
/// - Pure function of the scheme. The stable `BTreeSet` order keeps the batch
///   conversion request reproducible across runs.
#[must_use]
pub fn collect_colors(scheme: &Scheme) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut add = |c: &Color| {
        keys.insert(c.hex_key());
    };

    // Common
    add(&scheme.common.accent);
    add(&scheme.common.error);

    // Syntax
    add(&scheme.syntax.tag);
    add(&scheme.syntax.func);
    add(&scheme.syntax.entity);
    add(&scheme.syntax.string);
    add(&scheme.syntax.regexp);
    add(&scheme.syntax.markup);
    add(&scheme.syntax.keyword);
    add(&scheme.syntax.special);
    add(&scheme.syntax.comment);
    add(&scheme.syntax.constant);
    add(&scheme.syntax.operator);

    // Editor
    add(&scheme.editor.fg);
    add(&scheme.editor.bg);
    add(&scheme.editor.line);
    add(&scheme.editor.selection);

    // UI
    add(&scheme.ui.line);
    add(&scheme.ui.fg);

    // VCS
    add(&scheme.vcs.modified);

    keys
}

#[cfg(test)]
mod tests {
    use super::collect_colors;
    use crate::color::Color;
    use crate::palette::{SchemeName, scheme};

    #[test]
    fn collection_is_deterministic() {
        for name in SchemeName::ALL {
            let s = scheme(name);
            assert_eq!(collect_colors(&s), collect_colors(&s));
        }
    }

    #[test]
    fn roles_sharing_an_rgb_value_dedupe() {
        let mut s = scheme(SchemeName::Dark);
        let shared = Color::rgb(0x12, 0x34, 0x56);
        s.syntax.tag = shared;
        s.syntax.func = shared.fade(0.4);
        let keys = collect_colors(&s);
        assert_eq!(keys.iter().filter(|k| *k == "123456").count(), 1);
    }

    #[test]
    fn every_role_is_covered() {
        let s = scheme(SchemeName::Mirage);
        let keys = collect_colors(&s);
        assert!(keys.contains(&s.common.accent.hex_key()));
        assert!(keys.contains(&s.syntax.comment.hex_key()));
        assert!(keys.contains(&s.editor.selection.hex_key()));
        assert!(keys.contains(&s.ui.fg.hex_key()));
        assert!(keys.contains(&s.vcs.modified.hex_key()));
    }
}
