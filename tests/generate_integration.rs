//! End-to-end generation tests: render the full document and write files
//! through the pipeline with a stub converter.

use ayu_xcode as crate_root;

use std::collections::BTreeSet;

use crate_root::app::generate_variant;
use crate_root::collect::collect_colors;
use crate_root::convert::{ConversionCache, ConvertColors, ConvertError};
use crate_root::palette::{SchemeName, scheme};
use crate_root::template::render;

/// Converts every requested key to a fixed gray triple.
struct GrayConverter;

impl ConvertColors for GrayConverter {
    fn convert_batch(&self, keys: &[String]) -> Result<Vec<(String, [f64; 3])>, ConvertError> {
        Ok(keys.iter().map(|k| (k.clone(), [0.25, 0.5, 0.75])).collect())
    }
}

fn populated_cache(keys: &BTreeSet<String>) -> ConversionCache {
    let mut cache = ConversionCache::new();
    cache
        .convert_all(keys, &GrayConverter)
        .expect("stub conversion succeeds");
    cache
}

#[test]
fn rendered_document_is_a_complete_plist() {
    let s = scheme(SchemeName::Dark);
    let cache = populated_cache(&collect_colors(&s));
    let doc = render(&s, &cache).expect("all colors pre-converted");

    assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(doc.contains("<key>DVTSourceTextSyntaxColors</key>"));
    assert!(doc.contains("<key>DVTSourceTextSyntaxFonts</key>"));
    assert!(doc.contains("<key>xcode.syntax.keyword</key>"));
    assert!(doc.contains("<key>DVTSourceTextBackground</key>"));
    assert!(doc.contains("0.25 0.5 0.75"));
    assert!(doc.trim_end().ends_with("</plist>"));
}

#[test]
fn render_against_an_empty_cache_fails_loudly() {
    let s = scheme(SchemeName::Light);
    let cache = ConversionCache::new();
    let err = render(&s, &cache).expect_err("nothing pre-converted");
    assert!(matches!(err, ConvertError::NotPreconverted(_)));
}

#[test]
fn translucent_roles_keep_their_alpha_in_the_document() {
    let s = scheme(SchemeName::Dark);
    let cache = populated_cache(&collect_colors(&s));
    let doc = render(&s, &cache).expect("all colors pre-converted");
    // Dark's comment color carries alpha 0.55; the converted RGB is the
    // stub gray, alpha must survive untouched.
    assert!(doc.contains("0.25 0.5 0.75 0.55"));
}

#[test]
fn generate_variant_writes_the_theme_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_variant(SchemeName::Mirage, &GrayConverter, dir.path(), false)
        .expect("generation succeeds");

    let path = dir.path().join("Ayu Mirage.xccolortheme");
    let contents = std::fs::read_to_string(&path).expect("file written");
    assert!(contents.contains("<plist version=\"1.0\">"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate_variant(SchemeName::Light, &GrayConverter, dir.path(), true)
        .expect("dry run succeeds");

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .expect("readable dir")
        .collect();
    assert!(entries.is_empty(), "dry run must not create files");
}

#[test]
fn each_variant_gets_its_own_cache_and_file_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in SchemeName::ALL {
        generate_variant(name, &GrayConverter, dir.path(), false).expect("generation succeeds");
    }
    for name in SchemeName::ALL {
        let path = dir.path().join(format!("{}.xccolortheme", name.title()));
        assert!(path.exists(), "missing output for {name}");
    }
}
