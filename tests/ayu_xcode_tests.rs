//! Core conversion/caching contract tests using a stub converter.

use ayu_xcode as crate_root;

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use crate_root::collect::collect_colors;
use crate_root::color::Color;
use crate_root::convert::{ConversionCache, ConvertColors, ConvertError};
use crate_root::palette::{SchemeName, scheme};
use crate_root::template::rgba;

/// Stub conversion capability: fixed table, counts batch invocations.
struct StubConverter {
    table: HashMap<String, [f64; 3]>,
    calls: RefCell<usize>,
}

impl StubConverter {
    fn identity_for(keys: &BTreeSet<String>) -> Self {
        // Map each key to a distinct, recognizable triple.
        let table = keys
            .iter()
            .enumerate()
            .map(|(i, k)| {
                let v = f64::from(u32::try_from(i).expect("small index")) / 100.0;
                (k.clone(), [v, v + 0.001, v + 0.002])
            })
            .collect();
        Self {
            table,
            calls: RefCell::new(0),
        }
    }

    fn with_table(table: HashMap<String, [f64; 3]>) -> Self {
        Self {
            table,
            calls: RefCell::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

impl ConvertColors for StubConverter {
    fn convert_batch(&self, keys: &[String]) -> Result<Vec<(String, [f64; 3])>, ConvertError> {
        *self.calls.borrow_mut() += 1;
        keys.iter()
            .map(|k| {
                self.table
                    .get(k)
                    .map(|rgb| (k.clone(), *rgb))
                    .ok_or_else(|| ConvertError::BatchFailed(format!("no stub entry for {k}")))
            })
            .collect()
    }
}

#[test]
fn collect_is_deterministic_per_variant() {
    for name in SchemeName::ALL {
        let s = scheme(name);
        let a = collect_colors(&s);
        let b = collect_colors(&s);
        assert_eq!(a, b, "variant {name} must collect a stable set");
        assert!(!a.is_empty(), "real schemes are non-empty");
    }
}

#[test]
fn shared_rgb_across_roles_collects_once() {
    let mut s = scheme(SchemeName::Light);
    s.ui.fg = s.editor.fg;
    let keys = collect_colors(&s);
    assert_eq!(
        keys.iter().filter(|k| **k == s.editor.fg.hex_key()).count(),
        1
    );
}

#[test]
fn convert_all_makes_exactly_one_batch_call() {
    let keys = collect_colors(&scheme(SchemeName::Dark));
    let stub = StubConverter::identity_for(&keys);
    let mut cache = ConversionCache::new();
    cache.convert_all(&keys, &stub).expect("stub conversion");
    assert_eq!(stub.calls(), 1, "one external invocation per scheme");
    assert_eq!(cache.len(), keys.len());
}

#[test]
fn cache_is_complete_after_convert_all() {
    let keys = collect_colors(&scheme(SchemeName::Mirage));
    let stub = StubConverter::identity_for(&keys);
    let mut cache = ConversionCache::new();
    cache.convert_all(&keys, &stub).expect("stub conversion");
    for k in &keys {
        cache.lookup(k).expect("every collected key is cached");
    }
}

#[test]
fn missing_key_surfaces_not_preconverted_without_side_effects() {
    let keys = collect_colors(&scheme(SchemeName::Dark));
    let stub = StubConverter::identity_for(&keys);
    let mut cache = ConversionCache::new();
    cache.convert_all(&keys, &stub).expect("stub conversion");

    let err = cache.lookup("ABCDEF").expect_err("uncollected key");
    match err {
        ConvertError::NotPreconverted(hex) => assert_eq!(hex, "ABCDEF"),
        other => panic!("expected NotPreconverted, got {other:?}"),
    }
    // The miss must not fall back to an on-demand conversion.
    assert_eq!(stub.calls(), 1);
}

#[test]
fn empty_set_is_a_no_op() {
    let stub = StubConverter::with_table(HashMap::new());
    let mut cache = ConversionCache::new();
    cache
        .convert_all(&BTreeSet::new(), &stub)
        .expect("empty set is valid");
    assert_eq!(stub.calls(), 0, "no external call for an empty set");
    assert!(cache.is_empty());
}

#[test]
fn converter_failure_is_fatal_for_the_batch() {
    struct FailingConverter;
    impl ConvertColors for FailingConverter {
        fn convert_batch(
            &self,
            _keys: &[String],
        ) -> Result<Vec<(String, [f64; 3])>, ConvertError> {
            Err(ConvertError::BatchFailed("process unavailable".into()))
        }
    }
    let keys: BTreeSet<String> = ["FFFFFF".to_string()].into_iter().collect();
    let mut cache = ConversionCache::new();
    let err = cache
        .convert_all(&keys, &FailingConverter)
        .expect_err("failure propagates");
    assert!(matches!(err, ConvertError::BatchFailed(_)));
}

#[test]
fn unrequested_color_in_response_is_a_batch_failure() {
    struct ChattyConverter;
    impl ConvertColors for ChattyConverter {
        fn convert_batch(
            &self,
            keys: &[String],
        ) -> Result<Vec<(String, [f64; 3])>, ConvertError> {
            let mut out: Vec<(String, [f64; 3])> =
                keys.iter().map(|k| (k.clone(), [0.0; 3])).collect();
            out.push(("DEADBE".to_string(), [0.0; 3]));
            Ok(out)
        }
    }
    let keys: BTreeSet<String> = ["FFFFFF".to_string()].into_iter().collect();
    let mut cache = ConversionCache::new();
    let err = cache
        .convert_all(&keys, &ChattyConverter)
        .expect_err("unrequested color rejected");
    assert!(matches!(err, ConvertError::BatchFailed(_)));
}

#[test]
fn omitted_color_in_response_is_a_batch_failure() {
    struct ForgetfulConverter;
    impl ConvertColors for ForgetfulConverter {
        fn convert_batch(
            &self,
            keys: &[String],
        ) -> Result<Vec<(String, [f64; 3])>, ConvertError> {
            Ok(keys
                .iter()
                .skip(1)
                .map(|k| (k.clone(), [0.0; 3]))
                .collect())
        }
    }
    let keys: BTreeSet<String> = ["000000".to_string(), "FFFFFF".to_string()]
        .into_iter()
        .collect();
    let mut cache = ConversionCache::new();
    let err = cache
        .convert_all(&keys, &ForgetfulConverter)
        .expect_err("missing conversion rejected");
    assert!(matches!(err, ConvertError::BatchFailed(_)));
}

#[test]
fn rgba_round_trip_white_opaque() {
    let table = HashMap::from([("FFFFFF".to_string(), [1.0, 1.0, 1.0])]);
    let stub = StubConverter::with_table(table);
    let keys: BTreeSet<String> = ["FFFFFF".to_string()].into_iter().collect();
    let mut cache = ConversionCache::new();
    cache.convert_all(&keys, &stub).expect("stub conversion");

    let s = rgba(&Color::rgb(0xFF, 0xFF, 0xFF), &cache).expect("cached color");
    assert_eq!(s, "1 1 1 1");
}

#[test]
fn rgba_alpha_passthrough() {
    let table = HashMap::from([("000000".to_string(), [0.0, 0.0, 0.0])]);
    let stub = StubConverter::with_table(table);
    let keys: BTreeSet<String> = ["000000".to_string()].into_iter().collect();
    let mut cache = ConversionCache::new();
    cache.convert_all(&keys, &stub).expect("stub conversion");

    let s = rgba(&Color::rgb(0, 0, 0).fade(0.5), &cache).expect("cached color");
    assert_eq!(s, "0 0 0 0.5");
}
