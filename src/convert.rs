//! Color-space conversion: batch converter seam and per-run cache.
//!
//! Xcode theme color strings are interpreted in Apple's generic (calibrated)
//! RGB space, while the palette is authored in sRGB. The transform itself is
//! an opaque color-management capability behind [`ConvertColors`]; this module
//! owns the batching and memoization around it so that one scheme variant
//! costs exactly one external invocation, however many roles reuse a color.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

/// Errors from the conversion layer.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The batch conversion call did not complete. Fatal for the current
    /// scheme variant; no partial cache state is usable afterward.
    #[error("batch color conversion failed: {0}")]
    BatchFailed(String),
    /// A lookup asked for a hex key the collection phase never submitted.
    /// Always a defect in the collector, never a transient condition.
    #[error("color {0} not pre-converted")]
    NotPreconverted(String),
}

/// The sRGB → generic-RGB conversion capability, batched.
///
/// Implementations must be deterministic and stateless per key: results are
/// cached and never re-validated.
pub trait ConvertColors {
    /// Convert every hex key in one operation, returning `(hex, [r, g, b])`
    /// pairs with components in the target space.
    ///
    /// # Errors
    /// - [`ConvertError::BatchFailed`] when the conversion cannot be
    ///   completed for any requested key. There is no partial success.
    fn convert_batch(&self, keys: &[String]) -> Result<Vec<(String, [f64; 3])>, ConvertError>;
}

/// Production converter: shells out to the bundled Swift helper, which runs
/// the colors through `NSColor` (`sRGB` → `genericRGB`).
#[derive(Debug, Clone)]
pub struct SwiftConverter {
    /// Path to the conversion script, one run per batch.
    script: PathBuf,
}

impl SwiftConverter {
    /// Create a converter invoking `swift <script> HEX...`.
    #[must_use]
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl ConvertColors for SwiftConverter {
    fn convert_batch(&self, keys: &[String]) -> Result<Vec<(String, [f64; 3])>, ConvertError> {
        tracing::debug!(count = keys.len(), script = %self.script.display(), "converting colors");
        let out = Command::new("swift")
            .arg(&self.script)
            .args(keys)
            .output()
            .map_err(|e| {
                ConvertError::BatchFailed(format!(
                    "failed to run swift {}: {e}",
                    self.script.display()
                ))
            })?;
        if !out.status.success() {
            return Err(ConvertError::BatchFailed(format!(
                "swift {} exited with {:?}",
                self.script.display(),
                out.status
            )));
        }
        let text = String::from_utf8(out.stdout)
            .map_err(|e| ConvertError::BatchFailed(format!("non-UTF-8 converter output: {e}")))?;
        parse_batch_output(&text)
    }
}

/// Parse converter output: one `HEX R G B` line per converted color.
fn parse_batch_output(text: &str) -> Result<Vec<(String, [f64; 3])>, ConvertError> {
    let mut pairs = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let mut fields = line.split_whitespace();
        let hex = fields
            .next()
            .ok_or_else(|| ConvertError::BatchFailed(format!("empty converter line: {line:?}")))?;
        let mut rgb = [0.0_f64; 3];
        for slot in &mut rgb {
            let field = fields.next().ok_or_else(|| {
                ConvertError::BatchFailed(format!("short converter line: {line:?}"))
            })?;
            *slot = field.parse().map_err(|e| {
                ConvertError::BatchFailed(format!("bad component {field:?} in {line:?}: {e}"))
            })?;
        }
        if fields.next().is_some() {
            return Err(ConvertError::BatchFailed(format!(
                "trailing fields in converter line: {line:?}"
            )));
        }
        pairs.push((hex.to_string(), rgb));
    }
    Ok(pairs)
}

/// Per-run conversion cache: hex key → converted triple.
///
/// One instance is created fresh for each scheme variant, populated exactly
/// once by [`ConversionCache::convert_all`], then read by the template. It is
/// never shared or reused across variants.
#[derive(Debug, Default)]
pub struct ConversionCache {
    table: HashMap<String, [f64; 3]>,
}

impl ConversionCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Convert the whole key set in one external call and populate the
    /// cache.
    ///
    /// Inputs:
    /// - `keys`: The collector's deduplicated hex-key set for this scheme.
    /// - `converter`: Conversion capability; invoked at most once.
    ///
    /// Output:
    /// - `Ok(())` with every key cached; the empty set is a no-op with no
    ///   external call.
    ///
    /// # Errors
    /// - [`ConvertError::BatchFailed`] when the converter fails, returns a
    ///   color that was never requested, or omits a requested one.
    pub fn convert_all(
        &mut self,
        keys: &BTreeSet<String>,
        converter: &dyn ConvertColors,
    ) -> Result<(), ConvertError> {
        if keys.is_empty() {
            return Ok(());
        }
        let requested: Vec<String> = keys.iter().cloned().collect();
        for (hex, rgb) in converter.convert_batch(&requested)? {
            if !keys.contains(&hex) {
                return Err(ConvertError::BatchFailed(format!(
                    "converter returned unrequested color {hex}"
                )));
            }
            self.table.insert(hex, rgb);
        }
        if let Some(missing) = keys.iter().find(|k| !self.table.contains_key(*k)) {
            return Err(ConvertError::BatchFailed(format!(
                "converter returned no conversion for {missing}"
            )));
        }
        tracing::debug!(count = self.table.len(), "conversion cache populated");
        Ok(())
    }

    /// Look up the converted triple for a hex key, O(1).
    ///
    /// # Errors
    /// - [`ConvertError::NotPreconverted`] when the key was not part of the
    ///   batch. This is surfaced as-is — no on-demand conversion and no
    ///   fallback value, since either would hide a collector defect.
    pub fn lookup(&self, hex: &str) -> Result<[f64; 3], ConvertError> {
        self.table
            .get(hex)
            .copied()
            .ok_or_else(|| ConvertError::NotPreconverted(hex.to_string()))
    }

    /// Number of cached colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the cache holds no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
