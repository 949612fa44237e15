//! `.xccolortheme` document assembly.
//!
//! A pure string concern: every color string is obtained through the
//! conversion cache, alpha is appended from the palette color untouched, and
//! the rest of the document (fonts, static markup colors) is fixed text.

use crate::color::Color;
use crate::convert::{ConversionCache, ConvertError};
use crate::palette::Scheme;

/// What: Render one color as the `"R G B A"` string Xcode expects.
///
/// Inputs:
/// - `color`: Palette color; only its alpha is used directly.
/// - `cache`: Pre-populated conversion cache for the current scheme.
///
/// Output:
/// - Space-separated components, R/G/B in generic RGB from the cache, alpha
///   passed through unconverted. Floats print in shortest form (`1`, `0.5`).
///
/// # Errors
/// - [`ConvertError::NotPreconverted`] when the color's hex key was missed by
///   the collection phase.
pub fn rgba(color: &Color, cache: &ConversionCache) -> Result<String, ConvertError> {
    let [r, g, b] = cache.lookup(&color.hex_key())?;
    let a = color.alpha;
    Ok(format!("{r} {g} {b} {a}"))
}

/// Render the complete theme document for one scheme.
///
/// # Errors
/// - [`ConvertError::NotPreconverted`] when any referenced color is missing
///   from the cache.
#[allow(clippy::too_many_lines)]
pub fn render(scheme: &Scheme, cache: &ConversionCache) -> Result<String, ConvertError> {
    let accent = rgba(&scheme.common.accent, cache)?;
    let error = rgba(&scheme.common.error, cache)?;
    let editor_fg = rgba(&scheme.editor.fg, cache)?;
    let editor_bg = rgba(&scheme.editor.bg, cache)?;
    let editor_line = rgba(&scheme.editor.line, cache)?;
    let selection = rgba(&scheme.editor.selection, cache)?;
    let ui_line = rgba(&scheme.ui.line, cache)?;
    let vcs_modified = rgba(&scheme.vcs.modified, cache)?;
    let tag = rgba(&scheme.syntax.tag, cache)?;
    let func = rgba(&scheme.syntax.func, cache)?;
    let entity = rgba(&scheme.syntax.entity, cache)?;
    let string = rgba(&scheme.syntax.string, cache)?;
    let regexp = rgba(&scheme.syntax.regexp, cache)?;
    let markup = rgba(&scheme.syntax.markup, cache)?;
    let keyword = rgba(&scheme.syntax.keyword, cache)?;
    let special = rgba(&scheme.syntax.special, cache)?;
    let comment = rgba(&scheme.syntax.comment, cache)?;
    let constant = rgba(&scheme.syntax.constant, cache)?;

    Ok(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
	<dict>
		<key>DVTConsoleDebuggerInputTextColor</key>
		<string>{accent}</string>

		<key>DVTConsoleDebuggerInputTextFont</key>
		<string>Iosevka-Semibold - 13.5</string>

		<key>DVTConsoleDebuggerOutputTextColor</key>
		<string>{comment}</string>

		<key>DVTConsoleDebuggerOutputTextFont</key>
		<string>Iosevka - 13.5</string>

		<key>DVTConsoleDebuggerPromptTextColor</key>
		<string>{tag}</string>

		<key>DVTConsoleDebuggerPromptTextFont</key>
		<string>Iosevka-Semibold - 13.5</string>

		<key>DVTConsoleExectuableInputTextColor</key>
		<string>{accent}</string>

		<key>DVTConsoleExectuableInputTextFont</key>
		<string>Iosevka - 13.5</string>

		<key>DVTConsoleExectuableOutputTextColor</key>
		<string>{comment}</string>

		<key>DVTConsoleExectuableOutputTextFont</key>
		<string>Iosevka-Semibold - 13.5</string>

		<key>DVTConsoleTextBackgroundColor</key>
		<string>{editor_bg}</string>

		<key>DVTConsoleTextInsertionPointColor</key>
		<string>{accent}</string>

		<key>DVTConsoleTextSelectionColor</key>
		<string>{selection}</string>

		<key>DVTFontAndColorVersion</key>
		<integer>1</integer>

		<key>DVTFontSizeModifier</key>
		<integer>1</integer>

		<key>DVTMarkupTextBackgroundColor</key>
		<string>0.96 0.96 0.96 1</string>

		<key>DVTMarkupTextBorderColor</key>
		<string>0.8832 0.8832 0.8832 1</string>

		<key>DVTMarkupTextCodeFont</key>
		<string>SFMono-Regular - 11.0</string>

		<key>DVTMarkupTextEmphasisColor</key>
		<string>0 0 0 1</string>

		<key>DVTMarkupTextEmphasisFont</key>
		<string>.SFNS-RegularItalic - 12.0</string>

		<key>DVTMarkupTextInlineCodeColor</key>
		<string>0 0 0 0.7</string>

		<key>DVTMarkupTextLinkColor</key>
		<string>0.055 0.055 1 1</string>

		<key>DVTMarkupTextLinkFont</key>
		<string>.SFNS-Regular - 12.0</string>

		<key>DVTMarkupTextNormalColor</key>
		<string>0 0 0 1</string>

		<key>DVTMarkupTextNormalFont</key>
		<string>.SFNS-Regular - 12.0</string>

		<key>DVTMarkupTextOtherHeadingColor</key>
		<string>0 0 0 0.5</string>

		<key>DVTMarkupTextOtherHeadingFont</key>
		<string>.SFNS-Regular - 16.8</string>

		<key>DVTMarkupTextPrimaryHeadingColor</key>
		<string>0 0 0 1</string>

		<key>DVTMarkupTextPrimaryHeadingFont</key>
		<string>.SFNS-Regular - 28.8</string>

		<key>DVTMarkupTextSecondaryHeadingColor</key>
		<string>0 0 0 1</string>

		<key>DVTMarkupTextSecondaryHeadingFont</key>
		<string>.SFNS-Regular - 21.6</string>

		<key>DVTMarkupTextStrongColor</key>
		<string>0 0 0 1</string>

		<key>DVTMarkupTextStrongFont</key>
		<string>.SFNS-Bold - 12.0</string>

		<key>DVTScrollbarMarkerAnalyzerColor</key>
		<string>0.403922 0.372549 1 1</string>

		<key>DVTScrollbarMarkerBreakpointColor</key>
		<string>0.290196 0.290196 0.968627 1</string>

		<key>DVTScrollbarMarkerDiffColor</key>
		<string>{vcs_modified}</string>

		<key>DVTScrollbarMarkerDiffConflictColor</key>
		<string>{error}</string>

		<key>DVTScrollbarMarkerErrorColor</key>
		<string>{error}</string>

		<key>DVTScrollbarMarkerRuntimeIssueColor</key>
		<string>0.643137 0.509804 1 1</string>

		<key>DVTScrollbarMarkerWarningColor</key>
		<string>{func}</string>

		<key>DVTSourceTextBackground</key>
		<string>{editor_bg}</string>

		<key>DVTSourceTextBlockDimBackgroundColor</key>
		<string>0.424672 0.424672 0.424672 1</string>

		<key>DVTSourceTextCurrentLineHighlightColor</key>
		<string>{editor_line}</string>

		<key>DVTSourceTextInsertionPointColor</key>
		<string>{accent}</string>

		<key>DVTSourceTextInvisiblesColor</key>
		<string>{ui_line}</string>

		<key>DVTSourceTextSelectionColor</key>
		<string>{selection}</string>

		<key>DVTSourceTextSyntaxColors</key>
		<dict>
			<key>xcode.syntax.attribute</key>
			<string>{tag}</string>

			<key>xcode.syntax.character</key>
			<string>{constant}</string>

			<key>xcode.syntax.comment</key>
			<string>{comment}</string>

			<key>xcode.syntax.comment.doc</key>
			<string>{markup}</string>

			<key>xcode.syntax.comment.doc.keyword</key>
			<string>{keyword}</string>

			<key>xcode.syntax.declaration.other</key>
			<string>{func}</string>

			<key>xcode.syntax.declaration.type</key>
			<string>{entity}</string>

			<key>xcode.syntax.identifier.class</key>
			<string>{entity}</string>

			<key>xcode.syntax.identifier.class.system</key>
			<string>{tag}</string>

			<key>xcode.syntax.identifier.constant</key>
			<string>{constant}</string>

			<key>xcode.syntax.identifier.constant.system</key>
			<string>{tag}</string>

			<key>xcode.syntax.identifier.function</key>
			<string>{func}</string>

			<key>xcode.syntax.identifier.function.system</key>
			<string>{special}</string>

			<key>xcode.syntax.identifier.macro</key>
			<string>{special}</string>

			<key>xcode.syntax.identifier.macro.system</key>
			<string>{special}</string>

			<key>xcode.syntax.identifier.type</key>
			<string>{entity}</string>

			<key>xcode.syntax.identifier.type.system</key>
			<string>{tag}</string>

			<key>xcode.syntax.identifier.variable</key>
			<string>{editor_fg}</string>

			<key>xcode.syntax.identifier.variable.system</key>
			<string>{tag}</string>

			<key>xcode.syntax.keyword</key>
			<string>{keyword}</string>

			<key>xcode.syntax.mark</key>
			<string>{editor_fg}</string>

			<key>xcode.syntax.markup.code</key>
			<string>{markup}</string>

			<key>xcode.syntax.number</key>
			<string>{constant}</string>

			<key>xcode.syntax.plain</key>
			<string>{editor_fg}</string>

			<key>xcode.syntax.preprocessor</key>
			<string>{special}</string>

			<key>xcode.syntax.regex</key>
			<string>{regexp}</string>

			<key>xcode.syntax.regex.capturename</key>
			<string>{constant}</string>

			<key>xcode.syntax.regex.charname</key>
			<string>{tag}</string>

			<key>xcode.syntax.regex.number</key>
			<string>{constant}</string>

			<key>xcode.syntax.regex.other</key>
			<string>{regexp}</string>

			<key>xcode.syntax.string</key>
			<string>{string}</string>

			<key>xcode.syntax.url</key>
			<string>{string}</string>
		</dict>

		<key>DVTSourceTextSyntaxFonts</key>
		<dict>
			<key>xcode.syntax.attribute</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.character</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.comment</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.comment.doc</key>
			<string>HelveticaNeue - 13.5</string>

			<key>xcode.syntax.comment.doc.keyword</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.declaration.other</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.declaration.type</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.class</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.class.system</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.constant</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.constant.system</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.function</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.function.system</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.macro</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.macro.system</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.type</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.type.system</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.variable</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.identifier.variable.system</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.keyword</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.mark</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.markup.code</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.number</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.plain</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.preprocessor</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.regex</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.regex.capturename</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.regex.charname</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.regex.number</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.regex.other</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.string</key>
			<string>Iosevka - 13.5</string>

			<key>xcode.syntax.url</key>
			<string>Iosevka - 13.5</string>
		</dict>
	</dict>
</plist>
"#
    ))
}
