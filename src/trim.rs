use crate::error::TrimError;
use crate::options::{TrimOptions, TrimOverride, resolve_options};

/// Characters trimmed from the end of the kept text before the suffix
const TRAILING_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

/// Punctuation stripped when `preserve_punctuation` is disabled
fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"' | ')' | ']' | '}' | '…'
    )
}

/// Largest character boundary at or before `max_bytes`
fn snap_to_char_boundary(s: &str, max_bytes: usize) -> usize {
    let mut end = max_bytes.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Leading bytes of the suffix when the budget is too small for any content
fn truncated_suffix(suffix: &str, max_length: usize) -> &str {
    &suffix[..snap_to_char_boundary(suffix, max_length)]
}

/// Move the cut back to the last space when it landed mid-word
///
/// `candidate` is a prefix of `text`. The cut is mid-word when the
/// character immediately after it is not a space. With no space inside
/// `candidate` (one long word) nothing of the text survives.
fn trim_at_word_boundary<'a>(text: &'a str, candidate: &'a str) -> &'a str {
    match text[candidate.len()..].chars().next() {
        Some(' ') | None => candidate,
        Some(_) => match candidate.rfind(' ') {
            Some(last_space) => &candidate[..last_space],
            None => "",
        },
    }
}

/// Truncate `text` to at most `max_length` bytes, appending the configured
/// suffix when truncation occurs.
///
/// Text that already fits is returned unchanged, without the suffix and
/// without consulting `opts`. When the suffix alone exceeds the budget the
/// result is the leading `max_length` bytes of the suffix itself.
///
/// Returns [`TrimError::InvalidMaxLength`] when `max_length` is negative.
///
/// ```
/// use textrim::{TrimOptions, smart_trim};
///
/// let text = "The quick brown fox jumps over the lazy dog";
/// assert_eq!(smart_trim(text, 20, None)?, "The quick brown...");
///
/// let opts = TrimOptions {
///     suffix: " [more]".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(smart_trim(text, 25, Some(&opts))?, "The quick brown [more]");
///
/// let opts = TrimOptions {
///     preserve_whole_words: false,
///     ..Default::default()
/// };
/// assert_eq!(smart_trim(text, 20, Some(&opts))?, "The quick brown f...");
/// # Ok::<(), textrim::TrimError>(())
/// ```
pub fn smart_trim(
    text: &str,
    max_length: isize,
    opts: Option<&TrimOptions>,
) -> Result<String, TrimError> {
    smart_trim_with(text, max_length, opts, &[])
}

/// Like [`smart_trim`], with override directives applied over the base
/// options in order.
///
/// Overrides win over struct fields, and [`TrimOverride::Suffix`] honors
/// an empty string literally instead of reverting to the default marker.
///
/// ```
/// use textrim::{TrimOverride, smart_trim_with};
///
/// let result = smart_trim_with(
///     "This is a long sentence",
///     18,
///     None,
///     &[TrimOverride::Suffix(" [read more]".to_string())],
/// )?;
/// assert_eq!(result, "This [read more]");
///
/// let bare = smart_trim_with(
///     "Short text",
///     6,
///     None,
///     &[TrimOverride::Suffix(String::new())],
/// )?;
/// assert_eq!(bare, "Short");
/// # Ok::<(), textrim::TrimError>(())
/// ```
pub fn smart_trim_with(
    text: &str,
    max_length: isize,
    opts: Option<&TrimOptions>,
    overrides: &[TrimOverride],
) -> Result<String, TrimError> {
    if max_length < 0 {
        return Err(TrimError::InvalidMaxLength(max_length));
    }
    let max_length = max_length as usize;

    if text.len() <= max_length {
        return Ok(text.to_string());
    }

    let resolved = resolve_options(opts, overrides);
    let suffix_len = resolved.suffix.len();

    // Budget left for original content once the suffix is accounted for
    let content_length = max_length.saturating_sub(suffix_len);
    if content_length == 0 {
        return Ok(truncated_suffix(&resolved.suffix, max_length).to_string());
    }

    // Clamp cannot trigger after the fits-already guard; kept as a bound
    let content_length = content_length.min(text.len());
    let mut candidate = &text[..snap_to_char_boundary(text, content_length)];

    if resolved.preserve_whole_words && content_length < text.len() {
        candidate = trim_at_word_boundary(text, candidate);
    }

    candidate = candidate.trim_end_matches(TRAILING_WHITESPACE);

    if !resolved.preserve_punctuation {
        candidate = candidate.trim_end_matches(is_punctuation);
    }

    let mut result = String::with_capacity(candidate.len() + suffix_len);
    result.push_str(candidate);
    result.push_str(&resolved.suffix);
    Ok(result)
}
