/// Formatting options for [`smart_trim`](crate::smart_trim)
///
/// Construct with struct-update syntax to change a single field:
///
/// ```
/// use textrim::TrimOptions;
///
/// let opts = TrimOptions {
///     suffix: " [more]".to_string(),
///     ..Default::default()
/// };
/// assert!(opts.preserve_whole_words);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimOptions {
    /// Marker appended when truncation occurs. An empty string here means
    /// "unset" and falls back to the default `"..."`; use
    /// [`TrimOverride::Suffix`] to request a literal empty suffix.
    pub suffix: String,
    /// Move the cut back to the last space instead of splitting a word
    pub preserve_whole_words: bool,
    /// Keep trailing punctuation on the truncated text
    pub preserve_punctuation: bool,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            suffix: "...".to_string(),
            preserve_whole_words: true,
            preserve_punctuation: true,
        }
    }
}

/// A single adjustment applied on top of resolved [`TrimOptions`]
///
/// Overrides are applied in order after the base options, so later
/// directives win over earlier ones and over struct fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrimOverride {
    /// Replace the suffix. Applied literally, including the empty string.
    Suffix(String),
    /// Enable or disable word-boundary preservation
    PreserveWholeWords(bool),
    /// Enable or disable trailing-punctuation preservation
    PreservePunctuation(bool),
}

/// Combine base options and override directives into the effective options
pub(crate) fn resolve_options(
    opts: Option<&TrimOptions>,
    overrides: &[TrimOverride],
) -> TrimOptions {
    let mut resolved = TrimOptions::default();

    if let Some(o) = opts {
        if !o.suffix.is_empty() {
            resolved.suffix = o.suffix.clone();
        }
        resolved.preserve_whole_words = o.preserve_whole_words;
        resolved.preserve_punctuation = o.preserve_punctuation;
    }

    for directive in overrides {
        match directive {
            TrimOverride::Suffix(s) => resolved.suffix = s.clone(),
            TrimOverride::PreserveWholeWords(p) => resolved.preserve_whole_words = *p,
            TrimOverride::PreservePunctuation(p) => resolved.preserve_punctuation = *p,
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = TrimOptions::default();
        assert_eq!(opts.suffix, "...");
        assert!(opts.preserve_whole_words);
        assert!(opts.preserve_punctuation);
    }

    #[test]
    fn test_resolve_without_base_or_overrides() {
        assert_eq!(resolve_options(None, &[]), TrimOptions::default());
    }

    #[test]
    fn test_resolve_copies_struct_fields() {
        let base = TrimOptions {
            suffix: " [more]".to_string(),
            preserve_whole_words: false,
            preserve_punctuation: false,
        };
        let resolved = resolve_options(Some(&base), &[]);
        assert_eq!(resolved, base);
    }

    #[test]
    fn test_resolve_empty_struct_suffix_falls_back_to_default() {
        let base = TrimOptions {
            suffix: String::new(),
            ..Default::default()
        };
        let resolved = resolve_options(Some(&base), &[]);
        assert_eq!(resolved.suffix, "...");
    }

    #[test]
    fn test_overrides_win_over_struct_fields() {
        let base = TrimOptions {
            suffix: " [more]".to_string(),
            ..Default::default()
        };
        let resolved = resolve_options(
            Some(&base),
            &[
                TrimOverride::Suffix(" [override]".to_string()),
                TrimOverride::PreserveWholeWords(false),
            ],
        );
        assert_eq!(resolved.suffix, " [override]");
        assert!(!resolved.preserve_whole_words);
        assert!(resolved.preserve_punctuation);
    }

    #[test]
    fn test_later_override_wins() {
        let resolved = resolve_options(
            None,
            &[
                TrimOverride::Suffix("first".to_string()),
                TrimOverride::Suffix("second".to_string()),
            ],
        );
        assert_eq!(resolved.suffix, "second");
    }

    #[test]
    fn test_empty_override_suffix_is_literal() {
        let resolved = resolve_options(None, &[TrimOverride::Suffix(String::new())]);
        assert_eq!(resolved.suffix, "");
    }
}
