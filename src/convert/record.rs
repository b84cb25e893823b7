//! The normalized phrase record and its Espanso YAML rendering.

/// One expansion rule extracted from an AutoKey definition pair, ready to
/// be rendered as an Espanso match block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRecord {
    pub triggers: Vec<String>,
    pub word_only: bool,
    pub replacement: String,
}

impl PhraseRecord {
    /// Render this record as a 4-line Espanso match block:
    ///
    /// ```yaml
    ///   - triggers: ['alh']
    ///     replace: "although"
    ///     word: true
    ///     propagate_case: true
    /// ```
    ///
    /// The first line is indented by `indent`; the remaining lines get two
    /// extra spaces to sit under the list marker. The replacement text is
    /// interpolated verbatim inside the quotes, embedded newlines and all.
    pub fn render(&self, indent: &str, preserve_case: bool) -> String {
        format!(
            "{i}- triggers: {triggers}\n{i}  replace: \"{replacement}\"\n{i}  word: {word}\n{i}  propagate_case: {case}",
            i = indent,
            triggers = render_trigger_list(&self.triggers),
            replacement = self.replacement,
            word = self.word_only,
            case = preserve_case,
        )
    }
}

/// Render the trigger list as a Python-style list literal, e.g.
/// `['hi', 'hey']`, applying the backslash-quote quirk fix to each
/// element. No other escaping is introduced, so backslashes elsewhere
/// pass through untouched (`\brain` stays `\brain`).
fn render_trigger_list(triggers: &[String]) -> String {
    let elements: Vec<String> = triggers
        .iter()
        .map(|t| quote_element(&escape_quote_trigger(t)))
        .collect();
    format!("[{}]", elements.join(", "))
}

/// Double the backslash in the exact two-character trigger sequence `\'`.
///
/// In Espanso's abbreviation engine the trigger `\'` fires on every typed
/// single quote, even without a preceding backslash; writing it as `\\'`
/// in the config restores the intended behavior. This quirk is specific
/// to that sequence, so other backslash-prefixed triggers are left alone.
fn escape_quote_trigger(trigger: &str) -> String {
    trigger.replace("\\'", "\\\\'")
}

/// Wrap one list element in quotes: single quotes normally, double quotes
/// when the element itself contains a single quote.
fn quote_element(element: &str) -> String {
    if element.contains('\'') && !element.contains('"') {
        format!("\"{}\"", element)
    } else if element.contains('\'') {
        format!("'{}'", element.replace('\'', "\\'"))
    } else {
        format!("'{}'", element)
    }
}
