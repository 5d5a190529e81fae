use super::RuleSet;

impl RuleSet {
    /// Polish title case.
    ///
    /// Lowercases the text, splits it on single spaces and uppercases the
    /// first letter of every word. Function words (`i`, `w`, `na`, ...) stay
    /// lowercase unless they open the text.
    pub fn capitalize(&self, text: &str) -> String {
        text.to_lowercase()
            .split(' ')
            .enumerate()
            .map(|(idx, word)| {
                if idx > 0 && self.lowercase_words.contains(word) {
                    word.to_string()
                } else {
                    capitalize_first(word)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Uppercases the first character and leaves the rest untouched.
///
/// Characters whose uppercase form is more than one character (`ß`) are
/// kept as they are, so the result lowercases back to the input.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => {
            let mut out = String::with_capacity(text.len());
            out.push(single);
            out.push_str(chars.as_str());
            out
        }
        _ => text.to_string(),
    }
}
