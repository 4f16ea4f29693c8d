/// A title split into at most two display lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBlock {
    /// First line; non-empty whenever the source title has any words.
    pub line1: String,
    /// Overflow line; empty when the whole title fit on `line1`.
    pub line2: String,
}

impl TextBlock {
    /// True when the title needed a second line.
    pub fn has_second_line(&self) -> bool {
        !self.line2.is_empty()
    }
}

/// Greedily pack whitespace-separated words of `title` into `line1` while its length, counting
/// one space between words, stays within `max_chars_per_line`.
///
/// The first word that does not fit, and every word after it, go to `line2`. A first word longer
/// than the budget is kept whole on `line1`; words are never broken. Lengths are counted in
/// Unicode scalar values.
pub fn segment_title(title: &str, max_chars_per_line: usize) -> TextBlock {
    let mut line1 = String::new();
    let mut line1_chars = 0usize;
    let mut overflow: Vec<&str> = Vec::new();

    for word in title.split_whitespace() {
        if overflow.is_empty() {
            let word_chars = word.chars().count();
            if line1.is_empty() {
                line1.push_str(word);
                line1_chars = word_chars;
                continue;
            }
            let candidate = line1_chars + 1 + word_chars;
            if candidate <= max_chars_per_line {
                line1.push(' ');
                line1.push_str(word);
                line1_chars = candidate;
                continue;
            }
        }
        overflow.push(word);
    }

    TextBlock {
        line1,
        line2: overflow.join(" "),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/segment.rs"]
mod tests;
