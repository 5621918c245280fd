use std::str::SplitWhitespace;

/// Lazily wrap `text` into lines of at most `max_chars` characters.
///
/// Words are never split: a word longer than the budget is emitted alone on its own line. Runs
/// of whitespace are treated as a single separator, so the lines joined with single spaces give
/// back the whitespace-normalized input. Lengths are counted in Unicode scalar values.
///
/// The iterator is `Clone`, so a layout can be restarted from any point.
pub fn wrap_lines(text: &str, max_chars: usize) -> WrapLines<'_> {
    WrapLines {
        words: text.split_whitespace(),
        pending: None,
        max_chars,
    }
}

/// Eager variant of [`wrap_lines`].
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    wrap_lines(text, max_chars).collect()
}

/// [`wrap_text`] keeping at most `max_lines` lines.
///
/// When text is dropped, the last kept line is shortened to fit an ellipsis (`…`) within
/// `max_chars`.
pub fn wrap_text_capped(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_lines(text, max_chars);
    let mut out: Vec<String> = lines.by_ref().take(max_lines).collect();
    if lines.next().is_some()
        && let Some(last) = out.last_mut()
    {
        let keep = max_chars.saturating_sub(1);
        if let Some((idx, _)) = last.char_indices().nth(keep) {
            last.truncate(idx);
        }
        let trimmed = last.trim_end().len();
        last.truncate(trimmed);
        last.push('…');
    }
    out
}

/// Iterator returned by [`wrap_lines`].
#[derive(Clone, Debug)]
pub struct WrapLines<'a> {
    words: SplitWhitespace<'a>,
    // First word of the next line, pulled while filling the previous one.
    pending: Option<&'a str>,
    max_chars: usize,
}

impl Iterator for WrapLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.pending.take().or_else(|| self.words.next())?;
        let mut line = String::from(first);
        let mut len = char_len(first);

        for word in self.words.by_ref() {
            let word_len = char_len(word);
            if len + 1 + word_len <= self.max_chars {
                line.push(' ');
                line.push_str(word);
                len += 1 + word_len;
            } else {
                self.pending = Some(word);
                break;
            }
        }

        Some(line)
    }
}

impl std::iter::FusedIterator for WrapLines<'_> {}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
