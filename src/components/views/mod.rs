//! Section bodies. Each view turns profile data into pre-wrapped lines so the
//! caller can measure and scroll them.

pub mod about;
pub mod blog;
pub mod contact;
pub mod portfolio;
pub mod resume;

use crate::theme::Theme;
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap on terminal display width. Words wider than `width` are
/// split between characters.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for raw_line in text.lines() {
        let line_start = out.len();
        let mut current = String::new();
        let mut used = 0;
        for word in raw_line.split_whitespace() {
            let mut word = word.to_string();
            while word.width() > width {
                if used > 0 {
                    out.push(std::mem::take(&mut current));
                    used = 0;
                }
                let (head, rest) = split_at_width(&word, width);
                out.push(head.to_string());
                word = rest.to_string();
            }
            if word.is_empty() {
                continue;
            }
            let word_width = word.width();
            let needed = if used == 0 {
                word_width
            } else {
                used + 1 + word_width
            };
            if needed > width {
                out.push(std::mem::take(&mut current));
                used = 0;
            }
            if used > 0 {
                current.push(' ');
                used += 1;
            }
            current.push_str(&word);
            used += word_width;
        }
        if !current.is_empty() || out.len() == line_start {
            out.push(current);
        }
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Longest prefix that fits in `width` columns. Always takes at least one
/// character so a glyph wider than the column still makes progress.
fn split_at_width(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, ch) in word.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && idx > 0 {
            return word.split_at(idx);
        }
        used += w;
    }
    (word, "")
}

/// Wrapped text, each line prefixed with `indent` spaces.
#[must_use]
pub fn paragraph(text: &str, width: u16, indent: u16, style: Style) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent as usize);
    wrap(text, width.saturating_sub(indent) as usize)
        .into_iter()
        .map(|l| Line::from(Span::styled(format!("{pad}{l}"), style)))
        .collect()
}

#[must_use]
pub fn heading(title: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(title.to_string(), theme.title)),
        Line::from(""),
    ]
}

/// A row of filter chips, the active one highlighted.
#[must_use]
pub fn chips(values: &[String], active: &str, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span<'static>> = values
        .iter()
        .flat_map(|v| {
            let style = if v == active {
                theme.chip_active
            } else {
                theme.chip
            };
            [Span::styled(format!(" {v} "), style), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.width() <= 10));
        assert_eq!(lines[0], "the quick");
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_splits_long_words_and_keeps_blank_lines() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_measures_wide_characters_by_display_width() {
        let lines = wrap("日本語のテキスト 長い説明文です", 10);
        assert!(lines.iter().all(|l| l.width() <= 10), "{lines:?}");
        assert_eq!(lines.concat(), "日本語のテキスト長い説明文です");

        let lines = wrap("café 日本 ok", 9);
        assert_eq!(lines, vec!["café 日本", "ok"]);
    }

    #[test]
    fn test_wrap_makes_progress_when_a_glyph_is_wider_than_the_column() {
        assert_eq!(wrap("日本", 1), vec!["日", "本"]);
    }
}
