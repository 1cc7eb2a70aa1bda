//! Word wrapping for the transcript.
//!
//! Ratatui's `Paragraph` wrap cannot be used here: it never exposes how many
//! visual lines the text became, and the scroll bound needs that count.
//! Wrapping the lines ourselves and rendering without `Wrap` keeps the
//! offset arithmetic and the drawn text in agreement.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug)]
enum Segment {
    Word { text: String, width: usize },
    Spaces { text: String },
    Newline,
}

fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut iter = text.chars().peekable();
    while let Some(ch) = iter.next() {
        if ch == '\n' {
            segments.push(Segment::Newline);
            continue;
        }
        if ch.is_whitespace() {
            let mut run = String::from(ch);
            while let Some(&next) = iter.peek() {
                if next == '\n' || !next.is_whitespace() {
                    break;
                }
                run.push(next);
                iter.next();
            }
            segments.push(Segment::Spaces { text: run });
            continue;
        }
        let mut word = String::from(ch);
        while let Some(&next) = iter.peek() {
            if next.is_whitespace() {
                break;
            }
            word.push(next);
            iter.next();
        }
        let width = word.width();
        segments.push(Segment::Word { text: word, width });
    }
    segments
}

/// Wrap text to `width` columns at word boundaries. Words wider than a whole
/// line break mid-word. A single separating space is elided when the wrap
/// lands on it; longer whitespace runs are preserved. Widths are measured in
/// display columns, so double-width characters count as two.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    if width == 0 {
        return Vec::new();
    }

    let segments = segment(text);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut col = 0usize;

    for (i, seg) in segments.iter().enumerate() {
        match seg {
            Segment::Newline => {
                lines.push(std::mem::take(&mut current));
                col = 0;
            }
            Segment::Spaces { text } => {
                let next_word_width = segments.get(i + 1).and_then(|next| match next {
                    Segment::Word { width, .. } => Some(*width),
                    _ => None,
                });
                if text == " " {
                    if let Some(next_width) = next_word_width {
                        if col > 0 && col + 1 + next_width > width {
                            lines.push(std::mem::take(&mut current));
                            col = 0;
                            continue;
                        }
                    }
                }
                for ch in text.chars() {
                    let char_width = ch.width().unwrap_or(0);
                    if col > 0 && col + char_width > width {
                        lines.push(std::mem::take(&mut current));
                        col = 0;
                    }
                    current.push(ch);
                    col += char_width;
                }
            }
            Segment::Word { text, width: word_width } => {
                if *word_width <= width {
                    if col > 0 && col + word_width > width {
                        lines.push(std::mem::take(&mut current));
                        col = 0;
                    }
                    current.push_str(text);
                    col += word_width;
                } else {
                    for ch in text.chars() {
                        let char_width = ch.width().unwrap_or(0);
                        if col > 0 && col + char_width > width {
                            lines.push(std::mem::take(&mut current));
                            col = 0;
                        }
                        current.push(ch);
                        col += char_width;
                    }
                }
            }
        }
    }

    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("hello world this is a test", 10);
        assert_eq!(lines, vec!["hello", "world this", "is a test"]);
    }

    #[test]
    fn separating_space_elided_on_wrap() {
        assert_eq!(wrap_text("hello world", 5), vec!["hello", "world"]);
    }

    #[test]
    fn multiple_spaces_survive_a_wrap() {
        let lines = wrap_text("foo  bar", 4);
        let spaces: usize = lines.iter().map(|l| l.matches(' ').count()).sum();
        assert_eq!(spaces, 2);
    }

    #[test]
    fn long_words_break_mid_word() {
        let lines = wrap_text("superlongword", 5);
        assert_eq!(lines, vec!["super", "longw", "ord"]);
    }

    #[test]
    fn double_width_characters_count_twice() {
        assert_eq!(wrap_text("😀😀😀", 4), vec!["😀😀", "😀"]);
    }

    #[test]
    fn newlines_force_breaks() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_text_is_one_blank_line() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn every_line_fits_the_width() {
        use unicode_width::UnicodeWidthStr;
        let lines = wrap_text("one twotwo threethree fourfourfour 😀😀😀😀", 7);
        assert!(lines.iter().all(|line| line.width() <= 7));
    }
}
