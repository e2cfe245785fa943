//! Lightweight markup parsing for bot and system messages.
//!
//! Answers coming back from the backend embed a small amount of markup:
//! `**bold**` runs, `- ` bullet lines, `1. ` numbered lines and blank-line
//! paragraph breaks. This module turns message content into typed blocks
//! that the message bubble renders as views, so no raw HTML is injected.

/// A block-level element of a message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Bullet(Vec<Inline>),
    Numbered(u32, Vec<Inline>),
}

/// An inline run inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
}

/// Parse message content into blocks.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    fn flush(paragraph: &mut Vec<&str>, blocks: &mut Vec<Block>) {
        if !paragraph.is_empty() {
            blocks.push(Block::Paragraph(parse_inline(&paragraph.join("\n"))));
            paragraph.clear();
        }
    }

    for line in content.lines() {
        if line.trim().is_empty() {
            flush(&mut paragraph, &mut blocks);
        } else if let Some(rest) = line.strip_prefix("- ") {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::Bullet(parse_inline(rest)));
        } else if let Some((number, rest)) = split_numbered(line) {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::Numbered(number, parse_inline(rest)));
        } else {
            paragraph.push(line);
        }
    }
    flush(&mut paragraph, &mut blocks);
    blocks
}

/// Split `**bold**` runs out of a line of text.
///
/// Odd segments between `**` markers become [`Inline::Strong`]; an
/// unbalanced trailing marker still renders its text, just emphasized.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    text.split("**")
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(i, segment)| {
            if i % 2 == 1 {
                Inline::Strong(segment.to_string())
            } else {
                Inline::Text(segment.to_string())
            }
        })
        .collect()
}

fn split_numbered(line: &str) -> Option<(u32, &str)> {
    let dot = line.find(". ")?;
    let digits = &line[..dot];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((digits.parse().ok()?, &line[dot + 2..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn strong(s: &str) -> Inline {
        Inline::Strong(s.to_string())
    }

    #[test]
    fn plain_text_is_one_paragraph() {
        assert_eq!(
            parse_blocks("hello world"),
            vec![Block::Paragraph(vec![text("hello world")])]
        );
    }

    #[test]
    fn bold_runs_are_split_out() {
        assert_eq!(
            parse_inline("The **key finding** is clear"),
            vec![text("The "), strong("key finding"), text(" is clear")]
        );
    }

    #[test]
    fn leading_bold_has_no_empty_segment() {
        assert_eq!(
            parse_inline("**Summary:** done"),
            vec![strong("Summary:"), text(" done")]
        );
    }

    #[test]
    fn blank_lines_break_paragraphs() {
        let blocks = parse_blocks("first\n\nsecond");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![text("first")]),
                Block::Paragraph(vec![text("second")]),
            ]
        );
    }

    #[test]
    fn single_newlines_stay_in_one_paragraph() {
        let blocks = parse_blocks("line one\nline two");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![text("line one\nline two")])]
        );
    }

    #[test]
    fn bullet_and_numbered_lines() {
        let blocks = parse_blocks("Findings:\n- first point\n2. second point");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![text("Findings:")]),
                Block::Bullet(vec![text("first point")]),
                Block::Numbered(2, vec![text("second point")]),
            ]
        );
    }

    #[test]
    fn decimal_prose_is_not_a_numbered_item() {
        // "3.5. " style version strings start with digits but a list item
        // needs the dot-space right after the number.
        let blocks = parse_blocks("version 1. 2 is out");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![text("version 1. 2 is out")])]
        );
    }

    #[test]
    fn numbered_item_requires_leading_digits_only() {
        assert_eq!(split_numbered("12. point"), Some((12, "point")));
        assert_eq!(split_numbered("a1. point"), None);
        assert_eq!(split_numbered("nope"), None);
    }
}
