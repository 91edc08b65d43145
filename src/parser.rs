use tracing::debug;

use crate::block::{Block, BlockKind, List, ListItem};
use crate::error::ParseError;
use crate::inline::text_to_spans;

const FENCE: &str = "```";
const BULLET: &str = "- ";
const QUOTE: &str = "> ";

/// Split a document into blocks separated by blank lines.
///
/// Blocks are trimmed and empty ones dropped; order is preserved.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Decide the structural role of a trimmed block.
///
/// Rules are tried in order: heading, fenced code, unordered list, ordered
/// list, quote, and paragraph as the fallback.
pub fn classify(block: &str) -> BlockKind {
    if block.is_empty() {
        BlockKind::Paragraph
    } else if heading_level(block).is_some() {
        BlockKind::Heading
    } else if block.starts_with(FENCE) && block.ends_with(FENCE) {
        BlockKind::Code
    } else if block.lines().all(|line| line.starts_with(BULLET)) {
        BlockKind::UnorderedList
    } else if is_ordered_list(block) {
        BlockKind::OrderedList
    } else if block.lines().all(|line| line.starts_with(QUOTE)) {
        BlockKind::Quote
    } else {
        BlockKind::Paragraph
    }
}

/// Level of a `#`-style heading: 1 to 6 hashes, a space, and no further `#`.
fn heading_level(block: &str) -> Option<u8> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = block[level..].strip_prefix(' ')?;
    if rest.starts_with('#') {
        return None;
    }
    Some(level as u8)
}

fn ordered_marker(index: usize) -> String {
    format!("{}. ", index + 1)
}

/// Every line numbered `1. `, `2. `, ... with no gaps or repeats.
fn is_ordered_list(block: &str) -> bool {
    block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_marker(i)))
}

/// Parse the content of one block of the given kind.
pub fn parse_block(block: &str, kind: BlockKind) -> Result<Block, ParseError> {
    let parsed = match kind {
        BlockKind::Heading => {
            let hashes = block.bytes().take_while(|&b| b == b'#').count();
            let rest = &block[hashes..];
            let text = rest.strip_prefix(' ').unwrap_or(rest);
            Block::Heading {
                level: hashes.clamp(1, 6) as u8,
                content: text_to_spans(text)?,
            }
        }
        BlockKind::Code => {
            let inner = block.strip_prefix(FENCE).unwrap_or(block);
            let inner = inner.strip_suffix(FENCE).unwrap_or(inner);
            Block::CodeBlock {
                content: inner.trim_start().to_string(),
            }
        }
        BlockKind::Quote => {
            let text: String = block
                .lines()
                .map(|line| line.strip_prefix(QUOTE).unwrap_or(line))
                .collect();
            Block::Quote {
                content: text_to_spans(&text)?,
            }
        }
        BlockKind::UnorderedList => {
            let items = block
                .lines()
                .map(|line| list_item(line.strip_prefix(BULLET).unwrap_or(line)))
                .collect::<Result<_, _>>()?;
            Block::List(List {
                ordered: false,
                items,
            })
        }
        BlockKind::OrderedList => {
            let items = block
                .lines()
                .enumerate()
                .map(|(i, line)| {
                    let marker = ordered_marker(i);
                    list_item(line.strip_prefix(marker.as_str()).unwrap_or(line))
                })
                .collect::<Result<_, _>>()?;
            Block::List(List {
                ordered: true,
                items,
            })
        }
        BlockKind::Paragraph => {
            let text = block.lines().collect::<Vec<_>>().join(" ");
            Block::Paragraph {
                content: text_to_spans(&text)?,
            }
        }
    };
    Ok(parsed)
}

fn list_item(text: &str) -> Result<ListItem, ParseError> {
    Ok(ListItem {
        content: text_to_spans(text)?,
    })
}

/// Parse markdown text into a list of blocks
pub fn parse(markdown: &str) -> Result<Vec<Block>, ParseError> {
    split_blocks(markdown)
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let kind = classify(block);
            debug!(index, ?kind, "classified block");
            parse_block(block, kind)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn split_on_blank_lines() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            split_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn split_drops_extra_blank_lines() {
        assert_eq!(split_blocks("a\n\n\n\n\nb\n\n  \n\n"), vec!["a", "b"]);
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n\n").is_empty());
    }

    #[rstest]
    #[case("This is a single-line paragraph", BlockKind::Paragraph)]
    #[case("This is a multi-\nline paragraph", BlockKind::Paragraph)]
    #[case("```This is single-line code```", BlockKind::Code)]
    #[case("```\nThis is multi-line code\n```", BlockKind::Code)]
    #[case("```code```", BlockKind::Code)]
    #[case("```\nunclosed", BlockKind::Paragraph)]
    #[case("# Title", BlockKind::Heading)]
    #[case("## This is h2", BlockKind::Heading)]
    #[case("###### This is h6", BlockKind::Heading)]
    #[case("####### too many", BlockKind::Paragraph)]
    #[case("#no space", BlockKind::Paragraph)]
    #[case("# #hash after space", BlockKind::Paragraph)]
    #[case("> This is single line quote", BlockKind::Quote)]
    #[case("> This is\n> Multi-line\n> quote", BlockKind::Quote)]
    #[case("> quote\nnot quote", BlockKind::Paragraph)]
    #[case(">no space", BlockKind::Paragraph)]
    #[case("- first", BlockKind::UnorderedList)]
    #[case("- a\n- b", BlockKind::UnorderedList)]
    #[case("- a\n* b", BlockKind::Paragraph)]
    #[case("1. first", BlockKind::OrderedList)]
    #[case("1. a\n2. b\n3. c", BlockKind::OrderedList)]
    #[case("1. a\n3. b", BlockKind::Paragraph)]
    #[case("2. a\n3. b", BlockKind::Paragraph)]
    #[case("1. a\n1. b", BlockKind::Paragraph)]
    #[case("1.a", BlockKind::Paragraph)]
    fn classify_blocks(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn ordered_list_past_nine() {
        let block = (1..=11)
            .map(|i| format!("{i}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(classify(&block), BlockKind::OrderedList);
    }

    #[test]
    fn heading_levels() {
        for level in 1..=6u8 {
            let block = format!("{} Heading", "#".repeat(level as usize));
            assert_eq!(
                parse_block(&block, classify(&block)).unwrap(),
                Block::Heading {
                    level,
                    content: vec![Span::Text("Heading".into())],
                }
            );
        }
    }

    #[test]
    fn quote_prefixes_are_stripped() {
        assert_eq!(
            parse_block("> one\n> **two**", BlockKind::Quote).unwrap(),
            Block::Quote {
                content: vec![Span::Text("one".into()), Span::Bold("two".into())],
            }
        );
    }

    #[test]
    fn list_items_are_tokenized_separately() {
        assert_eq!(
            parse_block("1. _a_\n2. b", BlockKind::OrderedList).unwrap(),
            Block::List(List {
                ordered: true,
                items: vec![
                    ListItem {
                        content: vec![Span::Italic("a".into())],
                    },
                    ListItem {
                        content: vec![Span::Text("b".into())],
                    },
                ],
            })
        );
    }

    #[test]
    fn code_keeps_trailing_content() {
        assert_eq!(
            parse_block("```\n  fn main() {}\n   \n```", BlockKind::Code).unwrap(),
            Block::CodeBlock {
                content: "fn main() {}\n   \n".into(),
            }
        );
        assert_eq!(
            parse_block("```code```", BlockKind::Code).unwrap(),
            Block::CodeBlock {
                content: "code".into(),
            }
        );
    }

    #[test]
    fn code_is_not_tokenized() {
        assert_eq!(
            parse_block("```\nlet _x = **y;\n```", BlockKind::Code).unwrap(),
            Block::CodeBlock {
                content: "let _x = **y;\n".into(),
            }
        );
    }

    #[test]
    fn paragraph_lines_are_reflowed() {
        assert_eq!(
            parse_block("line one\nline two", BlockKind::Paragraph).unwrap(),
            Block::Paragraph {
                content: vec![Span::Text("line one line two".into())],
            }
        );
    }

    #[test]
    fn parse_propagates_inline_errors() {
        assert_eq!(
            parse("# ok\n\n- fine\n- _broken"),
            Err(ParseError::UnterminatedInline { delimiter: "_" })
        );
    }

    #[test]
    fn parse_keeps_block_order() {
        let kinds: Vec<BlockKind> = parse("# h\n\npara\n\n- a\n\n1. b\n\n> q\n\n```c```")
            .unwrap()
            .iter()
            .map(Block::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading,
                BlockKind::Paragraph,
                BlockKind::UnorderedList,
                BlockKind::OrderedList,
                BlockKind::Quote,
                BlockKind::Code,
            ]
        );
    }
}
