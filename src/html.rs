use crate::block::{Block, BlockKind, List};
use crate::config::Config;
use crate::error::ParseError;
use crate::node::HtmlNode;
use crate::parser;
use crate::span::Span;

/// Convert blocks to a single root node, in block order.
pub fn blocks_to_document(blocks: &[Block], config: &Config) -> HtmlNode {
    let children = blocks
        .iter()
        .map(|block| block_to_node(block, config))
        .collect();
    HtmlNode::parent(config.document.root_tag.as_str(), children)
}

/// Parse one raw block of a known kind and convert it to its HTML fragment.
pub fn block_to_fragment(
    block: &str,
    kind: BlockKind,
    config: &Config,
) -> Result<HtmlNode, ParseError> {
    let block = parser::parse_block(block, kind)?;
    Ok(block_to_node(&block, config))
}

pub fn block_to_node(block: &Block, config: &Config) -> HtmlNode {
    match block {
        Block::Heading { level, content } => spans_to_node(format!("h{level}"), content, config),
        Block::Paragraph { content } => spans_to_node("p", content, config),
        Block::Quote { content } => spans_to_node("blockquote", content, config),
        Block::CodeBlock { content } => {
            HtmlNode::parent("pre", vec![HtmlNode::leaf("code", content.as_str())])
        }
        Block::List(list) => list_to_node(list, config),
    }
}

fn list_to_node(list: &List, config: &Config) -> HtmlNode {
    let tag = if list.ordered { "ol" } else { "ul" };
    let items = list
        .items
        .iter()
        .map(|item| spans_to_node("li", &item.content, config))
        .collect();
    HtmlNode::parent(tag, items)
}

fn spans_to_node(tag: impl Into<String>, spans: &[Span], config: &Config) -> HtmlNode {
    let children = spans.iter().map(|span| span_to_node(span, config)).collect();
    HtmlNode::parent(tag, children)
}

/// Convert one inline span to a leaf node.
pub fn span_to_node(span: &Span, config: &Config) -> HtmlNode {
    match span {
        Span::Text(text) => HtmlNode::text(text.as_str()),
        Span::Bold(text) => HtmlNode::leaf("b", text.as_str()),
        Span::Italic(text) => HtmlNode::leaf("i", text.as_str()),
        Span::Code(text) => HtmlNode::leaf("code", text.as_str()),
        Span::Link { text, url } => {
            let node = HtmlNode::leaf("a", text.as_str()).with_attribute("href", url.as_str());
            if config.links.new_tab {
                node.with_attribute("target", "_blank")
            } else {
                node
            }
        }
        Span::Image { alt, url } => HtmlNode::leaf("img", "")
            .with_attribute("src", url.as_str())
            .with_attribute("alt", alt.as_str()),
    }
}
