mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;
mod span;

pub use block::{Block, BlockKind, List, ListItem};
pub use config::{Config, DocumentConfig, LinksConfig};
pub use error::{ConfigError, Error, ParseError, RenderError};
pub use html::{block_to_fragment, block_to_node, blocks_to_document, span_to_node};
pub use inline::{
    DELIMITERS, Delimiter, extract_markdown_images, extract_markdown_links, split_spans_delimiter,
    split_spans_image, split_spans_link, text_to_spans,
};
pub use node::{Attributes, HtmlNode, attributes_to_string};
pub use parser::{classify, parse_block, split_blocks};
pub use span::{Span, SpanKind};

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Result<Vec<Block>, ParseError> {
    parser::parse(markdown)
}

/// Convert markdown to an HTML node tree using default config.
///
/// An empty document yields a root with no children, which fails to render.
pub fn markdown_to_document(markdown: &str) -> Result<HtmlNode, ParseError> {
    markdown_to_document_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to an HTML node tree with custom config.
pub fn markdown_to_document_with_config(
    markdown: &str,
    config: &Config,
) -> Result<HtmlNode, ParseError> {
    let blocks = parse(markdown)?;
    Ok(html::blocks_to_document(&blocks, config))
}

/// Convert markdown to HTML markup using default config.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to HTML markup with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> Result<String, Error> {
    let document = markdown_to_document_with_config(markdown, config)?;
    Ok(document.render()?)
}

/// Text of the first `# ` heading line, used as a page title.
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .find(|title| !title.is_empty())
}
