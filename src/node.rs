use indexmap::IndexMap;

use crate::error::RenderError;

/// Elements that never have content or a closing tag.
static VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Element attributes. Rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in pairs {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// A node of the output HTML tree.
///
/// Each node owns its children; trees are never shared between conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Content-bearing terminal. Without a tag it renders as raw text.
    Leaf {
        tag: Option<String>,
        text: String,
        attributes: Attributes,
    },
    /// Tagged container. Must have a tag and at least one child to render.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// An untagged leaf, rendered verbatim.
    pub fn text(text: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Builder-style attribute insertion.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.insert(key, value);
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a parent node; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Serialize the tree to markup.
    ///
    /// Text and attribute values are written as-is; inputs are trusted.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf {
                tag,
                text,
                attributes,
            } => {
                let tag = tag.as_deref().filter(|tag| !tag.is_empty());
                if text.is_empty() {
                    // Void elements such as `img` carry everything in attributes.
                    let Some(tag) = tag.filter(|tag| VOID_ELEMENTS.contains(tag)) else {
                        return Err(RenderError::MissingValue);
                    };
                    open_tag(tag, attributes, out);
                    return Ok(());
                }
                match tag {
                    None => out.push_str(text),
                    Some(tag) => {
                        open_tag(tag, attributes, out);
                        out.push_str(text);
                        close_tag(tag, out);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(RenderError::MissingTag);
                }
                if children.is_empty() {
                    return Err(RenderError::MissingChildren);
                }
                open_tag(tag, attributes, out);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes_to_string(attributes));
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Serialize attributes as ` key="value"` pairs, in insertion order.
///
/// Quotes inside values are not escaped.
pub fn attributes_to_string(attributes: &Attributes) -> String {
    let mut out = String::new();
    for (key, value) in attributes.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out
}
