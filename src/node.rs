//! HTML node tree and serialization.
//!
//! The output side of the pipeline: a document is a tree of [`HtmlNode`]s
//! rooted at a single `Parent`, serialized depth-first into one buffer.

/// A node in the output HTML tree.
///
/// `Leaf` carries text content and no children; `Parent` carries an ordered
/// child sequence and no direct content. A leaf without a tag renders its
/// value verbatim, which is how plain inline text reaches the output.
///
/// Attribute pairs keep insertion order, which determines output order.
/// Values are emitted as-is (no entity escaping), matching the inline text
/// path which is likewise emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Content-bearing node with no children.
    Leaf {
        /// Wrapping tag, or `None` to render the value bare.
        tag: Option<String>,
        /// Text content. May be empty (e.g. `img`).
        value: String,
        /// Ordered `key="value"` attribute pairs.
        attrs: Vec<(String, String)>,
    },
    /// Tag-bearing node with an ordered child sequence.
    Parent {
        /// Wrapping tag.
        tag: String,
        /// Children, rendered in order. May be empty.
        children: Vec<HtmlNode>,
        /// Ordered `key="value"` attribute pairs.
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// Create a tagged leaf with no attributes.
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Create a tagged leaf with attributes.
    pub fn leaf_with_attrs(
        tag: &str,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        Self::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attrs,
        }
    }

    /// Create an untagged leaf: renders its value verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Create a parent node with no attributes.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: tag.to_string(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Create a parent node with attributes.
    pub fn parent_with_attrs(
        tag: &str,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        Self::Parent {
            tag: tag.to_string(),
            children,
            attrs,
        }
    }

    /// Serialize the tree rooted at this node to an HTML string.
    ///
    /// Rendering is pure: the same tree always yields the same string.
    ///
    /// # Example
    /// ```
    /// use sitemark::HtmlNode;
    ///
    /// let node = HtmlNode::parent("p", vec![HtmlNode::leaf("b", "hi")]);
    /// assert_eq!(node.to_html(), "<p><b>hi</b></p>");
    /// ```
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(64);
        self.render_into(&mut out);
        out
    }

    /// Append this node's HTML to an output buffer.
    fn render_into(&self, out: &mut String) {
        match self {
            Self::Leaf { tag, value, attrs } => match tag {
                None => out.push_str(value),
                Some(tag) => {
                    out.push('<');
                    out.push_str(tag);
                    push_attrs(out, attrs);
                    out.push('>');
                    out.push_str(value);
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
            },
            Self::Parent {
                tag,
                children,
                attrs,
            } => {
                out.push('<');
                out.push_str(tag);
                push_attrs(out, attrs);
                out.push('>');
                for child in children {
                    child.render_into(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// Append ` key="value"` pairs in insertion order; nothing for an empty map.
fn push_attrs(out: &mut String, attrs: &[(String, String)]) {
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
