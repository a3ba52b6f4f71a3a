use super::{Attributes, ContractError, Escaping};

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Serializes the subtree with values copied verbatim.
    pub fn to_html(&self) -> Result<String, ContractError> {
        self.render(Escaping::Verbatim)
    }

    pub fn render(&self, escaping: Escaping) -> Result<String, ContractError> {
        let mut out = String::new();
        self.write_into(&mut out, escaping)?;
        Ok(out)
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    fn write_into(&self, out: &mut String, escaping: Escaping) -> Result<(), ContractError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_into(out, escaping),
            HtmlNode::Parent(parent) => parent.write_into(out, escaping),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// A terminal node: `<tag props>value</tag>`, or just `value` when untagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    /// Required at render time.
    pub value: Option<String>,
    pub props: Option<Attributes>,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            props: None,
        }
    }

    /// An untagged leaf that renders as raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn tagged(tag: &str, value: impl Into<String>) -> Self {
        Self::new(Some(tag), value)
    }

    pub fn with_props(mut self, props: Attributes) -> Self {
        self.props = Some(props);
        self
    }

    pub fn to_html(&self) -> Result<String, ContractError> {
        let mut out = String::new();
        self.write_into(&mut out, Escaping::Verbatim)?;
        Ok(out)
    }

    fn write_into(&self, out: &mut String, escaping: Escaping) -> Result<(), ContractError> {
        let value = self.value.as_deref().ok_or(ContractError::LeafWithoutValue)?;
        match self.tag.as_deref() {
            None => out.push_str(&escaping.text(value)),
            Some(tag) => {
                open_tag(out, tag, self.props.as_ref(), escaping);
                out.push_str(&escaping.text(value));
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

/// A tagged node owning an ordered, non-empty list of children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentNode {
    /// Required at render time.
    pub tag: Option<String>,
    /// Required and non-empty at render time.
    pub children: Option<Vec<HtmlNode>>,
    pub props: Option<Attributes>,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            props: None,
        }
    }

    pub fn with_props(mut self, props: Attributes) -> Self {
        self.props = Some(props);
        self
    }

    pub fn to_html(&self) -> Result<String, ContractError> {
        let mut out = String::new();
        self.write_into(&mut out, Escaping::Verbatim)?;
        Ok(out)
    }

    fn write_into(&self, out: &mut String, escaping: Escaping) -> Result<(), ContractError> {
        let tag = self.tag.as_deref().ok_or(ContractError::ParentWithoutTag)?;
        let children = match self.children.as_deref() {
            Some(children) if !children.is_empty() => children,
            _ => {
                return Err(ContractError::ParentWithoutChildren {
                    tag: tag.to_string(),
                });
            }
        };

        open_tag(out, tag, self.props.as_ref(), escaping);
        for child in children {
            child.write_into(out, escaping)?;
        }
        close_tag(out, tag);
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, props: Option<&Attributes>, escaping: Escaping) {
    out.push('<');
    out.push_str(tag);
    if let Some(props) = props {
        out.push_str(&props.render(escaping));
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
