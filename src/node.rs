//! Uniform render tree.

use std::{fmt, iter::FromIterator};

/// A node of the uniform render tree.
///
/// Every node is either a [`Leaf`] with a single line of text, or a [`Parent`] with text and an
/// ordered list of children. An empty parent renders exactly like a leaf, but is still a parent.
///
/// ```
/// use treeglyph::Node;
///
/// let tree = Node::parent("src", vec![Node::leaf("lib.rs"), Node::leaf("node.rs")]);
/// assert_eq!(tree.to_string(), "src\n├─ lib.rs\n└─ node.rs");
/// ```
///
/// [`Leaf`]: #variant.Leaf
/// [`Parent`]: #variant.Parent
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Terminal node.
    Leaf {
        /// Display text.
        text: String,
    },
    /// Internal node, possibly without children.
    Parent {
        /// Display text.
        text: String,
        /// Children in display order.
        children: Vec<Node>,
    },
}

impl Node {
    /// Creates a leaf.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Leaf { text: text.into() }
    }

    /// Creates a parent with the given children.
    pub fn parent(text: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Parent {
            text: text.into(),
            children,
        }
    }

    /// Returns the display text.
    pub fn text(&self) -> &str {
        match self {
            Self::Leaf { text } | Self::Parent { text, .. } => text,
        }
    }

    /// Returns the children, or `None` for a leaf.
    ///
    /// A parent without children returns `Some(&[])`.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Self::Leaf { .. } => None,
            Self::Parent { children, .. } => Some(children),
        }
    }

    /// Returns whether the node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Returns whether the node is a parent.
    pub fn is_parent(&self) -> bool {
        matches!(self, Self::Parent { .. })
    }

    /// Returns the number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children().unwrap_or_default());
        }
        count
    }
}

impl fmt::Display for Node {
    /// Renders the node as a root with the default glyphs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}

/// Top-level input: a single tree or an ordered sequence of sibling trees.
///
/// `N` is [`Node`] for rendering and a caller's own domain type for transforming.
///
/// [`Node`]: enum.Node.html
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Input<N> {
    /// A single tree, rendered as the root.
    Single(N),
    /// Sibling trees, each rendered with a connector.
    Many(Vec<N>),
}

impl<N> Input<N> {
    /// Returns the trees as a slice, regardless of the variant.
    pub fn as_slice(&self) -> &[N] {
        match self {
            Self::Single(node) => std::slice::from_ref(node),
            Self::Many(nodes) => nodes,
        }
    }

    /// Applies `f` to every top-level tree, keeping the variant.
    pub fn map<M, F: FnMut(N) -> M>(self, mut f: F) -> Input<M> {
        match self {
            Self::Single(node) => Input::Single(f(node)),
            Self::Many(nodes) => Input::Many(nodes.into_iter().map(f).collect()),
        }
    }

    /// Returns the single tree, if this is `Single`.
    pub fn into_single(self) -> Option<N> {
        match self {
            Self::Single(node) => Some(node),
            Self::Many(_) => None,
        }
    }

    /// Returns the trees as a vector, regardless of the variant.
    pub fn into_vec(self) -> Vec<N> {
        match self {
            Self::Single(node) => vec![node],
            Self::Many(nodes) => nodes,
        }
    }
}

impl From<Node> for Input<Node> {
    fn from(node: Node) -> Self {
        Self::Single(node)
    }
}

impl From<Vec<Node>> for Input<Node> {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Many(nodes)
    }
}

impl<N> FromIterator<N> for Input<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}

/// Borrowed render input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roots<'a> {
    /// A single root node, rendered without a connector.
    Root(&'a Node),
    /// Top-level siblings, none of them a root.
    Siblings(&'a [Node]),
}

impl<'a> From<&'a Node> for Roots<'a> {
    fn from(node: &'a Node) -> Self {
        Self::Root(node)
    }
}

impl<'a> From<&'a [Node]> for Roots<'a> {
    fn from(nodes: &'a [Node]) -> Self {
        Self::Siblings(nodes)
    }
}

impl<'a, const N: usize> From<&'a [Node; N]> for Roots<'a> {
    fn from(nodes: &'a [Node; N]) -> Self {
        Self::Siblings(nodes)
    }
}

impl<'a> From<&'a Vec<Node>> for Roots<'a> {
    fn from(nodes: &'a Vec<Node>) -> Self {
        Self::Siblings(nodes)
    }
}

impl<'a> From<&'a Input<Node>> for Roots<'a> {
    fn from(input: &'a Input<Node>) -> Self {
        match input {
            Input::Single(node) => Self::Root(node),
            Input::Many(nodes) => Self::Siblings(nodes),
        }
    }
}
