//! Transform stage: caller's domain tree to the uniform render tree.

use tracing::{instrument, trace};

use crate::node::{Input, Node};

/// Child descriptor returned by [`Mapping::children`].
///
/// [`Mapping::children`]: trait.Mapping.html#tymethod.children
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Child<T> {
    /// Positional, unlabeled child.
    Node(T),
    /// Child with a label, passed to the text callback as [`Context::name`].
    ///
    /// [`Context::name`]: struct.Context.html#method.name
    Named(String, T),
    /// Group of children wrapped in an extra parent whose text is the group name.
    Group(String, Vec<T>),
}

impl<T> Child<T> {
    /// Creates a labeled child.
    pub fn named(name: impl Into<String>, node: T) -> Self {
        Self::Named(name.into(), node)
    }

    /// Creates a named children group.
    pub fn group(name: impl Into<String>, nodes: Vec<T>) -> Self {
        Self::Group(name.into(), nodes)
    }

    /// Returns the label or the group name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Node(_) => None,
            Self::Named(name, _) | Self::Group(name, _) => Some(name),
        }
    }

    /// Returns the domain nodes of the descriptor.
    pub fn nodes(&self) -> &[T] {
        match self {
            Self::Node(node) | Self::Named(_, node) => std::slice::from_ref(node),
            Self::Group(_, nodes) => nodes,
        }
    }
}

impl<T> From<T> for Child<T> {
    fn from(node: T) -> Self {
        Self::Node(node)
    }
}

/// What the text callback knows about the node.
#[derive(Debug)]
pub struct Context<'c, T> {
    /// Position among siblings.
    index: usize,
    /// Label of a named child.
    name: Option<&'c str>,
    /// Child descriptors, `None` for a leaf.
    children: Option<&'c [Child<T>]>,
}

impl<'c, T> Context<'c, T> {
    /// Returns the zero-based position among siblings.
    ///
    /// A lone root is at `0`. Members of a group are numbered within the group.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the label if the node was reached as a [`Child::Named`].
    ///
    /// [`Child::Named`]: enum.Child.html#variant.Named
    pub fn name(&self) -> Option<&'c str> {
        self.name
    }

    /// Returns the child descriptors, or `None` if the node is a leaf.
    pub fn children(&self) -> Option<&'c [Child<T>]> {
        self.children
    }

    /// Returns whether the node will be rendered as a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Returns the number of child descriptors. A group counts as one.
    pub fn child_count(&self) -> usize {
        self.children.map_or(0, <[_]>::len)
    }

    /// Returns the child domain nodes, with groups flattened into their members.
    pub fn nodes(&self) -> impl Iterator<Item = &'c T> {
        self.children
            .unwrap_or_default()
            .iter()
            .flat_map(Child::nodes)
    }
}

/// Child discovery and text generation for a domain type.
///
/// Implement this for a dedicated type, or build one from two closures with [`mapping`].
///
/// [`mapping`]: fn.mapping.html
pub trait Mapping<T> {
    /// Returns the children of the node, or `None` to make it a leaf.
    fn children(&self, node: &T) -> Option<Vec<Child<T>>>;

    /// Returns the display text of the node.
    fn text(&self, node: &T, cx: &Context<'_, T>) -> String;
}

impl<T, M: Mapping<T> + ?Sized> Mapping<T> for &M {
    fn children(&self, node: &T) -> Option<Vec<Child<T>>> {
        (**self).children(node)
    }

    fn text(&self, node: &T, cx: &Context<'_, T>) -> String {
        (**self).text(node, cx)
    }
}

/// Mapping built from two closures.
#[derive(Debug, Clone, Copy)]
pub struct FnMapping<C, X> {
    /// Child discovery.
    children: C,
    /// Text generation.
    text: X,
}

impl<T, C, X> Mapping<T> for FnMapping<C, X>
where
    C: Fn(&T) -> Option<Vec<Child<T>>>,
    X: Fn(&T, &Context<'_, T>) -> String,
{
    fn children(&self, node: &T) -> Option<Vec<Child<T>>> {
        (self.children)(node)
    }

    fn text(&self, node: &T, cx: &Context<'_, T>) -> String {
        (self.text)(node, cx)
    }
}

/// Creates a mapping from a child discovery closure and a text closure.
///
/// ```
/// use treeglyph::{format, mapping, Child, Input};
///
/// fn entries(path: &str) -> Option<Vec<&'static str>> {
///     match path {
///         "src" => Some(vec!["lib.rs", "bin"]),
///         "bin" => Some(Vec::new()),
///         _ => None,
///     }
/// }
///
/// let m = mapping(
///     |path: &&str| entries(path).map(|v| v.into_iter().map(Child::Node).collect()),
///     |path, cx| match cx.children() {
///         Some(_) => format!("{}/ ({})", path, cx.child_count()),
///         None => path.to_string(),
///     },
/// );
///
/// assert_eq!(
///     format(&Input::Single("src"), &m),
///     "src/ (2)\n├─ lib.rs\n└─ bin/ (0)"
/// );
/// ```
pub fn mapping<T, C, X>(children: C, text: X) -> FnMapping<C, X>
where
    C: Fn(&T) -> Option<Vec<Child<T>>>,
    X: Fn(&T, &Context<'_, T>) -> String,
{
    FnMapping { children, text }
}

/// Converts the domain tree into the uniform render tree.
///
/// Every node is visited once, its text is generated before its children are converted, and
/// children keep the order `children` returned them in.
#[instrument(level = "trace", skip_all)]
pub fn transform<T, M: Mapping<T> + ?Sized>(input: &Input<T>, mapping: &M) -> Input<Node> {
    let output = match input {
        Input::Single(node) => Input::Single(transform_node(node, 0, None, mapping)),
        Input::Many(nodes) => Input::Many(transform_all(nodes, mapping)),
    };
    trace!(roots = output.as_slice().len(), "transformed tree");
    output
}

/// Converts unlabeled siblings.
fn transform_all<T, M: Mapping<T> + ?Sized>(nodes: &[T], mapping: &M) -> Vec<Node> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| transform_node(node, index, None, mapping))
        .collect()
}

/// Converts a single domain node and its descendants.
fn transform_node<T, M: Mapping<T> + ?Sized>(
    node: &T,
    index: usize,
    name: Option<&str>,
    mapping: &M,
) -> Node {
    let children = mapping.children(node);
    let text = mapping.text(
        node,
        &Context {
            index,
            name,
            children: children.as_deref(),
        },
    );

    match children {
        None => Node::leaf(text),
        Some(children) => Node::parent(
            text,
            children
                .iter()
                .enumerate()
                .map(|(index, child)| transform_child(child, index, mapping))
                .collect(),
        ),
    }
}

/// Converts a child descriptor.
fn transform_child<T, M: Mapping<T> + ?Sized>(
    child: &Child<T>,
    index: usize,
    mapping: &M,
) -> Node {
    match child {
        Child::Node(node) => transform_node(node, index, None, mapping),
        Child::Named(name, node) => {
            transform_node(node, index, Some(name.as_str()), mapping)
        }
        // The group name is used as is, without the text callback.
        Child::Group(name, nodes) => Node::parent(name.clone(), transform_all(nodes, mapping)),
    }
}
