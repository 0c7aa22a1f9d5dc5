//! Tree printer.

use std::fmt;

use crate::{
    config::Glyphs,
    item_writer::{ItemState, ItemStyle, ItemWriter},
    node::{Node, Roots},
};

/// Walk step.
enum Step<'a> {
    /// Print the node and schedule its children.
    Open(&'a Node, ItemStyle),
    /// Leave the innermost open node.
    Close,
}

/// Tree printer.
pub(crate) struct TreePrinter<'g, W> {
    /// Writer.
    writer: W,
    /// Glyphs.
    glyphs: &'g Glyphs,
    /// Item writer states for each nest level.
    states: Vec<ItemState>,
    /// Whether any line has been written.
    started: bool,
}

impl<'g, W: fmt::Write> TreePrinter<'g, W> {
    /// Creates a new `TreePrinter`.
    pub(crate) fn new(writer: W, glyphs: &'g Glyphs) -> Self {
        Self {
            writer,
            glyphs,
            states: Vec::new(),
            started: false,
        }
    }

    /// Opens a new node and writes its line.
    fn open_node(&mut self, style: ItemStyle, text: &str) -> fmt::Result {
        // Lines are separated, not terminated.
        if self.started {
            self.writer.write_char('\n')?;
        }
        self.started = true;

        self.states.push(style.into());
        ItemWriter::new(&mut self.writer, &self.states, self.glyphs).write_item(text)
    }

    /// Closes the innermost open node.
    fn close_node(&mut self) {
        let closed = self.states.pop();
        debug_assert!(closed.is_some(), "Close must be paired with an open");
    }

    /// Prints whole trees.
    ///
    /// Nodes are visited in pre-order with an explicit stack, so the depth of the tree is not
    /// limited by the call stack.
    pub(crate) fn print(&mut self, roots: Roots<'_>) -> fmt::Result {
        let mut steps = match roots {
            Roots::Root(node) => vec![Step::Open(node, ItemStyle::Root)],
            Roots::Siblings(nodes) => siblings(nodes).collect(),
        };

        while let Some(step) = steps.pop() {
            match step {
                Step::Open(node, style) => {
                    self.open_node(style, node.text())?;
                    steps.push(Step::Close);
                    if let Some(children) = node.children() {
                        steps.extend(siblings(children));
                    }
                }
                Step::Close => self.close_node(),
            }
        }
        debug_assert!(self.states.is_empty());

        Ok(())
    }
}

/// Returns open steps for the siblings, in reverse so that the first one is popped first.
fn siblings(nodes: &[Node]) -> impl Iterator<Item = Step<'_>> {
    let count = nodes.len();
    nodes
        .iter()
        .enumerate()
        .rev()
        .map(move |(index, node)| Step::Open(node, ItemStyle::sibling(index, count)))
}
