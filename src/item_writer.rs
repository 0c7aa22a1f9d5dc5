//! Tree node line writer.

use std::fmt;

use crate::config::Glyphs;

/// Position of an item among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemStyle {
    /// The lone top-level node. It has no connector and contributes no continuation.
    Root,
    /// A child, or a top-level sibling.
    Child {
        /// Whether the item is the last child.
        is_last_child: bool,
    },
}

impl ItemStyle {
    /// Creates a style for the item at `index` among `count` siblings.
    pub(crate) fn sibling(index: usize, count: usize) -> Self {
        Self::Child {
            is_last_child: index + 1 == count,
        }
    }
}

/// Item writer state for single nest level.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ItemState {
    /// Item style.
    style: ItemStyle,
}

impl ItemState {
    /// Writes the connector in front of the item's own line.
    fn write_connector<W: fmt::Write>(self, writer: &mut W, glyphs: &Glyphs) -> fmt::Result {
        match self.style {
            ItemStyle::Root => Ok(()),
            ItemStyle::Child { is_last_child } => writer.write_str(glyphs.connector(is_last_child)),
        }
    }

    /// Writes the continuation in front of a descendant's line.
    fn write_continuation<W: fmt::Write>(self, writer: &mut W, glyphs: &Glyphs) -> fmt::Result {
        match self.style {
            ItemStyle::Root => Ok(()),
            ItemStyle::Child { is_last_child } => {
                writer.write_str(glyphs.continuation(is_last_child))
            }
        }
    }
}

impl From<ItemStyle> for ItemState {
    fn from(style: ItemStyle) -> Self {
        Self { style }
    }
}

/// A sink to write the first line of a single item.
pub(crate) struct ItemWriter<'a, W> {
    /// Writer.
    writer: &'a mut W,
    /// Glyphs.
    glyphs: &'a Glyphs,
    /// States of the item and all of its ancestors, outermost first.
    states: &'a [ItemState],
}

impl<'a, W: fmt::Write> ItemWriter<'a, W> {
    /// Creates a new `ItemWriter`.
    pub(crate) fn new(writer: &'a mut W, states: &'a [ItemState], glyphs: &'a Glyphs) -> Self {
        Self {
            writer,
            glyphs,
            states,
        }
    }

    /// Writes the line prefix: ancestors' continuations followed by the item's connector.
    fn write_prefix(&mut self) -> fmt::Result {
        let (last, ancestors) = match self.states.split_last() {
            Some(v) => v,
            None => return Ok(()),
        };
        for state in ancestors {
            state.write_continuation(self.writer, self.glyphs)?;
        }
        last.write_connector(self.writer, self.glyphs)
    }

    /// Writes the prefix and the item text.
    ///
    /// The text is written verbatim. Newlines in it are not followed by any prefix.
    pub(crate) fn write_item(mut self, text: &str) -> fmt::Result {
        self.write_prefix()?;
        self.writer.write_str(text)
    }
}
