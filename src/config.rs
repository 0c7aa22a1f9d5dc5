//! Config types.

use serde::{Deserialize, Serialize};

pub use self::unicode::{
    AmbiWidth, CornerStyle, DashLevel, EdgeLength, EdgeStyle, EdgeWidth, UnicodeEdgeConfig,
    UnicodeEdgeConfigBuilder,
};

pub mod unicode;

/// Connector strings drawn in front of each rendered line.
///
/// Any field left out of a deserialized table keeps its default value.
///
/// ```
/// use treeglyph::{render_with, Glyphs, Node, RenderOptions};
///
/// let glyphs = Glyphs {
///     corner: "+-- ".into(),
///     branch: "|-- ".into(),
///     ..Glyphs::default()
/// };
/// let tree = Node::parent("root", vec![Node::leaf("a"), Node::leaf("b")]);
///
/// assert_eq!(
///     render_with(&tree, &RenderOptions::with_glyphs(glyphs)),
///     "root\n|-- a\n+-- b"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Connector of the last child.
    pub corner: String,
    /// Connector of a non-last child.
    pub branch: String,
    /// Continuation below a non-last child, carried to its descendants.
    pub vertical: String,
    /// Continuation below the last child, carried to its descendants.
    pub indent: String,
}

impl Glyphs {
    /// Creates a glyph set from the four connector strings.
    pub fn new(
        corner: impl Into<String>,
        branch: impl Into<String>,
        vertical: impl Into<String>,
        indent: impl Into<String>,
    ) -> Self {
        Self {
            corner: corner.into(),
            branch: branch.into(),
            vertical: vertical.into(),
            indent: indent.into(),
        }
    }

    /// Returns the connector put in front of an item's own line.
    pub(crate) fn connector(&self, last_child: bool) -> &str {
        if last_child {
            &self.corner
        } else {
            &self.branch
        }
    }

    /// Returns the continuation an item contributes to its descendants' lines.
    pub(crate) fn continuation(&self, last_child: bool) -> &str {
        if last_child {
            &self.indent
        } else {
            &self.vertical
        }
    }
}

impl Default for Glyphs {
    /// `"└─ "`, `"├─ "`, `"│  "` and `"   "`.
    fn default() -> Self {
        Self::new("\u{2514}\u{2500} ", "\u{251C}\u{2500} ", "\u{2502}  ", "   ")
    }
}

impl From<EdgeConfig> for Glyphs {
    fn from(edge: EdgeConfig) -> Self {
        edge.glyphs()
    }
}

/// Edge preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum EdgeConfig {
    /// Compact single width Unicode, the default glyph set.
    ///
    /// ```text
    /// .
    /// ├─ foo
    /// │  ├─ bar
    /// │  │  └─ baz
    /// │  └─ qux
    /// │     └─ quux
    /// ├─ corge
    /// └─ grault
    /// ```
    Classic,
    /// Standard ASCII tree.
    ///
    /// The same style as [`tree` command][unix-tree] with `LANG=C` for UNIX.
    ///
    /// ```text
    /// .
    /// |-- foo
    /// |   |-- bar
    /// |   |   `-- baz
    /// |   `-- qux
    /// |       `-- quux
    /// |-- corge
    /// `-- grault
    /// ```
    ///
    /// [unix-tree]: http://mama.indstate.edu/users/ice/tree/
    Ascii,
    /// Unicode assuming ruled line characters are single width (half width).
    ///
    /// The same style as [`tree` command][unix-tree] with `LANG=(lang).utf8` for UNIX.
    ///
    /// This won't be shown correctly in CJK fonts, because they usually have double-width glyphs
    /// for ruled lines.
    /// Consider using [`UnicodeDoubleWidth`] for East Asian environment.
    ///
    /// ```text
    /// .
    /// ├── foo
    /// │   ├── bar
    /// │   │   └── baz
    /// │   └── qux
    /// │       └── quux
    /// ├── corge
    /// └── grault
    /// ```
    ///
    /// [unix-tree]: http://mama.indstate.edu/users/ice/tree/
    /// [`UnicodeDoubleWidth`]: #variant.UnicodeDoubleWidth
    UnicodeSingleWidth,
    /// Unicode assuming ruled line characters are double width (full width).
    ///
    /// This would be useful for **East Asian** environment.
    ///
    /// About ambiguous width characters, see [UAX #11: East Asian Width][UAX-11].
    ///
    /// Note that the single indent depth has the width of 5 columns.
    ///
    /// [UAX-11]: https://unicode.org/reports/tr11/
    UnicodeDoubleWidth,
    /// Custom box-drawing glyphs.
    #[serde(skip)]
    Unicode(UnicodeEdgeConfig),
}

impl EdgeConfig {
    /// Returns the glyph set for the preset.
    pub fn glyphs(&self) -> Glyphs {
        match self {
            Self::Classic => Glyphs::default(),
            Self::Ascii => Glyphs::new("`-- ", "|-- ", "|   ", "    "),
            Self::UnicodeSingleWidth => Glyphs::new(
                "\u{2514}\u{2500}\u{2500} ",
                "\u{251C}\u{2500}\u{2500} ",
                "\u{2502}   ",
                "    ",
            ),
            Self::UnicodeDoubleWidth => Glyphs::new(
                "\u{2514}\u{2500} ",
                "\u{251C}\u{2500} ",
                "\u{2502}   ",
                "     ",
            ),
            Self::Unicode(unicode) => unicode.glyphs(),
        }
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        EdgeConfig::Classic
    }
}

/// `RenderOptions` builder.
#[derive(Default, Debug, Clone)]
pub struct RenderOptionsBuilder {
    /// Current options.
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the glyph set.
    ///
    /// # Examples
    ///
    /// ```
    /// use treeglyph::{render_with, EdgeConfig, Node, RenderOptionsBuilder};
    ///
    /// let opts = RenderOptionsBuilder::new()
    ///     .glyphs(EdgeConfig::Ascii)
    ///     .build();
    ///
    /// let tree = Node::parent("root", vec![Node::parent("a", vec![Node::leaf("b")])]);
    /// assert_eq!(render_with(&tree, &opts), "root\n`-- a\n    `-- b");
    /// ```
    pub fn glyphs(&mut self, glyphs: impl Into<Glyphs>) -> &mut Self {
        self.options.glyphs = glyphs.into();
        self
    }

    /// Overrides the connector of the last child.
    pub fn corner(&mut self, v: impl Into<String>) -> &mut Self {
        self.options.glyphs.corner = v.into();
        self
    }

    /// Overrides the connector of a non-last child.
    pub fn branch(&mut self, v: impl Into<String>) -> &mut Self {
        self.options.glyphs.branch = v.into();
        self
    }

    /// Overrides the continuation below a non-last child.
    pub fn vertical(&mut self, v: impl Into<String>) -> &mut Self {
        self.options.glyphs.vertical = v.into();
        self
    }

    /// Overrides the continuation below the last child.
    pub fn indent(&mut self, v: impl Into<String>) -> &mut Self {
        self.options.glyphs.indent = v.into();
        self
    }

    /// Builds a `RenderOptions`.
    pub fn build(&self) -> RenderOptions {
        self.options.clone()
    }
}

/// Options common for a rendering.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Connector glyphs.
    glyphs: Glyphs,
}

impl RenderOptions {
    /// Creates a new default `RenderOptions`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `RenderOptions` with the given glyphs.
    pub fn with_glyphs(glyphs: impl Into<Glyphs>) -> Self {
        Self {
            glyphs: glyphs.into(),
        }
    }

    /// Returns the glyph set.
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_glyphs_are_classic() {
        let glyphs = Glyphs::default();
        assert_eq!(glyphs.corner, "└─ ");
        assert_eq!(glyphs.branch, "├─ ");
        assert_eq!(glyphs.vertical, "│  ");
        assert_eq!(glyphs.indent, "   ");
        assert_eq!(EdgeConfig::default().glyphs(), glyphs);
    }

    #[test]
    fn presets_keep_columns_aligned() {
        for edge in [
            EdgeConfig::Ascii,
            EdgeConfig::Classic,
            EdgeConfig::UnicodeSingleWidth,
        ]
        .iter()
        {
            let glyphs = edge.glyphs();
            let width = glyphs.indent.chars().count();
            assert_eq!(glyphs.corner.chars().count(), width, "{:?}", edge);
            assert_eq!(glyphs.branch.chars().count(), width, "{:?}", edge);
            assert_eq!(glyphs.vertical.chars().count(), width, "{:?}", edge);
        }
    }

    #[test]
    fn builder_overrides_single_glyph() {
        let opts = RenderOptionsBuilder::new()
            .glyphs(EdgeConfig::Ascii)
            .corner("\\-- ")
            .build();
        assert_eq!(opts.glyphs().corner, "\\-- ");
        assert_eq!(opts.glyphs().branch, "|-- ");
    }

    #[test]
    fn connector_and_continuation() {
        let glyphs = EdgeConfig::Ascii.glyphs();
        assert_eq!(glyphs.connector(true), "`-- ");
        assert_eq!(glyphs.connector(false), "|-- ");
        assert_eq!(glyphs.continuation(true), "    ");
        assert_eq!(glyphs.continuation(false), "|   ");
    }
}
