//! Box-drawing glyph builder.
//  A glyph set is composed from four characters:
//
//  ```
//  root
//  ├─ foo <- `├` is the branch char, `─` is the horizontal char
//  │  foo2 <- `│` is the vertical char
//  └─ bar <- `└` is the corner char
//     bar2
//  ```
//
//  "Backward" is the vertical line above the branching point, "forward" is the one below.

use crate::config::Glyphs;

/// Dash level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashLevel {
    /// Double,
    Double,
    /// Triple.
    Triple,
    /// Quadruple.
    Quadruple,
}

/// Edge width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeWidth {
    /// Narrow.
    Narrow,
    /// Bold.
    Bold,
}

impl Default for EdgeWidth {
    fn default() -> Self {
        Self::Narrow
    }
}

/// Unicode edge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EdgeStyle {
    /// Solid (single line).
    Solid(EdgeWidth),
    /// Dashed line.
    Dashed(EdgeWidth, DashLevel),
    /// Double line.
    Double,
}

impl EdgeStyle {
    /// Returns the style used at a junction, where dashed lines have no dedicated characters.
    fn at_junction(self) -> Junction {
        match self {
            Self::Solid(width) | Self::Dashed(width, _) => Junction::Solid(width),
            Self::Double => Junction::Double,
        }
    }
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::Solid(EdgeWidth::default())
    }
}

/// Line style at a junction character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Junction {
    /// Solid (single line).
    Solid(EdgeWidth),
    /// Double line.
    Double,
}

/// Unicode corner style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerStyle {
    /// Angle.
    Angle,
    /// Round.
    Round,
}

impl Default for CornerStyle {
    fn default() -> Self {
        Self::Angle
    }
}

/// Width of ambiguous width characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmbiWidth {
    /// Use single width (half width).
    ///
    /// Usually use this for non-CJK environment.
    Single,
    /// Use double width.
    ///
    /// Usually use this for CJK environment.
    Double,
}

impl AmbiWidth {
    /// Returns the number of columns a box-drawing character occupies.
    fn columns(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }
}

impl Default for AmbiWidth {
    fn default() -> Self {
        Self::Single
    }
}

/// Number of horizontal characters in a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLength {
    /// One horizontal character, as in `├─ `.
    Short,
    /// Two horizontal characters, as in `├── `.
    Long,
}

impl EdgeLength {
    /// Returns the number of horizontal characters.
    fn count(self) -> usize {
        match self {
            Self::Short => 1,
            Self::Long => 2,
        }
    }
}

impl Default for EdgeLength {
    fn default() -> Self {
        Self::Short
    }
}

/// Returns the branch character (`├` and its variants).
fn branch_char(backward: EdgeStyle, forward: EdgeStyle, horizontal: EdgeStyle) -> Option<char> {
    use EdgeWidth::{Bold, Narrow};
    use Junction::{Double, Solid};

    let c = match (
        backward.at_junction(),
        forward.at_junction(),
        horizontal.at_junction(),
    ) {
        (Solid(Narrow), Solid(Narrow), Solid(Narrow)) => '├',
        (Solid(Narrow), Solid(Narrow), Solid(Bold)) => '┝',
        (Solid(Narrow), Solid(Narrow), Double) => '╞',
        (Solid(Narrow), Solid(Bold), Solid(Narrow)) => '┟',
        (Solid(Narrow), Solid(Bold), Solid(Bold)) => '┢',
        (Solid(Bold), Solid(Narrow), Solid(Narrow)) => '┞',
        (Solid(Bold), Solid(Narrow), Solid(Bold)) => '┡',
        (Solid(Bold), Solid(Bold), Solid(Narrow)) => '┠',
        (Solid(Bold), Solid(Bold), Solid(Bold)) => '┣',
        (Double, Double, Solid(Narrow)) => '╟',
        (Double, Double, Double) => '╠',
        _ => return None,
    };
    Some(c)
}

/// Returns the corner character (`└` and its variants).
fn corner_char(backward: EdgeStyle, horizontal: EdgeStyle, corner: CornerStyle) -> Option<char> {
    use CornerStyle::{Angle, Round};
    use EdgeWidth::{Bold, Narrow};
    use Junction::{Double, Solid};

    let c = match (backward.at_junction(), horizontal.at_junction(), corner) {
        (Solid(Narrow), Solid(Narrow), Angle) => '└',
        (Solid(Narrow), Solid(Narrow), Round) => '╰',
        (Solid(Narrow), Solid(Bold), Angle) => '┕',
        (Solid(Narrow), Double, Angle) => '╘',
        (Solid(Bold), Solid(Narrow), Angle) => '┖',
        (Solid(Bold), Solid(Bold), Angle) => '┗',
        (Double, Solid(Narrow), Angle) => '╙',
        (Double, Double, Angle) => '╚',
        _ => return None,
    };
    Some(c)
}

/// Returns the vertical continuation character (`│` and its variants).
fn vertical_char(forward: EdgeStyle) -> char {
    use DashLevel::{Double as DoubleDash, Quadruple, Triple};
    use EdgeStyle::{Dashed, Double, Solid};
    use EdgeWidth::{Bold, Narrow};

    match forward {
        Solid(Narrow) => '│',
        Solid(Bold) => '┃',
        Dashed(Narrow, DoubleDash) => '╎',
        Dashed(Narrow, Triple) => '┆',
        Dashed(Narrow, Quadruple) => '┊',
        Dashed(Bold, DoubleDash) => '╏',
        Dashed(Bold, Triple) => '┇',
        Dashed(Bold, Quadruple) => '┋',
        Double => '║',
    }
}

/// Returns the horizontal character (`─` and its variants).
fn horizontal_char(horizontal: EdgeStyle) -> char {
    use DashLevel::{Double as DoubleDash, Quadruple, Triple};
    use EdgeStyle::{Dashed, Double, Solid};
    use EdgeWidth::{Bold, Narrow};

    match horizontal {
        Solid(Narrow) => '─',
        Solid(Bold) => '━',
        Dashed(Narrow, DoubleDash) => '╌',
        Dashed(Narrow, Triple) => '┄',
        Dashed(Narrow, Quadruple) => '┈',
        Dashed(Bold, DoubleDash) => '╍',
        Dashed(Bold, Triple) => '┅',
        Dashed(Bold, Quadruple) => '┉',
        Double => '═',
    }
}

/// Unicode edge config builder.
///
/// # Examples
///
/// ```
/// use treeglyph::{CornerStyle, EdgeLength, UnicodeEdgeConfigBuilder};
///
/// let glyphs = UnicodeEdgeConfigBuilder::new()
///     .corner(CornerStyle::Round)
///     .length(EdgeLength::Long)
///     .build()
///     .expect("round narrow corner exists")
///     .glyphs();
///
/// assert_eq!(glyphs.corner, "╰── ");
/// assert_eq!(glyphs.branch, "├── ");
/// assert_eq!(glyphs.vertical, "│   ");
/// assert_eq!(glyphs.indent, "    ");
/// ```
#[derive(Default, Debug, Clone, Copy)]
pub struct UnicodeEdgeConfigBuilder {
    /// Width of ambiguous width characters.
    ambiwidth: AmbiWidth,
    /// Connector length.
    length: EdgeLength,
    /// Vertical backward edge style.
    vertical_backward: EdgeStyle,
    /// Vertical forward edge style.
    vertical_forward: EdgeStyle,
    /// Horizontal edge style.
    horizontal: EdgeStyle,
    /// Corner style.
    corner: CornerStyle,
}

impl UnicodeEdgeConfigBuilder {
    /// Creates a new builder with narrow solid lines, angle corners and short connectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder for the given ambiguous character width.
    pub fn with_ambiwidth(ambiwidth: AmbiWidth) -> Self {
        Self {
            ambiwidth,
            ..Self::default()
        }
    }

    /// Sets the connector length.
    pub fn length(&mut self, length: EdgeLength) -> &mut Self {
        self.length = length;
        self
    }

    /// Sets the vertical ruled line style for both backward and forward.
    pub fn vertical(&mut self, style: EdgeStyle) -> &mut Self {
        self.vertical_backward = style;
        self.vertical_forward = style;
        self
    }

    /// Sets the vertical backward ruled line style.
    pub fn vertical_backward(&mut self, style: EdgeStyle) -> &mut Self {
        self.vertical_backward = style;
        self
    }

    /// Sets the vertical forward ruled line style.
    pub fn vertical_forward(&mut self, style: EdgeStyle) -> &mut Self {
        self.vertical_forward = style;
        self
    }

    /// Sets the horizontal ruled line style.
    pub fn horizontal(&mut self, style: EdgeStyle) -> &mut Self {
        self.horizontal = style;
        self
    }

    /// Sets the corner line style.
    pub fn corner(&mut self, corner: CornerStyle) -> &mut Self {
        self.corner = corner;
        self
    }

    /// Creates a `UnicodeEdgeConfig`.
    ///
    /// Returns `None` if Unicode has no box-drawing character for the combination.
    pub fn build(&self) -> Option<UnicodeEdgeConfig> {
        let branch = branch_char(
            self.vertical_backward,
            self.vertical_forward,
            self.horizontal,
        )?;
        let corner = corner_char(self.vertical_backward, self.horizontal, self.corner)?;

        Some(UnicodeEdgeConfig {
            ambiwidth: self.ambiwidth,
            length: self.length,
            branch,
            corner,
            horizontal: horizontal_char(self.horizontal),
            vertical: vertical_char(self.vertical_forward),
        })
    }
}

/// Resolved box-drawing characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnicodeEdgeConfig {
    /// Width of ambiguous width characters.
    ambiwidth: AmbiWidth,
    /// Connector length.
    length: EdgeLength,
    /// First character of a non-last item.
    branch: char,
    /// First character of the last item.
    corner: char,
    /// Horizontal part of the connectors.
    horizontal: char,
    /// Continuation below a non-last item.
    vertical: char,
}

impl UnicodeEdgeConfig {
    /// Returns the glyph set.
    ///
    /// The connector is followed by a single space, and both continuations are padded to the
    /// connector's display width.
    pub fn glyphs(&self) -> Glyphs {
        let char_width = self.ambiwidth.columns();
        let horizontal_count = self.length.count();
        let columns = (1 + horizontal_count) * char_width + 1;

        let connector = |first: char| {
            let mut s = String::new();
            s.push(first);
            (0..horizontal_count).for_each(|_| s.push(self.horizontal));
            s.push(' ');
            s
        };
        let vertical = format!("{}{}", self.vertical, " ".repeat(columns - char_width));

        Glyphs {
            corner: connector(self.corner),
            branch: connector(self.branch),
            vertical,
            indent: " ".repeat(columns),
        }
    }
}
