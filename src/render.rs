//! Render stage: uniform tree to text.

use std::{fmt, io};

use tracing::{instrument, trace};

use crate::{
    config::{Glyphs, RenderOptions},
    error::Result,
    node::Roots,
    tree_printer::TreePrinter,
};

/// Renders the tree with the default glyphs.
///
/// A single [`Node`] is rendered as the root, without a connector. A slice of nodes is rendered
/// as top-level siblings, each with a connector.
///
/// ```
/// use treeglyph::{render, Node};
///
/// let tree = Node::parent("a", vec![Node::parent("a1", vec![Node::leaf("x")])]);
/// assert_eq!(render(&tree), "a\n└─ a1\n   └─ x");
///
/// let siblings = [Node::leaf("a"), Node::leaf("b")];
/// assert_eq!(render(&siblings), "├─ a\n└─ b");
/// ```
///
/// [`Node`]: enum.Node.html
pub fn render<'a>(input: impl Into<Roots<'a>>) -> String {
    render_with(input, &RenderOptions::default())
}

/// Renders the tree with the given options.
pub fn render_with<'a>(input: impl Into<Roots<'a>>, opts: &RenderOptions) -> String {
    let roots = input.into();
    let mut buf = String::new();
    print(&mut buf, roots, opts.glyphs())
        .expect("Should never fail: writing to `String` never fails");
    if let Roots::Root(_) = roots {
        // Only the end of the whole output is trimmed, not each line.
        let len = buf.trim_end().len();
        buf.truncate(len);
    }
    trace!(
        root = matches!(roots, Roots::Root(_)),
        bytes = buf.len(),
        "rendered tree"
    );
    buf
}

/// Renders the tree into the given formatter backend.
///
/// The output is identical to [`render_with`].
///
/// ```
/// use treeglyph::{render_to, Node, RenderOptions};
///
/// let mut buf = String::from("tree:\n");
/// render_to(&mut buf, &Node::leaf("root"), &RenderOptions::new())?;
/// assert_eq!(buf, "tree:\nroot");
/// # treeglyph::Result::Ok(())
/// ```
///
/// [`render_with`]: fn.render_with.html
#[instrument(level = "trace", skip_all)]
pub fn render_to<'a, W: fmt::Write>(
    writer: &mut W,
    input: impl Into<Roots<'a>>,
    opts: &RenderOptions,
) -> Result<()> {
    match input.into() {
        // The trailing whitespace cannot be known before the end, so buffer it.
        roots @ Roots::Root(_) => writer.write_str(&render_with(roots, opts))?,
        roots @ Roots::Siblings(_) => print(writer, roots, opts.glyphs())?,
    }
    Ok(())
}

/// Renders the tree into the given I/O backend.
///
/// The output is identical to [`render_with`], encoded as UTF-8.
///
/// [`render_with`]: fn.render_with.html
#[instrument(level = "trace", skip_all)]
pub fn render_io<'a, W: io::Write>(
    mut writer: W,
    input: impl Into<Roots<'a>>,
    opts: &RenderOptions,
) -> Result<()> {
    writer.write_all(render_with(input, opts).as_bytes())?;
    Ok(())
}

/// Prints the trees without any trimming.
fn print<W: fmt::Write>(writer: &mut W, roots: Roots<'_>, glyphs: &Glyphs) -> fmt::Result {
    let mut printer = TreePrinter::new(writer, glyphs);
    printer.print(roots)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{config::EdgeConfig, error::Error, node::Node};

    /// Formatter backend that rejects every write.
    struct BrokenFmt;

    impl fmt::Write for BrokenFmt {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    /// I/O backend that rejects every write.
    struct BrokenIo;

    impl io::Write for BrokenIo {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn root_leaf_has_no_connector() {
        assert_eq!(render(&Node::leaf("a")), "a");
    }

    #[test]
    fn single_sibling_uses_corner() {
        assert_eq!(render(&[Node::leaf("a")]), "└─ a");
    }

    #[test]
    fn empty_siblings() {
        let nodes: Vec<Node> = Vec::new();
        assert_eq!(render(&nodes), "");
    }

    #[test]
    fn empty_parent_renders_like_leaf() {
        assert_eq!(render(&Node::parent("x", Vec::new())), "x");
        assert_eq!(
            render(&[Node::parent("x", Vec::new())]),
            render(&[Node::leaf("x")])
        );
    }

    #[test]
    fn root_output_is_trimmed_once() {
        let tree = Node::parent("a  ", vec![Node::leaf("b  "), Node::leaf("")]);
        assert_eq!(render(&tree), "a  \n├─ b  \n└─");
    }

    #[test]
    fn siblings_output_is_not_trimmed() {
        assert_eq!(render(&[Node::leaf("a"), Node::leaf("")]), "├─ a\n└─ ");
    }

    #[test]
    fn embedded_newline_is_verbatim() {
        let tree = Node::parent(
            "root",
            vec![Node::leaf("one\ntwo"), Node::leaf("three")],
        );
        assert_eq!(render(&tree), "root\n├─ one\ntwo\n└─ three");
    }

    #[test]
    fn empty_glyphs_are_accepted() {
        let opts = RenderOptions::with_glyphs(Glyphs::new("", "", "", ""));
        let tree = Node::parent("a", vec![Node::parent("b", vec![Node::leaf("c")])]);
        assert_eq!(render_with(&tree, &opts), "a\nb\nc");
    }

    #[test]
    fn render_to_appends() -> Result<()> {
        let opts = RenderOptions::with_glyphs(EdgeConfig::Ascii);
        let mut buf = String::from("> ");
        render_to(&mut buf, &[Node::leaf("a"), Node::leaf("b")], &opts)?;
        assert_eq!(buf, "> |-- a\n`-- b");
        Ok(())
    }

    #[test]
    fn render_to_trims_root() -> Result<()> {
        let mut buf = String::new();
        render_to(
            &mut buf,
            &Node::parent("a", vec![Node::leaf("b\n")]),
            &RenderOptions::new(),
        )?;
        assert_eq!(buf, "a\n└─ b");
        Ok(())
    }

    #[test]
    fn render_io_writes_utf8() -> Result<()> {
        let mut out = Vec::new();
        render_io(&mut out, &[Node::leaf("a")], &RenderOptions::new())?;
        assert_eq!(out, "└─ a".as_bytes());
        Ok(())
    }

    #[test]
    fn render_to_reports_format_error_for_root() {
        let tree = Node::parent("a", vec![Node::leaf("b")]);
        let e = render_to(&mut BrokenFmt, &tree, &RenderOptions::new()).unwrap_err();
        assert!(matches!(e, Error::Format(_)));
    }

    #[test]
    fn render_to_reports_format_error_for_siblings() {
        let nodes = [Node::leaf("a"), Node::leaf("b")];
        let e = render_to(&mut BrokenFmt, &nodes, &RenderOptions::new()).unwrap_err();
        assert!(matches!(e, Error::Format(_)));
    }

    #[test]
    fn render_io_reports_io_error() {
        let e = render_io(BrokenIo, &[Node::leaf("a")], &RenderOptions::new()).unwrap_err();
        assert!(matches!(e, Error::Io(_)));
    }
}
