//! Renders arbitrary trees as plain text.
//!
//! A caller's tree is first converted into the uniform [`Node`] tree by [`transform`] with a
//! [`Mapping`], then drawn by [`render`]. [`format`] does both.
//!
//! ```
//! use treeglyph::{format, mapping, Child, Input};
//!
//! let m = mapping(
//!     |n: &u32| if *n > 0 { Some(vec![Child::Node(n - 1)]) } else { None },
//!     |n, _| format!("level {}", n),
//! );
//! assert_eq!(
//!     format(&Input::Single(2_u32), &m),
//!     "level 2\n└─ level 1\n   └─ level 0"
//! );
//! ```
//!
//! [`Node`]: enum.Node.html
//! [`transform`]: fn.transform.html
//! [`Mapping`]: trait.Mapping.html
//! [`render`]: fn.render.html
//! [`format`]: fn.format.html
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub use self::{
    config::{
        AmbiWidth, CornerStyle, DashLevel, EdgeConfig, EdgeLength, EdgeStyle, EdgeWidth, Glyphs,
        RenderOptions, RenderOptionsBuilder, UnicodeEdgeConfig, UnicodeEdgeConfigBuilder,
    },
    error::{Error, Result},
    format::{format, format_with},
    node::{Input, Node, Roots},
    render::{render, render_io, render_to, render_with},
    transform::{mapping, transform, Child, Context, FnMapping, Mapping},
};

pub(crate) mod config;
mod error;
mod format;
pub(crate) mod item_writer;
mod node;
mod render;
mod transform;
mod tree_printer;
