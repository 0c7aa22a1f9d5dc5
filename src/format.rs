//! Transform and render in one call.

use crate::{
    config::RenderOptions,
    node::Input,
    render::render_with,
    transform::{transform, Mapping},
};

/// Renders the domain tree with the default glyphs.
///
/// Same as `render(&transform(input, mapping))`.
pub fn format<T, M: Mapping<T> + ?Sized>(input: &Input<T>, mapping: &M) -> String {
    format_with(input, mapping, &RenderOptions::default())
}

/// Renders the domain tree with the given options.
pub fn format_with<T, M: Mapping<T> + ?Sized>(
    input: &Input<T>,
    mapping: &M,
    opts: &RenderOptions,
) -> String {
    render_with(&transform(input, mapping), opts)
}
