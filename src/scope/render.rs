//! Flattens the active scope stack into `=> outer => inner |`.

use super::ScopeProvider;
use std::fmt::Write;

/// Written before the first scope.
pub const FIRST_ARROW: &str = "=> ";
/// Written between scopes.
pub const ARROW: &str = " => ";
/// Closes a non-empty scope prefix. The message follows it directly.
pub const TERMINATOR: &str = " |";

/// Appends the rendered scope stack to `buf` and returns how many bytes were added.
///
/// Scopes are visited in provider order and never reordered. Nothing is written
/// when no scope is active.
pub fn render(provider: &dyn ScopeProvider, buf: &mut String) -> usize {
    let start = buf.len();

    provider.for_each_scope(&mut |scope| {
        buf.push_str(if buf.len() == start { FIRST_ARROW } else { ARROW });
        // A failing `Display` keeps its arrow and whatever it wrote; the remaining scopes still render.
        let _ = write!(buf, "{scope}");
    });

    if buf.len() > start {
        buf.push_str(TERMINATOR);
    }

    buf.len() - start
}
