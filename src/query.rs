//! Query literals and the helpers that prepare them for checking.
//!
//! A [`Query`] is the text of one host-language string literal plus the
//! source position its diagnostics are reported at. Locating literals in
//! host source is left to the caller; this module only offers the pieces a
//! caller needs around that:
//!
//! - [`looks_like_sql`] decides whether a literal is SQL at all
//! - [`merge_fragments`] joins the parts of an interpolated string
//! - [`Query::from_source`] recovers the column of the first line of a
//!   multi-line literal

mod gate;
mod types;

pub use gate::looks_like_sql;
pub use types::Query;

/// Text that stands in for every interpolated segment.
pub const PLACEHOLDER: &str = "formatted_value";

/// One part of an interpolated string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Literal text
    Text(&'a str),
    /// An interpolated expression, opaque to every rule
    Interpolated
}

/// Join the fragments of an interpolated string into one checkable text,
/// replacing interpolated segments with [`PLACEHOLDER`].
///
/// # Example
///
/// ```
/// use sql_style_checker::query::{Fragment, merge_fragments};
///
/// let sql = merge_fragments(&[
///     Fragment::Text("SELECT a FROM "),
///     Fragment::Interpolated,
///     Fragment::Text(" WHERE b = 1")
/// ]);
///
/// assert_eq!(sql, "SELECT a FROM formatted_value WHERE b = 1");
/// ```
pub fn merge_fragments(fragments: &[Fragment<'_>]) -> String {
    fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Text(text) => *text,
            Fragment::Interpolated => PLACEHOLDER
        })
        .collect()
}
