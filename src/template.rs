//! Template comment stripping and placeholder substitution.
//!
//! A template is literal algebra syntax plus single-letter placeholders,
//! optionally followed by an authoring comment. Filling a template strips
//! the comment and replaces each placeholder occurrence with a fresh draw
//! from its numeric domain; everything else passes through untouched.

use crate::values;
use rand::Rng;

/// Marker that starts an authoring comment inside a template.
pub const COMMENT_MARKER: char = '#';

/// True for characters that act as placeholders inside templates.
///
/// The unknowns `x` and `y` are not placeholders: they must survive
/// substitution so the interpreter has a variable to solve for.
pub fn is_placeholder(ch: char) -> bool {
    ch.is_ascii_lowercase() && ch != 'x' && ch != 'y'
}

/// Strip the authoring comment and surrounding whitespace from a template.
pub fn strip_comment(template: &str) -> &str {
    match template.split_once(COMMENT_MARKER) {
        Some((head, _)) => head.trim(),
        None => template.trim(),
    }
}

/// Resolve a template into learner-facing text.
///
/// The comment is stripped first, then the remaining text is scanned
/// character by character: placeholder letters are replaced by the decimal
/// rendering of a draw for that exact letter, all other characters pass
/// through unchanged. Repeated letters are resolved independently per
/// occurrence, so `b + b` may legitimately receive two different values.
///
/// No multiplication sign is inserted between a substituted numeral and an
/// adjacent variable; the interpreter's grammar treats juxtaposition as an
/// implicit product.
pub fn fill<R: Rng + ?Sized>(rng: &mut R, template: &str) -> String {
    let stripped = strip_comment(template);
    let mut out = String::with_capacity(stripped.len());
    for ch in stripped.chars() {
        if is_placeholder(ch) {
            out.push_str(&values::pick(rng, ch).to_string());
        } else {
            out.push(ch);
        }
    }
    out
}
