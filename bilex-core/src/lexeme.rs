//! Lexeme result types

use smallvec::SmallVec;

/// One normalized root form produced by `lexize`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexeme {
    /// The root form, decoded to text
    pub text: String,
    /// Marks an alternative reading of the same input, to be OR-combined
    /// with the entry before it when building a query
    pub is_variant: bool,
}

impl Lexeme {
    /// Create a lexeme
    pub fn new(text: impl Into<String>, is_variant: bool) -> Lexeme {
        Lexeme {
            text: text.into(),
            is_variant,
        }
    }
}

/// Ordered sequence of 0, 1, or 2 lexemes; inline storage, no heap spine
pub type Lexemes = SmallVec<[Lexeme; 2]>;

/// Render lexemes as a query expression fragment.
///
/// Variants attach with `|` (either stem may match), non-variants with `&`.
/// Empty input renders as an empty string.
pub fn query_expression(lexemes: &[Lexeme]) -> String {
    let mut expr = String::new();
    for lexeme in lexemes {
        if !expr.is_empty() {
            expr.push_str(if lexeme.is_variant { " | " } else { " & " });
        }
        expr.push_str(&lexeme.text);
    }
    expr
}
