//! Keyword interpreter turning free text into a [`Filter`].

use super::Filter;
use super::normalizer::normalize;
use crate::types::Size;

/// Garment types the interpreter recognizes.
pub const GARMENT_TYPES: [&str; 8] = [
    "vestido", "camiseta", "blusa", "calça", "bermuda", "brinco", "saia", "jaqueta",
];

/// Colors the interpreter recognizes.
pub const COLORS: [&str; 9] = [
    "preto", "branco", "azul", "vermelho", "verde", "amarelo", "rosa", "roxo", "cinza",
];

/// What a single normalized token names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Garment(&'static str),
    Color(&'static str),
    Size(Size),
}

/// Lowercase the input and split it on whitespace, dropping punctuation
/// around each word.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| matches!(c, ',' | '.' | ';' | ':' | '!' | '?')))
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Garment types win over colors, colors over sizes.
fn classify(token: &str) -> Option<Keyword> {
    if let Some(garment) = GARMENT_TYPES.into_iter().find(|g| *g == token) {
        return Some(Keyword::Garment(garment));
    }
    if let Some(color) = COLORS.into_iter().find(|c| *c == token) {
        return Some(Keyword::Color(color));
    }
    Size::from_code(token).map(Keyword::Size)
}

/// Extract a [`Filter`] from free text.
///
/// Returns `None` when no word names a garment type, color or size. When the
/// same kind appears more than once, the last occurrence wins.
///
/// ```
/// use chatclothes_core::{Size, interpret};
///
/// let filter = interpret("Tem vestidos azuis no tamanho m?").unwrap();
/// assert_eq!(filter.garment.as_deref(), Some("vestido"));
/// assert_eq!(filter.color.as_deref(), Some("azul"));
/// assert_eq!(filter.size, Some(Size::M));
///
/// assert!(interpret("xyz123").is_none());
/// ```
#[must_use]
pub fn interpret(input: &str) -> Option<Filter> {
    let mut filter = Filter::default();

    for token in tokenize(input) {
        match classify(normalize(&token)) {
            Some(Keyword::Garment(garment)) => filter.garment = Some(garment.to_owned()),
            Some(Keyword::Color(color)) => filter.color = Some(color.to_owned()),
            Some(Keyword::Size(size)) => filter.size = Some(size),
            None => {}
        }
    }

    (!filter.is_empty()).then_some(filter)
}
