//! Free-text catalog queries.
//!
//! A customer types something like "quero uma camista preta tamanho m". The
//! [`normalizer`] maps each word to its canonical spelling and the
//! [`interpreter`] classifies the words into a [`Filter`] over garment type,
//! color and size.

pub mod interpreter;
pub mod normalizer;

use core::fmt;

use serde::Serialize;

use crate::models::Product;
use crate::types::Size;

pub use interpreter::{COLORS, GARMENT_TYPES, interpret, tokenize};
pub use normalizer::normalize;

/// Structured search criteria extracted from free text.
///
/// Every populated field must match for a product to be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filter {
    /// Canonical garment type, matched by case-insensitive containment.
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub garment: Option<String>,
    /// Canonical color, matched by case-insensitive containment.
    #[serde(rename = "cor", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Size, matched exactly.
    #[serde(rename = "tamanho", skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

impl Filter {
    /// True when no criterion is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.garment.is_none() && self.color.is_none() && self.size.is_none()
    }

    /// Whether `product` satisfies every populated criterion.
    ///
    /// Stock is not considered here; callers restrict to available products.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let garment_ok = self
            .garment
            .as_deref()
            .is_none_or(|garment| contains_ignore_case(&product.garment, garment));
        let color_ok = self
            .color
            .as_deref()
            .is_none_or(|color| contains_ignore_case(&product.color, color));
        let size_ok = self.size.is_none_or(|size| product.size == size);

        garment_ok && color_ok && size_ok
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(3);
        if let Some(garment) = &self.garment {
            parts.push(format!("Tipo: {garment}"));
        }
        if let Some(color) = &self.color {
            parts.push(format!("Cor: {color}"));
        }
        if let Some(size) = self.size {
            parts.push(format!("Tamanho: {size}"));
        }
        f.write_str(&parts.join(", "))
    }
}

/// Case-insensitive substring test.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::NewProduct;
    use crate::types::{Price, ProductId};

    fn product(garment: &str, color: &str, size: Size) -> Product {
        NewProduct {
            garment: garment.to_owned(),
            color: color.to_owned(),
            size,
            price: Price::parse("10").unwrap(),
            image: String::new(),
            stock: 1,
        }
        .into_product(ProductId::new(1))
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(Filter::default().is_empty());
        assert!(Filter::default().matches(&product("saia", "rosa", Size::P)));
    }

    #[test]
    fn test_containment_ignores_case() {
        let filter = Filter {
            garment: Some("calça".to_owned()),
            ..Filter::default()
        };
        assert!(filter.matches(&product("Calça Jeans", "Azul", Size::G)));
    }

    #[test]
    fn test_all_fields_must_match() {
        let filter = Filter {
            garment: Some("vestido".to_owned()),
            color: Some("azul".to_owned()),
            size: Some(Size::M),
        };
        assert!(filter.matches(&product("vestido", "azul", Size::M)));
        assert!(!filter.matches(&product("vestido", "azul", Size::G)));
        assert!(!filter.matches(&product("vestido", "verde", Size::M)));
    }

    #[test]
    fn test_display_lists_populated_fields() {
        let filter = Filter {
            garment: Some("blusa".to_owned()),
            color: None,
            size: Some(Size::GG),
        };
        assert_eq!(filter.to_string(), "Tipo: blusa, Tamanho: GG");
    }
}
