//! Recommendations from a customer's most frequent searches.

use chatclothes_core::query::contains_ignore_case;
use chatclothes_core::{DEFAULT_TOP_CHARACTERISTICS, Phone, Product};

use super::preferences::PreferenceTracker;
use crate::db::{ProductRepository, RepositoryError, Store};

/// Most products returned by one recommendation.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Shown when the customer has no recorded characteristics.
pub const NO_PREFERENCES_MESSAGE: &str = "Nenhuma preferência registrada ainda.";

/// Shown when nothing in stock matches the customer's characteristics.
pub const NOTHING_MATCHES_MESSAGE: &str =
    "Nenhum produto disponível com base nas suas preferências.";

/// What the recommender found for a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    NoPreferences,
    NothingMatches,
    /// Up to [`MAX_RECOMMENDATIONS`] products, in store order.
    Products(Vec<Product>),
}

impl Recommendation {
    /// Lines to show the customer.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::NoPreferences => vec![NO_PREFERENCES_MESSAGE.to_owned()],
            Self::NothingMatches => vec![NOTHING_MATCHES_MESSAGE.to_owned()],
            Self::Products(products) => products.iter().map(render_line).collect(),
        }
    }
}

/// Recommender.
pub struct Recommender<'a> {
    products: ProductRepository<'a>,
    tracker: PreferenceTracker<'a>,
}

impl<'a> Recommender<'a> {
    /// Create a new recommender.
    #[must_use]
    pub fn new(store: &'a Store) -> Self {
        Self {
            products: store.products(),
            tracker: PreferenceTracker::new(store),
        }
    }

    /// Suggest in-stock products whose type or color contains one of the
    /// customer's top characteristics.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if a table cannot be read.
    pub fn recommend(&self, identity: &Phone) -> Result<Recommendation, RepositoryError> {
        let top = self
            .tracker
            .top_characteristics(identity, DEFAULT_TOP_CHARACTERISTICS)?;
        if top.is_empty() {
            return Ok(Recommendation::NoPreferences);
        }

        let picked: Vec<Product> = self
            .products
            .list()?
            .into_iter()
            .filter(|p| p.is_available() && qualifies(p, &top))
            .take(MAX_RECOMMENDATIONS)
            .collect();

        tracing::debug!(identity = %identity, ?top, picked = picked.len(), "Recommendations computed");

        if picked.is_empty() {
            Ok(Recommendation::NothingMatches)
        } else {
            Ok(Recommendation::Products(picked))
        }
    }
}

fn qualifies(product: &Product, top: &[String]) -> bool {
    top.iter().any(|characteristic| {
        contains_ignore_case(&product.garment, characteristic)
            || contains_ignore_case(&product.color, characteristic)
    })
}

fn render_line(product: &Product) -> String {
    format!(
        "🛍 {} {} (Tamanho {}) - {}",
        title_case(&product.garment),
        product.color,
        product.size,
        product.price
    )
}

/// Upper-case the first letter of each word and lower-case the rest.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
