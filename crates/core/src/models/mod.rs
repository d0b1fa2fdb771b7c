//! Domain records for the catalog, customer accounts, taste tracking and sales.

pub mod account;
pub mod preference;
pub mod product;
pub mod sale;

pub use account::UserAccount;
pub use preference::{DEFAULT_TOP_CHARACTERISTICS, Preference};
pub use product::{NewProduct, Product};
pub use sale::Sale;
