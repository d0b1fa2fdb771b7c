//! Preference repository over `gostos.csv`.

use serde::{Deserialize, Serialize};

use chatclothes_core::{Phone, Preference};

use super::RepositoryError;
use super::table::{CsvTable, join_list, split_list};

/// One row of the preferences table. Sequences are comma-joined.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceRecord {
    pub usuario_id: String,
    pub caracteristicas: String,
    pub compras: String,
    pub carrinho: String,
}

impl TryFrom<PreferenceRecord> for Preference {
    type Error = RepositoryError;

    fn try_from(r: PreferenceRecord) -> Result<Self, Self::Error> {
        let identity = Phone::parse(&r.usuario_id).map_err(|e| {
            RepositoryError::DataCorruption(format!("preference {:?}: {e}", r.usuario_id))
        })?;

        Ok(Self {
            identity,
            characteristics: split_list(&r.caracteristicas),
            purchases: split_list(&r.compras),
            cart: split_list(&r.carrinho),
        })
    }
}

impl From<&Preference> for PreferenceRecord {
    fn from(p: &Preference) -> Self {
        Self {
            usuario_id: p.identity.as_str().to_owned(),
            caracteristicas: join_list(&p.characteristics),
            compras: join_list(&p.purchases),
            carrinho: join_list(&p.cart),
        }
    }
}

/// Values to append to a customer's preference record.
///
/// `None` fields leave their sequence unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceUpdate<'v> {
    pub characteristic: Option<&'v str>,
    pub purchase: Option<&'v str>,
    pub cart_item: Option<&'v str>,
}

/// Repository for preference operations.
pub struct PreferenceRepository<'a> {
    table: &'a CsvTable<PreferenceRecord>,
}

impl<'a> PreferenceRepository<'a> {
    /// Create a new preference repository.
    #[must_use]
    pub const fn new(table: &'a CsvTable<PreferenceRecord>) -> Self {
        Self { table }
    }

    /// Get the preference record for a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the table cannot be read.
    pub fn get(&self, identity: &Phone) -> Result<Option<Preference>, RepositoryError> {
        self.table
            .load()?
            .into_iter()
            .find(|r| r.usuario_id.trim() == identity.as_str())
            .map(Preference::try_from)
            .transpose()
    }

    /// Append values to a customer's record, creating it on first use.
    ///
    /// Each value is trimmed and stripped of commas; values left blank are
    /// ignored. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the table cannot be read or written.
    pub fn append(
        &self,
        identity: &Phone,
        update: PreferenceUpdate<'_>,
    ) -> Result<Preference, RepositoryError> {
        self.table.modify(|records| {
            let index = match records
                .iter()
                .position(|r| r.usuario_id.trim() == identity.as_str())
            {
                Some(index) => index,
                None => {
                    records.push(PreferenceRecord {
                        usuario_id: identity.as_str().to_owned(),
                        ..PreferenceRecord::default()
                    });
                    records.len() - 1
                }
            };

            let Some(record) = records.get_mut(index) else {
                return Err(RepositoryError::DataCorruption(format!(
                    "preference row {index} vanished"
                )));
            };
            push_cell(&mut record.caracteristicas, update.characteristic);
            push_cell(&mut record.compras, update.purchase);
            push_cell(&mut record.carrinho, update.cart_item);

            Preference::try_from(record.clone())
        })
    }
}

fn push_cell(cell: &mut String, value: Option<&str>) {
    let Some(value) = value else { return };
    let value = value.replace(',', "");
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    if !cell.is_empty() {
        cell.push(',');
    }
    cell.push_str(value);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::Store;

    fn phone() -> Phone {
        Phone::parse("11987654321").unwrap()
    }

    #[test]
    fn test_first_append_creates_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let pref = store
            .preferences()
            .append(
                &phone(),
                PreferenceUpdate {
                    characteristic: Some("azul"),
                    ..PreferenceUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(pref.characteristics, vec!["azul"]);
        assert!(pref.purchases.is_empty());
        assert_eq!(store.preferences().get(&phone()).unwrap().unwrap(), pref);
    }

    #[test]
    fn test_append_keeps_duplicates_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let prefs = store.preferences();

        for value in ["azul", "vestido", "azul"] {
            prefs
                .append(
                    &phone(),
                    PreferenceUpdate {
                        characteristic: Some(value),
                        ..PreferenceUpdate::default()
                    },
                )
                .unwrap();
        }
        let pref = prefs
            .append(
                &phone(),
                PreferenceUpdate {
                    purchase: Some("saia rosa"),
                    cart_item: Some("blusa, verde"),
                    ..PreferenceUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(pref.characteristics, vec!["azul", "vestido", "azul"]);
        assert_eq!(pref.purchases, vec!["saia rosa"]);
        assert_eq!(pref.cart, vec!["blusa verde"]);
    }

    #[test]
    fn test_records_for_several_customers_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let ana = phone();
        let bia = Phone::parse("21912345678").unwrap();

        let updates = [
            (&ana, Some("azul"), None, Some("vestido azul")),
            (&bia, Some("saia"), Some("saia rosa"), None),
            (&ana, Some("vestido"), Some("vestido azul"), None),
            (&bia, Some("rosa"), None, Some("blusa rosa")),
            (&ana, None, None, Some("jaqueta preto")),
        ];
        for (identity, characteristic, purchase, cart_item) in updates {
            store
                .preferences()
                .append(
                    identity,
                    PreferenceUpdate {
                        characteristic,
                        purchase,
                        cart_item,
                    },
                )
                .unwrap();
        }

        let reopened = Store::open(dir.path()).unwrap();
        let expected = [
            Preference {
                identity: ana.clone(),
                characteristics: vec!["azul".into(), "vestido".into()],
                purchases: vec!["vestido azul".into()],
                cart: vec!["vestido azul".into(), "jaqueta preto".into()],
            },
            Preference {
                identity: bia.clone(),
                characteristics: vec!["saia".into(), "rosa".into()],
                purchases: vec!["saia rosa".into()],
                cart: vec!["blusa rosa".into()],
            },
        ];
        for pref in &expected {
            assert_eq!(
                reopened.preferences().get(&pref.identity).unwrap().as_ref(),
                Some(pref)
            );
        }

        let raw = std::fs::read_to_string(dir.path().join(Store::PREFERENCES_FILE)).unwrap();
        let rows: Vec<&str> = raw.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with("11987654321,"));
        assert!(rows[2].starts_with("21912345678,"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let mut cell = String::from("azul");
        push_cell(&mut cell, Some("  "));
        push_cell(&mut cell, Some(","));
        push_cell(&mut cell, None);
        assert_eq!(cell, "azul");
    }

    #[test]
    fn test_reads_leading_comma_cells() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(Store::PREFERENCES_FILE),
            "usuario_id,caracteristicas,compras,carrinho\n11987654321,\",azul,verde\",,\n",
        )
        .unwrap();
        let store = Store::open(dir.path()).unwrap();

        let pref = store.preferences().get(&phone()).unwrap().unwrap();
        assert_eq!(pref.characteristics, vec!["azul", "verde"]);
        assert!(pref.cart.is_empty());
    }
}
