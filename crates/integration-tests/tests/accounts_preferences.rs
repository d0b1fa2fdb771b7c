//! Registration, login, preference tracking and recommendations.

use secrecy::SecretString;

use chatclothes_core::{Phone, Size};
use chatclothes_dashboard::db::Store;
use chatclothes_dashboard::services::{
    AccountError, AccountService, PreferenceTracker, Recommendation, Recommender, Registration,
};
use chatclothes_integration_tests::TestStore;

fn phone() -> Phone {
    Phone::parse("(11) 98765-4321").expect("Valid phone")
}

fn register(store: &Store, password: &str) -> Result<(), AccountError> {
    AccountService::new(store)
        .register(
            Registration {
                identity: phone(),
                name: "Ana".to_owned(),
                handle: "@ana".to_owned(),
                preferred_size: "M".to_owned(),
                gender: "Feminino".to_owned(),
            },
            &SecretString::from(password.to_owned()),
        )
        .map(|_| ())
}

#[test]
fn test_register_then_authenticate() {
    let data = TestStore::new();
    register(&data.store, "segredo").expect("Registration failed");

    let accounts = AccountService::new(&data.store);
    let account = accounts
        .authenticate(&phone(), &SecretString::from("segredo".to_owned()))
        .expect("Lookup failed")
        .expect("Credentials should match");
    assert_eq!(account.name, "Ana");

    assert!(
        accounts
            .authenticate(&phone(), &SecretString::from("outra".to_owned()))
            .expect("Lookup failed")
            .is_none()
    );

    let table = data.read_table(Store::USERS_FILE);
    assert!(table.contains("11987654321"));
    assert!(!table.contains("segredo"));
}

#[test]
fn test_duplicate_registration_rejected() {
    let data = TestStore::new();
    register(&data.store, "segredo").expect("Registration failed");
    assert!(matches!(
        register(&data.store, "outra"),
        Err(AccountError::AlreadyExists)
    ));
}

#[test]
fn test_recommendations_follow_searches() {
    let data = TestStore::new();
    data.add_product("vestido", "azul", Size::M, "89.90", 1);
    data.add_product("saia", "azul", Size::P, "49.90", 1);
    data.add_product("blusa", "azul", Size::G, "59.90", 1);
    data.add_product("camiseta", "azul", Size::GG, "39.90", 1);
    data.add_product("saia", "verde", Size::M, "49.90", 0);

    let recommender = Recommender::new(&data.store);
    assert_eq!(
        recommender.recommend(&phone()).expect("Recommend failed"),
        Recommendation::NoPreferences
    );

    let tracker = PreferenceTracker::new(&data.store);
    tracker.record_characteristic(&phone(), "verde").expect("Record failed");
    assert_eq!(
        recommender.recommend(&phone()).expect("Recommend failed"),
        Recommendation::NothingMatches
    );

    tracker.record_characteristic(&phone(), "azul").expect("Record failed");
    tracker.record_characteristic(&phone(), "azul").expect("Record failed");
    let Recommendation::Products(products) = recommender.recommend(&phone()).expect("Recommend failed")
    else {
        panic!("Expected recommended products");
    };
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p.color == "azul"));

    let reopened = Store::open(data.dir.path()).expect("Failed to reopen store");
    let top = PreferenceTracker::new(&reopened)
        .top_characteristics(&phone(), 3)
        .expect("Failed to read preferences");
    assert_eq!(top, vec!["azul", "verde"]);
}
