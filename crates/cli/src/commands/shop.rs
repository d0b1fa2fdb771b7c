//! Logged-in shopping session.
//!
//! The customer signs in with phone number and password (registering on the
//! spot if needed), sees recommendations, and then searches, fills the cart
//! and records purchases. Every searched word feeds the recommendations.

use std::io::{BufRead, Write};

use secrecy::SecretString;

use chatclothes_core::query::tokenize;
use chatclothes_core::{Phone, UserAccount, normalize};
use chatclothes_dashboard::db::Store;
use chatclothes_dashboard::services::{
    AccountError, AccountService, CatalogService, PreferenceTracker, Recommender, Registration,
};

use super::CliError;
use crate::prompt::Prompt;
use crate::render;

const MENU: &str = "\nO que você deseja fazer?\n\
1 - Buscar produto\n\
2 - Adicionar ao carrinho\n\
3 - Finalizar compra\n\
4 - Sair";

/// Run a session until the customer leaves or input ends.
pub fn run<R: BufRead, W: Write>(store: &Store, prompt: &mut Prompt<R, W>) -> Result<(), CliError> {
    prompt.say("📲 Bem-vindo ao ChatClothes!")?;

    let Some(account) = sign_in(store, prompt)? else {
        return Ok(());
    };
    let identity = account.identity.clone();

    prompt.say(format!("\n🎉 Olá, {}! Que bom ter você aqui.", account.name))?;
    show_recommendations(store, prompt, &identity)?;

    let catalog = CatalogService::new(store);
    let tracker = PreferenceTracker::new(store);

    loop {
        prompt.say(MENU)?;
        let Some(choice) = prompt.ask("Escolha uma opção: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(term) = prompt.ask("Digite o tipo/cor/tamanho do produto: ")? else {
                    break;
                };
                prompt.say(render::search(&catalog.search(&term)?))?;

                for word in tokenize(&term) {
                    tracker.record_characteristic(&identity, normalize(&word))?;
                }
                prompt.say(format!(
                    "🔍 Produto '{term}' pesquisado. Registrado no seu perfil."
                ))?;
                show_recommendations(store, prompt, &identity)?;
            }
            "2" => {
                let Some(item) =
                    prompt.ask("Digite o nome do produto para adicionar ao carrinho: ")?
                else {
                    break;
                };
                tracker.add_to_cart(&identity, &item)?;
                prompt.say(format!("🛒 '{item}' adicionado ao seu carrinho."))?;
            }
            "3" => {
                let Some(item) = prompt.ask("Digite o nome do produto comprado: ")? else {
                    break;
                };
                tracker.record_purchase(&identity, &item)?;
                prompt.say(format!("💰 Compra registrada: '{item}'."))?;
            }
            "4" => {
                prompt.say("👋 Até logo!")?;
                break;
            }
            _ => prompt.say("❌ Opção inválida.")?,
        }
    }

    Ok(())
}

/// Log in, or register and log in. `None` when the session cannot go on.
fn sign_in<R: BufRead, W: Write>(
    store: &Store,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<UserAccount>, CliError> {
    let accounts = AccountService::new(store);

    let Some(identity) = ask_phone(prompt)? else {
        return Ok(None);
    };
    let Some(password) = prompt.ask("Digite sua senha: ")? else {
        return Ok(None);
    };

    if let Some(account) = accounts.authenticate(&identity, &SecretString::from(password))? {
        return Ok(Some(account));
    }

    prompt.say("🔐 Você não está cadastrado. Vamos fazer isso agora!")?;
    let Some(handle) = prompt.ask("Digite seu Instagram: ")? else {
        return Ok(None);
    };
    let Some(name) = prompt.ask("Digite seu nome: ")? else {
        return Ok(None);
    };
    let Some(preferred_size) = prompt.ask("Tamanho que você usa (P, M, G...): ")? else {
        return Ok(None);
    };
    let Some(gender) = prompt.ask("Seu gênero (Masculino, Feminino, etc.): ")? else {
        return Ok(None);
    };
    let Some(password) = prompt.ask("Crie uma senha: ")? else {
        return Ok(None);
    };

    let registration = Registration {
        identity,
        name,
        handle,
        preferred_size,
        gender,
    };

    match accounts.register(registration, &SecretString::from(password)) {
        Ok(account) => {
            prompt.say("✅ Usuário cadastrado com sucesso.")?;
            Ok(Some(account))
        }
        Err(AccountError::AlreadyExists) => {
            prompt.say("⚠️ Usuário já cadastrado. Senha incorreta.")?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn ask_phone<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<Option<Phone>, CliError> {
    loop {
        let Some(answer) = prompt.ask("Digite seu número de celular (somente números): ")? else {
            return Ok(None);
        };
        match Phone::parse(&answer) {
            Ok(phone) => return Ok(Some(phone)),
            Err(e) => prompt.say(format!("❌ Número inválido: {e}"))?,
        }
    }
}

fn show_recommendations<R: BufRead, W: Write>(
    store: &Store,
    prompt: &mut Prompt<R, W>,
    identity: &Phone,
) -> Result<(), CliError> {
    prompt.say("\n✨ Com base no seu perfil, recomendamos para você:")?;
    for line in Recommender::new(store).recommend(identity)?.messages() {
        prompt.say(format!("👉 {line}"))?;
    }
    Ok(())
}
