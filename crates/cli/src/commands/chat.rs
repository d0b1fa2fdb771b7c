//! Public chat menu: browse, search, exchange policy and human handoff.

use std::io::{BufRead, Write};

use chatclothes_dashboard::db::Store;
use chatclothes_dashboard::services::CatalogService;

use super::CliError;
use crate::prompt::Prompt;
use crate::render;

const MENU: &str = "\n📌 Escolha uma opção:\n\
1 Listar Produtos\n\
2 Buscar Produto\n\
3 Politica de Trocas\n\
4 Atendente Humana\n\
5 Sair";

pub const EXCHANGE_POLICY: &str = "🛍️ Política de Trocas
Você pode trocar seu produto em até 7 dias após o recebimento.

✅ Condições para troca:
A peça deve estar sem sinais de uso, com etiquetas e embalagem original.

É necessário apresentar a nota fiscal ou comprovante da compra.

Não trocamos produtos com cheiro, manchas, ajustes ou danificados por mau uso.

📦 Como solicitar a troca:
Entre em contato pelo nosso atendimento com o número do pedido e o motivo da troca.

Nossa equipe irá instruir sobre o envio da peça.

⚠️ Itens que não podem ser trocados:
Peças promocionais ou em liquidação.

Acessórios íntimos, como brincos, por motivo de higiene.";

pub const HANDOFF: &str = "Encaminhando para atendente humana...";

/// Run the menu until the customer leaves or input ends.
pub fn run<R: BufRead, W: Write>(store: &Store, prompt: &mut Prompt<R, W>) -> Result<(), CliError> {
    let catalog = CatalogService::new(store);

    loop {
        prompt.say(MENU)?;
        let Some(choice) = prompt.ask("Digite o número da opção: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => prompt.say(render::listing(&catalog.list()?))?,
            "2" => {
                let Some(term) =
                    prompt.ask("Digite o tipo, cor ou tamanho do produto que deseja buscar: ")?
                else {
                    break;
                };
                prompt.say(render::search(&catalog.search(&term)?))?;
            }
            "3" => prompt.say(EXCHANGE_POLICY)?,
            "4" => {
                tracing::info!("Customer asked for a human attendant");
                prompt.say(HANDOFF)?;
            }
            "5" => {
                prompt.say("👋 Saindo...")?;
                break;
            }
            _ => prompt.say("❌ Opção inválida! Tente novamente.")?,
        }
    }

    Ok(())
}
