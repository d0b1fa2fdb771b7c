//! Synonym tables mapping what customers type to canonical vocabulary.

/// Map a lowercase token to its canonical form.
///
/// The color table is applied first, then the garment table. Tokens found in
/// neither table are returned unchanged.
///
/// ```
/// use chatclothes_core::normalize;
///
/// assert_eq!(normalize("pretas"), "preto");
/// assert_eq!(normalize("camista"), "camiseta");
/// assert_eq!(normalize("azul"), "azul");
/// ```
#[must_use]
pub fn normalize(token: &str) -> &str {
    let token = color_synonym(token).unwrap_or(token);
    garment_synonym(token).unwrap_or(token)
}

fn color_synonym(token: &str) -> Option<&'static str> {
    let canonical = match token {
        "preta" | "pretas" | "pretos" => "preto",
        "branca" | "brancas" | "brancos" => "branco",
        "azuis" => "azul",
        "vermelha" | "vermelhas" | "vermelhos" => "vermelho",
        "verdes" => "verde",
        "amarela" | "amarelas" | "amarelos" => "amarelo",
        "rosas" => "rosa",
        "roxa" | "roxas" | "roxos" => "roxo",
        "cinzas" => "cinza",
        _ => return None,
    };
    Some(canonical)
}

fn garment_synonym(token: &str) -> Option<&'static str> {
    let canonical = match token {
        "camista" | "camisetas" | "camisa" | "camisas" => "camiseta",
        "vestidos" => "vestido",
        "blusas" => "blusa",
        "calca" | "calcas" | "calças" => "calça",
        "bermudas" => "bermuda",
        "brincos" => "brinco",
        "saias" => "saia",
        "jaquetas" => "jaqueta",
        _ => return None,
    };
    Some(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_forms() {
        assert_eq!(normalize("pretas"), "preto");
        assert_eq!(normalize("vermelha"), "vermelho");
        assert_eq!(normalize("azuis"), "azul");
    }

    #[test]
    fn test_garment_forms() {
        assert_eq!(normalize("camista"), "camiseta");
        assert_eq!(normalize("calcas"), "calça");
        assert_eq!(normalize("jaquetas"), "jaqueta");
    }

    #[test]
    fn test_unmapped_passes_through() {
        assert_eq!(normalize("azul"), "azul");
        assert_eq!(normalize("quero"), "quero");
        assert_eq!(normalize(""), "");
    }
}
