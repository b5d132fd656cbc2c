//! Local replies used when the backend is not consulted or not reachable

/// First message shown when a conversation starts
pub const WELCOME_MESSAGE: &str =
    "Olá! 👋 Bem-vindo ao Jovem Programador! Como posso te ajudar hoje?";

/// Shown when the backend answered with an error
pub const UNAVAILABLE_MESSAGE: &str =
    "Desculpe, o chatbot está temporariamente fora de serviço.";

/// Reply to an empty or whitespace-only message
pub const EMPTY_MESSAGE_REPLY: &str =
    "Por favor, digite sua pergunta! Estou aqui para ajudar. 😄";

/// Reply when no keyword matches
pub const DEFAULT_REPLY: &str = "Posso te ajudar com dúvidas sobre programação, carreira em tech, \
ferramentas e recursos de estudo. O que você gostaria de saber?";

/// Quick-action chips; clicking one sends its label as a message
pub const QUICK_ACTIONS: &[&str] = &["Como começar?", "Carreira", "Ferramentas", "Estudo"];

/// Keyword → reply, checked in order against the lowercased message
const KEYWORD_REPLIES: &[(&str, &str)] = &[
    ("oi", "Olá! Como posso te ajudar hoje? 😊"),
    ("i ae", "Olá... Como posso te ajudar hoje?"),
    ("olá", "Oi! Estou aqui para te ajudar! 👋"),
    (
        "como começar",
        "Para começar na programação, recomendo aprender lógica de programação primeiro, \
         depois escolher uma linguagem como Python ou JavaScript!",
    ),
    (
        "carreira",
        "A área de tecnologia oferece muitas oportunidades! Foque em aprender constantemente \
         e construir um portfólio sólido.",
    ),
    (
        "ferramentas",
        "Algumas ferramentas essenciais: VS Code, Git, GitHub, e dependendo da área, \
         frameworks específicos.",
    ),
    (
        "estudo",
        "Recomendo plataformas como freeCodeCamp, Coursera, e documentações oficiais. \
         A prática é fundamental!",
    ),
];

/// Pick a local reply for `message`
pub fn reply(message: &str) -> &'static str {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return EMPTY_MESSAGE_REPLY;
    }

    let lower = trimmed.to_lowercase();
    KEYWORD_REPLIES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_replies() {
        assert!(reply("oi").starts_with("Olá!"));
        assert!(reply("OLÁ pessoal").starts_with("Oi!"));
        assert!(reply("Como começar?").starts_with("Para começar na programação"));
        assert!(reply("dicas de carreira").starts_with("A área de tecnologia"));
    }

    #[test]
    fn test_first_match_wins() {
        // "oi" is checked before "estudo"
        assert_eq!(reply("oi, estudo sozinho"), KEYWORD_REPLIES[0].1);
    }

    #[test]
    fn test_default_and_empty() {
        assert_eq!(reply("qual a capital da França?"), DEFAULT_REPLY);
        assert_eq!(reply("   "), EMPTY_MESSAGE_REPLY);
        assert_eq!(reply(""), EMPTY_MESSAGE_REPLY);
    }

    #[test]
    fn test_quick_actions_have_replies() {
        for action in QUICK_ACTIONS {
            assert_ne!(reply(action), DEFAULT_REPLY, "no reply for {action}");
        }
    }
}
