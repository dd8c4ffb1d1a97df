//! Spanish and Catalan strings for the landing page.

use super::Language;

/// Translate a key for a given language. Unknown keys come back unchanged.
pub fn translate(lang: Language, key: &str) -> String {
    lookup(lang, key).map(str::to_string).unwrap_or_else(|| {
        tracing::debug!("Missing translation for '{}' ({})", key, lang.code());
        key.to_string()
    })
}

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    let text = match (lang, key) {
        // Navigation
        (Language::Es, "nav.inicio") => "Inicio",
        (Language::Ca, "nav.inicio") => "Inici",
        (Language::Es, "nav.que-es") => "¿Qué es?",
        (Language::Ca, "nav.que-es") => "Què és?",
        (Language::Es, "nav.dirigido") => "¿A quién va dirigido?",
        (Language::Ca, "nav.dirigido") => "A qui va dirigit?",
        (Language::Es, "nav.beneficios") => "Beneficios",
        (Language::Ca, "nav.beneficios") => "Beneficis",
        (Language::Es, "nav.catalunya") => "Catalunya",
        (Language::Ca, "nav.catalunya") => "Catalunya",
        (Language::Es, "nav.fechas") => "Fechas",
        (Language::Ca, "nav.fechas") => "Dates",
        (Language::Es, "nav.contacto") => "Contacto",
        (Language::Ca, "nav.contacto") => "Contacte",

        // Header
        (Language::Es, "header.apply") => "Inscríbete",
        (Language::Ca, "header.apply") => "Inscriu-te",

        // Sections
        (Language::Es, "hero.title") => "Future Tech",
        (Language::Ca, "hero.title") => "Future Tech",
        (Language::Es, "hero.subtitle") => "El programa que conecta talento y tecnología.",
        (Language::Ca, "hero.subtitle") => "El programa que connecta talent i tecnologia.",
        (Language::Es, "about.title") => "¿Qué es Future Tech?",
        (Language::Ca, "about.title") => "Què és Future Tech?",
        (Language::Es, "target.title") => "¿A quién va dirigido?",
        (Language::Ca, "target.title") => "A qui va dirigit?",
        (Language::Es, "benefits.title") => "Beneficios",
        (Language::Ca, "benefits.title") => "Beneficis",
        (Language::Es, "catalunya.title") => "Catalunya, hub tecnológico",
        (Language::Ca, "catalunya.title") => "Catalunya, hub tecnològic",
        (Language::Es, "dates.title") => "Fechas clave",
        (Language::Ca, "dates.title") => "Dates clau",
        (Language::Es, "contact.title") => "Contacto",
        (Language::Ca, "contact.title") => "Contacte",

        _ => return None,
    };
    Some(text)
}

/// `true` when `key` has an entry for every supported language
pub fn is_complete(key: &str) -> bool {
    Language::ALL.iter().all(|lang| lookup(*lang, key).is_some())
}
