//! Display language for labels.

use std::str::FromStr;

use chhaya_ephem::Body;

/// Language of human-readable labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl FromStr for Language {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "es" | "spanish" | "español" => Ok(Self::Spanish),
            _ => Err("unknown language (expected en or es)"),
        }
    }
}

/// Body name in the given language.
pub const fn body_name(body: Body, lang: Language) -> &'static str {
    match lang {
        Language::English => body.name(),
        Language::Spanish => match body {
            Body::Sun => "Sol",
            Body::Earth => "Tierra",
            Body::Moon => "Luna",
            Body::Jupiter => "Júpiter",
            Body::Saturn => "Saturno",
            Body::Uranus => "Urano",
            Body::Io => "Ío",
            Body::Europa => "Europa",
            Body::Ganymede => "Ganímedes",
            Body::Callisto => "Calisto",
            Body::Mimas => "Mimas",
            Body::Enceladus => "Encélado",
            Body::Tethys => "Tetis",
            Body::Dione => "Dione",
            Body::Rhea => "Rea",
            Body::Titan => "Titán",
            Body::Iapetus => "Jápeto",
            Body::Miranda => "Miranda",
            Body::Ariel => "Ariel",
            Body::Umbriel => "Umbriel",
            Body::Titania => "Titania",
            Body::Oberon => "Oberón",
        },
    }
}
