use serde::Deserialize;

use crate::error::ContentError;

const MODULES_JSON: &str = include_str!("../content/modules.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Green,
    Purple,
    Indigo,
    Red,
    Slate,
    Emerald,
    /// Anything outside the palette renders as blue.
    #[serde(other)]
    Unknown,
}

/// CSS classes for one palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorClasses {
    pub bg: &'static str,
    pub icon: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

impl ColorToken {
    pub fn classes(self) -> ColorClasses {
        macro_rules! palette {
            ($name:literal) => {
                ColorClasses {
                    bg: concat!("bg-", $name, "-50"),
                    icon: concat!("text-", $name, "-600"),
                    text: concat!("text-", $name, "-600"),
                    border: concat!("border-", $name, "-200"),
                }
            };
        }
        match self {
            ColorToken::Blue | ColorToken::Unknown => palette!("blue"),
            ColorToken::Green => palette!("green"),
            ColorToken::Purple => palette!("purple"),
            ColorToken::Indigo => palette!("indigo"),
            ColorToken::Red => palette!("red"),
            ColorToken::Slate => palette!("slate"),
            ColorToken::Emerald => palette!("emerald"),
        }
    }
}

/// One product module in the showcase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModuleDescriptor {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub color: ColorToken,
    /// Opaque asset reference, resolved by `config::asset_url`.
    pub media: String,
}

/// Parses and validates a catalogue. Ids must run 1..=N in order.
pub fn parse_modules(json: &str) -> Result<Vec<ModuleDescriptor>, ContentError> {
    let modules: Vec<ModuleDescriptor> = serde_json::from_str(json)?;
    if modules.is_empty() {
        return Err(ContentError::Empty);
    }
    for (position, module) in modules.iter().enumerate() {
        let expected = position as u32 + 1;
        if module.id != expected {
            return Err(ContentError::UnexpectedId {
                position,
                expected,
                found: module.id,
            });
        }
        if module.features.is_empty() {
            return Err(ContentError::NoFeatures(module.id));
        }
    }
    Ok(modules)
}

/// The catalogue shipped with the page.
pub fn modules() -> Result<Vec<ModuleDescriptor>, ContentError> {
    parse_modules(MODULES_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalogue_is_valid() {
        let modules = modules().unwrap();
        assert_eq!(modules.len(), 7);
        assert_eq!(modules[0].title, "Smart Alerts");
        assert_eq!(modules[6].color, ColorToken::Emerald);
        assert_eq!(modules[6].features.len(), 4);
    }

    #[test]
    fn unknown_colors_fall_back_to_blue() {
        let json = r#"[{"id":1,"title":"t","subtitle":"s","description":"d",
            "features":["f"],"color":"chartreuse","media":"m.png"}]"#;
        let modules = parse_modules(json).unwrap();
        assert_eq!(modules[0].color, ColorToken::Unknown);
        assert_eq!(modules[0].color.classes(), ColorToken::Blue.classes());
    }

    #[test]
    fn palette_classes() {
        let classes = ColorToken::Emerald.classes();
        assert_eq!(classes.bg, "bg-emerald-50");
        assert_eq!(classes.icon, "text-emerald-600");
        assert_eq!(classes.border, "border-emerald-200");
    }

    #[test]
    fn ids_must_be_contiguous() {
        let json = r#"[
            {"id":1,"title":"a","subtitle":"","description":"","features":["x"],"color":"red","media":""},
            {"id":3,"title":"b","subtitle":"","description":"","features":["y"],"color":"red","media":""}
        ]"#;
        match parse_modules(json) {
            Err(ContentError::UnexpectedId { position, expected, found }) => {
                assert_eq!((position, expected, found), (1, 2, 3));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_and_malformed_catalogues_fail() {
        assert!(matches!(parse_modules("[]"), Err(ContentError::Empty)));
        assert!(matches!(parse_modules("{"), Err(ContentError::Parse(_))));
        let json = r#"[{"id":1,"title":"a","subtitle":"","description":"","features":[],"color":"red","media":""}]"#;
        assert!(matches!(parse_modules(json), Err(ContentError::NoFeatures(1))));
    }
}
