// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "skipping translation with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            if let Some(bundle) = build_bundle(&locale, &content.data) {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| DEFAULT_LOCALE.parse().unwrap_or_default());
        tracing::debug!(locale = %current_locale, "selected locale");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    /// Formats a message taking a numeric `count`, used for plural selection.
    pub fn tr_count(&self, key: &str, count: usize) -> String {
        let mut fluent_args = FluentArgs::new();
        fluent_args.set("count", count);
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn build_bundle(
    locale: &LanguageIdentifier,
    data: &[u8],
) -> Option<FluentBundle<FluentResource>> {
    let source = String::from_utf8_lossy(data).to_string();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::warn!(locale = %locale, errors = errors.len(), "failed to parse translation");
            return None;
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Plain output; isolation marks show up as boxes in some fonts.
    bundle.set_use_isolating(false);
    if bundle.add_resource(resource).is_err() {
        tracing::warn!(locale = %locale, "duplicate messages in translation");
        return None;
    }
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
        Some(DEFAULT_LOCALE.to_string()),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .find_map(|lang| match_available(&lang, available))
}

/// Exact match first, then the same language with any region.
fn match_available(
    lang: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|candidate| *candidate == lang)
        .or_else(|| available.iter().find(|candidate| candidate.language == lang.language))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn region_variant_falls_back_to_language() {
        let lang = resolve_locale(Some("fr-CA".to_string()), &Config::default(), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_language_still_resolves() {
        let lang = resolve_locale(Some("xx".to_string()), &Config::default(), &available());
        assert!(lang.is_some_and(|l| available().contains(&l)));
    }

    #[test]
    fn embedded_bundles_translate() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("window-title"), "Iced Tiles");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = i18n.tr_with_args("status-moved", &[("tile", "alpha"), ("slot", "3")]);
        assert!(text.contains("alpha"));
        assert!(text.contains('3'));
    }

    #[test]
    fn count_selects_plural_form() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr_count("status-ready", 1), "One tile");
        assert_eq!(i18n.tr_count("status-ready", 4), "4 tiles");
    }

    #[test]
    fn french_bundle_is_available() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
        assert_eq!(i18n.tr("heading"), "Organisez vos tuiles");
    }
}
