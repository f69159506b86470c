// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Prefix returned for keys without a translation.
pub const MISSING_PREFIX: &str = "MISSING: ";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` files in `i18n_dir`
    /// (which replace embedded bundles of the same locale).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: Vec<(LanguageIdentifier, String)> = Asset::iter()
            .filter_map(|file| {
                let locale = parse_locale_file_name(file.as_ref())?;
                let content = Asset::get(file.as_ref())?;
                Some((
                    locale,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                ))
            })
            .collect();

        if let Some(dir) = i18n_dir {
            sources.extend(read_locale_dir(Path::new(&dir)));
        }

        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            match build_bundle(&locale, source) {
                Some(bundle) => {
                    bundles.insert(locale, bundle);
                }
                None => tracing::warn!(%locale, "skipping invalid translation file"),
            }
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let default_locale = default_locale();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates `key`, falling back to the default locale, then to a
    /// `MISSING:` marker.
    pub fn tr(&self, key: &str) -> String {
        let fallback = default_locale();
        let translated = [&self.current_locale, &fallback]
            .into_iter()
            .find_map(|locale| self.format(locale, key));
        translated.unwrap_or_else(|| format!("{MISSING_PREFIX}{key}"))
    }

    fn format(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.into_owned())
    }
}

fn default_locale() -> LanguageIdentifier {
    LanguageIdentifier::from_bytes(DEFAULT_LOCALE.as_bytes()).unwrap_or_default()
}

fn parse_locale_file_name(file_name: &str) -> Option<LanguageIdentifier> {
    file_name.strip_suffix(".ftl")?.parse().ok()
}

fn read_locale_dir(dir: &Path) -> Vec<(LanguageIdentifier, String)> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = ?dir, error = %err, "cannot read translation directory");
            return Vec::new();
        }
    };

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name();
            let locale = parse_locale_file_name(name.to_str()?)?;
            let content = std::fs::read_to_string(entry.path()).ok()?;
            Some((locale, content))
        })
        .collect()
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config.general.language.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 3. OS locale
    sys_locale::get_locale().as_deref().and_then(pick)
}
