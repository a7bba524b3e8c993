// SPDX-License-Identifier: MPL-2.0
//! Translation resource store.
//!
//! One TOML artifact per locale is embedded at build time. Nested tables
//! are flattened once at load into a dotted-key map, so every lookup is a
//! single hash access. Lookup falls back to the fallback locale's bundle,
//! and a key absent everywhere resolves to the key itself while being
//! recorded as a diagnostic.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Flattened key → template mapping for one locale.
#[derive(Debug, Clone, Default)]
pub struct ResourceBundle {
    entries: HashMap<String, String>,
}

impl ResourceBundle {
    /// Parses a nested TOML document into a flat dotted-key bundle.
    ///
    /// Only string leaves are accepted; anything else in a bundle is an
    /// authoring mistake worth failing loudly on.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        // Not routed through `From<toml::de::Error>`: that conversion is for
        // the config layer and yields `Config`, but a broken bundle artifact
        // is a resolution failure.
        let value: toml::Value =
            toml::from_str(src).map_err(|error| Error::ResourceResolution(error.to_string()))?;
        let toml::Value::Table(table) = value else {
            return Err(Error::ResourceResolution(
                "bundle root must be a table".to_string(),
            ));
        };

        let mut entries = HashMap::new();
        flatten_table("", &table, &mut entries)?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten_table(
    prefix: &str,
    table: &toml::value::Table,
    out: &mut HashMap<String, String>,
) -> Result<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(template) => {
                out.insert(key, template.clone());
            }
            toml::Value::Table(nested) => flatten_table(&key, nested, out)?,
            other => {
                return Err(Error::ResourceResolution(format!(
                    "bundle key '{key}' holds a {} instead of a string",
                    other.type_str()
                )));
            }
        }
    }
    Ok(())
}

/// Holds the loaded bundles and answers every translation lookup.
#[derive(Debug)]
pub struct ResourceStore {
    bundles: HashMap<LanguageIdentifier, ResourceBundle>,
    fallback: LanguageIdentifier,
    missing: Mutex<BTreeSet<String>>,
}

impl ResourceStore {
    /// Creates a store with the fallback locale's bundle loaded.
    ///
    /// The fallback bundle is the total mapping every other bundle leans
    /// on; a build whose fallback artifact is broken cannot render at all.
    pub fn with_fallback(fallback: LanguageIdentifier) -> Result<Self> {
        let bundle = Self::load_bundle(&fallback)?;
        let mut bundles = HashMap::new();
        bundles.insert(fallback.clone(), bundle);
        Ok(Self {
            bundles,
            fallback,
            missing: Mutex::new(BTreeSet::new()),
        })
    }

    /// Loads and flattens the embedded bundle artifact for `code`.
    ///
    /// This is the resolution step of the switch protocol: it is the part
    /// that may fail, and in a remote-bundle design it would be the part
    /// that suspends.
    pub fn load_bundle(code: &LanguageIdentifier) -> Result<ResourceBundle> {
        let filename = format!("{code}.toml");
        let file = Asset::get(&filename).ok_or_else(|| {
            Error::ResourceResolution(format!("no bundle artifact '{filename}'"))
        })?;
        let src = String::from_utf8_lossy(file.data.as_ref());
        ResourceBundle::from_toml_str(&src)
    }

    /// Installs a loaded bundle, making `code` resolvable.
    pub fn install(&mut self, code: LanguageIdentifier, bundle: ResourceBundle) {
        self.bundles.insert(code, bundle);
    }

    pub fn has_bundle(&self, code: &LanguageIdentifier) -> bool {
        self.bundles.contains_key(code)
    }

    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback
    }

    /// Resolves `key` for `locale`: active bundle, then fallback bundle,
    /// then the key itself. Never fails.
    pub fn resolve(&self, locale: &LanguageIdentifier, key: &str) -> String {
        self.resolve_with_args(locale, key, &[])
    }

    /// Like [`resolve`](Self::resolve), substituting `{name}` placeholders
    /// from `args`. Placeholders without a matching argument are left
    /// verbatim.
    pub fn resolve_with_args(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: &[(&str, &str)],
    ) -> String {
        let template = self
            .bundles
            .get(locale)
            .and_then(|bundle| bundle.get(key))
            .or_else(|| {
                self.bundles
                    .get(&self.fallback)
                    .and_then(|bundle| bundle.get(key))
            });

        match template {
            Some(template) => substitute(template, args),
            None => {
                self.record_missing(key);
                key.to_string()
            }
        }
    }

    fn record_missing(&self, key: &str) {
        if let Ok(mut missing) = self.missing.lock() {
            missing.insert(key.to_string());
        }
    }

    /// Keys that resolved to themselves because no bundle supplied them.
    /// Diagnostic only; never an error.
    pub fn missing_keys(&self) -> Vec<String> {
        self.missing
            .lock()
            .map(|missing| missing.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Literal `{name}` substitution. No escaping: an unterminated brace or an
/// unknown placeholder is copied through unchanged.
fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}
