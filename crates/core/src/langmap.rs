//! Extension to language-name mapping
//!
//! The mapping is configured with a string such as
//! `Python:py.pyw.,JavaScript:js.` where each comma separated entry names a
//! language and a dot separated list of extensions. Entries whose language
//! name starts with a lowercase letter are reserved and skipped, as are
//! entries without exactly one `:` separator.

use crate::config::defaults::default_case_insensitive_extensions;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

/// Extension (with leading dot) to language name table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangMap {
    entries: HashMap<String, String>,
}

impl LangMap {
    /// Parse a language-map configuration string
    ///
    /// With `case_insensitive` set, every extension is also stored in its
    /// all-uppercase and all-lowercase form.
    pub fn parse(config: &str, case_insensitive: bool) -> Self {
        let mut entries = HashMap::new();

        for mapping in config.split(',') {
            let parts: Vec<&str> = mapping.split(':').collect();
            let [language, extensions] = parts.as_slice() else {
                trace!("Skipping malformed langmap entry: {mapping:?}");
                continue;
            };

            match language.chars().next() {
                None => continue,
                Some(first) if first.is_ascii_lowercase() => {
                    trace!("Skipping reserved langmap entry: {mapping:?}");
                    continue;
                }
                Some(_) => {}
            }

            for ext in extensions.split('.').filter(|e| !e.is_empty()) {
                let key = format!(".{ext}");
                if case_insensitive {
                    entries.insert(key.to_uppercase(), language.to_string());
                    entries.insert(key.to_lowercase(), language.to_string());
                }
                entries.insert(key, language.to_string());
            }
        }

        Self { entries }
    }

    /// Language name registered for an extension key such as `.py`
    pub fn get(&self, extension: &str) -> Option<&str> {
        self.entries.get(extension).map(String::as_str)
    }

    /// Language name for a file, keyed by its extension
    pub fn language_for(&self, path: &Path) -> Option<&str> {
        extension_key(path).and_then(|ext| self.get(ext))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Suffix of the final path component starting at its last `.`
pub fn extension_key(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rfind('.').map(|idx| &name[idx..])
}

/// Builds a language map at most once per resolver
///
/// The first build that produces a non-empty table is kept for the
/// lifetime of the resolver; later calls return it regardless of the
/// configuration string they pass. Empty builds are not kept.
#[derive(Debug)]
pub struct LangMapResolver {
    case_insensitive: bool,
    table: Mutex<Option<Arc<LangMap>>>,
}

impl LangMapResolver {
    pub fn new(case_insensitive: bool) -> Self {
        Self {
            case_insensitive,
            table: Mutex::new(None),
        }
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Return the memoized table, building it from `config` if none exists yet
    pub fn resolve(&self, config: &str) -> Arc<LangMap> {
        let mut guard = self
            .table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(existing) = guard.as_ref() {
            return Arc::clone(existing);
        }

        let built = Arc::new(LangMap::parse(config, self.case_insensitive));
        if built.is_empty() {
            debug!("Language map configuration produced no entries");
        } else {
            debug!("Built language map with {} extensions", built.len());
            *guard = Some(Arc::clone(&built));
        }
        built
    }

    /// The memoized table, if one has been built
    pub fn current(&self) -> Option<Arc<LangMap>> {
        self.table
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .map(Arc::clone)
    }
}

/// Extensions are folded on platforms with case-insensitive file systems
impl Default for LangMapResolver {
    fn default() -> Self {
        Self::new(default_case_insensitive_extensions())
    }
}
