//! Per-file extraction pipeline
//!
//! Resolves the file's language, gathers definitions and references
//! independently, merges them and emits the result. A failing source is
//! reported through the sink's warning channel and treated as empty.

use crate::definitions::{CtagsDefinitionSource, DefinitionSource};
use crate::emit::emit_tags;
use crate::merge::merge_tags;
use crate::references::{LexicalReferenceSource, ReferenceSource};
use lextags_core::error::{Error, Result};
use lextags_core::{Config, LangMapResolver, Tag, TagSink};
use std::path::Path;
use tracing::{debug, warn};

/// One file to extract tags from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    pub file_path: String,

    /// Language-map configuration string, e.g. `Python:py.`
    pub langmap: Option<String>,
}

impl ExtractRequest {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            langmap: None,
        }
    }

    pub fn with_langmap(mut self, langmap: impl Into<String>) -> Self {
        self.langmap = Some(langmap.into());
        self
    }
}

pub struct TagExtractor {
    definitions: Option<Box<dyn DefinitionSource>>,
    references: Box<dyn ReferenceSource>,
    langmaps: LangMapResolver,
    default_langmap: Option<String>,
    concurrent: bool,
}

impl TagExtractor {
    /// `definitions` may be `None` to run reference extraction only
    pub fn new(
        definitions: Option<Box<dyn DefinitionSource>>,
        references: Box<dyn ReferenceSource>,
    ) -> Self {
        Self {
            definitions,
            references,
            langmaps: LangMapResolver::default(),
            default_langmap: None,
            concurrent: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let definitions = config.definitions.enabled.then(|| {
            Box::new(CtagsDefinitionSource::from_config(&config.definitions))
                as Box<dyn DefinitionSource>
        });

        let mut extractor = Self::new(definitions, Box::new(LexicalReferenceSource))
            .with_langmap_resolver(LangMapResolver::new(config.langmap.case_insensitive))
            .with_concurrency(config.extraction.concurrent_sources);
        extractor.default_langmap = config.langmap.mapping.clone();
        extractor
    }

    pub fn with_langmap_resolver(mut self, resolver: LangMapResolver) -> Self {
        self.langmaps = resolver;
        self
    }

    /// Mapping used when a request carries none
    pub fn with_default_langmap(mut self, langmap: impl Into<String>) -> Self {
        self.default_langmap = Some(langmap.into());
        self
    }

    pub fn with_concurrency(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    /// Language name for the request's file, if the language map knows it
    pub fn language_for(&self, request: &ExtractRequest) -> Option<String> {
        let config = request
            .langmap
            .as_deref()
            .or(self.default_langmap.as_deref());

        let table = match config {
            Some(config) => Some(self.langmaps.resolve(config)),
            None => self.langmaps.current(),
        }?;

        table
            .language_for(Path::new(&request.file_path))
            .map(str::to_string)
    }

    /// Extract, merge and emit all tags for one file
    pub fn extract(&self, request: &ExtractRequest, sink: &mut dyn TagSink) {
        let path = request.file_path.as_str();
        let language = self.language_for(request);
        debug!("Extracting {path} (language: {language:?})");

        let (definitions, references) = if self.concurrent {
            std::thread::scope(|scope| {
                let definitions = scope.spawn(|| self.collect_definitions(path));
                let references = self.references.extract(path, language.as_deref());
                let definitions = definitions.join().unwrap_or_else(|_| {
                    Err(Error::definition_tool("definition extraction panicked"))
                });
                (definitions, references)
            })
        } else {
            (
                self.collect_definitions(path),
                self.references.extract(path, language.as_deref()),
            )
        };

        let definitions = or_warn(definitions, "definition", path, sink);
        let references = or_warn(references, "reference", path, sink);
        let (definition_count, reference_count) = (definitions.len(), references.len());

        let merged = merge_tags(definitions, references);
        let emitted = emit_tags(&merged, sink);

        debug!(
            "{path}: {definition_count} definitions, {reference_count} references, {emitted} emitted"
        );
    }

    fn collect_definitions(&self, path: &str) -> Result<Vec<Tag>> {
        match &self.definitions {
            Some(source) => source.extract(path),
            None => Ok(Vec::new()),
        }
    }
}

fn or_warn(result: Result<Vec<Tag>>, source: &str, path: &str, sink: &mut dyn TagSink) -> Vec<Tag> {
    match result {
        Ok(tags) => tags,
        Err(e) => {
            let message = format!("{source} extraction failed for {path}: {e}");
            warn!("{message}");
            sink.warning(&message);
            Vec::new()
        }
    }
}
