//! Registry of geometry parsers keyed by import format.

use std::collections::HashMap;
use std::fmt;

use geojson::FeatureCollection;

use super::{GeoJsonParser, GeometryParser, ImportError, ImportFormat, WktParser};

/// Registry of available geometry parsers.
///
/// All built-in parsers are registered automatically on creation.
pub struct ParserRegistry {
    parsers: HashMap<ImportFormat, Box<dyn GeometryParser>>,
}

impl ParserRegistry {
    /// Create a new registry with all built-in parsers registered.
    pub fn new() -> Self {
        let mut registry = Self {
            parsers: HashMap::new(),
        };

        registry.register(Box::new(GeoJsonParser));
        registry.register(Box::new(WktParser));

        registry
    }

    /// Register a parser, replacing any previous parser for its format.
    pub fn register(&mut self, parser: Box<dyn GeometryParser>) {
        self.parsers.insert(parser.format(), parser);
    }

    /// Get the parser for a format.
    pub fn get(&self, format: ImportFormat) -> Option<&dyn GeometryParser> {
        self.parsers.get(&format).map(|p| p.as_ref())
    }

    /// Find the parser for an uploaded file by its extension.
    pub fn by_extension(&self, ext: &str) -> Option<&dyn GeometryParser> {
        let ext = ext.trim_start_matches('.');
        self.parsers
            .values()
            .find(|p| p.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .map(|p| p.as_ref())
    }

    /// Find the parser for an uploaded file by its name.
    pub fn for_file_name(&self, name: &str) -> Option<&dyn GeometryParser> {
        let ext = std::path::Path::new(name).extension()?.to_str()?;
        self.by_extension(ext)
    }

    /// Parse `text` with the parser registered for `format`.
    pub fn parse(&self, format: ImportFormat, text: &str) -> Result<FeatureCollection, ImportError> {
        self.get(format)
            .ok_or(ImportError::UnsupportedFormat(format.name()))?
            .parse(text)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.parsers.keys()).finish()
    }
}
