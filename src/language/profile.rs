use std::collections::HashMap;

use indexmap::IndexMap;
use regex::Regex;

use crate::config::{BodyKind, CustomLanguageConfig};
use crate::error::{MetricsGuardError, Result};

/// Comment markers of one grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Markers that comment out a line when the trimmed line starts with one.
    pub line_markers: Vec<String>,
    /// Open/close marker pairs for comments spanning multiple lines.
    pub block_markers: Vec<(String, String)>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(line_markers: Vec<&str>, block_markers: Vec<(&str, &str)>) -> Self {
        Self {
            line_markers: line_markers.into_iter().map(String::from).collect(),
            block_markers: block_markers
                .into_iter()
                .map(|(open, close)| (open.to_string(), close.to_string()))
                .collect(),
        }
    }
}

/// How a detected function body is delimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyDelimiter {
    /// Body enclosed in braces; the extractor tracks net brace depth until it
    /// returns to zero.
    Brace,
    /// Grammar also allows expression bodies introduced by `marker` and ended
    /// by a line containing `terminator`. Signatures that open a brace
    /// instead still delimit by brace depth.
    Arrow { marker: String, terminator: String },
}

/// Declarative description of one grammar: comment syntax plus the shape of a
/// function declaration. Pure data consumed by the classifier and extractor.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub name: String,
    pub extensions: Vec<String>,
    pub comment_syntax: CommentSyntax,
    /// Matches a line that starts a function declaration; capture group 1 is
    /// the function name. Structural best-effort, not a grammar.
    pub signature: Regex,
    pub body_delimiter: BodyDelimiter,
}

impl LanguageProfile {
    /// Build a profile from a pattern known to be valid at compile time.
    fn builtin(
        name: &str,
        extensions: Vec<&str>,
        comment_syntax: CommentSyntax,
        signature: &str,
        body_delimiter: BodyDelimiter,
    ) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            comment_syntax,
            signature: Regex::new(signature).expect("built-in signature pattern is valid"),
            body_delimiter,
        }
    }

    /// Build a profile from user configuration.
    ///
    /// # Errors
    /// Returns an error if the configured signature pattern is not a valid
    /// regular expression.
    pub fn from_custom(name: &str, config: &CustomLanguageConfig) -> Result<Self> {
        let signature = Regex::new(&config.signature_pattern).map_err(|e| {
            MetricsGuardError::InvalidSignature {
                language: name.to_string(),
                pattern: config.signature_pattern.clone(),
                source: Box::new(e),
            }
        })?;

        let body_delimiter = match config.body {
            BodyKind::Brace => BodyDelimiter::Brace,
            BodyKind::Arrow => BodyDelimiter::Arrow {
                marker: config.arrow_marker.clone(),
                terminator: config.terminator.clone(),
            },
        };

        Ok(Self {
            name: name.to_string(),
            extensions: config.extensions.clone(),
            comment_syntax: CommentSyntax {
                line_markers: config.line_comments.clone(),
                block_markers: config.block_comments.clone(),
            },
            signature,
            body_delimiter,
        })
    }
}

/// Registry of language profiles keyed by file extension. Later registrations
/// win when extensions collide, so custom languages can override built-ins.
#[derive(Debug)]
pub struct ProfileRegistry {
    profiles: Vec<LanguageProfile>,
    extension_map: HashMap<String, usize>,
}

impl ProfileRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    pub fn register(&mut self, profile: LanguageProfile) {
        let idx = self.profiles.len();
        for ext in &profile.extensions {
            self.extension_map.insert(ext.clone(), idx);
        }
        self.profiles.push(profile);
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&LanguageProfile> {
        self.extension_map.get(ext).map(|&idx| &self.profiles[idx])
    }

    #[must_use]
    pub fn all(&self) -> &[LanguageProfile] {
        &self.profiles
    }

    /// All extensions with a registered profile, in registration order.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions = Vec::new();
        for profile in &self.profiles {
            for ext in &profile.extensions {
                if !extensions.contains(ext) {
                    extensions.push(ext.clone());
                }
            }
        }
        extensions
    }

    /// Default registry extended with languages declared in configuration.
    ///
    /// # Errors
    /// Returns an error if a custom signature pattern does not compile.
    pub fn with_custom_languages(
        custom: &IndexMap<String, CustomLanguageConfig>,
    ) -> Result<Self> {
        let mut registry = Self::default();
        for (name, config) in custom {
            registry.register(LanguageProfile::from_custom(name, config)?);
        }
        Ok(registry)
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(LanguageProfile::builtin(
            "Dart",
            vec!["dart"],
            CommentSyntax::new(vec!["//", "///"], vec![("/*", "*/")]),
            r"^\s*(?:@\w+\s+)*(?:static\s+)?(?:final\s+)?(?:const\s+)?(?:Future<[^>]+>|Stream<[^>]+>|[A-Za-z_]\w*(?:<[^>]+>)?)\s+([A-Za-z_]\w*)\s*\([^)]*\)\s*(?:async\s*)?(?:=>|\{)",
            BodyDelimiter::Arrow {
                marker: "=>".to_string(),
                terminator: ";".to_string(),
            },
        ));

        registry.register(LanguageProfile::builtin(
            "Rust",
            vec!["rs"],
            CommentSyntax::new(vec!["//", "///", "//!"], vec![("/*", "*/")]),
            r"^[\t ]*(?:pub(?:\s*\([^)]*\))?\s+)?(?:async\s+)?(?:unsafe\s+)?(?:const\s+)?fn\s+([a-zA-Z_][a-zA-Z0-9_]*)",
            BodyDelimiter::Brace,
        ));

        registry
    }
}
