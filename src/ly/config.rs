//! Configuration loader
//!
//! `defaults/lylex.default.toml` is embedded into the library so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those
//! defaults via [`Loader`] before deserializing into [`LylexConfig`].

use crate::ly::error::LexError;
use crate::ly::lexicon::{Category, ConfiguredLexicon, LilyPondLexicon};
use crate::ly::lexing::Lexer;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_TOML: &str = include_str!("../../defaults/lylex.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LylexConfig {
    #[serde(default)]
    pub lexicon: LexiconConfig,
    pub output: OutputConfig,
}

/// Vocabulary additions on top of the built-in LilyPond lexicon.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub extra_words: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub markup_arity: BTreeMap<String, u8>,
}

impl LexiconConfig {
    /// The built-in lexicon extended with the configured words and arities.
    pub fn build_lexicon(&self) -> Result<ConfiguredLexicon, LexError> {
        let mut lexicon = ConfiguredLexicon::new(LilyPondLexicon);
        for (category, words) in &self.extra_words {
            let category: Category = category.parse()?;
            lexicon = lexicon.with_words(category, words.iter().cloned());
        }
        for (command, arity) in &self.markup_arity {
            lexicon = lexicon.with_markup_arity(command.clone(), *arity)?;
        }
        Ok(lexicon)
    }

    pub fn is_empty(&self) -> bool {
        self.extra_words.is_empty() && self.markup_arity.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "yaml"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format `{other}`")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        })
    }
}

impl LylexConfig {
    /// A lexer for this configuration. Without lexicon additions this is the shared
    /// built-in lexer.
    pub fn lexer(&self) -> Result<LexerHandle, LexError> {
        if self.lexicon.is_empty() {
            Ok(LexerHandle::Shared(Lexer::shared()))
        } else {
            Ok(LexerHandle::Owned(Box::new(Lexer::new(
                self.lexicon.build_lexicon()?,
            )?)))
        }
    }
}

/// Either the process-wide lexer or one compiled for a custom lexicon.
#[derive(Debug)]
pub enum LexerHandle {
    Shared(&'static Lexer),
    Owned(Box<Lexer>),
}

impl std::ops::Deref for LexerHandle {
    type Target = Lexer;

    fn deref(&self) -> &Lexer {
        match self {
            LexerHandle::Shared(lexer) => lexer,
            LexerHandle::Owned(lexer) => lexer,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer configuration text, mostly useful in tests.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LylexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LylexConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ly::lexicon::Lexicon;
    use crate::ly::lexing::ContextStack;
    use crate::ly::token::TokenKind;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.lexicon.is_empty());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn layers_lexicon_additions() {
        let config = Loader::new()
            .with_toml(
                r#"
                [lexicon.extra_words]
                contexts = ["MyStaff"]

                [lexicon.markup_arity]
                bold = 2
                "#,
            )
            .build()
            .expect("config to build");

        let lexicon = config.lexicon.build_lexicon().expect("lexicon to build");
        assert!(lexicon
            .lookup(Category::Contexts)
            .contains(&"MyStaff".to_string()));
        assert_eq!(lexicon.markup_arity("bold"), 2);

        let lexer = config.lexer().expect("lexer to compile");
        let lexed = lexer.lex(r"\new MyStaff", ContextStack::new());
        assert!(lexed.tokens.iter().any(|t| t.kind == TokenKind::ContextName));
    }

    #[test]
    fn rejects_unknown_categories() {
        let config = Loader::new()
            .with_toml("[lexicon.extra_words]\nchords = [\"x\"]\n")
            .build()
            .expect("config to build");
        assert!(matches!(
            config.lexicon.build_lexicon(),
            Err(LexError::UnknownCategory(_))
        ));
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/nonexistent/lylex.toml").build();
        assert!(result.is_err());
    }
}
