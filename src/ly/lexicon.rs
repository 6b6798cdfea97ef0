//! Lexicon provider
//!
//!     Several LilyPond token kinds are recognised from closed vocabularies rather than
//!     from a fixed shape: keywords, music commands, articulations, clef names, grob,
//!     context and property names, the variables of `\paper`, `\header` and `\layout`.
//!     The lexer does not own these lists. It asks a [`Lexicon`] for the words of a
//!     [`Category`] once, when its pattern table is compiled, and asks for the declared
//!     argument count of a markup command every time one is lexed.
//!
//!     [`LilyPondLexicon`] serves the built-in vocabulary of [`words`].
//!     [`ConfiguredLexicon`] layers extra words and arity overrides from the configuration
//!     on top of any other lexicon.

pub mod words;

use crate::ly::error::LexError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// The highest argument count a markup command can declare.
pub const MAX_MARKUP_ARITY: u8 = 4;

/// Argument count assumed for markup commands no vocabulary knows about.
pub const DEFAULT_MARKUP_ARITY: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Keywords,
    MusicCommands,
    Articulations,
    Ornaments,
    Fermatas,
    InstrumentScripts,
    RepeatScripts,
    AncientScripts,
    RepeatTypes,
    Clefs,
    Contexts,
    Grobs,
    ContextProperties,
    PaperVariables,
    HeaderVariables,
    LayoutVariables,
    #[serde(rename = "markup-commands-0")]
    MarkupCommands0,
    #[serde(rename = "markup-commands-1")]
    MarkupCommands1,
    #[serde(rename = "markup-commands-2")]
    MarkupCommands2,
    #[serde(rename = "markup-commands-3")]
    MarkupCommands3,
    #[serde(rename = "markup-commands-4")]
    MarkupCommands4,
}

impl Category {
    pub const ALL: [Category; 21] = [
        Category::Keywords,
        Category::MusicCommands,
        Category::Articulations,
        Category::Ornaments,
        Category::Fermatas,
        Category::InstrumentScripts,
        Category::RepeatScripts,
        Category::AncientScripts,
        Category::RepeatTypes,
        Category::Clefs,
        Category::Contexts,
        Category::Grobs,
        Category::ContextProperties,
        Category::PaperVariables,
        Category::HeaderVariables,
        Category::LayoutVariables,
        Category::MarkupCommands0,
        Category::MarkupCommands1,
        Category::MarkupCommands2,
        Category::MarkupCommands3,
        Category::MarkupCommands4,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Keywords => "keywords",
            Category::MusicCommands => "music-commands",
            Category::Articulations => "articulations",
            Category::Ornaments => "ornaments",
            Category::Fermatas => "fermatas",
            Category::InstrumentScripts => "instrument-scripts",
            Category::RepeatScripts => "repeat-scripts",
            Category::AncientScripts => "ancient-scripts",
            Category::RepeatTypes => "repeat-types",
            Category::Clefs => "clefs",
            Category::Contexts => "contexts",
            Category::Grobs => "grobs",
            Category::ContextProperties => "context-properties",
            Category::PaperVariables => "paper-variables",
            Category::HeaderVariables => "header-variables",
            Category::LayoutVariables => "layout-variables",
            Category::MarkupCommands0 => "markup-commands-0",
            Category::MarkupCommands1 => "markup-commands-1",
            Category::MarkupCommands2 => "markup-commands-2",
            Category::MarkupCommands3 => "markup-commands-3",
            Category::MarkupCommands4 => "markup-commands-4",
        }
    }

    /// The markup command category holding commands of the given arity.
    pub fn markup_commands(arity: u8) -> Option<Category> {
        match arity {
            0 => Some(Category::MarkupCommands0),
            1 => Some(Category::MarkupCommands1),
            2 => Some(Category::MarkupCommands2),
            3 => Some(Category::MarkupCommands3),
            4 => Some(Category::MarkupCommands4),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| LexError::UnknownCategory(s.to_string()))
    }
}

/// Source of the closed vocabularies the lexer recognises.
///
/// Implementations must be cheap to share across threads: a compiled
/// [`Lexer`](crate::ly::lexing::Lexer) keeps its lexicon for markup arity lookups.
pub trait Lexicon: Send + Sync {
    /// All words of a category, without any `\` prefix.
    fn lookup(&self, category: Category) -> Vec<String>;

    /// Declared argument count of a markup command (name without `\`), in `0..=4`.
    ///
    /// Commands found in none of the arity vocabularies take one argument.
    fn markup_arity(&self, command: &str) -> u8 {
        (0..=MAX_MARKUP_ARITY)
            .filter(|arity| *arity != DEFAULT_MARKUP_ARITY)
            .find(|arity| {
                Category::markup_commands(*arity)
                    .map(|category| self.lookup(category).iter().any(|word| word == command))
                    .unwrap_or(false)
            })
            .unwrap_or(DEFAULT_MARKUP_ARITY)
    }
}

/// Built-in LilyPond vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LilyPondLexicon;

static BUILTIN_ARITIES: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    let mut arities = HashMap::new();
    for arity in (0..=MAX_MARKUP_ARITY).rev() {
        if let Some(category) = Category::markup_commands(arity) {
            for word in LilyPondLexicon::words(category) {
                arities.insert(*word, arity);
            }
        }
    }
    arities
});

impl LilyPondLexicon {
    pub fn words(category: Category) -> &'static [&'static str] {
        match category {
            Category::Keywords => words::KEYWORDS,
            Category::MusicCommands => words::MUSIC_COMMANDS,
            Category::Articulations => words::ARTICULATIONS,
            Category::Ornaments => words::ORNAMENTS,
            Category::Fermatas => words::FERMATAS,
            Category::InstrumentScripts => words::INSTRUMENT_SCRIPTS,
            Category::RepeatScripts => words::REPEAT_SCRIPTS,
            Category::AncientScripts => words::ANCIENT_SCRIPTS,
            Category::RepeatTypes => words::REPEAT_TYPES,
            Category::Clefs => words::CLEFS,
            Category::Contexts => words::CONTEXTS,
            Category::Grobs => words::GROBS,
            Category::ContextProperties => words::CONTEXT_PROPERTIES,
            Category::PaperVariables => words::PAPER_VARIABLES,
            Category::HeaderVariables => words::HEADER_VARIABLES,
            Category::LayoutVariables => words::LAYOUT_VARIABLES,
            Category::MarkupCommands0 => words::MARKUP_COMMANDS_0,
            Category::MarkupCommands1 => words::MARKUP_COMMANDS_1,
            Category::MarkupCommands2 => words::MARKUP_COMMANDS_2,
            Category::MarkupCommands3 => words::MARKUP_COMMANDS_3,
            Category::MarkupCommands4 => words::MARKUP_COMMANDS_4,
        }
    }
}

impl Lexicon for LilyPondLexicon {
    fn lookup(&self, category: Category) -> Vec<String> {
        Self::words(category).iter().map(|w| w.to_string()).collect()
    }

    fn markup_arity(&self, command: &str) -> u8 {
        BUILTIN_ARITIES
            .get(command)
            .copied()
            .unwrap_or(DEFAULT_MARKUP_ARITY)
    }
}

/// A lexicon extended with configured words and markup arities.
pub struct ConfiguredLexicon {
    base: Box<dyn Lexicon>,
    /// Ordered by category, so a command listed under several arities resolves to the lowest.
    extra: BTreeMap<Category, Vec<String>>,
    arities: HashMap<String, u8>,
}

impl ConfiguredLexicon {
    pub fn new(base: impl Lexicon + 'static) -> Self {
        Self {
            base: Box::new(base),
            extra: BTreeMap::new(),
            arities: HashMap::new(),
        }
    }

    /// Add words to a category. Duplicates of base words are harmless.
    pub fn with_words<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra
            .entry(category)
            .or_default()
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Declare the argument count of a markup command, overriding the base lexicon.
    pub fn with_markup_arity(
        mut self,
        command: impl Into<String>,
        arity: u8,
    ) -> Result<Self, LexError> {
        let command = command.into();
        if arity > MAX_MARKUP_ARITY {
            return Err(LexError::InvalidArity { command, arity });
        }
        self.arities.insert(command, arity);
        Ok(self)
    }
}

impl fmt::Debug for ConfiguredLexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredLexicon")
            .field("extra", &self.extra)
            .field("arities", &self.arities)
            .finish_non_exhaustive()
    }
}

impl Lexicon for ConfiguredLexicon {
    fn lookup(&self, category: Category) -> Vec<String> {
        let mut words = self.base.lookup(category);
        if let Some(extra) = self.extra.get(&category) {
            words.extend(extra.iter().cloned());
        }
        words
    }

    fn markup_arity(&self, command: &str) -> u8 {
        if let Some(arity) = self.arities.get(command) {
            return *arity;
        }
        for (category, words) in &self.extra {
            if let Some(arity) = markup_arity_of(*category) {
                if words.iter().any(|word| word == command) {
                    return arity;
                }
            }
        }
        self.base.markup_arity(command)
    }
}

fn markup_arity_of(category: Category) -> Option<u8> {
    (0..=MAX_MARKUP_ARITY).find(|arity| Category::markup_commands(*arity) == Some(category))
}
