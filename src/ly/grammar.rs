//! Grammar catalogue
//!
//!     The lexer knows a closed set of contexts. Each one is a fixed table entry: the
//!     candidate token kinds in priority order, the kind used for input none of them
//!     recognises, the argument count a fresh frame starts with, what to do when nothing
//!     matches (fallthrough) and what a plain `{` or `<<` does while it is on top.
//!
//!     The table is built once and only read afterwards. Adding a mode means adding an entry
//!     here and a kind that enters it.
//!
//! Waiting contexts
//!
//!     Block keywords such as `\score` do not nest their body directly. They enter a waiting
//!     context that only admits whitespace, comments and the opening delimiter; the opening
//!     delimiter then replaces the waiting frame with the body context. Waiting contexts for
//!     blocks are strict (anything else is an error token, and the wait survives line ends),
//!     those for input modes fall through to the enclosing context.

use crate::ly::token::TokenKind;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! context_ids {
    ($($id:ident),+ $(,)?) => {
        /// Identifier of a lexing context.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ContextId {
            $($id),+
        }

        impl ContextId {
            pub const ALL: &'static [ContextId] = &[$(ContextId::$id),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(ContextId::$id => stringify!($id)),+
                }
            }
        }
    };
}

context_ids! {
    Toplevel,
    ExpectBook,
    Book,
    ExpectBookPart,
    BookPart,
    ExpectScore,
    Score,
    ExpectPaper,
    Paper,
    ExpectHeader,
    Header,
    ExpectLayout,
    Layout,
    ExpectMidi,
    Midi,
    ExpectWith,
    With,
    ExpectContext,
    LayoutContext,
    Music,
    Chord,
    String,
    BlockComment,
    Markup,
    Repeat,
    Duration,
    DurationScaling,
    Override,
    Revert,
    Set,
    Unset,
    NewContext,
    Clef,
    ScriptAbbreviation,
    ExpectLyricMode,
    LyricMode,
    ExpectChordMode,
    ChordMode,
    ExpectNoteMode,
    NoteMode,
    ExpectDrumMode,
    DrumMode,
    ExpectFigureMode,
    FigureMode,
    Scheme,
    SchemeList,
    SchemeLilyPond,
}

impl ContextId {
    pub fn index(self) -> usize {
        self as usize
    }

    /// The table entry for this context.
    pub fn def(self) -> &'static ContextDef {
        &CATALOGUE[self.index()]
    }

    /// Waiting contexts of block keywords, replaced by their body on `{`.
    pub fn is_block_wait(self) -> bool {
        matches!(self.def().on_open, Some(OnOpen::Replace(_)))
    }

    /// Whether a stack may start with this context at the bottom. The lexer must never
    /// unwind a bottom frame, so neither fallthrough nor waiting contexts qualify.
    pub fn can_be_root(self) -> bool {
        self.def().fallthrough.is_none() && !self.is_block_wait()
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a context does when none of its candidates match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallthrough {
    Leave,
    Replace(ContextId),
}

/// What a plain opening delimiter does while this context is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnOpen {
    Replace(ContextId),
    Enter(ContextId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDef {
    pub id: ContextId,
    pub candidates: Vec<TokenKind>,
    pub default: TokenKind,
    pub argcount: u32,
    pub fallthrough: Option<Fallthrough>,
    pub on_open: Option<OnOpen>,
}

impl ContextDef {
    fn new(id: ContextId, candidates: Vec<TokenKind>) -> Self {
        Self {
            id,
            candidates,
            default: TokenKind::Unparsed,
            argcount: 0,
            fallthrough: None,
            on_open: None,
        }
    }

    fn default_kind(mut self, kind: TokenKind) -> Self {
        self.default = kind;
        self
    }

    fn argcount(mut self, argcount: u32) -> Self {
        self.argcount = argcount;
        self
    }

    fn fallthrough(mut self, fallthrough: Fallthrough) -> Self {
        self.fallthrough = Some(fallthrough);
        self
    }

    fn on_open(mut self, on_open: OnOpen) -> Self {
        self.on_open = Some(on_open);
        self
    }

    pub fn is_fallthrough(&self) -> bool {
        self.fallthrough.is_some()
    }
}

use TokenKind as K;

const SPACE_ITEMS: &[TokenKind] = &[K::Space, K::BlockCommentStart, K::LineComment];

const BASE_ITEMS: &[TokenKind] = &[K::SchemeStart, K::StringQuotedStart];

const COMMAND_ITEMS: &[TokenKind] = &[
    K::Repeat,
    K::Override,
    K::Revert,
    K::Set,
    K::Unset,
    K::New,
    K::Context,
    K::Change,
    K::With,
    K::Clef,
    K::ChordMode,
    K::DrumMode,
    K::FigureMode,
    K::LyricMode,
    K::NoteMode,
    K::MarkupLines,
    K::Markup,
    K::Keyword,
    K::Command,
    K::UserCommand,
];

const TOPLEVEL_BASE_EXTRA: &[TokenKind] = &[K::Fraction, K::SequentialStart, K::SimultaneousStart];

const MUSIC_EXTRA: &[TokenKind] = &[
    K::Dynamic,
    K::Skip,
    K::Rest,
    K::Note,
    K::Octave,
    K::Fraction,
    K::Duration,
    K::VoiceSeparator,
    K::BarCheck,
    K::SequentialStart,
    K::SequentialEnd,
    K::SimultaneousStart,
    K::SimultaneousEnd,
    K::ChordStart,
    K::ContextName,
    K::GrobName,
    K::SlurStart,
    K::SlurEnd,
    K::PhrasingSlurStart,
    K::PhrasingSlurEnd,
    K::Tie,
    K::BeamStart,
    K::BeamEnd,
    K::LigatureStart,
    K::LigatureEnd,
    K::Direction,
    K::Articulation,
];

const SCHEME_ITEMS: &[TokenKind] = &[
    K::Space,
    K::SchemeComment,
    K::SchemeLilyPondStart,
    K::SchemeBool,
    K::SchemeChar,
    K::SchemeOpenParen,
    K::SchemeQuote,
    K::SchemeNumber,
    K::StringQuotedStart,
    K::SchemeWord,
];

fn items(parts: &[&[TokenKind]]) -> Vec<TokenKind> {
    parts.iter().flat_map(|part| part.iter().copied()).collect()
}

fn base() -> Vec<TokenKind> {
    items(&[SPACE_ITEMS, BASE_ITEMS])
}

fn toplevel_base() -> Vec<TokenKind> {
    items(&[SPACE_ITEMS, BASE_ITEMS, TOPLEVEL_BASE_EXTRA, COMMAND_ITEMS])
}

fn music() -> Vec<TokenKind> {
    items(&[SPACE_ITEMS, BASE_ITEMS, MUSIC_EXTRA, COMMAND_ITEMS])
}

fn with(head: &[TokenKind], tail: Vec<TokenKind>) -> Vec<TokenKind> {
    head.iter().copied().chain(tail).collect()
}

fn block_wait(id: ContextId, body: ContextId) -> ContextDef {
    ContextDef::new(id, items(&[SPACE_ITEMS, &[K::OpenBracket]]))
        .default_kind(K::Error)
        .on_open(OnOpen::Replace(body))
}

fn mode_wait(id: ContextId, mode: ContextId) -> ContextDef {
    ContextDef::new(id, items(&[SPACE_ITEMS, &[K::OpenBracket, K::OpenSimultaneous]]))
        .fallthrough(Fallthrough::Leave)
        .on_open(OnOpen::Enter(mode))
}

fn define(id: ContextId) -> ContextDef {
    use ContextId as C;
    match id {
        C::Toplevel => ContextDef::new(
            id,
            with(
                &[
                    K::Book,
                    K::BookPart,
                    K::Score,
                    K::Markup,
                    K::MarkupLines,
                    K::Paper,
                    K::Header,
                    K::Layout,
                ],
                items(&[toplevel_base().as_slice(), &[K::Name, K::EqualSign]]),
            ),
        ),

        C::ExpectBook => block_wait(id, C::Book),
        C::Book => ContextDef::new(
            id,
            with(
                &[
                    K::CloseBracket,
                    K::Markup,
                    K::MarkupLines,
                    K::BookPart,
                    K::Score,
                    K::Paper,
                    K::Header,
                    K::Layout,
                ],
                toplevel_base(),
            ),
        ),
        C::ExpectBookPart => block_wait(id, C::BookPart),
        C::BookPart => ContextDef::new(
            id,
            with(
                &[
                    K::CloseBracket,
                    K::Markup,
                    K::MarkupLines,
                    K::Score,
                    K::Paper,
                    K::Header,
                    K::Layout,
                ],
                toplevel_base(),
            ),
        ),
        C::ExpectScore => block_wait(id, C::Score),
        C::Score => ContextDef::new(
            id,
            with(
                &[K::CloseBracket, K::Header, K::Layout, K::Midi, K::With],
                toplevel_base(),
            ),
        ),
        C::ExpectPaper => block_wait(id, C::Paper),
        C::Paper => ContextDef::new(
            id,
            items(&[
                base().as_slice(),
                &[
                    K::CloseBracket,
                    K::Markup,
                    K::MarkupLines,
                    K::PaperVariable,
                    K::EqualSign,
                    K::DecimalValue,
                    K::Unit,
                ],
            ]),
        ),
        C::ExpectHeader => block_wait(id, C::Header),
        C::Header => ContextDef::new(
            id,
            with(
                &[
                    K::CloseBracket,
                    K::Markup,
                    K::MarkupLines,
                    K::HeaderVariable,
                    K::EqualSign,
                ],
                toplevel_base(),
            ),
        ),
        C::ExpectLayout => block_wait(id, C::Layout),
        C::Layout | C::Midi => ContextDef::new(
            id,
            items(&[
                base().as_slice(),
                &[
                    K::CloseBracket,
                    K::LayoutContext,
                    K::LayoutVariable,
                    K::EqualSign,
                    K::DecimalValue,
                    K::Unit,
                ],
            ]),
        ),
        C::ExpectMidi => block_wait(id, C::Midi),
        C::ExpectWith => block_wait(id, C::With),
        C::With => ContextDef::new(
            id,
            with(
                &[K::CloseBracket, K::ContextProperty, K::EqualSign],
                toplevel_base(),
            ),
        ),
        C::ExpectContext => block_wait(id, C::LayoutContext),
        C::LayoutContext => ContextDef::new(
            id,
            with(
                &[
                    K::CloseBracket,
                    K::BackSlashedContextName,
                    K::ContextProperty,
                    K::EqualSign,
                ],
                toplevel_base(),
            ),
        ),

        C::Music | C::ChordMode | C::NoteMode | C::DrumMode | C::FigureMode => {
            ContextDef::new(id, music())
        }
        C::Chord => ContextDef::new(id, with(&[K::ErrorInChord, K::ChordEnd], music())),

        C::String => ContextDef::new(id, vec![K::StringQuotedEnd, K::StringQuoteEscape])
            .default_kind(K::String),
        C::BlockComment => ContextDef::new(id, vec![K::BlockCommentSpace, K::BlockCommentEnd])
            .default_kind(K::Comment),

        C::Markup => ContextDef::new(
            id,
            with(
                &[
                    K::MarkupScore,
                    K::MarkupCommand,
                    K::OpenBracketMarkup,
                    K::CloseBracketMarkup,
                    K::MarkupWord,
                ],
                base(),
            ),
        ),

        C::Repeat => ContextDef::new(
            id,
            items(&[
                SPACE_ITEMS,
                &[K::RepeatSpecifier, K::RepeatStringSpecifier, K::RepeatCount],
            ]),
        )
        .fallthrough(Fallthrough::Leave),
        C::Duration => ContextDef::new(id, items(&[SPACE_ITEMS, &[K::Dot]]))
            .fallthrough(Fallthrough::Replace(C::DurationScaling)),
        C::DurationScaling => ContextDef::new(id, items(&[SPACE_ITEMS, &[K::Scaling]]))
            .fallthrough(Fallthrough::Leave),

        C::Override => ContextDef::new(
            id,
            with(
                &[
                    K::ContextName,
                    K::DotSetOverride,
                    K::GrobName,
                    K::EqualSignSetOverride,
                    K::Name,
                    K::Markup,
                    K::MarkupLines,
                ],
                base(),
            ),
        ),
        C::Revert => ContextDef::new(
            id,
            items(&[
                SPACE_ITEMS,
                &[
                    K::ContextName,
                    K::DotSetOverride,
                    K::GrobName,
                    K::Name,
                    K::SchemeStart,
                ],
            ]),
        )
        .fallthrough(Fallthrough::Leave),
        C::Set => ContextDef::new(
            id,
            with(
                &[
                    K::ContextName,
                    K::DotSetOverride,
                    K::ContextProperty,
                    K::EqualSignSetOverride,
                    K::Name,
                    K::Markup,
                    K::MarkupLines,
                ],
                base(),
            ),
        ),
        C::Unset => ContextDef::new(
            id,
            items(&[
                SPACE_ITEMS,
                &[K::ContextName, K::DotSetOverride, K::ContextProperty, K::Name],
            ]),
        )
        .fallthrough(Fallthrough::Leave),
        C::NewContext => ContextDef::new(
            id,
            items(&[
                SPACE_ITEMS,
                &[K::ContextName, K::Name, K::EqualSign, K::StringQuotedStart],
            ]),
        )
        .fallthrough(Fallthrough::Leave),
        C::Clef => ContextDef::new(
            id,
            items(&[SPACE_ITEMS, &[K::ClefSpecifier, K::StringQuotedStart]]),
        )
        .argcount(1)
        .fallthrough(Fallthrough::Leave),
        C::ScriptAbbreviation => {
            ContextDef::new(id, items(&[SPACE_ITEMS, &[K::ScriptAbbreviation]]))
                .argcount(1)
                .fallthrough(Fallthrough::Leave)
        }

        C::ExpectLyricMode => ContextDef::new(
            id,
            items(&[
                SPACE_ITEMS,
                &[
                    K::OpenBracket,
                    K::OpenSimultaneous,
                    K::SchemeStart,
                    K::StringQuotedStart,
                    K::Name,
                ],
            ]),
        )
        .fallthrough(Fallthrough::Leave)
        .on_open(OnOpen::Enter(C::LyricMode)),
        C::LyricMode => ContextDef::new(
            id,
            items(&[
                base().as_slice(),
                &[
                    K::CloseBracket,
                    K::CloseSimultaneous,
                    K::OpenBracket,
                    K::OpenSimultaneous,
                    K::LyricHyphen,
                    K::LyricExtender,
                    K::LyricSkip,
                    K::LyricTie,
                    K::LyricText,
                    K::Dynamic,
                    K::Skip,
                    K::Duration,
                    K::Markup,
                    K::MarkupLines,
                ],
                COMMAND_ITEMS,
            ]),
        )
        .on_open(OnOpen::Enter(C::LyricMode)),
        C::ExpectChordMode => mode_wait(id, C::ChordMode),
        C::ExpectNoteMode => mode_wait(id, C::NoteMode),
        C::ExpectDrumMode => mode_wait(id, C::DrumMode),
        C::ExpectFigureMode => mode_wait(id, C::FigureMode),

        C::Scheme => ContextDef::new(id, SCHEME_ITEMS.to_vec())
            .default_kind(K::Error)
            .argcount(1),
        C::SchemeList => ContextDef::new(id, with(&[K::SchemeCloseParen], SCHEME_ITEMS.to_vec()))
            .default_kind(K::Error),
        C::SchemeLilyPond => ContextDef::new(id, with(&[K::SchemeLilyPondEnd], music())),
    }
}

static CATALOGUE: Lazy<Vec<ContextDef>> =
    Lazy::new(|| ContextId::ALL.iter().map(|id| define(*id)).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_is_indexed_by_id() {
        for id in ContextId::ALL {
            assert_eq!(id.def().id, *id);
        }
    }

    #[test]
    fn test_toplevel_can_be_root() {
        assert!(ContextId::Toplevel.can_be_root());
        assert!(ContextId::Music.can_be_root());
        assert!(!ContextId::Repeat.can_be_root());
        assert!(!ContextId::ExpectScore.can_be_root());
    }

    #[test]
    fn test_block_waits_are_strict() {
        let def = ContextId::ExpectHeader.def();
        assert_eq!(def.default, TokenKind::Error);
        assert!(!def.is_fallthrough());
        assert_eq!(def.on_open, Some(OnOpen::Replace(ContextId::Header)));
    }

    #[test]
    fn test_mode_waits_fall_through() {
        let def = ContextId::ExpectChordMode.def();
        assert!(def.is_fallthrough());
        assert_eq!(def.on_open, Some(OnOpen::Enter(ContextId::ChordMode)));
    }

    #[test]
    fn test_chord_mode_reuses_music_items() {
        assert_eq!(
            ContextId::ChordMode.def().candidates,
            ContextId::Music.def().candidates
        );
    }

    #[test]
    fn test_chord_catches_errors_first() {
        assert_eq!(
            ContextId::Chord.def().candidates[..2],
            [TokenKind::ErrorInChord, TokenKind::ChordEnd]
        );
    }
}
