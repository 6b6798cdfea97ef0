//! The closed set of token kinds
//!
//! Each kind answers four questions with a single match on the variant: how it is
//! recognised, which capabilities it has, which match tag it carries and what it does
//! to the context stack once emitted.

use super::capabilities::{Capabilities, MatchTag};
use super::patterns::{Guard, Recognizer};
use crate::ly::lexicon::Category;
use crate::ly::lexing::transitions::{self, Step};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! token_kinds {
    ($($kind:ident),+ $(,)?) => {
        /// All kinds of tokens the LilyPond lexer produces.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum TokenKind {
            $($kind),+
        }

        impl TokenKind {
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$kind),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$kind => stringify!($kind)),+
                }
            }
        }
    };
}

token_kinds! {
    // Generic
    Space,
    Unparsed,
    Error,

    // Comments
    Comment,
    LineComment,
    BlockCommentStart,
    BlockCommentEnd,
    BlockCommentSpace,

    // Strings
    String,
    StringQuotedStart,
    StringQuotedEnd,
    StringQuoteEscape,

    // Numbers
    DecimalValue,
    Fraction,

    // Notes and durations
    Skip,
    Rest,
    Note,
    Octave,
    Duration,
    Dot,
    Scaling,

    // Delimiters
    OpenBracket,
    CloseBracket,
    OpenSimultaneous,
    CloseSimultaneous,
    SequentialStart,
    SequentialEnd,
    SimultaneousStart,
    SimultaneousEnd,
    ChordStart,
    ChordEnd,
    ErrorInChord,
    VoiceSeparator,
    BarCheck,

    // Articulations
    Dynamic,
    Articulation,
    Direction,
    ScriptAbbreviation,

    // Slurs, ties, beams, ligatures
    SlurStart,
    SlurEnd,
    PhrasingSlurStart,
    PhrasingSlurEnd,
    Tie,
    BeamStart,
    BeamEnd,
    LigatureStart,
    LigatureEnd,

    // Commands
    Keyword,
    Command,
    UserCommand,
    Unit,

    // Block keywords
    Book,
    BookPart,
    Score,
    Paper,
    Header,
    Layout,
    Midi,
    With,
    LayoutContext,

    // Markup
    Markup,
    MarkupLines,
    MarkupCommand,
    MarkupScore,
    MarkupWord,
    OpenBracketMarkup,
    CloseBracketMarkup,

    // Repeats
    Repeat,
    RepeatSpecifier,
    RepeatStringSpecifier,
    RepeatCount,

    // Overrides and properties
    Override,
    Set,
    Revert,
    Unset,
    DotSetOverride,
    EqualSignSetOverride,

    // Contexts
    New,
    Context,
    Change,
    ContextName,
    BackSlashedContextName,
    GrobName,
    ContextProperty,

    // Clefs and block variables
    Clef,
    ClefSpecifier,
    PaperVariable,
    HeaderVariable,
    LayoutVariable,

    // Input modes
    LyricMode,
    NoteMode,
    ChordMode,
    DrumMode,
    FigureMode,

    // Lyrics
    LyricText,
    LyricHyphen,
    LyricExtender,
    LyricSkip,
    LyricTie,

    // Assignments
    Name,
    EqualSign,

    // Scheme
    SchemeStart,
    SchemeOpenParen,
    SchemeCloseParen,
    SchemeQuote,
    SchemeBool,
    SchemeChar,
    SchemeNumber,
    SchemeWord,
    SchemeComment,
    SchemeLilyPondStart,
    SchemeLilyPondEnd,
}

const ARTICULATION_WORDS: &[Category] = &[
    Category::Articulations,
    Category::Ornaments,
    Category::Fermatas,
    Category::InstrumentScripts,
    Category::RepeatScripts,
    Category::AncientScripts,
];

const DURATION: &str =
    r"\\(?:maxima|longa|breve)\b|(?:1024|2048|128|256|512|16|32|64|1|2|4|8)";

const DYNAMIC: &str = r"\\(?:f{1,5}|p{1,5}|mf|mp|fp|spp?|sff?|sfz|rfz)\b|\\[<!>]";

const ERROR_IN_CHORD: &str = r"[-_^][_.>|+^-]|<<|>>|\\[\\\]\[()]";

impl TokenKind {
    pub fn index(self) -> usize {
        self as usize
    }

    /// How this kind is recognised. Kinds only ever produced as a context default
    /// have no recognizer.
    pub fn recognizer(self) -> Option<Recognizer> {
        use TokenKind::*;
        let recognizer = match self {
            Unparsed | Error | Comment | String => return None,

            Space | BlockCommentSpace => Recognizer::regex(r"\s+"),
            LineComment => Recognizer::regex(r"%[^\n]*"),
            BlockCommentStart => Recognizer::regex(r"%\{"),
            BlockCommentEnd => Recognizer::regex(r"%\}"),

            StringQuotedStart | StringQuotedEnd => Recognizer::regex("\""),
            StringQuoteEscape => Recognizer::regex(r#"\\[\\"]"#),

            DecimalValue => Recognizer::regex(r"-?[0-9]+(?:\.[0-9]+)?"),
            Fraction => Recognizer::regex(r"[0-9]+/[0-9]+"),

            Skip => Recognizer::guarded(r"\\skip|s", Guard::NotLetter),
            Rest => Recognizer::guarded(r"[Rr]", Guard::NotLetter),
            Note => Recognizer::guarded(r"[a-z]+", Guard::NotLetter),
            Octave => Recognizer::regex(r"[',]+"),
            Duration => Recognizer::guarded(DURATION, Guard::NotDigit),
            Dot | DotSetOverride => Recognizer::regex(r"\."),
            Scaling => Recognizer::regex(r"\*[\t ]*[0-9]+(?:/[0-9]+)?"),

            OpenBracket | SequentialStart | OpenBracketMarkup => Recognizer::regex(r"\{"),
            CloseBracket | SequentialEnd | CloseBracketMarkup => Recognizer::regex(r"\}"),
            OpenSimultaneous | SimultaneousStart => Recognizer::regex("<<"),
            CloseSimultaneous | SimultaneousEnd => Recognizer::regex(">>"),
            ChordStart => Recognizer::regex("<"),
            ChordEnd => Recognizer::regex(">"),
            ErrorInChord => Recognizer::regex(ERROR_IN_CHORD),
            VoiceSeparator => Recognizer::regex(r"\\\\"),
            BarCheck => Recognizer::regex(r"\|"),

            Dynamic => Recognizer::regex(DYNAMIC),
            Articulation => Recognizer::commands(ARTICULATION_WORDS),
            Direction => Recognizer::regex(r"[-_^]"),
            ScriptAbbreviation => Recognizer::regex(r"[+|>._^-]"),

            SlurStart => Recognizer::regex(r"\("),
            SlurEnd => Recognizer::regex(r"\)"),
            PhrasingSlurStart => Recognizer::regex(r"\\\("),
            PhrasingSlurEnd => Recognizer::regex(r"\\\)"),
            Tie | LyricTie => Recognizer::regex("~"),
            BeamStart => Recognizer::regex(r"\["),
            BeamEnd => Recognizer::regex(r"\]"),
            LigatureStart => Recognizer::regex(r"\\\["),
            LigatureEnd => Recognizer::regex(r"\\\]"),

            Keyword => Recognizer::commands(&[Category::Keywords]),
            Command => Recognizer::commands(&[Category::MusicCommands]),
            UserCommand => Recognizer::guarded(r"\\[A-Za-z]+", Guard::NotLetter),
            Unit => Recognizer::regex(r"\\(?:mm|cm|in|pt)\b"),

            Book => Recognizer::regex(r"\\book\b"),
            BookPart => Recognizer::regex(r"\\bookpart\b"),
            Score | MarkupScore => Recognizer::regex(r"\\score\b"),
            Paper => Recognizer::regex(r"\\paper\b"),
            Header => Recognizer::regex(r"\\header\b"),
            Layout => Recognizer::regex(r"\\layout\b"),
            Midi => Recognizer::regex(r"\\midi\b"),
            With => Recognizer::regex(r"\\with\b"),
            LayoutContext | Context => Recognizer::regex(r"\\context\b"),

            Markup => Recognizer::guarded(r"\\markup", Guard::NotLetter),
            MarkupLines => Recognizer::guarded(r"\\markuplines", Guard::NotLetter),
            MarkupCommand => Recognizer::guarded(r"\\[A-Za-z]+(?:-[A-Za-z]+)*", Guard::NotLetter),
            MarkupWord => Recognizer::regex(r#"[^{}"\\\s#%]+"#),

            Repeat => Recognizer::guarded(r"\\repeat", Guard::NotLetter),
            RepeatSpecifier => Recognizer::Words {
                categories: &[Category::RepeatTypes],
                prefix: "",
                suffix: "",
                word_start: true,
                guard: Guard::NotLetter,
            },
            RepeatStringSpecifier => Recognizer::Words {
                categories: &[Category::RepeatTypes],
                prefix: "\"",
                suffix: "\"",
                word_start: false,
                guard: Guard::None,
            },
            RepeatCount => Recognizer::regex(r"[0-9]+"),

            Override => Recognizer::regex(r"\\override\b"),
            Set => Recognizer::regex(r"\\set\b"),
            Revert => Recognizer::regex(r"\\revert\b"),
            Unset => Recognizer::regex(r"\\unset\b"),
            EqualSignSetOverride | EqualSign => Recognizer::regex("="),

            New => Recognizer::regex(r"\\new\b"),
            Change => Recognizer::regex(r"\\change\b"),
            ContextName => Recognizer::bare_words(&[Category::Contexts]),
            BackSlashedContextName => Recognizer::Words {
                categories: &[Category::Contexts],
                prefix: r"\\",
                suffix: r"\b",
                word_start: false,
                guard: Guard::None,
            },
            GrobName => Recognizer::bare_words(&[Category::Grobs]),
            ContextProperty => Recognizer::bare_words(&[Category::ContextProperties]),

            Clef => Recognizer::guarded(r"\\clef", Guard::NotLetter),
            ClefSpecifier => Recognizer::bare_words(&[Category::Clefs]),
            PaperVariable => Recognizer::bare_words(&[Category::PaperVariables]),
            HeaderVariable => Recognizer::bare_words(&[Category::HeaderVariables]),
            LayoutVariable => Recognizer::bare_words(&[Category::LayoutVariables]),

            LyricMode => Recognizer::regex(r"\\(?:lyricmode|(?:(?:old)?add)?lyrics|lyricsto)\b"),
            NoteMode => Recognizer::regex(r"\\(?:notes|notemode)\b"),
            ChordMode => Recognizer::regex(r"\\(?:chords|chordmode)\b"),
            DrumMode => Recognizer::regex(r"\\(?:drums|drummode)\b"),
            FigureMode => Recognizer::regex(r"\\(?:figures|figuremode)\b"),

            LyricText => Recognizer::regex(r#"[^\\\s0-9~"]+"#),
            LyricHyphen => Recognizer::regex("--"),
            LyricExtender => Recognizer::regex("__"),
            LyricSkip => Recognizer::regex("_"),

            Name => Recognizer::guarded(r"[a-zA-Z]+", Guard::NotLetter),

            SchemeStart => Recognizer::regex(r"[#$]"),
            SchemeOpenParen => Recognizer::regex(r"\("),
            SchemeCloseParen => Recognizer::regex(r"\)"),
            SchemeQuote => Recognizer::regex(r"[',`]@?"),
            SchemeBool => Recognizer::regex(r"#(?:true|false|t|f)\b"),
            SchemeChar => Recognizer::regex(r"#\\(?:[A-Za-z]+|\S)"),
            SchemeNumber => Recognizer::regex(r"-?[0-9]+(?:\.[0-9]+|/[0-9]+)?\b"),
            SchemeWord => Recognizer::regex(r#"[^()\s'"`,;]+"#),
            SchemeComment => Recognizer::regex(r";[^\n]*"),
            // The `#` is optional: after a lone `#` the Scheme grammar sees only the `{`.
            SchemeLilyPondStart => Recognizer::regex(r"#?\{"),
            SchemeLilyPondEnd => Recognizer::regex(r"#\}"),
        };
        Some(recognizer)
    }

    pub fn capabilities(self) -> Capabilities {
        use Capabilities as C;
        use TokenKind::*;
        match self {
            Space => C::SPACE,
            BlockCommentSpace => C::COMMENT | C::SPACE,
            Comment | LineComment | SchemeComment => C::COMMENT,
            BlockCommentStart => C::COMMENT | C::INDENT,
            BlockCommentEnd => C::COMMENT | C::DEDENT | C::LEAVER,

            String | StringQuoteEscape | RepeatStringSpecifier => C::STRING,
            StringQuotedStart => C::STRING | C::STRING_START,
            StringQuotedEnd => C::STRING | C::STRING_END,

            DecimalValue | Fraction | SchemeNumber => C::NUMERIC,
            RepeatCount => C::NUMERIC | C::LEAVER,

            Error | ErrorInChord => C::ERROR,

            OpenBracket | OpenBracketMarkup | SequentialStart | OpenSimultaneous
            | SimultaneousStart => C::MATCH_START | C::INDENT,
            CloseBracket | CloseBracketMarkup | SequentialEnd | CloseSimultaneous
            | SimultaneousEnd => C::MATCH_END | C::DEDENT,

            SlurStart | PhrasingSlurStart | BeamStart | LigatureStart => C::MATCH_START,
            SlurEnd | PhrasingSlurEnd | BeamEnd | LigatureEnd => C::MATCH_END,

            ChordEnd | ScriptAbbreviation => C::LEAVER,

            SchemeOpenParen | SchemeLilyPondStart => C::INDENT,
            SchemeCloseParen | SchemeLilyPondEnd => C::DEDENT,

            _ => C::NONE,
        }
    }

    pub fn match_tag(self) -> Option<MatchTag> {
        use TokenKind::*;
        match self {
            OpenBracket | CloseBracket | OpenBracketMarkup | CloseBracketMarkup
            | SequentialStart | SequentialEnd => Some(MatchTag::Bracket),
            OpenSimultaneous | CloseSimultaneous | SimultaneousStart | SimultaneousEnd => {
                Some(MatchTag::Simultaneous)
            }
            SlurStart | SlurEnd => Some(MatchTag::Slur),
            PhrasingSlurStart | PhrasingSlurEnd => Some(MatchTag::PhrasingSlur),
            BeamStart | BeamEnd => Some(MatchTag::Beam),
            LigatureStart | LigatureEnd => Some(MatchTag::Ligature),
            _ => None,
        }
    }

    /// Stack mutations applied after a token of this kind is emitted.
    pub fn transition(self) -> &'static [Step] {
        transitions::steps(self)
    }

    pub fn is_space(self) -> bool {
        self.capabilities().contains(Capabilities::SPACE)
    }

    pub fn is_comment(self) -> bool {
        self.capabilities().contains(Capabilities::COMMENT)
    }

    pub fn is_error(self) -> bool {
        self.capabilities().contains(Capabilities::ERROR)
    }

    pub fn is_numeric(self) -> bool {
        self.capabilities().contains(Capabilities::NUMERIC)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (index, kind) in TokenKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), index, "{kind}");
        }
    }

    #[test]
    fn test_only_default_kinds_lack_recognizers() {
        let missing: Vec<_> = TokenKind::ALL
            .iter()
            .filter(|kind| kind.recognizer().is_none())
            .collect();
        assert_eq!(
            missing,
            vec![
                &TokenKind::Unparsed,
                &TokenKind::Error,
                &TokenKind::Comment,
                &TokenKind::String
            ]
        );
    }

    #[test]
    fn test_match_tags_only_on_match_capable_kinds() {
        for kind in TokenKind::ALL {
            let caps = kind.capabilities();
            let delimits =
                caps.contains(Capabilities::MATCH_START) || caps.contains(Capabilities::MATCH_END);
            assert_eq!(kind.match_tag().is_some(), delimits, "{kind}");
        }
    }

    #[test]
    fn test_leavers_start_with_leave() {
        for kind in TokenKind::ALL {
            if kind.capabilities().contains(Capabilities::LEAVER) {
                assert_eq!(kind.transition().first(), Some(&Step::Leave), "{kind}");
            }
        }
    }

    #[test]
    fn test_block_comment_end_is_comment_dedent_leaver() {
        let caps = TokenKind::BlockCommentEnd.capabilities();
        assert!(caps.contains(Capabilities::COMMENT | Capabilities::DEDENT | Capabilities::LEAVER));
    }

    #[test]
    fn test_name_and_serde_agree() {
        let json = serde_json::to_string(&TokenKind::MarkupCommand).unwrap();
        assert_eq!(json, format!("\"{}\"", TokenKind::MarkupCommand.name()));
    }
}
