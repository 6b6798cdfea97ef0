//! End-to-end lexing scenarios
//!
//! Each case lexes a short LilyPond fragment from the toplevel context and checks the
//! token kinds (whitespace skipped), that the stream covers the input and that the
//! stack is back at the toplevel afterwards.

use lylex::ly::grammar::ContextId;
use lylex::ly::lexing::{ContextStack, Lexer};
use lylex::ly::testing::assert_tokens;
use lylex::ly::token::{Capabilities, MatchTag, NumericValue, TokenKind as K};
use rstest::rstest;

#[rstest]
#[case::sequential_music(
    "{ c4 d8 }",
    &[K::SequentialStart, K::Note, K::Duration, K::Note, K::Duration, K::SequentialEnd]
)]
#[case::chord(
    "{ <c e g>2 }",
    &[K::SequentialStart, K::ChordStart, K::Note, K::Note, K::Note, K::ChordEnd, K::Duration, K::SequentialEnd]
)]
#[case::relative_with_octave(
    r"{ \relative c' { c4 } }",
    &[
        K::SequentialStart, K::Command, K::Note, K::Octave, K::SequentialStart, K::Note,
        K::Duration, K::SequentialEnd, K::SequentialEnd,
    ]
)]
#[case::dotted_duration(
    "{ c4. }",
    &[K::SequentialStart, K::Note, K::Duration, K::Dot, K::SequentialEnd]
)]
#[case::script_abbreviation(
    "{ c4-. }",
    &[K::SequentialStart, K::Note, K::Duration, K::Direction, K::ScriptAbbreviation, K::SequentialEnd]
)]
#[case::named_articulation(
    r"{ c\staccato }",
    &[K::SequentialStart, K::Note, K::Articulation, K::SequentialEnd]
)]
#[case::dynamic(
    r"{ c\ff }",
    &[K::SequentialStart, K::Note, K::Dynamic, K::SequentialEnd]
)]
#[case::slur_and_beam(
    "{ c8( [d] e) }",
    &[
        K::SequentialStart, K::Note, K::Duration, K::SlurStart, K::BeamStart, K::Note,
        K::BeamEnd, K::Note, K::SlurEnd, K::SequentialEnd,
    ]
)]
#[case::repeat(
    r"{ \repeat volta 2 { c } }",
    &[
        K::SequentialStart, K::Repeat, K::RepeatSpecifier, K::RepeatCount, K::SequentialStart,
        K::Note, K::SequentialEnd, K::SequentialEnd,
    ]
)]
#[case::clef(
    r"{ \clef treble c }",
    &[K::SequentialStart, K::Clef, K::ClefSpecifier, K::Note, K::SequentialEnd]
)]
#[case::header_block(
    r#"\header { title = "x" }"#,
    &[
        K::Header, K::OpenBracket, K::HeaderVariable, K::EqualSign, K::StringQuotedStart,
        K::String, K::StringQuotedEnd, K::CloseBracket,
    ]
)]
#[case::score_with_staff(
    r"\score { \new Staff { c4 } }",
    &[
        K::Score, K::OpenBracket, K::New, K::ContextName, K::SequentialStart, K::Note,
        K::Duration, K::SequentialEnd, K::CloseBracket,
    ]
)]
#[case::markup_word("\\markup \\bold foo", &[K::Markup, K::MarkupCommand, K::MarkupWord])]
#[case::markup_braces(
    r"\markup { a b }",
    &[K::Markup, K::OpenBracketMarkup, K::MarkupWord, K::MarkupWord, K::CloseBracketMarkup]
)]
#[case::markup_scheme_argument(
    r"\markup \with-color #red foo",
    &[K::Markup, K::MarkupCommand, K::SchemeStart, K::SchemeWord, K::MarkupWord]
)]
#[case::override_property(
    r"\override Staff.NoteHead.color = #red",
    &[
        K::Override, K::ContextName, K::DotSetOverride, K::GrobName, K::DotSetOverride,
        K::Name, K::EqualSignSetOverride, K::SchemeStart, K::SchemeWord,
    ]
)]
#[case::lyrics(
    r"\lyricmode { la -- la }",
    &[K::LyricMode, K::OpenBracket, K::LyricText, K::LyricHyphen, K::LyricText, K::CloseBracket]
)]
#[case::version(
    r#"\version "2.24.0""#,
    &[K::Keyword, K::StringQuotedStart, K::String, K::StringQuotedEnd]
)]
#[case::block_comment("%{ x %}", &[K::BlockCommentStart, K::BlockCommentSpace, K::Comment, K::BlockCommentSpace, K::BlockCommentEnd])]
#[case::line_comment("% just a remark", &[K::LineComment])]
fn test_fragment_kinds(#[case] input: &str, #[case] expected: &[K]) {
    assert_tokens(input)
        .covers_input()
        .balanced_match_tags()
        .returns_to_start()
        .skipping_space()
        .kinds(expected);
}

#[test]
fn test_command_prefix_is_not_a_keyword_match() {
    assert_tokens(r"\repeated")
        .kinds(&[K::UserCommand])
        .token(0, |t| {
            t.text(r"\repeated");
        });
}

#[test]
fn test_string_escapes() {
    assert_tokens(r#""a\"b""#).texts(&[
        (K::StringQuotedStart, "\""),
        (K::String, "a"),
        (K::StringQuoteEscape, "\\\""),
        (K::String, "b"),
        (K::StringQuotedEnd, "\""),
    ]);
}

#[test]
fn test_unterminated_string_leaves_string_context_open() {
    assert_tokens("\"abc")
        .covers_input()
        .final_depth(2)
        .final_top(ContextId::String);
}

#[test]
fn test_disallowed_chord_content_is_an_error() {
    assert_tokens("{ <c -. e> }")
        .covers_input()
        .skipping_space()
        .token(3, |t| {
            t.kind(K::ErrorInChord).text("-.").has(Capabilities::ERROR);
        })
        .returns_to_start();
}

#[test]
fn test_block_keyword_waits_for_its_bracket() {
    assert_tokens(r"\header x {")
        .covers_input()
        .skipping_space()
        .kinds(&[K::Header, K::Error, K::OpenBracket])
        .final_top(ContextId::Header)
        .final_depth(2);
}

#[test]
fn test_block_wait_survives_end_of_input() {
    assert_tokens(r"\score")
        .final_top(ContextId::ExpectScore)
        .final_depth(2);
}

#[test]
fn test_fallthrough_contexts_unwind_at_end_of_input() {
    assert_tokens(r"\new Staff")
        .skipping_space()
        .kinds(&[K::New, K::ContextName])
        .returns_to_start();
}

#[test]
fn test_match_tags_of_music_delimiters() {
    assert_tokens("<< { c } >>")
        .balanced_match_tags()
        .skipping_space()
        .token(0, |t| {
            t.kind(K::SimultaneousStart)
                .match_tag(Some(MatchTag::Simultaneous))
                .has(Capabilities::INDENT);
        })
        .token(1, |t| {
            t.kind(K::SequentialStart).match_tag(Some(MatchTag::Bracket));
        })
        .token(4, |t| {
            t.kind(K::SimultaneousEnd).has(Capabilities::DEDENT);
        });
}

#[test]
fn test_numeric_value_of_fraction() {
    let lexed = assert_tokens(r"\time 3/4").into_lexed();
    let fraction = lexed
        .tokens
        .iter()
        .find(|t| t.kind == K::Fraction)
        .expect("a fraction token");
    assert_eq!(fraction.text, "3/4");
    assert!(fraction.numeric().is_some());
}

#[test]
fn test_scheme_fraction_keeps_its_sign() {
    assert_tokens("#-1/2").token(1, |t| {
        t.kind(K::SchemeNumber).text("-1/2");
    });
    let lexed = assert_tokens("#-1/2").into_lexed();
    let value = lexed.tokens[1].numeric().expect("a numeric value");
    assert_eq!(
        value,
        NumericValue::Fraction {
            numerator: -1,
            denominator: 2
        }
    );
    assert_eq!(value.as_f64(), -0.5);
}

#[test]
fn test_decimal_value_is_exact() {
    let lexed = assert_tokens("#0.3").into_lexed();
    assert_eq!(lexed.tokens[1].numeric(), Some(NumericValue::Decimal(0.3)));
}

#[test]
fn test_relative_block_from_toplevel() {
    assert_tokens(r"\relative { c4 d e f }")
        .skipping_space()
        .kinds(&[
            K::Command,
            K::SequentialStart,
            K::Note,
            K::Duration,
            K::Note,
            K::Note,
            K::Note,
            K::SequentialEnd,
        ])
        .token(1, |t| {
            t.match_tag(Some(MatchTag::Bracket)).has(Capabilities::MATCH_START);
        })
        .token(7, |t| {
            t.match_tag(Some(MatchTag::Bracket)).has(Capabilities::MATCH_END);
        })
        .returns_to_start();
}

#[test]
fn test_markup_string_argument_closes_markup() {
    assert_tokens(r#"\markup { "x" }"#)
        .skipping_space()
        .kinds(&[
            K::Markup,
            K::OpenBracketMarkup,
            K::StringQuotedStart,
            K::String,
            K::StringQuotedEnd,
            K::CloseBracketMarkup,
        ])
        .returns_to_start();
}

#[test]
fn test_markup_arguments_count_down() {
    let lexer = Lexer::shared();
    let mut tokens = lexer.tokenize(r"\markup \put-adjacent a b c", ContextStack::new());
    let mut depths = Vec::new();
    while let Some(token) = tokens.next() {
        if token.kind == K::MarkupWord {
            depths.push(tokens.stack().depth());
        }
    }
    assert_eq!(depths, vec![3, 3, 1]);
    assert_eq!(tokens.stack(), &ContextStack::new());
}

#[test]
fn test_repeat_count_leaves_before_the_body() {
    let lexer = Lexer::shared();
    let mut tokens = lexer.tokenize(r"\repeat volta 2 { c4 }", ContextStack::new());
    let count = tokens
        .by_ref()
        .find(|token| token.kind == K::RepeatCount)
        .expect("a repeat count");
    assert_eq!(count.text, "2");
    assert!(count.capabilities().contains(Capabilities::LEAVER));
    assert!(tokens.stack().is_at_root());

    let rest: Vec<K> = tokens.filter(|t| !t.kind.is_space()).map(|t| t.kind).collect();
    assert_eq!(
        rest,
        vec![K::SequentialStart, K::Note, K::Duration, K::SequentialEnd]
    );
}
