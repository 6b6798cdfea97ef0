//! Post-match transitions
//!
//! After a token is emitted the engine runs its kind's steps, in order, against the live
//! stack. Steps are plain data; [`apply`] is the single dispatch that interprets them.

use super::scheme;
use super::stack::{Context, ContextStack};
use crate::ly::grammar::{ContextId, OnOpen};
use crate::ly::lexicon::Lexicon;
use crate::ly::token::TokenKind;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Push a fresh frame of the context.
    Enter(ContextId),
    /// Push a frame expecting the given number of arguments.
    EnterWithArguments(ContextId, u32),
    /// Pop the top frame (never the bottom one).
    Leave,
    /// One pending argument is complete, see [`ContextStack::end_argument`].
    EndArgument,
    /// A plain `{` or `<<`: run the top frame's opening rule, if it has one.
    OpenBody,
    /// Push a markup frame for the command's declared arguments.
    MarkupArguments,
    /// Wait for exactly one more argument in the top frame.
    ExpectArgument,
    /// Enter the Scheme sub-lexer for one expression.
    SchemeExpression,
}

use ContextId as C;
use Step::*;

/// The steps run after a token of `kind` is emitted.
pub fn steps(kind: TokenKind) -> &'static [Step] {
    use TokenKind as K;
    match kind {
        K::BlockCommentStart => &[Enter(C::BlockComment)],
        K::BlockCommentEnd => &[Leave],

        K::StringQuotedStart => &[Enter(C::String)],
        K::StringQuotedEnd => &[Leave, EndArgument],

        K::Duration => &[Enter(C::Duration)],

        K::OpenBracket | K::OpenSimultaneous => &[OpenBody],
        K::CloseBracket | K::CloseSimultaneous | K::SequentialEnd | K::SimultaneousEnd => {
            &[Leave, EndArgument]
        }
        K::SequentialStart | K::SimultaneousStart => &[Enter(C::Music)],
        K::ChordStart => &[Enter(C::Chord)],
        K::ChordEnd => &[Leave],

        K::Direction => &[Enter(C::ScriptAbbreviation)],
        K::ScriptAbbreviation => &[Leave],

        K::Book => &[Enter(C::ExpectBook)],
        K::BookPart => &[Enter(C::ExpectBookPart)],
        K::Score | K::MarkupScore => &[Enter(C::ExpectScore)],
        K::Paper => &[Enter(C::ExpectPaper)],
        K::Header => &[Enter(C::ExpectHeader)],
        K::Layout => &[Enter(C::ExpectLayout)],
        K::Midi => &[Enter(C::ExpectMidi)],
        K::With => &[Enter(C::ExpectWith)],
        K::LayoutContext => &[Enter(C::ExpectContext)],

        K::Markup | K::MarkupLines => &[EnterWithArguments(C::Markup, 1)],
        K::MarkupCommand => &[MarkupArguments],
        K::MarkupWord => &[EndArgument],
        K::OpenBracketMarkup => &[Enter(C::Markup)],
        K::CloseBracketMarkup => &[EndArgument, Leave, EndArgument],

        K::Repeat => &[Enter(C::Repeat)],
        K::RepeatCount => &[Leave],

        K::Override => &[Enter(C::Override)],
        K::Set => &[Enter(C::Set)],
        K::Revert => &[Enter(C::Revert)],
        K::Unset => &[Enter(C::Unset)],
        K::EqualSignSetOverride => &[ExpectArgument],

        K::New | K::Context | K::Change => &[Enter(C::NewContext)],

        K::Clef => &[Enter(C::Clef)],
        K::ClefSpecifier => &[EndArgument],

        K::LyricMode => &[Enter(C::ExpectLyricMode)],
        K::NoteMode => &[Enter(C::ExpectNoteMode)],
        K::ChordMode => &[Enter(C::ExpectChordMode)],
        K::DrumMode => &[Enter(C::ExpectDrumMode)],
        K::FigureMode => &[Enter(C::ExpectFigureMode)],

        K::SchemeStart => &[SchemeExpression],
        K::SchemeOpenParen => &[Enter(C::SchemeList)],
        K::SchemeCloseParen => &[Leave, EndArgument],
        K::SchemeBool | K::SchemeChar | K::SchemeNumber | K::SchemeWord => &[EndArgument],
        K::SchemeLilyPondStart => &[Enter(C::SchemeLilyPond)],
        K::SchemeLilyPondEnd => &[Leave, EndArgument],

        _ => &[],
    }
}

/// Run one step against the stack. `text` is the matched text of the token.
pub fn apply(step: Step, text: &str, stack: &mut ContextStack, lexicon: &dyn Lexicon) {
    match step {
        Enter(id) => stack.enter(Context::new(id)),
        EnterWithArguments(id, argcount) => stack.enter(Context::with_arguments(id, argcount)),
        Leave => {
            stack.leave();
        }
        EndArgument => stack.end_argument(),
        OpenBody => match stack.top().def().on_open {
            Some(OnOpen::Replace(body)) => stack.replace(Context::new(body)),
            Some(OnOpen::Enter(body)) => stack.enter(Context::new(body)),
            None => {}
        },
        MarkupArguments => {
            let command = text.trim_start_matches('\\');
            let arity = lexicon.markup_arity(command);
            trace!("markup command {command} takes {arity} argument(s)");
            if arity == 0 {
                stack.end_argument();
            } else {
                stack.enter(Context::with_arguments(C::Markup, u32::from(arity)));
            }
        }
        ExpectArgument => stack.current_context_mut().argcount = 1,
        SchemeExpression => stack.enter(scheme::enter_subexpression(1)),
    }
}

/// Run all steps of a token kind.
pub fn run(kind: TokenKind, text: &str, stack: &mut ContextStack, lexicon: &dyn Lexicon) {
    for step in steps(kind) {
        apply(*step, text, stack, lexicon);
    }
}
