//! Consistency checks over the context catalogue and the token table

use lylex::ly::error::LexError;
use lylex::ly::grammar::{ContextId, Fallthrough, OnOpen};
use lylex::ly::lexing::{ContextStack, Lexer, Step};
use lylex::ly::token::{Capabilities, TokenKind};

#[test]
fn test_every_candidate_is_recognisable() {
    let patterns = Lexer::shared().patterns();
    for id in ContextId::ALL {
        for kind in &id.def().candidates {
            assert!(
                patterns.get(*kind).is_some(),
                "{} lists {} which has no recognizer",
                id,
                kind
            );
        }
    }
}

#[test]
fn test_fallthrough_targets_are_not_roots() {
    for id in ContextId::ALL {
        if let Some(Fallthrough::Replace(next)) = id.def().fallthrough {
            assert!(next.def().is_fallthrough(), "{} falls through into {}", id, next);
        }
        if id.def().is_fallthrough() {
            assert!(!id.can_be_root(), "{} falls through but can be root", id);
        }
    }
}

#[test]
fn test_contexts_with_an_opening_rule_accept_a_bracket() {
    for id in ContextId::ALL {
        if id.def().on_open.is_some() {
            assert!(
                id.def().candidates.contains(&TokenKind::OpenBracket),
                "{} has an opening rule but never sees a plain bracket",
                id
            );
        }
    }
}

#[test]
fn test_block_waits_replace_themselves() {
    for id in ContextId::ALL {
        if let Some(OnOpen::Replace(body)) = id.def().on_open {
            assert!(id.is_block_wait());
            assert!(body.def().candidates.contains(&TokenKind::CloseBracket));
            assert_eq!(id.def().default, TokenKind::Error);
        }
    }
}

#[test]
fn test_leavers_leave() {
    for kind in TokenKind::ALL {
        if kind.capabilities().contains(Capabilities::LEAVER) {
            assert_eq!(
                kind.transition().first(),
                Some(&Step::Leave),
                "{} is a leaver",
                kind
            );
        }
    }
}

#[test]
fn test_root_validation() {
    assert!(ContextStack::with_root(ContextId::Toplevel).is_ok());
    assert!(matches!(
        ContextStack::with_root(ContextId::Duration),
        Err(LexError::InvalidRoot(ContextId::Duration))
    ));
    assert!(matches!(
        ContextStack::with_root(ContextId::ExpectHeader),
        Err(LexError::InvalidRoot(ContextId::ExpectHeader))
    ));
    assert!(matches!(
        ContextStack::from_frames(Vec::new()),
        Err(LexError::EmptyStack)
    ));
}
