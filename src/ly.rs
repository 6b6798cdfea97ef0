//! Main module for lylex library functionality

pub mod config;
pub mod document;
pub mod error;
pub mod grammar;
pub mod indentation;
pub mod lexicon;
pub mod lexing;
pub mod testing;
pub mod token;
