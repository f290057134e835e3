//! Lexer for ye using logos.
//!
//! Scanning happens in two layers: logos cuts the source into raw words,
//! digit runs, operator and punctuation characters, and a cooking step
//! classifies each raw token into one of the five [`TokenKind`] classes.
//! Keyword resolution is driven by a caller-supplied [`KeywordTable`].
//!
//! The word `is` on its own is the comparison operator. Words that only
//! start with `is` (`island`, `is_set`) stay identifiers, because logos
//! always takes the longest word before cooking sees it.

mod keywords;
mod lex_error;

pub use keywords::KeywordTable;
pub use lex_error::LexError;

use logos::Logos;
use tracing::{debug, instrument, trace};
use ye_ir::{Span, Token, TokenKind, TokenList};


/// Raw token from logos (before keyword classification).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0C]+")]
enum RawToken {
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,

    #[regex(r"[0-9]+")]
    Digits,

    #[token("=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    Operator,

    #[token("(")]
    #[token(")")]
    #[token(";")]
    #[token("{")]
    #[token("}")]
    Punctuation,
}

/// Word spelled like an operator rather than an identifier.
const WORD_OPERATOR_IS: &str = "is";

/// Lex `source` with the default keyword table (`ye`, `de`, `if`).
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    lex_with(source, &KeywordTable::default())
}

/// Lex `source`, classifying words with `keywords`.
///
/// Stops at the first unrecognized character, or at the first token past
/// the 4 GiB offset limit; no partial token list is returned.
#[instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex_with(source: &str, keywords: &KeywordTable) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(raw) = logos.next() {
        let range = logos.span();
        let Ok(raw) = raw else {
            return Err(unrecognized_at(source, range.start));
        };

        let text = logos.slice();
        let kind = cook(raw, text, keywords);
        let span = token_span(range)?;
        trace!(%kind, text, start = span.start, "token");
        tokens.push(Token::new(kind, text, span));
    }

    debug!(count = tokens.len(), "lexed");
    Ok(tokens)
}

/// Classify a raw token.
fn cook(raw: RawToken, text: &str, keywords: &KeywordTable) -> TokenKind {
    match raw {
        RawToken::Word if keywords.lookup(text).is_some() => TokenKind::Keyword,
        RawToken::Word if text == WORD_OPERATOR_IS => TokenKind::Operator,
        RawToken::Word => TokenKind::Identifier,
        RawToken::Digits => TokenKind::Number,
        RawToken::Operator => TokenKind::Operator,
        RawToken::Punctuation => TokenKind::Punctuation,
    }
}

/// Span for a logos range; offsets are capped at `u32::MAX`.
fn token_span(range: std::ops::Range<usize>) -> Result<Span, LexError> {
    let offset = range.end;
    Span::try_from_range(range).map_err(|_| {
        debug!(offset, "source exceeds span range");
        LexError::SourceTooLarge { offset }
    })
}

#[cold]
fn unrecognized_at(source: &str, offset: usize) -> LexError {
    let character = source
        .get(offset..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    let position = u32::try_from(offset).unwrap_or(u32::MAX);
    debug!(?character, position, "unrecognized character");
    LexError::unrecognized(character, position)
}
