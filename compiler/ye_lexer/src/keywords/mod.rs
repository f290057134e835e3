//! Reserved-word table.
//!
//! The table is plain data handed to [`crate::lex_with`], so two lexing runs
//! with different tables never observe each other.

use ye_ir::Keyword;


/// The set of words the lexer classifies as [`ye_ir::TokenKind::Keyword`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordTable {
    reserved: Vec<Keyword>,
}

impl KeywordTable {
    pub fn new(reserved: impl IntoIterator<Item = Keyword>) -> Self {
        let mut table = KeywordTable {
            reserved: Vec::new(),
        };
        for keyword in reserved {
            table.reserve(keyword);
        }
        table
    }

    /// Table with no reserved words; every word lexes as an identifier.
    pub fn empty() -> Self {
        KeywordTable {
            reserved: Vec::new(),
        }
    }

    pub fn reserve(&mut self, keyword: Keyword) {
        if !self.reserved.contains(&keyword) {
            self.reserved.push(keyword);
        }
    }

    #[must_use]
    pub fn without(mut self, keyword: Keyword) -> Self {
        self.reserved.retain(|k| *k != keyword);
        self
    }

    /// Resolve `word` to a keyword if it is reserved in this table.
    #[inline]
    pub fn lookup(&self, word: &str) -> Option<Keyword> {
        self.reserved.iter().copied().find(|k| k.as_str() == word)
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Keyword> + '_ {
        self.reserved.iter().copied()
    }
}

impl Default for KeywordTable {
    /// `ye`, `de`, `if`.
    fn default() -> Self {
        KeywordTable::new(Keyword::ALL)
    }
}
