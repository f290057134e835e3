//! Parser tests over lexed source.
