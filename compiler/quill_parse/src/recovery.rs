//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after
//! errors. Uses bitset-based O(1) membership testing.

use crate::cursor::Cursor;
use crate::TokenKind;

/// A set of token kinds, one bit per `TokenKind` discriminant index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a discriminant tag to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with_tag(self, tag: u8) -> Self {
        Self(self.0 | (1u64 << tag))
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokens that start a top-level item.
pub const ITEM_START: TokenSet = TokenSet::new()
    .with_tag(TokenKind::TAG_FUNCTION)
    .with_tag(TokenKind::TAG_LET);

/// Skip tokens until one in `set` (not consumed) or past a `;` (consumed).
///
/// Returns `true` if a synchronization point was found before EOF.
pub fn synchronize(cursor: &mut Cursor<'_>, set: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if set.contains(cursor.current_kind()) {
            return true;
        }
        if cursor.eat(&TokenKind::Semi) {
            return true;
        }
        cursor.advance();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_test_membership_by_kind() {
        assert!(ITEM_START.contains(&TokenKind::Function));
        assert!(ITEM_START.contains(&TokenKind::Let));
        assert!(!ITEM_START.contains(&TokenKind::Semi));
        assert!(TokenSet::new().is_empty());
    }
}
