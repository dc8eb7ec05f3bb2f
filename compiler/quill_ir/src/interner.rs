//! String interning for identifiers.
//!
//! The parser interns every identifier once. Checking then runs on several
//! threads that only read names back, so the table sits behind a single
//! `RwLock` that is almost always taken for reading.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;

use crate::Name;

/// Type and keyword spellings, interned up front so the parser's hot
/// lookups never take the write lock.
const PREINTERNED: &[&str] = &[
    "function", "returns", "let", "pure", "view", "payable", "suffix", "internal", "external",
    "public", "private", "memory", "storage", "calldata", "true", "false", "bool", "address",
    "bytes", "string", "uint", "int",
];

/// The interner ran out of 32-bit indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternError {
    pub count: usize,
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "string interner is full ({} strings)", self.count)
    }
}

impl std::error::Error for InternError {}

#[derive(Default)]
struct Table {
    by_text: FxHashMap<&'static str, Name>,
    texts: Vec<&'static str>,
}

/// Thread-safe string interner.
///
/// Interned strings are leaked and live for the rest of the process, which
/// lets [`StringInterner::lookup`] hand out `&'static str` without holding
/// the lock.
pub struct StringInterner {
    table: RwLock<Table>,
}

impl StringInterner {
    pub fn new() -> Self {
        let interner = StringInterner {
            table: RwLock::new(Table::default()),
        };
        interner.intern("");
        for word in PREINTERNED {
            interner.intern(word);
        }
        interner
    }

    pub fn try_intern(&self, text: &str) -> Result<Name, InternError> {
        if let Some(name) = self.get(text) {
            return Ok(name);
        }

        let mut table = self.table.write();
        // Raced with another writer between the locks.
        if let Some(&name) = table.by_text.get(text) {
            return Ok(name);
        }
        let count = table.texts.len();
        let raw = u32::try_from(count).map_err(|_| InternError { count })?;
        let name = Name::from_raw(raw);
        let text: &'static str = Box::leak(Box::<str>::from(text));
        table.texts.push(text);
        table.by_text.insert(text, name);
        Ok(name)
    }

    /// Intern `text`.
    ///
    /// # Panics
    /// Panics once 2^32 distinct strings are interned. Sources are capped
    /// below 4 GiB, so a single compilation never gets there.
    #[inline]
    pub fn intern(&self, text: &str) -> Name {
        self.try_intern(text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Find an interned string without interning it.
    pub fn get(&self, text: &str) -> Option<Name> {
        self.table.read().by_text.get(text).copied()
    }

    /// Text of `name`, or `<unknown>` for a name from another interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .texts
            .get(name.index())
            .copied()
            .unwrap_or("<unknown>")
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
