//! Error codes for all compiler diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E2002`) with the first digit
//! indicating the compiler phase. Used for `quillc explain` lookups.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer and literal errors
/// - E1xxx: Parser errors
/// - E2xxx: Suffix resolution and expression type errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal or block comment
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Identifier directly follows a number literal
    E0004,
    /// Invalid escape sequence or hex string contents
    E0005,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,

    // Suffix and Type Errors (E2xxx)
    /// No suffix function accepts the literal
    E2001,
    /// Ambiguous compact suffix call
    E2002,
    /// Fractional literal given to a one-parameter suffix
    E2003,
    /// Literal value out of range for the parameter type
    E2004,
    /// Invalid suffix function declaration
    E2005,
    /// Suffix applied to something other than a literal
    E2006,
    /// Unknown function
    E2007,
    /// No overload matches the explicit call
    E2008,
    /// Ambiguous explicit call
    E2009,
    /// Negation of an unsigned or non-numeric value
    E2010,
    /// Operand type mismatch
    E2011,
    /// Argument count mismatch
    E2012,
}

impl ErrorCode {
    /// All error codes, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
        ErrorCode::E2010,
        ErrorCode::E2011,
        ErrorCode::E2012,
    ];

    /// Get the code as a string (e.g., "E2001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
            ErrorCode::E2012 => "E2012",
        }
    }

    /// Longer explanation shown by `quillc explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A string literal is missing its closing quote, or a `/*` block \
                 comment is never closed."
            }
            ErrorCode::E0002 => "The source contains a character that cannot start any token.",
            ErrorCode::E0003 => {
                "A number literal is malformed: misplaced `_`, an empty exponent, a \
                 missing digit after `.`, or an exponent too large to evaluate exactly."
            }
            ErrorCode::E0004 => {
                "A number literal is immediately followed by an identifier. Compact \
                 suffix calls on numbers need whitespace: write `1.5 km`, not `1.5km`."
            }
            ErrorCode::E0005 => {
                "A string literal contains an unknown escape, or a `hex\"...\"` literal \
                 contains an odd number of digits or a non-hex character."
            }
            ErrorCode::E1001 => "The parser found a token it did not expect here.",
            ErrorCode::E1002 => "An expression was expected here.",
            ErrorCode::E2001 => {
                "No `pure suffix` function with this name accepts the literal's kind. \
                 Functions without the `suffix` marker are never considered for \
                 compact calls."
            }
            ErrorCode::E2002 => {
                "More than one suffix function with this name accepts the literal. \
                 Compact suffix calls never pick an overload by trying the literal's \
                 value; call the function explicitly instead."
            }
            ErrorCode::E2003 => {
                "A fractional literal was given to a suffix with a single parameter. \
                 Declare a two-parameter suffix `(mantissa, exponent)` to accept \
                 fractional literals."
            }
            ErrorCode::E2004 => {
                "The literal (or its mantissa or exponent) does not fit the declared \
                 parameter type."
            }
            ErrorCode::E2005 => {
                "A suffix function must be a pure free function with one or two \
                 parameters. With two parameters the first must be an integer and \
                 the second unsigned. Parameters and return values may not live in \
                 `storage` or `calldata`, and parameters may not be `address payable`."
            }
            ErrorCode::E2006 => {
                "Compact suffix syntax applies only to a literal. The result of a \
                 suffix call is an ordinary value and cannot take another suffix."
            }
            ErrorCode::E2007 => "No function with this name is declared.",
            ErrorCode::E2008 => "No overload of this function accepts the given arguments.",
            ErrorCode::E2009 => "More than one overload accepts the given arguments.",
            ErrorCode::E2010 => {
                "Unary minus applies to numeric literals and signed integer values. \
                 It cannot negate an unsigned value or a non-numeric literal."
            }
            ErrorCode::E2011 => "The operands of this operator have incompatible types.",
            ErrorCode::E2012 => "The call passes the wrong number of arguments.",
        }
    }

    /// Check if this is a lexer error (E0xxx).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a type error (E2xxx).
    pub fn is_type_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
