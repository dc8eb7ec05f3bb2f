//! Lexer for Quill using logos with string interning.
//!
//! Two layers:
//! - `RawToken` (logos) recognizes token shapes, including unterminated
//!   strings and comments so they can be reported precisely.
//! - cooking turns raw tokens into [`TokenKind`]s: escapes and hex strings
//!   are decoded, identifiers interned, numbers glued to identifiers
//!   rejected, and adjacent string literals of one family merged.
//!
//! Number text is kept verbatim. Evaluating it is the literal classifier's
//! job, so `1.5e` lexes fine and is rejected later as a malformed number.

use logos::Logos;
use quill_ir::{LiteralToken, LiteralTokenKind, Span, StringInterner};

use crate::{LexError, LexErrorKind, Token, TokenKind};

/// Raw token from logos (before cooking).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,
    #[token("/*")]
    UnterminatedComment,

    // `5.` and `1e` are accepted here and rejected by classification.
    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE]-?[0-9_]*)?")]
    #[regex(r"\.[0-9][0-9_]*([eE]-?[0-9_]*)?")]
    Number,
    #[regex(r"0x[0-9a-fA-F_]*")]
    HexNumber,

    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    #[regex(r"'([^'\\\n\r]|\\.)*'")]
    String,
    #[regex(r#"unicode"([^"\\\n\r]|\\.)*""#)]
    #[regex(r"unicode'([^'\\\n\r]|\\.)*'")]
    UnicodeString,
    #[regex(r#"hex"[^"\\\n\r]*""#)]
    #[regex(r"hex'[^'\\\n\r]*'")]
    HexString,
    #[regex(r#"(unicode|hex)?"([^"\\\n\r]|\\.)*"#)]
    #[regex(r"(unicode|hex)?'([^'\\\n\r]|\\.)*")]
    UnterminatedString,

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
}

/// Lexer output: tokens (always ending in `Eof`) and lexical errors.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into tokens.
///
/// # Panics
/// Panics if the source is larger than `u32::MAX` bytes.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));

    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let range = raw.span();
        let span = Span::try_from_range(range.clone()).unwrap_or(Span::new(eof_pos, eof_pos));
        match result {
            Ok(RawToken::LineComment | RawToken::BlockComment) => {}
            Ok(RawToken::UnterminatedComment) => {
                errors.push(LexError::new(
                    Span::new(span.start, eof_pos),
                    LexErrorKind::UnterminatedComment,
                ));
                break;
            }
            Ok(RawToken::UnterminatedString) => {
                errors.push(LexError::unterminated_string(span));
                tokens.push(Token::new(TokenKind::Error, span));
            }
            Ok(kind) => {
                let kind = cook(kind, raw.slice(), span, interner, &mut errors);
                tokens.push(Token::new(kind, span));
            }
            Err(()) => {
                let found = source
                    .get(range.start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                errors.push(LexError::new(span, LexErrorKind::InvalidCharacter { found }));
            }
        }
    }

    let tokens = reject_glued_numbers(source, tokens, &mut errors);
    let mut tokens = merge_adjacent_strings(source, tokens);
    tokens.push(Token::new(TokenKind::Eof, Span::new(eof_pos, eof_pos)));

    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "lexed source");
    LexOutput { tokens, errors }
}

/// Convert a raw token to a `TokenKind`, decoding literals and interning
/// identifiers.
fn cook(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
    errors: &mut Vec<LexError>,
) -> TokenKind {
    match raw {
        RawToken::Number => literal(LiteralTokenKind::Number, slice, span),
        RawToken::HexNumber => literal(LiteralTokenKind::HexNumber, slice, span),
        RawToken::String => {
            let bytes = decode_string(quoted_body(slice, 0), span, 1, false, errors);
            string_literal(LiteralTokenKind::String, slice, bytes, span)
        }
        RawToken::UnicodeString => {
            let prefix = "unicode".len();
            let bytes = decode_string(quoted_body(slice, prefix), span, prefix + 1, true, errors);
            string_literal(LiteralTokenKind::UnicodeString, slice, bytes, span)
        }
        RawToken::HexString => match decode_hex_string(quoted_body(slice, "hex".len())) {
            Ok(bytes) => string_literal(LiteralTokenKind::HexString, slice, bytes, span),
            Err(reason) => {
                errors.push(LexError::new(span, LexErrorKind::InvalidHexString { reason }));
                TokenKind::Error
            }
        },
        RawToken::Ident => match slice {
            "true" | "false" => literal(LiteralTokenKind::Bool, slice, span),
            _ => TokenKind::keyword(slice).unwrap_or_else(|| TokenKind::Ident(interner.intern(slice))),
        },
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semi => TokenKind::Semi,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        // Trivia and unterminated tokens are handled by the caller.
        RawToken::LineComment
        | RawToken::BlockComment
        | RawToken::UnterminatedComment
        | RawToken::UnterminatedString => TokenKind::Error,
    }
}

fn literal(kind: LiteralTokenKind, slice: &str, span: Span) -> TokenKind {
    TokenKind::Literal(LiteralToken::new(kind, slice, span))
}

fn string_literal(kind: LiteralTokenKind, slice: &str, bytes: Vec<u8>, span: Span) -> TokenKind {
    TokenKind::Literal(LiteralToken::with_bytes(kind, slice, bytes, span))
}

/// Text between the quotes of `prefix"..."`.
fn quoted_body(slice: &str, prefix: usize) -> &str {
    slice
        .get(prefix + 1..slice.len().saturating_sub(1))
        .unwrap_or_default()
}

/// Sub-span of `outer` covering `start..end`, relative to its start.
fn span_within(outer: Span, start: usize, end: usize) -> Span {
    let base = outer.start as usize;
    Span::try_from_range(base + start..base + end).unwrap_or(outer)
}

/// Decode the escapes of a string body.
///
/// `offset` is the position of `body` inside the token, for error spans.
fn decode_string(
    body: &str,
    span: Span,
    offset: usize,
    allow_unicode: bool,
    errors: &mut Vec<LexError>,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '\\' {
            if !ch.is_ascii() && !allow_unicode {
                let at = span_within(span, offset + pos, offset + pos + ch.len_utf8());
                errors.push(LexError::non_ascii_in_string(at, ch));
            }
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        // The raw regex guarantees a character after every backslash.
        let Some((_, escape)) = chars.next() else {
            break;
        };
        let decoded = match escape {
            'n' => Some(b'\n'),
            'r' => Some(b'\r'),
            't' => Some(b'\t'),
            '\\' => Some(b'\\'),
            '\'' => Some(b'\''),
            '"' => Some(b'"'),
            'x' => match take_hex(&mut chars, 2).and_then(|v| u8::try_from(v).ok()) {
                Some(byte) => Some(byte),
                None => {
                    let end = chars.peek().map_or(body.len(), |(i, _)| *i);
                    errors.push(LexError::new(
                        span_within(span, offset + pos, offset + end),
                        LexErrorKind::MalformedEscape,
                    ));
                    None
                }
            },
            'u' => {
                match take_hex(&mut chars, 4).and_then(char::from_u32) {
                    Some(decoded) => {
                        let mut buf = [0u8; 4];
                        bytes.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
                    }
                    None => {
                        let end = chars.peek().map_or(body.len(), |(i, _)| *i);
                        errors.push(LexError::new(
                            span_within(span, offset + pos, offset + end),
                            LexErrorKind::MalformedEscape,
                        ));
                    }
                }
                None
            }
            other => {
                let end = pos + 1 + other.len_utf8();
                errors.push(LexError::new(
                    span_within(span, offset + pos, offset + end),
                    LexErrorKind::InvalidEscape {
                        escape_char: other,
                    },
                ));
                None
            }
        };
        if let Some(byte) = decoded {
            bytes.push(byte);
        }
    }

    bytes
}

fn take_hex(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    count: usize,
) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let (_, digit) = chars.next_if(|(_, c)| c.is_ascii_hexdigit())?;
        value = value * 16 + digit.to_digit(16)?;
    }
    Some(value)
}

/// Decode the body of `hex"..."`: digit pairs, `_` allowed between pairs.
fn decode_hex_string(body: &str) -> Result<Vec<u8>, &'static str> {
    if body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return Err("`_` may only separate digit pairs");
    }

    let mut bytes = Vec::with_capacity(body.len() / 2);
    for group in body.split('_') {
        if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err("expected only hexadecimal digits");
        }
        if group.len() % 2 != 0 {
            return Err("expected an even number of hexadecimal digits");
        }
        for pair in group.as_bytes().chunks(2) {
            let pair = std::str::from_utf8(pair).map_err(|_| "expected only hexadecimal digits")?;
            let byte = u8::from_str_radix(pair, 16).map_err(|_| "expected only hexadecimal digits")?;
            bytes.push(byte);
        }
    }
    Ok(bytes)
}

fn is_numeric(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Literal(LiteralToken {
            kind: LiteralTokenKind::Number | LiteralTokenKind::HexNumber,
            ..
        })
    )
}

/// Reject a number immediately followed by a word (`5ether`, `0x1g`).
///
/// Only string-like literals may take a suffix without whitespace.
fn reject_glued_numbers(source: &str, tokens: Vec<Token>, errors: &mut Vec<LexError>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let starts_word = source
            .as_bytes()
            .get(token.span.start as usize)
            .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'_' || *b == b'$');

        if let Some(prev) = out.last_mut() {
            if starts_word && prev.span.end == token.span.start && is_numeric(&prev.kind) {
                let span = prev.span.merge(token.span);
                errors.push(LexError::identifier_after_number(span));
                *prev = Token::new(TokenKind::Error, span);
                continue;
            }
        }
        out.push(token);
    }
    out
}

/// Merge consecutive string-like literals of the same family into one token.
fn merge_adjacent_strings(source: &str, tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let (Some(prev), TokenKind::Literal(next)) = (out.last_mut(), &token.kind) {
            if let TokenKind::Literal(prev_lit) = &mut prev.kind {
                if prev_lit.kind.is_string_like() && prev_lit.kind == next.kind {
                    let span = prev.span.merge(token.span);
                    prev_lit.bytes.extend_from_slice(&next.bytes);
                    prev_lit.text = source.get(span.to_range()).unwrap_or_default().to_string();
                    prev_lit.span = span;
                    prev.span = span;
                    continue;
                }
            }
        }
        out.push(token);
    }
    out
}
