//! Lexer for rulang using logos.
//!
//! Every token definition below is an independent matcher. At each cursor
//! position the longest match wins; on equal length the higher-priority
//! matcher wins (fixed strings over patterns), which is what makes `!=` beat
//! `!`, `<=` beat `<`, and the keyword `if` beat the identifier `if` while
//! `iffy` stays an identifier. Keywords ignore ASCII case.
//!
//! Whitespace is skipped. Line breaks are kept as [`TokenKind::Newline`]
//! because they separate statements.

mod lex_error;

use logos::Logos;
use rulang_ir::{Span, Token, TokenKind, TokenList};

pub use lex_error::LexError;

/// Raw token from logos (payloads are read from the slice afterwards).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\x0C]+")]
enum RawToken {
    #[regex(r"\r\n|\n|\r")]
    Newline,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,
    // A second decimal point makes this the longer match.
    #[regex(r"-?[0-9]+\.[0-9]*\.[0-9.]*")]
    MalformedNumber,

    #[regex(r#""[^"]*""#)]
    #[regex(r"'[^']*'")]
    QuotedString,
    // Only wins when the closing quote never comes.
    #[regex(r#""[^"]*"#)]
    #[regex(r"'[^']*")]
    UnterminatedString,

    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,

    #[token("!=")]
    NotEq,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("&&")]
    #[token("and", ignore(ascii_case))]
    And,
    #[token("||")]
    #[token("or", ignore(ascii_case))]
    Or,
    #[token("!")]
    #[token("not", ignore(ascii_case))]
    Not,
    #[token("if", ignore(ascii_case))]
    If,
    #[token("then", ignore(ascii_case))]
    Then,
    #[token("else", ignore(ascii_case))]
    Else,
    #[token("true", ignore(ascii_case))]
    True,
    #[token("false", ignore(ascii_case))]
    False,
    #[token("is", ignore(ascii_case))]
    Is,
    #[token("in", ignore(ascii_case))]
    In,
    #[token("for", ignore(ascii_case))]
    For,
    #[token("each", ignore(ascii_case))]
    Each,

    #[regex(r"[A-Za-z_$@][A-Za-z0-9_$]*")]
    Ident,
}

/// Lex rule text into an EOF-terminated [`TokenList`].
///
/// Stops at the first position no matcher accepts.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        let Ok(raw) = token_result else {
            let ch = source[span.to_range()].chars().next().unwrap_or('\0');
            return Err(LexError::unexpected_char(ch, span));
        };
        let kind = convert_token(raw, slice, span)?;
        result.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof));

    tracing::trace!(tokens = result.len(), "lexed rule text");
    Ok(result)
}

/// Convert a raw token to a `TokenKind`, reading payloads from the slice.
fn convert_token(raw: RawToken, slice: &str, span: Span) -> Result<TokenKind, LexError> {
    let kind = match raw {
        RawToken::Number => match slice.parse::<f64>() {
            Ok(n) => TokenKind::Number(n),
            Err(_) => return Err(LexError::malformed_number(slice, span)),
        },
        RawToken::MalformedNumber => return Err(LexError::malformed_number(slice, span)),
        // Quotes are single ASCII bytes on both ends.
        RawToken::QuotedString => TokenKind::String(slice[1..slice.len() - 1].to_string()),
        RawToken::UnterminatedString => return Err(LexError::unterminated_string(span)),
        RawToken::Ident => TokenKind::Ident(slice.to_string()),

        RawToken::Newline => TokenKind::Newline,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Dot => TokenKind::Dot,

        RawToken::NotEq => TokenKind::NotEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,

        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Not => TokenKind::Not,
        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Is => TokenKind::Is,
        RawToken::In => TokenKind::In,
        RawToken::For => TokenKind::For,
        RawToken::Each => TokenKind::Each,
    };
    Ok(kind)
}
