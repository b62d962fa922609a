//! logos-based selector tokenizer.
//!
//! Longest match wins, so `:disabled` lexes as [`Token::PseudoClass`] rather
//! than a colon followed by an identifier.

use std::ops::Range;

use logos::Logos;

use super::parser::ParseError;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Pseudo-class: `:enabled`, `:disabled`.
    #[regex(r":[a-zA-Z][a-zA-Z0-9_-]*")]
    PseudoClass,

    /// Identifier: widget types, class names, ids.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `#`
    #[token("#")]
    Hash,

    /// `*`
    #[token("*")]
    Star,

    /// `>`
    #[token(">")]
    GreaterThan,
}

/// A token together with its source text and byte span.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub text: String,
    pub span: Range<usize>,
}

/// Tokenize a selector string, stopping at the first character that cannot
/// start a token.
pub fn tokenize(input: &str) -> Result<Vec<Lexeme>, ParseError> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| {
            let text = input[span.clone()].to_string();
            match result {
                Ok(token) => Ok(Lexeme { token, text, span }),
                Err(()) => Err(ParseError::InvalidCharacter {
                    offset: span.start,
                    text,
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        pairs(input).into_iter().map(|(t, _)| t).collect()
    }

    fn pairs(input: &str) -> Vec<(Token, String)> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|lexeme| (lexeme.token, lexeme.text))
            .collect()
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            tokens(", . # * >"),
            vec![
                Token::Comma,
                Token::Dot,
                Token::Hash,
                Token::Star,
                Token::GreaterThan,
            ]
        );
    }

    #[test]
    fn idents_allow_dashes_and_underscores() {
        let result = pairs("Button my-widget _private");
        assert_eq!(result[0], (Token::Ident, "Button".into()));
        assert_eq!(result[1], (Token::Ident, "my-widget".into()));
        assert_eq!(result[2], (Token::Ident, "_private".into()));
    }

    #[test]
    fn id_selector_is_hash_then_ident() {
        // Hex-looking ids must not collapse into a single token.
        assert_eq!(tokens("#dead"), vec![Token::Hash, Token::Ident]);
    }

    #[test]
    fn pseudo_class_is_single_token() {
        let result = pairs("Button:disabled");
        assert_eq!(result[0], (Token::Ident, "Button".into()));
        assert_eq!(result[1], (Token::PseudoClass, ":disabled".into()));
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(tokens("  Dialog \n\t > Button  ").len(), 3);
    }

    #[test]
    fn spans_cover_source_text() {
        let lexemes = tokenize("Dialog > #ok").unwrap();
        let spans: Vec<_> = lexemes.iter().map(|l| l.span.clone()).collect();
        assert_eq!(spans, vec![0..6, 7..8, 9..10, 10..12]);
    }

    #[test]
    fn unknown_character_is_an_error() {
        assert_eq!(
            tokenize("Button[type]"),
            Err(ParseError::InvalidCharacter {
                offset: 6,
                text: "[".into(),
            })
        );
    }
}
