//! Recursive descent selector parser.
//!
//! Parses locator text into a [`SelectorList`] using the logos-based
//! tokenizer from [`crate::selector::tokenizer`].

use crate::selector::model::*;
use crate::selector::tokenizer::{tokenize, Token};

/// Errors from selector parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("invalid character at byte {offset}: {text:?}")]
    InvalidCharacter { offset: usize, text: String },
}

/// A positioned token with byte-level span information for whitespace detection.
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    /// Index in the token stream (for error reporting).
    pos: usize,
    byte_start: usize,
    byte_end: usize,
}

fn tokenize_with_spans(input: &str) -> Result<Vec<PToken>, ParseError> {
    Ok(tokenize(input)?
        .into_iter()
        .enumerate()
        .map(|(pos, lexeme)| PToken {
            token: lexeme.token,
            text: lexeme.text,
            pos,
            byte_start: lexeme.span.start,
            byte_end: lexeme.span.end,
        })
        .collect())
}

/// Parse a comma-separated selector list, e.g. `#save, Dialog > Button`.
pub fn parse_selector_list(input: &str) -> Result<SelectorList, ParseError> {
    let tokens = tokenize_with_spans(input)?;
    let mut parser = Parser { tokens, cursor: 0 };

    let mut selectors = vec![parser.parse_selector()?];
    while parser.peek().is_some_and(|t| t.token == Token::Comma) {
        parser.advance();
        selectors.push(parser.parse_selector()?);
    }

    if let Some(tok) = parser.peek() {
        return Err(ParseError::UnexpectedToken {
            position: tok.pos,
            message: format!("trailing {:?} '{}'", tok.token, tok.text),
        });
    }

    Ok(SelectorList { selectors })
}

/// Recursive descent parser state.
struct Parser {
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<&PToken> {
        let tok = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(tok)
    }

    fn current_pos(&self) -> usize {
        self.peek().map(|t| t.pos).unwrap_or(self.tokens.len())
    }

    /// Returns `true` if the current token directly follows the previous one
    /// with no whitespace in between.
    fn is_adjacent(&self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = &self.tokens[self.cursor - 1];
        self.peek().is_some_and(|curr| curr.byte_start == prev.byte_end)
    }

    /// Parse a single selector: compound selectors joined by combinators.
    fn parse_selector(&mut self) -> Result<Selector, ParseError> {
        let mut parts = vec![SelectorPart::Compound(self.parse_compound_selector()?)];

        loop {
            match self.peek() {
                Some(t) if t.token == Token::GreaterThan => {
                    self.advance();
                    parts.push(SelectorPart::Combinator(Combinator::Child));
                    parts.push(SelectorPart::Compound(self.parse_compound_selector()?));
                }
                // A selector-starting token separated by whitespace begins a
                // descendant step; adjacent ones were eaten by the compound.
                Some(t)
                    if matches!(
                        t.token,
                        Token::Ident | Token::Hash | Token::Dot | Token::Star | Token::PseudoClass
                    ) =>
                {
                    parts.push(SelectorPart::Combinator(Combinator::Descendant));
                    parts.push(SelectorPart::Compound(self.parse_compound_selector()?));
                }
                _ => break,
            }
        }

        Ok(Selector { parts })
    }

    /// Parse a compound selector such as `Button.primary:enabled`.
    fn parse_compound_selector(&mut self) -> Result<CompoundSelector, ParseError> {
        let mut compound = CompoundSelector::new();

        match self.peek() {
            Some(t) if t.token == Token::Ident => {
                let name = t.text.clone();
                self.advance();
                compound.push(SelectorComponent::Type(name));
            }
            Some(t) if t.token == Token::Star => {
                self.advance();
                compound.push(SelectorComponent::Universal);
            }
            Some(_) => match self.parse_qualifier()? {
                Some(component) => compound.push(component),
                None => {
                    return Err(ParseError::UnexpectedToken {
                        position: self.current_pos(),
                        message: "expected selector part".into(),
                    });
                }
            },
            None => return Err(ParseError::UnexpectedEof("expected selector".into())),
        }

        while self.is_adjacent() {
            match self.parse_qualifier()? {
                Some(component) => compound.push(component),
                None => break,
            }
        }

        Ok(compound)
    }

    /// Parse a `.class`, `#id` or `:pseudo` component at the cursor.
    ///
    /// Returns `Ok(None)` without consuming anything if the current token
    /// cannot start a qualifier.
    fn parse_qualifier(&mut self) -> Result<Option<SelectorComponent>, ParseError> {
        let Some((token, text)) = self.peek().map(|t| (t.token.clone(), t.text.clone())) else {
            return Ok(None);
        };
        match token {
            Token::Dot => {
                self.advance();
                let name = self.expect_name("class name after '.'")?;
                Ok(Some(SelectorComponent::Class(name)))
            }
            Token::Hash => {
                self.advance();
                let name = self.expect_name("id after '#'")?;
                Ok(Some(SelectorComponent::Id(name)))
            }
            Token::PseudoClass => {
                self.advance();
                Ok(Some(SelectorComponent::PseudoClass(text[1..].to_string())))
            }
            _ => Ok(None),
        }
    }

    /// Consume an identifier that must directly follow a `.` or `#`.
    fn expect_name(&mut self, what: &str) -> Result<String, ParseError> {
        let adjacent = self.is_adjacent();
        match self.advance() {
            Some(tok) if tok.token == Token::Ident && adjacent => Ok(tok.text.clone()),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {what}, got {:?} '{}'", tok.token, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {what}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> SelectorList {
        parse_selector_list(input).unwrap_or_else(|e| panic!("parse failed: {e}"))
    }

    fn compound(sel: &Selector, idx: usize) -> &[SelectorComponent] {
        match &sel.parts[idx] {
            SelectorPart::Compound(c) => &c.components,
            other => panic!("expected compound at {idx}, got {other:?}"),
        }
    }

    // ── Simple selectors ─────────────────────────────────────────────

    #[test]
    fn parse_type() {
        let list = parse("Button");
        assert_eq!(list.selectors.len(), 1);
        assert_eq!(
            compound(&list.selectors[0], 0),
            &[SelectorComponent::Type("Button".into())]
        );
    }

    #[test]
    fn parse_id() {
        let list = parse("#save");
        assert_eq!(
            compound(&list.selectors[0], 0),
            &[SelectorComponent::Id("save".into())]
        );
    }

    #[test]
    fn parse_compound_with_pseudo() {
        let list = parse("Button.primary:enabled");
        assert_eq!(
            compound(&list.selectors[0], 0),
            &[
                SelectorComponent::Type("Button".into()),
                SelectorComponent::Class("primary".into()),
                SelectorComponent::PseudoClass("enabled".into()),
            ]
        );
    }

    // ── Combinators ──────────────────────────────────────────────────

    #[test]
    fn whitespace_is_descendant() {
        let list = parse("Dialog .actions Button");
        let parts = &list.selectors[0].parts;
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[1], SelectorPart::Combinator(Combinator::Descendant));
        assert_eq!(parts[3], SelectorPart::Combinator(Combinator::Descendant));
    }

    #[test]
    fn greater_than_is_child() {
        let list = parse("Dialog>Button");
        let parts = &list.selectors[0].parts;
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1], SelectorPart::Combinator(Combinator::Child));
    }

    #[test]
    fn comma_list() {
        let list = parse("#missing, Button.primary");
        assert_eq!(list.selectors.len(), 2);
    }

    // ── Errors ───────────────────────────────────────────────────────

    #[test]
    fn empty_input_is_eof() {
        assert!(matches!(
            parse_selector_list("   "),
            Err(ParseError::UnexpectedEof(_))
        ));
    }

    #[test]
    fn dangling_hash() {
        assert!(parse_selector_list("#").is_err());
    }

    #[test]
    fn spaced_class_name_is_rejected() {
        assert!(parse_selector_list(". primary").is_err());
    }

    #[test]
    fn trailing_comma() {
        assert!(parse_selector_list("Button,").is_err());
    }

    #[test]
    fn attribute_syntax_is_invalid_character() {
        assert!(matches!(
            parse_selector_list("Button[type]"),
            Err(ParseError::InvalidCharacter { offset: 6, .. })
        ));
    }

    #[test]
    fn dangling_child_combinator() {
        assert!(parse_selector_list("Dialog >").is_err());
    }
}
