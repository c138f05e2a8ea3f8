use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number,
    Identifier,

    // Operators
    Equals,
    BinaryOperator,

    OpenParen,
    CloseParen,

    // Keywords
    Const,

    EndOfFile,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Rc<str>,
    pub start: usize,
    pub end: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({:?}) at position {}", self.value, self.kind, self.start)
    }
}

pub const END_OF_FILE: &str = "EndOfFile";

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf::phf_map! {
    "const" => TokenKind::Const,
};

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum LexError {
    #[error("Unrecognized character {character:?} at position {position}")]
    UnrecognizedCharacter { character: char, position: usize },
}

/// Single left-to-right scan over the source.
///
/// Yields every token followed by exactly one `EndOfFile` token, then stops.
/// The first unrecognized character is yielded as an error and also ends the
/// stream.
#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iter = input.char_indices().peekable();
        Self {
            input,
            iter,
            finished: false,
        }
    }

    /// A character is a letter when its case forms differ, which accepts any
    /// cased alphabet and rejects digits, `_` and symbols.
    fn is_letter(ch: char) -> bool {
        ch.to_uppercase().ne(ch.to_lowercase())
    }

    fn is_skippable(ch: char) -> bool {
        matches!(ch, ' ' | '\n' | '\t')
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while self.iter.next_if(|(_, ch)| Self::is_letter(*ch)).is_some() {}

        let end = self.next_idx();
        let ident = &self.input[start..end];
        Token {
            kind: KEYWORDS
                .get(ident)
                .copied()
                .unwrap_or(TokenKind::Identifier),
            value: ident.into(),
            start,
            end,
        }
    }

    fn read_number(&mut self, start: usize) -> Token {
        while self.iter.next_if(|(_, ch)| ch.is_ascii_digit()).is_some() {}

        self.token_until_here(TokenKind::Number, start)
    }

    fn token_until_here(&mut self, kind: TokenKind, start: usize) -> Token {
        let end = self.next_idx();
        Token {
            kind,
            value: self.input[start..end].into(),
            start,
            end,
        }
    }

    fn end_of_file(&self) -> Token {
        let end = self.input.len();
        Token {
            kind: TokenKind::EndOfFile,
            value: END_OF_FILE.into(),
            start: end,
            end,
        }
    }

    fn next_idx(&mut self) -> usize {
        self.iter
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while self.iter.next_if(|(_, ch)| Self::is_skippable(*ch)).is_some() {}

        let Some((idx, ch)) = self.iter.next() else {
            self.finished = true;
            return Some(Ok(self.end_of_file()));
        };

        let token = match ch {
            '(' => self.token_until_here(TokenKind::OpenParen, idx),
            ')' => self.token_until_here(TokenKind::CloseParen, idx),
            '+' | '-' | '*' | '/' | '%' => self.token_until_here(TokenKind::BinaryOperator, idx),
            '=' => self.token_until_here(TokenKind::Equals, idx),
            c if c.is_ascii_digit() => self.read_number(idx),
            c if Self::is_letter(c) => self.read_identifier(idx),
            character => {
                self.finished = true;
                return Some(Err(LexError::UnrecognizedCharacter {
                    character,
                    position: idx,
                }));
            }
        };
        Some(Ok(token))
    }
}

/// Tokenizes the whole source, failing on the first unrecognized character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Tokenizer::new(source).collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_values(input: &str) -> Vec<(TokenKind, String)> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|token| (token.kind, token.value.to_string()))
            .collect()
    }

    #[test]
    fn test_single_character_tokens() {
        let output = tokenize("=+(-)*/%").unwrap();

        assert_eq!(
            output,
            vec![
                Token {
                    kind: TokenKind::Equals,
                    value: "=".into(),
                    start: 0,
                    end: 1
                },
                Token {
                    kind: TokenKind::BinaryOperator,
                    value: "+".into(),
                    start: 1,
                    end: 2
                },
                Token {
                    kind: TokenKind::OpenParen,
                    value: "(".into(),
                    start: 2,
                    end: 3
                },
                Token {
                    kind: TokenKind::BinaryOperator,
                    value: "-".into(),
                    start: 3,
                    end: 4
                },
                Token {
                    kind: TokenKind::CloseParen,
                    value: ")".into(),
                    start: 4,
                    end: 5
                },
                Token {
                    kind: TokenKind::BinaryOperator,
                    value: "*".into(),
                    start: 5,
                    end: 6
                },
                Token {
                    kind: TokenKind::BinaryOperator,
                    value: "/".into(),
                    start: 6,
                    end: 7
                },
                Token {
                    kind: TokenKind::BinaryOperator,
                    value: "%".into(),
                    start: 7,
                    end: 8
                },
                Token {
                    kind: TokenKind::EndOfFile,
                    value: END_OF_FILE.into(),
                    start: 8,
                    end: 8
                },
            ]
        );
    }

    #[test]
    fn test_digit_runs_are_one_token() {
        let expected_output = vec![
            (TokenKind::Number, "54".to_owned()),
            (TokenKind::BinaryOperator, "+".to_owned()),
            (TokenKind::Number, "1000".to_owned()),
            (TokenKind::EndOfFile, END_OF_FILE.to_owned()),
        ];

        assert_eq!(kinds_and_values("54 + 1000"), expected_output);
    }

    #[test]
    fn test_identifiers_and_keywords() {
        let input = "const total = (width * height)
	consts";

        let expected_output = vec![
            (TokenKind::Const, "const".to_owned()),
            (TokenKind::Identifier, "total".to_owned()),
            (TokenKind::Equals, "=".to_owned()),
            (TokenKind::OpenParen, "(".to_owned()),
            (TokenKind::Identifier, "width".to_owned()),
            (TokenKind::BinaryOperator, "*".to_owned()),
            (TokenKind::Identifier, "height".to_owned()),
            (TokenKind::CloseParen, ")".to_owned()),
            (TokenKind::Identifier, "consts".to_owned()),
            (TokenKind::EndOfFile, END_OF_FILE.to_owned()),
        ];

        assert_eq!(kinds_and_values(input), expected_output);
    }

    #[test]
    fn test_letters_and_digits_split() {
        let expected_output = vec![
            (TokenKind::Identifier, "abc".to_owned()),
            (TokenKind::Number, "123".to_owned()),
            (TokenKind::Identifier, "de".to_owned()),
            (TokenKind::EndOfFile, END_OF_FILE.to_owned()),
        ];

        assert_eq!(kinds_and_values("abc123de"), expected_output);
    }

    #[test]
    fn test_cased_non_ascii_letters() {
        let output = tokenize("größe").unwrap();

        assert_eq!(output[0].kind, TokenKind::Identifier);
        assert_eq!(output[0].value.as_ref(), "größe");
        assert_eq!(output[1].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_empty_input_is_only_end_of_file() {
        assert_eq!(
            kinds_and_values(" \n\t "),
            vec![(TokenKind::EndOfFile, END_OF_FILE.to_owned())]
        );
    }

    #[test]
    fn test_unrecognized_characters() {
        let tests = vec![
            ("5 & 3", '&', 2),
            ("a_b", '_', 1),
            ("1.5", '.', 1),
            ("x;", ';', 1),
            ("1\r\n", '\r', 1),
        ];

        for (input, character, position) in tests {
            assert_eq!(
                tokenize(input),
                Err(LexError::UnrecognizedCharacter {
                    character,
                    position
                })
            );
        }
    }

    #[test]
    fn test_stream_ends_after_error() {
        let mut tokenizer = Tokenizer::new("1 ? 2");

        assert!(matches!(
            tokenizer.next(),
            Some(Ok(Token {
                kind: TokenKind::Number,
                ..
            }))
        ));
        assert!(matches!(tokenizer.next(), Some(Err(_))));
        assert_eq!(tokenizer.next(), None);
    }

    #[test]
    fn test_retokenizing_values_is_stable() {
        let input = "const a = (12 % bc) - 7 / Zeta";

        for token in tokenize(input).unwrap() {
            if token.kind == TokenKind::EndOfFile {
                continue;
            }
            let again = tokenize(&token.value).unwrap();

            assert_eq!(again.len(), 2);
            assert_eq!(again[0].kind, token.kind);
            assert_eq!(again[0].value, token.value);
        }
    }
}
