//! Pattern lexer converting format patterns into semantic tokens.

use crate::errors::PatternError;

use super::placeholder::{PlaceholderSpec, parse_placeholder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Literal(String),
    Placeholder {
        start: usize,
        name: Option<String>,
        hint: Option<String>,
    },
    OpenBrace {
        index: usize,
    },
    CloseBrace {
        index: usize,
    },
}

fn opens_placeholder(next: Option<u8>) -> bool {
    matches!(next, Some(b) if b.is_ascii_alphabetic() || b == b'_' || b == b'}' || b == b':')
}

pub(crate) fn lex_pattern(pattern: &str) -> Result<Vec<Token>, PatternError> {
    let bytes = pattern.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    let flush_literal = |from: usize, to: usize, tokens: &mut Vec<Token>| {
        if let Some(text) = pattern.get(from..to).filter(|text| !text.is_empty()) {
            tokens.push(Token::Literal(text.to_string()));
        }
    };

    // Literals are sliced from the source so multi-byte text survives intact;
    // doubled braces split a literal into two tokens.
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'{' if bytes.get(pos + 1) == Some(&b'{') => {
                flush_literal(literal_start, pos + 1, &mut tokens);
                pos += 2;
                literal_start = pos;
            }
            b'{' if opens_placeholder(bytes.get(pos + 1).copied()) => {
                flush_literal(literal_start, pos, &mut tokens);
                let (next_pos, PlaceholderSpec { start, name, hint }) =
                    parse_placeholder(bytes, pos)?;
                tokens.push(Token::Placeholder { start, name, hint });
                pos = next_pos;
                literal_start = pos;
            }
            b'{' => {
                flush_literal(literal_start, pos, &mut tokens);
                tokens.push(Token::OpenBrace { index: pos });
                pos += 1;
                literal_start = pos;
            }
            b'}' if bytes.get(pos + 1) == Some(&b'}') => {
                flush_literal(literal_start, pos + 1, &mut tokens);
                pos += 2;
                literal_start = pos;
            }
            b'}' => {
                flush_literal(literal_start, pos, &mut tokens);
                tokens.push(Token::CloseBrace { index: pos });
                pos += 1;
                literal_start = pos;
            }
            _ => pos += 1,
        }
    }

    flush_literal(literal_start, bytes.len(), &mut tokens);
    Ok(merge_literals(tokens))
}

fn merge_literals(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match (merged.last_mut(), token) {
            (Some(Token::Literal(previous)), Token::Literal(text)) => previous.push_str(&text),
            (_, token) => merged.push(token),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::{Token, lex_pattern};
    use rstest::rstest;

    fn literal(text: &str) -> Token {
        Token::Literal(text.to_owned())
    }

    fn placeholder(start: usize, name: Option<&str>, hint: Option<&str>) -> Token {
        Token::Placeholder {
            start,
            name: name.map(str::to_owned),
            hint: hint.map(str::to_owned),
        }
    }

    #[rstest]
    #[case::typed("Given {value:d}", vec![literal("Given "), placeholder(6, Some("value"), Some("d"))])]
    #[case::anonymous("{} and {:w}", vec![
        placeholder(0, None, None),
        literal(" and "),
        placeholder(7, None, Some("w")),
    ])]
    #[case::doubled("{{outer}} {inner}", vec![literal("{outer} "), placeholder(10, Some("inner"), None)])]
    #[case::multibyte("mając {n} złotych", vec![
        literal("mając "),
        placeholder(7, Some("n"), None),
        literal(" złotych"),
    ])]
    #[case::stray("{ literal }", vec![
        Token::OpenBrace { index: 0 },
        literal(" literal "),
        Token::CloseBrace { index: 10 },
    ])]
    fn splits_patterns_into_tokens(#[case] pattern: &str, #[case] expected: Vec<Token>) {
        let tokens =
            lex_pattern(pattern).unwrap_or_else(|error| panic!("{pattern} should lex: {error}"));
        assert_eq!(tokens, expected);
    }
}
