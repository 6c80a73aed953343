use once_cell::sync::Lazy;
use regex::Regex;

use super::{Lexer, Token};
use crate::FoamError;

/// Whitespace, `// ...` line comments and `/* ... */` block comments,
/// all discarded between tokens.
static TRIVIA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[ \t\n]+|//[^\n]*|/\*(?s:.*?)\*/)+").unwrap());

/// Deliberately non-minimal: greedy up to the last double quote on the
/// line, so `"a" b "c"` is a single token.
static QUOTED_STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^".*""#).unwrap());

/// Tilde and dot are valid bare-identifier characters; real-world keys
/// include `~tilde`, `0.5` and `3D`.
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_~.]+").unwrap());

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token, FoamError> {
    skip_trivia(lexer);

    let rest = lexer.remaining();
    let Some(ch) = rest.chars().next() else {
        return Ok(Token::Eof);
    };

    match ch {
        '{' => single(lexer, Token::DictStart),
        '}' => single(lexer, Token::DictEnd),
        '(' => single(lexer, Token::ListStart),
        ')' => single(lexer, Token::ListEnd),
        ';' => single(lexer, Token::End),
        '"' => match QUOTED_STRING.find(rest) {
            Some(m) => {
                // Strip the two outer quotes here so the parser never
                // sees them.
                let text = rest[1..m.end() - 1].to_string();
                lexer.advance(m.end());
                Ok(Token::String(text))
            }
            None => Err(unexpected_character(lexer)),
        },
        _ => match IDENTIFIER.find(rest) {
            Some(m) => {
                let text = rest[..m.end()].to_string();
                lexer.advance(m.end());
                Ok(Token::Ident(text))
            }
            None => Err(unexpected_character(lexer)),
        },
    }
}

fn skip_trivia(lexer: &mut Lexer) {
    if let Some(m) = TRIVIA.find(lexer.remaining()) {
        lexer.advance(m.end());
    }
}

fn single(lexer: &mut Lexer, token: Token) -> Result<Token, FoamError> {
    lexer.advance(1);
    Ok(token)
}

fn unexpected_character(lexer: &Lexer) -> FoamError {
    FoamError::UnexpectedCharacter {
        preview: lexer.remaining().chars().take(10).collect(),
        position: lexer.offset(),
    }
}
