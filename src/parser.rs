use crate::FoamError;
use crate::ast::{Dict, Value};
use crate::lexer::{Lexer, Token};

/// Recursive-descent parser over a single shared lexer cursor. The two
/// body parsers call each other and resume wherever the callee left the
/// cursor.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
        }
    }

    /// Parse the implicit top-level dictionary body. The top level has no
    /// enclosing `{`, so running out of input is a normal end, not an
    /// error.
    pub fn parse(&mut self) -> Result<Value, FoamError> {
        Ok(Value::Dict(self.parse_dict_body()?))
    }

    fn parse_dict_body(&mut self) -> Result<Dict, FoamError> {
        let mut result = Dict::new();
        // Pending state of the entry being built: its key, and the values
        // seen so far. Both reset at every entry boundary.
        let mut entry: Option<String> = None;
        let mut values: Vec<Value> = Vec::new();

        loop {
            let token = self.lexer.next_token()?;
            match token {
                tok @ (Token::ListStart | Token::DictStart | Token::End)
                    if entry.is_none() =>
                {
                    // Lists, dicts and terminators all need a key pending.
                    return Err(FoamError::UnexpectedToken {
                        token: tok.to_string(),
                    });
                }
                Token::ListEnd => {
                    // A list close never appears directly in a dict body.
                    return Err(FoamError::UnexpectedToken {
                        token: token.to_string(),
                    });
                }
                Token::DictEnd | Token::Eof => break,
                Token::Ident(text) | Token::String(text) => {
                    if entry.is_none() {
                        entry = Some(text);
                    } else {
                        values.push(Value::String(text));
                    }
                }
                Token::ListStart => {
                    values.push(Value::List(self.parse_list_body()?));
                }
                Token::DictStart => {
                    // A nested dict ends the entry on the spot; pending
                    // values are discarded.
                    let inner = self.parse_dict_body()?;
                    let key = entry.take().ok_or(FoamError::UnexpectedToken {
                        token: Token::DictStart.to_string(),
                    })?;
                    result.insert(key, Value::Dict(inner));
                    values.clear();
                }
                Token::End => {
                    let value = if values.len() == 1 {
                        // Single-token entries collapse to a bare scalar.
                        values.pop().ok_or(FoamError::UnexpectedToken {
                            token: Token::End.to_string(),
                        })?
                    } else {
                        Value::List(std::mem::take(&mut values))
                    };
                    let key = entry.take().ok_or(FoamError::UnexpectedToken {
                        token: Token::End.to_string(),
                    })?;
                    // Last write wins on duplicate keys.
                    result.insert(key, value);
                }
            }
        }

        Ok(result)
    }

    fn parse_list_body(&mut self) -> Result<Vec<Value>, FoamError> {
        let mut result = Vec::new();

        loop {
            let token = self.lexer.next_token()?;
            match token {
                tok @ (Token::DictEnd | Token::End) => {
                    return Err(FoamError::UnexpectedToken {
                        token: tok.to_string(),
                    });
                }
                Token::Ident(text) | Token::String(text) => {
                    result.push(Value::String(text));
                }
                Token::DictStart => {
                    result.push(Value::Dict(self.parse_dict_body()?));
                }
                Token::ListStart => {
                    result.push(Value::List(self.parse_list_body()?));
                }
                // Running out of tokens closes the list silently, same as
                // the unterminated top level.
                Token::ListEnd | Token::Eof => break,
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Value, FoamError> {
        Parser::new(input).parse()
    }

    fn dict(entries: Vec<(&str, Value)>) -> Value {
        Value::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    fn list(items: Vec<Value>) -> Value {
        Value::List(items)
    }

    fn s(text: &str) -> Value {
        Value::String(text.into())
    }

    #[test]
    fn test_simple_entry() {
        let actual = parse("a 1;").unwrap();
        assert_eq!(actual, dict(vec![("a", s("1"))]));
    }

    #[test]
    fn test_list_entry() {
        let actual = parse("a (1 2 3);").unwrap();
        assert_eq!(actual, dict(vec![("a", list(vec![s("1"), s("2"), s("3")]))]));
    }

    #[test]
    fn test_multiple_values_glue_into_a_sequence() {
        let actual = parse("a uniform 2;").unwrap();
        assert_eq!(actual, dict(vec![("a", list(vec![s("uniform"), s("2")]))]));
    }

    #[test]
    fn test_single_value_collapses_to_scalar() {
        // Never a one-element sequence.
        let actual = parse("a 1;").unwrap();
        assert_eq!(actual.get("a"), Some(&s("1")));
    }

    #[test]
    fn test_entry_with_no_values() {
        let actual = parse("a;").unwrap();
        assert_eq!(actual, dict(vec![("a", list(vec![]))]));
    }

    #[test]
    fn test_nested_lists() {
        let actual = parse("a (1 2 (3 4));").unwrap();
        assert_eq!(
            actual,
            dict(vec![(
                "a",
                list(vec![s("1"), s("2"), list(vec![s("3"), s("4")])])
            )])
        );
    }

    #[test]
    fn test_multiple_simple_entries() {
        let actual = parse("a 2; b 3;").unwrap();
        assert_eq!(actual, dict(vec![("a", s("2")), ("b", s("3"))]));
    }

    #[test]
    fn test_quoted_value_keeps_colon() {
        // Quoting rules apply only on write; the parsed value keeps every
        // character between the quotes.
        let actual = parse("a \"x:y\";").unwrap();
        assert_eq!(actual, dict(vec![("a", s("x:y"))]));
    }

    #[test]
    fn test_quoted_string_inside_list() {
        let actual = parse("a (\"x y\" z);").unwrap();
        assert_eq!(actual, dict(vec![("a", list(vec![s("x y"), s("z")]))]));
    }

    #[test]
    fn test_semi_complex_document() {
        let input = "name \"short case name\";
description \"long string\\nwith line breaks\";
location \"URL\";
tags {
\theatTransfer yes;
\ttemporalScheme steady;
\tphysics solid radiationSolid;
}";
        let actual = parse(input).unwrap();
        assert_eq!(
            actual,
            dict(vec![
                ("name", s("short case name")),
                ("description", s("long string\\nwith line breaks")),
                ("location", s("URL")),
                (
                    "tags",
                    dict(vec![
                        ("heatTransfer", s("yes")),
                        ("temporalScheme", s("steady")),
                        ("physics", list(vec![s("solid"), s("radiationSolid")])),
                    ])
                ),
            ])
        );
    }

    #[test]
    fn test_quoted_keys() {
        let input = r#"errors
{
    tags
    {
        "physics:time"
        {
            error invalid;
            validValues ( steady fixed );
            currentValue bananas;
        }
    }
}"#;
        let actual = parse(input).unwrap();
        assert_eq!(
            actual,
            dict(vec![(
                "errors",
                dict(vec![(
                    "tags",
                    dict(vec![(
                        "physics:time",
                        dict(vec![
                            ("error", s("invalid")),
                            ("validValues", list(vec![s("steady"), s("fixed")])),
                            ("currentValue", s("bananas")),
                        ])
                    )])
                )])
            )])
        );
    }

    #[test]
    fn test_nested_dicts() {
        let input = r#"cases
{
    1
    {
        name "case 1";
        tags
        {
            physics
            {
                time steady;
            }
        }
    }
    2
    {
        name "case 2";
    }
}"#;
        let actual = parse(input).unwrap();
        assert_eq!(
            actual,
            dict(vec![(
                "cases",
                dict(vec![
                    (
                        "1",
                        dict(vec![
                            ("name", s("case 1")),
                            (
                                "tags",
                                dict(vec![(
                                    "physics",
                                    dict(vec![("time", s("steady"))])
                                )])
                            ),
                        ])
                    ),
                    ("2", dict(vec![("name", s("case 2"))])),
                ])
            )])
        );
    }

    #[test]
    fn test_comments_are_ignored() {
        let input = "a 1; // line comment\n/* block\ncomment */ b 2;";
        let actual = parse(input).unwrap();
        assert_eq!(actual, dict(vec![("a", s("1")), ("b", s("2"))]));
    }

    #[test]
    fn test_duplicate_keys_overwrite() {
        // Last write wins, no error, first position kept.
        let actual = parse("a 1; b 2; a 3;").unwrap();
        assert_eq!(actual, dict(vec![("a", s("3")), ("b", s("2"))]));
    }

    #[test]
    fn test_empty_input() {
        let actual = parse("").unwrap();
        assert_eq!(actual, dict(vec![]));
    }

    #[test]
    fn test_unterminated_top_level_is_fine() {
        let actual = parse("a 1; b 2;  c 3;").unwrap();
        assert_eq!(actual.as_dict().unwrap().len(), 3);
    }

    #[test]
    fn test_unterminated_list_closes_at_eof() {
        // Observed leniency: a nested list body tolerates running out of
        // tokens without its `)`, closing silently like the top level.
        // The surrounding entry never sees its `;`, so it is dropped too.
        let actual = parse("a (1 2").unwrap();
        assert_eq!(actual, dict(vec![]));
    }

    #[test]
    fn test_unterminated_list_with_terminator_keeps_entry() {
        let actual = parse("a (1 2); b (3 4");
        assert_eq!(
            actual.unwrap(),
            dict(vec![("a", list(vec![s("1"), s("2")]))])
        );
    }

    #[test]
    fn test_unterminated_dict_closes_at_eof() {
        let actual = parse("a { b 1;").unwrap();
        assert_eq!(actual, dict(vec![("a", dict(vec![("b", s("1"))]))]));
    }

    #[test]
    fn test_keyless_dict_is_rejected() {
        let result = parse("{ a 1; }");
        assert_eq!(
            result,
            Err(FoamError::UnexpectedToken { token: "{".into() })
        );
    }

    #[test]
    fn test_keyless_list_is_rejected() {
        let result = parse("(1 2);");
        assert_eq!(
            result,
            Err(FoamError::UnexpectedToken { token: "(".into() })
        );
    }

    #[test]
    fn test_keyless_terminator_is_rejected() {
        let result = parse(";");
        assert_eq!(
            result,
            Err(FoamError::UnexpectedToken { token: ";".into() })
        );
    }

    #[test]
    fn test_list_close_in_dict_body_is_rejected() {
        let result = parse("a 1; )");
        assert_eq!(
            result,
            Err(FoamError::UnexpectedToken { token: ")".into() })
        );
    }

    #[test]
    fn test_terminator_inside_list_is_rejected() {
        let result = parse("a (1; 2);");
        assert_eq!(
            result,
            Err(FoamError::UnexpectedToken { token: ";".into() })
        );
    }

    #[test]
    fn test_dict_close_inside_list_is_rejected() {
        let result = parse("a (1 });");
        assert_eq!(
            result,
            Err(FoamError::UnexpectedToken { token: "}".into() })
        );
    }

    #[test]
    fn test_lexical_error_propagates_from_parse() {
        let result = parse("a: invalid;");
        assert_eq!(
            result,
            Err(FoamError::UnexpectedCharacter {
                preview: ": invalid;".into(),
                position: 1,
            })
        );
    }

    #[test]
    fn test_nested_dict_discards_pending_values() {
        // `a b { ... }` assigns the dict to `a`; the stray `b` is dropped.
        let actual = parse("a b { c 1; }").unwrap();
        assert_eq!(actual, dict(vec![("a", dict(vec![("c", s("1"))]))]));
    }

    #[test]
    fn test_deep_nesting_is_symmetric() {
        let input = "a ( ( ( x ) ) ); b { c { d { e 1; } } }";
        let actual = parse(input).unwrap();
        assert_eq!(
            actual.get("a"),
            Some(&list(vec![list(vec![list(vec![s("x")])])]))
        );
        assert_eq!(
            actual
                .get("b")
                .and_then(|v| v.get("c"))
                .and_then(|v| v.get("d"))
                .and_then(|v| v.get("e")),
            Some(&s("1"))
        );
    }
}
