use crate::FoamError;
use crate::ast::{Dict, Value};

/// Render a value tree back to canonical Foam text: one statement per
/// line, 4-space indentation, entries in dict iteration order, no
/// trailing newline.
///
/// The root must be a dict; anything else is an `InvalidRootElement`.
pub fn write(tree: &Value) -> Result<String, FoamError> {
    let Value::Dict(root) = tree else {
        return Err(FoamError::InvalidRootElement);
    };

    let mut output = Vec::new();
    write_dict(root, &mut output, 0);
    Ok(output.join("\n"))
}

fn write_dict(dict: &Dict, output: &mut Vec<String>, level: usize) {
    let space = spacing(level);
    for (entry, value) in dict {
        match value {
            Value::Dict(inner) if inner.is_empty() => {
                // An empty block is pointless; keep it on one line.
                output.push(format!("{space}{} {{}}", safe_value(entry)));
            }
            Value::Dict(inner) => {
                output.push(format!("{space}{}", safe_value(entry)));
                output.push(format!("{space}{{"));
                write_dict(inner, output, level + 1);
                output.push(format!("{space}}}"));
            }
            Value::List(items) => {
                let items = render_items(items);
                output.push(format!("{space}{} ( {items} );", safe_value(entry)));
            }
            scalar => {
                output.push(format!("{space}{} {};", safe_value(entry), render_scalar(scalar)));
            }
        }
    }
}

fn render_items(items: &[Value]) -> String {
    items.iter().map(render_item).collect::<Vec<_>>().join(" ")
}

/// List elements render inline so that nested lists and dicts coming out
/// of the parser re-serialize to parseable text.
fn render_item(value: &Value) -> String {
    match value {
        Value::List(items) => format!("( {} )", render_items(items)),
        Value::Dict(entries) => render_inline_dict(entries),
        scalar => render_scalar(scalar),
    }
}

fn render_inline_dict(entries: &Dict) -> String {
    let mut parts = Vec::new();
    for (entry, value) in entries {
        match value {
            Value::Dict(inner) => {
                parts.push(format!("{} {}", safe_value(entry), render_inline_dict(inner)));
            }
            Value::List(items) => {
                parts.push(format!("{} ( {} );", safe_value(entry), render_items(items)));
            }
            scalar => {
                parts.push(format!("{} {};", safe_value(entry), render_scalar(scalar)));
            }
        }
    }
    format!("{{ {} }}", parts.join(" "))
}

fn render_scalar(value: &Value) -> String {
    match value {
        // A null-like scalar becomes the empty quoted string.
        Value::Null => "\"\"".to_string(),
        // Non-string scalars go out verbatim, unquoted and unescaped.
        Value::Number(n) => n.to_string(),
        Value::String(s) => safe_value(s),
        // Lists and dicts never reach here; write_dict and render_item
        // dispatch them first.
        other => render_item(other),
    }
}

fn spacing(level: usize) -> String {
    " ".repeat(level * 4)
}

/// Escape newlines, then quote if the result is empty or contains one of
/// the trigger characters. Keys and values go through the same predicate
/// independently.
fn safe_value(value: &str) -> String {
    let value = value.replace('\n', "\\n");
    if value.is_empty()
        || value.contains(' ')
        || value.contains("\\n")
        || value.contains('-')
        || value.contains('.')
        || value.contains(':')
    {
        format!("\"{value}\"")
    } else {
        value
    }
}
