use serde_json::Value;

use crate::parse::schema::SchemaObj;

const INDENT: &str = "  ";

/// Synthesize an example JSON-ish literal for a schema.
///
/// Explicit `example` values win for primitives; otherwise a type-keyed
/// placeholder is used. `$ref` nodes become a comment block naming the
/// reference. Nested containers are indented two spaces per level and
/// object properties follow document order.
pub fn schema_example(schema: &SchemaObj) -> String {
    render(schema, 0)
}

fn render(schema: &SchemaObj, depth: usize) -> String {
    match schema {
        SchemaObj::Ref(ref_path) => block(
            ('{', '}'),
            &[
                format!("// Reference to {ref_path}"),
                "// Replace with actual data".to_string(),
            ],
            "\n",
            depth,
        ),
        SchemaObj::String { example } => match example {
            Some(Value::String(s)) => Value::String(s.clone()).to_string(),
            Some(other) => Value::String(other.to_string()).to_string(),
            None => "\"string\"".to_string(),
        },
        SchemaObj::Integer { example } | SchemaObj::Number { example } => {
            example.as_ref().map_or_else(|| "0".to_string(), plain_value)
        }
        SchemaObj::Boolean { example } => example
            .as_ref()
            .map_or_else(|| "false".to_string(), plain_value),
        SchemaObj::Array { items: Some(items) } => {
            block(('[', ']'), &[render(items, depth + 1)], ",\n", depth)
        }
        SchemaObj::Array { items: None } => "[]".to_string(),
        SchemaObj::Object { properties } if properties.is_empty() => "{}".to_string(),
        SchemaObj::Object { properties } => {
            let entries: Vec<String> = properties
                .iter()
                .map(|(name, prop)| {
                    format!(
                        "{}: {}",
                        Value::String(name.clone()),
                        render(prop, depth + 1)
                    )
                })
                .collect();
            block(('{', '}'), &entries, ",\n", depth)
        }
        SchemaObj::Unknown { .. } => "{}".to_string(),
    }
}

fn block(delims: (char, char), entries: &[String], separator: &str, depth: usize) -> String {
    let inner = INDENT.repeat(depth + 1);
    let outer = INDENT.repeat(depth);
    let body = entries
        .iter()
        .map(|entry| format!("{inner}{entry}"))
        .collect::<Vec<_>>()
        .join(separator);
    format!("{}\n{body}\n{outer}{}", delims.0, delims.1)
}

/// Render a JSON value the way it reads in prose: strings without quotes,
/// everything else as JSON.
pub fn plain_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
