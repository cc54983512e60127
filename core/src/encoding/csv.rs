use crate::prelude::{FinderError, FinderResult};
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// A single CSV row keyed by column name.
pub type CsvRow = Map<String, Value>;

/// Wraps `text` in double quotes, escaping inner quotes as `\"`.
///
/// This is intentionally not RFC 4180 quoting (which doubles the quote);
/// downstream consumers of the customer export expect backslash escapes.
pub fn quote_text(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\\\""))
}

/// Integers print as-is; floats use the shortest decimal form, so `2.0`
/// renders as `2`.
fn render_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        int.to_string()
    } else if let Some(int) = number.as_u64() {
        int.to_string()
    } else {
        number
            .as_f64()
            .map(|float| format!("{}", float))
            .unwrap_or_else(|| number.to_string())
    }
}

fn render_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => quote_text(text),
        Some(Value::Number(number)) => render_number(number),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Renders `rows` as CSV.
///
/// The header is the sorted key set of the first row; later rows are
/// rendered against it as-is, with absent keys left empty. Rows are joined
/// with `\n` and no trailing newline is written. No rows yields `""`.
pub fn to_csv(rows: &[CsvRow]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let mut headers: Vec<&str> = first.keys().map(String::as_str).collect();
    headers.sort_unstable();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let fields: Vec<String> = headers
            .iter()
            .map(|header| render_value(row.get(*header)))
            .collect();
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// Serializes each record through serde and renders the result with
/// [`to_csv`]. Records must serialize to JSON objects. Non-finite floats
/// become JSON `null` on the way and therefore render as empty fields.
pub fn to_csv_records<T: Serialize>(records: &[T]) -> FinderResult<String> {
    let rows = records
        .iter()
        .map(|record| match serde_json::to_value(record) {
            Ok(Value::Object(row)) => Ok(row),
            Ok(other) => Err(FinderError::Encoding(format!(
                "expected an object, found {}",
                other
            ))),
            Err(err) => Err(FinderError::Encoding(err.to_string())),
        })
        .collect::<FinderResult<Vec<_>>>()?;

    Ok(to_csv(&rows))
}
