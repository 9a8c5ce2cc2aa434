pub(crate) mod export;
pub(crate) mod record;
pub(crate) mod search;

use anyhow::Result;
use serde_json::Value;

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_status(status: &str, extra: Value) -> Result<()> {
    let mut body = serde_json::json!({ "status": status });
    if let (Some(target), Value::Object(fields)) = (body.as_object_mut(), extra) {
        target.extend(fields);
    }
    print_json(&body)
}
