use serde::Deserialize;
use serde_json::Value;

/// Parses `text` with no nesting limit. Deep documents grow the stack on the
/// heap instead of overflowing it.
pub fn parse_json(text: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}
