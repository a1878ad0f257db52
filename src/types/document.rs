//! Document model: a JSON tree decoded from the fetched swagger bytes

use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Recursively-defined tree value: mapping, sequence or scalar.
///
/// Mappings keep their source key order and numbers keep their source text.
pub type Document = Value;

/// Decodes raw bytes into a [`Document`].
///
/// # Errors
///
/// Returns [`crate::error::Error::Decode`] for malformed input.
pub fn parse_document(bytes: &[u8]) -> Result<Document> {
    let document: Document = serde_json::from_slice(bytes)?;
    debug!("Decoded document of kind {}", kind_of(&document));
    Ok(document)
}

/// Encodes a [`Document`] as compact JSON (no indentation).
pub fn encode_document(document: &Document) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(document)?)
}

/// Short name of the variant at the root, for log lines
pub fn kind_of(document: &Document) -> &'static str {
    match document {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "bool",
        Value::Null => "null",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn parses_every_variant() {
        let doc = parse_document(br#"{"s":"x","n":1.5,"b":true,"z":null,"a":[1,2]}"#).unwrap();
        assert_eq!(doc, json!({"s": "x", "n": 1.5, "b": true, "z": null, "a": [1, 2]}));
        assert_eq!(kind_of(&doc), "object");
        assert_eq!(kind_of(&doc["a"]), "array");
    }

    #[test]
    fn malformed_input_is_a_decode_error() {
        assert!(matches!(parse_document(b"{\"paths\": "), Err(Error::Decode(_))));
        assert!(matches!(parse_document(b""), Err(Error::Decode(_))));
    }

    #[test]
    fn out_of_range_integers_survive_trimming() {
        let doc = parse_document(br#"{"maximum":18446744073709551616,"description":"x","ratio":0.10000000000000000555}"#).unwrap();
        let trimmed = crate::cleaner::trim_descriptions(&doc);
        let encoded = String::from_utf8(encode_document(&trimmed).unwrap()).unwrap();
        assert_eq!(
            encoded,
            r#"{"maximum":18446744073709551616,"description":"","ratio":0.10000000000000000555}"#
        );
    }

    #[test]
    fn source_key_order_is_kept() {
        let doc = parse_document(br#"{"swagger":"2.0","info":{"title":"t","description":"d"},"paths":{}}"#).unwrap();
        let trimmed = crate::cleaner::trim_descriptions(&doc);
        let encoded = String::from_utf8(encode_document(&trimmed).unwrap()).unwrap();
        assert!(encoded.starts_with(r#"{"swagger""#));
        assert_eq!(encoded, r#"{"swagger":"2.0","info":{"title":"t","description":""},"paths":{}}"#);
    }

    #[test]
    fn encoding_is_compact() {
        let doc = json!({"paths": {"/v1": {"get": {"description": ""}}}, "swagger": "2.0"});
        let encoded = String::from_utf8(encode_document(&doc).unwrap()).unwrap();
        assert_eq!(encoded, r#"{"paths":{"/v1":{"get":{"description":""}}},"swagger":"2.0"}"#);
    }
}
