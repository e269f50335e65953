//! JSON and YAML dumps of the AST through serde

use crate::conlang::ast::Document;
use crate::conlang::formats::registry::{FormatError, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "AST as pretty-printed JSON, with byte spans"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "AST as YAML, with byte spans"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conlang::parsing::parse_document;
    use serde_json::json;

    #[test]
    fn test_json_shape() {
        let doc = parse_document("k:v.").unwrap();
        let out = JsonFormatter.serialize(&doc).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let value = &parsed["sentences"][0]["value"];
        assert_eq!(value["type"], json!("complement"));
        assert_eq!(value["head"]["prefix"]["text"], json!("k"));
        assert_eq!(value["head"]["value"]["type"], json!("word"));
        assert_eq!(value["head"]["value"]["text"], json!("v"));
        assert_eq!(parsed["sentences"][0]["span"], json!({"start": 0, "end": 4}));
    }

    #[test]
    fn test_yaml_mentions_types() {
        let doc = parse_document("1, a.").unwrap();
        let out = YamlFormatter.serialize(&doc).unwrap();
        assert!(out.contains("type: sequence"));
        assert!(out.contains("type: number"));
        assert!(out.contains("delimiter: comma"));
    }
}
