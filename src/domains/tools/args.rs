//! Argument decoding shared by all tools.
//!
//! Tool arguments arrive as an untyped JSON object and are decoded straight
//! into each tool's params type, the same type its input schema is derived
//! from. Decoding failures are reported as [`ToolError::InvalidArgs`] naming
//! the offending field. Fields the tool does not know about are ignored.

use rmcp::model::JsonObject;
use serde::{Deserialize, Deserializer, de::DeserializeOwned, de::Error as _};
use serde_json::{Number, Value};

use super::error::ToolError;

/// Decode a tool's argument object into its params type.
pub fn decode<T: DeserializeOwned>(args: &JsonObject) -> Result<T, ToolError> {
    serde_path_to_error::deserialize(Value::Object(args.clone())).map_err(|err| {
        let path = err.path().to_string();
        let message = err.into_inner().to_string();

        if path != "." {
            return ToolError::invalid_args(path, message);
        }
        match missing_field(&message).map(str::to_string) {
            Some(field) => ToolError::invalid_args(field, "is required"),
            None => ToolError::invalid_args("arguments", message),
        }
    })
}

/// Trim a decoded text field, rejecting blank values.
pub fn non_blank(field: &str, value: &str) -> Result<String, ToolError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::invalid_args(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Deserialize an optional field where `null` means absent.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a non-negative count. Integral floats such as `2.0` are
/// integers in JSON Schema and are accepted as well.
pub fn count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    integral(&number)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected a non-negative integer, got {number}")))
}

fn integral(number: &Number) -> Option<usize> {
    if let Some(n) = number.as_u64() {
        return usize::try_from(n).ok();
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 0.0)
        .map(|f| f as usize)
}

fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::FuelType;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        fuel_type: FuelType,
        #[serde(default, deserialize_with = "count")]
        limit: Option<usize>,
    }

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn field_of(err: ToolError) -> String {
        match err {
            ToolError::InvalidArgs { field, .. } => field,
            other => panic!("expected InvalidArgs, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_defaults_and_nulls() {
        let sample: Sample =
            decode(&object(json!({ "name": "x", "fuelType": null, "limit": null }))).unwrap();
        assert_eq!(sample.name, "x");
        assert_eq!(sample.fuel_type, FuelType::Diesel);
        assert_eq!(sample.limit, None);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let sample: Sample = decode(&object(json!({ "name": "x", "extra": [1, 2] }))).unwrap();
        assert_eq!(sample.name, "x");
    }

    #[test]
    fn test_missing_field_is_named() {
        let err = decode::<Sample>(&object(json!({}))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument 'name': is required");
    }

    #[test]
    fn test_wrong_type_is_named() {
        let err = decode::<Sample>(&object(json!({ "name": 42 }))).unwrap_err();
        assert_eq!(field_of(err), "name");

        let err = decode::<Sample>(&object(json!({ "name": "x", "fuelType": "lpg" }))).unwrap_err();
        assert!(err.to_string().contains("unleaded95"));
        assert_eq!(field_of(err), "fuelType");
    }

    #[test]
    fn test_count_accepts_integral_numbers() {
        for (raw, expected) in [(json!(2), 2), (json!(2.0), 2), (json!(0), 0)] {
            let sample: Sample = decode(&object(json!({ "name": "x", "limit": raw }))).unwrap();
            assert_eq!(sample.limit, Some(expected));
        }
    }

    #[test]
    fn test_count_rejects_negative_and_fractional() {
        for raw in [json!(-1), json!(1.5), json!("3")] {
            let err = decode::<Sample>(&object(json!({ "name": "x", "limit": raw }))).unwrap_err();
            assert_eq!(field_of(err), "limit");
        }
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("origin", "  Lugo ").unwrap(), "Lugo");
        assert!(non_blank("origin", "   ").is_err());
    }
}
