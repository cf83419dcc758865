use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Deep-copies a JSON-serializable value by round-tripping it through its
/// text serialization.
///
/// The copy is structurally equal to the input and shares no state with it.
/// Values the JSON text encoding cannot express fail with the underlying
/// serialization error: maps with non-string keys, nesting past the
/// deserializer recursion limit, or a failing `Serialize` impl.
pub fn deep_clone<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let text = serde_json::to_string(value)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FetchError;
    use serde::Deserialize;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Mapping {
        id: i64,
        label: String,
        links: Vec<String>,
        attributes: HashMap<String, Value>,
    }

    #[test]
    fn test_deep_clone_returns_structurally_equal_value() {
        let mapping = Mapping {
            id: 7,
            label: "lido record".to_string(),
            links: vec!["a".to_string(), "b".to_string()],
            attributes: HashMap::from([
                ("nested".to_string(), json!({"depth": [1, 2, 3]})),
                ("flag".to_string(), json!(true)),
            ]),
        };

        let copy = deep_clone(&mapping).unwrap();
        assert_eq!(copy, mapping);
    }

    #[test]
    fn test_deep_clone_is_independent_of_the_original() {
        let original = json!({"name": "x", "tags": [1, 2]});

        let mut copy = deep_clone(&original).unwrap();
        copy["name"] = json!("y");
        copy["tags"].as_array_mut().unwrap().push(json!(3));

        assert_eq!(original["name"], "x");
        assert_eq!(original["tags"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_deep_clone_fails_on_non_string_map_keys() {
        let mut weird: HashMap<(u8, u8), i32> = HashMap::new();
        weird.insert((1, 2), 3);

        let err = deep_clone(&weird).unwrap_err();
        assert!(matches!(err, FetchError::SerializationError(_)));
    }

    #[test]
    fn test_deep_clone_fails_past_the_recursion_limit() {
        // 超過 serde_json 解析深度上限的巢狀結構
        let nested = (0..200).fold(json!(1), |acc, _| json!([acc]));

        let err = deep_clone(&nested).unwrap_err();
        assert!(matches!(err, FetchError::SerializationError(_)));
    }
}
