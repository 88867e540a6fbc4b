use serde_json::json;

/// Returns the structured-output schema for guide responses
pub fn get_guide_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "landmarkName": { "type": "string" },
            "location": { "type": "string" },
            "description": { "type": "string" },
            "history": { "type": "string" },
            "itinerary": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": 3,
                "maxItems": 3
            },
            "food": {
                "type": "array",
                "items": { "type": "string" },
                "minItems": 3,
                "maxItems": 3
            }
        },
        "required": [
            "landmarkName", "location", "description",
            "history", "itinerary", "food"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_all_six_keys() {
        let schema = get_guide_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 6);
        for key in ["landmarkName", "location", "description", "history", "itinerary", "food"] {
            assert!(schema["properties"].get(key).is_some(), "missing {key}");
        }
    }
}
