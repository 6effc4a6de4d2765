use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::{BTreeMap, HashMap};

use crate::dynamodb::{Item, JobKey};

/// Options for a document read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetItemConfig {
    /// Attributes to return. Empty means the whole item.
    pub attributes_to_get: Vec<String>,
    pub consistent_read: bool,
}

impl GetItemConfig {
    /// Every job attribute, read with strong consistency.
    pub fn for_job() -> Self {
        Self {
            attributes_to_get: JobKey::names(),
            consistent_read: true,
        }
    }

    /// Builds `(projection_expression, expression_attribute_names)`.
    ///
    /// Names go through `#aN` placeholders since several job attributes
    /// (`Status`, `Source`) are DynamoDB reserved words.
    pub(crate) fn projection(&self) -> Option<(String, HashMap<String, String>)> {
        if self.attributes_to_get.is_empty() {
            return None;
        }

        // Overlapping paths are rejected by DynamoDB, so each name appears once.
        let mut unique: Vec<&String> = Vec::new();
        for attribute in &self.attributes_to_get {
            if !unique.contains(&attribute) {
                unique.push(attribute);
            }
        }

        let mut names = HashMap::new();
        let placeholders: Vec<String> = unique
            .into_iter()
            .enumerate()
            .map(|(i, attribute)| {
                let placeholder = format!("#a{i}");
                names.insert(placeholder.clone(), attribute.clone());
                placeholder
            })
            .collect();

        Some((placeholders.join(", "), names))
    }
}

/// A simplified key-value view of an item.
///
/// Attribute types are flattened into their textual value, so callers see
/// plain strings instead of `AttributeValue`s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    fields: BTreeMap<String, String>,
}

impl Document {
    /// Builds a document from a raw item, keeping only `attributes` when non-empty.
    pub fn from_item(item: Item, attributes: &[String]) -> Self {
        let fields = item
            .attributes
            .into_iter()
            .filter(|(name, _)| attributes.is_empty() || attributes.contains(name))
            .map(|(name, value)| (name, simplify(&value)))
            .collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn simplify(value: &AttributeValue) -> String {
    match value {
        AttributeValue::S(s) => s.clone(),
        AttributeValue::N(n) => n.clone(),
        AttributeValue::Bool(b) => b.to_string(),
        AttributeValue::Null(_) => String::new(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_uses_placeholders_for_every_attribute() {
        let config = GetItemConfig {
            attributes_to_get: vec!["BatchId".to_string(), "Status".to_string()],
            consistent_read: true,
        };

        let (expression, names) = config.projection().unwrap();
        assert_eq!(expression, "#a0, #a1");
        assert_eq!(names.get("#a0"), Some(&"BatchId".to_string()));
        assert_eq!(names.get("#a1"), Some(&"Status".to_string()));
    }

    #[test]
    fn repeated_attributes_are_projected_once() {
        let config = GetItemConfig {
            attributes_to_get: vec![
                "BatchId".to_string(),
                "JobId".to_string(),
                "BatchId".to_string(),
            ],
            consistent_read: false,
        };

        let (expression, names) = config.projection().unwrap();
        assert_eq!(expression, "#a0, #a1");
        assert_eq!(names.len(), 2);
        assert_eq!(names.get("#a0"), Some(&"BatchId".to_string()));
        assert_eq!(names.get("#a1"), Some(&"JobId".to_string()));
    }

    #[test]
    fn empty_attribute_list_means_no_projection() {
        assert!(GetItemConfig::default().projection().is_none());
    }

    #[test]
    fn job_config_requests_all_keys_consistently() {
        let config = GetItemConfig::for_job();
        assert!(config.consistent_read);
        assert_eq!(config.attributes_to_get.len(), 14);
    }

    #[test]
    fn document_keeps_only_requested_attributes() {
        let item = Item::new()
            .set_string("BatchId", "abc123")
            .set_string("JobId", "This is JobId.")
            .set_string("UserId", "This is UserId.");
        let requested = vec!["BatchId".to_string(), "JobId".to_string()];

        let document = Document::from_item(item, &requested);

        assert_eq!(document.len(), 2);
        assert_eq!(document.get("BatchId"), Some("abc123"));
        assert_eq!(document.get("JobId"), Some("This is JobId."));
        assert_eq!(document.get("UserId"), None);
    }

    #[test]
    fn document_flattens_attribute_types() {
        let item = Item::from(HashMap::from([
            ("n".to_string(), AttributeValue::N("3".to_string())),
            ("b".to_string(), AttributeValue::Bool(true)),
            ("z".to_string(), AttributeValue::Null(true)),
        ]));

        let document = Document::from_item(item, &[]);

        assert_eq!(document.get("n"), Some("3"));
        assert_eq!(document.get("b"), Some("true"));
        assert_eq!(document.get("z"), Some(""));
        let names: Vec<&str> = document.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "n", "z"]);
    }

    #[test]
    fn absent_item_gives_empty_document() {
        let config = GetItemConfig::for_job();
        assert!(Document::from_item(Item::new(), &config.attributes_to_get).is_empty());
    }
}
