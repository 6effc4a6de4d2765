use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// A DynamoDB item in its raw, attribute-typed form.
///
/// In DynamoDB, an item is a collection of attributes, each with a name and a
/// typed value (`S`, `N`, `BOOL`, `M`, ...). This is the shape the low-level
/// GetItem and PutItem calls exchange.
///
/// # Primary Key
///
/// An `Item` is also used to address a record: a key item holds only the
/// primary key attributes.
///
/// # Example
///
/// ```
/// use dynamodb::Item;
///
/// let key = Item::new().set_string("BatchId", "4f1c...");
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) attributes: HashMap<String, AttributeValue>,
}

impl Item {
    /// Creates a new empty `Item`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a string attribute.
    pub fn set_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::S(value.into()));
        self
    }

    /// Gets the value of an attribute as a string.
    ///
    /// Returns `None` if the attribute doesn't exist or is not a string.
    #[allow(dead_code)]
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.attributes.get(key).and_then(|av| av.as_s().ok())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// An empty item is what a read of an absent key returns.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attributes sorted by name, for stable console output.
    pub fn sorted(&self) -> Vec<(&String, &AttributeValue)> {
        let mut attributes: Vec<_> = self.attributes.iter().collect();
        attributes.sort_by(|a, b| a.0.cmp(b.0));
        attributes
    }
}

impl From<HashMap<String, AttributeValue>> for Item {
    fn from(attributes: HashMap<String, AttributeValue>) -> Self {
        Self { attributes }
    }
}

impl From<Item> for HashMap<String, AttributeValue> {
    fn from(item: Item) -> Self {
        item.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_string_only_matches_string_attributes() {
        let item = Item::from(HashMap::from([
            ("key1".to_string(), AttributeValue::S("value1".to_string())),
            ("key2".to_string(), AttributeValue::N("42".to_string())),
        ]));

        assert_eq!(item.get_string("key1"), Some(&"value1".to_string()));
        assert_eq!(item.get_string("key2"), None);
        assert_eq!(item.get_string("non_existent"), None);
        assert_eq!(item.len(), 2);
    }

    #[test]
    fn sorted_orders_by_attribute_name() {
        let item = Item::new()
            .set_string("b", "2")
            .set_string("a", "1")
            .set_string("c", "3");

        let names: Vec<&str> = item.sorted().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn default_item_is_empty() {
        assert!(Item::new().is_empty());
    }
}
