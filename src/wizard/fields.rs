use std::collections::BTreeMap;

use serde::Serialize;

/// Value of a single form input
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(f64),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// One field map for the whole wizard, shared by every step
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormFields {
    values: BTreeMap<String, FieldValue>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults<'a, I>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, FieldValue)>,
    {
        Self {
            values: defaults
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text value, or "" when unset or not text
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    /// Trimmed text, `None` when blank
    pub fn optional_text(&self, name: &str) -> Option<String> {
        let value = self.text(name).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Flag(true)))
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(FieldValue::Number(value)) => Some(*value),
            Some(FieldValue::Text(value)) => value.trim().parse().ok(),
            _ => None,
        }
    }

    /// What a browser's `required` check accepts: non-blank text, a
    /// ticked checkbox, or any number
    pub fn is_filled(&self, name: &str) -> bool {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) => !value.trim().is_empty(),
            Some(FieldValue::Flag(value)) => *value,
            Some(FieldValue::Number(value)) => value.is_finite(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_check_matches_input_kinds() {
        let mut fields = FormFields::with_defaults([
            ("country", FieldValue::from("India")),
            ("terms_accepted", FieldValue::from(false)),
        ]);
        fields.set("city", "   ");

        assert!(fields.is_filled("country"));
        assert!(!fields.is_filled("terms_accepted"));
        assert!(!fields.is_filled("city"));
        assert!(!fields.is_filled("missing"));

        fields.set("terms_accepted", true);
        assert!(fields.is_filled("terms_accepted"));
    }

    #[test]
    fn numbers_parse_from_text_inputs() {
        let mut fields = FormFields::new();
        fields.set("donation_amount", " 2500.50 ");
        assert_eq!(fields.number("donation_amount"), Some(2500.5));

        fields.set("donation_amount", "lots");
        assert_eq!(fields.number("donation_amount"), None);
    }

    #[test]
    fn optional_text_drops_blanks() {
        let mut fields = FormFields::new();
        fields.set("website", "  ");
        fields.set("mission", " Feed everyone ");
        assert_eq!(fields.optional_text("website"), None);
        assert_eq!(fields.optional_text("mission").as_deref(), Some("Feed everyone"));
    }
}
