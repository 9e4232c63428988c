//! The field rule table and its evaluation engine

use crate::core::form::FormPayload;
use crate::core::outcome::FieldErrors;
use std::collections::BTreeMap;

/// A coerced field value produced by a rule's parse step
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Predicate applied to a parsed value
pub type Check = Box<dyn Fn(&FieldValue) -> bool + Send + Sync>;

fn parse_text(raw: &str) -> Option<FieldValue> {
    Some(FieldValue::Text(raw.to_string()))
}

fn parse_number(raw: &str) -> Option<FieldValue> {
    raw.trim().parse::<f64>().ok().map(FieldValue::Number)
}

/// One row of a schema's rule table.
///
/// `name` keys the error map; `source` keys the form payload. They differ
/// when the wire field name does not match the error-reporting name (the
/// customer form posts `name`/`email`/`image_url` but errors are reported
/// under `customerName`/`customerEmail`/`customerImageUrl`).
pub struct FieldRule {
    name: &'static str,
    source: &'static str,
    parse: fn(&str) -> Option<FieldValue>,
    checks: Vec<Check>,
    message: &'static str,
}

impl FieldRule {
    /// Rule over a string field
    pub fn text(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            source: name,
            parse: parse_text,
            checks: Vec::new(),
            message,
        }
    }

    /// Rule coercing the raw string to a number
    pub fn number(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            source: name,
            parse: parse_number,
            checks: Vec::new(),
            message,
        }
    }

    /// Read the raw value from a different form key than `name`
    pub fn from_source(mut self, source: &'static str) -> Self {
        self.source = source;
        self
    }

    /// Append a predicate to the rule
    pub fn check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Evaluate this rule against a submission.
    ///
    /// An absent field, a failed coercion, and a failed predicate all report
    /// the rule's single configured message.
    fn evaluate(&self, form: &FormPayload) -> Result<FieldValue, String> {
        let raw = form
            .get(self.source)
            .ok_or_else(|| self.message.to_string())?;
        let value = (self.parse)(raw).ok_or_else(|| self.message.to_string())?;
        for check in &self.checks {
            if !check(&value) {
                return Err(self.message.to_string());
            }
        }
        Ok(value)
    }
}

/// The rule subset one entity operation validates against
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// Validate a submission against every rule.
    ///
    /// Rules are evaluated independently; on failure the returned map holds
    /// all violations, keyed by field name. No partial result is produced.
    pub fn validate(
        &self,
        form: &FormPayload,
    ) -> Result<BTreeMap<&'static str, FieldValue>, FieldErrors> {
        let mut values = BTreeMap::new();
        let mut errors = FieldErrors::new();

        for rule in &self.rules {
            match rule.evaluate(form) {
                Ok(value) => {
                    values.insert(rule.name, value);
                }
                Err(message) => {
                    errors.entry(rule.name.to_string()).or_default().push(message);
                }
            }
        }

        if errors.is_empty() { Ok(values) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validators::{greater_than, non_empty};

    fn schema() -> Schema {
        Schema::new(vec![
            FieldRule::text("customerId", "Please select a customer.").check(non_empty()),
            FieldRule::number("amount", "Please enter an amount greater than $0.")
                .check(greater_than(0.0)),
        ])
    }

    #[test]
    fn test_all_rules_pass() {
        let form = FormPayload::from_pairs([("customerId", "cust-1"), ("amount", "12.50")]);
        let values = schema().validate(&form).unwrap();
        assert_eq!(values["customerId"].as_text(), Some("cust-1"));
        assert_eq!(values["amount"].as_number(), Some(12.50));
    }

    #[test]
    fn test_absent_field_reports_rule_message() {
        let form = FormPayload::from_pairs([("amount", "12.50")]);
        let errors = schema().validate(&form).unwrap_err();
        assert_eq!(errors["customerId"], vec!["Please select a customer."]);
        assert!(!errors.contains_key("amount"));
    }

    #[test]
    fn test_coercion_failure_reports_rule_message() {
        let form = FormPayload::from_pairs([("customerId", "cust-1"), ("amount", "abc")]);
        let errors = schema().validate(&form).unwrap_err();
        assert_eq!(
            errors["amount"],
            vec!["Please enter an amount greater than $0."]
        );
    }

    #[test]
    fn test_all_violations_collected_in_one_pass() {
        let form = FormPayload::from_pairs([("customerId", ""), ("amount", "-3")]);
        let errors = schema().validate(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("customerId"));
        assert!(errors.contains_key("amount"));
    }

    #[test]
    fn test_from_source_reads_alternate_form_key() {
        let schema = Schema::new(vec![
            FieldRule::text("customerName", "Please enter a customer name.")
                .from_source("name")
                .check(non_empty()),
        ]);
        let form = FormPayload::from_pairs([("name", "Evil Rabbit")]);
        let values = schema.validate(&form).unwrap();
        assert_eq!(values["customerName"].as_text(), Some("Evil Rabbit"));

        let errors = schema.validate(&FormPayload::new()).unwrap_err();
        assert!(errors.contains_key("customerName"));
    }

    #[test]
    fn test_number_parse_trims_whitespace() {
        let schema = Schema::new(vec![FieldRule::number("amount", "bad amount")]);
        let form = FormPayload::from_pairs([("amount", " 19.99 ")]);
        let values = schema.validate(&form).unwrap();
        assert_eq!(values["amount"].as_number(), Some(19.99));
    }
}
