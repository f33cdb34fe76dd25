//! Reading untyped form payloads.
//!
//! Forms arrive as arbitrary JSON. A [`FormFields`] walks the top level object
//! field by field and records a [`ValidationIssue`] for every value that does
//! not have the expected shape, so that all problems of a submission can be
//! reported at once. Accessors return `None` whenever they record an issue.

use serde_json::{Map, Value};

use crate::issue::{IssueCode, ValidationIssue, ValidationIssues};

pub const REQUIRED_MESSAGE: &str = "Required";

#[derive(Debug)]
pub struct FormFields<'a> {
    object: &'a Map<String, Value>,
    issues: ValidationIssues,
}

impl<'a> FormFields<'a> {
    /// Fails with a single root issue if the payload is not a JSON object.
    pub fn new(payload: &'a Value) -> Result<Self, ValidationIssues> {
        match payload {
            Value::Object(object) => Ok(Self {
                object,
                issues: ValidationIssues::default(),
            }),
            other => Err(ValidationIssue::root(
                IssueCode::InvalidType,
                format!("Expected object, received {}", kind(other)),
            )
            .into()),
        }
    }

    /// The raw value of a field. `None` if the field is absent.
    pub fn value(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field)
    }

    /// Whether a field counts as filled in: absent, `null`, `""`, `0` and
    /// `false` do not.
    pub fn is_truthy(&self, field: &str) -> bool {
        is_truthy(self.value(field))
    }

    pub fn required_str(&mut self, field: &str) -> Option<&'a str> {
        match self.value(field) {
            None => {
                self.push(ValidationIssue::new(
                    IssueCode::InvalidType,
                    field,
                    REQUIRED_MESSAGE,
                ));
                None
            }
            Some(value) => self.expect_str(field, value),
        }
    }

    /// Like [`required_str`](Self::required_str), but absent and `null`
    /// values yield `None` without recording an issue.
    pub fn optional_str(&mut self, field: &str) -> Option<&'a str> {
        match self.value(field) {
            None | Some(Value::Null) => None,
            Some(value) => self.expect_str(field, value),
        }
    }

    /// The elements of an optional array field. Absent and `null` values
    /// yield `None` without recording an issue.
    pub fn optional_array(&mut self, field: &str) -> Option<&'a [Value]> {
        match self.value(field) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                self.push(type_mismatch(field, "array", other));
                None
            }
        }
    }

    /// Turns the result of parsing a field into its typed value, recording
    /// the issue described by `describe` on failure.
    pub fn check<T, E>(
        &mut self,
        field: &str,
        result: Result<T, E>,
        describe: impl FnOnce(E) -> (IssueCode, &'static str),
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                let (code, message) = describe(err);
                self.push(ValidationIssue::new(code, field, message));
                None
            }
        }
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Whether no issue has been recorded so far.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_issues(self) -> ValidationIssues {
        self.issues
    }

    fn expect_str(&mut self, field: &str, value: &'a Value) -> Option<&'a str> {
        match value {
            Value::String(value) => Some(value),
            other => {
                self.push(type_mismatch(field, "string", other));
                None
            }
        }
    }
}

pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(value)) => *value,
        Some(Value::Number(value)) => value.as_f64().is_some_and(|value| value != 0.0),
        Some(Value::String(value)) => !value.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

fn type_mismatch(field: &str, expected: &str, received: &Value) -> ValidationIssue {
    ValidationIssue::new(
        IssueCode::InvalidType,
        field,
        format!("Expected {expected}, received {}", kind(received)),
    )
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use kaapi_utils::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn truthiness() {
        for (value, expected) in [
            (json!(null), false),
            (json!(""), false),
            (json!(0), false),
            (json!(0.0), false),
            (json!(false), false),
            (json!(" "), true),
            (json!("x"), true),
            (json!(7), true),
            (json!(-1.5), true),
            (json!(true), true),
            (json!([]), true),
            (json!({}), true),
        ] {
            assert_eq!(is_truthy(Some(&value)), expected, "{value}");
        }
        assert!(!is_truthy(None));
    }

    #[test]
    fn non_object_payload() {
        let payload = json!(["a", "b"]);
        let result = FormFields::new(&payload);

        let issues = result.unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].path.is_empty());
        assert_eq!(issues[0].message, "Expected object, received array");
    }

    #[test]
    fn required_str() {
        let payload = json!({"a": "hello", "b": 42, "c": null});
        let mut fields = FormFields::new(&payload).unwrap();

        assert_eq!(fields.required_str("a"), Some("hello"));
        assert_eq!(fields.required_str("b"), None);
        assert_eq!(fields.required_str("c"), None);
        assert_eq!(fields.required_str("d"), None);

        let messages = fields
            .into_issues()
            .iter()
            .map(|issue| (issue.field().unwrap().to_owned(), issue.message.clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            messages,
            [
                ("b".to_owned(), "Expected string, received number".to_owned()),
                ("c".to_owned(), "Expected string, received null".to_owned()),
                ("d".to_owned(), "Required".to_owned()),
            ]
        );
    }

    #[test]
    fn optional_values() {
        let payload = json!({"a": null, "b": true, "c": ["x"], "d": "x"});
        let mut fields = FormFields::new(&payload).unwrap();

        assert_eq!(fields.optional_str("a"), None);
        assert_eq!(fields.optional_str("missing"), None);
        assert!(fields.is_clean());

        assert_eq!(fields.optional_str("b"), None);
        assert_eq!(fields.optional_array("c"), Some(&[json!("x")][..]));
        assert_eq!(fields.optional_array("d"), None);

        let issues = fields.into_issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, "Expected string, received boolean");
        assert_eq!(issues[1].message, "Expected array, received string");
    }

    #[test]
    fn check() {
        let payload = json!({});
        let mut fields = FormFields::new(&payload).unwrap();

        assert_eq!(
            fields.check("n", Ok::<_, ()>(1), |()| (IssueCode::TooSmall, "nope")),
            Some(1)
        );
        assert_eq!(
            fields.check("n", Err::<i32, _>(()), |()| (IssueCode::TooSmall, "nope")),
            None
        );

        let issues = fields.into_issues();
        assert_matches!(
            &issues[..],
            [ValidationIssue {
                code: IssueCode::TooSmall,
                ..
            }]
        );
    }
}
