use std::ops::Deref;

use serde::Serialize;
use thiserror::Error;

/// A single constraint violation found while validating a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    /// Location of the offending value, starting at the top level field.
    /// Empty if the payload itself has the wrong shape.
    pub path: Vec<PathSegment>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    TooSmall,
    TooBig,
    InvalidEmail,
    InvalidEnumValue,
    InvalidLiteral,
    /// One or more fields of the conditionally required group are missing.
    MissingGroupFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl ValidationIssue {
    pub fn new(code: IssueCode, field: &str, message: impl Into<String>) -> Self {
        Self {
            code,
            path: vec![PathSegment::Field(field.into())],
            message: message.into(),
        }
    }

    /// An issue concerning the payload as a whole rather than one of its fields.
    pub fn root(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            path: Vec::new(),
            message: message.into(),
        }
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push(PathSegment::Index(index));
        self
    }

    /// The top level field this issue is attributed to.
    pub fn field(&self) -> Option<&str> {
        match self.path.first() {
            Some(PathSegment::Field(field)) => Some(field),
            _ => None,
        }
    }

    pub fn is_group_violation(&self) -> bool {
        self.code == IssueCode::MissingGroupFields
    }
}

/// All issues found in one submission, in the order the fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("submission has {} validation issue(s)", .0.len())]
pub struct ValidationIssues(Vec<ValidationIssue>);

impl ValidationIssues {
    pub fn push(&mut self, issue: ValidationIssue) {
        self.0.push(issue);
    }

    /// Issues attributed to the given top level field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.0.iter().filter(move |issue| issue.field() == Some(field))
    }

    pub fn into_vec(self) -> Vec<ValidationIssue> {
        self.0
    }
}

impl Deref for ValidationIssues {
    type Target = [ValidationIssue];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ValidationIssue> for ValidationIssues {
    fn from(issue: ValidationIssue) -> Self {
        Self(vec![issue])
    }
}

impl From<Vec<ValidationIssue>> for ValidationIssues {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        Self(issues)
    }
}

impl<'a> IntoIterator for &'a ValidationIssues {
    type Item = &'a ValidationIssue;
    type IntoIter = std::slice::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
