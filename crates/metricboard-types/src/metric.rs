use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Display value of a metric: either free text or a number.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(Number),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{n}"),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Text(String::new())
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::Text(value)
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        MetricValue::Number(value.into())
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        MetricValue::Number(value.into())
    }
}

impl From<i32> for MetricValue {
    fn from(value: i32) -> Self {
        MetricValue::Number(value.into())
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        // whole floats render like integers
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            return MetricValue::Number((value as i64).into());
        }
        match Number::from_f64(value) {
            Some(n) => MetricValue::Number(n),
            None => MetricValue::Text(value.to_string()),
        }
    }
}

/// A single labeled value on a dashboard, optionally linking to another page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct MetricDescriptor {
    pub title: String,
    pub value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl MetricDescriptor {
    pub fn new(title: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Where activating this metric should navigate to.
    ///
    /// An empty link counts as no link.
    pub fn navigation_target(&self) -> Option<&str> {
        self.link.as_deref().filter(|link| !link.is_empty())
    }
}
