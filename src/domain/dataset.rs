// Dataset domain model - samples and per-subject metadata
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Subject identifier, compared as a normalized string.
///
/// Sample ids arrive as strings (`"940"`) while metadata ids arrive as
/// numbers (`940`). Both normalize to the same text, so `"940"` and `940`
/// identify the same subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_number(number: &Number) -> Self {
        if let Some(n) = number.as_i64() {
            Self(n.to_string())
        } else if let Some(n) = number.as_u64() {
            Self(n.to_string())
        } else {
            // Display drops the fractional part of whole floats: 940.0 -> "940"
            Self(number.as_f64().map(|n| n.to_string()).unwrap_or_default())
        }
    }

    /// Identifier carried by a JSON value, if it is a string or a number.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self::from_number(n)),
            _ => None,
        }
    }

    /// True when `raw` (typically a selector value) names this subject.
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for SubjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self::from_number(&n),
        })
    }
}

/// Reads any JSON value; one that is absent or does not fit `T` becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// One sample's OTU measurements. The three sequences are index-aligned.
///
/// Fields are parsed leniently: a malformed record still loads and only
/// fails when it is charted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subject {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<SubjectId>,
    #[serde(default, deserialize_with = "lenient")]
    pub otu_ids: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "lenient")]
    pub otu_labels: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub sample_values: Option<Vec<f64>>,
}

/// Scalar value of a demographics field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => FieldValue::Text(s),
            // Nested values are not expected here; keep them readable
            other => FieldValue::Text(other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Per-subject metadata: an ordered list of fields in document order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Demographics {
    id: Option<SubjectId>,
    fields: Vec<(String, FieldValue)>,
}

impl Demographics {
    pub fn id(&self) -> Option<&SubjectId> {
        self.id.as_ref()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}

impl From<Map<String, Value>> for Demographics {
    fn from(map: Map<String, Value>) -> Self {
        let id = map.get("id").and_then(SubjectId::from_value);
        let fields = map
            .into_iter()
            .map(|(name, value)| (name, FieldValue::from(value)))
            .collect();
        Self { id, fields }
    }
}

/// The fetched document. Read-only once loaded; the top-level `names` list is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    pub metadata: Vec<Demographics>,
    pub samples: Vec<Subject>,
}

impl Dataset {
    /// First subject whose id matches `selection`, in dataset order.
    pub fn find_subject(&self, selection: &str) -> Option<&Subject> {
        self.samples
            .iter()
            .find(|s| s.id.as_ref().is_some_and(|id| id.matches(selection)))
    }

    /// First metadata record whose id matches `selection`, in dataset order.
    pub fn find_demographics(&self, selection: &str) -> Option<&Demographics> {
        self.metadata
            .iter()
            .find(|m| m.id().is_some_and(|id| id.matches(selection)))
    }
}
