use super::Value;

/// One sparse record of named attribute values within a series.
///
/// A name appears at most once; setting a field that already exists replaces
/// its value. First-insertion order is preserved, which is what makes the
/// column order of the encoded wire form deterministic.
#[derive(Debug, Clone, Default)]
pub struct Point {
    fields: Vec<(String, Value)>,
}

impl Point {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add/update a field
    pub fn field(mut self, name: &str, value: Value) -> Self {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name.to_string(), value)),
        }

        self
    }

    /// Add/update a string field
    pub fn field_string(self, name: &str, value: impl Into<String>) -> Self {
        self.field(name, Value::String(value.into()))
    }

    /// Add/update an integer field
    pub fn field_integer(self, name: &str, value: i64) -> Self {
        self.field(name, Value::Integer(value))
    }

    /// Add/update a double field
    pub fn field_double(self, name: &str, value: f64) -> Self {
        self.field(name, Value::Double(value))
    }

    /// Add/update a boolean field
    pub fn field_bool(self, name: &str, value: bool) -> Self {
        self.field(name, Value::Boolean(value))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The fields in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Points compare as maps: same keys, same values, insertion order ignored.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len() && self.fields.iter().all(|(n, v)| other.get(n) == Some(v))
    }
}
