//! Record accumulator
//!
//! A [`RecordSet`] collects one [`Record`] per displayed entity. Each record is
//! an ordered list of [`Field`]s carrying a machine key (used by JSON and
//! custom templates), a human label (used by table and key-value views) and
//! the already formatted value.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::RecordError;

/// Render a boolean the way every listing shows it
#[must_use]
pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// One displayed value of an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    key: String,
    label: String,
    value: String,
}

impl Field {
    /// Machine key, e.g. `size_gigabytes`
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human label, e.g. `Size`
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Formatted value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Schema entry of a record set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
}

/// Ordered fields of one entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a label-less record from key/value pairs
    ///
    /// # Errors
    /// Returns `DuplicateKey` if a key appears twice.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self, RecordError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.append_field_no_label(key, value)?;
        }
        Ok(record)
    }

    /// Append a field with a human label
    ///
    /// # Errors
    /// Returns `DuplicateKey` if the record already has a field with this key.
    pub fn append_field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<&mut Self, RecordError> {
        let key = key.into();
        if self.get(&key).is_some() {
            return Err(RecordError::DuplicateKey { key });
        }
        self.fields.push(Field {
            key,
            label: label.into(),
            value: value.into(),
        });
        Ok(self)
    }

    /// Append a field whose label is its machine key
    ///
    /// For views that only ever show machine keys (JSON, custom templates).
    ///
    /// # Errors
    /// Returns `DuplicateKey` if the record already has a field with this key.
    pub fn append_field_no_label(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, RecordError> {
        let key = key.into();
        let label = key.clone();
        self.append_field(key, value, label)
    }

    /// Value of the field with this key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(Field::value)
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Machine keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.key, &field.value)?;
        }
        map.end()
    }
}

/// Records produced by one command invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    columns: Option<Vec<Column>>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Create a set whose schema is taken from its first record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with a declared schema
    ///
    /// An empty set built this way still renders its table header.
    pub fn with_columns<K, L>(columns: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        let columns = columns
            .into_iter()
            .map(|(key, label)| Column {
                key: key.into(),
                label: label.into(),
            })
            .collect();
        Self {
            columns: Some(columns),
            records: Vec::new(),
        }
    }

    /// Begin a new record and return it for appending fields
    pub fn start_record(&mut self) -> &mut Record {
        let index = self.records.len();
        self.records.push(Record::new());
        &mut self.records[index]
    }

    /// Append an already built record
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Schema of the set: the declared columns, or the first record's fields
    #[must_use]
    pub fn columns(&self) -> Vec<Column> {
        if let Some(columns) = &self.columns {
            return columns.clone();
        }
        self.records
            .first()
            .map(|record| {
                record
                    .fields()
                    .iter()
                    .map(|field| Column {
                        key: field.key.clone(),
                        label: field.label.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check that every record carries exactly the schema's keys, in order
    ///
    /// # Errors
    /// Returns `SchemaMismatch` for the first record that deviates.
    pub fn validate(&self) -> Result<(), RecordError> {
        let expected: Vec<String> = self.columns().into_iter().map(|c| c.key).collect();
        for (index, record) in self.records.iter().enumerate() {
            if !record.keys().eq(expected.iter().map(String::as_str)) {
                return Err(RecordError::SchemaMismatch {
                    index,
                    expected,
                    found: record.keys().map(str::to_string).collect(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
