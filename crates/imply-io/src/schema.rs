//! Schema and column types for tabular data

use serde::{Deserialize, Serialize};

/// Schema describing the structure of a table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSchema {
    /// Column descriptors
    pub columns: Vec<ColumnDescriptor>,

    /// Number of records
    pub num_records: usize,
}

impl TableSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
        }
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Data type
    pub dtype: ColumnType,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Float64,
    Int64,
    Bool,
    String,
}

impl ColumnType {
    /// Check if this is a numeric type
    ///
    /// Booleans count as numeric: they enter calculations as 0/1.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnType::Float64 | ColumnType::Int64 | ColumnType::Bool
        )
    }
}

/// A column of data
#[derive(Debug, Clone)]
pub enum DataColumn {
    Float64(Vec<f64>),
    Int64(Vec<i64>),
    Bool(Vec<bool>),
    String(Vec<String>),
}

impl DataColumn {
    /// Get the column type
    pub fn dtype(&self) -> ColumnType {
        match self {
            DataColumn::Float64(_) => ColumnType::Float64,
            DataColumn::Int64(_) => ColumnType::Int64,
            DataColumn::Bool(_) => ColumnType::Bool,
            DataColumn::String(_) => ColumnType::String,
        }
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        match self {
            DataColumn::Float64(v) => v.len(),
            DataColumn::Int64(v) => v.len(),
            DataColumn::Bool(v) => v.len(),
            DataColumn::String(v) => v.len(),
        }
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert to f64 (for numeric types)
    ///
    /// Booleans map to 0.0/1.0. String columns return `None`. Missing
    /// float cells stay NaN; callers filter non-finite values themselves.
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            DataColumn::Float64(v) => Some(v.clone()),
            DataColumn::Int64(v) => Some(v.iter().map(|&x| x as f64).collect()),
            DataColumn::Bool(v) => Some(v.iter().map(|&b| if b { 1.0 } else { 0.0 }).collect()),
            DataColumn::String(_) => None,
        }
    }

    /// Display label for the value at `index`
    ///
    /// Missing values (empty strings, non-finite numbers) and
    /// out-of-range indices are `None`.
    pub fn label(&self, index: usize) -> Option<String> {
        match self {
            DataColumn::Float64(v) => v
                .get(index)
                .copied()
                .filter(|x| x.is_finite())
                .map(|x| x.to_string()),
            DataColumn::Int64(v) => v.get(index).map(|x| x.to_string()),
            DataColumn::Bool(v) => v.get(index).map(|b| b.to_string()),
            DataColumn::String(v) => v.get(index).filter(|s| !s.is_empty()).cloned(),
        }
    }

    /// Per-row display labels for the whole column
    pub fn labels(&self) -> Vec<Option<String>> {
        (0..self.len()).map(|i| self.label(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_column_lookup() {
        let schema = TableSchema::new(
            vec![
                ColumnDescriptor::new("x", ColumnType::Float64),
                ColumnDescriptor::new("y", ColumnType::String),
            ],
            100,
        );

        assert_eq!(schema.column_index("x"), Some(0));
        assert_eq!(schema.column_index("y"), Some(1));
        assert_eq!(schema.column_index("z"), None);
        assert_eq!(schema.column_names(), vec!["x", "y"]);
    }

    #[test]
    fn test_data_column_conversion() {
        let col = DataColumn::Int64(vec![1, 2, 3, 4, 5]);
        let f64_values = col.to_f64().unwrap();
        assert_eq!(f64_values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        let col = DataColumn::Bool(vec![true, false, true]);
        assert_eq!(col.to_f64().unwrap(), vec![1.0, 0.0, 1.0]);

        let col = DataColumn::String(vec!["a".to_string()]);
        assert!(col.to_f64().is_none());
    }

    #[test]
    fn test_column_type_properties() {
        assert!(ColumnType::Float64.is_numeric());
        assert!(ColumnType::Int64.is_numeric());
        assert!(ColumnType::Bool.is_numeric());
        assert!(!ColumnType::String.is_numeric());
    }

    #[test]
    fn test_labels_mark_missing_values() {
        let col = DataColumn::String(vec!["a".to_string(), "".to_string(), "b".to_string()]);
        assert_eq!(
            col.labels(),
            vec![Some("a".to_string()), None, Some("b".to_string())]
        );

        let col = DataColumn::Float64(vec![1.0, f64::NAN, 2.5]);
        assert_eq!(
            col.labels(),
            vec![Some("1".to_string()), None, Some("2.5".to_string())]
        );
    }
}
