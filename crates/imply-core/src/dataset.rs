//! Dataset model
//!
//! A `Dataset` is an ordered collection of named, typed columns with
//! unique names and equal lengths, read-only after construction. It is
//! owned by the session that loaded it; everything derived from it is
//! transient.

use crate::error::{DatasetError, DatasetResult, ImplyResult};
use imply_io::{ColumnDescriptor, DataColumn, TableReader, TableSchema};

/// A column with its name
#[derive(Debug, Clone)]
pub struct NamedColumn {
    /// Column name, unique within the dataset
    pub name: String,

    /// Typed column values
    pub data: DataColumn,
}

impl NamedColumn {
    /// Create a named column
    pub fn new(name: impl Into<String>, data: DataColumn) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// An immutable table of named columns
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Unique dataset identifier
    pub id: String,

    /// Source name (file name or upload label)
    pub name: String,

    columns: Vec<NamedColumn>,
    num_rows: usize,
}

impl Dataset {
    /// Build a dataset, enforcing unique names and equal column lengths
    pub fn new(name: impl Into<String>, columns: Vec<NamedColumn>) -> DatasetResult<Self> {
        if columns.is_empty() {
            return Err(DatasetError::Empty);
        }

        let num_rows = columns[0].data.len();
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(DatasetError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
            if column.data.len() != num_rows {
                return Err(DatasetError::LengthMismatch {
                    column: column.name.clone(),
                    expected: num_rows,
                    actual: column.data.len(),
                });
            }
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            columns,
            num_rows,
        })
    }

    /// Load every column of a reader into a dataset
    pub fn from_reader(name: impl Into<String>, reader: &dyn TableReader) -> ImplyResult<Self> {
        let schema = reader.read_schema()?;

        let mut columns = Vec::with_capacity(schema.num_columns());
        for descriptor in &schema.columns {
            let data = reader.read_column(&descriptor.name)?;
            columns.push(NamedColumn::new(descriptor.name.clone(), data));
        }

        Ok(Self::new(name, columns)?)
    }

    /// Resolve a column by name
    pub fn column(&self, name: &str) -> DatasetResult<&NamedColumn> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| DatasetError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    /// All columns in order
    pub fn columns(&self) -> &[NamedColumn] {
        &self.columns
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Schema view of this dataset
    pub fn schema(&self) -> TableSchema {
        let descriptors = self
            .columns
            .iter()
            .map(|c| ColumnDescriptor::new(c.name.clone(), c.data.dtype()))
            .collect();
        TableSchema::new(descriptors, self.num_rows)
    }

    /// First `n` rows as display strings, one vector per row
    ///
    /// Missing values render as empty strings.
    pub fn head(&self, n: usize) -> Vec<Vec<String>> {
        (0..self.num_rows.min(n))
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| c.data.label(row).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}
