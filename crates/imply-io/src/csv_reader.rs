//! CSV reader with type inference
//!
//! The reader buffers the source text in memory, so the same code path
//! serves files on disk and CSV bodies received over HTTP.

use crate::reader::{IoError, IoResult, TableReader};
use crate::schema::{ColumnDescriptor, ColumnType, DataColumn, TableSchema};
use std::collections::HashMap;
use std::path::Path;

/// CSV reader over an in-memory source
pub struct CsvReader {
    source: String,
    path: Option<String>,
    schema: TableSchema,
    metadata: HashMap<String, String>,
    delimiter: u8,
    has_header: bool,
}

impl CsvReader {
    /// Open a CSV file
    pub fn open(path: &str) -> IoResult<Self> {
        Self::open_with_options(path, b',', true)
    }

    /// Open a CSV file with options
    pub fn open_with_options(path: &str, delimiter: u8, has_header: bool) -> IoResult<Self> {
        if !Path::new(path).exists() {
            return Err(IoError::FileNotFound(path.to_string()));
        }

        let source =
            std::fs::read_to_string(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let mut reader = Self::parse_with_options(source, delimiter, has_header)?;
        reader.path = Some(path.to_string());
        Ok(reader)
    }

    /// Parse CSV text already held in memory
    pub fn parse_str(source: impl Into<String>) -> IoResult<Self> {
        Self::parse_with_options(source, b',', true)
    }

    /// Parse CSV text with options
    pub fn parse_with_options(
        source: impl Into<String>,
        delimiter: u8,
        has_header: bool,
    ) -> IoResult<Self> {
        let source = source.into();

        // Infer schema from the first few rows
        let schema = Self::infer_schema(&source, delimiter, has_header)?;

        let mut metadata = HashMap::new();
        metadata.insert("format".to_string(), "CSV".to_string());
        metadata.insert("delimiter".to_string(), (delimiter as char).to_string());

        Ok(Self {
            source,
            path: None,
            schema,
            metadata,
            delimiter,
            has_header,
        })
    }

    fn infer_schema(source: &str, delimiter: u8, has_header: bool) -> IoResult<TableSchema> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(has_header)
            .from_reader(source.as_bytes());

        let mut headers: Vec<String> = if has_header {
            reader
                .headers()
                .map_err(|e| IoError::InvalidFormat(e.to_string()))?
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            Vec::new()
        };

        let mut sample_values: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut num_records = 0;

        for result in reader.records() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;

            // Without a header row, column names come from the first record's width
            if headers.is_empty() {
                headers = (0..record.len()).map(|i| format!("col_{}", i)).collect();
                sample_values = vec![Vec::new(); headers.len()];
            }

            for (i, value) in record.iter().enumerate() {
                if i < sample_values.len() {
                    sample_values[i].push(value.to_string());
                }
            }
            num_records += 1;

            // Sample first 100 rows for type inference
            if num_records >= 100 {
                break;
            }
        }

        // Continue counting records
        for result in reader.records() {
            result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            num_records += 1;
        }

        let columns: Vec<ColumnDescriptor> = headers
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let dtype = if i < sample_values.len() {
                    infer_type(&sample_values[i])
                } else {
                    ColumnType::String
                };
                ColumnDescriptor::new(name, dtype)
            })
            .collect();

        Ok(TableSchema::new(columns, num_records))
    }
}

impl TableReader for CsvReader {
    fn read_schema(&self) -> IoResult<TableSchema> {
        Ok(self.schema.clone())
    }

    fn read_column(&self, name: &str) -> IoResult<DataColumn> {
        let col_index = self
            .schema
            .column_index(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))?;
        let dtype = self.schema.columns[col_index].dtype;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_header)
            .from_reader(self.source.as_bytes());

        let mut values = Vec::with_capacity(self.schema.num_records);
        for result in reader.records() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            values.push(record.get(col_index).unwrap_or("").to_string());
        }

        Ok(parse_column(&values, dtype))
    }

    fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

/// Infer column type from sample values
///
/// Int64 and Bool are only assigned when the sample has no missing
/// cells; a numeric column with gaps becomes Float64 so the gaps can
/// be carried as NaN.
fn infer_type(values: &[String]) -> ColumnType {
    if values.is_empty() {
        return ColumnType::String;
    }

    let non_empty: Vec<&str> = values
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .collect();
    if non_empty.is_empty() {
        return ColumnType::String;
    }
    let complete = non_empty.len() == values.len();

    // Try parsing as integers
    if complete && non_empty.iter().all(|s| s.parse::<i64>().is_ok()) {
        return ColumnType::Int64;
    }

    // Try parsing as floats
    if non_empty.iter().all(|s| s.parse::<f64>().is_ok()) {
        return ColumnType::Float64;
    }

    // Try parsing as booleans
    if complete
        && non_empty
            .iter()
            .all(|s| matches!(s.to_lowercase().as_str(), "true" | "false" | "yes" | "no"))
    {
        return ColumnType::Bool;
    }

    ColumnType::String
}

/// Parse column values into a DataColumn
///
/// Inference only samples the first rows, so a cell past the sample
/// window may fail to parse under the inferred type. Such columns are
/// demoted to Float64 so the gap is carried as NaN instead of a
/// fabricated value.
fn parse_column(values: &[String], dtype: ColumnType) -> DataColumn {
    match dtype {
        ColumnType::Float64 => DataColumn::Float64(parse_floats(values)),
        ColumnType::Int64 => {
            match values.iter().map(|s| s.parse()).collect::<Result<Vec<i64>, _>>() {
                Ok(parsed) => DataColumn::Int64(parsed),
                Err(_) => DataColumn::Float64(parse_floats(values)),
            }
        }
        ColumnType::Bool => {
            match values.iter().map(|s| parse_bool_token(s)).collect::<Option<Vec<bool>>>() {
                Some(parsed) => DataColumn::Bool(parsed),
                None => DataColumn::Float64(
                    values
                        .iter()
                        .map(|s| match parse_bool_token(s) {
                            Some(b) => {
                                if b {
                                    1.0
                                } else {
                                    0.0
                                }
                            }
                            None => f64::NAN,
                        })
                        .collect(),
                ),
            }
        }
        ColumnType::String => DataColumn::String(values.to_vec()),
    }
}

fn parse_floats(values: &[String]) -> Vec<f64> {
    values
        .iter()
        .map(|s| s.parse().unwrap_or(f64::NAN))
        .collect()
}

fn parse_bool_token(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_type_int() {
        let values = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        assert_eq!(infer_type(&values), ColumnType::Int64);
    }

    #[test]
    fn test_infer_type_float() {
        let values = vec!["1.5".to_string(), "2.7".to_string(), "3.14".to_string()];
        assert_eq!(infer_type(&values), ColumnType::Float64);
    }

    #[test]
    fn test_infer_type_int_with_gaps_is_float() {
        let values = vec!["1".to_string(), "".to_string(), "3".to_string()];
        assert_eq!(infer_type(&values), ColumnType::Float64);
    }

    #[test]
    fn test_infer_type_bool() {
        let values = vec!["true".to_string(), "false".to_string(), "yes".to_string()];
        assert_eq!(infer_type(&values), ColumnType::Bool);
    }

    #[test]
    fn test_infer_type_string() {
        let values = vec!["hello".to_string(), "world".to_string()];
        assert_eq!(infer_type(&values), ColumnType::String);
    }

    #[test]
    fn test_parse_str_schema() {
        let reader = CsvReader::parse_str("name,age\nalice,31\nbob,24\n").unwrap();
        let schema = reader.read_schema().unwrap();

        assert_eq!(schema.num_records, 2);
        assert_eq!(schema.column("name").unwrap().dtype, ColumnType::String);
        assert_eq!(schema.column("age").unwrap().dtype, ColumnType::Int64);
    }

    #[test]
    fn test_read_column_values() {
        let reader = CsvReader::parse_str("x,y\n1.5,a\n2.5,b\n").unwrap();

        match reader.read_column("x").unwrap() {
            DataColumn::Float64(v) => assert_eq!(v, vec![1.5, 2.5]),
            other => panic!("unexpected column type: {:?}", other.dtype()),
        }

        assert!(matches!(
            reader.read_column("missing"),
            Err(IoError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_missing_numeric_cells_become_nan() {
        let reader = CsvReader::parse_str("x,label\n1,a\n,b\n3,c\n").unwrap();
        let schema = reader.read_schema().unwrap();
        assert_eq!(schema.column("x").unwrap().dtype, ColumnType::Float64);

        match reader.read_column("x").unwrap() {
            DataColumn::Float64(v) => {
                assert_eq!(v.len(), 3);
                assert_eq!(v[0], 1.0);
                assert!(v[1].is_nan());
                assert_eq!(v[2], 3.0);
            }
            other => panic!("unexpected column type: {:?}", other.dtype()),
        }
    }

    #[test]
    fn test_int_gap_after_inference_sample_becomes_nan() {
        // 100 complete integer rows fill the inference sample; the gap
        // in row 101 must surface as NaN, not a fabricated zero
        let mut source = String::from("x,label\n");
        for i in 0..100 {
            source.push_str(&format!("{},a\n", i));
        }
        source.push_str(",b\n");

        let reader = CsvReader::parse_str(source).unwrap();
        let schema = reader.read_schema().unwrap();
        assert_eq!(schema.column("x").unwrap().dtype, ColumnType::Int64);

        match reader.read_column("x").unwrap() {
            DataColumn::Float64(v) => {
                assert_eq!(v.len(), 101);
                assert_eq!(v[0], 0.0);
                assert_eq!(v[99], 99.0);
                assert!(v[100].is_nan());
            }
            other => panic!("expected demotion to Float64, got {:?}", other.dtype()),
        }
    }

    #[test]
    fn test_bool_gap_after_inference_sample_becomes_nan() {
        let mut source = String::from("flag,label\n");
        for i in 0..100 {
            source.push_str(if i % 2 == 0 { "true,a\n" } else { "false,a\n" });
        }
        source.push_str(",b\n");

        let reader = CsvReader::parse_str(source).unwrap();
        let schema = reader.read_schema().unwrap();
        assert_eq!(schema.column("flag").unwrap().dtype, ColumnType::Bool);

        match reader.read_column("flag").unwrap() {
            DataColumn::Float64(v) => {
                assert_eq!(v.len(), 101);
                assert_eq!(v[0], 1.0);
                assert_eq!(v[1], 0.0);
                assert!(v[100].is_nan());
            }
            other => panic!("expected demotion to Float64, got {:?}", other.dtype()),
        }
    }

    #[test]
    fn test_complete_int_column_stays_int() {
        let reader = CsvReader::parse_str("x\n1\n2\n3\n").unwrap();
        match reader.read_column("x").unwrap() {
            DataColumn::Int64(v) => assert_eq!(v, vec![1, 2, 3]),
            other => panic!("unexpected column type: {:?}", other.dtype()),
        }
    }

    #[test]
    fn test_parse_tsv_without_header() {
        let reader = CsvReader::parse_with_options("1\tred\n2\tblue\n", b'\t', false).unwrap();
        let schema = reader.read_schema().unwrap();

        assert_eq!(schema.num_records, 2);
        assert_eq!(schema.column_names(), vec!["col_0", "col_1"]);
        assert_eq!(schema.column("col_0").unwrap().dtype, ColumnType::Int64);
        assert_eq!(schema.column("col_1").unwrap().dtype, ColumnType::String);
    }
}
