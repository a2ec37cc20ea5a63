//! The fixed sample dataset

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};

use crate::DataError;

/// A single row of the sample table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub sales: i64,
    pub profit: i64,
    pub customers: i64,
    pub region: String,
    pub category: String,
}

// name, sales, profit, customers, region, category
const SAMPLE_ROWS: [(&str, i64, i64, i64, &str, &str); 6] = [
    ("Jan", 4000, 2400, 240, "North", "Electronics"),
    ("Feb", 3000, 1398, 221, "South", "Clothing"),
    ("Mar", 2000, 9800, 229, "East", "Electronics"),
    ("Apr", 2780, 3908, 200, "West", "Books"),
    ("May", 1890, 4800, 218, "North", "Clothing"),
    ("Jun", 2390, 3800, 250, "South", "Electronics"),
];

/// The six sample rows, in display order
pub fn sample_records() -> Vec<Record> {
    SAMPLE_ROWS
        .iter()
        .map(|(name, sales, profit, customers, region, category)| Record {
            name: name.to_string(),
            sales: *sales,
            profit: *profit,
            customers: *customers,
            region: region.to_string(),
            category: category.to_string(),
        })
        .collect()
}

/// Immutable tabular data shared by every chart
#[derive(Debug, Clone)]
pub struct Dataset {
    batch: RecordBatch,
}

impl Dataset {
    /// Build the sample dataset
    pub fn sample() -> Result<Self, DataError> {
        Self::from_records(&sample_records())
    }

    /// Build a dataset from typed rows
    pub fn from_records(records: &[Record]) -> Result<Self, DataError> {
        let schema = Schema::new(vec![
            Field::new("name", DataType::Utf8, false),
            Field::new("sales", DataType::Int64, false),
            Field::new("profit", DataType::Int64, false),
            Field::new("customers", DataType::Int64, false),
            Field::new("region", DataType::Utf8, false),
            Field::new("category", DataType::Utf8, false),
        ]);

        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.name.as_str()))),
            Arc::new(Int64Array::from_iter_values(records.iter().map(|r| r.sales))),
            Arc::new(Int64Array::from_iter_values(records.iter().map(|r| r.profit))),
            Arc::new(Int64Array::from_iter_values(records.iter().map(|r| r.customers))),
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.region.as_str()))),
            Arc::new(StringArray::from_iter_values(records.iter().map(|r| r.category.as_str()))),
        ];

        let batch = RecordBatch::try_new(Arc::new(schema), columns)?;
        tracing::debug!("Built dataset with {} rows", batch.num_rows());

        Ok(Self { batch })
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Column names in schema order
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Values of a column rendered as text, one entry per row.
    ///
    /// Returns `None` if the column does not exist.
    pub fn text_values(&self, column: &str) -> Option<Vec<Option<String>>> {
        let array = self.batch.column_by_name(column)?;

        let values = (0..array.len())
            .map(|i| {
                if array.is_null(i) {
                    return None;
                }
                if let Some(str_array) = array.as_any().downcast_ref::<StringArray>() {
                    Some(str_array.value(i).to_string())
                } else {
                    arrow::util::display::array_value_to_string(array, i).ok()
                }
            })
            .collect();

        Some(values)
    }

    /// Numeric values of a column, one entry per row.
    ///
    /// Returns `None` if the column does not exist. Rows of a non-numeric
    /// column come back as `None` rather than failing the whole column.
    pub fn numeric_values(&self, column: &str) -> Option<Vec<Option<f64>>> {
        let array = self.batch.column_by_name(column)?;

        match numeric_column(array) {
            Ok(values) => Some(values),
            Err(e) => {
                tracing::debug!("{} while reading '{}' as numbers", e, column);
                Some(vec![None; array.len()])
            }
        }
    }
}

fn numeric_column(array: &ArrayRef) -> Result<Vec<Option<f64>>, DataError> {
    let values = if let Some(int_array) = array.as_any().downcast_ref::<Int64Array>() {
        int_array.iter().map(|v| v.map(|v| v as f64)).collect()
    } else if let Some(int_array) = array.as_any().downcast_ref::<Int32Array>() {
        int_array.iter().map(|v| v.map(|v| v as f64)).collect()
    } else if let Some(float_array) = array.as_any().downcast_ref::<Float64Array>() {
        float_array.iter().collect()
    } else {
        return Err(DataError::UnsupportedType(format!("{:?}", array.data_type())));
    };

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_shape() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(dataset.num_rows(), 6);
        assert_eq!(
            dataset.column_names(),
            vec!["name", "sales", "profit", "customers", "region", "category"]
        );
    }

    #[test]
    fn test_numeric_values_for_measure() {
        let dataset = Dataset::sample().unwrap();
        let profit = dataset.numeric_values("profit").unwrap();
        assert_eq!(
            profit,
            vec![Some(2400.0), Some(1398.0), Some(9800.0), Some(3908.0), Some(4800.0), Some(3800.0)]
        );
    }

    #[test]
    fn test_numeric_values_for_dimension_are_empty() {
        let dataset = Dataset::sample().unwrap();
        let region = dataset.numeric_values("region").unwrap();
        assert_eq!(region.len(), 6);
        assert!(region.iter().all(Option::is_none));
    }

    #[test]
    fn test_text_values() {
        let dataset = Dataset::sample().unwrap();
        let names = dataset.text_values("name").unwrap();
        assert_eq!(names[0].as_deref(), Some("Jan"));
        assert_eq!(names[5].as_deref(), Some("Jun"));

        let sales = dataset.text_values("sales").unwrap();
        assert_eq!(sales[0].as_deref(), Some("4000"));
    }

    #[test]
    fn test_unknown_column() {
        let dataset = Dataset::sample().unwrap();
        assert!(dataset.text_values("revenue").is_none());
        assert!(dataset.numeric_values("revenue").is_none());
    }
}
