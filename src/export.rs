//! Snapshot exporters for the product catalog
//!
//! Two stateless writers over the same ordered product slice. Neither
//! mutates the catalog; both use the canonical field order of the store
//! file.

use crate::error::{Error, Result};
use crate::models::{Product, FIELDS};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Target format for a catalog snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }

    /// Default output filename for this format
    pub fn default_path(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "shop_export.csv",
            ExportFormat::Json => "shop_export.json",
        }
    }
}

/// Write a snapshot in the given format. Returns the number of products written.
pub fn export_snapshot(products: &[Product], format: ExportFormat, path: &Path) -> Result<usize> {
    match format {
        ExportFormat::Csv => export_csv(products, path),
        ExportFormat::Json => export_json(products, path),
    }
}

/// Write products as CSV: one header row, one row per product.
///
/// Fields containing the delimiter or quote character are quoted and
/// escaped by the writer, so the output round-trips losslessly.
pub fn export_csv(products: &[Product], path: &Path) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|e| Error::Export(format!("cannot write {}: {}", path.display(), e)))?;

    writer
        .write_record(FIELDS)
        .map_err(|e| Error::Export(format!("cannot write {}: {}", path.display(), e)))?;
    for product in products {
        writer
            .write_record(product.to_record())
            .map_err(|e| Error::Export(format!("cannot write {}: {}", path.display(), e)))?;
    }
    writer
        .flush()
        .map_err(|e| Error::Export(format!("cannot write {}: {}", path.display(), e)))?;

    log::info!("Exported {} products to {}", products.len(), path.display());
    Ok(products.len())
}

/// Write products as a JSON array of field-keyed objects, numbers as
/// numbers, in catalog order.
pub fn export_json(products: &[Product], path: &Path) -> Result<usize> {
    let file = File::create(path)
        .map_err(|e| Error::Export(format!("cannot write {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, products)
        .map_err(|e| Error::Export(format!("cannot write {}: {}", path.display(), e)))?;
    writer
        .flush()
        .map_err(|e| Error::Export(format!("cannot write {}: {}", path.display(), e)))?;

    log::info!("Exported {} products to {}", products.len(), path.display());
    Ok(products.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_test_product;

    #[test]
    fn csv_export_quotes_fields_containing_delimiters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let mut product = make_test_product(1, "Bolts, M4 \"short\"");
        product.supplier = "Fasteners\nGmbH".to_string();

        let count = export_csv(std::slice::from_ref(&product), &path).unwrap();
        assert_eq!(count, 1);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let reparsed: Vec<Product> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(reparsed.len(), 1);
        assert_eq!(reparsed[0].name, "Bolts, M4 \"short\"");
        assert_eq!(reparsed[0].supplier, "Fasteners\nGmbH");
    }

    #[test]
    fn csv_export_writes_header_for_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");

        let count = export_csv(&[], &path).unwrap();
        assert_eq!(count, 0);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "id,name,category,price,quantity,supplier");
    }

    #[test]
    fn json_export_keeps_numbers_as_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let mut product = make_test_product(1, "Laptop");
        product.price = 999.99;
        product.quantity = 10;

        export_json(std::slice::from_ref(&product), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["id"], serde_json::json!(1));
        assert_eq!(array[0]["price"], serde_json::json!(999.99));
        assert_eq!(array[0]["quantity"], serde_json::json!(10));
        assert_eq!(array[0]["name"], serde_json::json!("Laptop"));
    }

    #[test]
    fn json_export_preserves_catalog_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let products = vec![
            make_test_product(2, "Second"),
            make_test_product(1, "First"),
        ];

        export_json(&products, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let reparsed: Vec<Product> = serde_json::from_str(&content).unwrap();
        let names: Vec<&str> = reparsed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn unwritable_destination_is_an_export_error() {
        let path = Path::new("/nonexistent-dir/export.csv");
        let err = export_csv(&[], path).unwrap_err();
        assert!(matches!(err, Error::Export(_)));

        let err = export_json(&[], path).unwrap_err();
        assert!(matches!(err, Error::Export(_)));
    }

    #[test]
    fn snapshot_dispatches_on_format() {
        let dir = tempfile::tempdir().unwrap();
        let product = make_test_product(1, "Laptop");

        let csv_path = dir.path().join("out.csv");
        export_snapshot(std::slice::from_ref(&product), ExportFormat::Csv, &csv_path).unwrap();
        assert!(csv_path.exists());

        let json_path = dir.path().join("out.json");
        export_snapshot(std::slice::from_ref(&product), ExportFormat::Json, &json_path).unwrap();
        assert!(json_path.exists());
    }
}
