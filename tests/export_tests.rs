use shop_inventory::{export_csv, export_json, Catalog, Error, NewProduct, Product};
use std::path::Path;

fn new_product(name: &str, category: &str, price: f64, quantity: u32, supplier: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        category: category.to_string(),
        price,
        quantity,
        supplier: supplier.to_string(),
    }
}

/// Build a catalog with a few products inside a temp directory
fn populated_catalog(dir: &tempfile::TempDir) -> Catalog {
    let mut catalog = Catalog::new(dir.path().join("shop_data.csv"));
    catalog
        .add(new_product("Laptop", "Electronics", 999.99, 10, "TechSupply"))
        .unwrap();
    catalog
        .add(new_product("Desk, oak \"rustic\"", "Furniture", 150.0, 3, ""))
        .unwrap();
    catalog
        .add(new_product("Mouse", "Electronics", 19.99, 42, "TechSupply"))
        .unwrap();
    catalog
}

#[test]
fn test_csv_export_reparses_to_the_exact_field_values() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = populated_catalog(&dir);
    let path = dir.path().join("shop_export.csv");

    let count = export_csv(catalog.products(), &path).unwrap();
    assert_eq!(count, 3);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let reparsed: Vec<Product> = reader.deserialize().map(|row| row.unwrap()).collect();

    assert_eq!(reparsed.len(), 3);
    for (original, parsed) in catalog.products().iter().zip(&reparsed) {
        assert_eq!(parsed.id, original.id);
        assert_eq!(parsed.name, original.name);
        assert_eq!(parsed.category, original.category);
        assert_eq!(parsed.price, original.price);
        assert_eq!(parsed.quantity, original.quantity);
        assert_eq!(parsed.supplier, original.supplier);
    }
    assert_eq!(reparsed[1].name, "Desk, oak \"rustic\"");
}

#[test]
fn test_csv_export_header_uses_canonical_field_order() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = populated_catalog(&dir);
    let path = dir.path().join("shop_export.csv");

    export_csv(catalog.products(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();
    assert_eq!(header, "id,name,category,price,quantity,supplier");
}

#[test]
fn test_json_export_preserves_numbers_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = populated_catalog(&dir);
    let path = dir.path().join("shop_export.json");

    let count = export_json(catalog.products(), &path).unwrap();
    assert_eq!(count, 3);

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let array = value.as_array().unwrap();

    assert_eq!(array.len(), 3);
    assert_eq!(array[0]["price"], serde_json::json!(999.99));
    assert_eq!(array[0]["quantity"], serde_json::json!(10));

    let names: Vec<&str> = array.iter().map(|v| v["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Laptop", "Desk, oak \"rustic\"", "Mouse"]);
}

#[test]
fn test_export_does_not_touch_the_store_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = populated_catalog(&dir);
    let store_before = std::fs::read_to_string(dir.path().join("shop_data.csv")).unwrap();

    export_csv(catalog.products(), &dir.path().join("shop_export.csv")).unwrap();
    export_json(catalog.products(), &dir.path().join("shop_export.json")).unwrap();

    let store_after = std::fs::read_to_string(dir.path().join("shop_data.csv")).unwrap();
    assert_eq!(store_before, store_after);
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_export_to_unwritable_path_reports_export_error() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = populated_catalog(&dir);
    let path = Path::new("/nonexistent-dir/shop_export.csv");

    let err = export_csv(catalog.products(), path).unwrap_err();
    assert!(matches!(err, Error::Export(_)));

    let err = export_json(catalog.products(), path).unwrap_err();
    assert!(matches!(err, Error::Export(_)));
}
