//! In-memory product catalog with CSV-backed persistence
//!
//! The catalog owns all product records for the run. Mutations validate
//! before touching state, then persist the whole catalog by atomically
//! replacing the store file.

use crate::error::{Error, Result};
use crate::models::{NewProduct, Product, ProductPatch, FIELDS};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of loading the store file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows loaded into the catalog
    pub loaded: usize,
    /// Rows skipped because they failed to parse or validate
    pub skipped: usize,
}

/// Aggregate inventory statistics
#[derive(Debug, Default)]
pub struct CatalogStats {
    pub total_products: usize,
    /// Total units in stock across all products
    pub total_units: u64,
    /// Total inventory value (sum of price times quantity)
    pub total_value: f64,
    /// Product count per category
    pub categories: HashMap<String, usize>,
    /// Products below the low-stock threshold, in catalog order
    pub low_stock: Vec<Product>,
}

impl CatalogStats {
    pub fn distinct_categories(&self) -> usize {
        self.categories.len()
    }
}

/// The in-memory catalog, source of truth during a run.
///
/// Insertion order is preserved for display and export. IDs are assigned
/// monotonically and never reused within a session, even after deletions.
pub struct Catalog {
    products: Vec<Product>,
    next_id: u64,
    path: PathBuf,
}

impl Catalog {
    /// Create an empty catalog backed by the given store file.
    /// Call [`Catalog::load`] to populate it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Catalog {
            products: Vec::new(),
            next_id: 1,
            path: path.into(),
        }
    }

    /// Path of the backing store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The ID the next added product will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Load products from the store file, replacing the in-memory state.
    ///
    /// A missing file yields an empty catalog. A row that fails to parse or
    /// validate is skipped with a logged warning; only an unreadable file or
    /// a header missing a canonical column is an error.
    pub fn load(&mut self) -> Result<LoadReport> {
        self.products.clear();
        self.next_id = 1;

        if !self.path.exists() {
            log::info!("Store file {} not found, starting empty", self.path.display());
            return Ok(LoadReport::default());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| Error::Persistence(format!("cannot read {}: {}", self.path.display(), e)))?;

        let headers = reader
            .headers()
            .map_err(|e| Error::Persistence(format!("cannot read header of {}: {}", self.path.display(), e)))?
            .clone();

        // A zero-byte store file is an empty catalog, not a corrupt one
        if headers.iter().all(|h| h.is_empty()) {
            return Ok(LoadReport::default());
        }

        for field in FIELDS {
            if !headers.iter().any(|h| h == field) {
                return Err(Error::Persistence(format!(
                    "missing required column '{}' in {}",
                    field,
                    self.path.display()
                )));
            }
        }

        let mut report = LoadReport::default();
        let mut seen_ids: HashSet<u64> = HashSet::new();

        for row in reader.deserialize::<Product>() {
            let product = match row {
                Ok(product) => product,
                Err(e) => {
                    log::warn!("Skipping unparseable row in {}: {}", self.path.display(), e);
                    report.skipped += 1;
                    continue;
                }
            };
            if let Err(e) = product.validate() {
                log::warn!("Skipping invalid row in {}: {}", self.path.display(), e);
                report.skipped += 1;
                continue;
            }
            if !seen_ids.insert(product.id) {
                log::warn!(
                    "Skipping duplicate ID {} in {}",
                    product.id,
                    self.path.display()
                );
                report.skipped += 1;
                continue;
            }
            if product.id >= self.next_id {
                self.next_id = product.id + 1;
            }
            self.products.push(product);
            report.loaded += 1;
        }

        log::info!(
            "Loaded {} products from {} ({} skipped)",
            report.loaded,
            self.path.display(),
            report.skipped
        );
        Ok(report)
    }

    /// Persist every product in insertion order to the store file.
    ///
    /// Writes to a temporary path in the same directory and renames it over
    /// the store file, so a crash mid-write never corrupts the previous copy.
    /// The header row is written even when the catalog is empty.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Persistence(format!("cannot create {}: {}", parent.display(), e))
                })?;
            }
        }

        let mut tmp_name = self.path.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        self.write_rows(&tmp_path).map_err(|e| {
            Error::Persistence(format!("cannot write {}: {}", tmp_path.display(), e))
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            Error::Persistence(format!(
                "cannot replace {} with {}: {}",
                self.path.display(),
                tmp_path.display(),
                e
            ))
        })?;

        log::info!("Saved {} products to {}", self.products.len(), self.path.display());
        Ok(())
    }

    fn write_rows(&self, path: &Path) -> csv::Result<()> {
        let mut writer = csv::WriterBuilder::new().from_path(path)?;
        writer.write_record(FIELDS)?;
        for product in &self.products {
            writer.write_record(product.to_record())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Validate the fields, assign the next ID, insert, and persist.
    /// Returns a copy of the stored product.
    pub fn add(&mut self, fields: NewProduct) -> Result<Product> {
        let product = Product::new(self.next_id, fields)?;
        self.products.push(product.clone());
        self.next_id += 1;
        self.save()?;
        Ok(product)
    }

    /// Apply the supplied fields to an existing product and persist.
    ///
    /// The merged record is validated before any state changes, so a bad
    /// patch leaves the stored product untouched.
    pub fn update(&mut self, id: u64, patch: &ProductPatch) -> Result<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::NotFound(id))?;

        let mut merged = self.products[index].clone();
        patch.apply(&mut merged);
        merged.validate()?;

        self.products[index] = merged.clone();
        self.save()?;
        Ok(merged)
    }

    /// Remove a product and persist. The removed ID is never reassigned
    /// within this session.
    pub fn delete(&mut self, id: u64) -> Result<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::NotFound(id))?;

        let removed = self.products.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Look up a product by its ID
    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose decimal ID contains the given text, in catalog order
    pub fn find_by_id_text(&self, term: &str) -> impl Iterator<Item = &Product> {
        let needle = term.to_string();
        self.products
            .iter()
            .filter(move |p| p.id.to_string().contains(&needle))
    }

    /// Products whose name contains the term (case-insensitive), in catalog order
    pub fn find_by_name(&self, term: &str) -> impl Iterator<Item = &Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(move |p| p.name.to_lowercase().contains(&needle))
    }

    /// Products whose category contains the term (case-insensitive), in catalog order
    pub fn find_by_category(&self, term: &str) -> impl Iterator<Item = &Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(move |p| p.category.to_lowercase().contains(&needle))
    }

    /// Products with quantity below the threshold, in catalog order
    pub fn find_low_stock(&self, threshold: u32) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.is_low_stock(threshold))
    }

    /// Aggregate statistics over the whole catalog
    pub fn stats(&self, low_stock_threshold: u32) -> CatalogStats {
        let mut stats = CatalogStats {
            total_products: self.products.len(),
            ..Default::default()
        };

        for product in &self.products {
            stats.total_units += product.quantity as u64;
            stats.total_value += product.total_value();
            *stats.categories.entry(product.category.clone()).or_insert(0) += 1;
        }
        stats.low_stock = self
            .find_low_stock(low_stock_threshold)
            .cloned()
            .collect();

        stats
    }
}
