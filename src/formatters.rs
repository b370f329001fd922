use crate::catalog::CatalogStats;
use crate::models::Product;

pub fn format_product_table(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut max_id_len = 2; // Minimum width for "ID"
    let mut max_name_len = 4;
    let mut max_category_len = 8;
    let mut max_supplier_len = 8;

    // Calculate maximum lengths for alignment
    for product in products {
        max_id_len = max_id_len.max(product.id.to_string().len());
        max_name_len = max_name_len.max(product.name.len());
        max_category_len = max_category_len.max(product.category.len());
        max_supplier_len = max_supplier_len.max(product.supplier.len());
    }

    let header = format!(
        "{:>width_id$} | {:<width_name$} | {:<width_cat$} | {:>10} | {:>5} | {:<width_sup$}\n",
        "ID",
        "Name",
        "Category",
        "Price",
        "Qty",
        "Supplier",
        width_id = max_id_len,
        width_name = max_name_len,
        width_cat = max_category_len,
        width_sup = max_supplier_len,
    );

    let separator = format!(
        "{:->width_id$}-+-{:-<width_name$}-+-{:-<width_cat$}-+-{:-<10}-+-{:-<5}-+-{:-<width_sup$}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        width_id = max_id_len,
        width_name = max_name_len,
        width_cat = max_category_len,
        width_sup = max_supplier_len,
    );

    let mut output = String::new();
    output.push_str(&header);
    output.push_str(&separator);

    for product in products {
        output.push_str(&format!(
            "{:>width_id$} | {:<width_name$} | {:<width_cat$} | {:>10.2} | {:>5} | {:<width_sup$}\n",
            product.id,
            product.name,
            product.category,
            product.price,
            product.quantity,
            product.supplier,
            width_id = max_id_len,
            width_name = max_name_len,
            width_cat = max_category_len,
            width_sup = max_supplier_len,
        ));
    }

    output.push_str(&separator);
    output.push_str(&format!("Total products: {}\n", products.len()));
    output
}

pub fn format_product_details(product: &Product) -> String {
    let mut output = String::new();
    output.push_str("Product details:\n");
    output.push_str(&format!("  ID:          {}\n", product.id));
    output.push_str(&format!("  Name:        {}\n", product.name));
    output.push_str(&format!("  Category:    {}\n", product.category));
    output.push_str(&format!("  Price:       {:.2} $\n", product.price));
    output.push_str(&format!("  Quantity:    {}\n", product.quantity));
    output.push_str(&format!("  Supplier:    {}\n", product.supplier));
    output.push_str(&format!("  Total value: {:.2} $\n", product.total_value()));
    output
}

pub fn format_stats(stats: &CatalogStats, low_stock_threshold: u32) -> String {
    if stats.total_products == 0 {
        return "No products available for statistics.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Total products:        {}\n", stats.total_products));
    output.push_str(&format!("Total units in stock:  {}\n", stats.total_units));
    output.push_str(&format!("Total inventory value: {:.2} $\n", stats.total_value));
    output.push_str(&format!(
        "Distinct categories:   {}\n",
        stats.distinct_categories()
    ));

    let mut categories: Vec<_> = stats.categories.iter().collect();
    categories.sort_by(|a, b| a.0.cmp(b.0));
    output.push_str("\nProducts by category:\n");
    for (category, count) in categories {
        output.push_str(&format!("  {}: {}\n", category, count));
    }

    if !stats.low_stock.is_empty() {
        output.push_str(&format!(
            "\nLow stock (below {} units, {} products):\n",
            low_stock_threshold,
            stats.low_stock.len()
        ));
        for product in &stats.low_stock {
            output.push_str(&format!(
                "  {} - {}: {} units\n",
                product.id, product.name, product.quantity
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_test_product;

    #[test]
    fn table_lists_every_product() {
        let a = make_test_product(1, "Laptop");
        let b = make_test_product(2, "Desk");
        let output = format_product_table(&[&a, &b]);

        assert!(output.contains("Laptop"));
        assert!(output.contains("Desk"));
        assert!(output.contains("Total products: 2"));
    }

    #[test]
    fn table_for_no_products_says_so() {
        let output = format_product_table(&[]);
        assert!(output.contains("No products found."));
    }

    #[test]
    fn table_aligns_ids_to_the_widest() {
        let a = make_test_product(1, "Laptop");
        let b = make_test_product(1000, "Desk");
        let output = format_product_table(&[&a, &b]);

        let lines: Vec<&str> = output.lines().collect();
        // IDs are right-aligned in a column as wide as the longest ID
        assert!(lines[2].starts_with("   1 |"));
        assert!(lines[3].starts_with("1000 |"));
    }

    #[test]
    fn details_include_total_value() {
        let mut product = make_test_product(1, "Laptop");
        product.price = 999.99;
        product.quantity = 10;
        let output = format_product_details(&product);

        assert!(output.contains("Laptop"));
        assert!(output.contains("9999.90 $"));
    }

    #[test]
    fn stats_output_sorts_categories() {
        let mut stats = CatalogStats {
            total_products: 2,
            ..Default::default()
        };
        stats.categories.insert("Furniture".to_string(), 1);
        stats.categories.insert("Electronics".to_string(), 1);

        let output = format_stats(&stats, 10);
        let electronics = output.find("Electronics").unwrap();
        let furniture = output.find("Furniture").unwrap();
        assert!(electronics < furniture);
    }

    #[test]
    fn stats_output_for_empty_catalog() {
        let output = format_stats(&CatalogStats::default(), 10);
        assert!(output.contains("No products available"));
    }

    #[test]
    fn stats_output_lists_low_stock_products() {
        let mut product = make_test_product(3, "Desk");
        product.quantity = 2;
        let mut stats = CatalogStats {
            total_products: 1,
            ..Default::default()
        };
        stats.categories.insert("Furniture".to_string(), 1);
        stats.low_stock.push(product);

        let output = format_stats(&stats, 10);
        assert!(output.contains("Low stock (below 10 units, 1 products):"));
        assert!(output.contains("3 - Desk: 2 units"));
    }
}
