//! Interactive console menu
//!
//! Thin presentation layer. Prompts parse operator input to primitives
//! before calling into the catalog; errors from the core are printed and
//! never abort the loop.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::export::{export_snapshot, ExportFormat};
use crate::formatters::{format_product_details, format_product_table, format_stats};
use crate::models::{NewProduct, Product, ProductPatch};
use std::io::{self, Write};
use std::path::PathBuf;

/// Run the menu loop until the operator exits or stdin closes
pub fn run(catalog: &mut Catalog, config: &Config) {
    print_header("SHOP MANAGEMENT SYSTEM");

    loop {
        print_menu();
        let Some(choice) = prompt("Enter your choice (1-11)") else {
            break;
        };

        match choice.as_str() {
            "1" => add_product(catalog),
            "2" => view_all_products(catalog),
            "3" => update_product(catalog),
            "4" => delete_product(catalog),
            "5" => search_products(catalog),
            "6" => view_statistics(catalog, config),
            "7" => save_data(catalog),
            "8" => export_catalog(catalog, ExportFormat::Json),
            "9" => export_catalog(catalog, ExportFormat::Csv),
            "10" => clear_screen(),
            "11" => {
                println!("\nThank you for using the shop management system. Goodbye!");
                break;
            }
            _ => println!("Please enter a number between 1 and 11."),
        }

        if wait_for_enter().is_none() {
            break;
        }
    }
}

fn print_header(title: &str) {
    let line = "=".repeat(60);
    println!("\n{}", line);
    println!("{:^60}", title);
    println!("{}", line);
}

fn print_menu() {
    print_header("MAIN MENU");
    println!("1.  Add product");
    println!("2.  View all products");
    println!("3.  Update product");
    println!("4.  Delete product");
    println!("5.  Search products");
    println!("6.  View statistics");
    println!("7.  Save data");
    println!("8.  Export to JSON");
    println!("9.  Export to CSV");
    println!("10. Clear screen");
    println!("11. Exit");
}

/// Read one trimmed line from stdin. Returns None when stdin is closed.
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn prompt(label: &str) -> Option<String> {
    print!("{}: ", label);
    let _ = io::stdout().flush();
    read_line()
}

/// Prompt with a default shown in brackets; an empty reply keeps the default
fn prompt_with_default(label: &str, default: &str) -> Option<String> {
    print!("{} [{}]: ", label, default);
    let _ = io::stdout().flush();
    let reply = read_line()?;
    Some(if reply.is_empty() {
        default.to_string()
    } else {
        reply
    })
}

fn wait_for_enter() -> Option<()> {
    print!("\nPress Enter to continue...");
    let _ = io::stdout().flush();
    read_line().map(|_| ())
}

fn confirm(message: &str) -> bool {
    print!("{} (yes/no): ", message);
    let _ = io::stdout().flush();
    match read_line() {
        Some(reply) => {
            let reply = reply.to_lowercase();
            reply == "yes" || reply == "y"
        }
        None => false,
    }
}

fn parse_price(input: &str) -> Result<f64, String> {
    let price: f64 = input
        .parse()
        .map_err(|_| "invalid price, enter a number".to_string())?;
    if !price.is_finite() {
        return Err("invalid price, enter a finite number".to_string());
    }
    if price < 0.0 {
        return Err("price cannot be negative".to_string());
    }
    Ok(price)
}

fn parse_quantity(input: &str) -> Result<u32, String> {
    input
        .parse()
        .map_err(|_| "invalid quantity, enter a non-negative whole number".to_string())
}

fn parse_id(input: &str) -> Result<u64, String> {
    input
        .parse()
        .map_err(|_| "invalid ID, enter a whole number".to_string())
}

fn add_product(catalog: &mut Catalog) {
    print_header("ADD PRODUCT");

    let Some(name) = prompt("Product name") else { return };
    let Some(category) = prompt("Category") else { return };

    let Some(price_input) = prompt("Price ($)") else { return };
    let price = match parse_price(&price_input) {
        Ok(price) => price,
        Err(reason) => {
            println!("Error: {}", reason);
            return;
        }
    };

    let Some(quantity_input) = prompt("Quantity") else { return };
    let quantity = match parse_quantity(&quantity_input) {
        Ok(quantity) => quantity,
        Err(reason) => {
            println!("Error: {}", reason);
            return;
        }
    };

    let Some(supplier) = prompt("Supplier (optional)") else { return };

    match catalog.add(NewProduct {
        name,
        category,
        price,
        quantity,
        supplier,
    }) {
        Ok(product) => println!("Product '{}' added with ID {}.", product.name, product.id),
        Err(e) => println!("Error: {}", e),
    }
}

fn view_all_products(catalog: &Catalog) {
    print_header("ALL PRODUCTS");
    let products: Vec<&Product> = catalog.products().iter().collect();
    print!("{}", format_product_table(&products));
}

fn update_product(catalog: &mut Catalog) {
    print_header("UPDATE PRODUCT");

    if catalog.is_empty() {
        println!("No products available to update.");
        return;
    }

    let Some(id_input) = prompt("Enter product ID to update") else { return };
    let id = match parse_id(&id_input) {
        Ok(id) => id,
        Err(reason) => {
            println!("Error: {}", reason);
            return;
        }
    };

    let Some(current) = catalog.get(id).cloned() else {
        println!("Product with ID {} not found.", id);
        return;
    };
    print!("{}", format_product_details(&current));
    println!("\nEnter new values (press Enter to keep the current value):");

    let mut patch = ProductPatch::default();

    let Some(name) = prompt_with_default("Name", &current.name) else { return };
    if name != current.name {
        patch.name = Some(name);
    }

    let Some(category) = prompt_with_default("Category", &current.category) else { return };
    if category != current.category {
        patch.category = Some(category);
    }

    let Some(price_input) = prompt_with_default("Price", &current.price.to_string()) else {
        return;
    };
    if price_input != current.price.to_string() {
        match parse_price(&price_input) {
            Ok(price) => patch.price = Some(price),
            Err(reason) => println!("Error: {}. Keeping old value.", reason),
        }
    }

    let Some(quantity_input) = prompt_with_default("Quantity", &current.quantity.to_string())
    else {
        return;
    };
    if quantity_input != current.quantity.to_string() {
        match parse_quantity(&quantity_input) {
            Ok(quantity) => patch.quantity = Some(quantity),
            Err(reason) => println!("Error: {}. Keeping old value.", reason),
        }
    }

    let Some(supplier) = prompt_with_default("Supplier", &current.supplier) else { return };
    if supplier != current.supplier {
        patch.supplier = Some(supplier);
    }

    if patch.is_empty() {
        println!("No changes made.");
        return;
    }

    match catalog.update(id, &patch) {
        Ok(product) => println!("Product '{}' updated.", product.name),
        Err(e) => println!("Error: {}", e),
    }
}

fn delete_product(catalog: &mut Catalog) {
    print_header("DELETE PRODUCT");

    if catalog.is_empty() {
        println!("No products available to delete.");
        return;
    }

    let Some(id_input) = prompt("Enter product ID to delete") else { return };
    let id = match parse_id(&id_input) {
        Ok(id) => id,
        Err(reason) => {
            println!("Error: {}", reason);
            return;
        }
    };

    let Some(product) = catalog.get(id) else {
        println!("Product with ID {} not found.", id);
        return;
    };
    print!("{}", format_product_details(product));

    if !confirm("Are you sure you want to delete this product?") {
        println!("Deletion cancelled.");
        return;
    }

    match catalog.delete(id) {
        Ok(removed) => println!("Product '{}' deleted.", removed.name),
        Err(e) => println!("Error: {}", e),
    }
}

fn search_products(catalog: &Catalog) {
    print_header("SEARCH PRODUCTS");

    if catalog.is_empty() {
        println!("No products available to search.");
        return;
    }

    println!("Search by:");
    println!("1. Product ID");
    println!("2. Name");
    println!("3. Category");

    let Some(choice) = prompt("Enter choice (1-3)") else { return };
    let Some(term) = prompt("Enter search term") else { return };

    let results: Vec<&Product> = match choice.as_str() {
        "1" => catalog.find_by_id_text(&term).collect(),
        "2" => catalog.find_by_name(&term).collect(),
        "3" => catalog.find_by_category(&term).collect(),
        _ => {
            println!("Invalid choice.");
            return;
        }
    };

    if results.is_empty() {
        println!("No products found matching your search.");
    } else {
        print!("{}", format_product_table(&results));
    }
}

fn view_statistics(catalog: &Catalog, config: &Config) {
    print_header("INVENTORY STATISTICS");
    let stats = catalog.stats(config.low_stock_threshold);
    print!("{}", format_stats(&stats, config.low_stock_threshold));
}

fn save_data(catalog: &Catalog) {
    print_header("SAVE DATA");
    match catalog.save() {
        Ok(()) => println!("Data saved to {}.", catalog.path().display()),
        Err(e) => println!("Error: {}", e),
    }
}

fn export_catalog(catalog: &Catalog, format: ExportFormat) {
    print_header(&format!("EXPORT TO {}", format.as_str()));

    if catalog.is_empty() {
        println!("No products to export.");
        return;
    }

    let Some(path_input) = prompt_with_default("Output file", format.default_path()) else {
        return;
    };
    let path = PathBuf::from(path_input);

    match export_snapshot(catalog.products(), format, &path) {
        Ok(count) => println!("Exported {} products to {}.", count, path.display()),
        Err(e) => println!("Error: {}", e),
    }
}

fn clear_screen() {
    // ANSI: clear screen and move the cursor to the top-left corner
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}
