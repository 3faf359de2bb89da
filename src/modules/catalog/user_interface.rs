// src/modules/catalog/user_interface.rs
use std::io::{self, Write};

use super::model::Category;
use super::report::LookupReport;
use super::store::Catalog;
use crate::modules::utils::io::read_line;
use crate::modules::utils::logging::log_lookup_event;

/// Function to show the availability desk menu
fn show_desk_options() {
    println!("\n=== Library Management System ===");
    println!("1. Check availability   (or type 'check')");
    println!("2. Exit                 (or type 'exit')");
    println!("\nEnter your choice       (1-2 or command):");
}

/// Prompt for a single free-text field
fn prompt_field(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    read_line()
}

/// Prompt for a category from the fixed set
///
/// Accepts the menu number or the category name; re-prompts on anything else.
fn prompt_category() -> io::Result<Category> {
    loop {
        println!("Book type:");
        for (index, category) in Category::ALL.iter().enumerate() {
            println!("  {}. {}", index + 1, category);
        }
        print!("Choice (1-{} or name): ", Category::ALL.len());
        io::stdout().flush()?;

        let input = read_line()?;
        if let Ok(index) = input.parse::<usize>() {
            if (1..=Category::ALL.len()).contains(&index) {
                return Ok(Category::ALL[index - 1]);
            }
        }
        if let Ok(category) = input.parse::<Category>() {
            return Ok(category);
        }

        println!("Invalid choice. Please pick one of the listed book types.");
    }
}

// Authenticated availability-desk session. Each loop iteration handles one
// complete user action; no state carries over between queries. Returns when
// the operator exits.
pub fn run_desk_session(catalog: &Catalog, username: &str) {
    println!("\nWelcome, {}!", username);

    loop {
        show_desk_options();

        let choice = match read_line() {
            Ok(input) => input.to_lowercase(),
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };

        match choice.as_str() {
            "1" | "check" => {
                if let Err(e) = handle_availability_check(catalog, username) {
                    println!("Error reading input: {}", e);
                }
            }
            "2" | "exit" | "quit" => {
                println!("Goodbye!");
                return;
            }
            _ => {
                println!("Invalid choice. Please enter 1, 2, 'check', or 'exit'.");
            }
        }
    }
}

/// Run one availability query: gather the triple, look it up, report
fn handle_availability_check(catalog: &Catalog, username: &str) -> io::Result<()> {
    let title = prompt_field("Title")?;
    let author = prompt_field("Author")?;
    let category = prompt_category()?;

    let result = catalog.find_entry(&title, &author, category.as_str());
    let report = LookupReport::for_result(result);

    log_lookup_event(username, &title, &author, category.as_str(), report.outcome());
    println!("\n{}", report.render());

    Ok(())
}
