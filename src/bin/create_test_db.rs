use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;

use finance_tracker::{
    Database, NewBudget, NewTransaction, create_budget, create_transaction,
};

/// A utility for creating a database with sample data for finance_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_TRANSACTIONS: [(f64, &str, &str, &str); 6] = [
    (-52.40, "2024-01-03", "Groceries", "food"),
    (-18.00, "2024-01-05", "Bus pass", "transport"),
    (-31.75, "2024-01-12", "Farmers market", "food"),
    (-120.00, "2024-01-15", "Power bill", "utilities"),
    (2500.00, "2024-01-31", "Salary", "income"),
    (-9.50, "2024-02-02", "Coffee", "food"),
];

const SAMPLE_BUDGETS: [(&str, f64, &str); 3] = [
    ("food", 400.0, "2024-01"),
    ("transport", 80.0, "2024-01"),
    ("utilities", 150.0, "2024-01"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path.extension().is_none_or(|extension| extension.is_empty()) {
        eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let database = Database::new(&args.output_path);
    let connection = database.connect()?;

    println!("Creating sample transactions...");
    for (amount, date, description, category) in SAMPLE_TRANSACTIONS {
        create_transaction(
            NewTransaction::new(amount, category)
                .date(date)
                .description(description),
            &connection,
        )?;
    }

    println!("Creating sample budgets...");
    for (category, amount, month) in SAMPLE_BUDGETS {
        create_budget(NewBudget::new(category, amount, month), &connection)?;
    }

    println!("Success!");

    Ok(())
}
