//! Console reporting for a finished extraction.

use std::path::Path;

/// Prints the closing summary line.
///
/// # Arguments
/// * `count` - Number of rows written
/// * `layer_name` - Name of the extracted layer
/// * `output` - Path of the CSV file
pub fn print_final_report(count: usize, layer_name: &str, output: &Path) {
    println!("\n{}", final_report(count, layer_name, output));
}

pub fn final_report(count: usize, layer_name: &str, output: &Path) -> String {
    format!(
        "Done. {} {} features written to {}",
        count,
        layer_name,
        output.display()
    )
}

/// Prints a fatal error to stderr.
pub fn print_error(message: &str) {
    eprintln!("Error: {}", message);
}
