//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - VQA runtime estimation",
        style("vqa-estimate").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  vqa-runtime      Runtime inputs, estimator and report export");
    println!("  vqa-runtime-cli  Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
