//! Regenerate EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p mechlab_core --bin gen-equations
//! ```
//!
//! Run from the workspace root; the file lands in
//! `mechlab_core/src/equations/EQUATIONS.md`.

use std::fs;
use std::path::Path;

use mechlab_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

fn main() {
    println!("Generating EQUATIONS.md ({} equations)...", ALL_EQUATIONS.len());

    let markdown = generate_equations_markdown();
    let output_path = Path::new("mechlab_core/src/equations/EQUATIONS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
