//! Build script to generate the embedded word catalog
//!
//! Reads `word|difficulty|hint` lines and generates Rust source with a const table.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_catalog(
        "data/onchain_terms.txt",
        &Path::new(&out_dir).join("terms.rs"),
        "TERMS",
        "Blockchain terms as (word, difficulty, hint) triples",
    );

    // Rebuild if the catalog changes
    println!("cargo:rerun-if-changed=data/onchain_terms.txt");
}

fn generate_catalog(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut fields = line.splitn(3, '|');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(word), Some(difficulty), Some(hint)) => {
                    (word.trim(), difficulty.trim(), hint.trim())
                }
                _ => panic!("Malformed catalog line in {input_path}: {line}"),
            }
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word catalog").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, &str)] = &[").unwrap();

    for (word, difficulty, hint) in entries {
        writeln!(output, "    ({word:?}, {difficulty:?}, {hint:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
