//! Build script to embed the dictionaries
//!
//! Reads the word list files under `data/` and generates Rust source with const arrays.
//! Blank lines and `#` comments are skipped; anything else must be a 5-letter ASCII word.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Secret words the game may pick from
    generate_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Words a game may pick as its secret",
    );

    // Everything a player may submit as a guess
    generate_word_list(
        "data/allowed.txt",
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "Words accepted as guesses (a superset of ANSWERS)",
    );

    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|word| {
            assert!(
                word.len() == 5 && word.bytes().all(|b| b.is_ascii_alphabetic()),
                "{input_path}: '{word}' is not a 5-letter word"
            );
            word.to_ascii_lowercase()
        })
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
