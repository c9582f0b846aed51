//! Build script to generate the embedded word list
//!
//! Reads the raw newline-delimited word list, keeps the five-letter entries,
//! uppercases them and writes a JSON array artifact into `OUT_DIR`.

use std::env;
use std::fs;
use std::path::Path;

const WORD_LENGTH: usize = 5;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_json("data/words.txt", &Path::new(&out_dir).join("words.json"));

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_word_json(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() == WORD_LENGTH)
        .filter(|line| line.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_uppercase)
        .collect();
    words.sort();
    words.dedup();

    let json = serde_json::to_string(&words).expect("Failed to serialize word list");
    fs::write(output_path, json)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
