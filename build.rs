//! Build script to generate embedded word lists
//!
//! Reads the game show's word list files and generates Rust source code with
//! const arrays, plus a lookup table keyed by list identifier.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (identifier, const name, doc comment)
const LISTS: &[(&str, &str, &str)] = &[
    ("wordlist_4_answers", "WORDS_4_ANSWERS", "Possible 4-letter answers"),
    ("wordlist_4_all", "WORDS_4_ALL", "All guessable 4-letter words"),
    ("wordlist_5_answers", "WORDS_5_ANSWERS", "Possible 5-letter answers"),
    ("wordlist_5_all", "WORDS_5_ALL", "All guessable 5-letter words"),
    ("wordlist_6_answers", "WORDS_6_ANSWERS", "Possible 6-letter answers"),
    ("wordlist_6_all", "WORDS_6_ALL", "All guessable 6-letter words"),
    ("wordlist_java_keywords", "JAVA_KEYWORDS", "Java reserved words"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for &(identifier, const_name, doc_comment) in LISTS {
        let input_path = format!("data/{identifier}.txt");
        generate_word_list(&mut output, &input_path, const_name, doc_comment);
        println!("cargo:rerun-if-changed={input_path}");
    }

    writeln!(output, "/// Embedded lists keyed by identifier").unwrap();
    writeln!(output, "pub const EMBEDDED_LISTS: &[(&str, &[&str])] = &[").unwrap();
    for &(identifier, const_name, _) in LISTS {
        writeln!(output, "    (\"{identifier}\", {const_name}),").unwrap();
    }
    writeln!(output, "];").unwrap();
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Raw lines are kept; comment and blank filtering happens at load time
    let lines: Vec<&str> = content.lines().map(str::trim).collect();

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for line in lines {
        writeln!(output, "    {line:?},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
