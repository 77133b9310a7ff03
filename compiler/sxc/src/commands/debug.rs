//! Debug commands: `tokens` and `parse`.

use sx_lexer::tokenize;
use sx_parse::parse_program;

use super::read_file;

/// Tokenize a file and print each token with its span.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let tokens = tokenize(&content);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {:<12} @ {}", token.text, token.span);
    }
}

/// Parse a file and print one line per top-level form.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let tokens = tokenize(&content);

    match &parse_program(&tokens) {
        Ok(sx_eval::Value::Expr(forms)) => {
            println!("Parse result for '{path}' ({} forms):", forms.len());
            for form in forms {
                println!("  {form}");
            }
        }
        Ok(other) => println!("Parse result for '{path}': {other}"),
        Err(err) => {
            eprintln!("{path}: parse error: {err}");
            std::process::exit(1);
        }
    }
}
