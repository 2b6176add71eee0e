use std::io::{self, BufRead, Write};

use crate::display::output::display_error;
use crate::error::AppError;

/// A name is valid iff it is non-empty, made of word characters and spaces
/// only, and contains no underscore. Underscore is a word character and
/// passes the first filter, but is disallowed as policy.
pub fn validate_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let word_chars = name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == ' ');
    word_chars && !name.contains('_')
}

/// Take the CLI-provided name when it is valid; otherwise prompt on the
/// console until a valid name is read. EOF on stdin is a hard error.
pub fn acquire_name(arg: Option<String>) -> Result<String, AppError> {
    if let Some(name) = arg {
        if validate_name(&name) {
            return Ok(name);
        }
        display_error("Name invalid (letters, digits and spaces only).");
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter summoner name: ");
        io::stdout().flush().map_err(|e| AppError::Io(e.to_string()))?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| AppError::Io(e.to_string()))?;
        if read == 0 {
            return Err(AppError::Io(
                "input closed before a valid name was entered".to_string(),
            ));
        }

        let name = line.trim_end_matches('\n').trim_end_matches('\r');
        if validate_name(name) {
            return Ok(name.to_string());
        }
        println!("Name invalid. Please try again.");
    }
}
