//! Prompt helpers for the menu loop.
//!
//! Every prompt reads one trimmed line. Helpers which parse loop until the input is valid,
//! and an empty line aborts with None so a mistyped flow can be backed out of.

use std::io::Write;

/// Print `message`, then read one trimmed line.
pub fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
    line.trim().to_string()
}

/// Print `message` and wait for a line.
pub fn pause(message: &str) {
    if !message.is_empty() {
        println!("{message}");
    }
    prompt("Press <Enter> to continue...");
}

/// A yes/no question, with an optional default for an empty line.
pub fn get_bool(message: &str, default: Option<bool>) -> bool {
    let suffix = match default {
        Some(true) => " Y|n",
        Some(false) => " y|N",
        None => " y|n",
    };

    loop {
        let response = prompt(&format!("{message}{suffix} "));
        match (response.to_uppercase().as_str(), default) {
            ("Y", _) | ("", Some(true)) => return true,
            ("N", _) | ("", Some(false)) => return false,
            _ => continue,
        }
    }
}

/// A number in `[low, high]`, or None on an empty line.
pub fn get_number(message: &str, low: usize, high: usize) -> Option<usize> {
    loop {
        let response = prompt(&format!("{message} [{low}-{high}] "));
        if response.is_empty() {
            return None;
        }

        match response.parse::<usize>() {
            Ok(number) if low <= number && number <= high => return Some(number),
            Ok(number) => println!("{number} is not allowed"),
            Err(_) => println!("{response} is not a valid number"),
        }
    }
}

/// A line of whitespace-separated numbers, each in `[low, high]`, or None on an empty line.
pub fn get_numbers(message: &str, count: usize, low: usize, high: usize) -> Option<Vec<usize>> {
    loop {
        let response = prompt(&format!("{message} ({count} numbers, each {low}-{high}) "));
        if response.is_empty() {
            return None;
        }

        let parsed: Result<Vec<usize>, _> = response
            .split_whitespace()
            .map(|word| word.parse::<usize>())
            .collect();

        match parsed {
            Ok(numbers) if numbers.len() != count => println!("expected {count} numbers"),
            Ok(numbers) if numbers.iter().any(|n| *n < low || high < *n) => {
                println!("some numbers were out of range")
            }
            Ok(numbers) => return Some(numbers),
            Err(_) => println!("{response} is not a valid list of numbers"),
        }
    }
}
