//! User input utilities for interactive command-line prompts.
//!
//! This module provides functions for safely collecting user input
//! including strings and confirmations.

use anyhow::{Context, Result};
use std::io::{self, BufRead};

/// Prompts the user for a string input.
///
/// Displays a prompt message and waits for the user to enter text.
/// The input is read from stdin and returned with whitespace trimmed.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_string(prompt: &str) -> Result<String> {
    println!("{prompt}: ");
    read_trimmed_line(&mut io::stdin().lock())
}

/// Prompts for a value that must not be empty, asking again until it is.
pub fn prompt_required(prompt: &str) -> Result<String> {
    loop {
        let input = prompt_string(prompt)?;
        if !input.is_empty() {
            return Ok(input);
        }
        eprintln!("A value is required.");
    }
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_string(&format!("{prompt} (y/N)"))?;
        match parse_confirmation(&input) {
            Some(answer) => return Ok(answer),
            None => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

fn read_trimmed_line(reader: &mut impl BufRead) -> Result<String> {
    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    if read == 0 {
        anyhow::bail!("Input closed before a value was entered");
    }
    Ok(input.trim().to_string())
}

fn parse_confirmation(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}
