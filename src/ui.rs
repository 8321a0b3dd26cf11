use std::io::{self, BufRead, Write};

use crate::calculate;

/// Renders a computed value for display.
///
/// Integral values are shown without a decimal point, so `10 / 2` prints as
/// `= 5` rather than `= 5.0`.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_finite() && value.trunc() == value {
        format!("= {value:.0}")
    } else {
        format!("= {value}")
    }
}

/// Renders an error for display.
#[must_use]
pub fn format_error(error: &dyn std::error::Error) -> String {
    format!("X {error}")
}

/// Runs the interactive read-evaluate-print loop on standard input.
///
/// Each line is run through the full pipeline and its result or error is
/// printed before the next prompt. The loop ends at end of input or when one
/// of the quit keywords `q`, `quit`, or `exit` is read.
///
/// # Errors
/// Returns an error if reading from standard input or flushing the prompt
/// fails.
pub fn start() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("Enter an expression to evaluate:\n> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let input = line?;
        if matches!(input.trim(), "q" | "quit" | "exit") {
            break;
        }

        match calculate(&input) {
            Ok(value) => println!("{}", format_result(value)),
            Err(error) => println!("{}", format_error(error.as_ref())),
        }

        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
