use clap::Parser;
use rpncalc::{calculate, ui};

/// rpncalc evaluates infix mathematical expressions by converting them to
/// Reverse Polish Notation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. Without one, rpncalc starts an
    /// interactive session.
    expression: Vec<String>,
}

fn main() {
    let args = Args::parse();

    if args.expression.is_empty() {
        if let Err(e) = ui::start() {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let input = args.expression.join(" ");
    match calculate(&input) {
        Ok(value) => println!("{}", ui::format_result(value)),
        Err(e) => {
            eprintln!("{}", ui::format_error(e.as_ref()));
            std::process::exit(1);
        },
    }
}
