//! sitemark CLI - convert a Markdown document to HTML on stdout.

use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> io::Result<ExitCode> {
    let args: Vec<String> = std::env::args().collect();

    // Simple usage: read from stdin or file
    let input = if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    match sitemark::to_html(&input) {
        Ok(html) => {
            io::stdout().write_all(html.as_bytes())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("sitemark: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
