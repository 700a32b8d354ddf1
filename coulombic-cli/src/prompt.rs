use std::io::Write;

use anyhow::Context;

/// Header shown before the interactive prompts.
pub fn print_banner() {
    use colored::Colorize;
    println!("{}", "Coulomb force calculator".bold());
    println!("Enter the charges and the position of Q2.");
    println!("Scientific notation works, e.g. 2e-9 for 2×10⁻⁹.");
}

/// Ask for one scalar, re-prompting until the input parses as a float.
/// Only fails on an I/O error or if stdin closes.
pub fn read_f64(label: &str) -> anyhow::Result<f64> {
    use colored::Colorize;
    let stdin = std::io::stdin();
    loop {
        print!("{label}: ");
        std::io::stdout().flush().context("failed to flush stdout")?;
        let mut line = String::new();
        let bytes_read = stdin
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if bytes_read == 0 {
            anyhow::bail!("input ended before a value for \"{label}\" was entered");
        }
        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                let complaint = format!("\"{}\" is not a number, try again.", line.trim());
                eprintln!("{}", complaint.yellow());
            }
        }
    }
}
