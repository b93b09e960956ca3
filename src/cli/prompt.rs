use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::Res;

pub fn prompt(label: &str) -> Res<String> {
    print!("{} ", label.green());
    io::stdout().flush()?;

    read_trimmed_line(&mut io::stdin().lock())
}

pub fn read_trimmed_line(reader: &mut impl BufRead) -> Res<String> {
    let mut input = String::new();
    // zero bytes read means the stream is closed, not an empty answer
    if reader.read_line(&mut input)? == 0 {
        return Err("stdin closed".into());
    }
    Ok(input.trim().to_string())
}

pub fn prompt_yes_no(label: &str, default_yes: bool) -> Res<bool> {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
    let answer = prompt(&format!("{} {}", label, hint))?;

    if answer.is_empty() {
        return Ok(default_yes);
    }
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
