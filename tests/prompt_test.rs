use std::io::Cursor;

use spoplcli::cli::prompt::read_trimmed_line;

#[test]
fn test_read_trimmed_line() {
    let mut input = Cursor::new("rock\n");
    assert_eq!(read_trimmed_line(&mut input).unwrap(), "rock");

    // Surrounding whitespace is stripped
    let mut input = Cursor::new("  indie rock  \n");
    assert_eq!(read_trimmed_line(&mut input).unwrap(), "indie rock");

    // A line without a trailing newline still counts as an answer
    let mut input = Cursor::new("rock");
    assert_eq!(read_trimmed_line(&mut input).unwrap(), "rock");
}

#[test]
fn test_read_trimmed_line_blank_answer() {
    // Pressing ENTER yields an empty answer, which callers may re-prompt on
    let mut input = Cursor::new("\n");
    assert_eq!(read_trimmed_line(&mut input).unwrap(), "");
}

#[test]
fn test_read_trimmed_line_closed_stream() {
    let mut input = Cursor::new("");

    // A closed stream is an error, not an empty answer
    let err = read_trimmed_line(&mut input).unwrap_err();
    assert!(err.to_string().contains("stdin closed"));

    // Reading again keeps failing instead of yielding empty answers forever
    assert!(read_trimmed_line(&mut input).is_err());
}

#[test]
fn test_read_trimmed_line_consumes_one_line_per_call() {
    let mut input = Cursor::new("rock\nno\n");

    assert_eq!(read_trimmed_line(&mut input).unwrap(), "rock");
    assert_eq!(read_trimmed_line(&mut input).unwrap(), "no");

    // The input is exhausted afterwards
    assert!(read_trimmed_line(&mut input).is_err());
}
