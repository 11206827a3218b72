//! Interactive console login.

use std::io::{self, BufRead, Write};

use inkshop_accounts::{Account, AccountDirectory};

/// Prompt for credentials on `output`, read them from `input`, and
/// authenticate against the directory.
///
/// Returns `Ok(None)` on failed authentication after printing the failure
/// message; the caller ends the session without retrying.
pub fn login<'d>(
    directory: &'d AccountDirectory,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<&'d Account>> {
    write!(output, "Enter your username: ")?;
    output.flush()?;
    let username = read_line(input)?;

    write!(output, "Enter your password: ")?;
    output.flush()?;
    let password = read_line(input)?;

    match directory.authenticate(&username, &password) {
        Some(account) => {
            writeln!(output, "Welcome, {}!", account.username())?;
            Ok(Some(account))
        }
        None => {
            writeln!(output, "Invalid username or password. Please try again.")?;
            Ok(None)
        }
    }
}

/// Read one line, stripping the trailing newline (and a CR, if any).
fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
