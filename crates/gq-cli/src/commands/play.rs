use std::io::{self, BufRead, Write};

use gq_trainer::TrainerSession;

pub fn run() -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(stdin.lock(), stdout.lock())
}

/// Drive a trainer session over an explicit reader/writer pair. The
/// interactive entry point hands in stdin/stdout; tests pipe scripted input.
fn run_with(mut reader: impl BufRead, mut writer: impl Write) -> Result<(), String> {
    let mut session = TrainerSession::new();

    writeln!(writer, "{}", session.welcome()).map_err(|e| e.to_string())?;

    let mut line = String::new();
    while session.is_active() {
        writeln!(writer, "{}", session.menu()).map_err(|e| e.to_string())?;
        write!(writer, "> ").map_err(|e| e.to_string())?;
        writer.flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let output = session.process(&line);
        writeln!(writer, "{output}").map_err(|e| e.to_string())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_session_completes_a_quest() {
        let script = b"1\nstart git-basics\ncomplete\n3\n5\n";
        let mut out = Vec::new();
        run_with(&script[..], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[git-basics] Git Fundamentals"));
        assert!(text.contains("Quest 'git-basics' completed!"));
        assert!(text.contains("Total Points: 5 | Badges Earned: 1"));
        assert!(text.contains("Keep practicing!"));
    }

    #[test]
    fn eof_ends_the_loop() {
        let mut out = Vec::new();
        run_with(&b""[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("GitQuest"));
    }
}
