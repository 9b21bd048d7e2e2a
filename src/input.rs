// Email text loading from files and stdin.
//
// Lines are rejoined with '\n' after each one, so a file with CRLF endings
// scans identically to its LF version.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read an email from a text file.
///
/// On failure nothing is returned, so the caller's current text stays as it was.
pub fn load_file(path: &Path) -> Result<String> {
    let file =
        File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    let text = read_to_string(BufReader::new(file))
        .with_context(|| format!("could not read {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "loaded email file");
    Ok(text)
}

/// Read all lines from a reader, each followed by '\n'.
///
/// Bytes that are not valid UTF-8 (Latin-1 or Windows-1252 mail) become
/// U+FFFD instead of failing the read.
pub fn read_to_string<R: BufRead>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        text.push_str(&String::from_utf8_lossy(&buf));
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_gets_a_newline() {
        let text = read_to_string("Subject: hi\nbody".as_bytes()).unwrap();
        assert_eq!(text, "Subject: hi\nbody\n");
    }

    #[test]
    fn test_crlf_matches_lf() {
        let crlf = read_to_string("a\r\nb\r\n".as_bytes()).unwrap();
        let lf = read_to_string("a\nb\n".as_bytes()).unwrap();
        assert_eq!(crlf, lf);
    }

    #[test]
    fn test_last_line_without_newline() {
        let text = read_to_string("a\r\nb".as_bytes()).unwrap();
        assert_eq!(text, "a\nb\n");
    }

    #[test]
    fn test_latin1_bytes_are_replaced_not_rejected() {
        let bytes: &[u8] = b"Caf\xe9 promo\nURGENT: click here http://bit.ly/x\n";
        let text = read_to_string(bytes).unwrap();
        assert_eq!(
            text,
            "Caf\u{FFFD} promo\nURGENT: click here http://bit.ly/x\n"
        );

        let result = crate::scoring::scan(&text).unwrap();
        // urgent + click here + http:// + bit.ly
        assert_eq!(result.score, 8);
    }

    #[test]
    fn test_latin1_file_loads() {
        let path = std::env::temp_dir().join(format!(
            "phishscan_latin1_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, b"Votre compte est suspendu. \xc9tape: verify your account\n")
            .unwrap();
        let text = load_file(&path);
        let _ = std::fs::remove_file(&path);

        let text = text.unwrap();
        assert!(text.contains("verify your account"));
    }

    #[test]
    fn test_empty_reader() {
        assert_eq!(read_to_string("".as_bytes()).unwrap(), "");
    }
}
