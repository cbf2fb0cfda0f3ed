//! Runs a command file against a session and reports the results.

use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;

use bitmap_terminal::{CommandOutput, Session};
use bitmap_types::error::Result;
use bitmap_types::{EditorConfig, ErrorPolicy};

/// Counters collected over one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Physical lines read, including skipped blank lines.
    pub lines: usize,
    /// Commands dispatched.
    pub commands: usize,
    /// Commands that failed.
    pub failures: usize,
    /// Whether processing stopped early under [`ErrorPolicy::Abort`].
    pub aborted: bool,
}

/// Open the commands file if it is usable: given, existing, a regular file,
/// and readable.
pub fn open_commands_file(path: Option<&str>) -> Option<File> {
    let path = Path::new(path?);
    if !path.is_file() {
        return None;
    }
    match File::open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            log::debug!("Cannot open {}: {e}", path.display());
            None
        },
    }
}

/// Feeds lines to a [`Session`] and writes rendered output and error reports.
pub struct Editor<W: Write> {
    session: Session,
    config: EditorConfig,
    out: W,
}

impl<W: Write> Editor<W> {
    pub fn new(config: EditorConfig, out: W) -> Self {
        Self {
            session: Session::new(),
            config,
            out,
        }
    }

    /// Process every line of `input`.
    ///
    /// Command failures are reported on the output and counted; only I/O
    /// failures are returned as errors. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD, so such a line fails as a command of its own.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let number = summary.lines + 1;
            summary.lines = number;
            let raw = String::from_utf8_lossy(&buf);
            let line = raw.trim_end_matches(['\n', '\r']);

            let mut tokens = line.split_whitespace();
            let tag = match tokens.next() {
                Some(tag) => tag,
                None if self.config.skip_blank_lines => continue,
                None => "",
            };
            let args: Vec<&str> = tokens.collect();
            summary.commands += 1;

            match self.session.dispatch(tag, &args) {
                Ok(CommandOutput::Text(text)) => writeln!(self.out, "{text}")?,
                Ok(CommandOutput::None) => {},
                Err(e) => {
                    summary.failures += 1;
                    log::warn!("Line {number}: {} ({e})", e.kind());
                    writeln!(self.out, "An error occurred in line {number} ({line})")?;
                    writeln!(self.out, "{e}")?;
                    if self.config.on_error == ErrorPolicy::Abort {
                        summary.aborted = true;
                        break;
                    }
                },
            }
        }
        self.out.flush()?;
        Ok(summary)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(config: EditorConfig, script: &str) -> (RunSummary, String) {
        let mut editor = Editor::new(config, Vec::new());
        let summary = editor.run(Cursor::new(script)).unwrap();
        let out = String::from_utf8(editor.into_output()).unwrap();
        (summary, out)
    }

    fn run(script: &str) -> (RunSummary, String) {
        run_with(EditorConfig::default(), script)
    }

    #[test]
    fn empty_input_does_nothing() {
        let (summary, out) = run("");
        assert_eq!(summary, RunSummary::default());
        assert!(out.is_empty());
    }

    #[test]
    fn show_prints_grid() {
        let (summary, out) = run("I 5 6\nL 1 3 A\nV 2 3 6 W\nH 3 5 2 Z\nS\n");
        assert_eq!(summary.commands, 5);
        assert_eq!(summary.failures, 0);
        assert_eq!(out, "OOOOO\nOOZZZ\nAWOOO\nOWOOO\nOWOOO\nOWOOO\n");
    }

    #[test]
    fn command_before_create_is_reported() {
        let (summary, out) = run("V 1 2 3 A\n");
        assert_eq!(summary.failures, 1);
        assert_eq!(
            out,
            "An error occurred in line 1 (V 1 2 3 A)\nPlease create image before manipulating it.\n"
        );
    }

    #[test]
    fn missing_arguments_are_reported_with_line_number() {
        let (_, out) = run("I 10 20\nL\n");
        assert_eq!(
            out,
            "An error occurred in line 2 (L)\nWrong number of arguments. Expected 3, got 0.\n"
        );
    }

    #[test]
    fn unrecognised_command() {
        let (_, out) = run("I 10 20\nZ\n");
        assert_eq!(out, "An error occurred in line 2 (Z)\nUnrecognised command.\n");
    }

    #[test]
    fn continues_after_error_by_default() {
        let (summary, out) = run("I 2 2\nL 3 3 A\nL 1 1 B\nS\n");
        assert_eq!(summary.failures, 1);
        assert!(!summary.aborted);
        assert!(out.ends_with("BO\nOO\n"), "{out}");
    }

    #[test]
    fn abort_policy_stops_at_first_error() {
        let config = EditorConfig {
            on_error: ErrorPolicy::Abort,
            ..EditorConfig::default()
        };
        let (summary, out) = run_with(config, "I 2 2\nL 3 3 A\nS\n");
        assert!(summary.aborted);
        assert_eq!(summary.lines, 2);
        assert!(!out.contains("OO"), "{out}");
    }

    #[test]
    fn blank_lines_are_skipped_but_counted() {
        let (summary, out) = run("I 1 1\n\n   \nX\n");
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.commands, 2);
        assert!(out.starts_with("An error occurred in line 4 (X)"), "{out}");
    }

    #[test]
    fn blank_lines_dispatch_when_not_skipped() {
        let config = EditorConfig {
            skip_blank_lines: false,
            ..EditorConfig::default()
        };
        let (summary, out) = run_with(config, "I 1 1\n\n");
        assert_eq!(summary.failures, 1);
        assert_eq!(out, "An error occurred in line 2 ()\nUnrecognised command.\n");
    }

    #[test]
    fn crlf_lines_are_accepted() {
        let (summary, out) = run("I 2 1\r\nF 1 1 Q\r\nS\r\n");
        assert_eq!(summary.failures, 0);
        assert_eq!(out, "QQ\n");
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_run_continues() {
        let mut editor = Editor::new(EditorConfig::default(), Vec::new());
        let summary = editor
            .run(Cursor::new(&b"I 2 1\nL 1 1 \xff\nS\n"[..]))
            .unwrap();
        let out = String::from_utf8(editor.into_output()).unwrap();
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.failures, 1);
        assert_eq!(
            out,
            "An error occurred in line 2 (L 1 1 \u{FFFD})\n\
             Invalid colour \"\u{FFFD}\". Expected a single letter A-Z.\n\
             OO\n"
        );
    }

    #[test]
    fn final_line_without_newline_is_run() {
        let (summary, out) = run("I 1 2\nS");
        assert_eq!(summary.lines, 2);
        assert_eq!(out, "O\nO\n");
    }

    #[test]
    fn session_is_exposed_after_run() {
        let mut editor = Editor::new(EditorConfig::default(), Vec::new());
        editor.run(Cursor::new("I 3 3\nF 2 2 B\n")).unwrap();
        let grid = editor.session().grid().unwrap();
        assert_eq!(grid.render(), "BBB\nBBB\nBBB");
    }

    #[test]
    fn demo_script_and_config() {
        let config = EditorConfig::from_toml(include_str!("../demos/bitmap-editor.toml")).unwrap();
        assert_eq!(config.on_error, ErrorPolicy::Abort);
        let (summary, out) = run_with(config, include_str!("../demos/show.txt"));
        assert_eq!(summary.failures, 0);
        assert_eq!(
            out,
            "OOOOO\nOOZZZ\nAWOOO\nOWOOO\nOWOOO\nOWOOO\n\
             OOOOO\nOOZZZ\nAWJJJ\nOWJJJ\nOWJJJ\nOWJJJ\n"
        );
    }

    #[test]
    fn open_rejects_missing_path() {
        assert!(open_commands_file(None).is_none());
        assert!(open_commands_file(Some("gangnamstyle_lyrics.txt")).is_none());
    }

    #[test]
    fn open_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(open_commands_file(dir.path().to_str()).is_none());
    }

    #[test]
    fn open_accepts_regular_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "I 2 2").unwrap();
        assert!(open_commands_file(file.path().to_str()).is_some());
    }
}
