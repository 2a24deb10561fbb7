//! Interactive front end: choose where the edge list comes from, then print
//! the answers to the standard queries.
//!
//! [`Console`] reads lines from any [`AsyncBufRead`] and writes to any
//! [`AsyncWrite`], so the binary drives it with stdin and stdout.

use std::io;
use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::debug;

use crate::graph::Graph;
use crate::planner::{QueryEngine, standard_queries};
use crate::report::render_report;
use crate::source::{DEFAULT_EDGES, DataSource, MenuChoice, SourceError};

/// Message printed when a menu line is not `1`, `2` or `3`.
pub const ILLEGAL_INPUT: &str = "Illegal input, please input the right number";

/// Errors that end a console session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The chosen data source could not be read
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// A console session over a line reader and a writer.
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    /// Run one session: menu, data source, report.
    ///
    /// Input closing before a source is chosen ends the session quietly.
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        self.show_menu().await?;

        let Some(source) = self.choose_source().await? else {
            debug!("Input closed before a data source was chosen");
            return Ok(());
        };

        let text = source.read().await?;
        self.say(&format!("Your input data is {}\n", text.trim())).await?;

        let graph = Graph::from_text(&text);
        let outcomes = QueryEngine::new(&graph).answer_all(&standard_queries());
        self.say(&render_report(&outcomes)).await?;
        Ok(())
    }

    async fn show_menu(&mut self) -> io::Result<()> {
        self.say(&format!(
            "Please select one way to input data:\n    \
             1: Use the default data (Graph: {DEFAULT_EDGES})\n    \
             2: Import data from file (local)\n    \
             3: Manual input\n"
        ))
        .await
    }

    /// Read menu lines until a valid choice is made, then any follow-up
    /// input it needs. `None` means input closed first.
    pub async fn choose_source(&mut self) -> io::Result<Option<DataSource>> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Default) => return Ok(Some(DataSource::Default)),
                Some(MenuChoice::File) => {
                    let path = self.prompt("Please input the file path: ").await?;
                    return Ok(path.map(|p| DataSource::File(PathBuf::from(p.trim()))));
                }
                Some(MenuChoice::Manual) => {
                    let text = self.prompt("Please input your parameters:\n").await?;
                    return Ok(text.map(DataSource::Inline));
                }
                None => {
                    debug!(%line, "Rejected menu input");
                    self.say(&format!("{ILLEGAL_INPUT}\n")).await?;
                }
            }
        }
    }

    async fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.say(message).await?;
        self.lines.next_line().await
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    async fn source_from(input: &[u8]) -> (Option<DataSource>, String) {
        let mut out = Vec::new();
        let source = Console::new(input, &mut out).choose_source().await.unwrap();
        (source, String::from_utf8(out).unwrap())
    }

    async fn session(input: &[u8]) -> Result<String, ConsoleError> {
        let mut out = Vec::new();
        Console::new(input, &mut out).run().await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn default_choice() {
        let (source, out) = source_from(b"1\n").await;
        assert_eq!(source, Some(DataSource::Default));
        assert_eq!(out, "");
    }

    #[tokio::test]
    async fn illegal_input_reprompts() {
        let (source, out) = source_from(b"9\n\nabc\n1\n").await;
        assert_eq!(source, Some(DataSource::Default));
        assert_eq!(out, format!("{ILLEGAL_INPUT}\n").repeat(3));
    }

    #[tokio::test]
    async fn file_path_is_trimmed() {
        let (source, out) = source_from(b"2\n  /tmp/routes.txt \n").await;
        assert_eq!(
            source,
            Some(DataSource::File(PathBuf::from("/tmp/routes.txt")))
        );
        assert_eq!(out, "Please input the file path: ");
    }

    #[tokio::test]
    async fn manual_text_after_illegal_input() {
        let (source, out) = source_from(b"9\n3\nAB5\n").await;
        assert_eq!(source, Some(DataSource::Inline("AB5".into())));
        assert_eq!(
            out,
            format!("{ILLEGAL_INPUT}\nPlease input your parameters:\n")
        );
    }

    #[tokio::test]
    async fn manual_empty_line_is_empty_text() {
        let (source, _) = source_from(b"3\n\n").await;
        assert_eq!(source, Some(DataSource::Inline(String::new())));
    }

    #[tokio::test]
    async fn eof_before_choice() {
        let (source, _) = source_from(b"").await;
        assert_eq!(source, None);

        let (source, out) = source_from(b"7\n").await;
        assert_eq!(source, None);
        assert_eq!(out, format!("{ILLEGAL_INPUT}\n"));
    }

    #[tokio::test]
    async fn eof_after_choice() {
        let (source, _) = source_from(b"2\n").await;
        assert_eq!(source, None);

        let (source, _) = source_from(b"3").await;
        assert_eq!(source, None);
    }

    #[tokio::test]
    async fn default_session_prints_report() {
        let out = session(b"1\n").await.unwrap();

        assert!(out.starts_with("Please select one way to input data:\n"));
        assert!(out.contains(&format!("Your input data is {DEFAULT_EDGES}\n")));
        assert!(out.contains("Output #1:\n9\n"));
        assert!(out.contains("Output #5:\nNO SUCH ROUTE\n"));
        assert!(out.ends_with("Output #10:\n7\n"));
    }

    #[tokio::test]
    async fn file_session_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "AB1, BC1").unwrap();
        let input = format!("2\n{}\n", file.path().display());

        let out = session(input.as_bytes()).await.unwrap();
        assert!(out.contains("Your input data is AB1, BC1\n"));
        // A-B-C
        assert!(out.contains("Output #1:\n2\n"));
    }

    #[tokio::test]
    async fn missing_file_ends_session_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = format!("2\n{}\n", dir.path().join("missing.txt").display());

        let err = session(input.as_bytes()).await.unwrap_err();
        assert!(matches!(err, ConsoleError::Source(SourceError::Read { .. })));
    }

    #[tokio::test]
    async fn closed_input_ends_quietly() {
        let out = session(b"").await.unwrap();
        assert!(out.starts_with("Please select one way to input data:\n"));
        assert!(!out.contains("Output #"));
    }
}
