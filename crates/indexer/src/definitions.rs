//! Definition tags from an external ctags-compatible tool
//!
//! The tool runs in filter mode: it reads file names from stdin, prints a
//! cross-reference line per definition (`symbol line file image`) and a
//! terminator line after each file.

use lextags_core::config::DefinitionsConfig;
use lextags_core::error::{Error, Result};
use lextags_core::Tag;
use regex::Regex;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use tracing::{debug, trace, warn};

/// Produces definition tags for one file
pub trait DefinitionSource: Send + Sync {
    fn extract(&self, file_path: &str) -> Result<Vec<Tag>>;
}

/// Parse cross-reference output for `file_path` until `terminator` or EOF
///
/// Lines that do not match `symbol line file image` for exactly this file
/// are skipped. A read error ends parsing and keeps what was parsed so far.
pub fn parse_definition_output<R: BufRead>(
    mut reader: R,
    file_path: &str,
    terminator: &str,
) -> Result<Vec<Tag>> {
    let pattern = format!(r"^(\S+)\s+(\d+)\s+{}\s+(.*)$", regex::escape(file_path));
    let line_re = Regex::new(&pattern)
        .map_err(|e| Error::parse(file_path, format!("Invalid definition pattern: {e}")))?;

    let mut tags = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("Stopped reading definitions for {file_path}: {e}");
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        if line.trim_end() == terminator {
            break;
        }

        let Some(caps) = line_re.captures(line.trim()) else {
            trace!("Skipping definition line: {:?}", line.trim_end());
            continue;
        };

        let line_number = match caps[2].parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                trace!("Skipping definition with bad line number: {:?}", &caps[2]);
                continue;
            }
        };

        match Tag::definition(&caps[1], line_number, file_path, &caps[3]) {
            Ok(tag) => tags.push(tag),
            Err(e) => trace!("Skipping definition: {e}"),
        }
    }

    Ok(tags)
}

/// Runs a ctags executable once per file
#[derive(Debug, Clone)]
pub struct CtagsDefinitionSource {
    program: PathBuf,
    terminator: String,
}

impl CtagsDefinitionSource {
    /// `command` is looked up on PATH; if it cannot be found the bare name
    /// is still used and any failure surfaces when the process starts.
    pub fn new(command: &str, terminator: impl Into<String>) -> Self {
        Self {
            program: resolve_command(command),
            terminator: terminator.into(),
        }
    }

    pub fn from_config(config: &DefinitionsConfig) -> Self {
        Self::new(&config.command, config.terminator.clone())
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn filter_args(&self) -> Vec<String> {
        vec![
            "-xu".to_string(),
            "--filter".to_string(),
            format!("--filter-terminator={}\n", self.terminator),
            "--format=1".to_string(),
        ]
    }

    fn spawn(&self) -> Result<Child> {
        Command::new(&self.program)
            .args(self.filter_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::definition_tool(format!(
                    "Failed to start {}: {e}",
                    self.program.display()
                ))
            })
    }
}

fn resolve_command(command: &str) -> PathBuf {
    match which::which(command) {
        Ok(path) => path,
        Err(e) => {
            debug!("{command} not found on PATH ({e}), using bare name");
            PathBuf::from(command)
        }
    }
}

/// Write the request line and close stdin
fn send_request(child: &mut Child, file_path: &str) -> Result<()> {
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::definition_tool("Definition tool stdin unavailable"))?;
    stdin.write_all(format!("{file_path}\n").as_bytes())?;
    Ok(())
}

fn abandon(child: &mut Child) {
    if let Err(e) = child.kill() {
        trace!("Failed to kill definition tool: {e}");
    }
    if let Err(e) = child.wait() {
        trace!("Failed to reap definition tool: {e}");
    }
}

impl DefinitionSource for CtagsDefinitionSource {
    fn extract(&self, file_path: &str) -> Result<Vec<Tag>> {
        let mut child = self.spawn()?;

        if let Err(e) = send_request(&mut child, file_path) {
            abandon(&mut child);
            return Err(e);
        }

        let Some(stdout) = child.stdout.take() else {
            abandon(&mut child);
            return Err(Error::definition_tool("Definition tool stdout unavailable"));
        };

        let parsed = parse_definition_output(BufReader::new(stdout), file_path, &self.terminator);
        let status = child.wait()?;
        let tags = parsed?;

        if tags.is_empty() && !status.success() {
            return Err(Error::definition_tool(format!(
                "{} exited with {status}",
                self.program.display()
            )));
        }

        debug!("{} definitions for {file_path}", tags.len());
        Ok(tags)
    }
}

/// Replays fixed tool output for every file
#[derive(Debug, Clone)]
pub struct StaticDefinitionSource {
    output: String,
    terminator: String,
}

impl StaticDefinitionSource {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            terminator: DefinitionsConfig::default().terminator,
        }
    }

    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }
}

impl DefinitionSource for StaticDefinitionSource {
    fn extract(&self, file_path: &str) -> Result<Vec<Tag>> {
        parse_definition_output(self.output.as_bytes(), file_path, &self.terminator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lextags_core::TagKind;
    use pretty_assertions::assert_eq;

    const TERMINATOR: &str = "###terminator###";

    fn parse(output: &str, file: &str) -> Vec<Tag> {
        parse_definition_output(output.as_bytes(), file, TERMINATOR).expect("parse")
    }

    #[test]
    fn test_parses_definition_line() {
        let tags = parse("foo 10 sample.wg int foo(){}\n###terminator###\n", "sample.wg");

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind, TagKind::Definition);
        assert_eq!(tags[0].symbol, "foo");
        assert_eq!(tags[0].line, 10);
        assert_eq!(tags[0].file, "sample.wg");
        assert_eq!(tags[0].image, "int foo(){}");
    }

    #[test]
    fn test_stops_at_terminator() {
        let output = "foo 1 a.c int foo;\n###terminator###\nbar 2 a.c int bar;\n";
        let tags = parse(output, "a.c");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].symbol, "foo");
    }

    #[test]
    fn test_reads_to_eof_without_terminator() {
        let tags = parse("foo 1 a.c int foo;\nbar 2 a.c int bar;", "a.c");
        let symbols: Vec<&str> = tags.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["foo", "bar"]);
    }

    #[test]
    fn test_skips_other_files_and_noise() {
        let output = "\
ctags: Warning: something odd
foo 3 other.c int foo;
bar x a.c int bar;
baz 4 a.c int baz;
";
        let tags = parse(output, "a.c");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].symbol, "baz");
    }

    #[test]
    fn test_path_is_matched_literally() {
        let output = "foo 3 aXc int foo;\nbar 4 a.c int bar;\n";
        let tags = parse(output, "a.c");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].symbol, "bar");
    }

    #[test]
    fn test_skips_line_zero() {
        assert!(parse("foo 0 a.c int foo;\n", "a.c").is_empty());
    }

    #[test]
    fn test_wide_columns() {
        let tags = parse("main            12 src/app.c        int main(void)\n", "src/app.c");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].line, 12);
        assert_eq!(tags[0].image, "int main(void)");
    }

    #[test]
    fn test_static_source_uses_requested_path() {
        let source = StaticDefinitionSource::new("foo 10 sample.wg int foo(){}\n");
        assert_eq!(source.extract("sample.wg").expect("extract").len(), 1);
        assert!(source.extract("other.wg").expect("extract").is_empty());
    }

    #[test]
    fn test_filter_args() {
        let source = CtagsDefinitionSource::new("ctags", "@@end@@");
        assert_eq!(
            source.filter_args(),
            vec!["-xu", "--filter", "--filter-terminator=@@end@@\n", "--format=1"]
        );
    }

    #[test]
    fn test_missing_tool_is_an_error() {
        let source = CtagsDefinitionSource::new("/nonexistent/lextags-no-such-ctags", TERMINATOR);
        let result = source.extract("a.c");
        assert!(matches!(result, Err(Error::DefinitionTool(_))));
    }
}
