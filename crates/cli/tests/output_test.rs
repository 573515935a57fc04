//! End-to-end tests streaming extracted tags through the CLI sink

use lextags::{OutputFormat, OutputSummary, StreamSink};
use lextags_indexer::{
    DefinitionSource, ExtractRequest, LexicalReferenceSource, StaticDefinitionSource,
    TagExtractor,
};
use pretty_assertions::assert_eq;

const SOURCE: &str = "def greet(name):\n    return name\n";

fn render(extractor: &TagExtractor, file: &str, format: OutputFormat) -> (String, OutputSummary) {
    let mut buf = Vec::new();
    let mut sink = StreamSink::new(&mut buf, format);
    extractor.extract(&ExtractRequest::new(file), &mut sink);
    let summary = sink.finish().expect("finish");
    (String::from_utf8(buf).expect("utf8"), summary)
}

fn python_file(dir: &tempfile::TempDir) -> String {
    let path = dir.path().join("greet.py");
    std::fs::write(&path, SOURCE).expect("write source");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_ctags_output_for_python_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = python_file(&dir);

    let tool_output = format!("greet 1 {file} def greet(name):\n###terminator###\n");
    let definitions: Box<dyn DefinitionSource> = Box::new(StaticDefinitionSource::new(tool_output));
    let extractor = TagExtractor::new(Some(definitions), Box::new(LexicalReferenceSource));

    let (output, summary) = render(&extractor, &file, OutputFormat::Ctags);

    let expected = format!(
        "D greet 1 {file} def greet(name):\nR name 1 {file}\nR name 2 {file}\n"
    );
    assert_eq!(output, expected);
    assert_eq!(
        summary,
        OutputSummary {
            emitted: 3,
            warnings: 0
        }
    );
}

#[test]
fn test_json_output_references_only() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = python_file(&dir);

    let extractor = TagExtractor::new(None, Box::new(LexicalReferenceSource));
    let (output, summary) = render(&extractor, &file, OutputFormat::Json);

    let records: Vec<serde_json::Value> = output
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r["kind"] == "reference"));
    let symbols: Vec<&str> = records
        .iter()
        .filter_map(|r| r["symbol"].as_str())
        .collect();
    assert_eq!(symbols, vec!["greet", "name", "name"]);
    assert_eq!(summary.emitted, 3);
}

#[test]
fn test_missing_file_only_warns() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("absent.py").to_string_lossy().into_owned();

    let extractor = TagExtractor::new(None, Box::new(LexicalReferenceSource));
    let (output, summary) = render(&extractor, &file, OutputFormat::Ctags);

    assert!(output.is_empty());
    assert_eq!(summary.emitted, 0);
    assert_eq!(summary.warnings, 1);
}
