//! Subprocess protocol against stand-in ctags scripts
//!
//! Kept to a single test so no other test in this binary forks while a
//! script is still open for writing.

#![cfg(unix)]

use lextags_core::{Error, TagKind};
use lextags_indexer::{CtagsDefinitionSource, DefinitionSource};
use pretty_assertions::assert_eq;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const TERMINATOR: &str = "###terminator###";

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}")).expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod script");
    path
}

#[test]
fn test_filter_protocol() {
    let dir = tempfile::tempdir().expect("temp dir");

    let echoing = write_script(
        dir.path(),
        "echoing-ctags",
        &format!(
            "while read -r path; do\n  echo \"noise line\"\n  echo \"foo 10 $path int foo(){{}}\"\n  echo \"{TERMINATOR}\"\n  echo \"late 99 $path never read\"\ndone\n"
        ),
    );
    let silent = write_script(dir.path(), "silent-ctags", "cat > /dev/null\nexit 0\n");
    let failing = write_script(dir.path(), "failing-ctags", "cat > /dev/null\nexit 3\n");

    let source = CtagsDefinitionSource::new(&echoing.to_string_lossy(), TERMINATOR);
    let tags = source.extract("sample.wg").expect("extract");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].kind, TagKind::Definition);
    assert_eq!(tags[0].symbol, "foo");
    assert_eq!(tags[0].line, 10);
    assert_eq!(tags[0].image, "int foo(){}");

    let source = CtagsDefinitionSource::new(&silent.to_string_lossy(), TERMINATOR);
    assert!(source.extract("sample.wg").expect("extract").is_empty());

    let source = CtagsDefinitionSource::new(&failing.to_string_lossy(), TERMINATOR);
    assert!(matches!(
        source.extract("sample.wg"),
        Err(Error::DefinitionTool(_))
    ));
}
