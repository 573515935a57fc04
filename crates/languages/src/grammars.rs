//! Registration of the tree-sitter grammars

use crate::lexer::{Lexer, LexerDescriptor};
use crate::treesitter::TreeSitterLexer;

fn c_lexer() -> Box<dyn Lexer> {
    Box::new(TreeSitterLexer::new("c", tree_sitter_c::LANGUAGE.into()))
}

fn cpp_lexer() -> Box<dyn Lexer> {
    Box::new(TreeSitterLexer::new("cpp", tree_sitter_cpp::LANGUAGE.into()))
}

fn go_lexer() -> Box<dyn Lexer> {
    Box::new(TreeSitterLexer::new("go", tree_sitter_go::LANGUAGE.into()))
}

fn javascript_lexer() -> Box<dyn Lexer> {
    Box::new(TreeSitterLexer::new(
        "javascript",
        tree_sitter_javascript::LANGUAGE.into(),
    ))
}

fn python_lexer() -> Box<dyn Lexer> {
    Box::new(TreeSitterLexer::new(
        "python",
        tree_sitter_python::LANGUAGE.into(),
    ))
}

fn rust_lexer() -> Box<dyn Lexer> {
    Box::new(TreeSitterLexer::new("rust", tree_sitter_rust::LANGUAGE.into()))
}

fn tsx_lexer() -> Box<dyn Lexer> {
    Box::new(TreeSitterLexer::new(
        "tsx",
        tree_sitter_typescript::LANGUAGE_TSX.into(),
    ))
}

fn typescript_lexer() -> Box<dyn Lexer> {
    Box::new(TreeSitterLexer::new(
        "typescript",
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
    ))
}

inventory::submit! {
    LexerDescriptor {
        name: "c",
        aliases: &[],
        filenames: &["*.c", "*.h", "*.idc"],
        interpreters: &["tcc"],
        factory: c_lexer,
    }
}

inventory::submit! {
    LexerDescriptor {
        name: "cpp",
        aliases: &["c++", "cxx"],
        filenames: &["*.cpp", "*.hpp", "*.c++", "*.h++", "*.cc", "*.hh", "*.cxx", "*.hxx", "*.C", "*.H"],
        interpreters: &[],
        factory: cpp_lexer,
    }
}

inventory::submit! {
    LexerDescriptor {
        name: "go",
        aliases: &["golang"],
        filenames: &["*.go"],
        interpreters: &[],
        factory: go_lexer,
    }
}

inventory::submit! {
    LexerDescriptor {
        name: "javascript",
        aliases: &["js", "jsx"],
        filenames: &["*.js", "*.jsx", "*.mjs", "*.cjs"],
        interpreters: &["node", "nodejs"],
        factory: javascript_lexer,
    }
}

inventory::submit! {
    LexerDescriptor {
        name: "python",
        aliases: &["py", "python3", "py3"],
        filenames: &["*.py", "*.pyw", "*.pyi", "SConstruct", "SConscript"],
        interpreters: &["python", "pypy"],
        factory: python_lexer,
    }
}

inventory::submit! {
    LexerDescriptor {
        name: "rust",
        aliases: &["rs"],
        filenames: &["*.rs"],
        interpreters: &["rustc"],
        factory: rust_lexer,
    }
}

inventory::submit! {
    LexerDescriptor {
        name: "tsx",
        aliases: &[],
        filenames: &["*.tsx"],
        interpreters: &[],
        factory: tsx_lexer,
    }
}

inventory::submit! {
    LexerDescriptor {
        name: "typescript",
        aliases: &["ts"],
        filenames: &["*.ts", "*.mts", "*.cts"],
        interpreters: &["deno", "ts-node"],
        factory: typescript_lexer,
    }
}
