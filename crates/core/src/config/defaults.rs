//! Default values and functions for configuration

// Default constants
pub(crate) const DEFAULT_DEFINITION_COMMAND: &str = "ctags";
pub(crate) const DEFAULT_FILTER_TERMINATOR: &str = "###terminator###";

pub(crate) fn default_definitions_enabled() -> bool {
    true
}

pub(crate) fn default_definition_command() -> String {
    DEFAULT_DEFINITION_COMMAND.to_string()
}

pub(crate) fn default_filter_terminator() -> String {
    DEFAULT_FILTER_TERMINATOR.to_string()
}

pub(crate) fn default_case_insensitive_extensions() -> bool {
    cfg!(windows)
}

pub(crate) fn default_concurrent_sources() -> bool {
    true
}
