//! Delivery of merged tags to a sink

use lextags_core::{Tag, TagSink};

/// Hand every tag to `sink` in order, returning how many were emitted
///
/// Each call lends the tag's strings to the sink; nothing is allocated
/// per tag, so nothing outlives a `put` call.
pub fn emit_tags(tags: &[Tag], sink: &mut dyn TagSink) -> usize {
    for tag in tags {
        sink.put(tag.kind, &tag.symbol, tag.line, &tag.file, &tag.image);
    }
    tags.len()
}
