//! Module assembly: one group's header plus its extracted functions.

use crate::extractor::FunctionExtractor;
use modsplit_core::GroupSpec;

/// Assemble one group's output text.
///
/// The header comes first (explicit or generated), then each function in
/// the group's declared order, regardless of where the functions appear in
/// the source. Failed extractions contribute placeholder comments instead
/// of stopping the group. Pure function, no I/O.
pub fn assemble(source: &str, group: &GroupSpec) -> String {
    let extractor = FunctionExtractor::new();
    let mut output = group.header_or_default();
    for name in &group.functions {
        output.push_str(&extractor.extract(source, name));
    }
    output
}
