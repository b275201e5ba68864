//! Page titles derived from input file names.

use std::sync::LazyLock;

use regex::Regex;

const EXPORT_PREFIX: &str = "BPMN diagram - ";

static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*V\s*\d+\.\d+").expect("version pattern is valid"));

/// Derives a page title from a file name.
///
/// Strips the modeller's export prefix, a `- V1.2` style version suffix and
/// the `.bpmn` extension. Falls back to `default` when nothing is left.
pub(crate) fn from_file_name(file_name: &str, default: &str) -> String {
    let title = file_name.replace(EXPORT_PREFIX, "");
    let title = VERSION_SUFFIX.replace_all(&title, "");
    let title = title.replace(".bpmn", "");
    let title = title.trim();

    if title.is_empty() {
        default.to_string()
    } else {
        title.to_string()
    }
}
