pub const SOURCES_OPEN: &str = "<sources>";
pub const SOURCES_CLOSE: &str = "</sources>";

/// URLs listed one per line inside the output's `<sources>` block.
///
/// Both markers must appear somewhere in the text. The block runs from the
/// first opening marker to the next closing marker, or to the end of the text.
pub fn extract_source_block(output: &str) -> Vec<String> {
    if !(output.contains(SOURCES_OPEN) && output.contains(SOURCES_CLOSE)) {
        return Vec::new();
    }

    let Some((_, after_open)) = output.split_once(SOURCES_OPEN) else {
        return Vec::new();
    };
    let block = after_open
        .split_once(SOURCES_CLOSE)
        .map_or(after_open, |(block, _)| block);

    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Source-block entries first, then explicit references not seen yet.
pub fn merge_references(block: Vec<String>, explicit: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(block.len() + explicit.len());
    for link in block.into_iter().chain(explicit.iter().cloned()) {
        if !merged.contains(&link) {
            merged.push(link);
        }
    }
    merged
}

/// Combined reference list for a `/process` result.
pub fn references_for(output: &str, explicit: &[String]) -> Vec<String> {
    merge_references(extract_source_block(output), explicit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn block_lines_become_links() {
        let output = "Report body\n<sources>A\nB\n</sources>";
        assert_eq!(extract_source_block(output), strings(&["A", "B"]));
    }

    #[test]
    fn block_lines_are_trimmed_and_blanks_dropped() {
        let output = "<sources>\n  https://a.example \n\n\thttps://b.example\n</sources>\ntrailer";
        assert_eq!(
            extract_source_block(output),
            strings(&["https://a.example", "https://b.example"])
        );
    }

    #[test]
    fn missing_marker_means_no_block() {
        assert!(extract_source_block("no markers").is_empty());
        assert!(extract_source_block("<sources>\nhttps://a.example").is_empty());
        assert!(extract_source_block("https://a.example\n</sources>").is_empty());
    }

    #[test]
    fn only_first_block_is_read() {
        let output = "<sources>A</sources> middle <sources>B</sources>";
        assert_eq!(extract_source_block(output), strings(&["A"]));
    }

    #[test]
    fn closing_marker_before_opening_reads_to_end() {
        let output = "</sources> preface <sources>\nA\nB";
        assert_eq!(extract_source_block(output), strings(&["A", "B"]));
    }

    #[test]
    fn explicit_references_are_appended_without_duplicates() {
        let output = "<sources>\nA\nB\n</sources>";
        let explicit = strings(&["B", "C", "A", "D"]);
        assert_eq!(
            references_for(output, &explicit),
            strings(&["A", "B", "C", "D"])
        );
    }

    #[test]
    fn explicit_references_alone() {
        assert_eq!(
            references_for("plain output", &strings(&["X", "X", "Y"])),
            strings(&["X", "Y"])
        );
    }

    #[test]
    fn nothing_found_is_empty() {
        assert!(references_for("plain output", &[]).is_empty());
    }
}
