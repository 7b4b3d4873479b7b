//! Column merging for `paste`

/// One output row per source, that source's lines joined by tabs
pub fn merge_serial<S: AsRef<str>>(sources: &[Vec<S>]) -> Vec<String> {
    sources.iter().map(|lines| join_tabbed(lines)).collect()
}

/// Row `i` holds line `i` of every source, joined by tabs. Shorter sources
/// contribute empty fields, so every row has one field per source.
pub fn merge_parallel<S: AsRef<str>>(sources: &[Vec<S>]) -> Vec<String> {
    let rows = sources.iter().map(Vec::len).max().unwrap_or(0);
    (0..rows)
        .map(|row| {
            sources
                .iter()
                .map(|lines| lines.get(row).map_or("", |line| line.as_ref()))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect()
}

fn join_tabbed<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\t")
}
