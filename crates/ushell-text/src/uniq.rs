//! Adjacent-duplicate handling for `uniq`

/// Which groups `uniq` prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UniqMode {
    /// One line per group
    #[default]
    All,
    /// One line per group of two or more (`-d`)
    DuplicatesOnce,
    /// Every line of every group of two or more (`-D`)
    DuplicatesAll,
}

/// A maximal run of adjacent equal lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'a> {
    pub line: &'a str,
    pub count: usize,
}

pub fn group_adjacent<'a, S: AsRef<str>>(lines: &'a [S]) -> Vec<Group<'a>> {
    let mut groups: Vec<Group<'a>> = Vec::new();
    for line in lines {
        let line = line.as_ref();
        match groups.last_mut() {
            Some(group) if group.line == line => group.count += 1,
            _ => groups.push(Group { line, count: 1 }),
        }
    }
    groups
}

/// Render the groups of `lines` for `mode`, prefixing the group size when
/// `count` is set
pub fn uniq_lines<S: AsRef<str>>(lines: &[S], mode: UniqMode, count: bool) -> Vec<String> {
    let render = |group: &Group<'_>| {
        if count {
            format!("{:>7} {}", group.count, group.line)
        } else {
            group.line.to_string()
        }
    };

    let mut out = Vec::new();
    for group in group_adjacent(lines) {
        match mode {
            UniqMode::All => out.push(render(&group)),
            UniqMode::DuplicatesOnce if group.count > 1 => out.push(render(&group)),
            UniqMode::DuplicatesAll if group.count > 1 => {
                out.extend(std::iter::repeat_with(|| render(&group)).take(group.count))
            }
            _ => {}
        }
    }
    out
}
