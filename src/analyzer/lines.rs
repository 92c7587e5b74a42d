//! Line-locating helpers shared by the checks

use regex::Regex;

/// Raw marker text together with its `\n`-split line view
#[derive(Debug, Clone)]
pub struct MarkerSource<'a> {
    pub text: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> MarkerSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: split_lines(text),
        }
    }

    /// Number of lines; a trailing newline counts one extra empty line
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Split on `\n` only, keeping the empty segment after a trailing newline.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// 1-based number of the first line where `pattern` matches anywhere, or 1.
pub fn find_line_number(lines: &[&str], pattern: &Regex) -> usize {
    lines
        .iter()
        .position(|line| pattern.is_match(line))
        .map(|idx| idx + 1)
        .unwrap_or(1)
}

/// Suggested line for inserting a missing top-level field.
///
/// `id` goes right after `name:` (line 2 when `name:` is absent or on line 1),
/// `name` goes on line 2, anything else is appended after the last line.
pub fn find_line_for_insertion(lines: &[&str], field: &str) -> usize {
    match field {
        "id" => {
            let name_line = find_line_number(lines, cached_regex!(r"^name\s*:"));
            if name_line > 1 {
                name_line + 1
            } else {
                2
            }
        }
        "name" => 2,
        _ => lines.len() + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(MarkerSource::new("a\nb").line_count(), 2);
    }

    #[test]
    fn find_line_number_defaults_to_one() {
        let re = Regex::new(r"^zzz").unwrap();
        assert_eq!(find_line_number(&["a", "b"], &re), 1);
        let re = Regex::new(r"b").unwrap();
        assert_eq!(find_line_number(&["a", "b"], &re), 2);
    }

    #[test]
    fn id_inserted_after_name() {
        let lines = split_lines("# header\ndescription: d\nname: Foo\n");
        assert_eq!(find_line_for_insertion(&lines, "id"), 4);
    }

    #[test]
    fn id_defaults_to_line_two() {
        assert_eq!(find_line_for_insertion(&split_lines("name: Foo"), "id"), 2);
        assert_eq!(find_line_for_insertion(&split_lines("description: d"), "id"), 2);
    }

    #[test]
    fn other_fields_append_after_end() {
        let lines = split_lines("name: Foo\nid: FOO\n");
        assert_eq!(find_line_for_insertion(&lines, "name"), 2);
        assert_eq!(find_line_for_insertion(&lines, "description"), 4);
    }
}
