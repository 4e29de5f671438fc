use super::cursor::Cursor;

/// Scanner state while walking a joined path.
#[derive(Clone, Copy)]
enum Scan {
    /// At the start of a segment.
    Boundary,
    /// Segment so far is a single `.`.
    Dot(usize),
    /// Segment so far is `..`.
    DoubleDot(usize),
    /// Inside an ordinary segment starting at the given byte.
    Segment(usize),
}

/// Remove `.` and `..` segments from a relative path in a single pass.
///
/// `..` pops the last emitted segment; popping past the root is a no-op, so
/// `a/../../b` collapses to `b`. A trailing `.` or `..` without a slash is
/// treated the same as `./` and `../`.
pub fn normalize_segments(path: &str) -> String {
    let mut output: Vec<&str> = Vec::new();
    let mut cursor = Cursor::new(path);
    let mut state = Scan::Boundary;

    while let Some(byte) = cursor.advance() {
        let at = cursor.pos() - 1;
        state = match (state, byte) {
            (Scan::Boundary, b'.') => Scan::Dot(at),
            (Scan::Boundary, _) => Scan::Segment(at),
            (Scan::Dot(_), b'/') => Scan::Boundary,
            (Scan::Dot(start), b'.') => Scan::DoubleDot(start),
            (Scan::Dot(start), _) => Scan::Segment(start),
            (Scan::DoubleDot(_), b'/') => {
                output.pop();
                Scan::Boundary
            }
            (Scan::DoubleDot(start), _) => Scan::Segment(start),
            (Scan::Segment(start), b'/') => {
                output.push(&path[start..=at]);
                Scan::Boundary
            }
            (segment @ Scan::Segment(_), _) => segment,
        };
    }

    match state {
        Scan::Boundary | Scan::Dot(_) => {}
        Scan::DoubleDot(_) => {
            output.pop();
        }
        Scan::Segment(start) => output.push(&path[start..]),
    }

    output.concat()
}

#[cfg(test)]
mod tests {
    use super::normalize_segments;

    #[test]
    fn drops_single_dot_segments() {
        assert_eq!(normalize_segments("a/./b/./c.js"), "a/b/c.js");
    }

    #[test]
    fn double_dot_pops_previous_segment() {
        assert_eq!(normalize_segments("a/b/../c"), "a/c");
    }

    #[test]
    fn excess_double_dots_collapse_at_root() {
        assert_eq!(normalize_segments("y/../../../../z"), "z");
    }

    #[test]
    fn trailing_dots_without_slash() {
        assert_eq!(normalize_segments("a/b/.."), "a/");
        assert_eq!(normalize_segments("a/b/."), "a/b/");
    }

    #[test]
    fn dot_prefixed_names_are_ordinary_segments() {
        assert_eq!(normalize_segments("a/.hidden/..b/.../c"), "a/.hidden/..b/.../c");
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(normalize_segments("a//b"), "a//b");
    }
}
