//! Dotted-segment path tracking, used only to test the object differ's
//! current node against [`crate::options::Options`]'s exclusion set.
//!
//! This is a much smaller cousin of a JSON-pointer path language: no bracket
//! filters, no array indices (arrays never appear in `excludePaths` — the
//! spec's exclusion grammar is plain object-field dotting, e.g.
//! `"nested.id"`), just an immutable, cheaply-extended list of field names.

use std::fmt::Display;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Returns a new path with `segment` appended, leaving `self` untouched.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Path { segments }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn push_returns_a_new_child_path() {
        let root = Path::default();
        let child = root.push("nested").push("id");

        check!(root == Path::default());
        check!(child.to_string() == "nested.id");
    }
}
