//! The copyright notice body, in both comment renderings.
//!
//! The two renderings are kept as separate literals so that each one reads
//! exactly as it must appear in a source file. `body_lines` strips the comment
//! markers so the test suite can check that both carry the same text.

/// Notice rendered with block-comment delimiters (C++ sources and headers).
pub const BLOCK_NOTICE: &str = concat!(
    "/*\n",
    " * This file is part of Lydia.\n",
    " *\n",
    " * Lydia is free software: you can redistribute it and/or modify\n",
    " * it under the terms of the GNU Lesser General Public License as published by\n",
    " * the Free Software Foundation, either version 3 of the License, or\n",
    " * (at your option) any later version.\n",
    " *\n",
    " * Lydia is distributed in the hope that it will be useful,\n",
    " * but WITHOUT ANY WARRANTY; without even the implied warranty of\n",
    " * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the\n",
    " * GNU Lesser General Public License for more details.\n",
    " *\n",
    " * You should have received a copy of the GNU Lesser General Public License\n",
    " * along with Lydia.  If not, see <https://www.gnu.org/licenses/>.\n",
    " */",
);

/// Notice rendered with line-comment markers (Python scripts and CMake files).
pub const LINE_NOTICE: &str = concat!(
    "#\n",
    "# This file is part of Lydia.\n",
    "#\n",
    "# Lydia is free software: you can redistribute it and/or modify\n",
    "# it under the terms of the GNU Lesser General Public License as published by\n",
    "# the Free Software Foundation, either version 3 of the License, or\n",
    "# (at your option) any later version.\n",
    "#\n",
    "# Lydia is distributed in the hope that it will be useful,\n",
    "# but WITHOUT ANY WARRANTY; without even the implied warranty of\n",
    "# MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the\n",
    "# GNU Lesser General Public License for more details.\n",
    "#\n",
    "# You should have received a copy of the GNU Lesser General Public License\n",
    "# along with Lydia.  If not, see <https://www.gnu.org/licenses/>.\n",
    "#",
);

/// Comment delimiter style a notice is wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* ... */` with a ` * ` marker on every inner line.
    Block,
    /// `# ` on every line.
    Line,
}

impl CommentStyle {
    /// The notice rendered in this style.
    #[must_use]
    pub const fn notice(self) -> &'static str {
        match self {
            Self::Block => BLOCK_NOTICE,
            Self::Line => LINE_NOTICE,
        }
    }

    /// Per-line marker for a non-empty line, and the bare marker for an empty one.
    const fn markers(self) -> (&'static str, &'static str) {
        match self {
            Self::Block => (" * ", " *"),
            Self::Line => ("# ", "#"),
        }
    }
}

/// Strip comment markers from a rendered notice and return the bare text lines.
///
/// The opening and closing delimiter lines are dropped. A line that carries
/// neither marker is returned unchanged, so a malformed rendering shows up as a
/// mismatch rather than being silently repaired.
#[must_use]
pub fn body_lines(rendered: &str, style: CommentStyle) -> Vec<&str> {
    let lines: Vec<&str> = rendered.lines().collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let (marker, bare) = style.markers();
    lines[1..lines.len() - 1]
        .iter()
        .map(|line| {
            if *line == bare {
                ""
            } else {
                line.strip_prefix(marker).unwrap_or(line)
            }
        })
        .collect()
}
