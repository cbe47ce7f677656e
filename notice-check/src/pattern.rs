//! Header patterns, one per governed category.
//!
//! Patterns are composed from the literal notice renderings plus a handful of
//! directive lines. Every literal goes through `regex::escape`, so the only
//! regex syntax in a pattern is the `\A` anchor and the optional preamble group.

use std::sync::LazyLock;

use regex::Regex;

use crate::category::Category;
use crate::notice::CommentStyle;

/// Interpreter selector that may open a script.
pub const SCRIPT_INTERPRETER_LINE: &str = "#!/usr/bin/env python3";

/// Encoding declaration that follows the interpreter selector.
pub const SCRIPT_ENCODING_LINE: &str = "# -*- coding: utf-8 -*-";

/// Include-once directive that must open every header.
pub const INCLUDE_ONCE_LINE: &str = "#pragma once";

/// An anchored, compiled header pattern.
#[derive(Debug)]
pub struct HeaderPattern {
    category: Category,
    regex: Regex,
}

static COMPILED_SOURCE_PATTERN: LazyLock<HeaderPattern> =
    LazyLock::new(|| HeaderPattern::build(Category::CompiledSource));
static HEADER_PATTERN: LazyLock<HeaderPattern> =
    LazyLock::new(|| HeaderPattern::build(Category::Header));
static SCRIPT_PATTERN: LazyLock<HeaderPattern> =
    LazyLock::new(|| HeaderPattern::build(Category::Script));
static BUILD_CONFIG_PATTERN: LazyLock<HeaderPattern> =
    LazyLock::new(|| HeaderPattern::build(Category::BuildConfig));

impl HeaderPattern {
    /// The pattern files of `category` must match, or `None` for `Other`.
    #[must_use]
    pub fn for_category(category: Category) -> Option<&'static Self> {
        match category {
            Category::CompiledSource => Some(&*COMPILED_SOURCE_PATTERN),
            Category::Header => Some(&*HEADER_PATTERN),
            Category::Script => Some(&*SCRIPT_PATTERN),
            Category::BuildConfig => Some(&*BUILD_CONFIG_PATTERN),
            Category::Other => None,
        }
    }

    fn build(category: Category) -> Self {
        let source = pattern_source(category);
        match Regex::new(&source) {
            Ok(regex) => Self { category, regex },
            Err(err) => panic!("Invalid header pattern for {category}: {err}"),
        }
    }

    /// The category this pattern belongs to.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Whether `content` starts with this header.
    ///
    /// Only the prefix is checked; anything after the header is irrelevant.
    /// No whitespace normalisation is applied.
    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }

    /// The exact text a conforming file starts with.
    ///
    /// `with_preamble` only has an effect for scripts, where it prepends the
    /// interpreter and encoding lines.
    #[must_use]
    pub fn expected_text(&self, with_preamble: bool) -> String {
        expected_text(self.category, with_preamble)
    }
}

fn comment_style(category: Category) -> Option<CommentStyle> {
    match category {
        Category::CompiledSource | Category::Header => Some(CommentStyle::Block),
        Category::Script | Category::BuildConfig => Some(CommentStyle::Line),
        Category::Other => None,
    }
}

fn pattern_source(category: Category) -> String {
    let notice = comment_style(category)
        .map(|style| regex::escape(style.notice()))
        .unwrap_or_default();

    match category {
        Category::Header => format!(r"\A{}\n{notice}", regex::escape(INCLUDE_ONCE_LINE)),
        Category::Script => format!(
            r"\A(?:{}\n{}\n)?{notice}",
            regex::escape(SCRIPT_INTERPRETER_LINE),
            regex::escape(SCRIPT_ENCODING_LINE)
        ),
        Category::CompiledSource | Category::BuildConfig | Category::Other => {
            format!(r"\A{notice}")
        }
    }
}

fn expected_text(category: Category, with_preamble: bool) -> String {
    let notice = comment_style(category).map_or("", CommentStyle::notice);
    match category {
        Category::Header => format!("{INCLUDE_ONCE_LINE}\n{notice}"),
        Category::Script if with_preamble => {
            format!("{SCRIPT_INTERPRETER_LINE}\n{SCRIPT_ENCODING_LINE}\n{notice}")
        }
        _ => notice.to_owned(),
    }
}
