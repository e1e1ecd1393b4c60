//! Keyword-derived category tags for events and sermons.
//!
//! Categories are never stored. They are recomputed from free text with a
//! fixed, ordered rule table where every matching rule contributes its tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A category tag derived from an event or sermon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Sunday,
    Wednesday,
    BibleStudy,
    Prayer,
    Youth,
    Fellowship,
    Outreach,
    /// Fallback when no keyword matched.
    Special,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Sunday,
        Category::Wednesday,
        Category::BibleStudy,
        Category::Prayer,
        Category::Youth,
        Category::Fellowship,
        Category::Outreach,
        Category::Special,
    ];

    /// Returns the kebab-case tag for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sunday => "sunday",
            Category::Wednesday => "wednesday",
            Category::BibleStudy => "bible-study",
            Category::Prayer => "prayer",
            Category::Youth => "youth",
            Category::Fellowship => "fellowship",
            Category::Outreach => "outreach",
            Category::Special => "special",
        }
    }

    /// Returns the human-readable label for filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sunday => "Sunday Services",
            Category::Wednesday => "Wednesday",
            Category::BibleStudy => "Bible Study",
            Category::Prayer => "Prayer",
            Category::Youth => "Youth",
            Category::Fellowship => "Fellowship",
            Category::Outreach => "Outreach",
            Category::Special => "Special Events",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The active category selection: everything, or a single tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if an item carrying `categories` passes this filter.
    pub fn accepts(&self, categories: &Categories) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => categories.contains(*category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

/// Ordered, duplicate-free set of category tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories(Vec<Category>);

impl Categories {
    /// Adds a tag unless it is already present.
    pub fn insert(&mut self, category: Category) {
        if !self.0.contains(&category) {
            self.0.push(category);
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Keyword rules, evaluated in order. All matching rules fire, but text
/// matched by one rule is consumed and cannot trigger a later rule.
const RULES: &[(&str, &[Category])] = &[
    ("sunday", &[Category::Sunday]),
    ("worship", &[Category::Sunday]),
    ("wednesday", &[Category::Wednesday]),
    (
        "prayer & bible study",
        &[Category::Wednesday, Category::BibleStudy],
    ),
    ("bible study", &[Category::BibleStudy]),
    ("prayer", &[Category::Prayer]),
    ("youth", &[Category::Youth]),
    ("fellowship", &[Category::Fellowship]),
    ("potluck", &[Category::Fellowship]),
    ("outreach", &[Category::Outreach]),
    ("mission", &[Category::Outreach]),
];

/// Derives the category tags for a free-text name.
///
/// Falls back to `{special}` when no rule matches.
pub fn classify(name: &str) -> Categories {
    let mut haystack = name.to_lowercase();
    let mut categories = Categories::default();

    for (keyword, tags) in RULES {
        if haystack.contains(keyword) {
            for tag in *tags {
                categories.insert(*tag);
            }
            haystack = haystack.replace(keyword, "\n");
        }
    }

    if categories.is_empty() {
        categories.insert(Category::Special);
    }
    categories
}
