//! Module-kind categories and the classifier mapping events onto them

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

/// A named bucket of file changes.
///
/// Declaration order is the order in which categories are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Assign,
    Calendar,
    Folder,
    Forum,
    Resource,
    Quiz,
    Misc,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Assign,
        Category::Calendar,
        Category::Folder,
        Category::Forum,
        Category::Resource,
        Category::Quiz,
        Category::Misc,
    ];

    /// Categories recognized when the caller supplies none
    pub fn defaults() -> Vec<Category> {
        vec![
            Category::Assign,
            Category::Calendar,
            Category::Folder,
            Category::Forum,
            Category::Resource,
            Category::Quiz,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Assign => "assign",
            Category::Calendar => "calendar",
            Category::Folder => "folder",
            Category::Forum => "forum",
            Category::Resource => "resource",
            Category::Quiz => "quiz",
            Category::Misc => "misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                NotifyError::ContractViolation(format!("no render rule for category '{}'", s))
            })
    }
}

impl TryFrom<String> for Category {
    type Error = NotifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// Maps `module_modname` values onto categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryClassifier {
    recognized: Vec<Category>,
}

impl CategoryClassifier {
    /// Build a classifier for the given categories; `Misc` is always appended
    pub fn new(recognized: &[Category]) -> Self {
        let mut categories = Vec::with_capacity(recognized.len() + 1);
        for category in recognized {
            if !categories.contains(category) {
                categories.push(*category);
            }
        }
        if !categories.contains(&Category::Misc) {
            categories.push(Category::Misc);
        }

        Self { recognized: categories }
    }

    /// Recognized categories, catch-all included
    pub fn categories(&self) -> &[Category] {
        &self.recognized
    }

    /// Exact, case-sensitive match on the module name, otherwise `Misc`
    pub fn classify(&self, module_modname: &str) -> Category {
        self.recognized
            .iter()
            .copied()
            .find(|category| category.as_str() == module_modname)
            .unwrap_or(Category::Misc)
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new(&Category::defaults())
    }
}
