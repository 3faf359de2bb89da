use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structure representing a single book in the catalog
///
/// All fields are fixed at startup; nothing mutates a book after the catalog
/// is built. The isbn is an opaque label only, never used for lookup, and the
/// builtin dataset reuses the same isbn across several entries.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies: u32,
    pub category: String, // Free text, matched case-insensitively
}

impl Book {
    /// Method to check availability of the book
    pub fn check_availability(&self) -> (u32, bool) {
        (self.copies, self.copies > 0)
    }
}

/// The fixed set of categories offered by the interactive query form
///
/// Book records keep category as free text; this enum only drives the
/// category picker in the user interface.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Fiction,
    Novel,
    ScienceFiction,
    Biography,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 4] = [
        Category::Fiction,
        Category::Novel,
        Category::ScienceFiction,
        Category::Biography,
    ];

    /// Canonical label as it appears in the catalog data
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::Novel => "Novel",
            Category::ScienceFiction => "Science Fiction",
            Category::Biography => "Biography",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fiction" => Ok(Category::Fiction),
            "novel" => Ok(Category::Novel),
            "science fiction" => Ok(Category::ScienceFiction),
            "biography" => Ok(Category::Biography),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}
