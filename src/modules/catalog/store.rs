use log::info;

use super::model::Book;

// The fixed dataset, embedded at compile time and parsed once at startup.
// Kept verbatim from the source inventory: duplicate isbns, the "B"/"A"
// placeholder row, and the leading spaces in two author fields included.
const BUILTIN_BOOKS: &str = r#"[
    {"title": "The Night Circus", "author": "Erin Morgenstern", "isbn": "0000000001", "copies": 3, "category": "Fiction"},
    {"title": "B", "author": "A", "isbn": "0000000001", "copies": 3, "category": "Fiction"},
    {"title": "To Kill a Mockingbird", "author": "Harper Lee", "isbn": "0000000002", "copies": 5, "category": "Novel"},
    {"title": "Dune", "author": "Frank Herbert", "isbn": "0000000003", "copies": 2, "category": "Science Fiction"},
    {"title": "Steve Jobs", "author": " Walter Isaacson", "isbn": "0000000004", "copies": 0, "category": "Biography"},
    {"title": "The Shadow of the Wind", "author": "Carlos Ruiz Zafón", "isbn": "0000000001", "copies": 3, "category": "Fiction"},
    {"title": "1984", "author": "George Orwell", "isbn": "0000000002", "copies": 5, "category": "Novel"},
    {"title": "Neuromancer", "author": " William Gibson", "isbn": "0000000003", "copies": 2, "category": "Science Fiction"},
    {"title": "The Diary of a Young Girl", "author": "Anne Frank", "isbn": "0000000004", "copies": 0, "category": "Biography"}
]"#;

/// The read-only book catalog
///
/// Built once at startup and handed to the query session by reference. There
/// is no way to add, remove, or edit entries after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog from an explicit list of books, preserving order
    pub fn new(books: Vec<Book>) -> Self {
        Catalog { books }
    }

    /// Build a catalog from a JSON array of books
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        let books: Vec<Book> = serde_json::from_str(data)?;
        info!("Catalog loaded with {} entries", books.len());
        Ok(Catalog::new(books))
    }

    /// Build the builtin nine-entry catalog
    ///
    /// The embedded dataset is a compile-time constant whose parse is
    /// covered by a test, so this constructor stays infallible.
    pub fn builtin() -> Self {
        Catalog::from_json(BUILTIN_BOOKS).expect("builtin catalog data is well-formed")
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Function to look up a book by title, author, and category
    ///
    /// All three inputs and the corresponding fields of every entry are
    /// lowercased before comparison; stored values are not trimmed. When
    /// several entries match, the one declared first wins, which keeps
    /// results deterministic even though the dataset carries duplicates.
    pub fn find_entry(&self, title: &str, author: &str, category: &str) -> Option<&Book> {
        let title = title.to_lowercase();
        let author = author.to_lowercase();
        let category = category.to_lowercase();

        self.books.iter().find(|book| {
            book.title.to_lowercase() == title
                && book.author.to_lowercase() == author
                && book.category.to_lowercase() == category
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str, isbn: &str, copies: u32, category: &str) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            copies,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_builtin_dataset_parses() {
        // Keeps Catalog::builtin's infallible construction honest
        let catalog = Catalog::from_json(BUILTIN_BOOKS);
        assert!(catalog.is_ok());
        assert_eq!(catalog.unwrap().len(), 9);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        assert!(Catalog::from_json("not json").is_err());
        assert!(Catalog::from_json(r#"[{"title": "x"}]"#).is_err());
    }

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);

        // Spot-check one entry survived the embedded data intact
        let dune = catalog
            .find_entry("Dune", "Frank Herbert", "Science Fiction")
            .unwrap();
        assert_eq!(dune.isbn, "0000000003");
        assert_eq!(dune.copies, 2);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let found = catalog.find_entry("dune", "FRANK HERBERT", "science fiction");
        assert!(found.is_some());
        assert_eq!(found.unwrap().title, "Dune");
    }

    #[test]
    fn test_all_three_fields_must_match() {
        let catalog = Catalog::builtin();
        // Title and author exist, but under Science Fiction, not Biography
        assert!(catalog
            .find_entry("Dune", "Frank Herbert", "Biography")
            .is_none());
        assert!(catalog
            .find_entry("Dune", "Harper Lee", "Science Fiction")
            .is_none());
        assert!(catalog
            .find_entry("No Such Book", "Nobody", "Fiction")
            .is_none());
    }

    #[test]
    fn test_stored_fields_are_not_trimmed() {
        let catalog = Catalog::builtin();
        // The source data carries a leading space in this author field, and
        // lookup compares it as-is
        assert!(catalog
            .find_entry("Steve Jobs", "Walter Isaacson", "Biography")
            .is_none());
        assert!(catalog
            .find_entry("Steve Jobs", " walter isaacson", "Biography")
            .is_some());
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let catalog = Catalog::new(vec![
            book("Twin", "Same Author", "1111111111", 4, "Fiction"),
            book("Twin", "Same Author", "2222222222", 0, "Fiction"),
        ]);

        let found = catalog.find_entry("twin", "same author", "fiction").unwrap();
        assert_eq!(found.isbn, "1111111111");

        // Repeated calls keep returning the same entry
        for _ in 0..3 {
            let again = catalog.find_entry("twin", "same author", "fiction").unwrap();
            assert_eq!(again.isbn, "1111111111");
        }
    }

    #[test]
    fn test_lookup_on_empty_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.find_entry("Dune", "Frank Herbert", "Fiction").is_none());
    }
}
