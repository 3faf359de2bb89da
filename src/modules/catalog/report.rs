use super::model::Book;
use crate::modules::utils::time::current_time_string;

/// The three outcomes a lookup can report to the operator
///
/// The timestamp on the available variant is captured when the report is
/// built, not when the query ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupReport {
    Available {
        title: String,
        author: String,
        copies: u32,
        checked_at: String,
    },
    Unavailable {
        title: String,
        author: String,
    },
    NotFound,
}

impl LookupReport {
    /// Build the report for a lookup result
    pub fn for_result(result: Option<&Book>) -> Self {
        match result {
            Some(book) => {
                let (copies, available) = book.check_availability();
                if available {
                    LookupReport::Available {
                        title: book.title.clone(),
                        author: book.author.clone(),
                        copies,
                        checked_at: current_time_string(),
                    }
                } else {
                    LookupReport::Unavailable {
                        title: book.title.clone(),
                        author: book.author.clone(),
                    }
                }
            }
            None => LookupReport::NotFound,
        }
    }

    /// Render the user-facing message for this report
    pub fn render(&self) -> String {
        match self {
            LookupReport::Available {
                title,
                author,
                copies,
                checked_at,
            } => format!(
                "The book '{}' by {} is available.\nTotal copies available: {}\nCurrent time: {}",
                title, author, copies, checked_at
            ),
            LookupReport::Unavailable { title, author } => {
                format!("The book '{}' by {} is not available.", title, author)
            }
            LookupReport::NotFound => "Book not found.".to_string(),
        }
    }

    /// Short outcome tag used in the lookup log
    pub fn outcome(&self) -> &'static str {
        match self {
            LookupReport::Available { .. } => "available",
            LookupReport::Unavailable { .. } => "unavailable",
            LookupReport::NotFound => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(copies: u32) -> Book {
        Book {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            isbn: "0000000003".to_string(),
            copies,
            category: "Science Fiction".to_string(),
        }
    }

    #[test]
    fn test_available_report_carries_count_and_timestamp() {
        let book = book(2);
        let report = LookupReport::for_result(Some(&book));

        match &report {
            LookupReport::Available {
                title,
                author,
                copies,
                checked_at,
            } => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "Frank Herbert");
                assert_eq!(*copies, 2);
                assert!(!checked_at.is_empty());
            }
            other => panic!("expected Available, got {:?}", other),
        }

        let message = report.render();
        assert!(message.contains("'Dune' by Frank Herbert is available"));
        assert!(message.contains("Total copies available: 2"));
        assert!(message.contains("Current time:"));
    }

    #[test]
    fn test_unavailable_report_omits_copy_count() {
        let book = book(0);
        let report = LookupReport::for_result(Some(&book));
        assert!(matches!(report, LookupReport::Unavailable { .. }));

        let message = report.render();
        assert_eq!(message, "The book 'Dune' by Frank Herbert is not available.");
        assert!(!message.contains("copies"));
        assert!(!message.contains("Current time"));
    }

    #[test]
    fn test_not_found_report_has_no_detail() {
        let report = LookupReport::for_result(None);
        assert_eq!(report, LookupReport::NotFound);
        assert_eq!(report.render(), "Book not found.");
    }

    #[test]
    fn test_outcome_tags() {
        assert_eq!(LookupReport::for_result(Some(&book(1))).outcome(), "available");
        assert_eq!(
            LookupReport::for_result(Some(&book(0))).outcome(),
            "unavailable"
        );
        assert_eq!(LookupReport::for_result(None).outcome(), "not_found");
    }
}
