use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The five user-editable fields of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    Title,
    Author,
    Genre,
    YearOfPublication,
    Isbn,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Author,
        Field::Genre,
        Field::YearOfPublication,
        Field::Isbn,
    ];

    /// Column header / input placeholder
    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Book Title",
            Field::Author => "Author",
            Field::Genre => "Genre",
            Field::YearOfPublication => "Year of Publishing",
            Field::Isbn => "ISBN",
        }
    }

    /// Name used by the script runner
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Genre => "genre",
            Field::YearOfPublication => "year",
            Field::Isbn => "isbn",
        }
    }

    /// Next field in form order, wrapping around
    pub fn next(&self) -> Field {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    /// Previous field in form order, wrapping around
    pub fn prev(&self) -> Field {
        Field::ALL[(self.index() + Field::ALL.len() - 1) % Field::ALL.len()]
    }

    /// Position in form order
    pub fn index(&self) -> usize {
        match self {
            Field::Title => 0,
            Field::Author => 1,
            Field::Genre => 2,
            Field::YearOfPublication => 3,
            Field::Isbn => 4,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" | "booktitle" => Ok(Field::Title),
            "author" => Ok(Field::Author),
            "genre" => Ok(Field::Genre),
            "year" | "yop" | "year-of-publication" => Ok(Field::YearOfPublication),
            "isbn" => Ok(Field::Isbn),
            other => Err(format!(
                "unknown field '{}' (expected title, author, genre, year or isbn)",
                other
            )),
        }
    }
}

/// Uncommitted field values backing the add and edit forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year_of_publication: String,
    pub isbn: String,
}

impl Draft {
    /// Read a field by key
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Genre => &self.genre,
            Field::YearOfPublication => &self.year_of_publication,
            Field::Isbn => &self.isbn,
        }
    }

    /// Replace a field by key
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Genre => &mut self.genre,
            Field::YearOfPublication => &mut self.year_of_publication,
            Field::Isbn => &mut self.isbn,
        };
        *slot = value.into();
    }

    /// True when every field has non-whitespace content
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Fields that are empty once trimmed
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }
}

/// A committed catalog entry
///
/// `sequence_number` is owned by [`CatalogStore`](super::CatalogStore) and
/// always equals the record's 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    sequence_number: u32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year_of_publication: String,
    pub isbn: String,
}

impl BookRecord {
    pub(crate) fn from_draft(sequence_number: u32, draft: &Draft) -> Self {
        Self {
            sequence_number,
            title: draft.title.clone(),
            author: draft.author.clone(),
            genre: draft.genre.clone(),
            year_of_publication: draft.year_of_publication.clone(),
            isbn: draft.isbn.clone(),
        }
    }

    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    pub(crate) fn renumber(&mut self, sequence_number: u32) {
        self.sequence_number = sequence_number;
    }

    /// Read a field by key
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Genre => &self.genre,
            Field::YearOfPublication => &self.year_of_publication,
            Field::Isbn => &self.isbn,
        }
    }

    /// Copy the textual fields out into an editable draft
    pub fn to_draft(&self) -> Draft {
        Draft {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            year_of_publication: self.year_of_publication.clone(),
            isbn: self.isbn.clone(),
        }
    }
}
