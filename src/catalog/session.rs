//! Page-level editing state: the store plus the add and edit drafts

use tracing::debug;

use super::record::{BookRecord, Draft, Field};
use super::store::{CatalogStore, SubmitGuard};

/// One editing session over a catalog
///
/// Holds the new-book draft behind the add form and the scratch copy used
/// while a row is being edited. Both drafts are independent of the records
/// they were copied from until saved.
#[derive(Debug, Default)]
pub struct Session {
    store: CatalogStore,
    new_draft: Draft,
    edit_draft: Draft,
}

impl Session {
    pub fn new(guard: SubmitGuard) -> Self {
        Self {
            store: CatalogStore::with_guard(guard),
            ..Self::default()
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn new_draft(&self) -> &Draft {
        &self.new_draft
    }

    pub fn edit_draft(&self) -> &Draft {
        &self.edit_draft
    }

    /// Change one field of the add form
    pub fn input_new(&mut self, field: Field, value: impl Into<String>) {
        self.new_draft.set(field, value);
    }

    /// Change one field of the row being edited
    pub fn input_edit(&mut self, field: Field, value: impl Into<String>) {
        self.edit_draft.set(field, value);
    }

    pub fn add_disabled(&self) -> bool {
        !self.store.can_submit(&self.new_draft)
    }

    pub fn save_disabled(&self) -> bool {
        !self.store.can_submit(&self.edit_draft)
    }

    /// Press "Add Book"; the form is cleared only if the record was added
    pub fn add(&mut self) -> Option<u32> {
        let sequence_number = self.store.append(&self.new_draft)?;
        self.new_draft = Draft::default();
        Some(sequence_number)
    }

    /// Press "Edit" on a row
    pub fn edit(&mut self, index: usize) -> bool {
        match self.store.begin_edit(index) {
            Some(draft) => {
                self.edit_draft = draft;
                true
            }
            None => false,
        }
    }

    /// Press "Save" on the row being edited
    pub fn save(&mut self) -> bool {
        let Some(index) = self.store.editing() else {
            debug!("save pressed with no active edit");
            return false;
        };
        self.store.commit_edit(index, &self.edit_draft)
    }

    /// Press "Cancel" on the row being edited
    pub fn cancel(&mut self) {
        self.store.cancel_edit();
    }

    /// Press "Delete" on a row
    pub fn delete(&mut self, index: usize) -> Option<BookRecord> {
        self.store.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(session: &mut Session, title: &str) {
        session.input_new(Field::Title, title);
        session.input_new(Field::Author, "X");
        session.input_new(Field::Genre, "G");
        session.input_new(Field::YearOfPublication, "2020");
        session.input_new(Field::Isbn, "111");
    }

    #[test]
    fn test_add_clears_form_on_success() {
        let mut session = Session::new(SubmitGuard::Enforce);
        fill(&mut session, "A");
        assert!(!session.add_disabled());

        assert_eq!(session.add(), Some(1));
        assert_eq!(session.new_draft(), &Draft::default());
        assert!(session.add_disabled());
    }

    #[test]
    fn test_rejected_add_keeps_form() {
        let mut session = Session::new(SubmitGuard::Enforce);
        fill(&mut session, "A");
        session.input_new(Field::Author, "");

        assert!(session.add_disabled());
        assert_eq!(session.add(), None);
        assert_eq!(session.new_draft().title, "A");
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_edit_save_roundtrip() {
        let mut session = Session::new(SubmitGuard::Enforce);
        fill(&mut session, "A");
        session.add();

        assert!(session.edit(0));
        assert_eq!(session.edit_draft().title, "A");
        session.input_edit(Field::Title, "A revised");
        assert!(session.save());

        assert_eq!(session.store().get(0).unwrap().title, "A revised");
        assert_eq!(session.store().editing(), None);
    }

    #[test]
    fn test_save_without_edit_is_noop() {
        let mut session = Session::new(SubmitGuard::Enforce);
        assert!(!session.save());
    }

    #[test]
    fn test_unguarded_session_accepts_blank_form() {
        let mut session = Session::new(SubmitGuard::Off);
        assert!(!session.add_disabled());
        assert_eq!(session.add(), Some(1));
        assert_eq!(session.add(), Some(2));
    }
}
