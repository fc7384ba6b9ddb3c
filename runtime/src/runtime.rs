use crate::{assign_all, format_share_text_in, Result, RuntimeError};
use quranshare_common::*;
use tracing::info;

/// One row of the assignment table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: ReaderId,
    pub name: String,
    pub assignment: Assignment,
}

/// Session over an [`AppState`]. Front ends load the state, drive it through
/// these operations and save it back.
pub struct Runtime {
    pub catalog: Catalog,
    pub i18n: I18n,
    state: AppState,
}

impl Runtime {
    pub fn new(mut state: AppState) -> Self {
        state.readers.sort_by_key(|reader| reader.id);
        Self {
            catalog: Catalog::new(),
            i18n: I18n::default(),
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn readers(&self) -> &[Reader] {
        &self.state.readers
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn selected_section(&self) -> SectionId {
        self.state.selected_section
    }

    pub fn is_displaying(&self) -> bool {
        self.state.display_data
    }

    pub fn translate(&self, key: &str) -> String {
        self.i18n.get_translation(self.state.language, key)
    }

    pub fn set_language(&mut self, language: Language) {
        self.state.language = language;
    }

    /// Rebuilds the reader list with `count` readers. Readers whose id
    /// survives keep their name; all page assignments are cleared.
    pub fn set_reader_count(&mut self, count: usize) -> Result<()> {
        if count > MAX_READERS {
            return Err(RuntimeError::invalid_argument(format!(
                "reader count must be between 0 and {}, got {}",
                MAX_READERS, count
            )));
        }

        let mut readers = initial_readers(count, &self.catalog);
        for reader in readers.iter_mut() {
            if let Some(existing) = self.find_reader(reader.id) {
                reader.name = existing.name.clone();
            }
        }

        info!(count, "reader count changed");
        self.state.readers = readers;
        self.state.display_data = false;
        Ok(())
    }

    pub fn set_reader_name<S>(&mut self, id: ReaderId, name: S) -> Result<()>
    where
        S: Into<String>,
    {
        let index = self
            .reader_index(id)
            .ok_or(RuntimeError::ReaderNotFound { id })?;
        self.state.readers[index].name = name.into();
        Ok(())
    }

    /// Readers are kept sorted by id, so lookups are a binary search.
    fn reader_index(&self, id: ReaderId) -> Option<usize> {
        self.state
            .readers
            .binary_search_by_key(&id, |reader| reader.id)
            .ok()
    }

    fn find_reader(&self, id: ReaderId) -> Option<&Reader> {
        self.reader_index(id).map(|index| &self.state.readers[index])
    }

    /// Calculation is offered once there is at least one reader and every
    /// reader has been named.
    pub fn can_calculate(&self) -> bool {
        !self.state.readers.is_empty() && self.state.readers.iter().all(Reader::has_name)
    }

    pub fn calculate(&mut self) -> Result<()> {
        if let Some(unnamed) = self.state.readers.iter().find(|r| !r.has_name()) {
            return Err(RuntimeError::invalid_argument(format!(
                "reader {} has no name",
                unnamed.id
            )));
        }

        let readers = assign_all(self.state.readers.clone(), self.catalog.sections())?;
        info!(readers = readers.len(), "pages calculated");
        self.state.readers = readers;
        self.state.display_data = true;
        Ok(())
    }

    pub fn select_section(&mut self, section: SectionId) -> Result<()> {
        if !self.catalog.contains(section) {
            return Err(RuntimeError::SectionNotFound { section });
        }
        self.state.selected_section = section;
        Ok(())
    }

    fn ensure_calculated(&self) -> Result<()> {
        if self.state.display_data {
            Ok(())
        } else {
            Err(RuntimeError::invalid_argument("pages have not been calculated"))
        }
    }

    /// Name and pages of every reader for the selected section.
    pub fn table(&self) -> Result<Vec<TableRow>> {
        self.ensure_calculated()?;
        let section = self.state.selected_section;
        self.state
            .readers
            .iter()
            .map(|reader| {
                let assignment = reader
                    .assignment(section)
                    .ok_or(RuntimeError::SectionNotFound { section })?;
                Ok(TableRow {
                    id: reader.id,
                    name: reader.name.clone(),
                    assignment: assignment.clone(),
                })
            })
            .collect()
    }

    pub fn share_text(&self) -> Result<String> {
        self.ensure_calculated()?;
        format_share_text_in(
            &self.state.readers,
            self.state.selected_section,
            self.state.language,
            &self.i18n,
        )
    }
}
