use crate::{Catalog, PageNumber, SectionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ReaderId = u32;

/// Largest reader count offered by the reader selector.
pub const MAX_READERS: usize = 20;

/// Pages one reader covers in one section.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Assignment {
    pub page_count: usize,
    pub pages: Vec<PageNumber>,
}

impl Assignment {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Comma separated page list, `""` when nothing is assigned.
    pub fn page_list(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Reader {
    pub id: ReaderId,
    pub name: String,
    #[serde(default)]
    pub assignments: BTreeMap<SectionId, Assignment>,
}

impl Reader {
    /// A reader with no name and an empty assignment for every section.
    pub fn new(id: ReaderId, catalog: &Catalog) -> Self {
        Self {
            id,
            name: String::new(),
            assignments: catalog.ids().map(|id| (id, Assignment::default())).collect(),
        }
    }

    pub fn with_name<S>(mut self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.name = name.into();
        self
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn assignment(&self, section: SectionId) -> Option<&Assignment> {
        self.assignments.get(&section)
    }

    pub fn clear_assignments(&mut self) {
        for assignment in self.assignments.values_mut() {
            *assignment = Assignment::default();
        }
    }
}

/// Readers `1..=count`, all unnamed.
pub fn initial_readers(count: usize, catalog: &Catalog) -> Vec<Reader> {
    (1..=count as ReaderId)
        .map(|id| Reader::new(id, catalog))
        .collect()
}
