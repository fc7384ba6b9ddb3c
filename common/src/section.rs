use core::fmt;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub type SectionId = u32;
pub type PageNumber = u32;

/// Number of sections the text is divided into.
pub const SECTION_COUNT: SectionId = 30;
/// Last page of the text. Pages are numbered from 1.
pub const LAST_PAGE: PageNumber = 604;

const FIRST_SECTION_END: PageNumber = 21;
const LAST_SECTION_START: PageNumber = 582;
const REGULAR_SECTION_LENGTH: PageNumber = 20;

#[derive(Debug, Default, Serialize, Deserialize, Eq, PartialEq, Clone, Hash)]
pub struct Section {
    pub index: SectionId,
    pub start_page: PageNumber,
    pub end_page: PageNumber,
    pub pages: Vec<PageNumber>,
}

impl Section {
    fn from_range(index: SectionId, range: RangeInclusive<PageNumber>) -> Self {
        Self {
            index,
            start_page: *range.start(),
            end_page: *range.end(),
            pages: range.collect(),
        }
    }

    pub fn total_pages(&self) -> usize {
        (self.end_page - self.start_page + 1) as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.index, self.start_page, self.end_page)
    }
}

/// Builds the fixed table of sections, ordered by index.
///
/// The first and last sections are longer than the rest (21 and 23 pages),
/// every other section covers exactly 20 pages.
pub fn compute_sections() -> Vec<Section> {
    (1..=SECTION_COUNT)
        .map(|index| match index {
            1 => Section::from_range(index, 1..=FIRST_SECTION_END),
            SECTION_COUNT => Section::from_range(index, LAST_SECTION_START..=LAST_PAGE),
            _ => {
                let start = FIRST_SECTION_END + 1 + REGULAR_SECTION_LENGTH * (index - 2);
                Section::from_range(index, start..=start + REGULAR_SECTION_LENGTH - 1)
            }
        })
        .collect()
}

/// Keyed view over the section table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            sections: compute_sections(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections are stored in index order starting at 1, so the lookup is
    /// a direct offset rather than a scan.
    pub fn section(&self, index: SectionId) -> Option<&Section> {
        let offset = index.checked_sub(1)? as usize;
        self.sections.get(offset).filter(|s| s.index == index)
    }

    pub fn contains(&self, index: SectionId) -> bool {
        self.section(index).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().map(|s| s.index)
    }
}
