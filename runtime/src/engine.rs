use crate::{Result, RuntimeError};
use quranshare_common::{Assignment, Reader, Section};
use tracing::debug;

/// Page counts for `readers` readers sharing `total_pages` pages.
///
/// Every reader gets `total_pages / readers`, and the first
/// `total_pages % readers` readers get one extra page.
pub fn page_counts(total_pages: usize, readers: usize) -> Result<Vec<usize>> {
    if readers == 0 {
        return Err(RuntimeError::invalid_argument(
            "cannot split pages between zero readers",
        ));
    }

    let base = total_pages / readers;
    let remainder = total_pages - base * readers;
    assert!(remainder < readers, "remainder must be smaller than the reader count");

    let mut counts = vec![base; readers];
    for count in counts.iter_mut().take(remainder) {
        *count += 1;
    }

    Ok(counts)
}

/// Splits `section` between `readers` and records each reader's share.
///
/// Readers are visited by id, each one taking the next contiguous run of
/// pages. Names and other sections are left as they were.
pub fn assign(mut readers: Vec<Reader>, section: &Section) -> Result<Vec<Reader>> {
    let counts = page_counts(section.total_pages(), readers.len())?;
    readers.sort_by_key(|reader| reader.id);

    let mut offset = 0;
    for (reader, count) in readers.iter_mut().zip(counts) {
        let pages = section
            .pages
            .get(offset..offset + count)
            .ok_or_else(|| {
                RuntimeError::invalid_argument(format!(
                    "section {} lists fewer pages than its range",
                    section.index
                ))
            })?
            .to_vec();
        offset += count;

        debug!(
            section = section.index,
            reader = reader.id,
            page_count = count,
            "assigned pages"
        );

        reader.assignments.insert(
            section.index,
            Assignment {
                page_count: count,
                pages,
            },
        );
    }

    Ok(readers)
}

/// Runs [`assign`] for every section in order.
pub fn assign_all(readers: Vec<Reader>, sections: &[Section]) -> Result<Vec<Reader>> {
    sections
        .iter()
        .try_fold(readers, |readers, section| assign(readers, section))
}
