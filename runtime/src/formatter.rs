use crate::{Result, RuntimeError};
use quranshare_common::{I18n, Language, Reader, SectionId};

const SEPARATOR: &str = "******************************************";

/// Share text for `section` using the English labels.
pub fn format_share_text(readers: &[Reader], section: SectionId) -> Result<String> {
    format_share_text_in(readers, section, Language::En, &I18n::default())
}

/// Share text for `section`, one line per reader in list order:
///
/// ```text
/// Today's reading
/// ******************************************
///
/// Section 1
/// Ali - Pages: 1,2,3
/// ```
pub fn format_share_text_in(
    readers: &[Reader],
    section: SectionId,
    language: Language,
    i18n: &I18n,
) -> Result<String> {
    if readers.is_empty() {
        return Err(RuntimeError::SectionNotFound { section });
    }

    let pages_label = i18n.get_translation(language, "pages_label");
    let mut text = format!(
        "{}\n{}\n\n{} {}\n",
        i18n.get_translation(language, "share_title"),
        SEPARATOR,
        i18n.get_translation(language, "section_label"),
        section
    );

    for reader in readers {
        let assignment = reader
            .assignment(section)
            .ok_or(RuntimeError::SectionNotFound { section })?;
        text.push_str(&format!(
            "{} - {}: {}\n",
            reader.name,
            pages_label,
            assignment.page_list()
        ));
    }

    Ok(text)
}
