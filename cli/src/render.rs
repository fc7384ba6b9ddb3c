use colored::Colorize;
use quranshare_runtime::{Result, Runtime};

pub fn print_sections(runtime: &Runtime) {
    let label = runtime.translate("section_label");
    for section in runtime.catalog.sections() {
        println!(
            "{} {:>2}: {}-{} ({})",
            label,
            section.index,
            section.start_page,
            section.end_page,
            section.total_pages()
        );
    }
}

pub fn print_readers(runtime: &Runtime) {
    if runtime.readers().is_empty() {
        println!("{}", runtime.translate("selection_reader_none"));
        return;
    }

    let label = runtime.translate("reader_label_text");
    for reader in runtime.readers() {
        let name = if reader.has_name() {
            reader.name.normal()
        } else {
            format!("<{}>", runtime.translate("reader_placeholder")).dimmed()
        };
        println!("{} {}: {}", label, reader.id, name);
    }
}

pub fn print_table(runtime: &Runtime) -> Result<()> {
    let rows = runtime.table()?;
    let name_header = runtime.translate("name_header");
    let width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .chain(std::iter::once(name_header.chars().count()))
        .max()
        .unwrap_or_default();

    println!(
        "{} {}",
        runtime.translate("juzuk_selector_label"),
        runtime.selected_section()
    );
    println!(
        "{}",
        format!(
            "{:<width$}  {}",
            name_header,
            runtime.translate("page_header"),
            width = width
        )
        .bold()
    );
    for row in rows {
        println!(
            "{:<width$}  {}",
            row.name,
            row.assignment.page_list(),
            width = width
        );
    }

    Ok(())
}

/// Points at `share`, the stand-in for the original copy button.
pub fn print_share_hint(runtime: &Runtime) {
    eprintln!(
        "{}",
        format!("{}: share", runtime.translate("copy_data_button")).dimmed()
    );
}

pub fn print_language(runtime: &Runtime) {
    println!(
        "{}: {}",
        runtime.translate("language_select_text"),
        runtime.translate(runtime.language().label_key())
    );
}
