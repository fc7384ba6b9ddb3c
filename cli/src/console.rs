use crate::render;
use quranshare_common::Language;
use quranshare_runtime::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;

#[derive(Debug)]
pub struct Console {}
impl Console {
    fn prompt(
        rl: &mut DefaultEditor,
        runtime: &Runtime,
    ) -> std::result::Result<String, ReadlineError> {
        let prompt_str = format!(
            "\n[{} {} | {}] > ",
            runtime.translate("section_label"),
            runtime.selected_section(),
            runtime.language()
        );
        rl.readline(&prompt_str)
    }

    pub fn start(runtime: &mut Runtime, state_path: &Path) {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                return;
            }
        };

        println!("{}", runtime.translate("app_description"));

        loop {
            match Self::prompt(&mut rl, runtime) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    if !run_command(&line, runtime) {
                        break;
                    }
                    if let Err(err) = runtime.state().save(state_path) {
                        println!("{}", err);
                    }
                }
                Err(ReadlineError::Interrupted) => break,
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    println!("{:?}", err);
                    break;
                }
            }
        }
    }
}

/// Runs one console line. Returns `false` when the session should end.
fn run_command(input: &str, runtime: &mut Runtime) -> bool {
    let mut args = input.trim().splitn(3, ' ');

    let result = match (args.next(), args.next(), args.next()) {
        (Some(""), _, _) => Ok(()),
        (Some("q"), _, _) | (Some("quit"), _, _) => return false,
        (Some("sections"), _, _) => {
            render::print_sections(runtime);
            Ok(())
        }
        (Some("readers"), None, _) => {
            render::print_readers(runtime);
            Ok(())
        }
        (Some("readers"), Some(count), _) => match count.parse::<usize>() {
            Ok(count) => runtime
                .set_reader_count(count)
                .map(|_| render::print_readers(runtime)),
            Err(_) => Err(RuntimeError::invalid_argument(format!(
                "not a reader count: {}",
                count
            ))),
        },
        (Some("name"), Some(id), Some(name)) => match id.parse() {
            Ok(id) => runtime.set_reader_name(id, name.trim()),
            Err(_) => Err(RuntimeError::invalid_argument(format!(
                "not a reader id: {}",
                id
            ))),
        },
        (Some("calculate"), _, _) => runtime
            .calculate()
            .and_then(|_| render::print_table(runtime))
            .map(|_| render::print_share_hint(runtime)),
        (Some("select"), Some(section), _) => match section.parse() {
            Ok(section) => runtime.select_section(section).and_then(|_| {
                if runtime.is_displaying() {
                    render::print_table(runtime)
                } else {
                    Ok(())
                }
            }),
            Err(_) => Err(RuntimeError::invalid_argument(format!(
                "not a section: {}",
                section
            ))),
        },
        (Some("table"), _, _) => render::print_table(runtime),
        (Some("share"), _, _) => runtime.share_text().map(|text| print!("{}", text)),
        (Some("language"), Some(code), _) => match code.parse::<Language>() {
            Ok(language) => {
                runtime.set_language(language);
                render::print_language(runtime);
                Ok(())
            }
            Err(err) => Err(err.into()),
        },
        (Some(command), _, _) => {
            println!("Unknown command: {}", command);
            print_help();
            Ok(())
        }
        (None, _, _) => Ok(()),
    };

    if let Err(err) = result {
        println!("{}", err);
    }

    true
}

fn print_help() {
    println!("Commands:");
    println!("  sections                list sections and their pages");
    println!("  readers [n]             show readers, or set their number (0-20)");
    println!("  name <id> <name>        name a reader");
    println!("  calculate               split every section between the readers");
    println!("  select <section>        choose the section to show");
    println!("  table                   show pages for the selected section");
    println!("  share                   print the text to share");
    println!("  language <ms|en>        switch language (Melayu or English)");
    println!("  q                       quit");
}
