use crate::{Error, Language, Reader, Result, SectionId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the front end keeps between sessions.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct AppState {
    #[serde(default = "default_section")]
    pub selected_section: SectionId,
    #[serde(default)]
    pub readers: Vec<Reader>,
    #[serde(default)]
    pub display_data: bool,
    #[serde(default)]
    pub language: Language,
}

fn default_section() -> SectionId {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selected_section: default_section(),
            readers: Vec::new(),
            display_data: false,
            language: Language::default(),
        }
    }
}

impl AppState {
    pub fn with_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Reads the state file. A file that does not exist yet loads as the
    /// default state.
    pub fn load<P>(path: P) -> Result<AppState>
    where
        P: AsRef<Path>,
    {
        Self::load_or(path, AppState::default())
    }

    /// Reads the state file, returning `fresh` only when the file does not
    /// exist.
    pub fn load_or<P>(path: P, fresh: AppState) -> Result<AppState>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(fresh),
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| Error::State {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self).map_err(|source| Error::State {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, contents).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Assignment, Catalog};

    #[test]
    fn missing_file_loads_default_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::load(dir.path().join("state.json")).unwrap();
        assert_eq!(state, AppState::default());
        assert_eq!(state.selected_section, 1);
        assert_eq!(state.language, Language::Ms);
        assert!(!state.display_data);
    }

    #[test]
    fn saved_state_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let catalog = Catalog::new();
        let mut reader = Reader::new(1, &catalog).with_name("Ali");
        reader.assignments.insert(
            2,
            Assignment {
                page_count: 2,
                pages: vec![22, 23],
            },
        );
        let state = AppState {
            selected_section: 2,
            readers: vec![reader],
            display_data: true,
            language: Language::En,
        };

        state.save(&path).unwrap();
        assert_eq!(AppState::load(&path).unwrap(), state);
    }

    #[test]
    fn partial_state_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{ "language": "en" }"#).unwrap();
        let state = AppState::load(&path).unwrap();
        assert_eq!(state, AppState::with_language(Language::En));
    }

    #[test]
    fn load_or_keeps_a_saved_default_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(
            &path,
            r#"{"selected_section":1,"readers":[],"display_data":false,"language":"ms"}"#,
        )
        .unwrap();

        let state = AppState::load_or(&path, AppState::with_language(Language::En)).unwrap();
        assert_eq!(state.language, Language::Ms);

        let missing = dir.path().join("other.json");
        let fresh = AppState::load_or(missing, AppState::with_language(Language::En)).unwrap();
        assert_eq!(fresh.language, Language::En);
    }

    #[test]
    fn corrupt_state_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(AppState::load(&path), Err(Error::State { .. })));
    }
}
