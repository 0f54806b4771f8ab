use std::path::Path;

use thaigen_generate::GenerateOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
}

/// Read generation options from a TOML file. Keys that are absent keep their
/// defaults; without a file every option is defaulted.
///
/// Relative reference paths in the file resolve against the file's directory.
pub fn load_options(path: Option<&Path>) -> Result<GenerateOptions, SettingsError> {
    let Some(path) = path else {
        return Ok(GenerateOptions::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let mut options = parse_options(&content)?;
    if let Some(root) = path.parent() {
        options.references = options.references.rooted_at(root);
    }
    Ok(options)
}

pub fn parse_options(content: &str) -> Result<GenerateOptions, SettingsError> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let options = parse_options("").expect("parse");
        assert_eq!(options.n_sentences, 500);
        assert_eq!(options.p_pronoun, 0.0);
        assert!(options.seed.is_none());
        assert_eq!(options.phone_phrases.len(), 4);
    }

    #[test]
    fn overrides_nested_reference_paths() {
        let options = parse_options(
            r#"
seed = 7
p_pronoun = 0.25
address_phrases = ["อยู่ที่"]

[references]
address_database_path = "fixtures/address.csv"
"#,
        )
        .expect("parse");
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.p_pronoun, 0.25);
        assert_eq!(options.address_phrases, vec!["อยู่ที่".to_string()]);
        assert_eq!(
            options.references.address_database_path,
            PathBuf::from("fixtures/address.csv")
        );
        assert_eq!(
            options.references.firstname_phoneme_path,
            PathBuf::from(thaigen_core::DEFAULT_FIRSTNAME_PHONEME_PATH)
        );
    }

    #[test]
    fn relative_paths_follow_the_settings_file() {
        let dir = std::env::temp_dir().join(format!("thaigen_settings_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create dir");
        let settings = dir.join("thaigen.toml");
        std::fs::write(
            &settings,
            "[references]\naddress_database_path = \"fixtures/address.csv\"\nlastname_phoneme_path = \"/srv/last.txt\"\n",
        )
        .expect("write settings");

        let options = load_options(Some(&settings)).expect("load");
        assert_eq!(
            options.references.address_database_path,
            dir.join("fixtures/address.csv")
        );
        assert_eq!(
            options.references.lastname_phoneme_path,
            PathBuf::from("/srv/last.txt")
        );
        assert_eq!(
            options.references.firstname_phoneme_path,
            dir.join(thaigen_core::DEFAULT_FIRSTNAME_PHONEME_PATH)
        );
    }

    #[test]
    fn no_settings_file_keeps_working_directory_paths() {
        let options = load_options(None).expect("defaults");
        assert_eq!(
            options.references.address_database_path,
            PathBuf::from(thaigen_core::DEFAULT_ADDRESS_DATABASE_PATH)
        );
    }

    #[test]
    fn rejects_wrong_types() {
        let result = parse_options("n_sentences = \"many\"");
        assert!(matches!(result, Err(SettingsError::TomlDecode(_))));
    }
}
