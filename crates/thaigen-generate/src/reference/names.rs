use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thaigen_core::NamePhonemeEntry;
use tracing::info;

use crate::errors::GenerationError;

/// Names deduplicated by pronunciation and ordered by phoneme.
///
/// When several spellings share a phoneme, the first one in resource order is
/// retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameReferenceSet {
    entries: Vec<NamePhonemeEntry>,
}

impl NameReferenceSet {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = NamePhonemeEntry>,
    {
        Self {
            entries: dedupe_by_phoneme(entries),
        }
    }

    /// Parse `<name>\t<phoneme>` lines. Every non-blank line must contain a tab.
    pub fn from_lines<'a, I>(resource: &str, lines: I) -> Result<Self, GenerationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut parsed = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                continue;
            }
            parsed.push(parse_name_phoneme_line(resource, index + 1, line)?);
        }
        Ok(Self::from_entries(parsed))
    }

    pub fn load(path: &Path) -> Result<Self, GenerationError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            GenerationError::DataUnavailable(format!(
                "failed to read name reference {}: {}",
                path.display(),
                err
            ))
        })?;
        let resource = path.display().to_string();
        let set = Self::from_lines(&resource, contents.lines())?;
        if set.is_empty() {
            return Err(GenerationError::DataUnavailable(format!(
                "name reference {resource} has no entries"
            )));
        }
        info!(
            event = "name_reference_loaded",
            path = %resource,
            unique = set.len()
        );
        Ok(set)
    }

    pub fn entries(&self) -> &[NamePhonemeEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a line into its name and phoneme. Tabs after the first one belong to
/// the phoneme.
pub fn parse_name_phoneme_line(
    resource: &str,
    line_number: usize,
    line: &str,
) -> Result<NamePhonemeEntry, GenerationError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let Some((name, phoneme)) = line.split_once('\t') else {
        return Err(GenerationError::MalformedReferenceLine {
            resource: resource.to_string(),
            line: line_number,
            content: line.to_string(),
        });
    };
    Ok(NamePhonemeEntry::new(name, phoneme))
}

/// Keep the first entry per phoneme, sorted ascending by phoneme.
pub fn dedupe_by_phoneme<I>(entries: I) -> Vec<NamePhonemeEntry>
where
    I: IntoIterator<Item = NamePhonemeEntry>,
{
    let mut by_phoneme: BTreeMap<String, String> = BTreeMap::new();
    for entry in entries {
        by_phoneme.entry(entry.phoneme).or_insert(entry.name);
    }
    by_phoneme
        .into_iter()
        .map(|(phoneme, name)| NamePhonemeEntry { name, phoneme })
        .collect()
}
