pub mod config;
pub mod hints;
pub mod hover;
pub mod scan;
pub mod watch;

use anyhow::Result;
use hush_config::Config;
use hush_security::{PatternTable, SensitiveHover};
use std::path::{Path, PathBuf};

/// Build the pattern table described by the config
pub fn pattern_table(config: &Config) -> Result<PatternTable> {
    let highlight = &config.highlight;
    let mut builder = PatternTable::builder();

    builder = if highlight.possible_secret {
        builder.possible_secret_min_len(highlight.possible_secret_min_len)
    } else {
        builder.without_possible_secret()
    };

    for rule in &highlight.custom_rules {
        builder = builder.custom_rule(rule.pattern.as_str(), rule.label.as_str());
    }

    Ok(builder.build()?)
}

pub fn hover_provider(config: &Config) -> SensitiveHover {
    SensitiveHover::new(&config.hover.keywords)
}

/// Expand directories into their *.json files, respecting .gitignore
pub fn collect_json_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in ignore::WalkBuilder::new(path).build() {
                let entry = entry?;
                let is_file = entry.file_type().is_some_and(|t| t.is_file());
                if is_file && is_json(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if path.exists() {
            files.push(path.clone());
        } else {
            anyhow::bail!("Path not found: {}", path.display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hush_config::CustomRule;

    #[test]
    fn test_pattern_table_from_config() {
        let mut config = Config::default();
        assert_eq!(pattern_table(&config).unwrap().len(), 6);

        config.highlight.possible_secret = false;
        config.highlight.custom_rules.push(CustomRule {
            pattern: r"AKIA[0-9A-Z]{16}".to_string(),
            label: "AWS access key".to_string(),
        });
        let table = pattern_table(&config).unwrap();
        assert_eq!(table.len(), 6);
        assert_eq!(table.rules().last().unwrap().label(), "AWS access key");
    }

    #[test]
    fn test_invalid_custom_rule_is_an_error() {
        let mut config = Config::default();
        config.highlight.custom_rules.push(CustomRule {
            pattern: "[".to_string(),
            label: "Broken".to_string(),
        });
        assert!(pattern_table(&config).is_err());
    }

    #[test]
    fn test_collect_json_files() {
        let dir = tempfile::Builder::new().prefix("hush").tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("nested").join("b.JSON"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = collect_json_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.json"), dir.path().join("nested").join("b.JSON")]
        );
    }

    #[test]
    fn test_collect_missing_path() {
        assert!(collect_json_files(&[PathBuf::from("/definitely/not/here.json")]).is_err());
    }
}
