use std::path::PathBuf;

use anyhow::Result;

pub fn handle(file: PathBuf, start: usize, end: Option<usize>, format: &str) -> Result<()> {
    let content = std::fs::read_to_string(&file)?;
    let hints = hush_hints::inlay_hints(&content, start, end.unwrap_or(usize::MAX));

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&hints)?);
        }
        _ => {
            if hints.is_empty() {
                println!("No hints.");
            }
            for hint in &hints {
                println!(
                    "{}:{}:{}  {}",
                    file.display(),
                    hint.position.line,
                    hint.position.column,
                    hint.label
                );
            }
        }
    }

    Ok(())
}
