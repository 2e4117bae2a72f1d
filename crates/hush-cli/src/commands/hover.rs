use std::path::PathBuf;

use anyhow::Result;
use hush_config::Config;
use hush_core::Position;

pub fn handle(config: &Config, file: PathBuf, line: usize, column: usize) -> Result<()> {
    let content = std::fs::read_to_string(&file)?;
    let provider = super::hover_provider(config);

    match provider.hover(&content, Position::new(line, column)) {
        Some(hover) => {
            let range = hover.range;
            println!(
                "{}:{}:{}-{}",
                file.display(),
                range.start_line,
                range.start_column,
                range.end_column
            );
            for block in &hover.contents {
                println!("{}\n", block);
            }
        }
        None => println!("No sensitive field at {}:{}", line, column),
    }

    Ok(())
}
