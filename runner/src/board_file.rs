// ═══════════════════════════════════════════════════════════════════════
// Board files — a TOML list of territories that replaces registration.
//
//   [[territory]]
//   name = "Alaska"
//   troops = 5
// ═══════════════════════════════════════════════════════════════════════

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use war_engine::board::TerritorySpec;

#[derive(Debug, Deserialize)]
struct BoardFile {
    #[serde(rename = "territory", default)]
    territories: Vec<TerritorySpec>,
}

pub fn parse(content: &str) -> Result<Vec<TerritorySpec>> {
    let file: BoardFile = toml::from_str(content).context("invalid board file")?;
    Ok(file.territories)
}

pub fn load(path: &Path) -> Result<Vec<TerritorySpec>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    let specs = parse(&content).with_context(|| format!("in {}", path.display()))?;
    tracing::debug!(path = %path.display(), territories = specs.len(), "board file loaded");
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_territories() {
        let specs = parse(
            r#"
            [[territory]]
            name = "Alaska"
            troops = 5

            [[territory]]
            name = "Brazil"
            troops = 3
            "#,
        )
        .unwrap();
        assert_eq!(specs, vec![TerritorySpec::new("Alaska", 5), TerritorySpec::new("Brazil", 3)]);
    }

    #[test]
    fn test_empty_file_gives_no_territories() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_negative_troops_rejected() {
        assert!(parse("[[territory]]\nname = \"X\"\ntroops = -1\n").is_err());
    }
}
