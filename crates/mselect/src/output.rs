//! How the final selection is printed.

use crate::search_select::Selected;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `id<TAB>name` line per character.
    #[default]
    Lines,
    /// A JSON array of `{"id", "name"}` objects.
    Json,
}

/// Render the selection for stdout. An empty selection prints nothing in
/// line mode and `[]` in JSON mode.
pub fn format_selection(
    selection: &[Selected],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Lines => Ok(selection
            .iter()
            .map(|s| format!("{}\t{}\n", s.id, s.name))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string(selection)? + "\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picked() -> Vec<Selected> {
        vec![
            Selected {
                id: "1".into(),
                name: "Rick Sanchez".into(),
            },
            Selected {
                id: "2".into(),
                name: "Morty Smith".into(),
            },
        ]
    }

    #[test]
    fn lines() {
        let text = format_selection(&picked(), OutputFormat::Lines).expect("format");
        assert_eq!(text, "1\tRick Sanchez\n2\tMorty Smith\n");
        assert_eq!(format_selection(&[], OutputFormat::Lines).expect("format"), "");
    }

    #[test]
    fn json() {
        let text = format_selection(&picked(), OutputFormat::Json).expect("format");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(
            value,
            serde_json::json!([
                {"id": "1", "name": "Rick Sanchez"},
                {"id": "2", "name": "Morty Smith"}
            ])
        );
        assert_eq!(format_selection(&[], OutputFormat::Json).expect("format"), "[]\n");
    }
}
