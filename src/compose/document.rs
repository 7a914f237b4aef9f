//! @acp:module "Generated Document"
//! @acp:summary "Ordered section model for the design brief and its renderers"
//! @acp:domain cli
//! @acp:layer output

use anyhow::anyhow;
use serde::Serialize;

/// Output format for a generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown output format: {}", s)),
        }
    }
}

/// One line inside a section body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Line {
    /// Rendered as `- **key**: value`
    Entry { key: String, value: String },
    /// Rendered verbatim
    Text { text: String },
}

impl Line {
    pub fn entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        Line::Entry {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Line::Text { text: text.into() }
    }

    fn render(&self) -> String {
        match self {
            Line::Entry { key, value } => format!("- **{}**: {}", key, value),
            Line::Text { text } => text.clone(),
        }
    }
}

/// @acp:summary "Titled section; a heading followed by body lines and a blank line"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocSection {
    /// Markdown heading depth (2 = `##`, 3 = `###`)
    pub level: u8,
    pub title: String,
    pub body: Vec<Line>,
}

impl DocSection {
    pub fn new(level: u8, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: Vec::new(),
        }
    }

    pub fn line(mut self, line: Line) -> Self {
        self.body.push(line);
        self
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = Line>) -> Self {
        self.body.extend(lines);
        self
    }

    fn render_into(&self, out: &mut String) {
        out.push_str(&"#".repeat(self.level as usize));
        out.push(' ');
        out.push_str(&self.title);
        out.push('\n');
        for line in &self.body {
            out.push_str(&line.render());
            out.push('\n');
        }
        out.push('\n');
    }
}

/// @acp:summary "Complete design brief; immutable once composed"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDocument {
    pub preamble: String,
    pub sections: Vec<DocSection>,
    pub closing_title: String,
    pub closing: String,
}

impl GeneratedDocument {
    /// Section titles in document order
    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }

    /// First section with the given title
    pub fn section(&self, title: &str) -> Option<&DocSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// @acp:summary "Render as Markdown text"
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.preamble);
        out.push_str("\n\n");
        for section in &self.sections {
            section.render_into(&mut out);
        }
        out.push_str("## ");
        out.push_str(&self.closing_title);
        out.push('\n');
        out.push_str(&self.closing);
        out
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> crate::Result<String> {
        match format {
            OutputFormat::Markdown => Ok(self.to_markdown()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_markdown_layout() {
        let doc = GeneratedDocument {
            preamble: "intro".into(),
            sections: vec![
                DocSection::new(2, "Empty"),
                DocSection::new(3, "Filled")
                    .line(Line::entry("k", "v"))
                    .line(Line::entry("blank", ""))
                    .line(Line::text("  raw")),
            ],
            closing_title: "End".into(),
            closing: "done.".into(),
        };
        assert_eq!(
            doc.to_markdown(),
            "intro\n\n## Empty\n\n### Filled\n- **k**: v\n- **blank**: \n  raw\n\n## End\ndone."
        );
    }

    #[test]
    fn test_json_lines_are_tagged() {
        let json = serde_json::to_value(Line::entry("a", "b")).unwrap();
        assert_eq!(json["kind"], "entry");
        assert_eq!(json["key"], "a");
    }
}
