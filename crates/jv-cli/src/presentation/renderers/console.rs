use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            color: io::stdout().is_terminal(),
        }
    }

    /// Render into any writer; `render` targets stdout.
    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view())?;

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\n💡 Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{Guidance, StatusBadge};
    use std::fmt;

    #[derive(Serialize)]
    struct Greeting {
        name: String,
    }

    impl CreateView for Greeting {
        fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
            Box::new(format!("hello {}\n", self.name))
        }
    }

    fn plain() -> ConsoleRenderer {
        ConsoleRenderer {
            json_mode: false,
            color: false,
        }
    }

    fn render_to_string(
        renderer: &ConsoleRenderer,
        result: &CommandResultViewModel<Greeting>,
    ) -> String {
        let mut buf = Vec::new();
        renderer.write_to(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_with_badge_and_tip() {
        let result = CommandResultViewModel::new(Greeting { name: "jv".into() })
            .with_badge(StatusBadge::info("Report"))
            .with_suggestion(Guidance::new("try").with_command("jv x --analyze"));
        assert_eq!(
            render_to_string(&plain(), &result),
            "🔍 Report\n\nhello jv\n\n💡 Tips:\n  • try: jv x --analyze\n"
        );
    }

    #[test]
    fn test_json_mode_serializes_view_model() {
        let renderer = ConsoleRenderer {
            json_mode: true,
            color: false,
        };
        let result = CommandResultViewModel::new(Greeting { name: "jv".into() });
        let out = render_to_string(&renderer, &result);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["content"]["name"], "jv");
        assert!(value.get("badge").is_none());
        assert!(value.get("suggestions").is_none());
    }
}
