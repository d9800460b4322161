//! Boxed text prompt

/// A titled block of text followed by the accepted answers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Prompt {
    pub title: String,
    pub lines: Vec<String>,
    pub choices: Vec<String>,
    /// Render the title with the danger marker
    pub danger: bool,
}

impl Prompt {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn choice(mut self, choice: impl Into<String>) -> Self {
        self.choices.push(choice.into());
        self
    }

    pub fn danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.danger { "!!" } else { "::" };
        writeln!(f, "{} {}", marker, self.title)?;
        for line in &self.lines {
            writeln!(f, "   {}", line)?;
        }
        if !self.choices.is_empty() {
            write!(f, "   [{}]", self.choices.join(" / "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_lines_and_choices() {
        let prompt = Prompt::new("Delete tracks")
            .line("Are you sure?")
            .choice("y")
            .choice("n")
            .danger(true);

        assert_eq!(
            prompt.to_string(),
            "!! Delete tracks\n   Are you sure?\n   [y / n]"
        );
    }

    #[test]
    fn renders_without_choices() {
        assert_eq!(Prompt::new("Info").to_string(), ":: Info\n");
    }
}
