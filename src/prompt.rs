use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-oriented terminal prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Prompt with a message and return the trimmed input, or `None` at end of input.
    pub fn ask(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt with a default value. Returns the default if input is empty or ends.
    pub fn ask_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        match self.ask(&format!("{} [{}]: ", message, default))? {
            Some(input) if !input.is_empty() => Ok(input),
            _ => Ok(default.to_string()),
        }
    }

    /// Prompt with a yes/no question. Returns bool based on input and default.
    pub fn ask_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self
            .ask(&format!("{} [{}]: ", message, hint))?
            .unwrap_or_default()
            .to_lowercase();
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(input == "y" || input == "yes")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut p = prompter("  hello  \n");
        assert_eq!(p.ask("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(p.ask("> ").unwrap(), None);
    }

    #[test]
    fn test_ask_with_default() {
        let mut p = prompter("\nvalue\n");
        assert_eq!(p.ask_with_default("Name", "anon").unwrap(), "anon");
        assert_eq!(p.ask_with_default("Name", "anon").unwrap(), "value");
        assert_eq!(p.ask_with_default("Name", "anon").unwrap(), "anon");
    }

    #[test]
    fn test_ask_yes_no() {
        let mut p = prompter("\nYES\nn\n");
        assert!(p.ask_yes_no("Continue?", true).unwrap());
        assert!(p.ask_yes_no("Continue?", false).unwrap());
        assert!(!p.ask_yes_no("Continue?", true).unwrap());
    }

    #[test]
    fn test_prompt_text_written() {
        let mut p = prompter("x\n");
        p.say("Intro").unwrap();
        p.ask("Pick: ").unwrap();
        let written = String::from_utf8(p.output).unwrap();
        assert_eq!(written, "Intro\nPick: ");
    }
}
