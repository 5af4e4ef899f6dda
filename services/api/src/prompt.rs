use std::io::{self, BufRead, Write};

pub(crate) const RULE_WIDTH: usize = 50;

/// Line-oriented prompting over any reader/writer pair.
///
/// End of input is reported as `None` so every caller can treat it as a cancel.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    pub(crate) fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Yes/no question; blank, unrecognized, or closed input yields `default`.
    pub(crate) fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        let answer = self.ask(prompt)?.unwrap_or_default().to_ascii_lowercase();
        Ok(match answer.as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }

    /// Numbered menu. Invalid choices re-prompt; `0` or closed input cancels.
    pub(crate) fn choose<T: Clone>(
        &mut self,
        title: &str,
        options: &[(&str, T)],
    ) -> io::Result<Option<T>> {
        loop {
            let rule = "-".repeat(RULE_WIDTH);
            writeln!(self.output, "\n{rule}")?;
            writeln!(self.output, "{title}")?;
            writeln!(self.output, "{rule}")?;
            for (index, (label, _)) in options.iter().enumerate() {
                writeln!(self.output, "{}. {label}", index + 1)?;
            }
            writeln!(self.output, "0. Cancel")?;
            writeln!(self.output, "{rule}")?;

            let prompt = format!(
                "Enter your choice (1-{}, 0 to cancel): ",
                options.len()
            );
            let Some(choice) = self.ask(&prompt)? else {
                return Ok(None);
            };
            if choice == "0" {
                return Ok(None);
            }

            match choice.parse::<usize>() {
                Ok(number) if (1..=options.len()).contains(&number) => {
                    return Ok(Some(options[number - 1].1.clone()));
                }
                _ => writeln!(
                    self.output,
                    "[ERROR] Invalid choice '{choice}'. Please try again."
                )?,
            }
        }
    }
}
