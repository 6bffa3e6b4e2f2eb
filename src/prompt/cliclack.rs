use std::io::{self, Write};

use anyhow::Result;
use bat::WrappingMode;
use cliclack::{input, spinner, ProgressBar};
use console::style;

use super::{Input, Prompt};
use crate::providers::types::message::Message;

const THEME: &str = "zenburn";

pub struct CliclackPrompt {
    spinner: Option<ProgressBar>,
}

impl CliclackPrompt {
    pub fn new() -> Self {
        CliclackPrompt { spinner: None }
    }
}

impl Default for CliclackPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn print(content: &str) {
    let printed = bat::PrettyPrinter::new()
        .input(bat::Input::from_bytes(content.as_bytes()))
        .theme(THEME)
        .language("Markdown")
        .wrapping_mode(WrappingMode::Character)
        .print();

    // fall back to plain text
    if printed.is_err() {
        println!("{}", content);
    }
}

impl Prompt for CliclackPrompt {
    fn render(&mut self, message: &Message) {
        print(&message.content);
        println!();
        let _ = io::stdout().flush();
    }

    fn render_error(&mut self, message: &str) {
        eprintln!("{} {}", style("Error:").red().bold(), message);
    }

    fn get_input(&mut self) -> Result<Input> {
        let typed = input("You")
            .placeholder("Ask about users, or type exit")
            .required(false)
            .interact::<String>();

        match typed {
            Ok(text) => Ok(Input::from_text(&text)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Input::exit()),
            Err(e) => Err(e.into()),
        }
    }

    fn show_busy(&mut self) {
        let busy = spinner();
        busy.start("awaiting reply");
        self.spinner = Some(busy);
    }

    fn hide_busy(&mut self) {
        if let Some(busy) = self.spinner.take() {
            busy.stop("");
        }
    }

    fn close(&self) {
        println!("{}", style("Goodbye!").dim());
    }
}
