use anyhow::Result;
use console::style;

use crate::providers::types::message::Message;

pub mod cliclack;

const EXIT_KEYWORDS: [&str; 4] = ["exit", "quit", "bye", "stop"];

/// Terminal side of a session
pub trait Prompt {
    fn render(&mut self, message: &Message);
    fn render_error(&mut self, message: &str);
    fn get_input(&mut self) -> Result<Input>;
    fn show_busy(&mut self);
    fn hide_busy(&mut self);
    fn close(&self);
    fn ready(&self) {
        println!();
        println!(
            "{}",
            style("User Management Assistant is running!").bold().cyan()
        );
        println!(
            "Ask about users, or type {} to leave.",
            style("exit").dim()
        );
        println!(
            "{}",
            style("Example: 'Add Andrej Karpathy as a new user'").dim()
        );
        println!();
    }
}

pub struct Input {
    pub input_type: InputType,
    pub content: Option<String>, // absent for control flow such as Exit
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    AskAgain, // Nothing useful was typed
    Message,  // User sent a message
    Exit,     // User wants to exit the session
}

impl Input {
    /// Decide what a line of user text means for the session
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        let input_type = if text.is_empty() {
            InputType::AskAgain
        } else if EXIT_KEYWORDS
            .iter()
            .any(|keyword| text.eq_ignore_ascii_case(keyword))
        {
            InputType::Exit
        } else {
            InputType::Message
        };

        let content = (input_type == InputType::Message).then(|| text.to_string());
        Self {
            input_type,
            content,
        }
    }

    pub fn exit() -> Self {
        Self {
            input_type: InputType::Exit,
            content: None,
        }
    }
}
