use anyhow::Result;
use tracing::debug;

use crate::agent::Agent;
use crate::prompt::{InputType, Prompt};
use crate::providers::types::{conversation::Conversation, message::Message};

pub const SYSTEM_PROMPT: &str = r#"You are a professional User Management Assistant with access to a comprehensive user database system and web search capabilities.

## Your Role:
You help users manage their user database by performing CRUD operations (Create, Read, Update, Delete) and searching for user information. You can also search the web for additional information when needed.

## Available Capabilities:
1. **Create Users**: Add new users to the database with their personal information
2. **Get User Details**: Retrieve complete information about a specific user by their ID
3. **Search Users**: Find users based on name, surname, email, or gender
4. **Update Users**: Modify existing user information
5. **Delete Users**: Remove users from the database
6. **Web Search**: Search the internet for additional information about people or related topics

## Guidelines:
- Always confirm successful operations with clear, friendly messages
- When creating or updating users, validate that required fields are provided
- Be careful with sensitive information (credit cards, personal data) - handle with discretion
- If a user asks about someone famous, you can use web search to gather information before adding them
- Provide structured, easy-to-read responses when displaying user information
- Ask for clarification if user requests are ambiguous
- Warn users before performing destructive operations (like deletion)
- Stay focused on user management tasks - politely redirect off-topic requests

## Response Format:
- Use clear, professional language
- Format user data in a readable way using markdown when appropriate
- Provide helpful suggestions when operations fail
- Include relevant IDs and key information in your responses

## Error Handling:
- Explain errors in simple terms
- Suggest corrective actions when operations fail
- Validate data before attempting operations

Remember: You are here to make user management simple and efficient. Be helpful, accurate, and professional in all interactions."#;

pub struct Session<'a> {
    agent: Agent,
    prompt: Box<dyn Prompt + 'a>,
    conversation: Conversation,
}

impl<'a> Session<'a> {
    pub fn new(agent: Agent, prompt: Box<dyn Prompt + 'a>) -> Self {
        Self::with_system_prompt(agent, prompt, SYSTEM_PROMPT)
    }

    pub fn with_system_prompt(agent: Agent, prompt: Box<dyn Prompt + 'a>, system: &str) -> Self {
        Session {
            agent,
            prompt,
            conversation: Conversation::with_system_prompt(system),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Read, answer, repeat until the user leaves
    pub fn start(&mut self) -> Result<()> {
        debug!("Session tools: {:?}", self.agent.registry().names());
        self.prompt.ready();

        loop {
            let input = self.prompt.get_input()?;
            let content = match (input.input_type, input.content) {
                (InputType::Exit, _) => break,
                (InputType::Message, Some(content)) => content,
                _ => continue,
            };

            self.conversation.add_message(Message::user(&content));
            self.reply();
        }

        self.prompt.close();
        Ok(())
    }

    fn reply(&mut self) {
        self.prompt.show_busy();
        let result = self.agent.complete(&mut self.conversation);
        self.prompt.hide_busy();

        match result {
            Ok(answer) => {
                self.prompt.render(&answer);
                self.conversation.add_message(answer);
            }
            Err(e) => self.prompt.render_error(&e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AgentError;
    use crate::prompt::Input;
    use crate::providers::mock::MockProvider;
    use crate::providers::types::message::Role;
    use crate::tools::ToolRegistry;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Default)]
    struct Transcript {
        rendered: Vec<String>,
        errors: Vec<String>,
        closed: bool,
    }

    struct ScriptedPrompt {
        lines: VecDeque<&'static str>,
        transcript: Rc<RefCell<Transcript>>,
    }

    impl ScriptedPrompt {
        fn new(lines: &[&'static str]) -> (Self, Rc<RefCell<Transcript>>) {
            let transcript = Rc::new(RefCell::new(Transcript::default()));
            let prompt = Self {
                lines: lines.iter().copied().collect(),
                transcript: transcript.clone(),
            };
            (prompt, transcript)
        }
    }

    impl Prompt for ScriptedPrompt {
        fn render(&mut self, message: &Message) {
            self.transcript
                .borrow_mut()
                .rendered
                .push(message.content.clone());
        }

        fn render_error(&mut self, message: &str) {
            self.transcript.borrow_mut().errors.push(message.to_string());
        }

        fn get_input(&mut self) -> Result<Input> {
            Ok(self
                .lines
                .pop_front()
                .map(Input::from_text)
                .unwrap_or_else(Input::exit))
        }

        fn show_busy(&mut self) {}

        fn hide_busy(&mut self) {}

        fn close(&self) {
            self.transcript.borrow_mut().closed = true;
        }

        fn ready(&self) {}
    }

    fn agent(provider: &MockProvider) -> Agent {
        Agent::new(Box::new(provider.clone()), ToolRegistry::new())
    }

    #[test]
    fn test_session_round_trip() {
        let provider = MockProvider::new(vec![MockProvider::text("Hi there")]);
        let (prompt, transcript) = ScriptedPrompt::new(&["", "hello", "bye", "never read"]);
        let mut session = Session::with_system_prompt(agent(&provider), Box::new(prompt), "sys");

        session.start().unwrap();

        let roles: Vec<Role> = session.conversation().messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
        assert_eq!(transcript.borrow().rendered, vec!["Hi there".to_string()]);
        assert!(transcript.borrow().closed);
        assert_eq!(provider.requests().len(), 1);
    }

    #[test]
    fn test_session_survives_errors() {
        let provider = MockProvider::new(vec![
            Err(AgentError::Api {
                status: 503,
                body: "unavailable".to_string(),
            }),
            MockProvider::text("Back online"),
        ]);
        let (prompt, transcript) = ScriptedPrompt::new(&["first", "second", "EXIT"]);
        let mut session = Session::with_system_prompt(agent(&provider), Box::new(prompt), "sys");

        session.start().unwrap();

        let transcript = transcript.borrow();
        assert_eq!(
            transcript.errors,
            vec!["API request failed with status 503: unavailable".to_string()]
        );
        assert_eq!(transcript.rendered, vec!["Back online".to_string()]);

        // the failed turn keeps its user message, the agent added nothing
        let contents: Vec<&str> = session
            .conversation()
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["sys", "first", "second", "Back online"]);
    }

    #[test]
    fn test_default_session_starts_with_system_prompt() {
        let provider = MockProvider::new(vec![]);
        let (prompt, _) = ScriptedPrompt::new(&[]);
        let session = Session::new(agent(&provider), Box::new(prompt));

        let first = &session.conversation().messages()[0];
        assert_eq!(first.role, Role::System);
        assert!(first.content.starts_with("You are a professional User Management Assistant"));
    }
}
