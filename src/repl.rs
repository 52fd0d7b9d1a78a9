//! Interactive conversation loop.
//!
//! This module provides the terminal loop that reads user input, dispatches
//! slash commands, and prints assistant responses. One user turn runs to
//! completion, including any nested tool rounds, before the next prompt.

use console::style;
use std::io::{self, Write};

use crate::error::{Result, WeekwiseError};
use crate::llm::chat_session::ChatSession;

/// What a line of user input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Quit,
    /// Anything that is not a command is a chat message
    Message(String),
    Empty,
}

impl Command {
    /// Parse one line of input.
    ///
    /// Commands are matched case-insensitively after trimming; unknown
    /// slash-words are treated as chat text and sent to the model.
    pub fn parse(input: &str) -> Command {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }
        match trimmed.to_lowercase().as_str() {
            "/help" => Command::Help,
            "/clear" => Command::Clear,
            "/bye" | "/exit" | "/quit" => Command::Quit,
            _ => Command::Message(trimmed.to_string()),
        }
    }
}

/// Print a speaker-labelled line in that speaker's color
fn print_colored(speaker: &str, text: &str) {
    let line = format!("{}: {}", speaker, text);
    let styled = match speaker {
        "Assistant" => style(line).cyan(),
        "User" => style(line).green(),
        "System" => style(line).yellow(),
        _ => style(line).white(),
    };
    println!("{}", styled);
}

fn show_welcome() {
    print_colored("System", "Claude chat with date tools");
    print_colored("System", &"=".repeat(60));
    print_colored("System", "Ask any question, or try:");
    print_colored(
        "System",
        "- 'What date is Monday of the week containing 2025-07-08?'",
    );
    print_colored("System", "- 'What's today's date?'");
    print_colored("System", "- 'Show me all days of the week for 2025-12-25'");
    print_colored("System", "Type '/help' for commands, '/bye' to exit.");
    print_colored("System", &"=".repeat(60));
}

fn show_help() {
    print_colored("System", "Available commands:");
    print_colored("System", "- '/bye', '/exit', '/quit' - Exit the chat");
    print_colored("System", "- '/help' - Show this help message");
    print_colored("System", "- '/clear' - Clear conversation history");
    print_colored("System", "Example questions:");
    print_colored("System", "- 'What day of the week is 2025-07-04?'");
    print_colored("System", "- 'What's the Monday of the week containing 2025-07-08?'");
    print_colored("System", "- 'Show me the full week for 2025-12-25'");
}

/// Interactive loop driving a [`ChatSession`]
pub struct Repl {
    session: ChatSession,
}

impl Repl {
    /// Create a REPL over the given session
    pub fn new(session: ChatSession) -> Self {
        Self { session }
    }

    /// Run the conversation loop until the user quits or stdin closes
    pub async fn run(&mut self) -> Result<()> {
        show_welcome();

        loop {
            print!("\n{} ", style("You:").green());
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                // EOF behaves like /bye
                println!();
                print_colored("System", "Goodbye! Thanks for chatting!");
                break;
            }

            match Command::parse(&line) {
                Command::Empty => continue,
                Command::Help => show_help(),
                Command::Clear => {
                    self.session.clear();
                    print_colored("System", "Conversation history cleared!");
                }
                Command::Quit => {
                    print_colored("System", "Goodbye! Thanks for chatting!");
                    break;
                }
                Command::Message(text) => self.handle_message(&text).await,
            }
        }

        Ok(())
    }

    /// Send one chat message and report the outcome.
    ///
    /// Failures never end the loop; the user can always try again.
    async fn handle_message(&mut self, text: &str) {
        print_colored("System", "Thinking...");

        match self.session.send(text).await {
            Ok(exchange) => {
                print_colored("Assistant", &exchange.text);
                if !exchange.tools_used.is_empty() {
                    let mut unique: Vec<String> = Vec::new();
                    for name in &exchange.tools_used {
                        if !unique.contains(name) {
                            unique.push(name.clone());
                        }
                    }
                    print_colored("System", &format!("Used tools: {}", unique.join(", ")));
                }
            }
            Err(err @ WeekwiseError::ToolLoopExceeded(_)) => {
                print_colored(
                    "System",
                    &format!("{}. Giving up on this question; try rephrasing it.", err),
                );
            }
            Err(err) => {
                print_colored(
                    "System",
                    &format!("Error communicating with the model: {}", err),
                );
                print_colored(
                    "System",
                    "Check your network connection and ANTHROPIC_API_KEY, then try again.",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help_command() {
        assert_eq!(Command::parse("/help"), Command::Help);
        assert_eq!(Command::parse("/HELP"), Command::Help);
        assert_eq!(Command::parse("  /help  "), Command::Help);
    }

    #[test]
    fn test_parse_clear_command() {
        assert_eq!(Command::parse("/clear"), Command::Clear);
        assert_eq!(Command::parse("/Clear"), Command::Clear);
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(Command::parse("/bye"), Command::Quit);
        assert_eq!(Command::parse("/exit"), Command::Quit);
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse("/BYE"), Command::Quit);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("\n"), Command::Empty);
    }

    #[test]
    fn test_parse_chat_message() {
        assert_eq!(
            Command::parse("What day is 2025-07-04?"),
            Command::Message("What day is 2025-07-04?".to_string())
        );
    }

    #[test]
    fn test_parse_trims_chat_message() {
        assert_eq!(
            Command::parse("  hello  \n"),
            Command::Message("hello".to_string())
        );
    }

    #[test]
    fn test_unknown_slash_word_is_a_message() {
        assert_eq!(
            Command::parse("/weather"),
            Command::Message("/weather".to_string())
        );
    }

    #[test]
    fn test_command_must_be_whole_input() {
        assert_eq!(
            Command::parse("tell me about /help"),
            Command::Message("tell me about /help".to_string())
        );
    }
}
