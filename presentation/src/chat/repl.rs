//! REPL (Read-Eval-Print Loop) for interactive chat
//!
//! Lines starting with `/` are legal commands and go to the dispatcher
//! unchanged; lines starting with `:` are REPL commands. Every answered
//! exchange is appended to the conversation history sent with the next
//! message.

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::cli::commands::OutputFormat;
use colored::Colorize;
use legalai_application::{ChatDispatcher, ChatRequest, NoDispatchProgress};
use legalai_domain::{
    ConversationHistory, ConversationTurn, MediaReference, ResponseEnvelope, UserRole,
};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;

const HISTORY_CAPACITY: usize = 1000;

/// A `:` command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    /// Switch role; `None` shows the current one
    Role(Option<String>),
    Document(String),
    Audio(String),
    /// Drop both attachments
    Detach,
    /// Forget the conversation so far
    Clear,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `:`; other lines return `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.trim().strip_prefix(':')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        let arg = (!arg.is_empty()).then(|| arg.to_string());

        let command = match name {
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            "role" => ReplCommand::Role(arg),
            "doc" | "document" => match arg {
                Some(reference) => ReplCommand::Document(reference),
                None => ReplCommand::Unknown(":doc needs a path or data URI".to_string()),
            },
            "audio" => match arg {
                Some(reference) => ReplCommand::Audio(reference),
                None => ReplCommand::Unknown(":audio needs a path or data URI".to_string()),
            },
            "detach" => ReplCommand::Detach,
            "clear" => ReplCommand::Clear,
            other => ReplCommand::Unknown(format!("Unknown command: :{}", other)),
        };
        Some(command)
    }
}

/// Mutable state of one chat session
#[derive(Debug, Default)]
pub struct ChatSession {
    pub role: UserRole,
    pub history: ConversationHistory,
    pub document: Option<MediaReference>,
    pub audio: Option<MediaReference>,
}

impl ChatSession {
    pub fn new(role: UserRole) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    pub fn request(&self, message: &str) -> ChatRequest {
        let mut request = ChatRequest::new(message)
            .with_history(self.history.clone())
            .with_role(self.role);
        if let Some(document) = &self.document {
            request = request.with_document(document.clone());
        }
        if let Some(audio) = &self.audio {
            request = request.with_audio(audio.clone());
        }
        request
    }

    /// Record an answered exchange.
    pub fn record(&mut self, message: &str, envelope: &ResponseEnvelope) {
        self.history.push(ConversationTurn::user(message));
        self.history.push(ConversationTurn::model(envelope.content()));
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    dispatcher: Arc<ChatDispatcher>,
    session: ChatSession,
    output: OutputFormat,
    show_progress: bool,
}

impl ChatRepl {
    pub fn new(dispatcher: Arc<ChatDispatcher>, role: UserRole) -> Self {
        Self {
            dispatcher,
            session: ChatSession::new(role),
            output: OutputFormat::Text,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn with_document(mut self, document: Option<MediaReference>) -> Self {
        self.session.document = document;
        self
    }

    pub fn with_audio(mut self, audio: Option<MediaReference>) -> Self {
        self.session.audio = audio;
        self
    }

    fn history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("legalai").join("history.txt"))
    }

    fn line_editor() -> Reedline {
        let editor = Reedline::create();
        let Some(path) = Self::history_path() else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(_) => editor,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Self::line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("legalai".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }
                    self.process_message(line).await;
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            LegalAi - Chat Mode              │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Role: {}", self.session.role);
        self.print_attachments();
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Legal commands:");
        println!("  /draft <request>   /summarize   /timeline <facts>   /analyze");
        println!("  /search <query>    /translate to <language> <text>  /transcribe");
        println!();
        println!("Session commands:");
        println!("  :role [advocate|student|public]  - Show or switch role");
        println!("  :doc <path>                      - Attach a document");
        println!("  :audio <path>                    - Attach an audio file");
        println!("  :detach                          - Remove attachments");
        println!("  :clear                           - Forget the conversation");
        println!("  :help, :quit");
        println!();
    }

    fn print_attachments(&self) {
        if let Some(document) = &self.session.document {
            println!("Document: {}", document.describe());
        }
        if let Some(audio) = &self.session.audio {
            println!("Audio: {}", audio.describe());
        }
    }

    /// Handle `:` commands. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Role(None) => println!("Role: {}", self.session.role),
            ReplCommand::Role(Some(role)) => match role.parse::<UserRole>() {
                Ok(role) => {
                    self.session.role = role;
                    println!("Role set to {}", role);
                }
                Err(e) => println!("{}", e),
            },
            ReplCommand::Document(reference) => {
                self.session.document = Some(MediaReference::new(reference));
                self.print_attachments();
            }
            ReplCommand::Audio(reference) => {
                self.session.audio = Some(MediaReference::new(reference));
                self.print_attachments();
            }
            ReplCommand::Detach => {
                self.session.document = None;
                self.session.audio = None;
                println!("Attachments removed");
            }
            ReplCommand::Clear => {
                self.session.history = ConversationHistory::new();
                println!("Conversation cleared");
            }
            ReplCommand::Unknown(message) => {
                println!("{}", message);
                println!("Type :help for available commands");
            }
        }
        false
    }

    async fn process_message(&mut self, message: &str) {
        println!();
        let request = self.session.request(message);

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.dispatcher.dispatch(&request, &progress).await
        } else {
            self.dispatcher.dispatch(&request, &NoDispatchProgress).await
        };

        match result {
            Ok(envelope) => {
                let output = match self.output {
                    OutputFormat::Text => ConsoleFormatter::format(&envelope),
                    OutputFormat::Json => ConsoleFormatter::format_json(&envelope),
                };
                println!("{}", output);
                self.session.record(message, &envelope);
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e));
                if !e.is_user_error() {
                    eprintln!("{}", "The message was not added to the conversation.".dimmed());
                }
            }
        }
        println!();
    }
}
