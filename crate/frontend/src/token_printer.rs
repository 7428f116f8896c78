use crate::token::{Token, TokenType};
use colored::Colorize;

/// A utility for printing token streams in a human-readable format
pub struct TokenPrinter;

impl TokenPrinter {
    /// Creates a new token printer
    pub fn new() -> Self {
        TokenPrinter
    }

    /// Prints a list of tokens with formatting
    ///
    /// ### Arguments
    ///
    /// * `tokens` - The tokens to print
    pub fn print(&self, tokens: &[Token]) {
        println!("{}", "=== TOKENS ===".bright_cyan().bold());
        for (i, token) in tokens.iter().enumerate() {
            self.print_token(i, token);
        }
        println!("{}", "=== END TOKENS ===".bright_cyan().bold());
    }

    fn print_token(&self, index: usize, token: &Token) {
        let token_type_str = self.format_token_type(token.token_type);
        let lexeme_str = self.format_lexeme(&token.lexeme, token.token_type);
        let position_str = format!("at {}", token.location).dimmed();

        println!(
            "{:3}: {} {} ({})",
            index.to_string().bright_black(),
            token_type_str,
            lexeme_str,
            position_str
        );
    }

    fn format_token_type(&self, token_type: TokenType) -> String {
        let padded = format!("{:15}", token_type.to_string());
        match token_type {
            TokenType::KeywordIf
            | TokenType::KeywordRange
            | TokenType::KeywordEnd
            | TokenType::KeywordInclude => padded.blue().bold().to_string(),

            TokenType::Text => padded.green().to_string(),

            TokenType::Ident => padded.cyan().to_string(),

            TokenType::BeginCode
            | TokenType::EndCode
            | TokenType::BeginCodeTrim
            | TokenType::EndCodeTrim => padded.yellow().to_string(),

            TokenType::Eof => padded.bright_purple().to_string(),

            _ => padded.bright_black().to_string(),
        }
    }

    fn format_lexeme(&self, lexeme: &str, token_type: TokenType) -> String {
        match token_type {
            TokenType::Text => format!("{:?}", lexeme).green().to_string(),
            TokenType::Eof => "<EOF>".bright_purple().to_string(),
            _ => {
                if lexeme.is_empty() {
                    "<empty>".dimmed().to_string()
                } else {
                    format!("'{}'", lexeme)
                }
            }
        }
    }
}

impl Default for TokenPrinter {
    fn default() -> Self {
        Self::new()
    }
}
