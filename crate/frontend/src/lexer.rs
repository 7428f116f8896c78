use crate::token::{Token, TokenType};
use stencil_error::{Location, TemplateError};

/// Scanner position: character index plus the human-readable line/column
#[derive(Debug, Clone, Copy)]
struct ScannerLocation {
    /// Line number (1-based)
    line: i32,
    /// Column number (0-based, reset after every newline)
    column: i32,
    /// Index into the character vector
    index: usize,
}

/// Scanner state for tracking position during tokenization
struct ScannerState<'a> {
    /// The file the source was read from, stamped onto every location
    file: &'a str,
    /// Source text as Unicode scalar values
    chars: Vec<char>,
    /// Start of the token currently being scanned
    start: ScannerLocation,
    /// Current position in the source
    current: ScannerLocation,
    /// Whether the scanner is between `{{` and `}}`
    inside_code_block: bool,
    /// Tokens generated so far
    tokens: Vec<Token>,
    /// Errors collected so far
    errors: Vec<TemplateError>,
}

/// Tokenizes template source
///
/// Literal text between directives becomes `Text` tokens; `{{` switches the
/// scanner into code mode until the matching `}}`. On any error the token
/// vector is emptied, so callers must check the errors first.
///
/// ### Arguments
///
/// * `file` - The name recorded in token locations
/// * `source` - The template source to tokenize
///
/// ### Returns
///
/// The scanned tokens (ending with `Eof` on success) and collected errors
pub fn scan(file: &str, source: &str) -> (Vec<Token>, Vec<TemplateError>) {
    let mut state = ScannerState::new(file, source);

    while !state.is_at_end() {
        state.start = state.current;
        if state.inside_code_block {
            scan_code_token(&mut state);
        } else {
            scan_text(&mut state);
        }
    }
    let eof_location = state.location_at(state.current);
    state.tokens.push(Token::new(TokenType::Eof, "", eof_location, ""));

    if !state.errors.is_empty() {
        state.tokens.clear();
    }
    (state.tokens, state.errors)
}

/// Consumes literal text until a `{{` marker or the end of the source
fn scan_text(state: &mut ScannerState) {
    while !state.inside_code_block && !state.is_at_end() {
        let before_start = state.current;
        let c = state.advance();
        if c == '{' && state.match_char('{') {
            let begin_type = if state.peek() == '-' {
                state.advance();
                TokenType::BeginCodeTrim
            } else {
                TokenType::BeginCode
            };

            let text = state.token_between(TokenType::Text, state.start, before_start);
            if !text.value.is_empty() {
                state.tokens.push(text);
            }
            state.inside_code_block = true;
            let begin = state.token_between(begin_type, before_start, state.current);
            state.tokens.push(begin);
            return;
        }
    }

    if state.is_at_end() {
        let text = state.token_between(TokenType::Text, state.start, state.current);
        if !text.value.is_empty() {
            state.tokens.push(text);
        }
    }
}

/// Scans a single token in code mode
fn scan_code_token(state: &mut ScannerState) {
    let c = state.advance();
    match c {
        '-' => {
            if !state.match_char('}') {
                state.report_error("Detected rouge -");
                return;
            }
            if !state.match_char('}') {
                state.report_error("Detected rouge -}");
                return;
            }
            state.inside_code_block = false;
            let token = state.token_here(TokenType::EndCodeTrim);
            state.tokens.push(token);
        }
        '}' => {
            if !state.match_char('}') {
                state.report_error("Detected rouge {");
                return;
            }
            state.inside_code_block = false;
            let token = state.token_here(TokenType::EndCode);
            state.tokens.push(token);
        }
        '|' => state.push_token(TokenType::Pipe),
        ',' => state.push_token(TokenType::Comma),
        '(' => state.push_token(TokenType::LeftParen),
        ')' => state.push_token(TokenType::RightParen),
        '#' => state.push_token(TokenType::Hash),
        '.' => state.push_token(TokenType::Dot),
        '?' => state.push_token(TokenType::QuestionMark),
        '/' => {
            if !state.match_char('*') {
                state.push_token(TokenType::Slash);
                return;
            }
            // comment until */, yielding no token
            while !(state.peek() == '*' && state.peek_next() == '/') && !state.is_at_end() {
                state.advance();
            }
            if !state.is_at_end() {
                state.advance();
                state.advance();
            }
        }
        '"' => handle_string(state),
        ' ' | '\r' | '\n' | '\t' => {}
        _ => {
            if is_digit(c) {
                handle_number(state);
            } else if is_alpha(c) {
                handle_identifier(state);
            } else {
                state.report_error(format!("Unexpected character {c}"));
            }
        }
    }
}

/// Scans the remainder of a double-quoted string; the token value drops the
/// surrounding quotes
fn handle_string(state: &mut ScannerState) {
    while state.peek() != '"' && !state.is_at_end() {
        state.advance();
    }

    if state.is_at_end() {
        state.report_error("Unterminated string.");
        return;
    }

    // the closing quote
    state.advance();

    let value: String = state.chars[state.start.index + 1..state.current.index - 1]
        .iter()
        .collect();
    let token = state.token_with_value(TokenType::Ident, value);
    state.tokens.push(token);
}

/// Scans digits with an optional fractional part; numbers travel through the
/// pipeline as `Ident` tokens so the parser accepts them anywhere an
/// identifier is accepted
fn handle_number(state: &mut ScannerState) {
    while is_digit(state.peek()) {
        state.advance();
    }

    if state.peek() == '.' && is_digit(state.peek_next()) {
        state.advance();
        while is_digit(state.peek()) {
            state.advance();
        }
    }

    let token = state.token_here(TokenType::Ident);
    state.tokens.push(token);
}

/// Scans an identifier and promotes the four keywords
fn handle_identifier(state: &mut ScannerState) {
    while is_alpha_numeric(state.peek()) {
        state.advance();
    }
    let ident = state.token_here(TokenType::Ident);

    let token_type = match ident.value.as_str() {
        "if" => TokenType::KeywordIf,
        "range" => TokenType::KeywordRange,
        "end" => TokenType::KeywordEnd,
        "include" => TokenType::KeywordInclude,
        _ => TokenType::Ident,
    };
    if token_type == TokenType::Ident {
        state.tokens.push(ident);
    } else {
        state.tokens.push(ident.with_type(token_type));
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

impl<'a> ScannerState<'a> {
    /// Creates a new scanner state for the given file and source
    fn new(file: &'a str, source: &str) -> Self {
        let start = ScannerLocation {
            line: 1,
            column: 0,
            index: 0,
        };
        ScannerState {
            file,
            chars: source.chars().collect(),
            start,
            current: start,
            inside_code_block: false,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Consumes and returns the current character, updating line and column
    fn advance(&mut self) -> char {
        let c = self.chars[self.current.index];
        self.current.index += 1;
        self.current.column += 1;
        if c == '\n' {
            self.current.line += 1;
            self.current.column = 0;
        }
        c
    }

    /// Consumes the current character when it equals `expected`
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current.index] != expected {
            return false;
        }
        self.advance();
        true
    }

    /// The current character without consuming it, `'\0'` at the end
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current.index]
        }
    }

    /// The character after the current one, `'\0'` past the end
    fn peek_next(&self) -> char {
        self.chars.get(self.current.index + 1).copied().unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.current.index >= self.chars.len()
    }

    /// The source location for a scanner position
    fn location_at(&self, position: ScannerLocation) -> Location {
        Location::new(self.file, position.line, position.column)
    }

    /// A token spanning from the token start to the current position
    fn token_here(&self, token_type: TokenType) -> Token {
        self.token_between(token_type, self.start, self.current)
    }

    /// A token spanning `begin..end` whose value equals its lexeme
    fn token_between(
        &self,
        token_type: TokenType,
        begin: ScannerLocation,
        end: ScannerLocation,
    ) -> Token {
        let lexeme: String = self.chars[begin.index..end.index].iter().collect();
        let value = lexeme.clone();
        Token::new(token_type, lexeme, self.location_at(begin), value)
    }

    /// A token spanning the current lexeme with an explicit value
    fn token_with_value(&self, token_type: TokenType, value: String) -> Token {
        let lexeme: String = self.chars[self.start.index..self.current.index].iter().collect();
        Token::new(token_type, lexeme, self.location_at(self.start), value)
    }

    /// Records an error at the start of the current token
    fn report_error(&mut self, message: impl Into<String>) {
        let location = self.location_at(self.start);
        self.errors.push(TemplateError::new(location, message));
    }

    /// Emits a token for the current lexeme
    fn push_token(&mut self, token_type: TokenType) {
        let token = self.token_here(token_type);
        self.tokens.push(token);
    }
}
