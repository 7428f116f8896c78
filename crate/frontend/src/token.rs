use std::fmt::Display;
use stencil_error::Location;

/// Types of tokens produced by the template scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Text,           // literal template text
    BeginCode,      // {{
    EndCode,        // }}
    BeginCodeTrim,  // {{-
    EndCodeTrim,    // -}}
    Ident,          // attribute, function, argument or number
    Dot,            // .
    Comma,          // ,
    Pipe,           // |
    LeftParen,      // (
    RightParen,     // )
    Hash,           // #
    Slash,          // /
    QuestionMark,   // ?
    Eof,            // end of template
    KeywordIf,      // if
    KeywordRange,   // range
    KeywordEnd,     // end
    KeywordInclude, // include
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // bare variant names; parser diagnostics quote these directly
        write!(f, "{}", match self {
            TokenType::Text => "Text",
            TokenType::BeginCode => "BeginCode",
            TokenType::EndCode => "EndCode",
            TokenType::BeginCodeTrim => "BeginCodeTrim",
            TokenType::EndCodeTrim => "EndCodeTrim",
            TokenType::Ident => "Ident",
            TokenType::Dot => "Dot",
            TokenType::Comma => "Comma",
            TokenType::Pipe => "Pipe",
            TokenType::LeftParen => "LeftParen",
            TokenType::RightParen => "RightParen",
            TokenType::Hash => "Hash",
            TokenType::Slash => "Slash",
            TokenType::QuestionMark => "QuestionMark",
            TokenType::Eof => "Eof",
            TokenType::KeywordIf => "KeywordIf",
            TokenType::KeywordRange => "KeywordRange",
            TokenType::KeywordEnd => "KeywordEnd",
            TokenType::KeywordInclude => "KeywordInclude",
        })
    }
}

/// A token of template source
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The type of the token
    pub token_type: TokenType,
    /// The exact source slice the token was scanned from
    pub lexeme: String,
    /// Where the token starts
    pub location: Location,
    /// Semantic payload: string literals carry their content without quotes,
    /// identifiers carry the lexeme itself
    pub value: String,
}

impl Token {
    /// Creates a new token
    pub fn new(
        token_type: TokenType,
        lexeme: impl Into<String>,
        location: Location,
        value: impl Into<String>,
    ) -> Token {
        Token {
            token_type,
            lexeme: lexeme.into(),
            location,
            value: value.into(),
        }
    }

    /// A copy of this token with a different type
    pub fn with_type(&self, token_type: TokenType) -> Token {
        Token {
            token_type,
            lexeme: self.lexeme.clone(),
            location: self.location.clone(),
            value: self.value.clone(),
        }
    }

    /// A copy of this token with a different value
    pub fn with_value(&self, value: impl Into<String>) -> Token {
        Token {
            token_type: self.token_type,
            lexeme: self.lexeme.clone(),
            location: self.location.clone(),
            value: value.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.token_type, self.lexeme)
    }
}
