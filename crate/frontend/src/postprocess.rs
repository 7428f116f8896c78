//! Token stream rewriting between the scanner and the parser
//!
//! Three passes run in a fixed order: trim-marker application may create the
//! adjacencies that empty-block elision removes, and sigil promotion reads
//! one token of lookahead through `BeginCode`, so it must see the elided
//! stream.

use crate::token::{Token, TokenType};
use stencil_shared::strings;

/// Runs the three passes in their required order
pub fn postprocess(tokens: Vec<Token>) -> Vec<Token> {
    promote_sigils(elide_empty_blocks(apply_trim_markers(tokens)))
}

/// Applies `{{-` and `-}}` markers to the adjacent text tokens
///
/// A `Text` before `BeginCodeTrim` loses its trailing whitespace; a `Text`
/// after `EndCodeTrim` loses its leading whitespace. Both markers are
/// rewritten to their plain forms. A text trimmed to emptiness is kept as an
/// empty `Text` token.
pub fn apply_trim_markers(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut last: Option<Token> = None;

    for tok in tokens {
        match tok.token_type {
            TokenType::BeginCodeTrim => {
                if let Some(prev) = last.take() {
                    if prev.token_type == TokenType::Text {
                        let trimmed = strings::trim_end(&prev.value, strings::DEFAULT_SPACE);
                        result.push(prev.with_value(trimmed));
                    } else {
                        result.push(prev);
                    }
                }
                last = Some(tok.with_type(TokenType::BeginCode));
            }
            TokenType::Text
                if matches!(&last, Some(prev) if prev.token_type == TokenType::EndCodeTrim) =>
            {
                if let Some(prev) = last.take() {
                    result.push(prev.with_type(TokenType::EndCode));
                }
                let trimmed = strings::trim_start(&tok.value, strings::DEFAULT_SPACE);
                last = Some(tok.with_value(trimmed));
            }
            _ => {
                if let Some(prev) = last.take() {
                    result.push(prev);
                }
                last = Some(tok);
            }
        }
    }

    if let Some(prev) = last {
        result.push(prev);
    }
    result
}

/// Drops adjacent `BeginCode EndCode` pairs, so `{{}}` contributes nothing
pub fn elide_empty_blocks(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut last: Option<Token> = None;

    for tok in tokens {
        if tok.token_type == TokenType::EndCode
            && matches!(&last, Some(prev) if prev.token_type == TokenType::BeginCode)
        {
            last = None;
            continue;
        }

        if let Some(prev) = last.take() {
            result.push(prev);
        }
        last = Some(tok);
    }

    if let Some(prev) = last {
        result.push(prev);
    }
    result
}

/// Rewrites directive sigils directly after `BeginCode` into keywords
///
/// `/` becomes `KeywordEnd` and swallows an immediately following `Ident`
/// (so `{{/songs}}` and `{{end}}` both close a block with no remaining
/// name), `#` becomes `KeywordRange` and `?` becomes `KeywordIf`.
pub fn promote_sigils(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut last: Option<Token> = None;
    let mut eat_ident = false;

    for tok in tokens {
        if eat_ident {
            eat_ident = false;
            if tok.token_type == TokenType::Ident {
                continue;
            }
        }

        let follows_begin =
            matches!(&last, Some(prev) if prev.token_type == TokenType::BeginCode);
        match tok.token_type {
            TokenType::Slash if follows_begin => {
                if let Some(prev) = last.take() {
                    result.push(prev);
                }
                last = Some(tok.with_type(TokenType::KeywordEnd));
                eat_ident = true;
            }
            TokenType::Hash if follows_begin => {
                if let Some(prev) = last.take() {
                    result.push(prev);
                }
                last = Some(tok.with_type(TokenType::KeywordRange));
            }
            TokenType::QuestionMark if follows_begin => {
                if let Some(prev) = last.take() {
                    result.push(prev);
                }
                last = Some(tok.with_type(TokenType::KeywordIf));
            }
            _ => {
                if let Some(prev) = last.take() {
                    result.push(prev);
                }
                last = Some(tok);
            }
        }
    }

    if let Some(prev) = last {
        result.push(prev);
    }
    result
}
