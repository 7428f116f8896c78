use crate::functions::{FuncArgument, FunctionRegistry};
use crate::lexer;
use crate::postprocess::postprocess;
use crate::token::{Token, TokenType};
use stencil_error::{Location, TemplateError, match_strings};
use stencil_ir::ast::{
    AttributeNode, FunctionCallNode, GroupNode, IfNode, IterateNode, Node, TextNode,
};
use stencil_shared::vfs::{DirectoryInfo, VfsRead};

/// Marker raised to reach the synchronize-on-error loop; the diagnostic
/// itself is recorded before the marker is returned, and the marker never
/// escapes the parser.
struct ParseAbort;

type ParseStep<T> = Result<T, ParseAbort>;

/// Parser that converts template tokens into an abstract syntax tree
struct Parser<'a> {
    /// The tokens being parsed, already post-processed
    tokens: Vec<Token>,
    /// Pipeline functions resolvable from templates
    functions: &'a FunctionRegistry,
    /// Resolves logical include names to paths
    include_dir: &'a dyn DirectoryInfo,
    /// Extension (with leading dot) appended when an include name has none
    default_extension: &'a str,
    /// Filesystem the includes are read through
    vfs: &'a dyn VfsRead,
    /// Current position in the token list
    current: usize,
    /// Errors collected during parsing
    errors: Vec<TemplateError>,
    /// Resolved paths of the includes currently being expanded
    include_stack: &'a [String],
}

/// Parses template tokens into an AST
///
/// The token stream is post-processed first (trim markers, empty-block
/// elision, sigil promotion). The root is always a group; when errors were
/// collected the returned tree is the `"Parsing failed"` stub text node.
/// Errors accumulate; parsing continues past each malformed directive.
///
/// ### Arguments
///
/// * `tokens` - The scanned tokens, ending with `Eof`
/// * `functions` - The registry pipeline calls resolve against
/// * `include_dir` - Maps include names to paths
/// * `default_extension` - Appended (with its leading dot) when an include
///   name does not resolve as written
/// * `vfs` - Filesystem used to read included templates
pub fn parse(
    tokens: Vec<Token>,
    functions: &FunctionRegistry,
    include_dir: &dyn DirectoryInfo,
    default_extension: &str,
    vfs: &dyn VfsRead,
) -> (Node, Vec<TemplateError>) {
    parse_with_includes(tokens, functions, include_dir, default_extension, vfs, &[])
}

fn parse_with_includes(
    tokens: Vec<Token>,
    functions: &FunctionRegistry,
    include_dir: &dyn DirectoryInfo,
    default_extension: &str,
    vfs: &dyn VfsRead,
    include_stack: &[String],
) -> (Node, Vec<TemplateError>) {
    let tokens = postprocess(tokens);

    #[cfg(feature = "print-tokens")]
    crate::token_printer::TokenPrinter::new().print(&tokens);

    if tokens.is_empty() {
        let root = Node::Group(GroupNode {
            nodes: Vec::new(),
            location: Location::unknown(),
        });
        return (root, Vec::new());
    }

    let parser = Parser {
        tokens,
        functions,
        include_dir,
        default_extension,
        vfs,
        current: 0,
        errors: Vec::new(),
        include_stack,
    };
    parser.parse()
}

impl<'a> Parser<'a> {
    /// Parses the whole token stream
    fn parse(mut self) -> (Node, Vec<TemplateError>) {
        let root = self.parse_group();
        if !self.is_at_end() {
            let message = self.expected_message("EOF");
            let location = self.peek().location.clone();
            self.report_error(location, message);
        }

        if self.errors.is_empty() {
            (root, self.errors)
        } else {
            let stub = Node::Text(TextNode {
                value: "Parsing failed".to_string(),
                location: Location::unknown(),
            });
            (stub, self.errors)
        }
    }

    /// Parses nodes until the end of input or a `{{end}}` closing the
    /// enclosing block
    fn parse_group(&mut self) -> Node {
        let start = self.peek().location.clone();
        let mut nodes = Vec::new();
        while !self.is_at_end()
            && !(self.peek().token_type == TokenType::BeginCode
                && self.peek_next_type() == TokenType::KeywordEnd)
        {
            if self.parse_node(&mut nodes).is_err() {
                self.synchronize();
            }
        }

        Node::Group(GroupNode {
            nodes,
            location: start,
        })
    }

    /// Records a diagnostic and hands back the abort marker
    fn report_error(&mut self, location: Location, message: impl Into<String>) -> ParseAbort {
        self.errors.push(TemplateError::new(location, message));
        ParseAbort
    }

    /// Skip until a safe synchronization point: just past the next `}}` or
    /// before the next text run, whichever comes first
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().token_type == TokenType::EndCode {
                return;
            }
            if self.peek().token_type == TokenType::Text {
                return;
            }
            self.advance();
        }
    }

    fn check(&self, token_type: TokenType) -> bool {
        !self.is_at_end() && self.peek().token_type == token_type
    }

    /// Consumes the current token when it has the given type
    fn match_token(&mut self, token_type: TokenType) -> bool {
        if !self.check(token_type) {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn peek_next_type(&self) -> TokenType {
        match self.tokens.get(self.current + 1) {
            Some(token) => token.token_type,
            None => TokenType::Eof,
        }
    }

    fn previous(&self) -> Token {
        self.tokens[self.current - 1].clone()
    }

    fn token_to_message(token: &Token) -> String {
        if token.token_type == TokenType::Text {
            token.token_type.to_string()
        } else {
            format!("{}: {}", token.token_type, token.lexeme)
        }
    }

    fn expected_message(&self, what: &str) -> String {
        format!("Expected {} but found {}", what, Self::token_to_message(self.peek()))
    }

    /// Consumes a token of the given type or aborts with `message`
    fn consume(&mut self, token_type: TokenType, message: String) -> ParseStep<Token> {
        if self.check(token_type) {
            return Ok(self.advance());
        }

        let location = self.peek().location.clone();
        Err(self.report_error(location, message))
    }

    fn parse_function_arg(&mut self) -> ParseStep<FuncArgument> {
        if self.peek().token_type != TokenType::Ident {
            let message = self.expected_message("identifier");
            let location = self.peek().location.clone();
            return Err(self.report_error(location, message));
        }

        let arg = self.advance();
        Ok(FuncArgument {
            location: arg.location,
            argument: arg.value,
        })
    }

    fn extract_attribute_name(&mut self) -> ParseStep<String> {
        let message = self.expected_message("IDENT");
        let ident = self.consume(TokenType::Ident, message)?;
        Ok(ident.value)
    }

    /// Parses one node and appends it to `nodes`
    fn parse_node(&mut self, nodes: &mut Vec<Node>) -> ParseStep<()> {
        match self.peek().token_type {
            TokenType::BeginCode => {
                let start = self.peek().location.clone();
                self.advance();

                if self.match_token(TokenType::KeywordRange) {
                    let (name, group) = self.parse_block_body()?;
                    nodes.push(Node::Iterate(IterateNode {
                        name,
                        body: Box::new(group),
                        location: start,
                    }));
                } else if self.match_token(TokenType::KeywordIf) {
                    let (name, group) = self.parse_block_body()?;
                    nodes.push(Node::If(IfNode {
                        name,
                        body: Box::new(group),
                        location: start,
                    }));
                } else if self.match_token(TokenType::KeywordInclude) {
                    self.parse_include(nodes)?;
                } else {
                    self.parse_attribute_to_end(nodes)?;
                }
                Ok(())
            }
            TokenType::Text => {
                let text = self.advance();
                nodes.push(Node::Text(TextNode {
                    value: text.value,
                    location: text.location,
                }));
                Ok(())
            }
            _ => {
                let message = format!("Unexpected token {}", Self::token_to_message(self.peek()));
                let location = self.peek().location.clone();
                Err(self.report_error(location, message))
            }
        }
    }

    /// Parses `name }} … {{ end }}` shared by the range and if directives
    fn parse_block_body(&mut self) -> ParseStep<(String, Node)> {
        let attribute = self.extract_attribute_name()?;
        let message = self.expected_message("}}");
        self.consume(TokenType::EndCode, message)?;

        let group = self.parse_group();
        let message = self.expected_message("{{");
        self.consume(TokenType::BeginCode, message)?;
        let message = self.expected_message("keyword end");
        self.consume(TokenType::KeywordEnd, message)?;
        let message = self.expected_message("}}");
        self.consume(TokenType::EndCode, message)?;

        Ok((attribute, group))
    }

    /// Expands an include directive in place
    ///
    /// The included file is resolved first as written, then with the default
    /// extension appended. Its scan or parse errors are prefixed with a
    /// synthetic error at the include site and appended verbatim.
    fn parse_include(&mut self, nodes: &mut Vec<Node>) -> ParseStep<()> {
        let message = self.expected_message("IDENT");
        let name = self.consume(TokenType::Ident, message)?;
        let include_location = self.peek().location.clone();
        let message = self.expected_message("}}");
        self.consume(TokenType::EndCode, message)?;

        let first_file = self.include_dir.get_file(&name.value);
        let mut file = first_file.clone();
        let mut second_file = first_file.clone();
        if !self.vfs.exists(&file) {
            second_file = self
                .include_dir
                .get_file(&format!("{}{}", name.value, self.default_extension));
            file = second_file.clone();
        }

        if !self.vfs.exists(&file) {
            self.report_error(
                include_location,
                format!("Unable to open file: tried {first_file} and {second_file}"),
            );
            return Ok(());
        }

        if self.include_stack.contains(&file) {
            self.report_error(
                include_location,
                format!("Include cycle detected: {file}"),
            );
            return Ok(());
        }

        let source = match self.vfs.read_all_text(&file) {
            Ok(source) => source,
            Err(err) => {
                self.report_error(include_location, format!("Unable to read file: {err}"));
                return Ok(());
            }
        };

        let (scanner_tokens, lexer_errors) = lexer::scan(&file, &source);
        if !lexer_errors.is_empty() {
            self.report_error(include_location, "included from here...");
            self.errors.extend(lexer_errors);
            return Ok(());
        }

        let mut stack = self.include_stack.to_vec();
        stack.push(file);
        let (node, parse_errors) = parse_with_includes(
            scanner_tokens,
            self.functions,
            self.include_dir,
            self.default_extension,
            self.vfs,
            &stack,
        );
        if !parse_errors.is_empty() {
            self.report_error(include_location, "included from here...");
            self.errors.extend(parse_errors);
            return Ok(());
        }

        nodes.push(node);
        Ok(())
    }

    /// Parses an attribute and its pipeline up to the closing `}}`
    fn parse_attribute_to_end(&mut self, nodes: &mut Vec<Node>) -> ParseStep<()> {
        let start = self.peek().location.clone();
        let mut node = Node::Attribute(AttributeNode {
            name: self.extract_attribute_name()?,
            location: start,
        });

        while self.peek().token_type == TokenType::Pipe {
            self.advance();
            let message = self.expected_message("function name");
            let name = self.consume(TokenType::Ident, message)?;

            let mut arguments = Vec::new();
            if self.match_token(TokenType::LeftParen) {
                while self.peek().token_type != TokenType::RightParen && !self.is_at_end() {
                    arguments.push(self.parse_function_arg()?);

                    if self.peek().token_type != TokenType::RightParen {
                        let message =
                            self.expected_message("comma for the next function argument");
                        self.consume(TokenType::Comma, message)?;
                    }
                }

                let message = self.expected_message(") to end function");
                self.consume(TokenType::RightParen, message)?;
            }

            match self.functions.get(&name.value) {
                Some(generator) => {
                    let (func, func_parse_errors) = generator(&name.location, &arguments);
                    self.errors.extend(func_parse_errors);
                    node = Node::FunctionCall(FunctionCallNode {
                        name: name.value,
                        function: func,
                        arg: Box::new(node),
                        location: name.location,
                    });
                }
                None => {
                    let suggestions = match_strings(&name.value, &self.functions.names());
                    self.report_error(
                        name.location,
                        format!("Unknown function named {}: {}", name.value, suggestions),
                    );
                }
            }
        }
        nodes.push(node);

        let message = self.expected_message("end token");
        self.consume(TokenType::EndCode, message)?;
        Ok(())
    }
}
