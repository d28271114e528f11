//! Parser for the Jack programming language.
//!
//! This module provides the [`Parser`] struct which transforms a token
//! stream into a single [`Class`] AST node — Jack compiles one class per
//! source file, so there is no top-level "program" node above it.
//!
//! # Overview
//!
//! The parser is a one-token-lookahead recursive descent parser.
//! Expressions use a flat, equal-precedence loop rather than a
//! precedence-climbing scheme: Jack's grammar gives every binary operator
//! the same precedence and strict left-to-right associativity, so there
//! is nothing for a Pratt parser to climb.
//!
//! # Grammar
//!
//! ```text
//! class            → "class" className "{" classVarDec* subroutineDec* "}"
//! classVarDec      → ("static" | "field") type varName ("," varName)* ";"
//! type             → "int" | "char" | "boolean" | className
//! subroutineDec    → ("constructor" | "function" | "method")
//!                     ("void" | type) subroutineName
//!                     "(" parameterList ")" subroutineBody
//! parameterList    → ((type varName) ("," type varName)*)?
//! subroutineBody   → "{" varDec* statements "}"
//! varDec           → "var" type varName ("," varName)* ";"
//! statements       → statement*
//! statement        → letStatement | ifStatement | whileStatement
//!                   | doStatement | returnStatement
//! letStatement     → "let" varName ("[" expression "]")? "=" expression ";"
//! ifStatement      → "if" "(" expression ")" "{" statements "}"
//!                     ("else" "{" statements "}")?
//! whileStatement   → "while" "(" expression ")" "{" statements "}"
//! doStatement      → "do" subroutineCall ";"
//! returnStatement  → "return" expression? ";"
//! expression       → term (op term)*
//! term             → integerConstant | stringConstant | keywordConstant
//!                   | varName | varName "[" expression "]" | subroutineCall
//!                   | "(" expression ")" | unaryOp term
//! subroutineCall   → subroutineName "(" expressionList ")"
//!                   | (className | varName) "." subroutineName "(" expressionList ")"
//! expressionList   → (expression ("," expression)*)?
//! op               → "+" | "-" | "*" | "/" | "&" | "|" | "<" | ">" | "="
//! unaryOp          → "-" | "~"
//! keywordConstant  → "true" | "false" | "null" | "this"
//! ```
//!
//! # Examples
//!
//! ```
//! use jackc::lexer::Lexer;
//! use jackc::parser::Parser;
//!
//! let source = "class Main { function void main() { return; } }";
//! let tokens = Lexer::new(source).tokenize().unwrap();
//!
//! let mut parser = Parser::new(tokens);
//! let class = parser.parse().unwrap();
//!
//! assert_eq!(class.name, "Main");
//! assert_eq!(class.subroutine_decs.len(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token navigation and basic parsing operations
//! - `class` - Class and class-variable declaration parsing
//! - `subroutine` - Subroutine declaration, parameter, and body parsing
//! - `stmt` - Statement parsing
//! - `types` - Type annotation parsing
//! - `expr` - Expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::codegen`] - Consumes the AST to generate VM instructions

mod class;
mod error;
mod expr;
mod helpers;
mod stmt;
mod subroutine;
mod types;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::ast::Class;
use crate::token::Token;

/// A recursive descent parser for the Jack language.
///
/// The parser maintains a position within the token stream and provides
/// methods to parse various grammar productions.
///
/// # Usage
///
/// Create a parser with [`Parser::new`], then call [`Parser::parse`] to
/// produce a [`Class`].
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    /// Panics if the token list is empty. The lexer should always
    /// produce at least an Eof token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "token list must not be empty");
        Parser { tokens, pos: 0 }
    }

    /// Parses the entire token stream into a [`Class`].
    ///
    /// Anything left over after the class's closing brace — a second
    /// class, stray tokens, anything but `Eof` — is a fatal error: a
    /// Jack source file holds exactly one class.
    ///
    /// # Errors
    ///
    /// Returns an error for any grammar violation, for an out-of-range
    /// integer constant, for an illegal byte reaching the parser as a
    /// [`crate::token::TokenKind::Illegal`] token, or for trailing input
    /// after the class body.
    pub fn parse(&mut self) -> Result<Class, ParseError> {
        let class = self.parse_class()?;
        self.reject_illegal()?;
        if !self.is_eof() {
            return Err(ParseError::syntax(
                format!(
                    "expected end of input after class body, found {}",
                    self.current_kind().describe()
                ),
                self.current_span(),
            ));
        }
        Ok(class)
    }
}
