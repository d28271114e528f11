//! Expression nodes for the Jack AST.

use crate::token::Span;

/// One of the four keyword constants Jack allows as a standalone term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordConstant {
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `this`
    This,
}

/// A unary operator. Binds tighter than any infix operator by virtue of
/// being parsed inside term parsing rather than the infix loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    /// `-x`
    Neg,
    /// `~x`
    Not,
}

/// One of Jack's flat, equal-precedence binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `&`
    And,
    /// `|`
    Or,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `=`
    Eq,
}

/// A subroutine call, in any of the three shapes the grammar allows:
/// a bare `name(args)` self-call, or a `receiver.name(args)` call whose
/// receiver may turn out at codegen time to be a variable (method call)
/// or a bare class name (function call) — the parser cannot tell these
/// apart, only the symbol table can, so both are represented uniformly.
#[derive(Debug, Clone)]
pub struct SubroutineCall {
    /// Present iff the source used the `X.y(...)` form.
    pub receiver: Option<String>,
    /// The subroutine identifier being called.
    pub name: String,
    /// The argument expressions, in source order.
    pub args: Vec<Expr>,
}

/// The kind of an expression in the Jack language.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// An integer literal. The lexeme is validated to fit the target
    /// word size when this node is constructed; see
    /// [`crate::lexer::LexError`].
    IntegerConstant(i32),

    /// A string literal's contents. Character codes are emitted as raw
    /// bytes during code generation; no encoding conversion happens here.
    StringConstant(String),

    /// One of `true | false | null | this`.
    KeywordConstant(KeywordConstant),

    /// A variable or array-element reference. `index` is `Some` for
    /// `name[expr]` (an array access) and `None` for a scalar reference.
    Identifier {
        /// The referenced name.
        name: String,
        /// The optional array index expression.
        index: Option<Box<Expr>>,
    },

    /// A unary-prefixed expression (`-x` or `~x`).
    Prefix {
        /// The operator.
        op: PrefixOp,
        /// The operand.
        operand: Box<Expr>,
    },

    /// A binary expression with one of Jack's flat-precedence operators.
    Infix {
        /// The operator.
        op: InfixOp,
        /// The left operand.
        left: Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },

    /// A subroutine call used as an expression.
    SubroutineCall(SubroutineCall),
}

/// An expression in the Jack language with source location.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source location of this expression.
    pub span: Span,
}

impl Expr {
    /// Creates a new expression with the given kind and span.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}
