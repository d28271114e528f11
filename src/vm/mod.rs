//! VM instruction text writer.
//!
//! [`Writer`] accumulates one VM instruction per line into an in-memory
//! buffer. It knows nothing about the AST or the symbol table — it only
//! knows how to format the nine VM instruction forms spec.md's output
//! grammar allows. The driver is the only thing that touches a file
//! handle; the writer hands back an owned [`String`] for the driver to
//! write in one shot (see `original_source/vmWriter/vmWriter.go`'s
//! `Out bytes.Buffer` + `Close` split, translated to a pure builder with
//! no I/O of its own).

/// A segment of the target VM's memory model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Argument,
    Local,
    Static,
    This,
    That,
    Pointer,
    Temp,
    Constant,
}

impl Segment {
    fn as_str(self) -> &'static str {
        match self {
            Segment::Argument => "argument",
            Segment::Local => "local",
            Segment::Static => "static",
            Segment::This => "this",
            Segment::That => "that",
            Segment::Pointer => "pointer",
            Segment::Temp => "temp",
            Segment::Constant => "constant",
        }
    }
}

/// One of the nine arithmetic/logical opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arithmetic {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

impl Arithmetic {
    fn as_str(self) -> &'static str {
        match self {
            Arithmetic::Add => "add",
            Arithmetic::Sub => "sub",
            Arithmetic::Neg => "neg",
            Arithmetic::Eq => "eq",
            Arithmetic::Gt => "gt",
            Arithmetic::Lt => "lt",
            Arithmetic::And => "and",
            Arithmetic::Or => "or",
            Arithmetic::Not => "not",
        }
    }
}

/// An append-only buffer of VM instruction text.
///
/// Every method appends exactly one `\n`-terminated line. Nothing is
/// written to disk until [`Writer::into_inner`] hands the finished text
/// to the caller.
#[derive(Default)]
pub struct Writer {
    out: String,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Writer::default()
    }

    /// `push <segment> <index>`
    pub fn push(&mut self, segment: Segment, index: usize) {
        self.out
            .push_str(&format!("push {} {}\n", segment.as_str(), index));
    }

    /// `pop <segment> <index>`
    pub fn pop(&mut self, segment: Segment, index: usize) {
        self.out
            .push_str(&format!("pop {} {}\n", segment.as_str(), index));
    }

    /// `<arith-op>`
    pub fn arithmetic(&mut self, op: Arithmetic) {
        self.out.push_str(op.as_str());
        self.out.push('\n');
    }

    /// `label <name>`
    pub fn label(&mut self, name: &str) {
        self.out.push_str(&format!("label {name}\n"));
    }

    /// `goto <name>`
    pub fn goto(&mut self, name: &str) {
        self.out.push_str(&format!("goto {name}\n"));
    }

    /// `if-goto <name>`
    pub fn if_goto(&mut self, name: &str) {
        self.out.push_str(&format!("if-goto {name}\n"));
    }

    /// `call <name> <n_args>`
    pub fn call(&mut self, name: &str, n_args: usize) {
        self.out.push_str(&format!("call {name} {n_args}\n"));
    }

    /// `function <name> <n_locals>`
    pub fn function_decl(&mut self, name: &str, n_locals: usize) {
        self.out.push_str(&format!("function {name} {n_locals}\n"));
    }

    /// `return`
    pub fn return_stmt(&mut self) {
        self.out.push_str("return\n");
    }

    /// Consumes the writer, returning the accumulated VM text.
    pub fn into_inner(self) -> String {
        self.out
    }
}
