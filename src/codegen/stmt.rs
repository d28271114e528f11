//! Statement code generation.
//!
//! Each statement form lowers to the VM instruction sequence spec.md
//! §4.5 specifies. `If` and `While` synthesize branch labels from the
//! class-wide `if_counter`/`while_counter`, incrementing the relevant
//! counter *before* recursing into the nested block so that a while loop
//! nested inside an if (or vice versa) never collides with a label
//! generated by the outer statement or by a sibling statement later in
//! the same class.

use super::Codegen;
use super::error::CodegenError;
use crate::ast::{Stmt, StmtKind};
use crate::vm::{Arithmetic, Segment};

impl Codegen {
    /// Emits the VM instructions for a single statement.
    pub(super) fn compile_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match &stmt.kind {
            StmtKind::Let { name, index, value } => {
                self.compile_let(name, index.as_ref(), value, stmt.span)
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => self.compile_if(condition, then_branch, else_branch.as_deref()),
            StmtKind::While { condition, body } => self.compile_while(condition, body),
            StmtKind::Do(call) => self.compile_do(call, stmt.span),
            StmtKind::Return(value) => self.compile_return(value.as_ref()),
        }
    }

    /// Scalar: `<rhs>; pop <seg> <idx>`.
    ///
    /// Array: `push <seg> <idx>; <index-expr>; add; <rhs>; pop temp 0;
    /// pop pointer 1; push temp 0; pop that 0` — the five-instruction
    /// store idiom stashes the RHS value in `temp 0` before repointing
    /// `that`, so an RHS that itself reads through `that` (e.g. another
    /// array access) can't be clobbered by computing the target address
    /// first.
    fn compile_let(
        &mut self,
        name: &str,
        index: Option<&crate::ast::Expr>,
        value: &crate::ast::Expr,
        span: crate::token::Span,
    ) -> Result<(), CodegenError> {
        match index {
            None => {
                self.compile_expr(value)?;
                let kind = self
                    .symbol_table
                    .kind_of(name)
                    .ok_or_else(|| CodegenError::unresolved_identifier(name, span))?;
                let var_index = self
                    .symbol_table
                    .index_of(name)
                    .ok_or_else(|| CodegenError::unresolved_identifier(name, span))?;
                self.writer.pop(super::segment_for(kind), var_index);
            }
            Some(index_expr) => {
                let kind = self
                    .symbol_table
                    .kind_of(name)
                    .ok_or_else(|| CodegenError::unresolved_identifier(name, span))?;
                let var_index = self
                    .symbol_table
                    .index_of(name)
                    .ok_or_else(|| CodegenError::unresolved_identifier(name, span))?;

                self.writer.push(super::segment_for(kind), var_index);
                self.compile_expr(index_expr)?;
                self.writer.arithmetic(Arithmetic::Add);
                self.compile_expr(value)?;
                self.writer.pop(Segment::Temp, 0);
                self.writer.pop(Segment::Pointer, 1);
                self.writer.push(Segment::Temp, 0);
                self.writer.pop(Segment::That, 0);
            }
        }
        Ok(())
    }

    /// `<condition>; not; if-goto ELSE<n>; <then>; (goto IF<n>)?; label
    /// ELSE<n>; (<else>; label IF<n>)?`.
    fn compile_if(
        &mut self,
        condition: &crate::ast::Expr,
        then_branch: &[Stmt],
        else_branch: Option<&[Stmt]>,
    ) -> Result<(), CodegenError> {
        let n = self.if_counter;
        self.if_counter += 1;

        self.compile_expr(condition)?;
        self.writer.arithmetic(Arithmetic::Not);
        self.writer.if_goto(&format!("ELSE{n}"));

        for stmt in then_branch {
            self.compile_stmt(stmt)?;
        }

        if else_branch.is_some() {
            self.writer.goto(&format!("IF{n}"));
        }

        self.writer.label(&format!("ELSE{n}"));

        if let Some(else_stmts) = else_branch {
            for stmt in else_stmts {
                self.compile_stmt(stmt)?;
            }
            self.writer.label(&format!("IF{n}"));
        }

        Ok(())
    }

    /// `label WHILE<n>; <condition>; not; if-goto BREAK<n>; <body>; goto
    /// WHILE<n>; label BREAK<n>`.
    fn compile_while(
        &mut self,
        condition: &crate::ast::Expr,
        body: &[Stmt],
    ) -> Result<(), CodegenError> {
        let n = self.while_counter;
        self.while_counter += 1;

        self.writer.label(&format!("WHILE{n}"));
        self.compile_expr(condition)?;
        self.writer.arithmetic(Arithmetic::Not);
        self.writer.if_goto(&format!("BREAK{n}"));

        for stmt in body {
            self.compile_stmt(stmt)?;
        }

        self.writer.goto(&format!("WHILE{n}"));
        self.writer.label(&format!("BREAK{n}"));

        Ok(())
    }

    /// `<call>; pop temp 0` — every subroutine call leaves a return value
    /// on the stack (void subroutines return `0` by convention, per
    /// spec.md §9), which a `do` statement discards.
    fn compile_do(
        &mut self,
        call: &crate::ast::SubroutineCall,
        span: crate::token::Span,
    ) -> Result<(), CodegenError> {
        self.compile_call(call, span)?;
        self.writer.pop(Segment::Temp, 0);
        Ok(())
    }

    /// `<expr>?; return` — a bare `return;` pushes `constant 0` first, so
    /// every subroutine leaves exactly one value on the stack regardless
    /// of its declared return type.
    fn compile_return(&mut self, value: Option<&crate::ast::Expr>) -> Result<(), CodegenError> {
        match value {
            Some(expr) => self.compile_expr(expr)?,
            None => self.writer.push(Segment::Constant, 0),
        }
        self.writer.return_stmt();
        Ok(())
    }
}
