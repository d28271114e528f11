//! Expression code generation.
//!
//! Every expression form lowers to the VM instruction sequence spec.md
//! §4.5 specifies. Arithmetic is entirely stack-based: operands are
//! pushed left-to-right and the operator instruction (or `call
//! Math.multiply/divide`) consumes them off the top of the stack.

use super::error::CodegenError;
use super::{Codegen, segment_for};
use crate::ast::{Expr, ExprKind, InfixOp, KeywordConstant, PrefixOp, SubroutineCall};
use crate::vm::{Arithmetic, Segment};

impl Codegen {
    /// Emits the VM instructions that leave `expr`'s value on top of the
    /// stack.
    pub(super) fn compile_expr(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match &expr.kind {
            ExprKind::IntegerConstant(value) => {
                self.writer.push(Segment::Constant, *value as usize);
                Ok(())
            }
            ExprKind::StringConstant(value) => self.compile_string_constant(value),
            ExprKind::KeywordConstant(kw) => self.compile_keyword_constant(*kw),
            ExprKind::Identifier { name, index } => {
                self.compile_identifier(name, index.as_deref(), expr.span)
            }
            ExprKind::Prefix { op, operand } => self.compile_prefix(*op, operand),
            ExprKind::Infix { op, left, right } => self.compile_infix(*op, left, right),
            ExprKind::SubroutineCall(call) => self.compile_call(call, expr.span),
        }
    }

    /// `push constant len(s); call String.new 1; (push constant c; call
    /// String.appendChar 2)*`. Characters are the raw byte values of the
    /// source text; no encoding conversion happens here (spec.md §9).
    fn compile_string_constant(&mut self, value: &str) -> Result<(), CodegenError> {
        self.writer.push(Segment::Constant, value.len());
        self.writer.call("String.new", 1);
        for byte in value.bytes() {
            self.writer.push(Segment::Constant, byte as usize);
            self.writer.call("String.appendChar", 2);
        }
        Ok(())
    }

    fn compile_keyword_constant(&mut self, kw: KeywordConstant) -> Result<(), CodegenError> {
        match kw {
            KeywordConstant::True => {
                self.writer.push(Segment::Constant, 1);
                self.writer.arithmetic(Arithmetic::Neg);
            }
            KeywordConstant::False => self.writer.push(Segment::Constant, 0),
            KeywordConstant::Null => self.writer.push(Segment::Constant, 0),
            KeywordConstant::This => self.writer.push(Segment::Pointer, 0),
        }
        Ok(())
    }

    fn compile_identifier(
        &mut self,
        name: &str,
        index: Option<&Expr>,
        span: crate::token::Span,
    ) -> Result<(), CodegenError> {
        let kind = self
            .symbol_table
            .kind_of(name)
            .ok_or_else(|| CodegenError::unresolved_identifier(name, span))?;
        let var_index = self
            .symbol_table
            .index_of(name)
            .ok_or_else(|| CodegenError::unresolved_identifier(name, span))?;
        let segment = segment_for(kind);

        match index {
            None => {
                self.writer.push(segment, var_index);
            }
            Some(index_expr) => {
                self.writer.push(segment, var_index);
                self.compile_expr(index_expr)?;
                self.writer.arithmetic(Arithmetic::Add);
                self.writer.pop(Segment::Pointer, 1);
                self.writer.push(Segment::That, 0);
            }
        }
        Ok(())
    }

    fn compile_prefix(&mut self, op: PrefixOp, operand: &Expr) -> Result<(), CodegenError> {
        self.compile_expr(operand)?;
        self.writer.arithmetic(match op {
            PrefixOp::Neg => Arithmetic::Neg,
            PrefixOp::Not => Arithmetic::Not,
        });
        Ok(())
    }

    fn compile_infix(
        &mut self,
        op: InfixOp,
        left: &Expr,
        right: &Expr,
    ) -> Result<(), CodegenError> {
        self.compile_expr(left)?;
        self.compile_expr(right)?;
        match op {
            InfixOp::Add => self.writer.arithmetic(Arithmetic::Add),
            InfixOp::Sub => self.writer.arithmetic(Arithmetic::Sub),
            InfixOp::And => self.writer.arithmetic(Arithmetic::And),
            InfixOp::Or => self.writer.arithmetic(Arithmetic::Or),
            InfixOp::Lt => self.writer.arithmetic(Arithmetic::Lt),
            InfixOp::Gt => self.writer.arithmetic(Arithmetic::Gt),
            InfixOp::Eq => self.writer.arithmetic(Arithmetic::Eq),
            InfixOp::Mul => self.writer.call("Math.multiply", 2),
            InfixOp::Div => self.writer.call("Math.divide", 2),
        }
        Ok(())
    }

    /// Emits one of the three subroutine call shapes spec.md §4.5
    /// describes: a bare self-method call, a variable-receiver method
    /// call, or a bare-class-name static call. Only the symbol table can
    /// tell a variable receiver from a class name — the parser leaves
    /// both as the same `SubroutineCall { receiver: Some(_), .. }` shape.
    pub(super) fn compile_call(
        &mut self,
        call: &SubroutineCall,
        span: crate::token::Span,
    ) -> Result<(), CodegenError> {
        match &call.receiver {
            None => {
                self.writer.push(Segment::Pointer, 0);
                for arg in &call.args {
                    self.compile_expr(arg)?;
                }
                self.writer.call(
                    &format!("{}.{}", self.class_name, call.name),
                    call.args.len() + 1,
                );
            }
            Some(receiver) => {
                if let Some(kind) = self.symbol_table.kind_of(receiver) {
                    let var_index = self
                        .symbol_table
                        .index_of(receiver)
                        .ok_or_else(|| CodegenError::unresolved_identifier(receiver, span))?;
                    let ty = self
                        .symbol_table
                        .type_of(receiver)
                        .ok_or_else(|| CodegenError::unresolved_identifier(receiver, span))?
                        .to_string();

                    self.writer.push(segment_for(kind), var_index);
                    for arg in &call.args {
                        self.compile_expr(arg)?;
                    }
                    self.writer
                        .call(&format!("{ty}.{}", call.name), call.args.len() + 1);
                } else {
                    for arg in &call.args {
                        self.compile_expr(arg)?;
                    }
                    self.writer
                        .call(&format!("{receiver}.{}", call.name), call.args.len());
                }
            }
        }
        Ok(())
    }
}
