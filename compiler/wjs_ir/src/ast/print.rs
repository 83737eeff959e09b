//! AST printers.
//!
//! Two renderings:
//! - `dump` writes the indented tree used by debug output.
//! - `Display` writes source text that parses back to an equivalent tree.
//!   Binary and unary expressions are always parenthesized and floats always
//!   carry a fractional part, so precedence and numeric kind survive the
//!   round trip.

use super::{Expr, ExprKind, NumberLit, Program, Stmt, StmtKind, TemplatePart};
use std::fmt::{self, Write};

const INDENT: &str = "  ";

/// Render the program as an indented tree, one node per line.
pub fn dump(program: &Program) -> String {
    let mut out = String::from("Program\n");
    for stmt in &program.statements {
        dump_stmt(&mut out, stmt, 1);
    }
    out
}

fn line(out: &mut String, indent: usize, text: fmt::Arguments<'_>) {
    for _ in 0..indent {
        out.push_str(INDENT);
    }
    // Writing to a String cannot fail.
    let _ = out.write_fmt(text);
    out.push('\n');
}

fn dump_stmt(out: &mut String, stmt: &Stmt, indent: usize) {
    match &stmt.kind {
        StmtKind::Let { name, value } => {
            line(out, indent, format_args!("LetStmt {} =", name.name));
            dump_expr(out, value, indent + 1);
        }
        StmtKind::Assign { target, value } => {
            line(out, indent, format_args!("AssignStmt"));
            dump_expr(out, target, indent + 1);
            dump_expr(out, value, indent + 1);
        }
        StmtKind::Expr(value) => {
            line(out, indent, format_args!("ExprStmt"));
            dump_expr(out, value, indent + 1);
        }
    }
}

fn dump_expr(out: &mut String, expr: &Expr, indent: usize) {
    match &expr.kind {
        ExprKind::Ident(name) => line(out, indent, format_args!("Ident {name:?}")),
        ExprKind::Number(NumberLit::Int(n)) => line(out, indent, format_args!("Number {n}")),
        ExprKind::Number(NumberLit::Float(f)) => line(out, indent, format_args!("Number {f}")),
        ExprKind::Str(value) => line(out, indent, format_args!("String {value:?}")),
        ExprKind::Bool(b) => line(out, indent, format_args!("Boolean {b}")),
        ExprKind::Null => line(out, indent, format_args!("Null")),
        ExprKind::Template(parts) => {
            line(out, indent, format_args!("Template"));
            for part in parts {
                match part {
                    TemplatePart::Text { value, .. } => {
                        line(out, indent + 1, format_args!("Text {value:?}"));
                    }
                    TemplatePart::Interpolation { expr, .. } => {
                        line(out, indent + 1, format_args!("Interpolation"));
                        dump_expr(out, expr, indent + 2);
                    }
                }
            }
        }
        ExprKind::Binary { op, left, right } => {
            line(out, indent, format_args!("BinaryExpr {:?}", op.symbol()));
            dump_expr(out, left, indent + 1);
            dump_expr(out, right, indent + 1);
        }
        ExprKind::Unary { op, operand } => {
            line(out, indent, format_args!("UnaryExpr {:?}", op.symbol()));
            dump_expr(out, operand, indent + 1);
        }
        ExprKind::Call { callee, args } => {
            line(out, indent, format_args!("CallExpr"));
            dump_expr(out, callee, indent + 1);
            // Arguments sit one level below the callee.
            for arg in args {
                dump_expr(out, arg, indent + 2);
            }
        }
        ExprKind::Member { object, field } => {
            line(out, indent, format_args!("MemberExpr"));
            dump_expr(out, object, indent + 1);
            line(out, indent + 1, format_args!("Ident {:?}", field.name));
        }
        ExprKind::Index { target, index } => {
            line(out, indent, format_args!("IndexExpr"));
            dump_expr(out, target, indent + 1);
            dump_expr(out, index, indent + 1);
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {} = {value};", name.name),
            StmtKind::Assign { target, value } => write!(f, "{target} = {value};"),
            StmtKind::Expr(value) => write!(f, "{value};"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Ident(name) => f.write_str(name),
            ExprKind::Number(n) => write_number(f, *n),
            ExprKind::Str(value) => write_quoted(f, value),
            ExprKind::Bool(b) => write!(f, "{b}"),
            ExprKind::Null => f.write_str("null"),
            ExprKind::Template(parts) => {
                f.write_char('`')?;
                for part in parts {
                    match part {
                        TemplatePart::Text { value, .. } => write_template_text(f, value)?,
                        TemplatePart::Interpolation { expr, .. } => write!(f, "${{{expr}}}")?,
                    }
                }
                f.write_char('`')
            }
            ExprKind::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            ExprKind::Unary { op, operand } => write!(f, "({op}{operand})"),
            ExprKind::Call { callee, args } => {
                write!(f, "{callee}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_char(')')
            }
            ExprKind::Member { object, field } => write!(f, "{object}.{}", field.name),
            ExprKind::Index { target, index } => write!(f, "{target}[{index}]"),
        }
    }
}

/// Numbers have no sign in source; negative literals print as a negation.
fn write_number(f: &mut fmt::Formatter<'_>, n: NumberLit) -> fmt::Result {
    match n {
        NumberLit::Int(i) if i < 0 => write!(f, "(-{})", i.unsigned_abs()),
        NumberLit::Int(i) => write!(f, "{i}"),
        NumberLit::Float(x) if x.is_sign_negative() && x != 0.0 => {
            f.write_str("(-")?;
            write_float(f, -x)?;
            f.write_char(')')
        }
        NumberLit::Float(x) => write_float(f, x),
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let text = x.abs().to_string();
    f.write_str(&text)?;
    if x.is_finite() && !text.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn write_template_text(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for ch in value.chars() {
        match ch {
            '`' => f.write_str("\\`")?,
            '\\' => f.write_str("\\\\")?,
            '$' => f.write_str("\\$")?,
            '\r' => f.write_str("\\r")?,
            '\0' => f.write_str("\\0")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}
