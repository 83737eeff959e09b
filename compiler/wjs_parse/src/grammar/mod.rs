//! Grammar productions.
//!
//! Each module extends `Parser` with the methods for one part of the
//! grammar:
//!
//! - `stmt`: `let`, assignment and expression statements
//! - `expr`: precedence climbing, unary, postfix and primary expressions
//! - `template`: splitting template literals into text and interpolations

mod expr;
mod stmt;
mod template;
