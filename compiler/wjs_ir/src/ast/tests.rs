use super::*;
use pretty_assertions::assert_eq;

fn pos(line: u32, column: u32) -> Position {
    Position::new("t.wjs".into(), line, column, 0)
}

fn ident(name: &str) -> Expr {
    Expr::new(ExprKind::Ident(name.to_string()), pos(1, 1))
}

fn int(n: i64) -> Expr {
    Expr::new(ExprKind::Number(NumberLit::Int(n)), pos(1, 1))
}

fn float(x: f64) -> Expr {
    Expr::new(ExprKind::Number(NumberLit::Float(x)), pos(1, 1))
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        pos(1, 3),
    )
}

fn member(object: Expr, field: &str) -> Expr {
    Expr::new(
        ExprKind::Member {
            object: Box::new(object),
            field: Ident::new(field, pos(1, 3)),
        },
        pos(1, 2),
    )
}

fn program(statements: Vec<Stmt>) -> Program {
    Program::new(statements, pos(1, 1))
}

fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::new(StmtKind::Expr(expr), pos(1, 1))
}

#[test]
fn assignable_targets() {
    assert!(ident("x").is_assignable());
    assert!(member(ident("m"), "tiles").is_assignable());
    assert!(!int(1).is_assignable());
    assert!(!binary(BinaryOp::Add, int(1), int(2)).is_assignable());
}

#[test]
fn dump_matches_tree_layout() {
    let call = Expr::new(
        ExprKind::Call {
            callee: Box::new(ident("print")),
            args: vec![ident("x"), Expr::new(ExprKind::Str("hi".into()), pos(1, 1))],
        },
        pos(1, 6),
    );
    let prog = program(vec![
        Stmt::new(
            StmtKind::Let {
                name: Ident::new("x", pos(1, 5)),
                value: binary(BinaryOp::Add, int(5), float(2.5)),
            },
            pos(1, 1),
        ),
        expr_stmt(call),
    ]);
    let expected = "\
Program
  LetStmt x =
    BinaryExpr \"+\"
      Number 5
      Number 2.5
  ExprStmt
    CallExpr
      Ident \"print\"
        Ident \"x\"
        String \"hi\"
";
    assert_eq!(dump(&prog), expected);
}

#[test]
fn dump_member_and_template() {
    let template = Expr::new(
        ExprKind::Template(vec![
            TemplatePart::Text {
                value: "v=".into(),
                pos: pos(1, 2),
            },
            TemplatePart::Interpolation {
                expr: Box::new(member(ident("m"), "size")),
                pos: pos(1, 4),
            },
        ]),
        pos(1, 1),
    );
    let expected = "\
Program
  ExprStmt
    Template
      Text \"v=\"
      Interpolation
        MemberExpr
          Ident \"m\"
          Ident \"size\"
";
    assert_eq!(dump(&program(vec![expr_stmt(template)])), expected);
}

#[test]
fn display_parenthesizes_operators() {
    let expr = binary(
        BinaryOp::Mul,
        binary(BinaryOp::Add, int(1), int(2)),
        Expr::new(
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(ident("x")),
            },
            pos(1, 1),
        ),
    );
    assert_eq!(expr.to_string(), "((1 + 2) * (-x))");
}

#[test]
fn display_keeps_float_kind() {
    assert_eq!(float(8.0).to_string(), "8.0");
    assert_eq!(float(0.25).to_string(), "0.25");
    assert_eq!(float(-1.5).to_string(), "(-1.5)");
    assert_eq!(int(-3).to_string(), "(-3)");
}

#[test]
fn display_escapes_strings_and_templates() {
    let s = Expr::new(ExprKind::Str("say \"hi\"\n".into()), pos(1, 1));
    assert_eq!(s.to_string(), r#""say \"hi\"\n""#);

    let t = Expr::new(
        ExprKind::Template(vec![
            TemplatePart::Text {
                value: "cost $".into(),
                pos: pos(1, 2),
            },
            TemplatePart::Interpolation {
                expr: Box::new(ident("n")),
                pos: pos(1, 8),
            },
        ]),
        pos(1, 1),
    );
    assert_eq!(t.to_string(), r"`cost \$${n}`");
}

#[test]
fn display_statements() {
    let prog = program(vec![
        Stmt::new(
            StmtKind::Let {
                name: Ident::new("m", pos(1, 5)),
                value: Expr::new(ExprKind::Null, pos(1, 9)),
            },
            pos(1, 1),
        ),
        Stmt::new(
            StmtKind::Assign {
                target: Expr::new(
                    ExprKind::Index {
                        target: Box::new(member(ident("m"), "tiles")),
                        index: Box::new(int(0)),
                    },
                    pos(2, 8),
                ),
                value: Expr::new(ExprKind::Bool(true), pos(2, 14)),
            },
            pos(2, 1),
        ),
    ]);
    assert_eq!(prog.to_string(), "let m = null;\nm.tiles[0] = true;\n");
}

#[test]
fn valid_program_passes() {
    let prog = program(vec![expr_stmt(binary(BinaryOp::Eq, ident("a"), int(1)))]);
    assert_eq!(check_valid(&prog), Ok(()));
}

#[test]
fn rejects_empty_let_name() {
    let prog = program(vec![Stmt::new(
        StmtKind::Let {
            name: Ident::new("", pos(2, 5)),
            value: int(1),
        },
        pos(2, 1),
    )]);
    let err = check_valid(&prog).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::MissingLetName);
    assert_eq!(
        err.to_string(),
        "invalid let statement: missing variable name at t.wjs:2:1"
    );
}

#[test]
fn rejects_literal_assignment_target() {
    let prog = program(vec![Stmt::new(
        StmtKind::Assign {
            target: int(1),
            value: ident("x"),
        },
        pos(3, 1),
    )]);
    let err = check_valid(&prog).unwrap_err();
    assert_eq!(
        err.kind,
        ValidationErrorKind::InvalidAssignmentTarget {
            found: "number literal"
        }
    );
    assert_eq!(err.pos, pos(3, 1));
}

#[test]
fn rejects_nested_empty_identifier() {
    let prog = program(vec![expr_stmt(binary(BinaryOp::Add, int(1), ident("")))]);
    let err = check_valid(&prog).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::EmptyIdentifier);
}

#[test]
fn rejects_empty_template_and_member_field() {
    let empty = Expr::new(ExprKind::Template(Vec::new()), pos(4, 2));
    let err = check_valid(&program(vec![expr_stmt(empty)])).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::EmptyTemplate);
    assert_eq!(err.pos, pos(4, 2));

    let err = check_valid(&program(vec![expr_stmt(member(ident("m"), ""))])).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::EmptyMemberField);
}

#[test]
fn reports_first_error_in_program_order() {
    let prog = program(vec![
        expr_stmt(ident("")),
        expr_stmt(Expr::new(ExprKind::Template(Vec::new()), pos(9, 9))),
    ]);
    let err = check_valid(&prog).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::EmptyIdentifier);
}
