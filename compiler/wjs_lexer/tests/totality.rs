//! The lexer accepts any input: it always terminates with exactly one `Eof`
//! and never panics.

use proptest::prelude::*;
use wjs_lexer::{tokenize, Lexer};
use wjs_ir::TokenKind;

proptest! {
    #[test]
    fn any_input_ends_with_exactly_one_eof(source in any::<String>()) {
        let tokens = tokenize("", &source);
        prop_assert!(tokens.last().is_some_and(|t| t.kind == TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn script_like_input_ends_with_exactly_one_eof(
        source in r#"[a-z0-9 +*/%=<>!.,;:()\[\]{}"'`$\\\n-]{0,64}"#
    ) {
        let tokens = tokenize("gen.wjs", &source);
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        prop_assert!(tokens.last().is_some_and(|t| t.is_eof()));
    }

    #[test]
    fn positions_never_move_backwards(source in r"[a-z0-9 +=;\n]{0,64}") {
        let tokens: Vec<_> = Lexer::new("", &source).collect();
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].pos.offset <= pair[1].pos.offset);
            prop_assert!(
                (pair[0].pos.line, pair[0].pos.column) <= (pair[1].pos.line, pair[1].pos.column)
            );
        }
    }

    #[test]
    fn integer_literals_lex_as_one_number(n in 0u64..=u64::from(u32::MAX)) {
        let tokens = tokenize("", &n.to_string());
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].lexeme, &n.to_string());
    }
}
