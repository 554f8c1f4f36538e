use super::*;
use pretty_assertions::assert_eq;
use procenv_ir::TokenKind;

fn tree(source: &str) -> Result<Block, ParseError> {
    let tokens = procenv_lexer::tokenize(source)
        .unwrap_or_else(|err| panic!("lex error in test source {source:?}: {err}"));
    build_tree(&tokens)
}

fn ok_tree(source: &str) -> Block {
    tree(source).unwrap_or_else(|err| panic!("parse error for {source:?}: {err}"))
}

fn words(block: &Block) -> Vec<&str> {
    block
        .instructions
        .iter()
        .filter_map(|t| t.kind.payload())
        .collect()
}

#[test]
fn empty_input_is_bare_root() {
    let root = ok_tree("");
    assert_eq!(root, Block::new());
}

#[test]
fn process_env_tree_shape() {
    let root = ok_tree(
        "declare global { namespace NodeJS { interface ProcessEnv { \
         DEV_PORT?: string TZ: string } } }",
    );
    assert!(root.instructions.is_empty());
    assert_eq!(root.children.len(), 1);

    let group = &root.children[0];
    assert_eq!(words(group), vec!["declare", "global"]);
    assert_eq!(group.open, None);
    assert_eq!(group.children.len(), 1);

    let global_body = &group.children[0];
    assert_eq!(words(global_body), vec!["namespace", "NodeJS"]);
    assert_eq!(global_body.open, Some(Span::new(15, 16)));

    let ns_body = &global_body.children[0];
    assert_eq!(words(ns_body), vec!["interface", "ProcessEnv"]);

    let iface_body = &ns_body.children[0];
    assert_eq!(words(iface_body), vec!["DEV_PORT", "string", "TZ", "string"]);
    assert_eq!(iface_body.instructions.len(), 7);
    assert!(iface_body.children.is_empty());
}

#[test]
fn each_top_level_statement_is_a_group() {
    let root = ok_tree("declare global { }\n\nexport { }");
    assert!(root.instructions.is_empty());
    assert_eq!(root.children.len(), 2);
    assert_eq!(words(&root.children[0]), vec!["declare", "global"]);
    assert_eq!(words(&root.children[1]), vec!["export"]);
    assert_eq!(root.children[1].children, vec![Block::braced(Span::new(27, 28))]);
}

#[test]
fn bare_braces_at_top_level_form_empty_group() {
    let root = ok_tree("{ A: x }");
    assert_eq!(root.children.len(), 1);
    let group = &root.children[0];
    assert!(group.instructions.is_empty());
    assert_eq!(words(&group.children[0]), vec!["A", "x"]);
}

#[test]
fn trailing_top_level_tokens_form_a_group() {
    let root = ok_tree("export { }\nTZ: string");
    assert_eq!(root.children.len(), 2);
    assert_eq!(words(&root.children[1]), vec!["TZ", "string"]);
    assert!(root.children[1].children.is_empty());
}

#[test]
fn sibling_blocks_keep_source_order() {
    let root = ok_tree("a { b { } c { } d { } }");
    let a_body = &root.children[0].children[0];
    let names: Vec<Vec<&str>> = a_body.children.iter().map(words).collect();
    assert_eq!(names, vec![Vec::<&str>::new(), vec![], vec![]]);
    assert_eq!(words(a_body), vec!["b", "c", "d"]);
    assert_eq!(a_body.children.len(), 3);
}

#[test]
fn instructions_after_child_stay_with_parent() {
    let root = ok_tree("x { A: y { } B?: z }");
    let body = &root.children[0].children[0];
    assert_eq!(words(body), vec!["A", "y", "B", "z"]);
    assert_eq!(body.children.len(), 1);
}

#[test]
fn unclosed_scope_reports_innermost_brace() {
    let err = tree("declare global { namespace NodeJS {").err();
    assert_eq!(err, Some(ParseError::unclosed_scope(Span::new(34, 35), 2)));
}

#[test]
fn excess_close_is_rejected() {
    let err = tree("export { } }").err();
    assert_eq!(err, Some(ParseError::unexpected_close(Span::new(11, 12))));

    let err = tree("TZ: string }").err();
    assert_eq!(err, Some(ParseError::unexpected_close(Span::new(11, 12))));
}

#[test]
fn comments_are_kept_as_instructions() {
    let root = ok_tree("x { /** doc */ A: y }");
    let body = &root.children[0].children[0];
    assert!(body.instructions[0].kind.is_comment());
}

mod proptest_balance {
    use super::super::{build_tree, ParseErrorKind};
    use procenv_ir::{Block, Token, TokenKind};
    use proptest::prelude::*;

    #[derive(Clone, Copy, Debug)]
    enum Op {
        Open,
        Close,
        Word,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Open), Just(Op::Close), Just(Op::Word)]
    }

    /// Turn random ops into a properly nested token stream.
    fn balanced(ops: &[Op]) -> Vec<Token> {
        let mut depth = 0usize;
        let mut out = Vec::new();
        for (i, op) in ops.iter().enumerate() {
            let kind = match op {
                Op::Open => {
                    depth += 1;
                    TokenKind::Open
                }
                Op::Close if depth > 0 => {
                    depth -= 1;
                    TokenKind::Close
                }
                Op::Close | Op::Word => TokenKind::Word(format!("w{i}")),
            };
            out.push(Token::dummy(kind));
        }
        out.extend((0..depth).map(|_| Token::dummy(TokenKind::Close)));
        out
    }

    fn instruction_count(root: &Block) -> usize {
        root.pre_order().map(|(_, b)| b.instructions.len()).sum()
    }

    fn braced_count(root: &Block) -> usize {
        root.pre_order().filter(|(_, b)| b.open.is_some()).count()
    }

    proptest! {
        #[test]
        fn balanced_streams_build(ops in proptest::collection::vec(arb_op(), 0..60)) {
            let tokens = balanced(&ops);
            let root = build_tree(&tokens);
            prop_assert!(root.is_ok(), "{:?}", root);
            let root = root.unwrap_or_default();

            let opens = tokens.iter().filter(|t| t.kind == TokenKind::Open).count();
            let non_brace = tokens.iter().filter(|t| !t.kind.is_brace()).count();
            prop_assert!(root.instructions.is_empty());
            prop_assert_eq!(braced_count(&root), opens);
            prop_assert_eq!(instruction_count(&root), non_brace);
        }

        #[test]
        fn extra_open_is_unclosed(
            ops in proptest::collection::vec(arb_op(), 0..60),
            at in any::<prop::sample::Index>(),
        ) {
            let mut tokens = balanced(&ops);
            let idx = at.index(tokens.len() + 1);
            tokens.insert(idx, Token::dummy(TokenKind::Open));
            let err = build_tree(&tokens);
            prop_assert!(err.is_err());
            if let Err(err) = err {
                prop_assert_eq!(err.kind, ParseErrorKind::UnclosedScope { unclosed: 1 });
            }
        }
    }
}

#[test]
fn structural_tokens_never_become_instructions() {
    let root = ok_tree("a { b { c } } d { }");
    for (_, block) in root.pre_order() {
        assert!(block.instructions.iter().all(|t| !t.kind.is_brace()));
        assert!(block
            .instructions
            .iter()
            .all(|t| !matches!(t.kind, TokenKind::Open | TokenKind::Close)));
    }
}
