use super::*;
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, at: u32) -> Token {
    Token::new(kind, Span::new(at, at + 1))
}

#[test]
fn empty_stream_has_single_end_run() {
    let runs: Vec<_> = Runs::new(&[]).collect();
    assert_eq!(
        runs,
        vec![Run {
            tokens: &[],
            boundary: Boundary::End
        }]
    );
}

#[test]
fn runs_split_at_each_brace() {
    let tokens = vec![
        tok(TokenKind::Word("export".into()), 0),
        tok(TokenKind::Open, 1),
        tok(TokenKind::Close, 2),
        tok(TokenKind::Close, 3),
        tok(TokenKind::Word("tail".into()), 4),
    ];
    let runs: Vec<_> = Runs::new(&tokens).collect();

    assert_eq!(runs.len(), 4);
    assert_eq!(runs[0].tokens, &tokens[0..1]);
    assert_eq!(runs[0].boundary, Boundary::Open(Span::new(1, 2)));
    assert!(runs[1].tokens.is_empty());
    assert_eq!(runs[1].boundary, Boundary::Close(Span::new(2, 3)));
    assert!(runs[2].tokens.is_empty());
    assert_eq!(runs[2].boundary, Boundary::Close(Span::new(3, 4)));
    assert_eq!(runs[3].tokens, &tokens[4..5]);
    assert_eq!(runs[3].boundary, Boundary::End);
}

#[test]
fn exhausted_iterator_stays_exhausted() {
    let tokens = vec![tok(TokenKind::Open, 0)];
    let mut runs = Runs::new(&tokens);
    assert!(runs.next().is_some());
    assert!(runs.next().is_some());
    assert_eq!(runs.next(), None);
    assert_eq!(runs.next(), None);
}

#[test]
fn run_count_is_brace_count_plus_one() {
    let tokens: Vec<Token> = (0..10)
        .map(|i| {
            let kind = if i % 3 == 0 {
                TokenKind::Open
            } else {
                TokenKind::Assign
            };
            tok(kind, i)
        })
        .collect();
    let braces = tokens.iter().filter(|t| t.kind.is_brace()).count();
    assert_eq!(Runs::new(&tokens).count(), braces + 1);
}
