//! Member declarations: `NAME : TYPE`, `NAME ? : TYPE`, `"NAME" : TYPE`.

use procenv_ir::{FactSet, Token, TokenKind};
use tracing::trace;

/// Scan an instruction list for member declarations.
///
/// The most recent `Word` or `Str` is the candidate name. At each `:` the
/// candidate is recorded, as optional when the token right before the
/// `:` is `?` and as required otherwise. Type tokens after the `:` become
/// the next candidate, so `A?: string B: string` yields `A` and `B`.
pub(crate) fn collect(instructions: &[Token], facts: &mut FactSet) {
    let mut candidate: Option<&str> = None;
    let mut previous: Option<&TokenKind> = None;

    for token in instructions {
        match &token.kind {
            TokenKind::Assign => match candidate {
                Some(name) => {
                    let optional = previous == Some(&TokenKind::Optional);
                    trace!(name, optional, span = ?token.span, "member");
                    if optional {
                        facts.add_optional(name);
                    } else {
                        facts.add_required(name);
                    }
                }
                None => trace!(span = ?token.span, "`:` without a member name"),
            },
            kind => {
                if let Some(name) = kind.name() {
                    candidate = Some(name);
                }
            }
        }
        previous = Some(&token.kind);
    }
}
