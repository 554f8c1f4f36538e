//! Fact interpreter.
//!
//! Walks a scope tree in pre-order (a block's own instructions before its
//! children, children left to right) and recovers a [`FactSet`].
//!
//! Each block's instructions are classified by their first non-comment
//! token, the *starter*:
//!
//! | starter     | effect                                         |
//! |-------------|------------------------------------------------|
//! | `declare`   | next non-comment payload becomes `scope`       |
//! | `namespace` | next non-comment payload becomes `namespace`   |
//! | `interface` | next non-comment payload becomes `interface_name` |
//! | `export`    | nothing                                        |
//! | anything else | the whole list is scanned for member declarations |
//!
//! A keyword starter consumes only the token after it; anything else in
//! the same instruction list is ignored. Later values of `scope`,
//! `namespace`, and `interface_name` overwrite earlier ones.

mod members;

use procenv_ir::{Block, FactSet, Token};
use tracing::debug;

/// Keywords recognized in starter position.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Keyword {
    Declare,
    Namespace,
    Interface,
    Export,
}

impl Keyword {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "declare" => Some(Keyword::Declare),
            "namespace" => Some(Keyword::Namespace),
            "interface" => Some(Keyword::Interface),
            "export" => Some(Keyword::Export),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Declare => "declare",
            Keyword::Namespace => "namespace",
            Keyword::Interface => "interface",
            Keyword::Export => "export",
        }
    }
}

/// Interpret a scope tree.
///
/// Pure: the tree is not modified and the same tree always yields the
/// same facts.
#[tracing::instrument(level = "debug", skip_all)]
pub fn interpret(root: &Block) -> FactSet {
    let mut facts = FactSet::default();
    for (depth, block) in root.pre_order() {
        interpret_instructions(&block.instructions, depth, &mut facts);
    }
    debug!(
        scope = ?facts.scope,
        namespace = ?facts.namespace,
        interface = ?facts.interface_name,
        required = facts.required_variables.len(),
        optional = facts.optional_variables.len(),
        "interpreted"
    );
    facts
}

/// Classify one block's instructions and record what they declare.
fn interpret_instructions(instructions: &[Token], depth: usize, facts: &mut FactSet) {
    let mut meaningful = instructions.iter().filter(|t| !t.kind.is_comment());
    let Some(starter) = meaningful.next() else {
        return;
    };

    let Some(keyword) = starter.kind.payload().and_then(Keyword::parse) else {
        members::collect(instructions, facts);
        return;
    };

    let slot = match keyword {
        Keyword::Declare => &mut facts.scope,
        Keyword::Namespace => &mut facts.namespace,
        Keyword::Interface => &mut facts.interface_name,
        Keyword::Export => return,
    };

    match meaningful.next().and_then(|t| t.kind.payload()) {
        Some(value) => {
            debug!(keyword = keyword.as_str(), value, depth, "keyword");
            *slot = Some(value.to_string());
        }
        None => debug!(keyword = keyword.as_str(), depth, "keyword without a value"),
    }
}
