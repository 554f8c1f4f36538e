//! Inspection commands: `lex`, `tree`, and `facts`.

use std::io::{self, Write};
use std::path::Path;

use procenv_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use procenv_ir::{Block, FactSet, Token, TokenKind};
use tracing::debug;

use super::{load, report};
use crate::error::CheckError;

/// Write one line per token: `KIND("payload") @ start..end`.
pub fn render_tokens(tokens: &[Token], out: &mut impl Write) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "  {token:?}")?;
    }
    Ok(())
}

/// Write the tokens back as source text, one space between tokens.
///
/// Whitespace and skipped characters are normalized away. A line comment
/// is always followed by a newline so the output lexes to the same tokens.
pub fn render_canonical(tokens: &[Token], out: &mut impl Write) -> io::Result<()> {
    let mut at_line_start = true;
    for token in tokens {
        if !at_line_start {
            write!(out, " ")?;
        }
        write!(out, "{}", token.kind.to_source())?;
        at_line_start = matches!(&token.kind, TokenKind::Comment(text) if text.starts_with("//"));
        if at_line_start {
            writeln!(out)?;
        }
    }
    if !at_line_start {
        writeln!(out)?;
    }
    Ok(())
}

/// Write the scope tree, two spaces of indent per level.
///
/// Each block is headed by `root`, `group`, or `scope @ <span of {>`,
/// followed by its instructions.
pub fn render_tree(root: &Block, out: &mut impl Write) -> io::Result<()> {
    for (depth, block) in root.pre_order() {
        let indent = "  ".repeat(depth);
        match (depth, block.open) {
            (0, _) => writeln!(out, "{indent}root")?,
            (_, Some(span)) => writeln!(out, "{indent}scope @ {span}")?,
            (_, None) => writeln!(out, "{indent}group")?,
        }
        for token in &block.instructions {
            writeln!(out, "{indent}  {token:?}")?;
        }
    }
    Ok(())
}

/// Write the fact set, either as aligned text or as pretty JSON.
pub fn render_facts(facts: &FactSet, json: bool, out: &mut impl Write) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, facts)?;
        return writeln!(out);
    }

    writeln!(out, "scope:     {}", or_none(&facts.scope))?;
    writeln!(out, "namespace: {}", or_none(&facts.namespace))?;
    writeln!(out, "interface: {}", or_none(&facts.interface_name))?;
    writeln!(out, "required ({}):", facts.required_variables.len())?;
    for name in &facts.required_variables {
        writeln!(out, "  {name}")?;
    }
    writeln!(out, "optional ({}):", facts.optional_variables.len())?;
    for name in &facts.optional_variables {
        writeln!(out, "  {name}")?;
    }
    Ok(())
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("<none>")
}

/// Lex a file and print its token stream, or with `canonical` its
/// normalized source text.
pub fn lex_file<W: Write>(
    path: &Path,
    canonical: bool,
    emitter: &mut TerminalEmitter<W>,
    out: &mut impl Write,
) -> bool {
    let Some(source) = load(path, emitter) else {
        return finish(emitter);
    };
    let tokens = match procenv_lexer::tokenize(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            report(&CheckError::from(err), emitter);
            return finish(emitter);
        }
    };
    let written = if canonical {
        render_canonical(&tokens, out)
    } else {
        writeln!(
            out,
            "Tokens for '{}' ({} tokens):",
            path.display(),
            tokens.len()
        )
        .and_then(|()| render_tokens(&tokens, out))
    };
    written_ok(written)
}

/// Lex and build the scope tree of a file, then print the tree.
pub fn tree_file<W: Write>(
    path: &Path,
    emitter: &mut TerminalEmitter<W>,
    out: &mut impl Write,
) -> bool {
    let Some(source) = load(path, emitter) else {
        return finish(emitter);
    };
    let tree = procenv_lexer::tokenize(&source)
        .map_err(CheckError::from)
        .and_then(|tokens| procenv_parse::build_tree(&tokens).map_err(CheckError::from));
    match tree {
        Ok(root) => written_ok(
            writeln!(
                out,
                "Scope tree for '{}' ({} blocks):",
                path.display(),
                root.block_count()
            )
            .and_then(|()| render_tree(&root, out)),
        ),
        Err(err) => {
            report(&err, emitter);
            finish(emitter)
        }
    }
}

/// Run the front end on a file and print the recovered facts.
pub fn facts_file<W: Write>(
    path: &Path,
    json: bool,
    emitter: &mut TerminalEmitter<W>,
    out: &mut impl Write,
) -> bool {
    let Some(source) = load(path, emitter) else {
        return finish(emitter);
    };
    match crate::pipeline::extract_facts(&source) {
        Ok(facts) => written_ok(render_facts(&facts, json, out)),
        Err(err) => {
            report(&err, emitter);
            finish(emitter)
        }
    }
}

/// A failed write to the output stream fails the command.
fn written_ok(written: io::Result<()>) -> bool {
    match written {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "writing command output failed");
            false
        }
    }
}

/// Flush after a failure and report it as one.
fn finish<W: Write>(emitter: &mut TerminalEmitter<W>) -> bool {
    emitter.flush();
    false
}
