//! Parse every input and report what was found.

use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use diagnostic::{
    DiagnosticCoordinator, FancyEmitter, InputCoordinator, PlainEmitter,
};

use crate::{tree, Args};

/// Check everything named in `args`, returning whether any errors were
/// found.
pub(crate) fn run(args: &Args) -> anyhow::Result<bool> {
    let mut inputs = InputCoordinator::default();
    let mut ids = Vec::new();

    if args.files.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("cannot read standard input")?;
        ids.push(inputs.named_input(buffer, "<stdin>"));
    } else {
        for path in &args.files {
            let buffer = fs::read_to_string(path)
                .with_context(|| format!("cannot read '{}'", path.display()))?;
            ids.push(inputs.file_input(buffer, path.clone()));
        }
    }

    let mut diagnostics = DiagnosticCoordinator::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for id in ids {
        let name = inputs.get_input_name(id);
        let buffer = inputs.get_input_buffer(id);
        let file = syntax::parse_source_file(&name, buffer);

        tracing::debug!(
            %name,
            elements = file.elements().len(),
            diagnostics = file.diagnostics().len(),
            "parsed"
        );

        diagnostics.register_all(id, file.diagnostics());

        if args.tree {
            tree::print(&mut out, &file).context("cannot write tree")?;
        }
    }

    let has_errors = diagnostics.has_errors();

    if args.plain {
        diagnostics.emit(&mut PlainEmitter::stderr(), &inputs)
    } else {
        diagnostics.emit(&mut FancyEmitter::full(), &inputs)
    }
    .context("cannot write diagnostics")?;

    Ok(has_errors)
}
