use std::io::Write;

use log::debug;

/// Builds both module messages and writes them to `out`, one per line, A first.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let message_a = module_a::build_message();
    let message_b = module_b::build_message();
    debug!("built messages from module-a and module-b");

    writeln!(out, "{message_a}")?;
    writeln!(out, "{message_b}")?;
    out.flush()?;
    debug!("wrote both messages");

    Ok(())
}
