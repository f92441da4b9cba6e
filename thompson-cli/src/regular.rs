use crate::error::CliError;
use log::debug;
use thompson::{compile, matches};

/// Regular mode (spec §6): compile one pattern, test it against one or
/// more candidate strings, and print one line per candidate.
pub fn run(regex: &str, strings: &[String]) -> Result<(), CliError> {
    debug!("compiling pattern {regex:?}");
    let nfa = compile(regex)?;
    for s in strings {
        let accepted = matches(&nfa, s);
        println!("'{s}' accepted by regular expression '{regex}': {accepted}");
    }
    Ok(())
}
