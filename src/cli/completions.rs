use crate::cli::args::{Cli, CompletionCommands};
use crate::utils::errors::Result;
use clap::CommandFactory;
use clap_complete::generate;
use std::io::{self, Write};

const APP_NAME: &str = "certificate-api";

pub fn handle_completion_command(command: &CompletionCommands) -> Result<()> {
    let mut stdout = io::stdout();
    write_completion(command, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

pub fn write_completion<W: Write>(command: &CompletionCommands, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    generate(command.shell(), &mut cmd, APP_NAME, out);
    Ok(())
}
