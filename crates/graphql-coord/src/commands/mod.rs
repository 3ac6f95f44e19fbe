mod parse;
mod resolve;

use crate::Cli;
use crate::CommandResult;
use parse::ParseCmd;
use resolve::ResolveCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-coord")]
pub(crate) enum CommandEnum {
    /// Parse a schema coordinate and print its parts.
    Parse(Box<ParseCmd>),

    /// Resolve schema coordinates against a schema loaded from SDL files.
    Resolve(Box<ResolveCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Resolve(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
