use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libgraphql_schema_coordinate::ast;
use libgraphql_schema_coordinate::parse_schema_coordinate;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        help="The schema coordinate to parse, e.g. `Query.user(id:)`.",
        name="COORDINATE",
    )]
    coordinate: String,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        log::debug!("Parsing coordinate `{}`.", self.coordinate);
        match parse_schema_coordinate(&self.coordinate) {
            Ok(coordinate) => CommandResult::stdout(format_args!(
                "{} {}",
                output_utils::GREEN_CHECK,
                describe_coordinate(&coordinate),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} {}",
                output_utils::RED_X,
                err.format_detailed(Some(&self.coordinate)).trim_end(),
            )),
        }
    }
}

/// The production a coordinate matched, followed by one line per name.
pub(crate) fn describe_coordinate(coordinate: &ast::SchemaCoordinate<'_>) -> String {
    let parts: Vec<(&str, &str)> = match coordinate {
        ast::SchemaCoordinate::Type(coord) => vec![
            ("type", coord.name.as_str()),
        ],
        ast::SchemaCoordinate::Member(coord) => vec![
            ("type", coord.name.as_str()),
            ("member", coord.member_name.as_str()),
        ],
        ast::SchemaCoordinate::Argument(coord) => vec![
            ("type", coord.name.as_str()),
            ("field", coord.field_name.as_str()),
            ("argument", coord.argument_name.as_str()),
        ],
        ast::SchemaCoordinate::Directive(coord) => vec![
            ("directive", coord.name.as_str()),
        ],
        ast::SchemaCoordinate::DirectiveArgument(coord) => vec![
            ("directive", coord.name.as_str()),
            ("argument", coord.argument_name.as_str()),
        ],
    };

    let mut output = format!("{} `{coordinate}`", coordinate.kind());
    for (label, name) in parts {
        output.push_str(&format!("\n  {label}: {name}"));
    }
    output
}
