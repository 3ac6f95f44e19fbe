use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use crate::schema_files::find_schema_files;
use anyhow::Context;
use libgraphql_schema_coordinate::Schema;
use libgraphql_schema_coordinate::resolve::ResolvedSchemaElement;
use libgraphql_schema_coordinate::types::DeprecationState;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ResolveCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files that together define the schema.",
        long,
        required=true,
        short='s',
        value_name="FILE_OR_DIR",
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="One or more schema coordinates to resolve.",
        name="COORDINATE",
        required=true,
    )]
    coordinates: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for ResolveCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.load_schema() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to load schema: {err:#}",
                output_utils::RED_X,
            )),
        };

        let mut any_failed = false;
        let lines: Vec<String> = self.coordinates.iter().map(|coordinate| {
            match schema.resolve_coordinate(coordinate) {
                Ok(Some(element)) => format!(
                    "{} {coordinate}: {}",
                    output_utils::GREEN_CHECK,
                    summarize_element(&element),
                ),

                Ok(None) => format!(
                    "{} {coordinate}: not found",
                    output_utils::WHITE_QUESTION,
                ),

                Err(err) => {
                    any_failed = true;
                    format!("{} {coordinate}: {err}", output_utils::RED_X)
                },
            }
        }).collect();

        CommandResult::report(lines.join("\n"), any_failed)
    }
}
impl ResolveCmd {
    fn load_schema(&self) -> anyhow::Result<Schema> {
        let schema_files = find_schema_files(&self.schema, &self.graphql_file_exts)?;
        if schema_files.file_paths.is_empty() {
            anyhow::bail!(
                "No schema files found under {}",
                self.schema.iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }

        let schema = Schema::builder()
            .load_files(&schema_files.file_paths)
            .and_then(|builder| builder.build())
            .context("Invalid schema")?;
        log::info!(
            "Loaded schema from {} files ({} skipped): {} types, {} directives.",
            schema_files.file_paths.len(),
            schema_files.num_skipped_files,
            schema.all_types().count(),
            schema.all_directives().count(),
        );
        Ok(schema)
    }
}

/// A one-line summary of a resolved element: its kind, its type (where it has
/// one), deprecation, and where it was defined.
pub(crate) fn summarize_element(element: &ResolvedSchemaElement<'_>) -> String {
    let detail = match element {
        ResolvedSchemaElement::NamedType { graphql_type } =>
            format!("{} type", graphql_type.kind()),
        ResolvedSchemaElement::Field { field, .. } =>
            field.type_annotation().to_string(),
        ResolvedSchemaElement::InputField { input_field, .. } =>
            input_field.type_annotation().to_string(),
        ResolvedSchemaElement::EnumValue { enum_type, .. } =>
            format!("value of {}", enum_type.name()),
        ResolvedSchemaElement::FieldArgument { argument, .. }
        | ResolvedSchemaElement::DirectiveArgument { argument, .. } =>
            argument.type_annotation().to_string(),
        ResolvedSchemaElement::Directive { directive } =>
            format!("on {}", directive.locations().join(" | ")),
    };

    let mut summary = format!("{} ({detail})", element.element_kind());
    if let DeprecationState::Deprecated(reason) = element.deprecation_state() {
        summary.push_str(&format!(" [deprecated: {reason}]"));
    }
    summary.push_str(&format!(" defined at {}", element.def_location()));
    summary
}
