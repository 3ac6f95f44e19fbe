use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::Directive;
use crate::types::DirectiveAnnotation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use graphql_parser::schema as ast;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`].
///
/// Types and directives can be added programmatically
/// ([`add_type()`](Self::add_type), [`add_directive()`](Self::add_directive))
/// or loaded from SDL ([`load_str()`](Self::load_str),
/// [`load_file()`](Self::load_file)). Type extensions are held back until
/// [`build()`](Self::build) so that an extension may appear before (or in a
/// different file than) the definition it extends.
///
/// Only the structural checks needed for unambiguous lookups are performed:
/// no duplicate types, directives, members, or arguments, and every extension
/// must target an existing type of the same kind.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    pending_extensions: Vec<(Option<PathBuf>, ast::TypeExtension<'static, String>)>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            pending_extensions: vec![],
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_directive(mut self, directive: Directive) -> Result<Self> {
        self.insert_directive(directive)?;
        Ok(self)
    }

    pub fn add_type(mut self, type_: GraphQLType) -> Result<Self> {
        self.insert_type(type_)?;
        Ok(self)
    }

    pub fn build(mut self) -> Result<Schema> {
        let pending_extensions = std::mem::take(&mut self.pending_extensions);
        for (file_path, ext) in pending_extensions {
            self.apply_type_extension(file_path.as_deref(), ext)?;
        }

        for builtin_directive in Directive::builtins() {
            if !self.directive_defs.contains_key(builtin_directive.name()) {
                self.directive_defs.insert(
                    builtin_directive.name().to_string(),
                    builtin_directive,
                );
            }
        }

        log::debug!(
            "Built schema with {} types and {} directives",
            self.types.len(),
            self.directive_defs.len(),
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            types: self.types,
        })
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files([file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            log::trace!("Reading schema file {}", file_path.display());
            let file_content = std::fs::read_to_string(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError {
                    file_path: file_path.to_path_buf(),
                    err,
                })?;
            self = self.load_str(Some(file_path.to_path_buf()), &file_content)?;
        }
        Ok(self)
    }

    /// Parses `content` as SDL and adds every definition in it.
    ///
    /// `file_path` is only used for the locations recorded on each
    /// definition and in errors.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = ast::parse_schema::<String>(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?
            .into_static();

        log::debug!(
            "Loading {} schema definitions from {}",
            ast_doc.definitions.len(),
            file_path.as_deref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "string".to_string()),
        );

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::Definition<'static, String>,
    ) -> Result<()> {
        match def {
            // Root operation types play no part in coordinate resolution.
            ast::Definition::SchemaDefinition(_) => Ok(()),

            ast::Definition::DirectiveDefinition(directive_def) => {
                log::trace!("Visiting directive definition `@{}`", directive_def.name);
                self.insert_directive(Directive::from_ast(file_path, &directive_def)?)
            },

            ast::Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),

            ast::Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push((
                    file_path.map(|path| path.to_path_buf()),
                    type_ext,
                ));
                Ok(())
            },
        }
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::TypeDefinition<'static, String>,
    ) -> Result<()> {
        let type_ = match type_def {
            ast::TypeDefinition::Enum(enum_def) => {
                let mut enum_type = EnumType {
                    def_location: loc::SchemaDefLocation::from_pos(file_path, enum_def.position),
                    description: enum_def.description,
                    directives: DirectiveAnnotation::from_ast(file_path, &enum_def.directives),
                    name: enum_def.name,
                    values: IndexMap::new(),
                };
                for value in &enum_def.values {
                    insert_unique_member(
                        &mut enum_type.values,
                        &enum_type.name,
                        EnumValue::from_ast(file_path, &enum_type.name, value),
                    )?;
                }
                GraphQLType::Enum(enum_type)
            },

            ast::TypeDefinition::InputObject(inputobj_def) => {
                let mut inputobj_type = InputObjectType {
                    def_location: loc::SchemaDefLocation::from_pos(file_path, inputobj_def.position),
                    description: inputobj_def.description,
                    directives: DirectiveAnnotation::from_ast(file_path, &inputobj_def.directives),
                    fields: IndexMap::new(),
                    name: inputobj_def.name,
                };
                for field in &inputobj_def.fields {
                    insert_unique_member(
                        &mut inputobj_type.fields,
                        &inputobj_type.name,
                        InputField::from_ast(file_path, &inputobj_type.name, field),
                    )?;
                }
                GraphQLType::InputObject(inputobj_type)
            },

            ast::TypeDefinition::Interface(iface_def) => {
                let mut data = ObjectOrInterfaceTypeData::new(
                    iface_def.name,
                    loc::SchemaDefLocation::from_pos(file_path, iface_def.position),
                );
                data.description = iface_def.description;
                merge_object_or_interface_parts(
                    &mut data,
                    file_path,
                    &iface_def.directives,
                    iface_def.implements_interfaces,
                    &iface_def.fields,
                )?;
                GraphQLType::Interface(InterfaceType(data))
            },

            ast::TypeDefinition::Object(obj_def) => {
                let mut data = ObjectOrInterfaceTypeData::new(
                    obj_def.name,
                    loc::SchemaDefLocation::from_pos(file_path, obj_def.position),
                );
                data.description = obj_def.description;
                merge_object_or_interface_parts(
                    &mut data,
                    file_path,
                    &obj_def.directives,
                    obj_def.implements_interfaces,
                    &obj_def.fields,
                )?;
                GraphQLType::Object(ObjectType(data))
            },

            ast::TypeDefinition::Scalar(scalar_def) =>
                GraphQLType::Scalar(ScalarType {
                    def_location: loc::SchemaDefLocation::from_pos(file_path, scalar_def.position),
                    description: scalar_def.description,
                    directives: DirectiveAnnotation::from_ast(file_path, &scalar_def.directives),
                    name: scalar_def.name,
                }),

            ast::TypeDefinition::Union(union_def) =>
                GraphQLType::Union(UnionType {
                    def_location: loc::SchemaDefLocation::from_pos(file_path, union_def.position),
                    description: union_def.description,
                    directives: DirectiveAnnotation::from_ast(file_path, &union_def.directives),
                    member_type_names: union_def.types,
                    name: union_def.name,
                }),
        };

        log::trace!("Visiting {} type definition `{}`", type_.kind(), type_.name());
        self.insert_type(type_)
    }

    fn apply_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::TypeExtension<'static, String>,
    ) -> Result<()> {
        match ext {
            ast::TypeExtension::Enum(ext) => {
                let target = self.extension_target(
                    &ext.name,
                    GraphQLTypeKind::Enum,
                    file_path,
                    ext.position,
                )?;
                if let GraphQLType::Enum(enum_type) = target {
                    enum_type.directives.append(
                        &mut DirectiveAnnotation::from_ast(file_path, &ext.directives),
                    );
                    for value in &ext.values {
                        insert_unique_member(
                            &mut enum_type.values,
                            &enum_type.name,
                            EnumValue::from_ast(file_path, &enum_type.name, value),
                        )?;
                    }
                }
            },

            ast::TypeExtension::InputObject(ext) => {
                let target = self.extension_target(
                    &ext.name,
                    GraphQLTypeKind::InputObject,
                    file_path,
                    ext.position,
                )?;
                if let GraphQLType::InputObject(inputobj_type) = target {
                    inputobj_type.directives.append(
                        &mut DirectiveAnnotation::from_ast(file_path, &ext.directives),
                    );
                    for field in &ext.fields {
                        insert_unique_member(
                            &mut inputobj_type.fields,
                            &inputobj_type.name,
                            InputField::from_ast(file_path, &inputobj_type.name, field),
                        )?;
                    }
                }
            },

            ast::TypeExtension::Interface(ext) => {
                let target = self.extension_target(
                    &ext.name,
                    GraphQLTypeKind::Interface,
                    file_path,
                    ext.position,
                )?;
                if let GraphQLType::Interface(iface_type) = target {
                    merge_object_or_interface_parts(
                        &mut iface_type.0,
                        file_path,
                        &ext.directives,
                        ext.implements_interfaces,
                        &ext.fields,
                    )?;
                }
            },

            ast::TypeExtension::Object(ext) => {
                let target = self.extension_target(
                    &ext.name,
                    GraphQLTypeKind::Object,
                    file_path,
                    ext.position,
                )?;
                if let GraphQLType::Object(obj_type) = target {
                    merge_object_or_interface_parts(
                        &mut obj_type.0,
                        file_path,
                        &ext.directives,
                        ext.implements_interfaces,
                        &ext.fields,
                    )?;
                }
            },

            ast::TypeExtension::Scalar(ext) => {
                let target = self.extension_target(
                    &ext.name,
                    GraphQLTypeKind::Scalar,
                    file_path,
                    ext.position,
                )?;
                if let GraphQLType::Scalar(scalar_type) = target {
                    scalar_type.directives.append(
                        &mut DirectiveAnnotation::from_ast(file_path, &ext.directives),
                    );
                }
            },

            ast::TypeExtension::Union(ext) => {
                let target = self.extension_target(
                    &ext.name,
                    GraphQLTypeKind::Union,
                    file_path,
                    ext.position,
                )?;
                if let GraphQLType::Union(union_type) = target {
                    union_type.directives.append(
                        &mut DirectiveAnnotation::from_ast(file_path, &ext.directives),
                    );
                    union_type.member_type_names.extend(ext.types);
                }
            },
        }
        Ok(())
    }

    /// Finds the type an extension applies to, checking that it exists and is
    /// of the same kind as the extension.
    fn extension_target(
        &mut self,
        type_name: &str,
        extension_kind: GraphQLTypeKind,
        file_path: Option<&Path>,
        ext_position: graphql_parser::Pos,
    ) -> Result<&mut GraphQLType> {
        let extension_location = loc::SchemaDefLocation::from_pos(file_path, ext_position);
        match self.types.get_mut(type_name) {
            Some(type_) if type_.kind() == extension_kind => Ok(type_),

            Some(type_) => Err(SchemaBuildError::InvalidExtensionType {
                type_name: type_name.to_string(),
                type_kind: type_.kind(),
                extension_kind,
                extension_location,
            }),

            None => Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
                extension_location,
            }),
        }
    }

    fn insert_directive(&mut self, directive: Directive) -> Result<()> {
        if let Some(existing) = self.directive_defs.get(directive.name()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: directive.name().to_string(),
                def1: existing.def_location().to_owned(),
                def2: directive.def_location().to_owned(),
            });
        }
        self.directive_defs.insert(directive.name().to_string(), directive);
        Ok(())
    }

    fn insert_type(&mut self, type_: GraphQLType) -> Result<()> {
        if let Some(existing) = self.types.get(type_.name()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_.name().to_string(),
                def1: existing.def_location().to_owned(),
                def2: type_.def_location().to_owned(),
            });
        }
        self.types.insert(type_.name().to_string(), type_);
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Merges the directives, implemented interfaces, and fields of an object or
/// interface definition (or extension) into `data`.
fn merge_object_or_interface_parts(
    data: &mut ObjectOrInterfaceTypeData,
    file_path: Option<&Path>,
    directives: &[ast::Directive<'static, String>],
    interfaces: Vec<String>,
    fields: &[ast::Field<'static, String>],
) -> Result<()> {
    data.directives.append(&mut DirectiveAnnotation::from_ast(file_path, directives));
    data.interfaces.extend(interfaces);
    for field in fields {
        insert_unique_member(
            &mut data.fields,
            &data.name,
            Field::from_ast(file_path, &data.name, field)?,
        )?;
    }
    Ok(())
}

/// A named member of some type: a field, input field, or enum value.
trait TypeMember {
    fn member_name(&self) -> &str;
    fn member_def_location(&self) -> &loc::SchemaDefLocation;
}
impl TypeMember for EnumValue {
    fn member_name(&self) -> &str {
        self.name()
    }

    fn member_def_location(&self) -> &loc::SchemaDefLocation {
        self.def_location()
    }
}
impl TypeMember for Field {
    fn member_name(&self) -> &str {
        self.name()
    }

    fn member_def_location(&self) -> &loc::SchemaDefLocation {
        self.def_location()
    }
}
impl TypeMember for InputField {
    fn member_name(&self) -> &str {
        self.name()
    }

    fn member_def_location(&self) -> &loc::SchemaDefLocation {
        self.def_location()
    }
}

fn insert_unique_member<T: TypeMember>(
    members: &mut IndexMap<String, T>,
    type_name: &str,
    member: T,
) -> Result<()> {
    if let Some(existing) = members.get(member.member_name()) {
        return Err(SchemaBuildError::DuplicateMemberDefinition {
            type_name: type_name.to_string(),
            member_name: member.member_name().to_string(),
            def1: existing.member_def_location().to_owned(),
            def2: member.member_def_location().to_owned(),
        });
    }
    members.insert(member.member_name().to_string(), member);
    Ok(())
}
