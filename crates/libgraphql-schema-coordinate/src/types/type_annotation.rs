use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;
use graphql_parser::schema as ast;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`InputField`](crate::types::InputField), or
/// [`Parameter`](crate::types::Parameter).
///
/// `Display` renders GraphQL syntax (`[String!]!`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// A nullable reference to the named type.
    pub fn named(type_name: impl Into<String>) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable: true,
            type_name: type_name.into(),
        })
    }

    /// A nullable list of `inner`.
    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type: Box::new(inner),
            nullable: true,
        })
    }

    /// This annotation, marked non-null.
    pub fn non_null(self) -> Self {
        match self {
            Self::List(list_annot) => Self::List(ListTypeAnnotation {
                nullable: false,
                ..list_annot
            }),
            Self::Named(named_annot) => Self::Named(NamedTypeAnnotation {
                nullable: false,
                ..named_annot
            }),
        }
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(list_annot) =>
                list_annot.inner_type_annotation().innermost_named_type_annotation(),
            Self::Named(named_annot) => named_annot,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(list_annot) => list_annot.nullable(),
            Self::Named(named_annot) => named_annot.nullable(),
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::Type<'static, String>) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::Type<'static, String>, nullable: bool) -> Self {
        match ast_type {
            ast::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type: Box::new(Self::from_ast_type_impl(inner, true)),
                    nullable,
                }),

            ast::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: name.to_string(),
                }),

            ast::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
