//! Binder generation for nested `map:` / `list:` grammars.
//!
//! The grammar is turned into a tree of [`DataNodeDefinition`]s rooted at a
//! caller-chosen name. Every struct and enum in the tree becomes a named
//! Rust type; emission walks the tree post-order so each type is declared
//! before the type that uses it.

use crate::emitter::{DefaultEmitter, TypeEmitter};
use crate::error::{GenerateError, Result};
use crate::naming::{pascal_case, singular};
use crate::registry::{FieldDef, GeneratedType, TypeKind};
use crate::writer::CodeWriter;
use std::io::Write;
use yavl_validation::{Builtin, Grammar, LeafNode, SchemaNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataNodeKind {
    Builtin(Builtin),
    Vector(Box<DataNodeDefinition>),
    Struct(Vec<DataNodeDefinition>),
    Enum(EnumDefinition),
}

/// One node of the binding tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataNodeDefinition {
    /// Field name that introduced this node
    pub name: String,
    /// Rust type of the node (`Server`, `Vec<Host>`, `u32`)
    pub type_name: String,
    pub kind: DataNodeKind,
}

impl DataNodeDefinition {
    /// Build the tree for `schema`, naming synthesized types after `name`.
    pub fn from_schema(schema: &SchemaNode, name: &str) -> Self {
        match schema {
            SchemaNode::Map(map) => {
                let children = map
                    .fields
                    .iter()
                    .map(|field| Self::from_schema(&field.node, &field.name))
                    .collect();
                Self {
                    name: name.to_string(),
                    type_name: pascal_case(name),
                    kind: DataNodeKind::Struct(children),
                }
            }
            SchemaNode::List(list) => {
                let element = Self::from_schema(&list.element, &singular(&pascal_case(name)));
                Self {
                    name: name.to_string(),
                    type_name: format!("Vec<{}>", element.type_name),
                    kind: DataNodeKind::Vector(Box::new(element)),
                }
            }
            SchemaNode::Leaf(LeafNode::Builtin { builtin, .. }) => Self {
                name: name.to_string(),
                type_name: builtin.rust_type().to_string(),
                kind: DataNodeKind::Builtin(*builtin),
            },
            SchemaNode::Leaf(LeafNode::Enum(e)) => {
                let type_name = pascal_case(name);
                Self {
                    name: name.to_string(),
                    type_name: type_name.clone(),
                    kind: DataNodeKind::Enum(EnumDefinition {
                        name: type_name,
                        values: e.choices.clone(),
                    }),
                }
            }
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.kind, DataNodeKind::Builtin(_))
    }

    /// Whether this node declares a named type of its own.
    pub fn is_named_type(&self) -> bool {
        matches!(self.kind, DataNodeKind::Struct(_) | DataNodeKind::Enum(_))
    }

    /// Name of the `pub type` alias a root of this node needs, if any.
    fn alias_name(&self) -> Option<String> {
        (!self.is_named_type()).then(|| pascal_case(&self.name))
    }

    /// Same generated type, ignoring the field name that introduced it.
    fn same_shape(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.kind == other.kind
    }

    /// Visit every named type, dependencies first.
    ///
    /// At a struct, each non-builtin member is visited (vectors through
    /// their element) before the struct itself.
    pub fn walk_named<'a>(
        &'a self,
        visit: &mut dyn FnMut(&'a DataNodeDefinition) -> Result<()>,
    ) -> Result<()> {
        match &self.kind {
            DataNodeKind::Builtin(_) => Ok(()),
            DataNodeKind::Enum(_) => visit(self),
            DataNodeKind::Vector(element) => element.walk_named(visit),
            DataNodeKind::Struct(children) => {
                for child in children.iter().filter(|c| !c.is_builtin()) {
                    child.walk_named(visit)?;
                }
                visit(self)
            }
        }
    }

    /// The struct or enum this node declares, as the type emitter sees it.
    fn to_generated_type(&self) -> Result<GeneratedType> {
        match &self.kind {
            DataNodeKind::Struct(children) => {
                let fields = children
                    .iter()
                    .map(|child| FieldDef::new(&child.name, &child.type_name))
                    .collect::<Result<Vec<_>>>()?;
                GeneratedType::new_map(&self.type_name, fields)
            }
            DataNodeKind::Enum(def) => GeneratedType::new_enum(&def.name, &def.values),
            DataNodeKind::Builtin(_) | DataNodeKind::Vector(_) => Err(GenerateError::bad_shape(
                &self.name,
                "only structs and enums declare types",
            )),
        }
    }
}

/// Generates bindings for a grammar.
#[derive(Debug, Clone)]
pub struct BinderGenerator {
    root: DataNodeDefinition,
    /// Named types in emission order, each once
    types: Vec<GeneratedType>,
}

impl BinderGenerator {
    /// Build the binding tree for `grammar` rooted at `top_name`.
    ///
    /// Identical definitions synthesized at several places are emitted once;
    /// two different definitions with the same name are an error, and so is
    /// a root alias that reuses a synthesized name. A name that would shadow
    /// a type the generated fields refer to (`String`, `Vec`, ...) is
    /// rejected.
    pub fn new(grammar: &Grammar, top_name: &str) -> Result<Self> {
        let root = DataNodeDefinition::from_schema(&grammar.root, top_name);

        let mut seen: Vec<&DataNodeDefinition> = Vec::new();
        root.walk_named(&mut |node| {
            check_not_reserved(&node.type_name)?;
            match seen.iter().find(|s| s.type_name == node.type_name) {
                Some(existing) if existing.same_shape(node) => {}
                Some(_) => {
                    return Err(GenerateError::DuplicateTypeName {
                        name: node.type_name.clone(),
                    });
                }
                None => seen.push(node),
            }
            Ok(())
        })?;

        if let Some(alias) = root.alias_name() {
            check_not_reserved(&alias)?;
            if seen.iter().any(|s| s.type_name == alias) {
                return Err(GenerateError::DuplicateTypeName { name: alias });
            }
        }

        let types = seen
            .iter()
            .map(|node| node.to_generated_type())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { root, types })
    }

    pub fn root(&self) -> &DataNodeDefinition {
        &self.root
    }

    /// Named types in the order they are declared.
    pub fn types(&self) -> &[GeneratedType] {
        &self.types
    }

    /// Write declarations, then readers, then writers.
    ///
    /// A root that is not a struct or enum (a top-level list or scalar) is
    /// given a type alias named after the root.
    pub fn generate<W: Write>(&self, sink: &mut W) -> Result<()> {
        let emitter = DefaultEmitter;
        let mut out = CodeWriter::buffer();

        out.line("// Generated by yavl from a grammar. Do not edit.")?;
        out.blank()?;
        out.line("#[allow(unused_imports)]")?;
        out.line("use yavl_runtime::{FromYaml, ToYaml};")?;
        out.blank()?;

        for ty in &self.types {
            match &ty.kind {
                TypeKind::Map(fields) => emitter.emit_map_declaration(ty, fields, &mut out)?,
                TypeKind::Enum(choices) => emitter.emit_enum_declaration(ty, choices, &mut out)?,
            }
        }
        if let Some(alias) = self.root.alias_name() {
            out.line(format!("pub type {} = {};", alias, self.root.type_name))?;
            out.blank()?;
        }
        for ty in &self.types {
            match &ty.kind {
                TypeKind::Map(fields) => emitter.emit_map_reader(ty, fields, &mut out)?,
                TypeKind::Enum(choices) => emitter.emit_enum_reader(ty, choices, &mut out)?,
            }
        }
        for ty in &self.types {
            match &ty.kind {
                TypeKind::Map(fields) => emitter.emit_map_writer(ty, fields, &mut out)?,
                TypeKind::Enum(choices) => emitter.emit_enum_writer(ty, choices, &mut out)?,
            }
        }

        sink.write_all(&out.into_inner())?;
        tracing::info!(
            root = %self.root.type_name,
            types = self.types.len(),
            "generated grammar bindings"
        );
        Ok(())
    }

    /// Names of every type in emission order, for diagnostics.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }
}

/// Types the generated fields name unqualified.
const CONTAINER_TYPES: &[&str] = &["Vec", "Option", "Box"];

fn check_not_reserved(name: &str) -> Result<()> {
    let reserved = CONTAINER_TYPES.contains(&name)
        || Builtin::ALL.iter().any(|b| b.rust_type() == name);
    if reserved {
        return Err(GenerateError::ReservedTypeName {
            name: name.to_string(),
        });
    }
    Ok(())
}
