// Grammar parsing from YamlWithSourceInfo

use super::types::{Builtin, EnumNode, LeafNode, ListNode, MapField, MapNode, SchemaNode};
use crate::error::{SchemaError, SchemaResult};
use yavl_yaml::YamlWithSourceInfo;

/// Parse one grammar node.
///
/// A mapping keyed `map` or `list` selects a container; anything else must be
/// a leaf spec.
pub(crate) fn parse_schema_node(yaml: &YamlWithSourceInfo) -> SchemaResult<SchemaNode> {
    if let Some(entries) = yaml.as_hash() {
        if entries.len() != 1 {
            return Err(SchemaError::bad_shape(
                format!(
                    "expected a single 'map' or 'list' key, found {} keys",
                    entries.len()
                ),
                &yaml.source_info,
            ));
        }
        let entry = &entries[0];
        return match entry.key.yaml.as_str() {
            Some("map") => parse_map(&entry.value),
            Some("list") => parse_list(&entry.value),
            _ => Err(SchemaError::bad_shape(
                format!(
                    "expected 'map' or 'list', found '{}'",
                    entry.key.scalar_text().unwrap_or_default()
                ),
                &entry.key.source_info,
            )),
        };
    }

    parse_leaf(yaml).map(SchemaNode::Leaf)
}

fn parse_map(yaml: &YamlWithSourceInfo) -> SchemaResult<SchemaNode> {
    let entries = yaml.as_hash().ok_or_else(|| {
        SchemaError::bad_shape(
            format!("'map' must be a mapping of fields, found {}", yaml.kind()),
            &yaml.source_info,
        )
    })?;

    let mut fields = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry.key.scalar_text().ok_or_else(|| {
            SchemaError::bad_shape("field names must be scalars", &entry.key.source_info)
        })?;
        let node = parse_schema_node(&entry.value)?;
        fields.push(MapField { name, node });
    }

    Ok(SchemaNode::Map(MapNode {
        fields,
        source_info: yaml.source_info.clone(),
    }))
}

fn parse_list(yaml: &YamlWithSourceInfo) -> SchemaResult<SchemaNode> {
    let element = parse_schema_node(yaml)?;
    Ok(SchemaNode::List(ListNode {
        element: Box::new(element),
        source_info: yaml.source_info.clone(),
    }))
}

/// A leaf is a one-element sequence holding either a bare kind name or a
/// one-entry `{kind: specifics}` mapping.
fn parse_leaf(yaml: &YamlWithSourceInfo) -> SchemaResult<LeafNode> {
    let items = match yaml.as_array() {
        Some([item]) => item,
        _ => {
            return Err(SchemaError::bad_shape(
                format!(
                    "expected a one-element type spec sequence, found {}",
                    yaml.kind()
                ),
                &yaml.source_info,
            ));
        }
    };

    let (kind, specifics) = if let Some(entries) = items.as_hash() {
        match entries {
            [entry] => (&entry.key, Some(&entry.value)),
            _ => {
                return Err(SchemaError::bad_shape(
                    "type spec mapping must have exactly one entry",
                    &items.source_info,
                ));
            }
        }
    } else {
        (items, None)
    };

    let name = kind
        .yaml
        .as_str()
        .ok_or_else(|| SchemaError::bad_shape("type name must be a string", &kind.source_info))?;

    if name == "enum" {
        return parse_enum(specifics, &kind.source_info).map(LeafNode::Enum);
    }

    let builtin = Builtin::from_name(name).ok_or_else(|| SchemaError::UnknownBuiltin {
        name: name.to_string(),
        location: kind.source_info.clone(),
    })?;

    Ok(LeafNode::Builtin {
        builtin,
        source_info: kind.source_info.clone(),
    })
}

fn parse_enum(
    specifics: Option<&YamlWithSourceInfo>,
    location: &yavl_yaml::SourceInfo,
) -> SchemaResult<EnumNode> {
    let choices = specifics.and_then(|s| s.as_array()).ok_or_else(|| {
        SchemaError::bad_shape("'enum' requires a sequence of choices", location)
    })?;

    let mut values = Vec::with_capacity(choices.len());
    for choice in choices {
        let value = choice.scalar_text().ok_or_else(|| {
            SchemaError::bad_shape("enum choices must be scalars", &choice.source_info)
        })?;
        values.push(value);
    }

    Ok(EnumNode::new(values, location.clone()))
}
