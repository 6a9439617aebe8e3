//! YAML parser that builds `YamlWithSourceInfo` trees.

use crate::{Error, Result, SourceInfo, YamlHashEntry, YamlWithSourceInfo};
use std::collections::HashSet;
use yaml_rust2::Yaml;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Parse a single YAML document.
///
/// If the input contains several documents only the first one is kept.
///
/// # Example
///
/// ```rust
/// use yavl_yaml::parse;
///
/// let yaml = parse("Types: {}").unwrap();
/// assert!(yaml.is_hash());
/// ```
///
/// # Errors
///
/// Returns an error for malformed YAML, for an empty stream, and for a
/// mapping that repeats a key.
pub fn parse(content: &str) -> Result<YamlWithSourceInfo> {
    parse_impl(content, None)
}

/// Parse a single YAML document, recording `filename` in every node's
/// source location.
pub fn parse_file(content: &str, filename: &str) -> Result<YamlWithSourceInfo> {
    parse_impl(content, Some(filename))
}

fn parse_impl(content: &str, filename: Option<&str>) -> Result<YamlWithSourceInfo> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = TreeBuilder::new(filename);

    parser.load(&mut builder, false).map_err(|e| {
        let err = Error::from(e);
        match (err, filename) {
            (Error::ParseError { message, location }, Some(file)) => Error::ParseError {
                message,
                location: location.map(|l| l.with_file(file)),
            },
            (err, _) => err,
        }
    })?;

    builder.result()
}

/// Event receiver that assembles the source-tracked tree bottom-up.
struct TreeBuilder {
    filename: Option<String>,
    stack: Vec<PartialNode>,
    root: Option<YamlWithSourceInfo>,
    /// First structural error seen; the event API gives no way to abort early.
    error: Option<Error>,
}

enum PartialNode {
    Sequence {
        start: Marker,
        items: Vec<YamlWithSourceInfo>,
    },
    Mapping {
        start: Marker,
        keys: HashSet<Yaml>,
        entries: Vec<(YamlWithSourceInfo, Option<YamlWithSourceInfo>)>,
    },
}

impl TreeBuilder {
    fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(str::to_string),
            stack: Vec::new(),
            root: None,
            error: None,
        }
    }

    fn result(self) -> Result<YamlWithSourceInfo> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.root.ok_or_else(|| Error::ParseError {
            message: "No YAML document found".into(),
            location: None,
        })
    }

    fn source_info(&self, marker: &Marker, len: usize) -> SourceInfo {
        let info = SourceInfo::from_marker(marker, len);
        match &self.filename {
            Some(filename) => info.with_file(filename.clone()),
            None => info,
        }
    }

    fn push_complete(&mut self, node: YamlWithSourceInfo) {
        let Some(parent) = self.stack.last_mut() else {
            self.root = Some(node);
            return;
        };

        match parent {
            PartialNode::Sequence { items, .. } => items.push(node),
            PartialNode::Mapping { keys, entries, .. } => match entries.last_mut() {
                Some((_, value @ None)) => *value = Some(node),
                _ => {
                    if !keys.insert(node.yaml.clone()) && self.error.is_none() {
                        self.error = Some(Error::DuplicateKey {
                            key: node
                                .scalar_text()
                                .unwrap_or_else(|| format!("{:?}", node.yaml)),
                            location: node.source_info.clone(),
                        });
                    }
                    entries.push((node, None));
                }
            },
        }
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Scalar(value, style, ..) => {
                let source_info = self.source_info(&marker, value.len());
                let yaml = if style == TScalarStyle::Plain {
                    parse_plain_scalar(&value)
                } else {
                    Yaml::String(value)
                };
                self.push_complete(YamlWithSourceInfo::new_scalar(yaml, source_info));
            }

            Event::SequenceStart(..) => {
                self.stack.push(PartialNode::Sequence {
                    start: marker,
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => {
                if let Some(PartialNode::Sequence { start, items }) = self.stack.pop() {
                    let len = marker.index().saturating_sub(start.index());
                    let source_info = self.source_info(&start, len);
                    self.push_complete(YamlWithSourceInfo::new_array(source_info, items));
                }
            }

            Event::MappingStart(..) => {
                self.stack.push(PartialNode::Mapping {
                    start: marker,
                    keys: HashSet::new(),
                    entries: Vec::new(),
                });
            }

            Event::MappingEnd => {
                if let Some(PartialNode::Mapping { start, entries, .. }) = self.stack.pop() {
                    let len = marker.index().saturating_sub(start.index());
                    let source_info = self.source_info(&start, len);
                    let entries = entries
                        .into_iter()
                        .map(|(key, value)| {
                            let value = value.unwrap_or_else(|| {
                                YamlWithSourceInfo::new_scalar(
                                    Yaml::Null,
                                    key.source_info.clone(),
                                )
                            });
                            YamlHashEntry::new(key, value)
                        })
                        .collect();
                    self.push_complete(YamlWithSourceInfo::new_hash(source_info, entries));
                }
            }

            Event::Alias(_) => {
                // Anchors are not tracked; an alias reads as null.
                let source_info = self.source_info(&marker, 0);
                self.push_complete(YamlWithSourceInfo::new_scalar(Yaml::Null, source_info));
            }

            _ => {}
        }
    }
}

/// Infer the type of a plain (unquoted) scalar.
fn parse_plain_scalar(value: &str) -> Yaml {
    if let Ok(i) = value.parse::<i64>() {
        return Yaml::Integer(i);
    }

    if value.parse::<f64>().is_ok() {
        return Yaml::Real(value.to_string());
    }

    match value {
        "true" | "True" | "TRUE" => Yaml::Boolean(true),
        "false" | "False" | "FALSE" => Yaml::Boolean(false),
        "null" | "Null" | "NULL" | "~" | "" => Yaml::Null,
        _ => Yaml::String(value.to_string()),
    }
}
