// Generated by yavl from a type spec. Do not edit.

#[allow(unused_imports)]
use yavl_runtime::{FromYaml, ToYaml};

use indexmap::IndexMap;
use yavl_runtime::Yaml;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct SpecType {
    pub ExtraIncludes: Option<Vec<String>>,
    pub CustomCodeGenerator: Option<(String, String)>,
    pub Types: IndexMap<String, Yaml>,
}

impl yavl_runtime::FromYaml for SpecType {
    fn from_yaml(input: &yavl_runtime::Yaml) -> yavl_runtime::Result<Self> {
        const KEYS: &[(&str, bool)] = &[
            ("ExtraIncludes", false),
            ("CustomCodeGenerator", false),
            ("Types", true),
        ];
        yavl_runtime::check_keys("SpecType", input, KEYS)?;
        Ok(Self {
            ExtraIncludes: yavl_runtime::read_field(input, "ExtraIncludes")?,
            CustomCodeGenerator: yavl_runtime::read_field(input, "CustomCodeGenerator")?,
            Types: yavl_runtime::read_field(input, "Types")?,
        })
    }
}

impl yavl_runtime::ToYaml for SpecType {
    fn to_yaml(&self) -> yavl_runtime::Yaml {
        let mut output = yavl_runtime::MapWriter::new();
        output.write_field("ExtraIncludes", &self.ExtraIncludes);
        output.write_field("CustomCodeGenerator", &self.CustomCodeGenerator);
        output.write_field("Types", &self.Types);
        output.finish()
    }
}

pub fn get_types() -> Vec<&'static str> {
    vec![
        "SpecType",
    ]
}

pub fn symbol_table() -> &'static yavl_runtime::SymbolTable {
    static TABLE: std::sync::OnceLock<yavl_runtime::SymbolTable> = std::sync::OnceLock::new();
    TABLE.get_or_init(|| {
        yavl_runtime::SymbolTable::new()
            .register("SpecType", yavl_runtime::validate::<SpecType>)
    })
}

pub fn validate_simple(
    node: &yavl_runtime::Yaml,
    type_name: &str,
) -> yavl_runtime::ValidationOutcome {
    symbol_table().validate_simple(node, type_name)
}
