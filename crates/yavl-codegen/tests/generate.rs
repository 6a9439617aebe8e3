//! Output-level tests for the type-spec generator and the grammar binder.

use std::io;
use yavl_codegen::{
    BinderGenerator, CodeWriter, EmitterRegistry, FieldDef, GenerateError, GeneratedType,
    GeneratorOptions, Spec, TypeEmitter, generate, generate_with,
};
use yavl_validation::Grammar;

const PIXEL_SPEC: &str = r#"
ExtraIncludes:
  - "use std::collections::BTreeMap;"
Types:
  Color: [red, green, blue]
  Pixel:
    color: Color
    position: "u32[2]"
    label: "Option<String>"
  Image:
    pixels: "Vec<Pixel>"
    meta: "BTreeMap<String, String>"
"#;

fn render(text: &str) -> String {
    let spec = Spec::parse(text, Some("pixel.yaml")).unwrap();
    let mut out = Vec::new();
    generate(&spec, &GeneratorOptions::default(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in:\n{haystack}"))
}

#[test]
fn test_types_emitted_in_declaration_order() {
    let text = render(PIXEL_SPEC);
    let color = position(&text, "pub enum Color {");
    let pixel = position(&text, "pub struct Pixel {");
    let image = position(&text, "pub struct Image {");
    assert!(color < pixel && pixel < image);
}

#[test]
fn test_dependent_declared_first_is_not_reordered() {
    let text = render("Types:\n  Outer:\n    inner: Inner\n  Inner:\n    value: i32\n");
    let outer = position(&text, "pub struct Outer {");
    let inner = position(&text, "pub struct Inner {");
    assert!(outer < inner);
}

#[test]
fn test_extra_includes_follow_preamble() {
    let text = render(PIXEL_SPEC);
    let import = position(&text, "use yavl_runtime::{FromYaml, ToYaml};");
    let include = position(&text, "use std::collections::BTreeMap;");
    let first_type = position(&text, "pub enum Color {");
    assert!(import < include && include < first_type);
}

#[test]
fn test_array_suffix_and_optional_fields() {
    let text = render(PIXEL_SPEC);
    assert!(text.contains("pub position: [u32; 2],"));
    assert!(text.contains("(\"position\", true),"));
    assert!(text.contains("(\"label\", false),"));
    assert!(text.contains("pub label: Option<String>,"));
}

#[test]
fn test_get_types_lists_every_type_in_order() {
    let text = render(PIXEL_SPEC);
    assert!(text.contains(
        "pub fn get_types() -> Vec<&'static str> {\n    vec![\n        \"Color\",\n        \"Pixel\",\n        \"Image\",\n    ]\n}"
    ));
    assert!(text.contains(".register(\"Image\", yavl_runtime::validate::<Image>)"));
}

#[test]
fn test_enum_writer_uses_choice_text() {
    let text = render(PIXEL_SPEC);
    assert!(text.contains("Self::green => yavl_runtime::Yaml::String(\"green\".to_string()),"));
    assert!(text.contains("\"blue\" => Ok(Self::blue),"));
}

#[test]
fn test_keyword_names_become_raw_identifiers() {
    let text = render("Types:\n  Item:\n    type: String\n    match: bool\n");
    assert!(text.contains("pub r#type: String,"));
    assert!(text.contains("r#match: yavl_runtime::read_field(input, \"match\")?,"));
    assert!(text.contains("(\"type\", true),"));
}

#[test]
fn test_duplicate_enum_choice_is_rejected() {
    let spec = Spec::parse("Types:\n  Mode: [a, b, a]\n", None).unwrap();
    let err = generate(&spec, &GeneratorOptions::default(), &mut Vec::new()).unwrap_err();
    assert!(
        matches!(err, GenerateError::DuplicateChoice { ref type_name, ref choice } if type_name == "Mode" && choice == "a")
    );
}

#[test]
fn test_unknown_top_level_key_is_rejected() {
    let err = Spec::parse("Types: {}\nExtra: 1\n", None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid spec: Superfluous key \"Extra\" during conversion to type \"SpecType\""
    );
}

#[test]
fn test_missing_types_key_is_rejected() {
    let err = Spec::parse("ExtraIncludes: []\n", None).unwrap_err();
    assert!(err.to_string().contains("Missing key \"Types\""));
}

struct DerivingEmitter;

impl TypeEmitter for DerivingEmitter {
    fn emit_map_declaration(
        &self,
        ty: &GeneratedType,
        fields: &[FieldDef],
        out: &mut CodeWriter,
    ) -> io::Result<()> {
        out.line("#[derive(Debug, Clone, PartialEq, Default)]")?;
        out.line(format!("pub struct {} {{", ty.ident))?;
        for field in fields {
            out.line(format!("pub {}: {},", field.ident, field.rust_type()))?;
        }
        out.line("}")?;
        out.blank()
    }
}

#[test]
fn test_custom_emitter_overrides_one_step() {
    let spec = Spec::parse(
        "CustomCodeGenerator: [app, Deriving]\nTypes:\n  Point:\n    x: i32\n",
        None,
    )
    .unwrap();
    let mut emitters = EmitterRegistry::with_defaults();
    emitters.register("app", "Deriving", DerivingEmitter);

    let mut out = Vec::new();
    generate_with(&spec, &GeneratorOptions::default(), &emitters, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("#[derive(Debug, Clone, PartialEq, Default)]"));
    // Everything else is the default output
    assert!(text.contains("impl yavl_runtime::FromYaml for Point {"));
    assert!(text.contains("pub fn validate_simple("));

    let err = generate(&spec, &GeneratorOptions::default(), &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "Unknown custom code generator \"app.Deriving\"");
}

#[test]
fn test_binder_output_sections_in_order() {
    let grammar = Grammar::parse(
        r#"
map:
  name: [string]
  servers:
    list:
      map:
        host: [string]
        protocol: [{enum: [tcp, udp]}]
"#,
        Some("service.yaml"),
    )
    .unwrap();
    let binder = BinderGenerator::new(&grammar, "service").unwrap();
    let mut out = Vec::new();
    binder.generate(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let protocol = position(&text, "pub enum Protocol {");
    let server = position(&text, "pub struct Server {");
    let service = position(&text, "pub struct Service {");
    let first_reader = position(&text, "impl yavl_runtime::FromYaml for");
    let first_writer = position(&text, "impl yavl_runtime::ToYaml for");
    assert!(protocol < server && server < service);
    assert!(service < first_reader && first_reader < first_writer);
    assert!(text.contains("pub servers: Vec<Server>,"));
    assert!(!text.contains("get_types"));
}
