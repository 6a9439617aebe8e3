//! Identifier and type-string helpers.

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super", "_"];

/// Turn `name` into a usable Rust identifier.
///
/// Keywords become raw identifiers (`type` → `r#type`). Returns `None` when
/// the name cannot be an identifier at all.
pub fn rust_ident(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_alphabetic() || first == '_') || !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    if NON_RAW_KEYWORDS.contains(&name) {
        return None;
    }
    if KEYWORDS.contains(&name) {
        return Some(format!("r#{}", name));
    }
    Some(name.to_string())
}

/// Rewrite a C-style array suffix into Rust array syntax.
///
/// `u8[8]` becomes `[u8; 8]` and `u8[2][3]` becomes `[[u8; 3]; 2]`. Any other
/// type string is returned unchanged.
pub fn rust_field_type(type_string: &str) -> String {
    let type_string = type_string.trim();
    let Some(open) = type_string.find('[') else {
        return type_string.to_string();
    };
    let (base, suffix) = type_string.split_at(open);
    let base = base.trim();
    if base.is_empty() {
        return type_string.to_string();
    }

    let mut lengths = Vec::new();
    let mut rest = suffix;
    while let Some(group) = rest.strip_prefix('[') {
        let Some(close) = group.find(']') else {
            return type_string.to_string();
        };
        let length = group[..close].trim();
        if length.is_empty() || !length.chars().all(|c| c.is_ascii_digit()) {
            return type_string.to_string();
        }
        lengths.push(length);
        rest = &group[close + 1..];
    }
    if !rest.is_empty() {
        return type_string.to_string();
    }

    // The innermost dimension is the last suffix.
    lengths
        .iter()
        .rev()
        .fold(base.to_string(), |inner, length| format!("[{}; {}]", inner, length))
}

/// Whether a field declared with this type may be absent from a document.
pub fn is_optional_type(type_string: &str) -> bool {
    let t = type_string.trim();
    t.starts_with("Option<") || t.starts_with("std::option::Option<")
}

/// `server_list` → `ServerList`, `maxConnections` → `MaxConnections`.
///
/// Only the first letter of each part is changed; inner capitals are kept
/// rather than lowercased, so `HTTPServer` stays `HTTPServer` instead of
/// becoming `Httpserver`.
pub fn pascal_case(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Strip one trailing `s`: `Servers` → `Server`.
pub fn singular(name: &str) -> String {
    match name.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

/// Quote a string as a Rust string literal.
pub fn string_literal(value: &str) -> String {
    format!("{:?}", value)
}
