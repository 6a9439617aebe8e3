//! Build script for yavl-bindings.
//!
//! Generates one module per type spec in `specs/` and one per grammar in
//! `grammars/`, writing them to OUT_DIR for `include!`.

use std::env;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use yavl_codegen::{BinderGenerator, GeneratorOptions, Spec};
use yavl_validation::Grammar;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    for path in yaml_files(Path::new("specs")) {
        let content = fs::read_to_string(&path).expect("Failed to read spec");
        let name = path.to_string_lossy();
        let spec = Spec::parse(&content, Some(&*name))
            .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
        let mut out = create_output(&out_dir, &path);
        yavl_codegen::generate(&spec, &GeneratorOptions::default(), &mut out)
            .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    }

    for path in yaml_files(Path::new("grammars")) {
        let content = fs::read_to_string(&path).expect("Failed to read grammar");
        let name = path.to_string_lossy();
        let grammar = Grammar::parse(&content, Some(&*name))
            .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
        let top = stem(&path);
        let binder = BinderGenerator::new(&grammar, &top)
            .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
        let mut out = create_output(&out_dir, &path);
        binder
            .generate(&mut out)
            .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    }

    println!("cargo:rerun-if-changed=specs");
    println!("cargo:rerun-if-changed=grammars");
    println!("cargo:rerun-if-changed=build.rs");
}

/// `.yaml` files directly under `dir`, sorted for a stable build.
fn yaml_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .expect("Failed to list input directory")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
        .collect();
    files.sort();
    files
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .expect("Input file has no name")
}

fn create_output(out_dir: &Path, input: &Path) -> BufWriter<File> {
    let target = out_dir.join(format!("{}.rs", stem(input)));
    BufWriter::new(File::create(target).expect("Failed to create generated file"))
}
