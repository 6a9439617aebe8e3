/// Which blocks the type-spec generator emits. Everything is on by default.
///
/// The dispatch block calls each type's reader, so `emit_validator` needs
/// `emit_readers` for the output to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub emit_declarations: bool,
    pub emit_readers: bool,
    pub emit_writers: bool,
    pub emit_validator: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            emit_declarations: true,
            emit_readers: true,
            emit_writers: true,
            emit_validator: true,
        }
    }
}

impl GeneratorOptions {
    /// Whether the output refers to the runtime crate at all.
    pub fn uses_runtime(&self) -> bool {
        self.emit_readers || self.emit_writers || self.emit_validator
    }
}
