/// Accumulates generated code.
///
/// Text goes into one of two append-only regions: the header, written
/// while the program's preamble and declarations are produced, and the
/// body, holding all statement text. [`Emitter::finish`] joins them.
#[derive(Debug, Default)]
pub struct Emitter {
    header: String,
    code: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw text to the body.
    pub fn emit(&mut self, code: &str) {
        self.code.push_str(code);
    }

    /// Appends a line to the body.
    pub fn emit_line(&mut self, code: &str) {
        self.code.push_str(code);
        self.code.push('\n');
    }

    /// Appends a line to the header.
    pub fn header_line(&mut self, code: &str) {
        self.header.push_str(code);
        self.header.push('\n');
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.code
    }

    /// Consumes the emitter, returning the header followed by the body.
    pub fn finish(self) -> String {
        let mut output = self.header;
        output.push_str(&self.code);
        output
    }
}
