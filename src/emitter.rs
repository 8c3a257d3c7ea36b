// dekhao → C++ emitter
// Walks the recognized statements and produces a complete C++ program.

use std::fmt;

use crate::ast::{DeclarationStatement, PrintStatement, Statement, TypeTag};

const INDENT: &str = "    ";

/// Language features the generated program relies on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Features {
    /// A `string` declaration was emitted; needs `<string>`.
    pub text: bool,
    /// A `float` declaration was emitted. No header needed today.
    pub floating: bool,
}

impl Features {
    fn record(&mut self, ty: TypeTag) {
        match ty {
            TypeTag::Text => self.text = true,
            TypeTag::Float => self.floating = true,
            TypeTag::Integer => {}
        }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["iostream"];
        if self.text {
            headers.push("string");
        }
        headers
    }
}

/// Generated C++ code lines plus the features they need. `Display` renders
/// the full translation unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedProgram {
    pub lines: Vec<String>,
    pub features: Features,
}

impl fmt::Display for GeneratedProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for header in self.features.headers() {
            writeln!(f, "#include <{}>", header)?;
        }
        writeln!(f, "using namespace std;")?;
        writeln!(f)?;
        writeln!(f, "int main() {{")?;
        for line in &self.lines {
            writeln!(f, "{}{}", INDENT, line)?;
        }
        writeln!(f, "{}return 0;", INDENT)?;
        writeln!(f, "}}")
    }
}

#[derive(Default)]
pub struct CppEmitter {
    lines: Vec<String>,
    features: Features,
}

impl CppEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit_program(&mut self, statements: &[Statement]) -> GeneratedProgram {
        self.lines.clear();
        self.features = Features::default();

        for stmt in statements {
            self.emit_statement(stmt);
        }

        log::debug!(
            "emitted {} statement(s), features: {:?}",
            self.lines.len(),
            self.features
        );

        GeneratedProgram {
            lines: std::mem::take(&mut self.lines),
            features: self.features,
        }
    }

    fn emit_statement(&mut self, stmt: &Statement) {
        let line = match stmt {
            Statement::Print(p) => self.emit_print(p),
            Statement::Declaration(d) => self.emit_declaration(d),
        };
        self.lines.push(line);
    }

    // std::cout << a << b << std::endl;
    fn emit_print(&self, p: &PrintStatement) -> String {
        let mut out = String::from("std::cout");
        for arg in &p.args {
            out.push_str(" << ");
            out.push_str(arg);
        }
        out.push_str(" << std::endl;");
        out
    }

    fn emit_declaration(&mut self, d: &DeclarationStatement) -> String {
        self.features.record(d.ty);
        format!("{} {} = {};", d.ty.cpp_type(), d.name, d.init)
    }
}

pub fn generate(statements: &[Statement]) -> GeneratedProgram {
    CppEmitter::new().emit_program(statements)
}
