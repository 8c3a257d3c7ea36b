/// Declared type of a `TYPE name te expr` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Integer,
    Float,
    Text,
}

impl TypeTag {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "integer" => Some(TypeTag::Integer),
            "float" => Some(TypeTag::Float),
            "string" => Some(TypeTag::Text),
            _ => None,
        }
    }

    pub fn cpp_type(self) -> &'static str {
        match self {
            TypeTag::Integer => "int",
            TypeTag::Float => "float",
            TypeTag::Text => "std::string",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintStatement {
    /// One re-joined expression per comma-separated argument.
    pub args: Vec<String>,
    pub line: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationStatement {
    pub ty: TypeTag,
    pub name: String,
    pub init: String,
    pub line: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Print(PrintStatement),
    Declaration(DeclarationStatement),
}

impl Statement {
    pub fn line(&self) -> usize {
        match self {
            Statement::Print(p) => p.line,
            Statement::Declaration(d) => d.line,
        }
    }
}
