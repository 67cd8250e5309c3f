use serde::{Deserialize, Serialize};

/// Documented exports of a single entry module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDoc {
    /// File-system path of the module the symbols were read from.
    pub path: String,
    /// Documented exported symbols, in source order.
    pub symbols: Vec<ExportedSymbol>,
}

impl ModuleDoc {
    /// Creates an empty module documentation instance.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            symbols: Vec::new(),
        }
    }

    /// Returns the first symbol exported under `name`.
    pub fn find(&self, name: &str) -> Option<&ExportedSymbol> {
        self.symbols.iter().find(|symbol| symbol.name == name)
    }

    /// Returns `true` when no symbol was documented.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Documentation for an exported symbol (function, class, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedSymbol {
    /// Exported identifier name.
    pub name: String,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Primary description (free-form summary).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Parameter documentation.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<ParameterDoc>,
    /// Description of the return value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    /// Deprecated message, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    /// Example snippets extracted from JSDoc.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub examples: Vec<String>,
    /// Raw tags that were not mapped to dedicated fields.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<JsDocTag>,
    /// Source location for the symbol definition.
    pub location: SourceLocation,
}

impl ExportedSymbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, location: SourceLocation) -> Self {
        Self {
            name: name.into(),
            kind,
            summary: None,
            parameters: Vec::new(),
            returns: None,
            deprecated: None,
            examples: Vec::new(),
            tags: Vec::new(),
            location,
        }
    }

    /// Returns a copy of the symbol exported under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// Parameter documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDoc {
    pub name: String,
    /// Optional type hint extracted from JSDoc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParameterDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_hint: None,
            description: None,
        }
    }
}

/// Structured representation of an arbitrary JSDoc tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsDocTag {
    /// Tag identifier (e.g. `see`, `since`).
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl JsDocTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            type_hint: None,
            description: None,
        }
    }
}

/// Exported symbol kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Function,
    Class,
    Variable,
    Interface,
    TypeAlias,
    Enum,
    DefaultExport,
    #[default]
    Other,
}

impl SymbolKind {
    /// Human-readable label used by the generators.
    pub fn label(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Class => "class",
            Self::Variable => "variable",
            Self::Interface => "interface",
            Self::TypeAlias => "type",
            Self::Enum => "enum",
            Self::DefaultExport => "default export",
            Self::Other => "export",
        }
    }
}

/// Lightweight source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// One-based line index.
    pub line: u32,
    /// One-based column index.
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}
