use std::fs;
use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingPatternKind, Comment, Declaration, ExportDefaultDeclaration, ExportDefaultDeclarationKind,
    ExportNamedDeclaration, Expression, ModuleExportName, Statement, VariableDeclaration,
};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::{DocsError, Result};
use crate::jsdoc::{parse_jsdoc, ParsedJsDoc};
use crate::model::{ExportedSymbol, ModuleDoc, SourceLocation, SymbolKind};

/// Options controlling documentation extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Include symbols marked with `@internal` or `@private`.
    pub include_internal: bool,
}

/// Extracts exported-symbol documentation from JavaScript / TypeScript modules using OXC.
///
/// Handles exported declarations, `export default` (including `export default name`
/// pointing at a local declaration), local `export { a, b as c }` lists, and
/// re-exports from relative modules. Re-exports from other packages are not followed.
#[derive(Debug, Clone, Default)]
pub struct DocsExtractor {
    options: ExtractOptions,
}

impl DocsExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract documentation from a file on disk.
    ///
    /// Relative re-exports (`export { a } from './a'`, `export * from './b'`) are
    /// followed, so an entry module that only re-exports still documents its members.
    pub fn extract_from_path(&self, path: impl AsRef<Path>) -> Result<ModuleDoc> {
        let mut visited = Visited::default();
        self.extract_file(path.as_ref(), &mut visited)
    }

    /// Extract documentation from an in-memory source string.
    ///
    /// The path is used for diagnostics, to pick the dialect (`.ts`, `.jsx`, ...)
    /// and to resolve relative re-exports; the source is always parsed as an ES module.
    pub fn extract_from_source(&self, path: impl AsRef<Path>, source: &str) -> Result<ModuleDoc> {
        let path = path.as_ref();
        let mut visited = Visited::default();
        visited.insert(module_key(path), None);
        self.extract_module(path, source, &mut visited)
    }

    fn extract_file(&self, path: &Path, visited: &mut Visited) -> Result<ModuleDoc> {
        let key = module_key(path);
        match visited.get(&key) {
            Some(Some(module)) => return Ok(module.clone()),
            Some(None) => {
                debug!(path = %path.display(), "re-export cycle, skipping module");
                return Ok(ModuleDoc::new(path.to_string_lossy()));
            }
            None => {}
        }
        visited.insert(key.clone(), None);

        let source = fs::read_to_string(path).map_err(|error| DocsError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        let module = self.extract_module(path, &source, visited)?;
        visited.insert(key, Some(module.clone()));
        Ok(module)
    }

    fn extract_module(&self, path: &Path, source: &str, visited: &mut Visited) -> Result<ModuleDoc> {
        let source_type = SourceType::from_path(path)
            .unwrap_or_else(|_| SourceType::mjs())
            .with_module(true);

        let allocator = Allocator::default();
        let parsed = Parser::new(&allocator, source, source_type).parse();
        if parsed.panicked || !parsed.errors.is_empty() {
            let mut diagnostics: Vec<String> =
                parsed.errors.iter().map(|error| error.to_string()).collect();
            if diagnostics.is_empty() {
                diagnostics.push("parser aborted".to_string());
            }
            return Err(DocsError::parse_error(path.to_path_buf(), &diagnostics));
        }

        let program = &parsed.program;
        let scope = ModuleScope::new(source, program.comments.iter());
        let locals = scope.local_declarations(&program.body);

        let mut module = ModuleDoc::new(path.to_string_lossy());
        for statement in &program.body {
            let symbols = match statement {
                Statement::ExportNamedDeclaration(export) => match &export.source {
                    Some(from) => {
                        let names = export
                            .specifiers
                            .iter()
                            .map(|specifier| {
                                (
                                    module_export_name(&specifier.local),
                                    module_export_name(&specifier.exported),
                                )
                            })
                            .collect();
                        self.reexports(path, from.value.as_str(), Reexport::Named(names), visited)?
                    }
                    None => self.named_exports(export, &scope, &locals),
                },
                Statement::ExportAllDeclaration(export) => match &export.exported {
                    // `export * as ns` exposes a namespace object, not its members.
                    Some(_) => Vec::new(),
                    None => {
                        self.reexports(path, export.source.value.as_str(), Reexport::All, visited)?
                    }
                },
                Statement::ExportDefaultDeclaration(export) => {
                    self.default_export(export, &scope, &locals).into_iter().collect()
                }
                _ => Vec::new(),
            };
            module.symbols.extend(symbols);
        }

        debug!(
            path = %path.display(),
            symbols = module.symbols.len(),
            "extracted module documentation"
        );
        Ok(module)
    }

    /// Symbols another module exposes through `export ... from '<specifier>'`.
    ///
    /// Only relative specifiers are followed. Bare package specifiers and modules
    /// that do not exist contribute nothing.
    fn reexports(
        &self,
        from: &Path,
        specifier: &str,
        reexport: Reexport,
        visited: &mut Visited,
    ) -> Result<Vec<ExportedSymbol>> {
        if !is_relative(specifier) {
            debug!(from = %from.display(), %specifier, "not following package re-export");
            return Ok(Vec::new());
        }
        let Some(target) = resolve_relative(from, specifier) else {
            warn!(from = %from.display(), %specifier, "re-exported module not found");
            return Ok(Vec::new());
        };

        let module = self.extract_file(&target, visited)?;
        let symbols = match reexport {
            Reexport::All => module
                .symbols
                .into_iter()
                .filter(|symbol| symbol.kind != SymbolKind::DefaultExport)
                .collect(),
            Reexport::Named(names) => names
                .iter()
                .filter_map(|(local, exported)| {
                    let is_default = local == "default";
                    module
                        .symbols
                        .iter()
                        .find(|symbol| {
                            (symbol.kind == SymbolKind::DefaultExport) == is_default
                                && (is_default || symbol.name == *local)
                        })
                        .map(|symbol| symbol.renamed(exported.as_str()))
                })
                .collect(),
        };
        Ok(symbols)
    }

    fn named_exports(
        &self,
        export: &ExportNamedDeclaration,
        scope: &ModuleScope,
        locals: &FxHashMap<String, LocalDeclaration>,
    ) -> Vec<ExportedSymbol> {
        let doc = scope.doc_at(export.span.start);
        if let Some(declaration) = &export.declaration {
            return self.declared_symbols(declaration, doc.as_ref(), scope);
        }

        export
            .specifiers
            .iter()
            .filter_map(|specifier| {
                let local = module_export_name(&specifier.local);
                let exported = module_export_name(&specifier.exported);
                match locals.get(&local) {
                    Some(declaration) => {
                        self.symbol_from_local(exported, declaration, doc.as_ref())
                    }
                    None => self.make_symbol(
                        exported,
                        SymbolKind::Other,
                        scope.location(specifier.span.start),
                        doc.as_ref(),
                    ),
                }
            })
            .collect()
    }

    fn default_export(
        &self,
        export: &ExportDefaultDeclaration,
        scope: &ModuleScope,
        locals: &FxHashMap<String, LocalDeclaration>,
    ) -> Option<ExportedSymbol> {
        let doc = scope.doc_at(export.span.start);
        match &export.declaration {
            ExportDefaultDeclarationKind::FunctionDeclaration(function) => {
                let name = function
                    .id
                    .as_ref()
                    .map_or_else(|| "default".to_string(), |id| id.name.to_string());
                self.make_symbol(
                    name,
                    SymbolKind::DefaultExport,
                    scope.location(function.span.start),
                    doc.as_ref(),
                )
            }
            ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                let name = class
                    .id
                    .as_ref()
                    .map_or_else(|| "default".to_string(), |id| id.name.to_string());
                self.make_symbol(
                    name,
                    SymbolKind::DefaultExport,
                    scope.location(class.span.start),
                    doc.as_ref(),
                )
            }
            ExportDefaultDeclarationKind::Identifier(ident) => {
                let name = ident.name.to_string();
                match locals.get(&name) {
                    Some(declaration) => {
                        let mut symbol =
                            self.symbol_from_local(name, declaration, doc.as_ref())?;
                        symbol.kind = SymbolKind::DefaultExport;
                        Some(symbol)
                    }
                    None => self.make_symbol(
                        name,
                        SymbolKind::DefaultExport,
                        scope.location(export.span.start),
                        doc.as_ref(),
                    ),
                }
            }
            other => self.make_symbol(
                "default",
                SymbolKind::DefaultExport,
                scope.location(other.span().start),
                doc.as_ref(),
            ),
        }
    }

    fn declared_symbols(
        &self,
        declaration: &Declaration,
        doc: Option<&ParsedJsDoc>,
        scope: &ModuleScope,
    ) -> Vec<ExportedSymbol> {
        let single = |name: &str, kind: SymbolKind, span: Span| -> Vec<ExportedSymbol> {
            self.make_symbol(name, kind, scope.location(span.start), doc)
                .into_iter()
                .collect()
        };

        match declaration {
            Declaration::FunctionDeclaration(function) => match &function.id {
                Some(id) => single(&id.name, SymbolKind::Function, function.span),
                None => Vec::new(),
            },
            Declaration::ClassDeclaration(class) => match &class.id {
                Some(id) => single(&id.name, SymbolKind::Class, class.span),
                None => Vec::new(),
            },
            Declaration::VariableDeclaration(variable) => variable_bindings(variable)
                .into_iter()
                .filter_map(|(name, kind, span)| {
                    self.make_symbol(name, kind, scope.location(span.start), doc)
                })
                .collect(),
            Declaration::TSTypeAliasDeclaration(alias) => {
                single(&alias.id.name, SymbolKind::TypeAlias, alias.span)
            }
            Declaration::TSInterfaceDeclaration(interface) => {
                single(&interface.id.name, SymbolKind::Interface, interface.span)
            }
            Declaration::TSEnumDeclaration(enumeration) => {
                single(&enumeration.id.name, SymbolKind::Enum, enumeration.span)
            }
            _ => Vec::new(),
        }
    }

    /// Documents an export that refers to a local declaration. The declaration's own
    /// comment wins; a comment on the export statement is the fallback.
    fn symbol_from_local(
        &self,
        name: String,
        declaration: &LocalDeclaration,
        export_doc: Option<&ParsedJsDoc>,
    ) -> Option<ExportedSymbol> {
        let doc = declaration.doc.as_ref().or(export_doc);
        self.make_symbol(name, declaration.kind, declaration.location, doc)
    }

    fn make_symbol(
        &self,
        name: impl Into<String>,
        kind: SymbolKind,
        location: SourceLocation,
        doc: Option<&ParsedJsDoc>,
    ) -> Option<ExportedSymbol> {
        if doc.is_some_and(|doc| doc.is_internal) && !self.options.include_internal {
            return None;
        }
        let mut symbol = ExportedSymbol::new(name, kind, location);
        if let Some(doc) = doc {
            apply_doc(&mut symbol, doc);
        }
        Some(symbol)
    }
}

/// Modules already extracted while following re-exports. `None` marks a module
/// that is still being extracted.
type Visited = FxHashMap<PathBuf, Option<ModuleDoc>>;

/// What a re-export statement takes from its source module.
enum Reexport {
    /// `export { local as exported } from '...'`
    Named(Vec<(String, String)>),
    /// `export * from '...'`
    All,
}

/// Extensions tried, in order, when a re-export specifier omits one.
const MODULE_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "tsx"];

fn is_relative(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../")
}

/// Resolves a relative specifier against the importing file: the path as
/// written, then with each extension appended, then `<dir>/index.<ext>`.
fn resolve_relative(from: &Path, specifier: &str) -> Option<PathBuf> {
    let base = from.parent().unwrap_or(Path::new("")).join(specifier);
    if base.is_file() {
        return Some(base);
    }

    let with_extension = MODULE_EXTENSIONS.iter().map(|ext| {
        let mut candidate = base.clone().into_os_string();
        candidate.push(".");
        candidate.push(ext);
        PathBuf::from(candidate)
    });
    let index_files = MODULE_EXTENSIONS
        .iter()
        .map(|ext| base.join(format!("index.{ext}")));

    with_extension
        .chain(index_files)
        .find(|candidate| candidate.is_file())
}

fn module_key(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// A top-level declaration that is not itself exported.
#[derive(Debug)]
struct LocalDeclaration {
    kind: SymbolKind,
    location: SourceLocation,
    doc: Option<ParsedJsDoc>,
}

/// Per-module lookup tables: JSDoc comments by attachment offset and line starts.
struct ModuleScope<'s> {
    source: &'s str,
    comments: FxHashMap<u32, Span>,
    line_starts: Vec<u32>,
}

impl<'s> ModuleScope<'s> {
    fn new<'c>(source: &'s str, comments: impl IntoIterator<Item = &'c Comment>) -> Self {
        let comments = comments
            .into_iter()
            .filter(|comment| comment.is_jsdoc())
            .map(|comment| (comment.attached_to, comment.content_span()))
            .collect();

        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(idx, _)| (idx + 1) as u32),
        );

        Self {
            source,
            comments,
            line_starts,
        }
    }

    /// Parsed JSDoc attached to the node starting at `offset`.
    fn doc_at(&self, offset: u32) -> Option<ParsedJsDoc> {
        self.comments
            .get(&offset)
            .map(|span| parse_jsdoc(&self.source[span.start as usize..span.end as usize]))
    }

    fn location(&self, offset: u32) -> SourceLocation {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        };
        SourceLocation::new(idx as u32 + 1, offset - self.line_starts[idx] + 1)
    }

    fn local_declarations(&self, body: &[Statement]) -> FxHashMap<String, LocalDeclaration> {
        let mut locals = FxHashMap::default();
        for statement in body {
            let doc = || self.doc_at(statement.span().start);
            match statement {
                Statement::FunctionDeclaration(function) => {
                    if let Some(id) = &function.id {
                        locals.insert(
                            id.name.to_string(),
                            LocalDeclaration {
                                kind: SymbolKind::Function,
                                location: self.location(function.span.start),
                                doc: doc(),
                            },
                        );
                    }
                }
                Statement::ClassDeclaration(class) => {
                    if let Some(id) = &class.id {
                        locals.insert(
                            id.name.to_string(),
                            LocalDeclaration {
                                kind: SymbolKind::Class,
                                location: self.location(class.span.start),
                                doc: doc(),
                            },
                        );
                    }
                }
                Statement::VariableDeclaration(variable) => {
                    for (name, kind, span) in variable_bindings(variable) {
                        locals.insert(
                            name,
                            LocalDeclaration {
                                kind,
                                location: self.location(span.start),
                                doc: doc(),
                            },
                        );
                    }
                }
                _ => {}
            }
        }
        locals
    }
}

/// Simple identifier bindings of a variable declaration. Bindings initialised with
/// a function or arrow expression are reported as functions.
fn variable_bindings(variable: &VariableDeclaration) -> Vec<(String, SymbolKind, Span)> {
    variable
        .declarations
        .iter()
        .filter_map(|declarator| {
            let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind else {
                return None;
            };
            let kind = match &declarator.init {
                Some(Expression::ArrowFunctionExpression(_) | Expression::FunctionExpression(_)) => {
                    SymbolKind::Function
                }
                _ => SymbolKind::Variable,
            };
            Some((ident.name.to_string(), kind, declarator.span))
        })
        .collect()
}

fn module_export_name(name: &ModuleExportName) -> String {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
        ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
        ModuleExportName::StringLiteral(literal) => literal.value.to_string(),
    }
}

fn apply_doc(symbol: &mut ExportedSymbol, doc: &ParsedJsDoc) {
    symbol.summary = doc.summary.clone();
    symbol.parameters = doc.parameters.clone();
    symbol.returns = doc.returns.clone();
    symbol.deprecated = doc.deprecated.clone();
    symbol.examples = doc.examples.clone();
    symbol.tags = doc.tags.clone();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_is_one_based() {
        let scope = ModuleScope::new("a\nbc\n", std::iter::empty());
        assert_eq!(scope.location(0), SourceLocation::new(1, 1));
        assert_eq!(scope.location(3), SourceLocation::new(2, 2));
    }

    #[test]
    fn rejects_invalid_source() {
        let extractor = DocsExtractor::default();
        let err = extractor
            .extract_from_source("src/index.js", "export function (")
            .unwrap_err();
        assert!(matches!(err, DocsError::Parse { .. }));
    }
}
