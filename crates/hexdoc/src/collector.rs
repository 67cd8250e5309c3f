//! Import collection.
//!
//! Parses each source as an ES module and folds its top-level `import`
//! declarations from vendor packages into a [`PackageUsageMap`].

use indexmap::{IndexMap, IndexSet};
use oxc_allocator::Allocator;
use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier, ModuleExportName, Statement};
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::inputs::SourceFile;

/// Package-name prefix used when none is configured.
pub const DEFAULT_VENDOR_PREFIX: &str = "hexlet";

/// One binding introduced by an import specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportBinding {
    /// `import local from 'pkg'`
    Default { local: String },
    /// `import { imported as local } from 'pkg'`
    Named { imported: String, local: String },
    /// `import * as local from 'pkg'`
    Namespace { local: String },
}

impl ImportBinding {
    /// The package member this binding documents.
    ///
    /// Default imports are known by their local name, named imports by the
    /// imported member (never the alias). Namespace imports say nothing about
    /// which members are used and yield `None`.
    pub fn used_name(&self) -> Option<&str> {
        match self {
            Self::Default { local } => Some(local),
            Self::Named { imported, .. } => Some(imported),
            Self::Namespace { .. } => None,
        }
    }
}

/// One name pulled from one import declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReference {
    pub source_package: String,
    pub name: String,
}

/// Vendor package name mapped to the distinct names imported from it.
///
/// Every key starts with the collector's prefix and every set is non-empty.
/// Iteration follows first appearance, which keeps output stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageUsageMap(IndexMap<String, IndexSet<String>>);

impl PackageUsageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one reference, ignoring duplicates.
    pub fn insert(&mut self, reference: ImportReference) {
        self.0
            .entry(reference.source_package)
            .or_default()
            .insert(reference.name);
    }

    pub fn get(&self, package: &str) -> Option<&IndexSet<String>> {
        self.0.get(package)
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.0.iter().map(|(package, names)| (package.as_str(), names))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<ImportReference> for PackageUsageMap {
    fn extend<I: IntoIterator<Item = ImportReference>>(&mut self, iter: I) {
        for reference in iter {
            self.insert(reference);
        }
    }
}

impl FromIterator<ImportReference> for PackageUsageMap {
    fn from_iter<I: IntoIterator<Item = ImportReference>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl IntoIterator for PackageUsageMap {
    type Item = (String, IndexSet<String>);
    type IntoIter = indexmap::map::IntoIter<String, IndexSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Collects vendor imports from source files.
#[derive(Debug, Clone)]
pub struct ImportCollector {
    prefix: String,
}

impl Default for ImportCollector {
    fn default() -> Self {
        Self::new(DEFAULT_VENDOR_PREFIX)
    }
}

impl ImportCollector {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` when `package` is in scope for this collector.
    pub fn matches(&self, package: &str) -> bool {
        package.starts_with(&self.prefix)
    }

    /// Builds the usage map for a set of sources.
    ///
    /// The first source that fails to parse aborts the whole collection.
    pub fn collect<'s, I>(&self, sources: I) -> Result<PackageUsageMap>
    where
        I: IntoIterator<Item = &'s SourceFile>,
    {
        let mut map = PackageUsageMap::new();
        for source in sources {
            map.extend(self.collect_file(source)?);
        }
        debug!(packages = map.len(), "collected vendor imports");
        Ok(map)
    }

    /// Lists the vendor references of a single source, in declaration order.
    ///
    /// Duplicates are kept here; they collapse once folded into a map.
    pub fn collect_file(&self, source: &SourceFile) -> Result<Vec<ImportReference>> {
        let allocator = Allocator::default();
        let source_type = SourceType::from_path(&source.path)
            .unwrap_or_else(|_| SourceType::mjs())
            .with_module(true);
        let parsed = Parser::new(&allocator, &source.contents, source_type).parse();

        if parsed.panicked || !parsed.errors.is_empty() {
            let mut diagnostics: Vec<String> =
                parsed.errors.iter().map(|error| error.to_string()).collect();
            if diagnostics.is_empty() {
                diagnostics.push("parser aborted".to_string());
            }
            return Err(Error::Parse {
                path: source.path.clone(),
                message: diagnostics.join("; "),
            });
        }

        let mut references = Vec::new();
        for statement in &parsed.program.body {
            let Statement::ImportDeclaration(import) = statement else {
                continue;
            };
            let package = import.source.value.as_str();
            if !self.matches(package) {
                continue;
            }
            references.extend(import_bindings(import).iter().filter_map(|binding| {
                binding.used_name().map(|name| ImportReference {
                    source_package: package.to_string(),
                    name: name.to_string(),
                })
            }));
        }

        debug!(
            path = %source.path.display(),
            references = references.len(),
            "scanned imports"
        );
        Ok(references)
    }
}

/// Maps each specifier of a declaration to an [`ImportBinding`].
///
/// The match is exhaustive: a new specifier kind in the parser must
/// be handled here before the crate compiles again.
fn import_bindings(import: &ImportDeclaration) -> Vec<ImportBinding> {
    let Some(specifiers) = &import.specifiers else {
        return Vec::new();
    };

    specifiers
        .iter()
        .map(|specifier| match specifier {
            ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => ImportBinding::Default {
                local: default.local.name.to_string(),
            },
            ImportDeclarationSpecifier::ImportSpecifier(named) => ImportBinding::Named {
                imported: module_export_name(&named.imported),
                local: named.local.name.to_string(),
            },
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(namespace) => {
                ImportBinding::Namespace {
                    local: namespace.local.name.to_string(),
                }
            }
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
