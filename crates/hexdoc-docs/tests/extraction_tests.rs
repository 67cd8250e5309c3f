use hexdoc_docs::model::SymbolKind;
use hexdoc_docs::{DocsError, DocsExtractor, ExtractOptions};

#[test]
fn extracts_function_documentation() {
    let source = r#"
        /**
         * Add two numbers together.
         * @param {number} a first value
         * @param {number} b second value
         * @returns {number} sum of a and b
         */
        export function add(a, b) {
            return a + b;
        }
    "#;

    let extractor = DocsExtractor::new(ExtractOptions::default());
    let module = extractor
        .extract_from_source("src/index.js", source)
        .expect("extraction should succeed");

    assert_eq!(module.symbols.len(), 1);
    let symbol = &module.symbols[0];
    assert_eq!(symbol.name, "add");
    assert_eq!(symbol.kind, SymbolKind::Function);
    assert_eq!(symbol.parameters.len(), 2);
    assert_eq!(symbol.summary.as_deref(), Some("Add two numbers together."));
    assert_eq!(symbol.returns.as_deref(), Some("number sum of a and b"));
}

#[test]
fn arrow_function_constants_are_functions() {
    let source = r#"
        /** Square a number. */
        export const square = (n) => n * n;
        export const answer = 42;
    "#;

    let module = DocsExtractor::default()
        .extract_from_source("src/index.js", source)
        .unwrap();

    let square = module.find("square").unwrap();
    assert_eq!(square.kind, SymbolKind::Function);
    assert_eq!(square.summary.as_deref(), Some("Square a number."));
    assert_eq!(module.find("answer").unwrap().kind, SymbolKind::Variable);
}

#[test]
fn export_list_uses_local_declarations() {
    let source = r#"
        /**
         * Build a pair.
         * @param {*} a
         * @param {*} b
         */
        const cons = (a, b) => (f) => f(a, b);

        /** First element. */
        function car(pair) {
            return pair((a) => a);
        }

        export { cons, car as head };
    "#;

    let module = DocsExtractor::default()
        .extract_from_source("src/index.js", source)
        .unwrap();

    let names: Vec<_> = module.symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["cons", "head"]);
    assert_eq!(module.symbols[0].parameters.len(), 2);
    assert_eq!(module.symbols[1].summary.as_deref(), Some("First element."));
    assert_eq!(module.symbols[1].kind, SymbolKind::Function);
}

#[test]
fn default_export_takes_function_name() {
    let source = r#"
        /** Make a quux. */
        export default function Quux() {}
    "#;

    let module = DocsExtractor::default()
        .extract_from_source("src/index.js", source)
        .unwrap();

    let quux = module.find("Quux").expect("named after the function");
    assert_eq!(quux.kind, SymbolKind::DefaultExport);
    assert_eq!(quux.summary.as_deref(), Some("Make a quux."));
}

#[test]
fn default_export_of_identifier_uses_local_docs() {
    let source = r#"
        /** Render a tree. */
        const render = (tree) => String(tree);
        export default render;
    "#;

    let module = DocsExtractor::default()
        .extract_from_source("src/index.js", source)
        .unwrap();

    let render = module.find("render").unwrap();
    assert_eq!(render.kind, SymbolKind::DefaultExport);
    assert_eq!(render.summary.as_deref(), Some("Render a tree."));
}

#[test]
fn anonymous_default_export_is_named_default() {
    let module = DocsExtractor::default()
        .extract_from_source("src/index.js", "export default () => 1;")
        .unwrap();
    assert!(module.find("default").is_some());
}

fn write_module(root: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = root.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn named_reexports_follow_relative_modules() {
    let temp = tempfile::tempdir().unwrap();
    write_module(
        temp.path(),
        "src/pairs.js",
        "/** Build a pair. */\nexport const cons = (a, b) => [a, b];\n/** First. */\nexport const car = (p) => p[0];\n",
    );
    write_module(
        temp.path(),
        "src/strings.js",
        "/** Shout. */\nexport default function shout(s) { return s.toUpperCase(); }\n",
    );
    let index = write_module(
        temp.path(),
        "src/index.js",
        "export { cons, car as head } from './pairs';\nexport { default as loud } from './strings.js';\n",
    );

    let module = DocsExtractor::default().extract_from_path(&index).unwrap();

    let names: Vec<_> = module.symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["cons", "head", "loud"]);
    assert_eq!(module.find("cons").unwrap().summary.as_deref(), Some("Build a pair."));
    assert_eq!(module.find("head").unwrap().summary.as_deref(), Some("First."));
    assert_eq!(module.find("loud").unwrap().summary.as_deref(), Some("Shout."));
}

#[test]
fn star_reexports_skip_default_exports() {
    let temp = tempfile::tempdir().unwrap();
    write_module(
        temp.path(),
        "src/list/index.js",
        "/** Length. */\nexport function length(l) { return l.length; }\nexport default function List() {}\n",
    );
    let index = write_module(
        temp.path(),
        "src/index.js",
        "export * from './list';\nexport * as ns from './list';\n",
    );

    let module = DocsExtractor::default().extract_from_path(&index).unwrap();

    let names: Vec<_> = module.symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["length"]);
}

#[test]
fn reexport_cycles_terminate() {
    let temp = tempfile::tempdir().unwrap();
    write_module(
        temp.path(),
        "src/a.js",
        "export * from './b.js';\n/** A. */\nexport function a() {}\n",
    );
    write_module(
        temp.path(),
        "src/b.js",
        "export * from './a.js';\n/** B. */\nexport function b() {}\n",
    );

    let module = DocsExtractor::default()
        .extract_from_path(temp.path().join("src/a.js"))
        .unwrap();

    let names: Vec<_> = module.symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn package_and_missing_reexports_contribute_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let index = write_module(
        temp.path(),
        "src/index.js",
        "export { map } from 'lodash';\nexport * from './gone.js';\n/** Kept. */\nexport function kept() {}\n",
    );

    let module = DocsExtractor::default().extract_from_path(&index).unwrap();

    let names: Vec<_> = module.symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["kept"]);
}

#[test]
fn broken_reexported_module_is_parse_error() {
    let temp = tempfile::tempdir().unwrap();
    write_module(temp.path(), "src/bad.js", "export function (");
    let index = write_module(temp.path(), "src/index.js", "export * from './bad.js';\n");

    let err = DocsExtractor::default().extract_from_path(&index).unwrap_err();
    assert!(matches!(err, DocsError::Parse { ref path, .. } if path.ends_with("bad.js")));
}

#[test]
fn skips_internal_symbols_by_default() {
    let source = r#"
        /** @internal */
        export function hidden() {}
    "#;

    let module = DocsExtractor::default()
        .extract_from_source("src/index.js", source)
        .expect("extraction should succeed");

    assert!(module.symbols.is_empty());
}

#[test]
fn includes_internal_symbols_when_requested() {
    let source = r#"
        /** @internal */
        export const internalValue = 42;
    "#;

    let extractor = DocsExtractor::new(ExtractOptions {
        include_internal: true,
    });

    let module = extractor
        .extract_from_source("src/index.js", source)
        .expect("extraction should succeed");

    assert_eq!(module.symbols.len(), 1);
    assert_eq!(module.symbols[0].name, "internalValue");
}

#[test]
fn typescript_entries_are_supported() {
    let source = r#"
        /** A point. */
        export interface Point { x: number; y: number }
        export type Pair<T> = [T, T];
    "#;

    let module = DocsExtractor::default()
        .extract_from_source("src/index.ts", source)
        .unwrap();

    assert_eq!(module.find("Point").unwrap().kind, SymbolKind::Interface);
    assert_eq!(module.find("Pair").unwrap().kind, SymbolKind::TypeAlias);
}

#[test]
fn reads_from_disk() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("index.js");
    std::fs::write(&path, "/** Hi. */\nexport const greet = () => 'hi';\n").unwrap();

    let module = DocsExtractor::default().extract_from_path(&path).unwrap();
    assert_eq!(module.find("greet").unwrap().location.line, 2);
}

#[test]
fn missing_file_is_io_error() {
    let temp = tempfile::tempdir().unwrap();
    let err = DocsExtractor::default()
        .extract_from_path(temp.path().join("nope.js"))
        .unwrap_err();
    assert!(matches!(err, DocsError::Io { .. }));
}
