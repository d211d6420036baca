//! Filesystem-level tests for the package scanner.

use std::fs;
use std::path::{Path, PathBuf};

use doctree::{
    Error, Extractor, ExtractorConfig, FsReader, Package, PackageScanner, ScanConfig,
};
use tempfile::TempDir;

fn default_scanner() -> PackageScanner {
    PackageScanner::new(
        Box::new(FsReader),
        Extractor::default(),
        ScanConfig::default(),
    )
    .unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn scan_directory_builds_package_with_modules() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("pkg");
    fs::create_dir(&root).unwrap();

    write(&root, "__init__.py", "\"\"\"docstring\"\"\"\n");
    write(&root, "notes.txt", "not a module");
    write(&root, "stack.py", "def push():\n    \"\"\"doc\"\"\"\n");

    let tree = default_scanner().scan_directory(&root).unwrap();

    assert_eq!(tree.name, "pkg");
    assert_eq!(tree.docstring, "docstring");
    assert_eq!(tree.modules.len(), 1);
    assert_eq!(tree.modules[0].name, "stack.py");
    assert_eq!(tree.modules[0].path, PathBuf::from("pkg/stack.py"));
    assert!(!tree.is_empty());

    // The synthetic top-level class holds the module's free function
    let classes = &tree.modules[0].classes;
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].name, "");
    assert_eq!(classes[0].methods[0].name, "push");
    assert_eq!(classes[0].methods[0].docstring, "doc");
}

#[test]
fn package_without_marker_has_empty_docstring() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("pkg");
    fs::create_dir(&root).unwrap();
    write(&root, "a.py", "def a():\n    \"\"\"doc\"\"\"\n");

    let tree = default_scanner().scan_directory(&root).unwrap();
    assert_eq!(tree.docstring, "");
}

#[test]
fn marker_file_is_not_listed_as_module() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("pkg");
    fs::create_dir(&root).unwrap();
    write(&root, "__init__.py", "\"\"\"docstring\"\"\"\n");

    let tree = default_scanner().scan_directory(&root).unwrap();
    assert!(tree.modules.is_empty());
    assert!(tree.is_empty());
}

#[test]
fn ignore_masks_exclude_test_files() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("pkg");
    fs::create_dir(&root).unwrap();
    write(&root, "test_foo.py", "def t():\n    \"\"\"doc\"\"\"\n");
    write(&root, "foo_test.py", "def t():\n    \"\"\"doc\"\"\"\n");
    write(&root, "keep.py", "def k():\n    \"\"\"doc\"\"\"\n");

    let tree = default_scanner().scan_directory(&root).unwrap();
    let names: Vec<&str> = tree.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["keep.py"]);
}

#[test]
fn private_files_need_the_nonpublic_flag() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("pkg");
    fs::create_dir(&root).unwrap();
    write(&root, "_hidden.py", "def h():\n    \"\"\"doc\"\"\"\n");

    let tree = default_scanner().scan_directory(&root).unwrap();
    assert!(tree.modules.is_empty());

    let scanner = PackageScanner::new(
        Box::new(FsReader),
        Extractor::new(ExtractorConfig {
            include_nonpublic: true,
            include_undocumented: false,
        }),
        ScanConfig {
            include_nonpublic: true,
            ..ScanConfig::default()
        },
    )
    .unwrap();
    let tree = scanner.scan_directory(&root).unwrap();
    let names: Vec<&str> = tree.modules.iter().map(|m| m.name.as_str()).collect();
    assert!(names.contains(&"_hidden.py"));
}

#[test]
fn nested_directories_become_nested_packages() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("pkg");
    fs::create_dir_all(root.join("inner/leaf")).unwrap();
    fs::create_dir(root.join("hollow")).unwrap();
    write(
        &root.join("inner/leaf"),
        "deep.py",
        "def d():\n    \"\"\"doc\"\"\"\n",
    );

    let tree = default_scanner().scan_directory(&root).unwrap();

    assert!(!tree.is_empty());
    assert_eq!(tree.iter().count(), 4);

    let hollow = tree.packages.iter().find(|p| p.name == "hollow").unwrap();
    assert!(hollow.is_empty());

    let inner = tree.packages.iter().find(|p| p.name == "inner").unwrap();
    assert!(!inner.is_empty());
    assert_eq!(inner.packages[0].name, "leaf");
    assert_eq!(
        inner.packages[0].modules[0].path,
        PathBuf::from("pkg/inner/leaf/deep.py")
    );
}

#[test]
fn scan_paths_classifies_files_and_directories() {
    let tmp = TempDir::new().unwrap();
    let loose = write(tmp.path(), "loose.py", "def l():\n    \"\"\"doc\"\"\"\n");
    let dir = tmp.path().join("sub");
    fs::create_dir(&dir).unwrap();
    write(&dir, "inside.py", "def i():\n    \"\"\"doc\"\"\"\n");

    let container = Package::new(PathBuf::new(), "", "", vec![], vec![]);
    let tree = default_scanner()
        .scan_paths(&[loose, dir, tmp.path().join("missing.py")], container)
        .unwrap();

    assert_eq!(tree.modules.len(), 1);
    assert_eq!(tree.modules[0].name, "loose.py");
    assert_eq!(tree.packages.len(), 1);
    assert_eq!(tree.packages[0].name, "sub");
    assert_eq!(tree.packages[0].modules[0].name, "inside.py");
    assert!(!tree.is_empty());
}

#[test]
fn unreadable_module_fails_the_scan() {
    let scanner = default_scanner();
    let result = scanner.extract_module(Path::new("definitely/not/here.py"), Path::new(""));
    assert!(matches!(result, Err(Error::FileAccess { .. })));
}

#[test]
fn missing_root_fails_the_scan() {
    let scanner = default_scanner();
    let result = scanner.scan_directory(Path::new("definitely/not/here"));
    assert!(matches!(result, Err(Error::FileAccess { .. })));
}

#[test]
fn extracted_classes_carry_their_methods() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("pkg");
    fs::create_dir(&root).unwrap();
    write(
        &root,
        "shapes.py",
        concat!(
            "class Circle(Shape):\n",
            "    \"\"\"A round shape.\"\"\"\n",
            "\n",
            "    def area(self):\n",
            "        \"\"\"Surface area.\"\"\"\n",
            "        return 3.14 * self.r ** 2\n",
        ),
    );

    let tree = default_scanner().scan_directory(&root).unwrap();
    let classes = &tree.modules[0].classes;
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].name, "Circle");
    assert_eq!(classes[0].parent, "Shape");
    assert_eq!(classes[0].docstring, "A round shape.");
    assert_eq!(classes[0].methods.len(), 1);
    assert_eq!(classes[0].methods[0].name, "area");
    assert_eq!(classes[0].methods[0].parameters, vec!["self"]);
    assert_eq!(classes[0].methods[0].docstring, "Surface area.");
}
