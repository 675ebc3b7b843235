//! End-to-end properties of `sync` and `prune` against real temp trees.

use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::prelude::*;
use docsync_core::{MappingConfig, SiteConfig};
use docsync_sync::{prune, sync};
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, content).expect("write fixture");
}

/// Every file under `root`, relative, sorted.
fn files_under(root: &Path) -> Vec<String> {
    fn visit(dir: &Path, root: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).expect("read_dir") {
            let path = entry.expect("entry").path();
            if path.is_dir() {
                visit(&path, root, out);
            } else {
                let rel = path.strip_prefix(root).expect("prefix");
                out.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    let mut out = Vec::new();
    if root.exists() {
        visit(root, root, &mut out);
    }
    out.sort();
    out
}

fn read_all(root: &Path) -> Vec<(String, Vec<u8>)> {
    files_under(root)
        .into_iter()
        .map(|rel| {
            let bytes = fs::read(root.join(&rel)).expect("read");
            (rel, bytes)
        })
        .collect()
}

fn snapshot_fixture() -> TempDir {
    let snap = TempDir::new().expect("snapshot");
    write(snap.path(), "docs/guides/x.md", "see [y](./y.md)");
    write(snap.path(), "docs/guides/y.md", "back to [x](../guides/x.md)\n[abs](/docs/guides/x)\n");
    write(snap.path(), "docs/index.md", "upstream index");
    write(snap.path(), "docs/README.md", "readme");
    write(snap.path(), "docs/deep/copilot-instructions.md", "em — dash");
    write(snap.path(), "docs/.git/HEAD.md", "hidden");
    write(snap.path(), "docs/.vitepress/config.md", "upstream theme");
    write(snap.path(), "docs/assets/logo.png", "png");
    write(snap.path(), "CHANGELOG.md", "v1");
    snap
}

// ---------------------------------------------------------------------------
// 1. End-to-end scenario
// ---------------------------------------------------------------------------

#[test]
fn guide_and_changelog_are_mirrored() {
    let snap = TempDir::new().expect("snapshot");
    write(snap.path(), "docs/guides/x.md", "see [y](./y.md)");
    write(snap.path(), "CHANGELOG.md", "v1");
    let dest = assert_fs::TempDir::new().expect("dest");

    let written = sync(snap.path(), dest.path(), &SiteConfig::default()).expect("sync");
    assert_eq!(written, 2);

    let guide = fs::read_to_string(dest.path().join("guides/x.md")).expect("guide");
    let (header, body) = guide.split_once("\n\n").expect("header separator");
    assert!(header.starts_with("<!-- Source: ") && header.ends_with(" -->"));
    assert!(!header.contains('\n'));
    assert_eq!(body, "see [y](/y)");

    let changelog = fs::read_to_string(dest.path().join("changelog.md")).expect("changelog");
    assert_eq!(
        changelog,
        "<!-- Source: https://github.com/mapyr/mcp-hangar/blob/main/CHANGELOG.md -->\n\nv1"
    );
    dest.child("CHANGELOG.md").assert(predicate::path::missing());
}

#[test]
fn full_fixture_writes_only_copyable_files() {
    let snap = snapshot_fixture();
    let dest = TempDir::new().expect("dest");

    let written = sync(snap.path(), dest.path(), &SiteConfig::default()).expect("sync");

    assert_eq!(
        files_under(dest.path()),
        vec!["changelog.md", "guides/x.md", "guides/y.md"]
    );
    assert_eq!(written, 3);

    let y = fs::read_to_string(dest.path().join("guides/y.md")).expect("y");
    assert!(y.contains("back to [x](/guides/x)"), "got: {y}");
    assert!(y.contains("[abs](guides/x)"), "got: {y}");
}

// ---------------------------------------------------------------------------
// 2. Invariants
// ---------------------------------------------------------------------------

#[test]
fn second_run_is_byte_identical() {
    let snap = snapshot_fixture();
    let dest = TempDir::new().expect("dest");

    let first_count = sync(snap.path(), dest.path(), &SiteConfig::default()).expect("first");
    let first = read_all(dest.path());
    let second_count = sync(snap.path(), dest.path(), &SiteConfig::default()).expect("second");
    let second = read_all(dest.path());

    assert_eq!(first_count, second_count);
    assert_eq!(first, second, "provenance headers must not accumulate");
}

#[test]
fn local_files_are_never_overwritten() {
    let snap = snapshot_fixture();
    let dest = TempDir::new().expect("dest");
    write(dest.path(), "index.md", "site landing page");
    write(dest.path(), ".vitepress/config.md", "site theme");

    sync(snap.path(), dest.path(), &SiteConfig::default()).expect("sync");

    assert_eq!(
        fs::read_to_string(dest.path().join("index.md")).expect("index"),
        "site landing page"
    );
    assert_eq!(
        fs::read_to_string(dest.path().join(".vitepress/config.md")).expect("theme"),
        "site theme"
    );
}

#[test]
fn nested_local_directory_is_protected() {
    let snap = TempDir::new().expect("snapshot");
    write(snap.path(), "docs/theme/layout.md", "upstream");
    write(snap.path(), "docs/theme/extra.md", "upstream extra");
    let dest = TempDir::new().expect("dest");
    write(dest.path(), "theme/layout.md", "ours");

    let mut config = SiteConfig::default();
    config.mapping.local_paths = vec!["theme/".to_owned()];

    let written = sync(snap.path(), dest.path(), &config).expect("sync");
    assert_eq!(written, 0);
    assert_eq!(
        fs::read_to_string(dest.path().join("theme/layout.md")).expect("layout"),
        "ours"
    );
    assert!(!dest.path().join("theme/extra.md").exists());
}

#[test]
fn blocked_names_never_reach_destination() {
    let snap = snapshot_fixture();
    let dest = TempDir::new().expect("dest");

    sync(snap.path(), dest.path(), &SiteConfig::default()).expect("sync");

    let config = MappingConfig::default();
    for rel in files_under(dest.path()) {
        let name = rel.rsplit('/').next().expect("name");
        assert!(
            !config.blocked_filenames.iter().any(|b| b == name),
            "blocked file leaked: {rel}"
        );
    }
}

#[test]
fn hidden_subtree_contributes_nothing() {
    let snap = TempDir::new().expect("snapshot");
    write(snap.path(), "docs/.hidden/a.md", "a");
    write(snap.path(), "docs/.hidden/deeper/b.md", "b");
    let dest = TempDir::new().expect("dest");

    let written = sync(snap.path(), dest.path(), &SiteConfig::default()).expect("sync");
    assert_eq!(written, 0);
    assert!(files_under(dest.path()).is_empty());
    assert!(!dest.path().join(".hidden").exists());
}

#[test]
fn custom_docs_dir_and_remaps() {
    let snap = TempDir::new().expect("snapshot");
    write(snap.path(), "documentation/a.md", "a");
    write(snap.path(), "HISTORY.md", "h");
    write(snap.path(), "CHANGELOG.md", "ignored: no remap");
    let dest = TempDir::new().expect("dest");

    let yaml = "source:\n  docs_dir: documentation/\nmapping:\n  remaps:\n    - {source: HISTORY.md, dest: about/history.md}\n";
    let config = SiteConfig::from_yaml(&PathBuf::from("inline.yaml"), yaml).expect("config");

    let written = sync(snap.path(), dest.path(), &config).expect("sync");
    assert_eq!(written, 2);
    assert_eq!(files_under(dest.path()), vec!["a.md", "about/history.md"]);
    let a = fs::read_to_string(dest.path().join("a.md")).expect("a");
    assert!(a.contains("/blob/main/documentation/a.md -->"), "got: {a}");
}

// ---------------------------------------------------------------------------
// 3. Prune
// ---------------------------------------------------------------------------

#[test]
fn prune_keeps_locals_and_removes_everything_else() {
    let snap = snapshot_fixture();
    let root = assert_fs::TempDir::new().expect("root");
    let dest = root.child("docs");
    dest.child("index.md").write_str("site landing page").expect("index");
    dest.child(".vitepress/config.ts").write_str("export {}").expect("theme");
    dest.child("stray.txt").write_str("left over").expect("stray");
    sync(snap.path(), dest.path(), &SiteConfig::default()).expect("sync");

    let snapshot_dir = root.child(".docs-temp");
    snapshot_dir.child("docs/x.md").write_str("x").expect("snapshot");

    let report = prune(dest.path(), snapshot_dir.path(), &MappingConfig::default()).expect("prune");

    dest.child("index.md").assert("site landing page");
    dest.child(".vitepress/config.ts").assert("export {}");
    dest.child("guides").assert(predicate::path::missing());
    dest.child("changelog.md").assert(predicate::path::missing());
    dest.child("stray.txt").assert(predicate::path::missing());
    snapshot_dir.assert(predicate::path::missing());
    assert!(report.snapshot_removed);
    assert_eq!(report.kept.len(), 2);
    // guides, changelog.md, stray.txt, plus the empty `assets/` and `deep/` mirrors.
    assert_eq!(report.removed.len(), 5);
}

#[test]
fn prune_twice_is_a_noop() {
    let root = TempDir::new().expect("root");
    let dest = root.path().join("docs");
    write(&dest, "index.md", "local");
    write(&dest, "guides/x.md", "synced");
    let snapshot_dir = root.path().join(".docs-temp");

    prune(&dest, &snapshot_dir, &MappingConfig::default()).expect("first");
    let second = prune(&dest, &snapshot_dir, &MappingConfig::default()).expect("second");

    assert!(second.removed.is_empty());
    assert!(!second.snapshot_removed);
    assert_eq!(files_under(&dest), vec!["index.md"]);
}
