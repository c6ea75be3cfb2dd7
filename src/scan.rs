//! Manifest generation from a content directory (native only).
//!
//! Produces the `structure.json` consumed by the viewer:
//! - files with an included extension become leaves
//! - directories come before files, each group sorted case-insensitively
//! - hidden and tool directories are skipped, empty directories omitted
//! - paths are `<src-name>/<relative path>` with `/` separators

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use notify::{Config, EventKind, PollWatcher, RecursiveMode, Watcher};
use thiserror::Error;

use crate::core::FileTree;
use crate::models::FileNode;

/// Extensions (lowercase) of files listed in the manifest.
pub const INCLUDED_EXTENSIONS: &[&str] = &["md", "txt", "html", "json"];

/// Directory names never descended into, on top of hidden ones.
pub const EXCLUDED_DIRS: &[&str] = &[".git", ".vscode", "__pycache__", "node_modules", "bin", "obj"];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory '{0}' does not exist")]
    NotFound(PathBuf),
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl ScanError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub fn is_included_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| INCLUDED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

pub fn is_included_dir(name: &str) -> bool {
    !name.starts_with('.') && !EXCLUDED_DIRS.contains(&name)
}

/// Name used as the manifest root and path prefix.
fn root_name(src: &Path) -> String {
    let named = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            src.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        });
    named.unwrap_or_else(|| "root".to_string())
}

fn check_source(src: &Path) -> Result<(), ScanError> {
    if !src.exists() {
        return Err(ScanError::NotFound(src.to_path_buf()));
    }
    if !src.is_dir() {
        return Err(ScanError::NotADirectory(src.to_path_buf()));
    }
    Ok(())
}

/// Directory entries split into (dirs, files), both in manifest order.
fn sorted_entries(dir: &Path) -> Result<(Vec<(String, PathBuf)>, Vec<(String, PathBuf)>), ScanError> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))? {
        let entry = entry.map_err(|e| ScanError::io(dir, e))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type().map_err(|e| ScanError::io(&path, e))?;

        if file_type.is_dir() {
            if is_included_dir(&name) {
                dirs.push((name, path));
            }
        } else if is_included_file(&path) {
            files.push((name, path));
        }
    }

    let by_name = |a: &(String, PathBuf), b: &(String, PathBuf)| {
        a.0.to_lowercase().cmp(&b.0.to_lowercase()).then_with(|| a.0.cmp(&b.0))
    };
    dirs.sort_by(by_name);
    files.sort_by(by_name);
    Ok((dirs, files))
}

/// Children of `dir`, whose manifest path is `prefix`.
fn scan_children(dir: &Path, prefix: &str) -> Result<Vec<FileNode>, ScanError> {
    let (dirs, files) = sorted_entries(dir)?;
    let mut children = Vec::with_capacity(dirs.len() + files.len());

    for (name, path) in dirs {
        let node_path = format!("{prefix}/{name}");
        let grandchildren = scan_children(&path, &node_path)?;
        if !grandchildren.is_empty() {
            children.push(FileNode::directory(&name, &node_path, grandchildren));
        }
    }
    for (name, _) in files {
        let node_path = format!("{prefix}/{name}");
        children.push(FileNode::file(&name, &node_path));
    }
    Ok(children)
}

/// Build the manifest tree rooted at `src`.
pub fn scan(src: &Path) -> Result<FileNode, ScanError> {
    check_source(src)?;
    let name = root_name(src);
    let children = scan_children(src, &name)?;
    Ok(FileNode::directory(&name, &name, children))
}

/// Write `root` as pretty-printed JSON.
pub fn write_manifest(root: &FileNode, output: &Path) -> Result<(), ScanError> {
    let json = serde_json::to_string_pretty(root)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ScanError::io(parent, e))?;
    }
    fs::write(output, json).map_err(|e| ScanError::io(output, e))
}

/// Scan `src` and write the manifest to `output`, returning the node count.
pub fn generate(src: &Path, output: &Path) -> Result<usize, ScanError> {
    let root = scan(src)?;
    write_manifest(&root, output)?;
    Ok(FileTree::new(root).count())
}

// =============================================================================
// Watch Mode
// =============================================================================

/// What one batch of filesystem events led to.
#[derive(Debug)]
pub enum WatchReport {
    /// Manifest rewritten with this many entries.
    Regenerated(usize),
    /// Regeneration failed; the next change retries.
    Failed(ScanError),
}

/// Whether a change at `path` can affect the manifest.
///
/// Paths under skipped directories and the manifest itself are ignored.
/// A path without extension may be a removed directory, so it counts.
pub fn affects_manifest(src: &Path, output: &Path, path: &Path) -> bool {
    if path == output || same_file(path, output) {
        return false;
    }
    let relative = path.strip_prefix(src).unwrap_or(path);
    let dirs: Vec<_> = relative
        .parent()
        .map(|parent| parent.components().collect())
        .unwrap_or_default();
    let skipped = dirs.iter().any(|component| match component {
        Component::Normal(name) => !is_included_dir(&name.to_string_lossy()),
        _ => false,
    });
    !skipped && (is_included_file(path) || path.extension().is_none())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn is_relevant(src: &Path, output: &Path, event: &notify::Event) -> bool {
    !matches!(event.kind, EventKind::Access(_))
        && event.paths.iter().any(|p| affects_manifest(src, output, p))
}

/// Regenerate the manifest for every batch of relevant events on `events`.
///
/// Events already queued when one arrives are folded into the same batch.
/// Scan and watcher errors are reported and the loop keeps going; it only
/// returns once the sending side is gone.
pub fn regenerate_on_events(
    events: &Receiver<notify::Result<notify::Event>>,
    src: &Path,
    output: &Path,
    mut report: impl FnMut(WatchReport),
) {
    while let Ok(first) = events.recv() {
        let mut relevant = false;
        for event in std::iter::once(first).chain(events.try_iter()) {
            match event {
                Ok(event) => relevant |= is_relevant(src, output, &event),
                Err(e) => report(WatchReport::Failed(e.into())),
            }
        }
        if !relevant {
            continue;
        }
        match generate(src, output) {
            Ok(count) => report(WatchReport::Regenerated(count)),
            Err(e) => report(WatchReport::Failed(e)),
        }
    }
}

/// Poll `src` every `interval`, regenerating `output` until the process ends.
pub fn watch(
    src: &Path,
    output: &Path,
    interval: Duration,
    report: impl FnMut(WatchReport),
) -> Result<(), ScanError> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = PollWatcher::new(tx, Config::default().with_poll_interval(interval))?;
    watcher.watch(src, RecursiveMode::Recursive)?;
    regenerate_on_events(&rx, src, output, report);
    Ok(())
}
