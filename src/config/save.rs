use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use super::types::SpriteCutConfig;

/// Write a config as pretty-printed JSON.
pub fn save_config(config: &SpriteCutConfig, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)
        .with_context(|| "failed to serialize config to JSON")?;

    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    Ok(())
}

/// Express `path` relative to `base`, climbing with `..` where needed, so that
/// `base.join(result)` names the same file.
///
/// Both paths are normalised lexically first. When no relative form exists
/// (one absolute and one relative, different Windows drives, or a base that
/// climbs above its own start) the normalised `path` is returned instead.
pub fn make_relative(path: &Path, base: &Path) -> String {
    let path = normalize(path);
    let base = normalize(base);

    let path_parts: Vec<_> = path.components().collect();
    let base_parts: Vec<_> = base.components().collect();
    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let unreachable = path.has_root() != base.has_root()
        || path_parts[common..]
            .iter()
            .any(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        || base_parts[common..].iter().any(|c| {
            matches!(
                c,
                Component::Prefix(_) | Component::RootDir | Component::ParentDir
            )
        });
    if unreachable {
        return path.to_string_lossy().into_owned();
    }

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        relative.to_string_lossy().into_owned()
    }
}

/// Drop `.` components and fold `name/..` pairs without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }

    out.iter().collect()
}
