//! Path utilities

use std::path::Path;

/// Normalize path separators to forward slashes (for packer file lists)
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Get relative path and normalize separators
pub fn relative_path<P: AsRef<Path>>(path: P, base: P) -> Option<String> {
    path.as_ref()
        .strip_prefix(base.as_ref())
        .ok()
        .map(normalize_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("Content\\Paks\\Game.pak"), "Content/Paks/Game.pak");
        assert_eq!(normalize_path("Content/Paks"), "Content/Paks");
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path("mods/out/Game.locres", "mods"),
            Some("out/Game.locres".to_string())
        );
        assert_eq!(relative_path("elsewhere/file", "mods"), None);
    }
}
