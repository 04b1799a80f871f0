use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate the path of a plist crate as seen from the Cargo.toml of the
/// crate that invokes a proc-macro.
///
/// # Example
///
/// ```rust
/// # use plist_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("plist_reflect"));
/// ```
///
/// Reading the manifest is not cheap, call this once per macro invocation.
///
/// # Resolution rules
///
/// 1. A crate listed in `dependencies` resolves to `::crate_name`.
/// 2. A `plist_` crate reached through the `plist_core` facade resolves to
///    `::plist_core::short_name` (e.g. `plist_reflect` -> `::plist_core::reflect`).
/// 3. Steps 1-2 are repeated for `dev-dependencies`.
/// 4. Otherwise `::crate_name`.
///
/// A crate that expands its own macros needs `extern crate self as name;`
/// in its root so that `::name` resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "plist_core";
const CRATE_PREFIX: &str = "plist_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let mut path = PathBuf::from(dir);
        path.push("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()));
        Self::parse_manifest(text.into_boxed_str())
            .unwrap_or_else(|| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_manifest(text: Box<str>) -> Option<Document<Box<str>>> {
        Document::parse(text).ok()
    }

    #[inline]
    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let short = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::parse_path(&format!("::{FACADE_NAME}::{short}")));
        }
        None
    }

    fn resolve(manifest: &Document<Box<str>>, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|section| match manifest.get(section) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Return the path of the crate `name` following the resolution rules
    /// in the type-level documentation.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        Self::resolve(&self.manifest, name)
    }

    /// Run `func` with the cached [`Manifest`] of the caller's Cargo.toml.
    ///
    /// The cache is refreshed when the file's modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = std::fs::metadata(&manifest_path)
            .and_then(|metadata| metadata.modified())
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn segments(path: &syn::Path) -> Vec<String> {
        assert!(path.leading_colon.is_some());
        path.segments.iter().map(|s| s.ident.to_string()).collect()
    }

    fn resolve(toml: &str, name: &str) -> Vec<String> {
        let doc = Manifest::parse_manifest(toml.into()).unwrap();
        segments(&Manifest::resolve(&doc, name))
    }

    #[test]
    fn direct_dependency_wins() {
        let toml = "[dependencies]\nplist_reflect = \"0.0.1\"\nplist_core = \"0.0.1\"\n";
        assert_eq!(resolve(toml, "plist_reflect"), ["plist_reflect"]);
    }

    #[test]
    fn facade_dependency() {
        let toml = "[dependencies]\nplist_core = \"0.0.1\"\n";
        assert_eq!(resolve(toml, "plist_reflect"), ["plist_core", "reflect"]);
    }

    #[test]
    fn dev_dependencies_and_fallback() {
        let toml = "[dev-dependencies]\nplist_core = \"0.0.1\"\n";
        assert_eq!(resolve(toml, "plist_value"), ["plist_core", "value"]);
        assert_eq!(resolve("", "serde"), ["serde"]);
    }
}
