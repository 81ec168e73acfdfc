#![doc = include_str!("../README.md")]

use std::path::Path;

use once_cell::sync::Lazy;

mod policy;
pub mod properties;

pub use policy::{CtPolicy, CT_ENABLE_PROPERTY, CT_ENFORCE_PREFIX};

use properties::{MemoryStore, PropertiesError, PropertyStore};

/// Test suites covering resolution scenarios and property sources.
#[cfg(test)]
mod tests;

// The registry starts empty; enforcement stays off until a property
// writer says otherwise.
static SECURITY_PROPERTIES: Lazy<MemoryStore> = Lazy::new(MemoryStore::new);

/// Decides whether SCT verification is required for `hostname`, reading the
/// process-wide security property registry.
///
/// This is a convenience binding for callers configured through
/// [`set_security_property`] or [`load_security_properties`]. Code that
/// injects its own configuration should build a [`CtPolicy`] over an
/// explicit store instead.
pub fn is_ct_verification_required(hostname: Option<&str>) -> bool {
    CtPolicy::new(&*SECURITY_PROPERTIES).is_ct_verification_required(hostname)
}

/// Sets a security property in the process-wide registry, replacing any
/// previous value.
pub fn set_security_property(key: impl Into<String>, value: impl Into<String>) {
    SECURITY_PROPERTIES.set(key, value);
}

/// Returns the current value of a security property in the process-wide
/// registry.
pub fn security_property(key: &str) -> Option<String> {
    SECURITY_PROPERTIES.get(key)
}

/// Removes a security property from the process-wide registry.
///
/// Removal is not the same as setting the value to `false`: an absent
/// per-domain property leaves a broader wildcard's decision in place, while
/// an explicit `false` overrides it.
pub fn clear_security_property(key: &str) {
    SECURITY_PROPERTIES.remove(key);
}

/// Seeds the process-wide registry from a `key=value` properties file and
/// returns the number of entries read.
///
/// Entries already present in the registry are overwritten when the file
/// sets the same key; other entries are left untouched.
pub fn load_security_properties(path: impl AsRef<Path>) -> Result<usize, PropertiesError> {
    let path = path.as_ref();
    let entries = properties::parse_properties(&std::fs::read_to_string(path)?)?;
    let count = entries.len();
    for (key, value) in entries {
        SECURITY_PROPERTIES.set(key, value);
    }
    log::debug!(
        "loaded {} security properties from {}",
        count,
        path.display()
    );
    Ok(count)
}
