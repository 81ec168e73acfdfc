use std::env;

use super::PropertyStore;

/// Security properties read from the process environment.
///
/// The property key is used verbatim as the variable name, so enabling the
/// policy means exporting a variable literally called `conscrypt.ct.enable`.
/// Most shells refuse `.` in variable names, but `execve` and container
/// runtimes pass such names through fine; use `env` or your process
/// supervisor's environment stanza to set them.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvStore;

impl PropertyStore for EnvStore {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}
