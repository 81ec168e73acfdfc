//! Resolution of the per-hostname Certificate Transparency enforcement
//! decision.
//!
//! The resolver is a pure function of the queried hostname and whatever the
//! property store returns at the time of the call. It takes no locks, keeps
//! no cache, and tolerates concurrent property writers; each lookup simply
//! observes whichever value is current.

use crate::properties::PropertyStore;

/// Global switch. CT enforcement is considered only when this property's
/// value, lowercased, is the word `true`.
pub const CT_ENABLE_PROPERTY: &str = "conscrypt.ct.enable";

/// Prefix of the per-domain enforcement properties. The reverse notation of
/// the domain, one label per `.`-separated component, is appended to it.
pub const CT_ENFORCE_PREFIX: &str = "conscrypt.ct.enforce";

/// Decides whether SCT verification must be enforced for a hostname.
///
/// Enforcement is configured through security properties named after the
/// reverse notation of the domain, with `.*` wildcards covering everything
/// under a prefix. For `foo.bar.com` the following properties are
/// consulted, later ones overriding earlier ones:
///
/// - `conscrypt.ct.enforce.*`
/// - `conscrypt.ct.enforce.com.*`
/// - `conscrypt.ct.enforce.com.bar.*`
/// - `conscrypt.ct.enforce.com.bar.foo`
///
/// Property names are matched byte-for-byte; only property *values* are
/// lowercased before interpretation. Callers wanting case-insensitive
/// hostname matching must lowercase the hostname themselves.
pub struct CtPolicy<S> {
    store: S,
}

impl<S: PropertyStore> CtPolicy<S> {
    /// Creates a resolver reading from `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns `true` when SCT verification must be enforced for
    /// connections to `hostname`.
    ///
    /// A `None` hostname never requires enforcement, and neither does any
    /// hostname while [`CT_ENABLE_PROPERTY`] is unset or not `true`.
    pub fn is_ct_verification_required(&self, hostname: Option<&str>) -> bool {
        let hostname = match hostname {
            Some(hostname) => hostname,
            None => return false,
        };

        match self.store.get(CT_ENABLE_PROPERTY) {
            Some(enabled) if parse_bool(&enabled) => {}
            _ => return false,
        }

        // The walk keeps going once it has a match so that settings on
        // deeper subdomains can override broader wildcards. Absent
        // properties leave the previous decision in place; present ones
        // always overwrite it, including with `false`.
        let mut required = false;
        let mut name = String::from(CT_ENFORCE_PREFIX);
        for label in reversed_labels(hostname) {
            if let Some(value) = self.store.get(&format!("{}.*", name)) {
                required = parse_bool(&value);
            }
            name.push('.');
            name.push_str(label);
        }

        if let Some(value) = self.store.get(&name) {
            required = parse_bool(&value);
        }

        log_decision(hostname, required);
        required
    }

    /// Returns `true` when SCT verification must be enforced for
    /// connections to `server`.
    ///
    /// DNS names are looked up by their ASCII form. IP addresses have no
    /// wildcard hierarchy to speak of but flow through the same property
    /// lookup as any other name.
    pub fn is_ct_verification_required_for_server(&self, server: &rustls::ServerName) -> bool {
        match server {
            rustls::ServerName::DnsName(name) => {
                self.is_ct_verification_required(Some(name.as_ref()))
            }
            rustls::ServerName::IpAddress(addr) => {
                self.is_ct_verification_required(Some(&addr.to_string()))
            }
            _ => false,
        }
    }
}

// A value enables enforcement only when it spells `true`; `1`, `yes`, and
// friends all read as `false`.
fn parse_bool(value: &str) -> bool {
    value.to_lowercase() == "true"
}

/// Splits `hostname` into DNS labels, most significant label first.
///
/// Empty labels are preserved, so `foo..bar` yields `["bar", "", "foo"]`.
/// Nothing is trimmed, lowercased, or validated, and IP literals get no
/// special treatment.
fn reversed_labels(hostname: &str) -> Vec<&str> {
    let mut labels: Vec<&str> = hostname.split('.').collect();
    labels.reverse();
    labels
}

// Log the resolved decision so that enforcement surprises can be traced to
// the property that caused them.
fn log_decision(_hostname: &str, _required: bool) {
    #[cfg(feature = "decision-logging")]
    log::debug!("CT enforcement for {:?}: {}", _hostname, _required);
}
