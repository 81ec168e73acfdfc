
use crate::properties::MemoryStore;
use crate::CtPolicy;

/// A single resolution scenario: the security properties in effect, the
/// hostname being queried, and the decision the resolver must reach.
struct TestCase<'a> {
    /// Security properties set for the duration of the query.
    pub properties: &'a [(&'a str, &'a str)],

    /// The hostname we are deciding enforcement for, if any.
    pub hostname: Option<&'a str>,

    pub expected: bool,
}

fn assert_resolves(case: &TestCase<'_>) {
    let store: MemoryStore = case.properties.iter().copied().collect();
    let policy = CtPolicy::new(store);

    assert_eq!(
        policy.is_ct_verification_required(case.hostname),
        case.expected,
        "properties {:?}, hostname {:?}",
        case.properties,
        case.hostname,
    );
}
