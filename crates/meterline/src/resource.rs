use serde::de::DeserializeOwned;

/// An API resource addressable under `/{PATH}` with responses wrapped under
/// `ROOT`. Implemented by response record types; the generic find / find-all /
/// create / update commands are parameterized over it.
pub trait ApiResource: DeserializeOwned {
    /// Plural path segment, also the envelope key of collection bodies
    /// (e.g. `invoices`).
    const PATH: &'static str;

    /// Singular envelope key of single-object bodies (e.g. `invoice`).
    const ROOT: &'static str;
}
