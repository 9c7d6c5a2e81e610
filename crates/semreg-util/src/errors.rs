use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all semreg operations.
#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The registry document could not be read or decoded.
    #[error("Registry config error: {message}")]
    #[diagnostic(help("Check your semreg.toml for syntax errors"))]
    Config { message: String },

    /// A target version field is blank.
    #[error("empty version for field {field}")]
    #[diagnostic(code(semreg::empty_target_field))]
    EmptyTargetField { field: String },

    /// A version string is not a valid semantic version after canonicalization.
    #[error("invalid semver {version} for field {field}")]
    #[diagnostic(
        code(semreg::invalid_version),
        help("Versions take the form MAJOR.MINOR.PATCH with an optional `v` prefix")
    )]
    InvalidVersionFormat { field: String, version: String },

    /// A contract address is not `0x` followed by 40 hex digits.
    #[error("invalid address {value}")]
    InvalidAddress { value: String },

    /// Resolution was attempted against a set with no entries.
    #[error("no implementations found")]
    #[diagnostic(code(semreg::empty_set))]
    EmptySet,

    /// No entry in a non-empty set reaches the target version.
    #[error("cannot resolve semver {target}")]
    #[diagnostic(code(semreg::unresolvable))]
    Unresolvable { target: String },

    /// Resolution of a single contract role failed.
    #[error("{role}: {source}")]
    #[diagnostic(code(semreg::role_resolution_failed))]
    RoleResolutionFailed {
        role: String,
        #[source]
        source: Box<RegistryError>,
    },

    /// The requested network has no entry in the registry.
    #[error("unknown network '{name}'")]
    #[diagnostic(help("Run `semreg check` to list the configured networks"))]
    UnknownNetwork { name: String },
}

impl RegistryError {
    /// Wrap `self` with the name of the role whose resolution produced it.
    pub fn for_role(self, role: impl Into<String>) -> Self {
        RegistryError::RoleResolutionFailed {
            role: role.into(),
            source: Box::new(self),
        }
    }
}

/// Convenience alias for fallible core registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
