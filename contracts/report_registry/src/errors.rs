use registry_common::CommonError;
use soroban_sdk::contracttype;

/// Error categories for classifying registry failures
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Invalid arguments: malformed ids, zero digests, bad nonces, bad bounds
    Validation = 1,
    /// Caller lacks the role the operation requires
    Authorization = 2,
    /// Lookup of a report that was never submitted
    NotFound = 3,
    /// Conflicts with existing state: duplicates, last-admin removal
    StateConflict = 4,
    /// Contract-level conditions such as the pause switch
    System = 5,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotFound = 4,
    AlreadyExists = 5,
    InvalidId = 6,
    InvalidHash = 7,
    InvalidNonce = 8,
    InvalidAddress = 9,
    DuplicateCommitment = 10,
    BatchBounds = 11,
    Paused = 12,
    NotPaused = 13,
    ReentrantCall = 14,
    NonceOverflow = 15,
    LastAdmin = 16,
    IndexCorrupted = 17,
}

impl RegistryError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::InvalidId
            | RegistryError::InvalidHash
            | RegistryError::InvalidNonce
            | RegistryError::InvalidAddress
            | RegistryError::BatchBounds => ErrorCategory::Validation,
            RegistryError::Unauthorized => ErrorCategory::Authorization,
            RegistryError::NotFound => ErrorCategory::NotFound,
            RegistryError::AlreadyExists
            | RegistryError::DuplicateCommitment
            | RegistryError::AlreadyInitialized
            | RegistryError::NonceOverflow
            | RegistryError::LastAdmin => ErrorCategory::StateConflict,
            RegistryError::NotInitialized
            | RegistryError::Paused
            | RegistryError::NotPaused
            | RegistryError::ReentrantCall
            | RegistryError::IndexCorrupted => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RegistryError::InvalidId
            | RegistryError::InvalidHash
            | RegistryError::InvalidNonce
            | RegistryError::BatchBounds
            | RegistryError::NotFound
            | RegistryError::NotPaused => ErrorSeverity::Low,
            RegistryError::AlreadyExists
            | RegistryError::DuplicateCommitment
            | RegistryError::InvalidAddress
            | RegistryError::AlreadyInitialized
            | RegistryError::LastAdmin => ErrorSeverity::Medium,
            RegistryError::Unauthorized
            | RegistryError::NotInitialized
            | RegistryError::NonceOverflow => ErrorSeverity::High,
            RegistryError::Paused
            | RegistryError::ReentrantCall
            | RegistryError::IndexCorrupted => ErrorSeverity::Critical,
        }
    }

    /// Whether an off-chain caller may retry once the blocking condition
    /// changes (pause lifted, nonce resynced, batch parameters adjusted).
    /// Everything else is permanent for the same arguments.
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            RegistryError::Paused | RegistryError::InvalidNonce | RegistryError::BatchBounds
        )
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            RegistryError::NotInitialized => "Registry has not been initialized",
            RegistryError::AlreadyInitialized => "Registry is already initialized",
            RegistryError::Unauthorized => "Caller does not hold the required role",
            RegistryError::NotFound => "No report is registered under this id",
            RegistryError::AlreadyExists => "A report is already registered under this id",
            RegistryError::InvalidId => "Report id is empty or too long",
            RegistryError::InvalidHash => "Digest must not be all zeroes",
            RegistryError::InvalidNonce => "Nonce is not the submitter's next nonce",
            RegistryError::InvalidAddress => "Address cannot hold a registry role",
            RegistryError::DuplicateCommitment => "Commitment has already been announced",
            RegistryError::BatchBounds => "Batch offset or size is out of bounds",
            RegistryError::Paused => "Registry writes are paused",
            RegistryError::NotPaused => "Registry is not paused",
            RegistryError::ReentrantCall => "Reentrant call rejected",
            RegistryError::NonceOverflow => "Submitter nonce counter is exhausted",
            RegistryError::LastAdmin => "The last admin cannot be removed",
            RegistryError::IndexCorrupted => "Report index is missing a slot below the count",
        }
    }
}

impl From<CommonError> for RegistryError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::InvalidNonce => RegistryError::InvalidNonce,
            CommonError::NonceOverflow => RegistryError::NonceOverflow,
            CommonError::ReentrantCall => RegistryError::ReentrantCall,
        }
    }
}
