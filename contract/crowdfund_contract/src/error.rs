use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Access
    NotOwner = 1,
    NotManager = 2,
    NotInvestor = 3,
    NotOwnerOrFactory = 4,
    NotAuthorized = 5,
    Blacklisted = 6,
    NotOwningCampaign = 7,

    // State
    NotInitialized = 10,
    FactoryPaused = 11,
    AlreadyPaused = 12,
    AlreadyUnpaused = 13,
    CampaignClosed = 14,
    RequestCancelled = 15,
    RequestComplete = 16,
    AlreadyCancelled = 17,
    AlreadyComplete = 18,
    QuorumNotMet = 19,
    PoolClosed = 20,

    // Time windows
    ContributionClosed = 30,
    ApprovalWindowClosed = 31,
    ContributionStillOpen = 32,

    // Values
    BelowMinimum = 40,
    InsufficientFunds = 41,
    TaxMismatch = 42,
    DescriptionTooLong = 43,
    InvalidAmount = 44,

    // Repeats
    AlreadyInitialized = 50,
    AlreadyApproved = 51,
    AlreadyClaimed = 52,
    AlreadyRejected = 53,

    // Lookups
    CampaignNotFound = 60,
    RequestNotFound = 61,
    PoolNotFound = 62,
    LedgerNotFound = 63,

    ArithmeticError = 70,
}

/// Coarse classification of [`Error`], as seen by a caller deciding what to fix.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AccessDenied,
    InvalidState,
    WindowExpired,
    WindowNotYetOpen,
    ValueConstraint,
    AlreadyDone,
    NotFound,
    Arithmetic,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotOwner
            | Error::NotManager
            | Error::NotInvestor
            | Error::NotOwnerOrFactory
            | Error::NotAuthorized
            | Error::Blacklisted
            | Error::NotOwningCampaign => ErrorKind::AccessDenied,

            Error::NotInitialized
            | Error::FactoryPaused
            | Error::AlreadyPaused
            | Error::AlreadyUnpaused
            | Error::CampaignClosed
            | Error::RequestCancelled
            | Error::RequestComplete
            | Error::AlreadyCancelled
            | Error::AlreadyComplete
            | Error::QuorumNotMet
            | Error::PoolClosed => ErrorKind::InvalidState,

            Error::ContributionClosed | Error::ApprovalWindowClosed => ErrorKind::WindowExpired,
            Error::ContributionStillOpen => ErrorKind::WindowNotYetOpen,

            Error::BelowMinimum
            | Error::InsufficientFunds
            | Error::TaxMismatch
            | Error::DescriptionTooLong
            | Error::InvalidAmount => ErrorKind::ValueConstraint,

            Error::AlreadyInitialized
            | Error::AlreadyApproved
            | Error::AlreadyClaimed
            | Error::AlreadyRejected => ErrorKind::AlreadyDone,

            Error::CampaignNotFound
            | Error::RequestNotFound
            | Error::PoolNotFound
            | Error::LedgerNotFound => ErrorKind::NotFound,

            Error::ArithmeticError => ErrorKind::Arithmetic,
        }
    }
}
