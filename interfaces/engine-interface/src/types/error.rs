use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Reentrancy = 2,

    InvalidAmount = 100,
    MismatchedConfigLength = 101,
    EmptyCollateralTokens = 102,
    DuplicateCollateralToken = 103,

    NotAllowedToken = 200,
    HealthFactorBroken = 201,
    HealthFactorOk = 202,
    HealthFactorNotImproved = 203,
    NoDebtToBurn = 204,
    InsufficientCollateral = 205,
    InsufficientDebt = 206,

    PriceUnavailable = 300,
    InvalidAssetPrice = 301,
    StalePrice = 302,

    MintFailed = 400,
    BurnFailed = 401,
    TransferFailed = 402,

    MathOverflowError = 500,
}
