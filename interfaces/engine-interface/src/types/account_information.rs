use soroban_sdk::contracttype;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AccountInformation {
    /// Minted and not yet burned debt units
    pub debt: i128,
    /// Value of all deposited collateral expressed in debt units
    pub collateral_value: i128,
}
