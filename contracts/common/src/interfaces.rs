//! Cross-contract interfaces.
//!
//! Contracts in this workspace never link against each other; they call
//! through these clients, which only fix the function names and argument
//! types of the callee.

use soroban_sdk::{contractclient, Address, Env, Vec};

/// Anything that follows the two-phase ownership protocol.
#[contractclient(name = "OwnableClient")]
pub trait Ownable {
    fn transfer_ownership(env: Env, new_owner: Address);
    fn claim_ownership(env: Env);
}

/// Stable coin registry kept by the Organization contract.
#[contractclient(name = "OrganizationClient")]
pub trait OrganizationInterface {
    fn is_stable_coin(env: Env, asset: Address) -> bool;
    /// Panics with "stable coin not registered" for unknown assets.
    fn get_decimals(env: Env, asset: Address) -> u32;
    fn get_stable_coins(env: Env) -> Vec<Address>;
}

#[contractclient(name = "FundClient")]
pub trait FundInterface {
    fn organization(env: Env) -> Address;
    fn withdraw_stable_coin(env: Env, tap: Address, asset: Address, to: Address, amount: i128);
}

/// The part of Governance its owning CrowdSale drives.
#[contractclient(name = "GovernanceClient")]
pub trait GovernanceInterface {
    fn register_contribution(
        env: Env,
        investor: Address,
        asset: Address,
        stc_amount: i128,
        token_amount: i128,
    );
    fn make_votable(env: Env);
    fn start_refunding(env: Env);
}
