//! Contributor relays.
//!
//! A relay is an escrow sub-account the CrowdSale keeps per contributor.
//! Stable coins deposited to it stay in CrowdSale custody until they are
//! either accepted by `process_contribution` or returned to the contributor.

use soroban_sdk::{contracttype, Address, Env};

use crate::storage::{DataKey, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ContributorRelay {
    pub contributor: Address,
    pub crowd_sale: Address,
    pub created_at: u64,
}

pub fn get(env: &Env, contributor: &Address) -> Option<ContributorRelay> {
    env.storage()
        .persistent()
        .get(&DataKey::Relay(contributor.clone()))
}

pub fn create(env: &Env, contributor: &Address) -> ContributorRelay {
    let relay = ContributorRelay {
        contributor: contributor.clone(),
        crowd_sale: env.current_contract_address(),
        created_at: env.ledger().timestamp(),
    };
    let key = DataKey::Relay(contributor.clone());
    env.storage().persistent().set(&key, &relay);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    relay
}

pub fn require(env: &Env, contributor: &Address) -> ContributorRelay {
    get(env, contributor).unwrap_or_else(|| panic!("relay not found"))
}

pub fn balance(env: &Env, contributor: &Address, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::RelayBalance(contributor.clone(), asset.clone()))
        .unwrap_or(0)
}

pub fn credit(env: &Env, contributor: &Address, asset: &Address, amount: i128) {
    let updated = balance(env, contributor, asset)
        .checked_add(amount)
        .unwrap_or_else(|| panic!("arithmetic overflow"));
    set_balance(env, contributor, asset, updated);
}

pub fn debit(env: &Env, contributor: &Address, asset: &Address, amount: i128) {
    let current = balance(env, contributor, asset);
    if current < amount {
        panic!("insufficient relay balance");
    }
    set_balance(env, contributor, asset, current - amount);
}

fn set_balance(env: &Env, contributor: &Address, asset: &Address, amount: i128) {
    let key = DataKey::RelayBalance(contributor.clone(), asset.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
