//! DAICO - Organization (Soroban)
//! Registry of accepted stable coins and their decimal precision.
//!
//! Events:
//! - ("org", "sc_add"): [asset: Address, decimals: u32]
//! - ("org", "sc_del"): asset: Address

#![no_std]
use daico_common::{ownership, units::AUSD_DECIMALS};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Vec,
};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PendingOwner,
    Name,
    Token,
    StableCoins,
    Decimals(Address),
}

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 86_400;

#[contract]
pub struct OrganizationContract;

#[contractimpl]
impl OrganizationContract {
    pub fn initialize(env: Env, owner: Address, name: String, token: Address) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        if env.storage().instance().has(&DataKey::Owner) {
            panic!("already initialized");
        }
        ownership::init_owner(&env, &DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage()
            .instance()
            .set(&DataKey::StableCoins, &Vec::<Address>::new(&env));
    }

    /// Accept `asset` as a stable coin. `decimals` is fixed for the lifetime
    /// of the registration.
    pub fn add_stable_coin(env: Env, asset: Address, decimals: u32) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ownership::require_owner(&env, &DataKey::Owner);

        if decimals > AUSD_DECIMALS {
            panic!("unsupported decimals");
        }

        let mut coins = Self::get_stable_coins(env.clone());
        if coins.contains(&asset) {
            panic!("already registered");
        }
        coins.push_back(asset.clone());
        env.storage().instance().set(&DataKey::StableCoins, &coins);
        env.storage()
            .instance()
            .set(&DataKey::Decimals(asset.clone()), &decimals);

        env.events().publish(
            (symbol_short!("org"), symbol_short!("sc_add")),
            (asset, decimals),
        );
    }

    pub fn del_stable_coin(env: Env, asset: Address) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ownership::require_owner(&env, &DataKey::Owner);

        let mut coins = Self::get_stable_coins(env.clone());
        let index = coins
            .first_index_of(&asset)
            .unwrap_or_else(|| panic!("stable coin not registered"));
        coins.remove(index);
        env.storage().instance().set(&DataKey::StableCoins, &coins);
        env.storage()
            .instance()
            .remove(&DataKey::Decimals(asset.clone()));

        env.events()
            .publish((symbol_short!("org"), symbol_short!("sc_del")), asset);
    }

    // ============================================================
    // Read-Only Functions
    // ============================================================

    pub fn is_stable_coin(env: Env, asset: Address) -> bool {
        env.storage().instance().has(&DataKey::Decimals(asset))
    }

    pub fn get_decimals(env: Env, asset: Address) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Decimals(asset))
            .unwrap_or_else(|| panic!("stable coin not registered"))
    }

    pub fn get_stable_coins(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::StableCoins)
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn name(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::Name)
            .expect("not initialized")
    }

    pub fn token(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .expect("not initialized")
    }

    // ============================================================
    // Ownership
    // ============================================================

    pub fn owner(env: Env) -> Address {
        ownership::owner(&env, &DataKey::Owner)
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        ownership::pending_owner(&env, &DataKey::PendingOwner)
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ownership::transfer_ownership(&env, &DataKey::Owner, &DataKey::PendingOwner, new_owner);
    }

    pub fn claim_ownership(env: Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ownership::claim_ownership(&env, &DataKey::Owner, &DataKey::PendingOwner);
    }
}
