//! DAICO - Fund (Soroban)
//! Custody of every accepted stable coin. Value leaves only through
//! registered taps.
//!
//! Events:
//! - ("fund", "tap_add"): tap: Address
//! - ("fund", "tap_del"): tap: Address
//! - ("fund", "deposit"): [from: Address, asset: Address, amount: i128]
//! - ("fund", "withdraw"): [tap: Address, asset: Address, to: Address, amount: i128]

#![no_std]
use daico_common::{interfaces::OrganizationClient, ownership, units};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, token, Address, Env, String, Vec,
};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PendingOwner,
    Organization,
    Name,
    Taps,
}

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 86_400;

#[contract]
pub struct FundContract;

#[contractimpl]
impl FundContract {
    pub fn initialize(env: Env, owner: Address, organization: Address, name: String) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        if env.storage().instance().has(&DataKey::Owner) {
            panic!("already initialized");
        }
        ownership::init_owner(&env, &DataKey::Owner, &owner);
        env.storage()
            .instance()
            .set(&DataKey::Organization, &organization);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage()
            .instance()
            .set(&DataKey::Taps, &Vec::<Address>::new(&env));
    }

    pub fn add_tap(env: Env, tap: Address) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ownership::require_owner(&env, &DataKey::Owner);

        let mut taps = Self::taps(env.clone());
        if taps.contains(&tap) {
            panic!("already a tap");
        }
        taps.push_back(tap.clone());
        env.storage().instance().set(&DataKey::Taps, &taps);

        env.events()
            .publish((symbol_short!("fund"), symbol_short!("tap_add")), tap);
    }

    pub fn del_tap(env: Env, tap: Address) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ownership::require_owner(&env, &DataKey::Owner);

        let mut taps = Self::taps(env.clone());
        let index = taps
            .first_index_of(&tap)
            .unwrap_or_else(|| panic!("not a tap"));
        taps.remove(index);
        env.storage().instance().set(&DataKey::Taps, &taps);

        env.events()
            .publish((symbol_short!("fund"), symbol_short!("tap_del")), tap);
    }

    /// Open to anyone; only accepted stable coins are taken.
    pub fn deposit(env: Env, from: Address, asset: Address, amount: i128) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        from.require_auth();

        if amount <= 0 {
            panic!("invalid amount");
        }
        if !Self::org_client(&env).is_stable_coin(&asset) {
            panic!("stable coin not registered");
        }

        token::Client::new(&env, &asset).transfer(&from, &env.current_contract_address(), &amount);

        env.events().publish(
            (symbol_short!("fund"), symbol_short!("deposit")),
            (from, asset, amount),
        );
    }

    /// Move `amount` (in `asset` units) to `to`. Callable by registered taps
    /// only, and only for currently accepted stable coins.
    pub fn withdraw_stable_coin(env: Env, tap: Address, asset: Address, to: Address, amount: i128) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        tap.require_auth();

        if !Self::is_tap(env.clone(), tap.clone()) {
            panic!("not a tap");
        }
        if amount <= 0 {
            panic!("invalid amount");
        }
        if !Self::org_client(&env).is_stable_coin(&asset) {
            panic!("stable coin not registered");
        }

        token::Client::new(&env, &asset).transfer(&env.current_contract_address(), &to, &amount);

        env.events().publish(
            (symbol_short!("fund"), symbol_short!("withdraw")),
            (tap, asset, to, amount),
        );
    }

    // ============================================================
    // Read-Only Functions
    // ============================================================

    /// Value of every accepted stable coin held, in atto-AUSD. Coins removed
    /// from the registry no longer count even if the fund still holds them.
    pub fn get_total_amount_in_atto(env: Env) -> i128 {
        let org = Self::org_client(&env);
        let this = env.current_contract_address();

        let mut total: i128 = 0;
        for asset in org.get_stable_coins().iter() {
            let balance = token::Client::new(&env, &asset).balance(&this);
            let value = units::to_atto(balance, org.get_decimals(&asset));
            total = total
                .checked_add(value)
                .unwrap_or_else(|| panic!("arithmetic overflow"));
        }
        total
    }

    pub fn balance_of(env: Env, asset: Address) -> i128 {
        token::Client::new(&env, &asset).balance(&env.current_contract_address())
    }

    pub fn is_tap(env: Env, tap: Address) -> bool {
        Self::taps(env).contains(&tap)
    }

    pub fn taps(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Taps)
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn organization(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Organization)
            .expect("not initialized")
    }

    pub fn name(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::Name)
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

impl FundContract {
    fn org_client(env: &Env) -> OrganizationClient<'_> {
        let org: Address = env
            .storage()
            .instance()
            .get(&DataKey::Organization)
            .expect("not initialized");
        OrganizationClient::new(env, &org)
    }
}
