//! DAICO - Tap (Soroban)
//! Rate-limited withdrawal channel against the Fund.
//!
//! The spender earns `rate` atto-AUSD of allowance per second since the last
//! withdrawal. A successful `spend` moves the checkpoint to now, so unspent
//! allowance from the elapsed window does not carry over.
//!
//! Events:
//! - ("tap", "spend"): [to: Address, asset: Address, amount: i128]

#![no_std]
use daico_common::{
    interfaces::{FundClient, OrganizationClient},
    units,
};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Spender,
    Fund,
    Rate,
    LastWithdrawTime,
    Description,
}

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 86_400;

#[contract]
pub struct TapContract;

#[contractimpl]
impl TapContract {
    /// `rate` is in atto-AUSD per second.
    pub fn initialize(env: Env, spender: Address, fund: Address, rate: i128, description: String) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        if env.storage().instance().has(&DataKey::Spender) {
            panic!("already initialized");
        }
        if rate < 0 {
            panic!("invalid rate");
        }
        env.storage().instance().set(&DataKey::Spender, &spender);
        env.storage().instance().set(&DataKey::Fund, &fund);
        env.storage().instance().set(&DataKey::Rate, &rate);
        env.storage()
            .instance()
            .set(&DataKey::LastWithdrawTime, &env.ledger().timestamp());
        env.storage()
            .instance()
            .set(&DataKey::Description, &description);
    }

    /// Send `amount` atto-AUSD worth of `asset` from the Fund to `to`.
    pub fn spend(env: Env, to: Address, amount: i128, asset: Address) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        let spender = Self::spender(env.clone());
        spender.require_auth();

        if amount <= 0 {
            panic!("invalid amount");
        }
        if amount > Self::available(env.clone()) {
            panic!("exceeds allowance");
        }

        let fund = FundClient::new(&env, &Self::fund(env.clone()));
        let decimals = OrganizationClient::new(&env, &fund.organization()).get_decimals(&asset);
        let asset_amount = units::from_atto(amount, decimals);

        env.storage()
            .instance()
            .set(&DataKey::LastWithdrawTime, &env.ledger().timestamp());

        fund.withdraw_stable_coin(&env.current_contract_address(), &asset, &to, &asset_amount);

        env.events().publish(
            (symbol_short!("tap"), symbol_short!("spend")),
            (to, asset, amount),
        );
    }

    // ============================================================
    // Read-Only Functions
    // ============================================================

    /// Allowance accrued since the last withdrawal, in atto-AUSD.
    pub fn available(env: Env) -> i128 {
        let elapsed = env
            .ledger()
            .timestamp()
            .saturating_sub(Self::last_withdraw_time(env.clone()));
        Self::rate(env)
            .checked_mul(elapsed as i128)
            .unwrap_or_else(|| panic!("arithmetic overflow"))
    }

    pub fn rate(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::Rate)
            .expect("not initialized")
    }

    pub fn last_withdraw_time(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::LastWithdrawTime)
            .expect("not initialized")
    }

    pub fn spender(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Spender)
            .expect("not initialized")
    }

    pub fn fund(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Fund)
            .expect("not initialized")
    }

    pub fn description(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::Description)
            .expect("not initialized")
    }
}
