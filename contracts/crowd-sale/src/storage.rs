use soroban_sdk::{contracttype, Address, Env};

use crate::{CrowdSaleConfig, CrowdSaleState};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PendingOwner,
    State,
    Config,
    RaisedAusd,
    Organization,
    Governance,
    Fund,
    WebPlatformAcct,
    Relay(Address),
    RelayBalance(Address, Address),
}

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_state(env: &Env) -> CrowdSaleState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .expect("not initialized")
}

pub fn set_state(env: &Env, state: &CrowdSaleState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_config(env: &Env) -> CrowdSaleConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("not initialized")
}

pub fn set_config(env: &Env, config: &CrowdSaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_raised_ausd(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RaisedAusd)
        .unwrap_or(0)
}

pub fn set_raised_ausd(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::RaisedAusd, &amount);
}

fn get_address(env: &Env, key: &DataKey) -> Address {
    env.storage()
        .instance()
        .get(key)
        .expect("not initialized")
}

pub fn get_organization(env: &Env) -> Address {
    get_address(env, &DataKey::Organization)
}

pub fn get_governance(env: &Env) -> Address {
    get_address(env, &DataKey::Governance)
}

pub fn get_fund(env: &Env) -> Address {
    get_address(env, &DataKey::Fund)
}

pub fn get_web_platform_acct(env: &Env) -> Address {
    get_address(env, &DataKey::WebPlatformAcct)
}

pub fn set_links(env: &Env, organization: &Address, governance: &Address, fund: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Organization, organization);
    env.storage().instance().set(&DataKey::Governance, governance);
    env.storage().instance().set(&DataKey::Fund, fund);
}

pub fn set_web_platform_acct(env: &Env, acct: &Address) {
    env.storage().instance().set(&DataKey::WebPlatformAcct, acct);
}
