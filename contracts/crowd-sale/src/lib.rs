//! DAICO - CrowdSale (Soroban)
//! Orchestrates the sale: contribution intake through contributor relays,
//! conversion to AUSD, bonus calculation and the state transitions it shares
//! with Governance.
//!
//! States only move forward:
//! Init -> PreSoftCap -> PostSoftCap -> Finished, or PreSoftCap -> Refunding
//! when the soft cap deadline passes without reaching the soft cap. Reaching
//! the soft cap makes Governance votable; missing it starts Governance
//! refunds. For those calls to pass, the CrowdSale must own Governance.
//!
//! Events:
//! - ("crowd", "state"): state: CrowdSaleState
//! - ("crowd", "contrib"): [contributor: Address, asset: Address, amount: i128, ausd: i128, tokens: i128]
//! - ("crowd", "web_acct"): acct: Address
//! - ("relay", "created"): contributor: Address
//! - ("relay", "deposit"): [contributor: Address, asset: Address, amount: i128]
//! - ("relay", "returned"): [contributor: Address, asset: Address, amount: i128]

#![no_std]
use daico_common::{
    interfaces::{GovernanceClient, OrganizationClient},
    ownership, units,
};
use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

mod events;
pub mod relays;
mod storage;

pub use relays::ContributorRelay;
use storage::DataKey;

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrowdSaleState {
    Init,
    PreSoftCap,
    PostSoftCap,
    Finished,
    Refunding,
}

/// Caps and minimum contribution are in atto-AUSD. `tokens_per_ausd` is the
/// number of token base units issued per atto-AUSD before bonus.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CrowdSaleConfig {
    pub softcap_ausd: i128,
    pub softcap_deadline: u64,
    pub hardcap_ausd: i128,
    pub hardcap_deadline: u64,
    pub min_contrib_ausd: i128,
    pub tokens_per_ausd: i128,
}

#[contract]
pub struct CrowdSaleContract;

#[contractimpl]
impl CrowdSaleContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        config: CrowdSaleConfig,
        organization: Address,
        governance: Address,
        fund: Address,
        web_platform_acct: Address,
    ) {
        storage::bump_instance(&env);
        if storage::is_initialized(&env) {
            panic!("already initialized");
        }
        if config.softcap_ausd <= 0
            || config.hardcap_ausd < config.softcap_ausd
            || config.hardcap_deadline < config.softcap_deadline
            || config.min_contrib_ausd < 0
            || config.tokens_per_ausd <= 0
        {
            panic!("invalid config");
        }
        ownership::init_owner(&env, &DataKey::Owner, &owner);
        storage::set_config(&env, &config);
        storage::set_links(&env, &organization, &governance, &fund);
        storage::set_web_platform_acct(&env, &web_platform_acct);
        storage::set_raised_ausd(&env, 0);
        storage::set_state(&env, &CrowdSaleState::Init);
    }

    // ============================================================
    // Lifecycle
    // ============================================================

    pub fn start(env: Env) {
        storage::bump_instance(&env);
        ownership::require_owner(&env, &DataKey::Owner);
        if storage::get_state(&env) != CrowdSaleState::Init {
            panic!("invalid state");
        }
        Self::set_state(&env, CrowdSaleState::PreSoftCap);
    }

    /// Close the sale early once the soft cap is in.
    pub fn finish(env: Env) {
        storage::bump_instance(&env);
        ownership::require_owner(&env, &DataKey::Owner);
        if storage::get_state(&env) != CrowdSaleState::PostSoftCap {
            panic!("invalid state");
        }
        Self::set_state(&env, CrowdSaleState::Finished);
    }

    /// Apply whichever transitions the raised amount and the clock allow.
    /// Does nothing when none applies. Returns the resulting state.
    pub fn try_to_switch_state(env: Env) -> CrowdSaleState {
        storage::bump_instance(&env);
        Self::switch_state(&env)
    }

    pub fn set_web_platform_acct(env: Env, acct: Address) {
        storage::bump_instance(&env);
        ownership::require_owner(&env, &DataKey::Owner);
        if storage::get_state(&env) != CrowdSaleState::Init {
            panic!("invalid state");
        }
        storage::set_web_platform_acct(&env, &acct);
        events::web_platform_changed(&env, acct);
    }

    // ============================================================
    // Relays & Contributions
    // ============================================================

    /// Open (or return the existing) relay for `contributor`.
    pub fn new_contributor_relay(env: Env, contributor: Address) -> ContributorRelay {
        storage::bump_instance(&env);
        if !Self::accepting(&env) {
            panic!("not accepting contributions");
        }
        if let Some(existing) = relays::get(&env, &contributor) {
            return existing;
        }
        let created = relays::create(&env, &contributor);
        events::relay_created(&env, contributor);
        created
    }

    /// Move `amount` of `asset` from `from` into `contributor`'s relay.
    pub fn deposit_to_relay(env: Env, from: Address, contributor: Address, asset: Address, amount: i128) {
        storage::bump_instance(&env);
        from.require_auth();
        if amount <= 0 {
            panic!("invalid amount");
        }
        relays::require(&env, &contributor);

        relays::credit(&env, &contributor, &asset, amount);
        token::Client::new(&env, &asset).transfer(&from, &env.current_contract_address(), &amount);

        events::relay_deposit(&env, contributor, asset, amount);
    }

    /// Accept `amount` of `asset` held in `contributor`'s relay. Callable by
    /// the web platform account or by the contributor. The raised total may
    /// reach the hard cap but never pass it. Returns the number of tokens
    /// issued.
    pub fn process_contribution(
        env: Env,
        caller: Address,
        contributor: Address,
        asset: Address,
        amount: i128,
    ) -> i128 {
        storage::bump_instance(&env);
        caller.require_auth();
        if caller != storage::get_web_platform_acct(&env) && caller != contributor {
            panic!("unauthorized");
        }
        if !Self::accepting(&env) {
            panic!("not accepting contributions");
        }
        if amount <= 0 {
            panic!("invalid amount");
        }
        relays::require(&env, &contributor);

        let config = storage::get_config(&env);
        let ausd = Self::convert_stc_amount_to_ausd(env.clone(), asset.clone(), amount);
        if ausd < config.min_contrib_ausd {
            panic!("below minimum contribution");
        }
        let raised = storage::get_raised_ausd(&env)
            .checked_add(ausd)
            .unwrap_or_else(|| panic!("arithmetic overflow"));
        if raised > config.hardcap_ausd {
            panic!("exceeds hard cap");
        }
        let tokens = units::calculate_tokens(ausd, config.tokens_per_ausd, units::AUSD_UNIT);

        relays::debit(&env, &contributor, &asset, amount);
        storage::set_raised_ausd(&env, raised);

        token::Client::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &storage::get_fund(&env),
            &amount,
        );
        GovernanceClient::new(&env, &storage::get_governance(&env)).register_contribution(
            &contributor,
            &asset,
            &amount,
            &tokens,
        );

        events::contribution_accepted(&env, contributor, asset, amount, ausd, tokens);
        Self::switch_state(&env);
        tokens
    }

    /// Give back escrowed coins that were not accepted.
    pub fn return_stc_to_contributor(env: Env, contributor: Address, asset: Address, amount: i128) {
        storage::bump_instance(&env);
        contributor.require_auth();
        if amount <= 0 {
            panic!("invalid amount");
        }
        relays::require(&env, &contributor);

        relays::debit(&env, &contributor, &asset, amount);
        token::Client::new(&env, &asset).transfer(
            &env.current_contract_address(),
            &contributor,
            &amount,
        );

        events::relay_returned(&env, contributor, asset, amount);
    }

    // ============================================================
    // Conversion
    // ============================================================

    pub fn convert_stc_amount_to_ausd(env: Env, asset: Address, amount: i128) -> i128 {
        let decimals =
            OrganizationClient::new(&env, &storage::get_organization(&env)).get_decimals(&asset);
        units::to_atto(amount, decimals)
    }

    /// Tokens issued for `amount` atto-AUSD, bonus included.
    pub fn calc_tokens_by_ausd(env: Env, amount: i128) -> i128 {
        let config = storage::get_config(&env);
        units::calculate_tokens(amount, config.tokens_per_ausd, units::AUSD_UNIT)
    }

    // ============================================================
    // Ownership
    // ============================================================

    pub fn transfer_ownership(env: Env, new_owner: Address) {
        storage::bump_instance(&env);
        ownership::transfer_ownership(&env, &DataKey::Owner, &DataKey::PendingOwner, new_owner);
    }

    pub fn claim_ownership(env: Env) {
        storage::bump_instance(&env);
        ownership::claim_ownership(&env, &DataKey::Owner, &DataKey::PendingOwner);
    }

    pub fn proxy_claim_ownership(env: Env, target: Address) {
        storage::bump_instance(&env);
        ownership::proxy_claim_ownership(&env, &DataKey::Owner, &target);
    }

    pub fn proxy_transfer_ownership(env: Env, target: Address, new_owner: Address) {
        storage::bump_instance(&env);
        ownership::proxy_transfer_ownership(&env, &DataKey::Owner, &target, &new_owner);
    }

    // ============================================================
    // Read-Only Functions
    // ============================================================

    pub fn owner(env: Env) -> Address {
        ownership::owner(&env, &DataKey::Owner)
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        ownership::pending_owner(&env, &DataKey::PendingOwner)
    }

    pub fn state(env: Env) -> CrowdSaleState {
        storage::get_state(&env)
    }

    pub fn config(env: Env) -> CrowdSaleConfig {
        storage::get_config(&env)
    }

    pub fn raised_ausd(env: Env) -> i128 {
        storage::get_raised_ausd(&env)
    }

    pub fn soft_cap_reached(env: Env) -> bool {
        storage::get_raised_ausd(&env) >= storage::get_config(&env).softcap_ausd
    }

    /// Whether a contribution would be accepted right now.
    pub fn running(env: Env) -> bool {
        Self::accepting(&env)
    }

    pub fn web_platform_acct(env: Env) -> Address {
        storage::get_web_platform_acct(&env)
    }

    pub fn organization(env: Env) -> Address {
        storage::get_organization(&env)
    }

    pub fn governance(env: Env) -> Address {
        storage::get_governance(&env)
    }

    pub fn fund(env: Env) -> Address {
        storage::get_fund(&env)
    }

    pub fn relay(env: Env, contributor: Address) -> Option<ContributorRelay> {
        relays::get(&env, &contributor)
    }

    pub fn relay_balance(env: Env, contributor: Address, asset: Address) -> i128 {
        relays::balance(&env, &contributor, &asset)
    }

    // ============================================================
    // Internal Helpers
    // ============================================================

    fn accepting(env: &Env) -> bool {
        let config = storage::get_config(env);
        let now = env.ledger().timestamp();
        match storage::get_state(env) {
            CrowdSaleState::PreSoftCap => now < config.softcap_deadline,
            CrowdSaleState::PostSoftCap => {
                now < config.hardcap_deadline
                    && storage::get_raised_ausd(env) < config.hardcap_ausd
            }
            _ => false,
        }
    }

    fn switch_state(env: &Env) -> CrowdSaleState {
        let config = storage::get_config(env);
        let raised = storage::get_raised_ausd(env);
        let now = env.ledger().timestamp();
        let governance = GovernanceClient::new(env, &storage::get_governance(env));

        let mut state = storage::get_state(env);
        if state == CrowdSaleState::PreSoftCap {
            if raised >= config.softcap_ausd {
                state = Self::set_state(env, CrowdSaleState::PostSoftCap);
                governance.make_votable();
            } else if now >= config.softcap_deadline {
                state = Self::set_state(env, CrowdSaleState::Refunding);
                governance.start_refunding();
            }
        }
        if state == CrowdSaleState::PostSoftCap
            && (raised >= config.hardcap_ausd || now >= config.hardcap_deadline)
        {
            state = Self::set_state(env, CrowdSaleState::Finished);
        }
        state
    }

    fn set_state(env: &Env, state: CrowdSaleState) -> CrowdSaleState {
        storage::set_state(env, &state);
        events::state_changed(env, state);
        state
    }
}
