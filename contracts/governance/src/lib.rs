//! DAICO - Governance (Soroban)
//! Contribution ledger, voting power and the poll engine.
//!
//! Governance starts in `Waiting`, where its owner (the CrowdSale) records
//! contributions. From there it moves once, either to `Votable` (polls and
//! token withdrawals enabled) or to `Refunding` (contributors reclaim their
//! share of the Fund). Project tokens bought during the sale are minted into
//! Governance's own custody, so Governance must be the token's admin.
//!
//! A poll carries a command `{target, function, args}`. Once closed, anyone
//! may finalize it; if quorum and a strict yes-majority are reached the
//! command is invoked with Governance as the caller. A failing command
//! aborts the whole finalization, leaving the poll open to another attempt.
//!
//! Events:
//! - ("gov", "state"): state: GovernanceState
//! - ("gov", "contrib"): [investor: Address, asset: Address, stc_amount: i128, token_amount: i128]
//! - ("gov", "withdraw"): [voter: Address, to: Address, amount: i128]
//! - ("gov", "refund"): [investor: Address, asset: Address, amount: i128]
//! - ("poll", "started"): [id: BytesN<32>, proposer: Address]
//! - ("poll", "voted"): [id: BytesN<32>, voter: Address, yes: bool, power: i128]
//! - ("poll", "revoked"): [id: BytesN<32>, voter: Address]
//! - ("poll", "finished"): [id: BytesN<32>, passed: bool]

#![no_std]
use daico_common::{
    interfaces::{FundClient, OrganizationClient},
    ownership, units,
};
use soroban_sdk::{
    contract, contractimpl, contracttype, token, Address, BytesN, Env, Symbol, Val, Vec,
};

mod events;
pub mod polls;
mod storage;

pub use polls::{Poll, PollStatus, VoteRecord};
use storage::DataKey;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum GovernanceState {
    Waiting,
    Votable,
    Refunding,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Contribution {
    pub stable_coin_amount: i128,
    pub token_amount: i128,
}

#[contract]
pub struct GovernanceContract;

#[contractimpl]
impl GovernanceContract {
    /// `quorum_bps` is the share of total voting power, in basis points,
    /// that must take part in a poll for its result to count.
    pub fn initialize(env: Env, owner: Address, fund: Address, token: Address, quorum_bps: u32) {
        storage::bump_instance(&env);
        if storage::is_initialized(&env) {
            panic!("already initialized");
        }
        if quorum_bps == 0 || quorum_bps > 10_000 {
            panic!("invalid quorum");
        }
        ownership::init_owner(&env, &DataKey::Owner, &owner);
        storage::set_fund(&env, &fund);
        storage::set_token(&env, &token);
        storage::set_quorum_bps(&env, quorum_bps);
        storage::set_state(&env, &GovernanceState::Waiting);
        storage::set_total_voting_power(&env, 0);
    }

    // ============================================================
    // Contributions
    // ============================================================

    /// Credit `investor` with a contribution of `stc_amount` units of
    /// `asset`, buying `token_amount` project tokens held in custody here.
    pub fn register_contribution(
        env: Env,
        investor: Address,
        asset: Address,
        stc_amount: i128,
        token_amount: i128,
    ) {
        storage::bump_instance(&env);
        ownership::require_owner(&env, &DataKey::Owner);
        if storage::get_state(&env) == GovernanceState::Refunding {
            panic!("invalid state");
        }
        if stc_amount <= 0 || token_amount <= 0 {
            panic!("invalid amount");
        }

        let mut entry = storage::get_contribution(&env, &investor, &asset);
        entry.stable_coin_amount = checked_add(entry.stable_coin_amount, stc_amount);
        entry.token_amount = checked_add(entry.token_amount, token_amount);
        storage::set_contribution(&env, &investor, &asset, &entry);

        let balance = checked_add(storage::get_voter_balance(&env, &investor), token_amount);
        storage::set_voter_balance(&env, &investor, balance);
        let total = checked_add(storage::get_total_voting_power(&env), token_amount);
        storage::set_total_voting_power(&env, total);
        let contributed = checked_add(storage::get_total_contributed(&env, &asset), stc_amount);
        storage::set_total_contributed(&env, &asset, contributed);

        token::StellarAssetClient::new(&env, &storage::get_token(&env))
            .mint(&env.current_contract_address(), &token_amount);

        events::contribution_registered(&env, investor, asset, stc_amount, token_amount);
    }

    pub fn make_votable(env: Env) {
        storage::bump_instance(&env);
        ownership::require_owner(&env, &DataKey::Owner);
        Self::leave_waiting(&env, GovernanceState::Votable);
    }

    pub fn start_refunding(env: Env) {
        storage::bump_instance(&env);
        ownership::require_owner(&env, &DataKey::Owner);
        Self::leave_waiting(&env, GovernanceState::Refunding);
    }

    /// Release up to the voter's balance of project tokens from custody.
    pub fn withdraw_token(env: Env, voter: Address, to: Address, amount: i128) {
        storage::bump_instance(&env);
        voter.require_auth();
        if storage::get_state(&env) != GovernanceState::Votable {
            panic!("invalid state");
        }
        if amount <= 0 {
            panic!("invalid amount");
        }
        let balance = storage::get_voter_balance(&env, &voter);
        if amount > balance {
            panic!("insufficient balance");
        }

        storage::set_voter_balance(&env, &voter, balance - amount);
        let total = storage::get_total_voting_power(&env);
        storage::set_total_voting_power(&env, total - amount);

        token::Client::new(&env, &storage::get_token(&env)).transfer(
            &env.current_contract_address(),
            &to,
            &amount,
        );

        events::token_withdrawn(&env, voter, to, amount);
    }

    /// Pay `investor` their share of the Fund's `asset` balance, in
    /// proportion to what they contributed in that asset. Governance must be
    /// registered as a tap on the Fund.
    pub fn refund_contribution(env: Env, investor: Address, asset: Address) -> i128 {
        storage::bump_instance(&env);
        investor.require_auth();
        if storage::get_state(&env) != GovernanceState::Refunding {
            panic!("invalid state");
        }

        let fund_address = storage::get_fund(&env);
        let fund = FundClient::new(&env, &fund_address);
        if !OrganizationClient::new(&env, &fund.organization()).is_stable_coin(&asset) {
            panic!("stable coin not registered");
        }

        let entry = storage::get_contribution(&env, &investor, &asset);
        if entry.stable_coin_amount <= 0 {
            panic!("nothing to refund");
        }
        let total_contributed = storage::get_total_contributed(&env, &asset);
        let fund_balance = token::Client::new(&env, &asset).balance(&fund_address);
        let share = units::mul_div(&env, fund_balance, entry.stable_coin_amount, total_contributed);

        storage::set_contribution(
            &env,
            &investor,
            &asset,
            &Contribution {
                stable_coin_amount: 0,
                token_amount: 0,
            },
        );
        storage::set_total_contributed(&env, &asset, total_contributed - entry.stable_coin_amount);
        let balance = storage::get_voter_balance(&env, &investor);
        let released = entry.token_amount.min(balance);
        storage::set_voter_balance(&env, &investor, balance - released);
        let total = storage::get_total_voting_power(&env);
        storage::set_total_voting_power(&env, total - released);

        if share > 0 {
            fund.withdraw_stable_coin(&env.current_contract_address(), &asset, &investor, &share);
        }

        events::refunded(&env, investor, asset, share);
        share
    }

    // ============================================================
    // Polls
    // ============================================================

    pub fn new_poll(
        env: Env,
        proposer: Address,
        target: Address,
        function: Symbol,
        args: Vec<Val>,
        opening_time: u64,
        closing_time: u64,
    ) -> BytesN<32> {
        storage::bump_instance(&env);
        proposer.require_auth();
        if storage::get_state(&env) != GovernanceState::Votable {
            panic!("invalid state");
        }
        if storage::get_voter_balance(&env, &proposer) <= 0 {
            panic!("not a token holder");
        }
        if opening_time <= env.ledger().timestamp() {
            panic!("opening time in the past");
        }
        if closing_time <= opening_time {
            panic!("invalid poll window");
        }
        if function == Symbol::new(&env, "") {
            panic!("empty function");
        }

        let id = polls::poll_id(&env, &target, &function, &args);
        if storage::has_poll(&env, &id) {
            panic!("poll already exists");
        }

        let poll = Poll {
            proposer: proposer.clone(),
            target,
            function,
            args,
            opening_time,
            closing_time,
            yes: 0,
            no: 0,
            created_ledger: env.ledger().sequence(),
            finalized: false,
            executed: false,
        };
        storage::set_poll(&env, &id, &poll);

        events::poll_started(&env, id.clone(), proposer);
        id
    }

    pub fn vote(env: Env, voter: Address, id: BytesN<32>, yes: bool) {
        storage::bump_instance(&env);
        voter.require_auth();

        let mut poll = storage::get_poll(&env, &id);
        if !poll.is_open(env.ledger().timestamp()) {
            panic!("poll not open");
        }
        let power = storage::get_voter_balance(&env, &voter);
        if power <= 0 {
            panic!("not a token holder");
        }
        if storage::get_vote(&env, &id, &voter).is_some() {
            panic!("already voted");
        }

        let record = VoteRecord { yes, power };
        poll.add_vote(&record);
        storage::set_poll(&env, &id, &poll);
        storage::set_vote(&env, &id, &voter, &record);

        events::voted(&env, id, voter, yes, power);
    }

    pub fn revoke_vote(env: Env, voter: Address, id: BytesN<32>) {
        storage::bump_instance(&env);
        voter.require_auth();

        let mut poll = storage::get_poll(&env, &id);
        if !poll.is_open(env.ledger().timestamp()) {
            panic!("poll not open");
        }
        let record = storage::get_vote(&env, &id, &voter).unwrap_or_else(|| panic!("not voted"));

        poll.remove_vote(&record);
        storage::set_poll(&env, &id, &poll);
        storage::remove_vote(&env, &id, &voter);

        events::vote_revoked(&env, id, voter);
    }

    /// Returns `false` while the poll is still running. After closing, the
    /// first call finalizes it and runs the command if the vote passed.
    pub fn try_to_finalize(env: Env, id: BytesN<32>) -> bool {
        storage::bump_instance(&env);
        let mut poll = storage::get_poll(&env, &id);
        if poll.finalized {
            panic!("already finalized");
        }
        if env.ledger().timestamp() < poll.closing_time {
            return false;
        }

        let passed = poll.passed(
            storage::get_total_voting_power(&env),
            storage::get_quorum_bps(&env),
        );
        poll.finalized = true;
        poll.executed = passed;
        storage::set_poll(&env, &id, &poll);

        if passed {
            env.invoke_contract::<Val>(&poll.target, &poll.function, poll.args.clone());
        }

        events::poll_finished(&env, id, passed);
        true
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

    /// Claim `target`, which must already name Governance as its pending owner.
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

    pub fn state(env: Env) -> GovernanceState {
        storage::get_state(&env)
    }

    pub fn voter_balance(env: Env, voter: Address) -> i128 {
        storage::get_voter_balance(&env, &voter)
    }

    pub fn contribution(env: Env, investor: Address, asset: Address) -> Contribution {
        storage::get_contribution(&env, &investor, &asset)
    }

    pub fn total_voting_power(env: Env) -> i128 {
        storage::get_total_voting_power(&env)
    }

    pub fn total_contributed(env: Env, asset: Address) -> i128 {
        storage::get_total_contributed(&env, &asset)
    }

    pub fn poll(env: Env, id: BytesN<32>) -> Poll {
        storage::get_poll(&env, &id)
    }

    pub fn poll_status(env: Env, id: BytesN<32>) -> PollStatus {
        storage::get_poll(&env, &id).status(env.ledger().timestamp())
    }

    pub fn vote_of(env: Env, id: BytesN<32>, voter: Address) -> Option<VoteRecord> {
        storage::get_vote(&env, &id, &voter)
    }

    pub fn fund(env: Env) -> Address {
        storage::get_fund(&env)
    }

    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    pub fn quorum_bps(env: Env) -> u32 {
        storage::get_quorum_bps(&env)
    }

    // ============================================================
    // Internal Helpers
    // ============================================================

    fn leave_waiting(env: &Env, next: GovernanceState) {
        if storage::get_state(env) != GovernanceState::Waiting {
            panic!("invalid state");
        }
        storage::set_state(env, &next);
        events::state_changed(env, next);
    }
}

fn checked_add(a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic!("arithmetic overflow"))
}

mod test;
