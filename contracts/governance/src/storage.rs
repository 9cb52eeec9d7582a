use soroban_sdk::{contracttype, Address, BytesN, Env, IntoVal, Val};

use crate::polls::{Poll, VoteRecord};
use crate::{Contribution, GovernanceState};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    PendingOwner,
    Fund,
    Token,
    QuorumBps,
    State,
    TotalVotingPower,
    VoterBalance(Address),
    Contribution(Address, Address),
    TotalContributed(Address),
    Poll(BytesN<32>),
    Vote(BytesN<32>, Address),
}

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 34_560;
const PERSISTENT_BUMP_AMOUNT: u32 = 259_200;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ============ CONFIG ============

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_fund(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Fund)
        .expect("not initialized")
}

pub fn set_fund(env: &Env, fund: &Address) {
    env.storage().instance().set(&DataKey::Fund, fund);
}

pub fn get_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("not initialized")
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_quorum_bps(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::QuorumBps)
        .expect("not initialized")
}

pub fn set_quorum_bps(env: &Env, quorum_bps: u32) {
    env.storage().instance().set(&DataKey::QuorumBps, &quorum_bps);
}

// ============ STATE ============

pub fn get_state(env: &Env) -> GovernanceState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .expect("not initialized")
}

pub fn set_state(env: &Env, state: &GovernanceState) {
    env.storage().instance().set(&DataKey::State, state);
}

// ============ LEDGER ============

pub fn get_total_voting_power(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalVotingPower)
        .unwrap_or(0)
}

pub fn set_total_voting_power(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalVotingPower, &amount);
}

pub fn get_voter_balance(env: &Env, voter: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::VoterBalance(voter.clone()))
        .unwrap_or(0)
}

pub fn set_voter_balance(env: &Env, voter: &Address, amount: i128) {
    set_persistent(env, &DataKey::VoterBalance(voter.clone()), &amount);
}

pub fn get_contribution(env: &Env, investor: &Address, asset: &Address) -> Contribution {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(investor.clone(), asset.clone()))
        .unwrap_or(Contribution {
            stable_coin_amount: 0,
            token_amount: 0,
        })
}

pub fn set_contribution(env: &Env, investor: &Address, asset: &Address, entry: &Contribution) {
    set_persistent(
        env,
        &DataKey::Contribution(investor.clone(), asset.clone()),
        entry,
    );
}

pub fn get_total_contributed(env: &Env, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalContributed(asset.clone()))
        .unwrap_or(0)
}

pub fn set_total_contributed(env: &Env, asset: &Address, amount: i128) {
    set_persistent(env, &DataKey::TotalContributed(asset.clone()), &amount);
}

// ============ POLLS ============

pub fn has_poll(env: &Env, id: &BytesN<32>) -> bool {
    env.storage().persistent().has(&DataKey::Poll(id.clone()))
}

pub fn get_poll(env: &Env, id: &BytesN<32>) -> Poll {
    env.storage()
        .persistent()
        .get(&DataKey::Poll(id.clone()))
        .expect("poll not found")
}

pub fn set_poll(env: &Env, id: &BytesN<32>, poll: &Poll) {
    set_persistent(env, &DataKey::Poll(id.clone()), poll);
}

pub fn get_vote(env: &Env, id: &BytesN<32>, voter: &Address) -> Option<VoteRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(id.clone(), voter.clone()))
}

pub fn set_vote(env: &Env, id: &BytesN<32>, voter: &Address, record: &VoteRecord) {
    set_persistent(env, &DataKey::Vote(id.clone(), voter.clone()), record);
}

pub fn remove_vote(env: &Env, id: &BytesN<32>, voter: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Vote(id.clone(), voter.clone()));
}
