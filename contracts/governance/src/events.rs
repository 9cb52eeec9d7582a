use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::GovernanceState;

pub fn state_changed(env: &Env, state: GovernanceState) {
    env.events()
        .publish((symbol_short!("gov"), symbol_short!("state")), state);
}

pub fn contribution_registered(
    env: &Env,
    investor: Address,
    asset: Address,
    stc_amount: i128,
    token_amount: i128,
) {
    env.events().publish(
        (symbol_short!("gov"), symbol_short!("contrib")),
        (investor, asset, stc_amount, token_amount),
    );
}

pub fn token_withdrawn(env: &Env, voter: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("gov"), symbol_short!("withdraw")),
        (voter, to, amount),
    );
}

pub fn refunded(env: &Env, investor: Address, asset: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("gov"), symbol_short!("refund")),
        (investor, asset, amount),
    );
}

pub fn poll_started(env: &Env, id: BytesN<32>, proposer: Address) {
    env.events()
        .publish((symbol_short!("poll"), symbol_short!("started")), (id, proposer));
}

pub fn voted(env: &Env, id: BytesN<32>, voter: Address, yes: bool, power: i128) {
    env.events().publish(
        (symbol_short!("poll"), symbol_short!("voted")),
        (id, voter, yes, power),
    );
}

pub fn vote_revoked(env: &Env, id: BytesN<32>, voter: Address) {
    env.events()
        .publish((symbol_short!("poll"), symbol_short!("revoked")), (id, voter));
}

// Emitted on every finalization; `passed` tells whether the command ran.
pub fn poll_finished(env: &Env, id: BytesN<32>, passed: bool) {
    env.events()
        .publish((symbol_short!("poll"), symbol_short!("finished")), (id, passed));
}
