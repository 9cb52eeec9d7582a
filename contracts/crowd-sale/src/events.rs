use soroban_sdk::{symbol_short, Address, Env};

use crate::CrowdSaleState;

pub fn state_changed(env: &Env, state: CrowdSaleState) {
    env.events()
        .publish((symbol_short!("crowd"), symbol_short!("state")), state);
}

pub fn contribution_accepted(
    env: &Env,
    contributor: Address,
    asset: Address,
    amount: i128,
    ausd: i128,
    tokens: i128,
) {
    env.events().publish(
        (symbol_short!("crowd"), symbol_short!("contrib")),
        (contributor, asset, amount, ausd, tokens),
    );
}

pub fn web_platform_changed(env: &Env, acct: Address) {
    env.events()
        .publish((symbol_short!("crowd"), symbol_short!("web_acct")), acct);
}

pub fn relay_created(env: &Env, contributor: Address) {
    env.events()
        .publish((symbol_short!("relay"), symbol_short!("created")), contributor);
}

pub fn relay_deposit(env: &Env, contributor: Address, asset: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("relay"), symbol_short!("deposit")),
        (contributor, asset, amount),
    );
}

pub fn relay_returned(env: &Env, contributor: Address, asset: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("relay"), symbol_short!("returned")),
        (contributor, asset, amount),
    );
}
