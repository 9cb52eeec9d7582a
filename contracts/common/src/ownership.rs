//! Two-phase ownership.
//!
//! The current owner names a successor with [`transfer_ownership`]; nothing
//! changes until the successor calls [`claim_ownership`]. A contract that owns
//! another one can drive both steps through [`proxy_transfer_ownership`] and
//! [`proxy_claim_ownership`], which is how CrowdSale and Governance end up
//! owning each other without either touching the other's storage.

use soroban_sdk::{symbol_short, Address, Env, IntoVal, TryFromVal, Val};

use crate::interfaces::OwnableClient;

pub fn init_owner<K>(env: &Env, owner_key: &K, owner: &Address)
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    env.storage().instance().set(owner_key, owner);
}

pub fn owner<K>(env: &Env, owner_key: &K) -> Address
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    env.storage()
        .instance()
        .get(owner_key)
        .expect("not initialized")
}

pub fn pending_owner<K>(env: &Env, pending_key: &K) -> Option<Address>
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    env.storage().instance().get(pending_key)
}

/// Loads the owner and requires its authorization. Returns the owner.
pub fn require_owner<K>(env: &Env, owner_key: &K) -> Address
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    let current = owner(env, owner_key);
    current.require_auth();
    current
}

pub fn transfer_ownership<K>(env: &Env, owner_key: &K, pending_key: &K, new_owner: Address)
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    let current = require_owner(env, owner_key);
    if current == new_owner {
        panic!("already owner");
    }
    env.storage().instance().set(pending_key, &new_owner);

    env.events()
        .publish((symbol_short!("owner"), symbol_short!("pending")), new_owner);
}

pub fn claim_ownership<K>(env: &Env, owner_key: &K, pending_key: &K)
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    let pending: Address = env
        .storage()
        .instance()
        .get(pending_key)
        .expect("no pending owner");
    pending.require_auth();
    env.storage().instance().set(owner_key, &pending);
    env.storage().instance().remove(pending_key);

    env.events()
        .publish((symbol_short!("owner"), symbol_short!("claimed")), pending);
}

/// Claims `target` for the current contract. Only this contract's owner may
/// trigger it, and `target` must already name this contract as pending owner.
pub fn proxy_claim_ownership<K>(env: &Env, owner_key: &K, target: &Address)
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    require_owner(env, owner_key);
    OwnableClient::new(env, target).claim_ownership();
}

/// Hands `target`, currently owned by this contract, over to `new_owner`.
pub fn proxy_transfer_ownership<K>(env: &Env, owner_key: &K, target: &Address, new_owner: &Address)
where
    K: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone,
{
    require_owner(env, owner_key);
    OwnableClient::new(env, target).transfer_ownership(new_owner);
}
