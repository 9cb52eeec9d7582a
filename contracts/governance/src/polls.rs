//! Poll records and the rules that decide them.

use soroban_sdk::{contracttype, xdr::ToXdr, Address, BytesN, Env, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum PollStatus {
    Created,
    Open,
    Closed,
    Finalized,
}

/// A command waiting for a vote: call `function(args...)` on `target`.
#[contracttype]
#[derive(Clone)]
pub struct Poll {
    pub proposer: Address,
    pub target: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
    pub opening_time: u64,
    pub closing_time: u64,
    pub yes: i128,
    pub no: i128,
    pub created_ledger: u32,
    pub finalized: bool,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct VoteRecord {
    pub yes: bool,
    pub power: i128,
}

/// Identical commands created in the same ledger share an id.
pub fn poll_id(env: &Env, target: &Address, function: &Symbol, args: &Vec<Val>) -> BytesN<32> {
    let payload = (
        target.clone(),
        function.clone(),
        args.clone(),
        env.ledger().sequence(),
    );
    env.crypto().sha256(&payload.to_xdr(env)).into()
}

impl Poll {
    pub fn status(&self, now: u64) -> PollStatus {
        if self.finalized {
            PollStatus::Finalized
        } else if now < self.opening_time {
            PollStatus::Created
        } else if now < self.closing_time {
            PollStatus::Open
        } else {
            PollStatus::Closed
        }
    }

    pub fn is_open(&self, now: u64) -> bool {
        self.status(now) == PollStatus::Open
    }

    pub fn add_vote(&mut self, record: &VoteRecord) {
        let tally = if record.yes { &mut self.yes } else { &mut self.no };
        *tally = tally
            .checked_add(record.power)
            .unwrap_or_else(|| panic!("arithmetic overflow"));
    }

    pub fn remove_vote(&mut self, record: &VoteRecord) {
        if record.yes {
            self.yes -= record.power;
        } else {
            self.no -= record.power;
        }
    }

    /// Participation of at least `quorum_bps` of `total_power`, and strictly
    /// more yes than no.
    pub fn passed(&self, total_power: i128, quorum_bps: u32) -> bool {
        let participating = self.yes + self.no;
        let quorum = match (
            participating.checked_mul(10_000),
            total_power.checked_mul(quorum_bps as i128),
        ) {
            (Some(lhs), Some(rhs)) => lhs >= rhs,
            _ => panic!("arithmetic overflow"),
        };
        quorum && participating > 0 && self.yes > self.no
    }
}
