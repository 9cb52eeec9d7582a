#![cfg(test)]
use super::*;
use daico_fund::{FundContract, FundContractClient};
use daico_organization::{OrganizationContract, OrganizationContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger, MockAuth, MockAuthInvoke},
    token::{Client as TokenClient, StellarAssetClient},
    vec, Address, Env, IntoVal, String, Symbol,
};

const DAY: u64 = 86_400;
const START: u64 = 1_700_000_000;
const OPENING: u64 = START + DAY;
const IN_PROGRESS: u64 = OPENING + DAY;
const CLOSING: u64 = IN_PROGRESS + DAY;
const AFTER_CLOSING: u64 = CLOSING + DAY;

// ─── helpers ─────────────────────────────────────────────────────────────────

struct Setup<'a> {
    gov: GovernanceContractClient<'a>,
    org: OrganizationContractClient<'a>,
    fund: FundContractClient<'a>,
    token: Address,
    dai: Address,
    holders: [Address; 4],
}

/// Four holders, each credited with 100 DAI and 100 project tokens.
fn setup(env: &Env) -> Setup<'_> {
    env.ledger().with_mut(|li| {
        li.timestamp = START;
    });
    let owner = Address::generate(env);

    let org_id = env.register_contract(None, OrganizationContract);
    let org = OrganizationContractClient::new(env, &org_id);

    let fund_id = env.register_contract(None, FundContract);
    let fund = FundContractClient::new(env, &fund_id);
    fund.initialize(&owner, &org_id, &String::from_str(env, "TestFund"));

    let gov_id = env.register_contract(None, GovernanceContract);
    let gov = GovernanceContractClient::new(env, &gov_id);
    let token = env.register_stellar_asset_contract_v2(gov_id.clone()).address();
    gov.initialize(&owner, &fund_id, &token, &5_000);
    org.initialize(&owner, &String::from_str(env, "TestOrganisation"), &token);

    let dai = env
        .register_stellar_asset_contract_v2(Address::generate(env))
        .address();
    org.add_stable_coin(&dai, &18);
    StellarAssetClient::new(env, &dai).mint(&fund_id, &400);

    let holders = [
        Address::generate(env),
        Address::generate(env),
        Address::generate(env),
        Address::generate(env),
    ];
    for holder in holders.iter() {
        gov.register_contribution(holder, &dai, &100, &100);
    }

    Setup { gov, org, fund, token, dai, holders }
}

fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}

/// Votable governance with a poll minting 100 project tokens to `beneficiary`.
fn mint_poll(env: &Env, s: &Setup, beneficiary: &Address) -> BytesN<32> {
    s.gov.make_votable();
    s.gov.new_poll(
        &s.holders[0],
        &s.token,
        &Symbol::new(env, "mint"),
        &vec![env, beneficiary.into_val(env), 100i128.into_val(env)],
        &OPENING,
        &CLOSING,
    )
}

fn token_balance(env: &Env, s: &Setup, who: &Address) -> i128 {
    TokenClient::new(env, &s.token).balance(who)
}

// ─── contributions ───────────────────────────────────────────────────────────

#[test]
fn test_initial_ledger() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);

    assert_eq!(s.gov.state(), GovernanceState::Waiting);
    assert_eq!(s.gov.total_voting_power(), 400);
    assert_eq!(s.gov.total_contributed(&s.dai), 400);
    assert_eq!(s.gov.voter_balance(&s.holders[0]), 100);
    assert_eq!(token_balance(&env, &s, &s.gov.address), 400);
    assert_eq!(s.gov.quorum_bps(), 5_000);
    assert_eq!(s.gov.fund(), s.fund.address);
}

#[test]
fn test_contributions_accumulate() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let usdc = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    s.gov.register_contribution(&s.holders[0], &s.dai, &50, &60);
    s.gov.register_contribution(&s.holders[0], &usdc, &7, &8);

    assert_eq!(
        s.gov.contribution(&s.holders[0], &s.dai),
        Contribution {
            stable_coin_amount: 150,
            token_amount: 160,
        }
    );
    assert_eq!(s.gov.contribution(&s.holders[0], &usdc).token_amount, 8);
    assert_eq!(s.gov.voter_balance(&s.holders[0]), 168);
    assert_eq!(s.gov.total_voting_power(), 468);
    assert_eq!(token_balance(&env, &s, &s.gov.address), 468);
}

#[test]
#[should_panic]
fn test_only_owner_registers_contributions() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let stranger = Address::generate(&env);

    env.mock_auths(&[MockAuth {
        address: &stranger,
        invoke: &MockAuthInvoke {
            contract: &s.gov.address,
            fn_name: "register_contribution",
            args: (stranger.clone(), s.dai.clone(), 1i128, 1i128).into_val(&env),
            sub_invokes: &[],
        },
    }]);
    s.gov.register_contribution(&stranger, &s.dai, &1, &1);
}

#[test]
#[should_panic(expected = "invalid state")]
fn test_no_contributions_while_refunding() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.start_refunding();
    s.gov.register_contribution(&s.holders[0], &s.dai, &1, &1);
}

// ─── states ──────────────────────────────────────────────────────────────────

#[test]
#[should_panic]
fn test_only_owner_makes_votable() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let stranger = Address::generate(&env);

    env.mock_auths(&[MockAuth {
        address: &stranger,
        invoke: &MockAuthInvoke {
            contract: &s.gov.address,
            fn_name: "make_votable",
            args: ().into_val(&env),
            sub_invokes: &[],
        },
    }]);
    s.gov.make_votable();
}

#[test]
#[should_panic(expected = "invalid state")]
fn test_cannot_refund_after_votable() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.make_votable();
    s.gov.start_refunding();
}

#[test]
#[should_panic(expected = "invalid state")]
fn test_cannot_vote_after_refunding() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.start_refunding();
    s.gov.make_votable();
}

#[test]
#[should_panic(expected = "invalid state")]
fn test_no_polls_while_waiting() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.new_poll(
        &s.holders[0],
        &s.org.address,
        &Symbol::new(&env, "del_stable_coin"),
        &vec![&env, s.dai.into_val(&env)],
        &OPENING,
        &CLOSING,
    );
}

#[test]
#[should_panic(expected = "invalid state")]
fn test_no_polls_while_refunding() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.start_refunding();
    s.gov.new_poll(
        &s.holders[0],
        &s.org.address,
        &Symbol::new(&env, "del_stable_coin"),
        &vec![&env, s.dai.into_val(&env)],
        &OPENING,
        &CLOSING,
    );
}

// ─── voting outcomes ─────────────────────────────────────────────────────────

#[test]
fn test_no_quorum() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let beneficiary = Address::generate(&env);
    let id = mint_poll(&env, &s, &beneficiary);
    set_time(&env, IN_PROGRESS);

    s.gov.vote(&s.holders[0], &id, &true);
    set_time(&env, AFTER_CLOSING);

    assert!(s.gov.try_to_finalize(&id));
    assert_eq!(token_balance(&env, &s, &beneficiary), 0);
    assert_eq!(s.gov.poll_status(&id), PollStatus::Finalized);
    assert!(!s.gov.poll(&id).executed);
}

#[test]
fn test_negative_result() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let beneficiary = Address::generate(&env);
    let id = mint_poll(&env, &s, &beneficiary);
    set_time(&env, IN_PROGRESS);

    s.gov.vote(&s.holders[0], &id, &false);
    s.gov.vote(&s.holders[1], &id, &false);
    set_time(&env, AFTER_CLOSING);

    assert!(s.gov.try_to_finalize(&id));
    assert_eq!(token_balance(&env, &s, &beneficiary), 0);
}

#[test]
fn test_positive_result_executes_command() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let beneficiary = Address::generate(&env);
    let id = mint_poll(&env, &s, &beneficiary);
    set_time(&env, IN_PROGRESS);

    s.gov.vote(&s.holders[0], &id, &true);
    s.gov.vote(&s.holders[1], &id, &true);
    s.gov.vote(&s.holders[2], &id, &true);
    set_time(&env, AFTER_CLOSING);

    assert!(s.gov.try_to_finalize(&id));
    assert_eq!(token_balance(&env, &s, &beneficiary), 100);
    let poll = s.gov.poll(&id);
    assert_eq!(poll.yes, 300);
    assert!(poll.finalized);
    assert!(poll.executed);
}

#[test]
fn test_tie_is_not_a_majority() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let beneficiary = Address::generate(&env);
    let id = mint_poll(&env, &s, &beneficiary);
    set_time(&env, IN_PROGRESS);

    s.gov.vote(&s.holders[0], &id, &true);
    s.gov.vote(&s.holders[1], &id, &true);
    s.gov.vote(&s.holders[2], &id, &false);
    s.gov.vote(&s.holders[3], &id, &false);
    set_time(&env, AFTER_CLOSING);

    assert!(s.gov.try_to_finalize(&id));
    assert_eq!(token_balance(&env, &s, &beneficiary), 0);
}

#[test]
fn test_revoked_vote_is_not_counted() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let beneficiary = Address::generate(&env);
    let id = mint_poll(&env, &s, &beneficiary);
    set_time(&env, IN_PROGRESS);

    s.gov.vote(&s.holders[0], &id, &true);
    s.gov.vote(&s.holders[1], &id, &true);
    s.gov.revoke_vote(&s.holders[1], &id);
    assert_eq!(s.gov.vote_of(&id, &s.holders[1]), None);
    set_time(&env, AFTER_CLOSING);

    assert!(s.gov.try_to_finalize(&id));
    let poll = s.gov.poll(&id);
    assert_eq!(poll.yes, 100);
    assert_eq!(poll.no, 0);
    assert_eq!(token_balance(&env, &s, &beneficiary), 0);
}

#[test]
fn test_revoke_and_revote_flips_result() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let beneficiary = Address::generate(&env);
    let id = mint_poll(&env, &s, &beneficiary);
    set_time(&env, IN_PROGRESS);

    s.gov.vote(&s.holders[0], &id, &true);
    s.gov.vote(&s.holders[1], &id, &false);
    s.gov.vote(&s.holders[2], &id, &false);
    s.gov.vote(&s.holders[3], &id, &false);
    s.gov.revoke_vote(&s.holders[1], &id);
    s.gov.revoke_vote(&s.holders[2], &id);
    s.gov.vote(&s.holders[1], &id, &true);
    s.gov.vote(&s.holders[2], &id, &true);
    assert_eq!(
        s.gov.vote_of(&id, &s.holders[2]),
        Some(VoteRecord { yes: true, power: 100 })
    );
    set_time(&env, AFTER_CLOSING);

    assert!(s.gov.try_to_finalize(&id));
    assert_eq!(token_balance(&env, &s, &beneficiary), 100);
}

// ─── finalization ────────────────────────────────────────────────────────────

#[test]
fn test_finalize_before_closing_returns_false() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let id = mint_poll(&env, &s, &Address::generate(&env));

    assert_eq!(s.gov.poll_status(&id), PollStatus::Created);
    assert!(!s.gov.try_to_finalize(&id));
    set_time(&env, IN_PROGRESS);
    assert_eq!(s.gov.poll_status(&id), PollStatus::Open);
    assert!(!s.gov.try_to_finalize(&id));
    set_time(&env, CLOSING);
    assert_eq!(s.gov.poll_status(&id), PollStatus::Closed);
    assert!(!s.gov.poll(&id).finalized);
}

#[test]
#[should_panic(expected = "already finalized")]
fn test_finalize_twice() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let beneficiary = Address::generate(&env);
    let id = mint_poll(&env, &s, &beneficiary);
    set_time(&env, IN_PROGRESS);
    s.gov.vote(&s.holders[0], &id, &true);
    s.gov.vote(&s.holders[1], &id, &true);
    s.gov.vote(&s.holders[2], &id, &true);
    set_time(&env, AFTER_CLOSING);

    s.gov.try_to_finalize(&id);
    assert_eq!(token_balance(&env, &s, &beneficiary), 100);
    s.gov.try_to_finalize(&id);
}

#[test]
fn test_failed_command_rolls_back_and_can_be_retried() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.org.transfer_ownership(&s.gov.address);
    s.gov.proxy_claim_ownership(&s.org.address);
    assert_eq!(s.org.owner(), s.gov.address);
    s.gov.make_votable();

    let usdc = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let del_id = s.gov.new_poll(
        &s.holders[0],
        &s.org.address,
        &Symbol::new(&env, "del_stable_coin"),
        &vec![&env, usdc.into_val(&env)],
        &OPENING,
        &CLOSING,
    );
    let add_id = s.gov.new_poll(
        &s.holders[0],
        &s.org.address,
        &Symbol::new(&env, "add_stable_coin"),
        &vec![&env, usdc.into_val(&env), 6u32.into_val(&env)],
        &OPENING,
        &CLOSING,
    );
    set_time(&env, IN_PROGRESS);
    for holder in s.holders[..3].iter() {
        s.gov.vote(holder, &del_id, &true);
        s.gov.vote(holder, &add_id, &true);
    }
    set_time(&env, AFTER_CLOSING);

    // usdc is not registered yet, so deleting it fails
    assert!(s.gov.try_try_to_finalize(&del_id).is_err());
    assert_eq!(s.gov.poll_status(&del_id), PollStatus::Closed);

    assert!(s.gov.try_to_finalize(&add_id));
    assert!(s.org.is_stable_coin(&usdc));
    assert_eq!(s.org.get_decimals(&usdc), 6);

    assert!(s.gov.try_to_finalize(&del_id));
    assert!(!s.org.is_stable_coin(&usdc));
    assert!(s.gov.poll(&del_id).executed);
}

// ─── poll creation ───────────────────────────────────────────────────────────

#[test]
#[should_panic(expected = "not a token holder")]
fn test_only_holders_create_polls() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.make_votable();
    s.gov.new_poll(
        &Address::generate(&env),
        &s.token,
        &Symbol::new(&env, "mint"),
        &vec![&env],
        &OPENING,
        &CLOSING,
    );
}

#[test]
#[should_panic(expected = "opening time in the past")]
fn test_opening_time_must_be_in_future() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.make_votable();
    s.gov.new_poll(
        &s.holders[0],
        &s.token,
        &Symbol::new(&env, "mint"),
        &vec![&env],
        &(START - 3_600),
        &CLOSING,
    );
}

#[test]
#[should_panic(expected = "invalid poll window")]
fn test_closing_must_follow_opening() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.make_votable();
    s.gov.new_poll(
        &s.holders[0],
        &s.token,
        &Symbol::new(&env, "mint"),
        &vec![&env],
        &CLOSING,
        &OPENING,
    );
}

#[test]
#[should_panic(expected = "empty function")]
fn test_function_required() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.make_votable();
    s.gov.new_poll(
        &s.holders[0],
        &s.token,
        &Symbol::new(&env, ""),
        &vec![&env],
        &OPENING,
        &CLOSING,
    );
}

#[test]
#[should_panic(expected = "poll already exists")]
fn test_same_command_twice_in_one_ledger() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let beneficiary = Address::generate(&env);
    mint_poll(&env, &s, &beneficiary);
    s.gov.new_poll(
        &s.holders[1],
        &s.token,
        &Symbol::new(&env, "mint"),
        &vec![&env, beneficiary.into_val(&env), 100i128.into_val(&env)],
        &OPENING,
        &CLOSING,
    );
}

#[test]
fn test_same_command_in_next_ledger() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let beneficiary = Address::generate(&env);
    let first = mint_poll(&env, &s, &beneficiary);
    env.ledger().with_mut(|li| {
        li.sequence_number += 1;
    });

    let second = s.gov.new_poll(
        &s.holders[1],
        &s.token,
        &Symbol::new(&env, "mint"),
        &vec![&env, beneficiary.into_val(&env), 100i128.into_val(&env)],
        &OPENING,
        &CLOSING,
    );
    assert_ne!(first, second);
    assert_eq!(s.gov.poll(&second).proposer, s.holders[1]);
}

// ─── voting rules ────────────────────────────────────────────────────────────

#[test]
#[should_panic(expected = "poll not open")]
fn test_cannot_vote_before_opening() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let id = mint_poll(&env, &s, &Address::generate(&env));
    s.gov.vote(&s.holders[0], &id, &true);
}

#[test]
#[should_panic(expected = "poll not open")]
fn test_cannot_vote_after_closing() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let id = mint_poll(&env, &s, &Address::generate(&env));
    set_time(&env, AFTER_CLOSING);
    s.gov.vote(&s.holders[0], &id, &true);
}

#[test]
#[should_panic(expected = "already voted")]
fn test_cannot_vote_twice() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let id = mint_poll(&env, &s, &Address::generate(&env));
    set_time(&env, IN_PROGRESS);
    s.gov.vote(&s.holders[0], &id, &true);
    s.gov.vote(&s.holders[0], &id, &false);
}

#[test]
#[should_panic(expected = "not voted")]
fn test_cannot_revoke_twice() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let id = mint_poll(&env, &s, &Address::generate(&env));
    set_time(&env, IN_PROGRESS);
    s.gov.vote(&s.holders[0], &id, &true);
    s.gov.revoke_vote(&s.holders[0], &id);
    s.gov.revoke_vote(&s.holders[0], &id);
}

#[test]
#[should_panic(expected = "not a token holder")]
fn test_only_holders_vote() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let id = mint_poll(&env, &s, &Address::generate(&env));
    set_time(&env, IN_PROGRESS);
    s.gov.vote(&Address::generate(&env), &id, &true);
}

// ─── token withdrawal ────────────────────────────────────────────────────────

#[test]
fn test_withdraw_token() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.make_votable();
    let wallet = Address::generate(&env);

    s.gov.withdraw_token(&s.holders[0], &wallet, &40);

    assert_eq!(token_balance(&env, &s, &wallet), 40);
    assert_eq!(s.gov.voter_balance(&s.holders[0]), 60);
    assert_eq!(s.gov.total_voting_power(), 360);
    assert_eq!(token_balance(&env, &s, &s.gov.address), 360);
}

#[test]
#[should_panic(expected = "insufficient balance")]
fn test_withdraw_more_than_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.make_votable();
    s.gov.withdraw_token(&s.holders[0], &s.holders[0], &101);
}

#[test]
#[should_panic(expected = "invalid state")]
fn test_withdraw_while_waiting() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.gov.withdraw_token(&s.holders[0], &s.holders[0], &10);
}

// ─── refunds ─────────────────────────────────────────────────────────────────

#[test]
fn test_refunds_are_proportional() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.fund.add_tap(&s.gov.address);

    // half of the contributed DAI has already left the fund
    let sink = Address::generate(&env);
    let spender = Address::generate(&env);
    s.fund.add_tap(&spender);
    s.fund.withdraw_stable_coin(&spender, &s.dai, &sink, &200);
    s.gov.start_refunding();

    assert_eq!(s.gov.refund_contribution(&s.holders[0], &s.dai), 50);
    assert_eq!(s.gov.total_contributed(&s.dai), 300);
    assert_eq!(s.gov.refund_contribution(&s.holders[1], &s.dai), 50);

    let dai = TokenClient::new(&env, &s.dai);
    assert_eq!(dai.balance(&s.holders[0]), 50);
    assert_eq!(dai.balance(&s.holders[1]), 50);
    assert_eq!(dai.balance(&s.fund.address), 100);
    assert_eq!(s.gov.contribution(&s.holders[0], &s.dai).stable_coin_amount, 0);
    assert_eq!(s.gov.voter_balance(&s.holders[0]), 0);
    assert_eq!(s.gov.total_voting_power(), 200);
}

#[test]
fn test_refunds_with_18_decimal_amounts() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let unit: i128 = 1_000_000_000_000_000_000;
    let ausd_coin = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    s.org.add_stable_coin(&ausd_coin, &18);
    s.gov.register_contribution(&s.holders[0], &ausd_coin, &(1_000 * unit), &(20_000 * unit));
    s.gov.register_contribution(&s.holders[1], &ausd_coin, &(3_000 * unit), &(60_000 * unit));
    // half of the 4_000 contributed is still in the fund
    StellarAssetClient::new(&env, &ausd_coin).mint(&s.fund.address, &(2_000 * unit));
    s.fund.add_tap(&s.gov.address);
    s.gov.start_refunding();

    assert_eq!(s.gov.refund_contribution(&s.holders[0], &ausd_coin), 500 * unit);
    assert_eq!(s.gov.refund_contribution(&s.holders[1], &ausd_coin), 1_500 * unit);

    let coin = TokenClient::new(&env, &ausd_coin);
    assert_eq!(coin.balance(&s.holders[0]), 500 * unit);
    assert_eq!(coin.balance(&s.holders[1]), 1_500 * unit);
    assert_eq!(coin.balance(&s.fund.address), 0);
    assert_eq!(s.gov.total_contributed(&ausd_coin), 0);
}

#[test]
#[should_panic(expected = "nothing to refund")]
fn test_refund_twice() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.fund.add_tap(&s.gov.address);
    s.gov.start_refunding();

    s.gov.refund_contribution(&s.holders[0], &s.dai);
    s.gov.refund_contribution(&s.holders[0], &s.dai);
}

#[test]
#[should_panic(expected = "stable coin not registered")]
fn test_refund_of_deleted_coin() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.fund.add_tap(&s.gov.address);
    s.gov.start_refunding();
    s.org.del_stable_coin(&s.dai);

    s.gov.refund_contribution(&s.holders[0], &s.dai);
}

#[test]
#[should_panic(expected = "invalid state")]
fn test_refund_while_votable() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    s.fund.add_tap(&s.gov.address);
    s.gov.make_votable();
    s.gov.refund_contribution(&s.holders[0], &s.dai);
}

// ─── ownership ───────────────────────────────────────────────────────────────

#[test]
fn test_proxy_transfer_hands_target_over() {
    let env = Env::default();
    env.mock_all_auths();
    let s = setup(&env);
    let next_admin = Address::generate(&env);

    s.org.transfer_ownership(&s.gov.address);
    assert_eq!(s.org.pending_owner(), Some(s.gov.address.clone()));
    s.gov.proxy_claim_ownership(&s.org.address);
    assert_eq!(s.org.pending_owner(), None);

    s.gov.proxy_transfer_ownership(&s.org.address, &next_admin);
    assert_eq!(s.org.pending_owner(), Some(next_admin.clone()));
    s.org.claim_ownership();
    assert_eq!(s.org.owner(), next_admin);
}
