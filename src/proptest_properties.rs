//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers six properties:
//!
//! 1. **Product preservation** — `reserve_a * reserve_b` never decreases
//!    across a swap (the fee keeps the product growing).
//! 2. **Swap reversibility** — round-trip A→B→A returns ≤ original.
//! 3. **Fee monotonicity** — a higher fee never increases swap output.
//! 4. **Burn solvency** — a burn payout never exceeds the reserve held.
//! 5. **Mint/burn conservation** — mint then burn those shares returns
//!    amounts ≤ the deposits.
//! 6. **Metapool equivalence** — a pool whose reserve is another pool's
//!    share token prices identically to a pool over plain assets.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::{PoolParams, MIN_FUNDING};
use crate::domain::{AccountId, Amount, AssetId, AssetParams, Payment, Transfer};
use crate::engine::PoolMath;
use crate::ledger::InMemoryLedger;
use crate::pool::Pool;
use crate::traits::Ledger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn acct(tag: u8) -> AccountId {
    AccountId::from_bytes([tag; 32])
}

fn new_asset(ledger: &mut InMemoryLedger, holder: AccountId) -> AssetId {
    let Ok(id) = ledger.create_asset(AssetParams {
        total: Amount::new(1_000_000_000_000),
        decimals: 0,
        name: "Reserve Asset".to_owned(),
        unit_name: "RSV".to_owned(),
        manager: holder,
        reserve: holder,
    }) else {
        panic!("asset creation");
    };
    id
}

/// Bootstraps a fresh pool at address `[tag; 32]` over the given assets
/// and opts `user` into its share token.
fn launch(
    ledger: &mut InMemoryLedger,
    tag: u8,
    asset_a: AssetId,
    asset_b: AssetId,
    user: AccountId,
) -> (Pool, AssetId) {
    let governor = acct(1);
    let pool_addr = acct(tag);
    ledger.credit(AssetId::NATIVE, governor, MIN_FUNDING);
    let mut pool = Pool::create(pool_addr, governor, PoolParams::default());
    let funding = Payment::new(MIN_FUNDING, governor, pool_addr);
    let Ok(pool_token) = pool.bootstrap(ledger, governor, funding, asset_a, asset_b) else {
        panic!("bootstrap");
    };
    let Ok(()) = ledger.transfer(pool_token, Amount::ZERO, user, user) else {
        panic!("share opt-in");
    };
    (pool, pool_token)
}

/// Initial deposit; reserves become exactly `(ra, rb)`.
fn seed(pool: &mut Pool, ledger: &mut InMemoryLedger, user: AccountId, ra: u64, rb: u64) {
    let Some(asset_a) = pool.asset_a() else {
        panic!("bootstrapped pool");
    };
    let Some(asset_b) = pool.asset_b() else {
        panic!("bootstrapped pool");
    };
    let a = Transfer::new(asset_a, Amount::new(ra), user, pool.address());
    let b = Transfer::new(asset_b, Amount::new(rb), user, pool.address());
    let Ok(_) = pool.mint(ledger, user, a, b) else {
        panic!("seed mint");
    };
}

/// Ledger plus one pool seeded with reserves `(ra, rb)`.
fn seeded(ra: u64, rb: u64) -> (InMemoryLedger, Pool, AssetId, AssetId, AssetId, AccountId) {
    let user = acct(2);
    let mut ledger = InMemoryLedger::new();
    let asset_a = new_asset(&mut ledger, user);
    let asset_b = new_asset(&mut ledger, user);
    let (mut pool, pool_token) = launch(&mut ledger, 9, asset_a, asset_b, user);
    seed(&mut pool, &mut ledger, user, ra, rb);
    (ledger, pool, asset_a, asset_b, pool_token, user)
}

fn reserves(ledger: &InMemoryLedger, pool: &Pool, a: AssetId, b: AssetId) -> (u64, u64) {
    let Some(ra) = ledger.balance_of(a, pool.address()) else {
        panic!("reserve balance");
    };
    let Some(rb) = ledger.balance_of(b, pool.address()) else {
        panic!("reserve balance");
    };
    (ra.get(), rb.get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=10_000_000u64
}

/// Circulating share counts for engine-level burn checks.
fn issued_strategy() -> impl Strategy<Value = u64> {
    1u64..=10_000_000u64
}

// ---------------------------------------------------------------------------
// Property 1: Product Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_decreases_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let (mut ledger, mut pool, asset_a, asset_b, _, user) = seeded(ra, rb);
        let swap_in = (ra / 1_000).max(1);

        let (before_a, before_b) = reserves(&ledger, &pool, asset_a, asset_b);
        let input = Transfer::new(asset_a, Amount::new(swap_in), user, pool.address());
        let Ok(_) = pool.swap(&mut ledger, user, input) else {
            // Dust input floored to zero output; rejected, nothing moved.
            let (a, b) = reserves(&ledger, &pool, asset_a, asset_b);
            prop_assert_eq!((a, b), (before_a, before_b));
            return Ok(());
        };
        let (after_a, after_b) = reserves(&ledger, &pool, asset_a, asset_b);

        prop_assert!(
            u128::from(after_a) * u128::from(after_b)
                >= u128::from(before_a) * u128::from(before_b),
            "product decreased: ({}, {}) -> ({}, {})",
            before_a, before_b, after_a, after_b
        );
    }

    // -----------------------------------------------------------------------
    // Property 2: Swap Reversibility
    // -----------------------------------------------------------------------

    #[test]
    fn prop_swap_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let (mut ledger, mut pool, asset_a, asset_b, _, user) = seeded(ra, rb);
        let swap_in = (ra / 1_000).max(1);

        let forward = Transfer::new(asset_a, Amount::new(swap_in), user, pool.address());
        let Ok(received) = pool.swap(&mut ledger, user, forward) else {
            return Ok(());
        };
        let back = Transfer::new(asset_b, received, user, pool.address());
        let Ok(final_a) = pool.swap(&mut ledger, user, back) else {
            return Ok(());
        };

        prop_assert!(
            final_a.get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            final_a.get(), swap_in
        );
    }

    // -----------------------------------------------------------------------
    // Property 3: Fee Monotonicity
    // -----------------------------------------------------------------------

    #[test]
    fn prop_higher_fee_never_increases_output(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in 1u64..=1_000_000u64,
    ) {
        let Ok(low) = PoolParams::new(Amount::new(10_000_000_000), 1000, 5) else {
            panic!("valid params");
        };
        let Ok(high) = PoolParams::new(Amount::new(10_000_000_000), 1000, 50) else {
            panic!("valid params");
        };
        let in_amount = Amount::new(amount);
        let in_reserve = Amount::new(ra);
        let out_reserve = Amount::new(rb);

        let Ok(out_low) = PoolMath::new(&low).tokens_to_swap(in_amount, in_reserve, out_reserve)
        else {
            return Ok(());
        };
        let Ok(out_high) = PoolMath::new(&high).tokens_to_swap(in_amount, in_reserve, out_reserve)
        else {
            return Ok(());
        };

        prop_assert!(
            out_low >= out_high,
            "fee 50/1000 out={} exceeded fee 5/1000 out={}",
            out_high, out_low
        );
    }

    // -----------------------------------------------------------------------
    // Property 4: Burn Solvency
    // -----------------------------------------------------------------------

    #[test]
    fn prop_burn_payout_never_exceeds_reserve(
        issued in issued_strategy(),
        reserve in reserve_strategy(),
        burn in issued_strategy(),
    ) {
        let burn = burn.min(issued);
        let math = PoolMath::new(&PoolParams::default());
        let Ok(payout) = math.tokens_to_burn(
            Amount::new(issued),
            Amount::new(reserve),
            Amount::new(burn),
        ) else {
            return Ok(());
        };

        prop_assert!(
            payout.get() <= reserve,
            "payout {} exceeds reserve {}",
            payout.get(), reserve
        );
    }

    // -----------------------------------------------------------------------
    // Property 5: Mint/Burn Conservation
    // -----------------------------------------------------------------------

    #[test]
    fn prop_mint_then_burn_returns_at_most_deposits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let (mut ledger, mut pool, asset_a, asset_b, pool_token, user) = seeded(ra, rb);
        let da = (ra / 7).max(1);
        let db = (rb / 7).max(1);

        let a = Transfer::new(asset_a, Amount::new(da), user, pool.address());
        let b = Transfer::new(asset_b, Amount::new(db), user, pool.address());
        let Ok(shares) = pool.mint(&mut ledger, user, a, b) else {
            return Ok(());
        };
        let redemption = Transfer::new(pool_token, shares, user, pool.address());
        let Ok((a_out, b_out)) = pool.burn(&mut ledger, user, redemption) else {
            return Ok(());
        };

        prop_assert!(
            a_out.get() <= da && b_out.get() <= db,
            "round trip returned ({}, {}) for deposits ({}, {})",
            a_out.get(), b_out.get(), da, db
        );
    }

    // -----------------------------------------------------------------------
    // Property 6: Metapool Equivalence
    // -----------------------------------------------------------------------

    #[test]
    fn prop_metapool_prices_like_a_plain_pool(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        sc in reserve_strategy(),
    ) {
        let user = acct(2);
        let mut ledger = InMemoryLedger::new();
        let asset_a = new_asset(&mut ledger, user);
        let asset_b = new_asset(&mut ledger, user);
        let asset_c = new_asset(&mut ledger, user);
        let plain_a = new_asset(&mut ledger, user);

        // Base pool whose share token will back the metapool.
        let (mut base, base_token) = launch(&mut ledger, 9, asset_a, asset_b, user);
        seed(&mut base, &mut ledger, user, ra, rb);
        let Some(share_balance) = ledger.balance_of(base_token, user) else {
            panic!("share balance");
        };
        let sa = (share_balance.get() / 2).max(1);

        // Metapool over (base share token, C) and a plain pool over
        // (ordinary asset, C) with identical reserves.
        let (mut meta, _) = launch(&mut ledger, 8, base_token, asset_c, user);
        seed(&mut meta, &mut ledger, user, sa, sc);
        let (mut plain, _) = launch(&mut ledger, 7, plain_a, asset_c, user);
        seed(&mut plain, &mut ledger, user, sa, sc);

        let swap_in = (sa / 1_000).max(1);
        let meta_input = Transfer::new(base_token, Amount::new(swap_in), user, meta.address());
        let plain_input = Transfer::new(plain_a, Amount::new(swap_in), user, plain.address());
        let meta_out = pool_swap_result(&mut meta, &mut ledger, user, meta_input);
        let plain_out = pool_swap_result(&mut plain, &mut ledger, user, plain_input);

        prop_assert_eq!(meta_out, plain_out);
    }
}

fn pool_swap_result(
    pool: &mut Pool,
    ledger: &mut InMemoryLedger,
    user: AccountId,
    input: Transfer,
) -> Option<Amount> {
    pool.swap(ledger, user, input).ok()
}
