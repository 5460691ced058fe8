// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PRORATA - CORE MODULE
//
// Single-asset ledger with administrator-gated issuance and pro-rata profit
// sharing. The ledger's own treasury account holds the undistributed pool;
// funding it spreads the amount across circulating holders via the dividend
// accumulator in distribution.rs, and each holder withdraws in O(1).
// All financial arithmetic uses u128 atomic units (no floating-point).
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod distribution;
use crate::distribution::DividendState;

/// Atomic units per display coin (10^9 precision).
pub const UNITS_PER_COIN: u128 = 1_000_000_000;

// ─────────────────────────────────────────────────────────────────
// ERRORS
// ─────────────────────────────────────────────────────────────────

/// Every way a ledger operation can fail. All failures leave state
/// unmodified — operations validate every step, including arithmetic,
/// before the first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Caller lacks the administrator capability.
    Unauthorized,
    /// Balance or supply arithmetic would leave the u128 domain.
    Overflow,
    /// Debit exceeds the account's balance.
    InsufficientBalance { have: u128, need: u128 },
    /// Distribution attempted with nothing in circulation to allocate it to.
    NoSupply,
    /// Zero funds to distribute or withdraw.
    NoFunds,
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LedgerError::Unauthorized => {
                write!(f, "Unauthorized: caller is not the administrator")
            }
            LedgerError::Overflow => write!(f, "Overflow: amount exceeds u128 domain"),
            LedgerError::InsufficientBalance { have, need } => {
                write!(f, "Insufficient balance: have {} need {}", have, need)
            }
            LedgerError::NoSupply => {
                write!(f, "No supply: nothing in circulation to distribute to")
            }
            LedgerError::NoFunds => write!(f, "0 funds to distribute"),
        }
    }
}

impl std::error::Error for LedgerError {}

// ─────────────────────────────────────────────────────────────────
// ACCESS CONTROL
// ─────────────────────────────────────────────────────────────────

/// Explicit administrator capability. Passed into the ledger at creation
/// instead of implicit global ownership; the transport layer authenticates
/// callers, this object only compares identities.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccessControl {
    admin: String,
}

impl AccessControl {
    pub fn new(admin: impl Into<String>) -> Self {
        Self {
            admin: admin.into(),
        }
    }

    pub fn admin(&self) -> &str {
        &self.admin
    }

    pub fn require_admin(&self, caller: &str) -> Result<(), LedgerError> {
        if caller == self.admin {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized)
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// LEDGER
// ─────────────────────────────────────────────────────────────────

/// The shared mutable resource: balance table + dividend accounting.
///
/// Operations are fully serialized and atomic — `&mut self` gives each
/// mutating call exclusive access, and every call either commits fully or
/// fails without touching state. The treasury is a plain entry in
/// `balances`; only its identity is distinguished, never its type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    /// BTreeMap keeps iteration and serialization deterministic, which the
    /// state root relies on.
    pub balances: BTreeMap<String, u128>,
    pub total_supply: u128,
    pub dividends: DividendState,
    access: AccessControl,
    treasury: String,
}

impl Ledger {
    pub fn new(admin: impl Into<String>, treasury: impl Into<String>) -> Self {
        Self {
            balances: BTreeMap::new(),
            total_supply: 0,
            dividends: DividendState::new(),
            access: AccessControl::new(admin),
            treasury: treasury.into(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────

    pub fn balance_of(&self, account: &str) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Supply held outside the treasury — the dividend denominator.
    pub fn circulating_supply(&self) -> u128 {
        self.total_supply
            .saturating_sub(self.balance_of(&self.treasury))
    }

    /// Identity of the account holding the undistributed pool
    /// (always the ledger's own identity).
    pub fn treasury_account(&self) -> &str {
        &self.treasury
    }

    pub fn admin(&self) -> &str {
        self.access.admin()
    }

    /// Amount `account` may withdraw right now. Pure and idempotent.
    /// The treasury never accrues a claim on the pool it holds.
    pub fn owed_to(&self, account: &str) -> Result<u128, LedgerError> {
        if account == self.treasury {
            return Ok(0);
        }
        self.dividends.owed(account, self.balance_of(account))
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Administrator-gated issuance. Minting to the treasury account is a
    /// funding event and routes through [`fund_treasury`](Self::fund_treasury).
    pub fn mint(&mut self, caller: &str, to: &str, amount: u128) -> Result<(), LedgerError> {
        if to == self.treasury {
            return self.fund_treasury(caller, amount);
        }
        self.access.require_admin(caller)?;

        let old = self.balance_of(to);
        let new = old.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        // Correction is computed from the pre-mutation balance, then
        // committed together with the balance — all-or-nothing.
        let correction = self.dividends.correction_for_change(to, old, new)?;

        self.dividends.set_correction(to, correction);
        self.balances.insert(to.to_string(), new);
        self.total_supply = new_supply;
        Ok(())
    }

    /// Move `amount` from the caller to `to`. Both sides notify the
    /// dividend state with their own old/new balance pair, so neither
    /// party's owed() moves with the transfer.
    pub fn transfer(&mut self, caller: &str, to: &str, amount: u128) -> Result<(), LedgerError> {
        if caller == self.treasury {
            // Treasury funds move only through withdraw().
            return Err(LedgerError::Unauthorized);
        }
        let from_old = self.balance_of(caller);
        if from_old < amount {
            return Err(LedgerError::InsufficientBalance {
                have: from_old,
                need: amount,
            });
        }
        if caller == to {
            return Ok(());
        }
        let from_new = from_old - amount;
        let to_old = self.balance_of(to);
        let to_new = to_old.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let from_correction = self
            .dividends
            .correction_for_change(caller, from_old, from_new)?;
        let to_correction = self.dividends.correction_for_change(to, to_old, to_new)?;

        self.dividends.set_correction(caller, from_correction);
        self.dividends.set_correction(to, to_correction);
        self.balances.insert(caller.to_string(), from_new);
        self.balances.insert(to.to_string(), to_new);
        Ok(())
    }

    /// Permanently remove `amount` from the caller's balance and the supply.
    pub fn burn(&mut self, caller: &str, amount: u128) -> Result<(), LedgerError> {
        if caller == self.treasury {
            return Err(LedgerError::Unauthorized);
        }
        let old = self.balance_of(caller);
        if old < amount {
            return Err(LedgerError::InsufficientBalance {
                have: old,
                need: amount,
            });
        }
        let new = old - amount;
        let new_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;
        let correction = self.dividends.correction_for_change(caller, old, new)?;

        self.dividends.set_correction(caller, correction);
        self.balances.insert(caller.to_string(), new);
        self.total_supply = new_supply;
        Ok(())
    }

    /// Administrator mints `amount` to the treasury AND spreads it across
    /// circulating holders in one atomic step.
    ///
    /// Denominator: the circulating supply (total minus treasury balance)
    /// measured after the funding mint — which equals the pre-fund
    /// circulating supply, since the whole mint lands on the treasury.
    /// Fails with `NoSupply` when nothing circulates (funding would strand
    /// the amount with no claimant) and `NoFunds` for a zero amount.
    pub fn fund_treasury(&mut self, caller: &str, amount: u128) -> Result<(), LedgerError> {
        self.access.require_admin(caller)?;

        let old = self.balance_of(&self.treasury);
        let new = old.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        // Equals the pre-fund circulating supply: the whole mint lands on
        // the treasury. checked_sub guards against a corrupted snapshot
        // where the treasury balance exceeds total supply.
        let circulating = new_supply.checked_sub(new).ok_or(LedgerError::Overflow)?;
        let per_share = self.dividends.per_share_after(amount, circulating)?;
        let correction = self.dividends.correction_for_change(&self.treasury, old, new)?;

        self.dividends.set_correction(&self.treasury, correction);
        self.dividends.magnified_per_share = per_share;
        self.balances.insert(self.treasury.clone(), new);
        self.total_supply = new_supply;
        Ok(())
    }

    /// Pay the caller everything accrued since their last withdrawal.
    ///
    /// The withdrawal is recorded strictly before the payout transfer, so a
    /// re-entrant call triggered by the payout observes owed() == 0. The
    /// payout moves treasury → caller; total supply is unchanged.
    pub fn withdraw(&mut self, caller: &str) -> Result<u128, LedgerError> {
        if caller == self.treasury {
            return Err(LedgerError::NoFunds);
        }
        let balance = self.balance_of(caller);
        let amount = self.dividends.owed(caller, balance)?;
        if amount == 0 {
            return Err(LedgerError::NoFunds);
        }
        let treasury_old = self.balance_of(&self.treasury);
        if treasury_old < amount {
            // Internal-consistency fault: claims must never exceed the pool.
            return Err(LedgerError::InsufficientBalance {
                have: treasury_old,
                need: amount,
            });
        }
        let treasury_new = treasury_old - amount;
        let caller_new = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let caller_correction = self
            .dividends
            .correction_for_change(caller, balance, caller_new)?;
        let treasury_correction =
            self.dividends
                .correction_for_change(&self.treasury, treasury_old, treasury_new)?;

        self.dividends.record_withdrawal(caller, amount);
        self.dividends.set_correction(caller, caller_correction);
        self.dividends
            .set_correction(&self.treasury, treasury_correction);
        self.balances.insert(caller.to_string(), caller_new);
        self.balances.insert(self.treasury.clone(), treasury_new);
        Ok(amount)
    }

    // ── Audit & persistence ──────────────────────────────────────

    /// Verify the conservation invariant: sum of all balances equals the
    /// recorded total supply. Returns a human-readable report on mismatch.
    pub fn audit_supply(&self) -> Result<(), String> {
        let mut sum: u128 = 0;
        for (account, balance) in &self.balances {
            sum = sum.checked_add(*balance).ok_or_else(|| {
                format!("Audit overflow while summing balances at {}", account)
            })?;
        }
        if sum != self.total_supply {
            return Err(format!(
                "Supply audit failed: sum(balances) = {} but total_supply = {}",
                sum, self.total_supply
            ));
        }
        Ok(())
    }

    /// Deterministic state root over balances and dividend accounting.
    /// SHA3-256; BTreeMap iteration order makes identical states hash
    /// identically across replicas.
    pub fn compute_state_root(&self) -> String {
        use sha3::{Digest, Sha3_256};
        let mut hasher = Sha3_256::new();
        hasher.update(self.total_supply.to_le_bytes());
        hasher.update(self.dividends.magnified_per_share.to_le_bytes());
        for (account, balance) in &self.balances {
            hasher.update(account.as_bytes());
            hasher.update(balance.to_le_bytes());
        }
        for (account, correction) in &self.dividends.corrections {
            hasher.update(account.as_bytes());
            hasher.update(correction.to_le_bytes());
        }
        for (account, withdrawn) in &self.dividends.withdrawn {
            hasher.update(account.as_bytes());
            hasher.update(withdrawn.to_le_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// Snapshot the full ledger state as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Restore a ledger from a [`to_json`](Self::to_json) snapshot.
    pub fn from_json(snapshot: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(snapshot)
    }
}

// ─────────────────────────────────────────────────────────────────
// TESTS
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: &str = "admin";
    const TREASURY: &str = "treasury";
    const ALICE: &str = "alice";
    const BOB: &str = "bob";
    const CAROL: &str = "carol";

    fn seeded_ledger() -> Ledger {
        // Three holders with one coin each, as in the observable contract
        // behavior the ledger was built against.
        let mut ledger = Ledger::new(ADMIN, TREASURY);
        for holder in [ALICE, BOB, CAROL] {
            ledger.mint(ADMIN, holder, UNITS_PER_COIN).unwrap();
        }
        ledger
    }

    // ── Issuance gating ──

    #[test]
    fn test_mint_requires_admin() {
        let mut ledger = Ledger::new(ADMIN, TREASURY);
        assert_eq!(
            ledger.mint(ALICE, ALICE, 100),
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn test_mint_credits_balance_and_supply() {
        let ledger = seeded_ledger();
        assert_eq!(ledger.balance_of(ALICE), UNITS_PER_COIN);
        assert_eq!(ledger.balance_of(BOB), UNITS_PER_COIN);
        assert_eq!(ledger.balance_of(CAROL), UNITS_PER_COIN);
        assert_eq!(ledger.total_supply(), 3 * UNITS_PER_COIN);
        ledger.audit_supply().unwrap();
    }

    #[test]
    fn test_mint_overflow_rejected_without_state_change() {
        // Balances are capped at i128::MAX so the signed correction
        // arithmetic always has headroom; past that, mint fails cleanly.
        let cap = i128::MAX as u128;
        let mut ledger = Ledger::new(ADMIN, TREASURY);
        ledger.mint(ADMIN, ALICE, cap).unwrap();
        ledger.mint(ADMIN, BOB, cap).unwrap();
        assert_eq!(ledger.mint(ADMIN, CAROL, cap), Err(LedgerError::Overflow));
        assert_eq!(ledger.balance_of(CAROL), 0);
        assert_eq!(ledger.total_supply(), 2 * cap);
        ledger.audit_supply().unwrap();
    }

    // ── Transfers ──

    #[test]
    fn test_transfer_moves_balances() {
        let mut ledger = seeded_ledger();
        ledger.transfer(ALICE, BOB, 400).unwrap();
        assert_eq!(ledger.balance_of(ALICE), UNITS_PER_COIN - 400);
        assert_eq!(ledger.balance_of(BOB), UNITS_PER_COIN + 400);
        assert_eq!(ledger.total_supply(), 3 * UNITS_PER_COIN);
        ledger.audit_supply().unwrap();
    }

    #[test]
    fn test_transfer_insufficient_rejected() {
        let mut ledger = seeded_ledger();
        let result = ledger.transfer(ALICE, BOB, UNITS_PER_COIN + 1);
        assert_eq!(
            result,
            Err(LedgerError::InsufficientBalance {
                have: UNITS_PER_COIN,
                need: UNITS_PER_COIN + 1,
            })
        );
        assert_eq!(ledger.balance_of(ALICE), UNITS_PER_COIN);
        assert_eq!(ledger.balance_of(BOB), UNITS_PER_COIN);
    }

    #[test]
    fn test_self_transfer_is_noop() {
        let mut ledger = seeded_ledger();
        ledger.transfer(ALICE, ALICE, 500).unwrap();
        assert_eq!(ledger.balance_of(ALICE), UNITS_PER_COIN);
        ledger.audit_supply().unwrap();
    }

    #[test]
    fn test_treasury_cannot_transfer_or_burn() {
        let mut ledger = seeded_ledger();
        ledger.fund_treasury(ADMIN, 1_000).unwrap();
        assert_eq!(
            ledger.transfer(TREASURY, ALICE, 1),
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(ledger.burn(TREASURY, 1), Err(LedgerError::Unauthorized));
    }

    // ── Burns ──

    #[test]
    fn test_burn_reduces_supply() {
        let mut ledger = seeded_ledger();
        ledger.burn(ALICE, 250).unwrap();
        assert_eq!(ledger.balance_of(ALICE), UNITS_PER_COIN - 250);
        assert_eq!(ledger.total_supply(), 3 * UNITS_PER_COIN - 250);
        ledger.audit_supply().unwrap();
    }

    // ── Funding & withdrawal (observable contract scenarios) ──

    #[test]
    fn test_withdraw_before_funding_rejected() {
        let mut ledger = seeded_ledger();
        assert_eq!(ledger.withdraw(ALICE), Err(LedgerError::NoFunds));
    }

    #[test]
    fn test_fund_then_withdraw_one_third() {
        let mut ledger = seeded_ledger();
        ledger.fund_treasury(ADMIN, UNITS_PER_COIN).unwrap();

        assert_eq!(ledger.total_supply(), 4 * UNITS_PER_COIN);
        assert_eq!(ledger.balance_of(TREASURY), UNITS_PER_COIN);
        assert_eq!(ledger.circulating_supply(), 3 * UNITS_PER_COIN);

        // One coin over three circulating coins: each holder gets exactly
        // floor(1e9 / 3) = 333_333_333 atomic units.
        let paid = ledger.withdraw(ALICE).unwrap();
        assert_eq!(paid, 333_333_333);
        assert_eq!(ledger.balance_of(ALICE), UNITS_PER_COIN + 333_333_333);
        ledger.audit_supply().unwrap();
    }

    #[test]
    fn test_withdraw_pays_exactly_once() {
        let mut ledger = seeded_ledger();
        ledger.fund_treasury(ADMIN, UNITS_PER_COIN).unwrap();
        assert_eq!(ledger.withdraw(ALICE).unwrap(), 333_333_333);
        assert_eq!(ledger.withdraw(ALICE), Err(LedgerError::NoFunds));
        assert_eq!(ledger.withdraw(ALICE), Err(LedgerError::NoFunds));
    }

    #[test]
    fn test_withdraw_conserves_supply() {
        let mut ledger = seeded_ledger();
        ledger.fund_treasury(ADMIN, UNITS_PER_COIN).unwrap();
        let supply_before = ledger.total_supply();
        let treasury_before = ledger.balance_of(TREASURY);
        let alice_before = ledger.balance_of(ALICE);

        let paid = ledger.withdraw(ALICE).unwrap();
        assert_eq!(ledger.total_supply(), supply_before);
        assert_eq!(ledger.balance_of(TREASURY), treasury_before - paid);
        assert_eq!(ledger.balance_of(ALICE), alice_before + paid);
        ledger.audit_supply().unwrap();
    }

    #[test]
    fn test_all_holders_withdraw_leaves_only_dust() {
        let mut ledger = seeded_ledger();
        ledger.fund_treasury(ADMIN, UNITS_PER_COIN).unwrap();
        let mut total_paid = 0u128;
        for holder in [ALICE, BOB, CAROL] {
            total_paid += ledger.withdraw(holder).unwrap();
        }
        assert_eq!(total_paid, 999_999_999);
        assert_eq!(ledger.balance_of(TREASURY), 1); // truncation dust
        ledger.audit_supply().unwrap();
    }

    #[test]
    fn test_fund_with_zero_supply_rejected() {
        let mut ledger = Ledger::new(ADMIN, TREASURY);
        assert_eq!(
            ledger.fund_treasury(ADMIN, UNITS_PER_COIN),
            Err(LedgerError::NoSupply)
        );
        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(ledger.balance_of(TREASURY), 0);
        assert!(ledger.balances.is_empty());
    }

    #[test]
    fn test_fund_zero_amount_rejected() {
        let mut ledger = seeded_ledger();
        assert_eq!(ledger.fund_treasury(ADMIN, 0), Err(LedgerError::NoFunds));
    }

    #[test]
    fn test_fund_requires_admin() {
        let mut ledger = seeded_ledger();
        assert_eq!(
            ledger.fund_treasury(ALICE, UNITS_PER_COIN),
            Err(LedgerError::Unauthorized)
        );
    }

    #[test]
    fn test_mint_to_treasury_is_a_funding_event() {
        let mut ledger = seeded_ledger();
        ledger.mint(ADMIN, TREASURY, UNITS_PER_COIN).unwrap();
        assert_eq!(ledger.owed_to(ALICE).unwrap(), 333_333_333);
    }

    #[test]
    fn test_balance_change_after_distribution_does_not_move_owed() {
        let mut ledger = seeded_ledger();
        ledger.fund_treasury(ADMIN, UNITS_PER_COIN).unwrap();
        let owed_before = ledger.owed_to(ALICE).unwrap();

        // Alice dumps her whole position on Bob AFTER the distribution:
        // her claim was earned at distribution time and stays hers.
        ledger.transfer(ALICE, BOB, UNITS_PER_COIN).unwrap();
        assert_eq!(ledger.owed_to(ALICE).unwrap(), owed_before);

        // Bob's claim is likewise unchanged by the incoming balance.
        assert_eq!(ledger.owed_to(BOB).unwrap(), 333_333_333);
    }

    #[test]
    fn test_second_distribution_accrues_on_current_balances() {
        let mut ledger = seeded_ledger();
        ledger.fund_treasury(ADMIN, UNITS_PER_COIN).unwrap();
        // Bob takes Alice's coin: balances are now 0 / 2e9 / 1e9.
        ledger.transfer(ALICE, BOB, UNITS_PER_COIN).unwrap();
        ledger.fund_treasury(ADMIN, 3 * UNITS_PER_COIN).unwrap();

        // Round 1 owes each holder 1/3 coin; round 2 spreads three coins
        // over the same 3e9 circulating units, so Bob adds 2 coins.
        assert_eq!(ledger.owed_to(ALICE).unwrap(), 333_333_333);
        assert_eq!(
            ledger.owed_to(BOB).unwrap(),
            333_333_333 + 2 * UNITS_PER_COIN
        );
        assert_eq!(ledger.owed_to(CAROL).unwrap(), 333_333_333 + UNITS_PER_COIN);
    }

    #[test]
    fn test_owed_to_treasury_is_zero() {
        let mut ledger = seeded_ledger();
        ledger.fund_treasury(ADMIN, UNITS_PER_COIN).unwrap();
        assert_eq!(ledger.owed_to(TREASURY).unwrap(), 0);
        assert_eq!(ledger.withdraw(TREASURY), Err(LedgerError::NoFunds));
    }

    #[test]
    fn test_withdrawn_coins_accrue_in_later_rounds() {
        let mut ledger = seeded_ledger();
        ledger.fund_treasury(ADMIN, UNITS_PER_COIN).unwrap();
        let paid = ledger.withdraw(ALICE).unwrap();

        // Alice's payout is ordinary balance now and earns in round two;
        // her unpaid round-1 dust sits in the treasury, outside circulation.
        ledger.fund_treasury(ADMIN, UNITS_PER_COIN).unwrap();
        assert_eq!(ledger.circulating_supply(), 3 * UNITS_PER_COIN + paid);

        // Her round-2 share is balance / circulating = 1333333333 / 3333333333
        // of one coin, strictly more than the equal-thirds round-1 share and
        // no more than the untruncated 2/5 ceiling.
        let owed = ledger.owed_to(ALICE).unwrap();
        assert!(owed > 333_333_333);
        assert!(owed <= 400_000_000);
        ledger.audit_supply().unwrap();
    }

    // ── Audit, root, persistence ──

    #[test]
    fn test_state_root_deterministic_and_sensitive() {
        let mut a = seeded_ledger();
        let b = seeded_ledger();
        assert_eq!(a.compute_state_root(), b.compute_state_root());
        a.transfer(ALICE, BOB, 1).unwrap();
        assert_ne!(a.compute_state_root(), b.compute_state_root());
        assert_eq!(a.compute_state_root().len(), 64);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut ledger = seeded_ledger();
        ledger.fund_treasury(ADMIN, UNITS_PER_COIN).unwrap();
        ledger.withdraw(ALICE).unwrap();

        let snapshot = ledger.to_json().unwrap();
        let mut restored = Ledger::from_json(&snapshot).unwrap();
        assert_eq!(restored, ledger);
        assert_eq!(
            restored.compute_state_root(),
            ledger.compute_state_root()
        );

        // The restored ledger keeps enforcing exactly-once payment.
        assert_eq!(restored.withdraw(ALICE), Err(LedgerError::NoFunds));
        assert_eq!(restored.withdraw(BOB).unwrap(), 333_333_333);
    }
}
