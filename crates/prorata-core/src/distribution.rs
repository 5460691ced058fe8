// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PRORATA - DIVIDEND DISTRIBUTION STATE
//
// Magnified-dividend-per-share accumulator with per-account correction terms.
// Lets the ledger answer "how much can this holder withdraw?" in O(1) without
// iterating holders or snapshotting balances at distribution time.
// All financial arithmetic uses u128/i128 atomic units (no floating-point).
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::LedgerError;

/// Fixed-point scale for the per-share accumulator (2^64).
///
/// A distribution of `amount` over `circulating` units adds
/// `amount * MAGNITUDE / circulating` to the accumulator, so per-unit
/// entitlements keep 64 fractional bits instead of truncating to zero
/// whenever `amount < circulating`.
pub const MAGNITUDE: u128 = 1 << 64;

/// Dividend accounting state, maintained alongside the balance table.
///
/// The core identity, for every account `a` with current balance `b`:
///
/// ```text
/// owed(a) = (magnified_per_share * b + corrections[a]) / MAGNITUDE - withdrawn[a]
/// ```
///
/// `magnified_per_share` only moves when the pool is funded. `corrections[a]`
/// moves whenever `a`'s balance changes, by exactly the amount that keeps
/// `owed(a)` unchanged across the mutation — dividends accrue from the
/// balance held at distribution time, never retroactively.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DividendState {
    /// Cumulative dividend per unit of circulating balance, scaled by MAGNITUDE.
    pub magnified_per_share: u128,
    /// Signed per-account offsets preserving owed() across balance changes.
    /// BTreeMap keeps iteration and serialization deterministic.
    pub corrections: BTreeMap<String, i128>,
    /// Lifetime amount each account has withdrawn. Monotonically non-decreasing.
    pub withdrawn: BTreeMap<String, u128>,
}

impl DividendState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator value after distributing `amount` across `circulating`
    /// units. Pure — callers commit the returned value only once every other
    /// fallible step of their operation has passed.
    pub fn per_share_after(
        &self,
        amount: u128,
        circulating: u128,
    ) -> Result<u128, LedgerError> {
        if circulating == 0 {
            return Err(LedgerError::NoSupply);
        }
        if amount == 0 {
            return Err(LedgerError::NoFunds);
        }
        let magnified = amount
            .checked_mul(MAGNITUDE)
            .ok_or(LedgerError::Overflow)?
            / circulating;
        self.magnified_per_share
            .checked_add(magnified)
            .ok_or(LedgerError::Overflow)
    }

    /// Fund the pool: spread `amount` across `circulating` units.
    ///
    /// The integer division drops a remainder of at most `circulating /
    /// MAGNITUDE + 1` units per call; that dust stays in the treasury and is
    /// picked up by later distributions (bounded drift, never double-paid).
    pub fn distribute(&mut self, amount: u128, circulating: u128) -> Result<(), LedgerError> {
        self.magnified_per_share = self.per_share_after(amount, circulating)?;
        Ok(())
    }

    /// Correction value for `account` after its balance moves `old` → `new`.
    ///
    /// Pure — commit with [`set_correction`](Self::set_correction). The shift
    /// `magnified_per_share * (new - old)` is subtracted so that owed() reads
    /// the same before and after the balance mutation.
    pub fn correction_for_change(
        &self,
        account: &str,
        old_balance: u128,
        new_balance: u128,
    ) -> Result<i128, LedgerError> {
        let per_share = i128::try_from(self.magnified_per_share)
            .map_err(|_| LedgerError::Overflow)?;
        let old = i128::try_from(old_balance).map_err(|_| LedgerError::Overflow)?;
        let new = i128::try_from(new_balance).map_err(|_| LedgerError::Overflow)?;
        let delta = new.checked_sub(old).ok_or(LedgerError::Overflow)?;
        let shift = per_share.checked_mul(delta).ok_or(LedgerError::Overflow)?;
        self.correction_of(account)
            .checked_sub(shift)
            .ok_or(LedgerError::Overflow)
    }

    pub fn correction_of(&self, account: &str) -> i128 {
        self.corrections.get(account).copied().unwrap_or(0)
    }

    pub fn set_correction(&mut self, account: &str, value: i128) {
        if value == 0 {
            // Keep the map sparse — absent entry and zero are equivalent.
            self.corrections.remove(account);
        } else {
            self.corrections.insert(account.to_string(), value);
        }
    }

    /// Amount `account` may withdraw right now, given its current `balance`.
    ///
    /// Pure and idempotent. A negative corrected accumulator would be an
    /// internal-consistency fault, not a caller error; it reads as 0 rather
    /// than panicking.
    pub fn owed(&self, account: &str, balance: u128) -> Result<u128, LedgerError> {
        let accumulated = self
            .magnified_per_share
            .checked_mul(balance)
            .ok_or(LedgerError::Overflow)?;
        let accumulated = i128::try_from(accumulated).map_err(|_| LedgerError::Overflow)?;
        let corrected = accumulated
            .checked_add(self.correction_of(account))
            .ok_or(LedgerError::Overflow)?;
        let accrued = u128::try_from(corrected).unwrap_or(0) / MAGNITUDE;
        Ok(accrued.saturating_sub(self.withdrawn_of(account)))
    }

    /// Record a payout BEFORE the balance transfer commits, so a re-entrant
    /// withdrawal observes owed() == 0 (never double-paid).
    pub fn record_withdrawal(&mut self, account: &str, amount: u128) {
        let entry = self.withdrawn.entry(account.to_string()).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    pub fn withdrawn_of(&self, account: &str) -> u128 {
        self.withdrawn.get(account).copied().unwrap_or(0)
    }
}

// ─────────────────────────────────────────────────────────────────
// TESTS
// ─────────────────────────────────────────────────────────────────
