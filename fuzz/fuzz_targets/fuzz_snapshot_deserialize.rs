//! Fuzz target: snapshot deserialization robustness
//!
//! Feeds arbitrary bytes to Ledger::from_json. Malformed snapshots must be
//! rejected gracefully, and any snapshot that does parse must support the
//! read-only surface without panicking — even when its recorded fields are
//! mutually inconsistent.
//!
//! Run: cargo +nightly fuzz run fuzz_snapshot_deserialize

#![no_main]
use libfuzzer_sys::fuzz_target;
use prorata_core::Ledger;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(ledger) = Ledger::from_json(text) else {
        return;
    };

    // Queries must never panic, whatever the snapshot claimed.
    let _ = ledger.circulating_supply();
    let _ = ledger.owed_to("alice");
    let _ = ledger.owed_to(ledger.treasury_account());
    let _ = ledger.audit_supply();
    let _ = ledger.compute_state_root();
});
