//! Fuzz target: ledger operation sequences
//!
//! Feeds arbitrary mint/transfer/burn/fund/withdraw sequences — with
//! arbitrary callers, including non-admin and treasury identities — to a
//! fresh ledger. Verifies the ledger never panics, and that the supply
//! conservation audit holds after every accepted operation.
//!
//! Run: cargo +nightly fuzz run fuzz_ledger_ops

#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use prorata_core::Ledger;

const IDENTITIES: [&str; 6] = ["admin", "treasury", "alice", "bob", "carol", "dave"];

#[derive(Arbitrary, Debug)]
enum FuzzOp {
    Mint { caller: u8, to: u8, amount: u64 },
    Transfer { caller: u8, to: u8, amount: u64 },
    Burn { caller: u8, amount: u64 },
    Fund { caller: u8, amount: u64 },
    Withdraw { caller: u8 },
    Owed { account: u8 },
}

fn identity(index: u8) -> &'static str {
    IDENTITIES[index as usize % IDENTITIES.len()]
}

fuzz_target!(|ops: Vec<FuzzOp>| {
    let mut ledger = Ledger::new("admin", "treasury");

    // Cap the sequence length to keep individual runs fast.
    for op in ops.iter().take(64) {
        // Every call must return Ok or Err — never panic.
        let _ = match op {
            FuzzOp::Mint { caller, to, amount } => {
                ledger.mint(identity(*caller), identity(*to), *amount as u128)
            }
            FuzzOp::Transfer { caller, to, amount } => {
                ledger.transfer(identity(*caller), identity(*to), *amount as u128)
            }
            FuzzOp::Burn { caller, amount } => {
                ledger.burn(identity(*caller), *amount as u128)
            }
            FuzzOp::Fund { caller, amount } => {
                ledger.fund_treasury(identity(*caller), *amount as u128)
            }
            FuzzOp::Withdraw { caller } => ledger.withdraw(identity(*caller)).map(|_| ()),
            FuzzOp::Owed { account } => ledger.owed_to(identity(*account)).map(|_| ()),
        };

        // Accepted or rejected, conservation must hold.
        assert!(ledger.audit_supply().is_ok());
    }
});
