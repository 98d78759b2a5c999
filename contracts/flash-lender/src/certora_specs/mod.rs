// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification specifications for the flash lender pool.
//
// STRUCTURE:
//
// - model.rs            : State snapshots and nondeterministic setup
// - guard_specs.rs      : Reentrancy lock verification
// - accounting_specs.rs : Deposit/withdraw/sync/flash loan verification
// - fee_specs.rs        : Gas-indexed fee curve verification
//
// PATTERNS USED:
//
// 1. State snapshots - Before/after comparisons
// 2. Sanity rules - Ensure rules aren't vacuously true
// 3. Shared predicates - Rules assert the same invariants the engine checks
//
// USAGE:
// - Unit tests: cargo test -p flash-lender
// - Certora build: cargo build --features certora -p flash-lender
// - Verification: certoraSorobanProver flash_lender.conf
//
// ============================================================================

#[cfg(feature = "certora")]
pub mod model;

pub mod accounting_specs;
pub mod fee_specs;
pub mod guard_specs;
