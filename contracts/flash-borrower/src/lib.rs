#![no_std]

use flash_types::{FlashLoanReceiver, CALLBACK_SUCCESS};
use soroban_sdk::{
    contract, contractimpl, contracttype, token, Address, Bytes, Env, IntoVal, Symbol, Val,
};

#[contract]
pub struct FlashBorrower;

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Lender,
    Mode,
    LastLoan,
}

/// Lender entry point the borrower calls back into from its callback
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reentry {
    Deposit,
    Withdraw,
    Sync,
    FlashLoan,
}

/// What the borrower does when it receives a loan
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BorrowerMode {
    /// Send back `amount + delta`; a negative delta under-repays
    Repay(i128),
    /// Abort inside the callback
    Abort,
    /// Call back into the lender, then repay in full
    Reenter(Reentry),
}

/// Arguments of the most recent callback
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanRecord {
    pub initiator: Address,
    pub asset: Address,
    pub amount: i128,
    pub fee: i128,
    pub data: Bytes,
}

#[contractimpl]
impl FlashBorrower {
    /// Initialize borrower
    ///
    /// # Arguments
    /// * `admin` - Only identity allowed to change the mode
    /// * `lender` - The only contract whose callbacks are honored
    /// * `mode` - Initial callback behavior
    pub fn initialize(env: Env, admin: Address, lender: Address, mode: BorrowerMode) {
        if env.storage().instance().has(&DataKey::Lender) {
            panic!("Already initialized");
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Lender, &lender);
        env.storage().instance().set(&DataKey::Mode, &mode);
    }

    pub fn set_mode(env: Env, mode: BorrowerMode) {
        get_admin(&env).require_auth();
        env.storage().instance().set(&DataKey::Mode, &mode);
    }

    pub fn mode(env: Env) -> BorrowerMode {
        get_mode(&env)
    }

    /// Arguments of the last completed callback, if any
    pub fn last_loan(env: Env) -> Option<LoanRecord> {
        env.storage().instance().get(&DataKey::LastLoan)
    }
}

#[contractimpl]
impl FlashLoanReceiver for FlashBorrower {
    fn on_flash_loan(
        env: Env,
        initiator: Address,
        asset: Address,
        amount: i128,
        fee: i128,
        data: Bytes,
    ) -> Symbol {
        // Only the lender may trigger a repayment out of this contract's funds
        let lender = get_lender(&env);
        lender.require_auth();
        let mut repay = amount;

        match get_mode(&env) {
            BorrowerMode::Repay(delta) => {
                repay = amount + delta;
            }
            BorrowerMode::Abort => {
                panic!("Borrower aborted");
            }
            BorrowerMode::Reenter(reentry) => {
                reenter(&env, &lender, &asset, reentry);
            }
        }

        if repay > 0 {
            token::Client::new(&env, &asset).transfer(
                &env.current_contract_address(),
                &lender,
                &repay,
            );
        }

        env.storage().instance().set(
            &DataKey::LastLoan,
            &LoanRecord {
                initiator,
                asset,
                amount,
                fee,
                data,
            },
        );

        CALLBACK_SUCCESS
    }
}

fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("Not initialized")
}

fn get_lender(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Lender)
        .expect("Not initialized")
}

fn get_mode(env: &Env) -> BorrowerMode {
    env.storage()
        .instance()
        .get(&DataKey::Mode)
        .expect("Not initialized")
}

// Lender calls via invoke, so the borrower needs no compile-time link to it
fn reenter(env: &Env, lender: &Address, asset: &Address, reentry: Reentry) {
    let this = env.current_contract_address();
    match reentry {
        Reentry::Deposit => {
            env.invoke_contract::<Val>(
                lender,
                &Symbol::new(env, "deposit"),
                (this, 1i128).into_val(env),
            );
        }
        Reentry::Withdraw => {
            env.invoke_contract::<Val>(
                lender,
                &Symbol::new(env, "withdraw"),
                (this, 1i128).into_val(env),
            );
        }
        Reentry::Sync => {
            env.invoke_contract::<Val>(lender, &Symbol::new(env, "sync"), (this,).into_val(env));
        }
        Reentry::FlashLoan => {
            env.invoke_contract::<Val>(
                lender,
                &Symbol::new(env, "flash_loan"),
                (
                    this.clone(),
                    this,
                    asset.clone(),
                    1i128,
                    Bytes::new(env),
                    0i128,
                )
                    .into_val(env),
            );
        }
    }
}
