//! Wallet operations over the append-only transaction ledger.
//!
//! The ledger is the single source of truth for money movement: balances
//! are derived from completed entries and the stored per-account balance is
//! refreshed from the ledger after every append.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use craftlink_shared::constants::PLATFORM_FEE_PERCENT;
use craftlink_shared::{Counterparty, KycStatus, Role, Transaction, TxStatus, TxType};

use crate::error::{ClientError, Result};
use crate::events::StoreEvent;
use crate::store::Store;

impl Store {
    /// Net position of a party over all completed ledger entries.
    ///
    /// Negative for parties that have paid out more than they received
    /// (e.g. a client funding projects from an external rail).  The sum is
    /// accumulated in 128 bits so entries near `u64::MAX` cannot wrap, then
    /// saturated into the return range.
    pub fn ledger_balance(&self, party: Counterparty) -> i64 {
        let net: i128 = self
            .state
            .ledger
            .iter()
            .filter(|tx| tx.status == TxStatus::Completed)
            .map(|tx| {
                let mut net = 0i128;
                if tx.to == party {
                    net += tx.amount as i128;
                }
                if tx.from == party {
                    net -= tx.amount as i128;
                }
                net
            })
            .sum();
        net.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }

    /// Record an external top-up of the session's wallet.
    pub fn record_deposit(&mut self, amount: u64, description: &str) -> Result<Uuid> {
        if amount == 0 {
            return Err(ClientError::NonPositiveAmount);
        }
        let session = self.state.session.as_ref().ok_or(ClientError::NoSession)?;
        let me = session.id();

        let id = Uuid::new_v4();
        self.append_transaction(Transaction {
            id,
            tx_type: TxType::Deposit,
            amount,
            from: Counterparty::External,
            to: Counterparty::User(me),
            created_at: Utc::now(),
            status: TxStatus::Completed,
            description: description.to_string(),
        })?;
        info!(tx = %id, amount, "deposit recorded");
        Ok(id)
    }

    /// Pay a developer from the session's wallet.
    ///
    /// Appends the payment plus the platform-commission entry charged to
    /// the developer.  The payer's ledger position is not checked and may
    /// go negative: clients fund projects from external rails, so only
    /// withdrawals are gated on covering funds.
    pub fn record_payment(
        &mut self,
        developer_id: Uuid,
        amount: u64,
        description: &str,
    ) -> Result<Uuid> {
        if amount == 0 {
            return Err(ClientError::NonPositiveAmount);
        }
        let session = self.state.session.as_ref().ok_or(ClientError::NoSession)?;
        let payer = session.id();

        if !self.state.directory.iter().any(|d| d.id == developer_id) {
            return Err(ClientError::UnknownUser(developer_id));
        }

        let id = Uuid::new_v4();
        self.append_transaction(Transaction {
            id,
            tx_type: TxType::Payment,
            amount,
            from: Counterparty::User(payer),
            to: Counterparty::User(developer_id),
            created_at: Utc::now(),
            status: TxStatus::Completed,
            description: description.to_string(),
        })?;

        // Widened so the percentage cannot wrap near u64::MAX; the result
        // is a fraction of `amount` and always fits back.
        let fee = (amount as u128 * PLATFORM_FEE_PERCENT as u128 / 100) as u64;
        if fee > 0 {
            self.append_transaction(Transaction {
                id: Uuid::new_v4(),
                tx_type: TxType::Fee,
                amount: fee,
                from: Counterparty::User(developer_id),
                to: Counterparty::System,
                created_at: Utc::now(),
                status: TxStatus::Completed,
                description: format!("Platform commission ({PLATFORM_FEE_PERCENT}%)"),
            })?;
        }

        info!(tx = %id, amount, fee, "payment recorded");
        Ok(id)
    }

    /// Withdraw funds to an external rail.
    ///
    /// Withdrawal capability is gated on a verified identity, and on the
    /// ledger actually covering the amount.
    pub fn request_withdrawal(&mut self, amount: u64, description: &str) -> Result<Uuid> {
        if amount == 0 {
            return Err(ClientError::NonPositiveAmount);
        }
        let session = self.state.session.as_ref().ok_or(ClientError::NoSession)?;
        let dev = session
            .as_developer()
            .ok_or(ClientError::RoleRequired(Role::Developer))?;

        if dev.kyc_status != KycStatus::Verified {
            return Err(ClientError::KycRequired);
        }
        let me = dev.id;
        if (self.ledger_balance(Counterparty::User(me)) as i128) < amount as i128 {
            return Err(ClientError::InsufficientFunds);
        }

        let id = Uuid::new_v4();
        self.append_transaction(Transaction {
            id,
            tx_type: TxType::Withdrawal,
            amount,
            from: Counterparty::User(me),
            to: Counterparty::External,
            created_at: Utc::now(),
            status: TxStatus::Completed,
            description: description.to_string(),
        })?;
        info!(tx = %id, amount, "withdrawal recorded");
        Ok(id)
    }

    /// Append a ledger entry and refresh the stored balances of every user
    /// party it touches.
    fn append_transaction(&mut self, tx: Transaction) -> Result<()> {
        let parties = [tx.from, tx.to];
        self.state.ledger.push(tx);

        let mut directory_touched = false;
        let mut session_touched = false;
        for party in parties {
            let Counterparty::User(user_id) = party else {
                continue;
            };
            let balance = self.ledger_balance(party).max(0) as u64;

            if let Some(entry) = self.state.directory.iter_mut().find(|d| d.id == user_id) {
                entry.wallet_balance = balance;
                directory_touched = true;
            }
            if let Some(ref mut session) = self.state.session {
                if session.id() == user_id {
                    session.set_wallet_balance(balance);
                    session_touched = true;
                }
            }
        }

        self.persist_ledger()?;
        if directory_touched {
            self.persist_directory()?;
            self.emit(StoreEvent::DirectoryChanged);
        }
        if session_touched {
            self.persist_session()?;
            self.emit(StoreEvent::SessionChanged);
        }
        self.emit(StoreEvent::LedgerChanged);
        Ok(())
    }
}
