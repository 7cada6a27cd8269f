//! Fund transfers between accounts
//!
//! A transfer is a withdrawal from the source followed by a deposit of the
//! same amount into the target. The withdrawal performs all of its checks
//! before mutating anything, and the target credit is checked up front, so
//! either both legs are applied or neither is.

use crate::types::{Account, LedgerError};
use rust_decimal::Decimal;

/// Move `amount` from `source` to `target`
///
/// The source's own withdrawal rule decides whether the transfer goes
/// through, so a current account may transfer into its overdraft.
///
/// # Errors
///
/// Returns the withdrawal error of the source account, or
/// `ArithmeticOverflow` if the target could not absorb the credit. In both
/// cases neither account is modified.
pub fn transfer_funds(
    source: &mut Account,
    target: &mut Account,
    amount: Decimal,
) -> Result<(), LedgerError> {
    // The credit must not be able to fail once the debit has been applied.
    target
        .balance()
        .checked_add(amount)
        .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", target.number()))?;

    source.withdraw(amount)?;
    target.deposit(amount)?;

    tracing::debug!(
        source = source.number(),
        target = target.number(),
        %amount,
        "funds transferred"
    );
    Ok(())
}

/// Transfer where source and target are the same account
///
/// The money leaves and comes back: the balance ends where it started but
/// the history gains a withdrawal and a deposit.
pub fn transfer_within(account: &mut Account, amount: Decimal) -> Result<(), LedgerError> {
    account.withdraw(amount)?;
    account.deposit(amount)
}

/// Two distinct mutable elements of a slice
///
/// # Panics
///
/// Panics if `first == second` or either index is out of bounds.
pub(crate) fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    assert_ne!(first, second, "pair_mut requires distinct indices");

    if first < second {
        let (head, tail) = items.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn funded(mut account: Account, amount: i64) -> Account {
        account.deposit(dec(amount)).unwrap();
        account
    }

    #[test]
    fn test_transfer_moves_funds() {
        let mut source = funded(Account::new(1), 200);
        let mut target = funded(Account::new(2), 50);

        transfer_funds(&mut source, &mut target, dec(100)).unwrap();

        assert_eq!(source.balance(), dec(100));
        assert_eq!(target.balance(), dec(150));

        // One withdrawal on the source, one deposit on the target
        assert_eq!(source.transactions().len(), 2);
        assert_eq!(source.transactions()[1].description(), "Withdrawal");
        assert_eq!(source.transactions()[1].amount(), dec(-100));
        assert_eq!(target.transactions().len(), 2);
        assert_eq!(target.transactions()[1].description(), "Deposit");
        assert_eq!(target.transactions()[1].amount(), dec(100));
    }

    #[rstest]
    #[case::insufficient_funds(10, 100)]
    #[case::zero_amount(10, 0)]
    #[case::negative_amount(10, -5)]
    fn test_failed_transfer_changes_nothing(#[case] balance: i64, #[case] amount: i64) {
        let mut source = funded(Account::new(1), balance);
        let mut target = funded(Account::new(2), 50);

        let result = transfer_funds(&mut source, &mut target, dec(amount));

        assert_eq!(
            result,
            Err(LedgerError::insufficient_funds(1, dec(balance), dec(amount)))
        );
        assert_eq!(source.balance(), dec(balance));
        assert_eq!(target.balance(), dec(50));
        assert_eq!(source.transactions().len(), 1);
        assert_eq!(target.transactions().len(), 1);
    }

    #[test]
    fn test_transfer_from_current_account_into_overdraft() {
        let mut source = Account::current(1, dec(100));
        let mut target = Account::new(2);

        transfer_funds(&mut source, &mut target, dec(80)).unwrap();

        assert_eq!(source.balance(), dec(-80));
        assert_eq!(target.balance(), dec(80));
        assert_eq!(
            source.transactions()[0].description(),
            "Withdrawal (Overdraft)"
        );
    }

    #[test]
    fn test_transfer_rejected_when_target_would_overflow() {
        let mut source = funded(Account::new(1), 10);
        let mut target = funded(Account::new(2), 0);
        target.deposit(Decimal::MAX).unwrap();

        let result = transfer_funds(&mut source, &mut target, dec(5));

        assert_eq!(result, Err(LedgerError::arithmetic_overflow("transfer", 2)));
        assert_eq!(source.balance(), dec(10));
        assert_eq!(source.transactions().len(), 1);
        assert_eq!(target.balance(), Decimal::MAX);
    }

    #[test]
    fn test_transfer_within_same_account() {
        let mut account = funded(Account::new(1), 100);

        transfer_within(&mut account, dec(40)).unwrap();

        assert_eq!(account.balance(), dec(100));
        assert_eq!(account.transactions().len(), 3);
    }

    #[test]
    fn test_transfer_within_respects_withdrawal_rule() {
        let mut account = funded(Account::new(1), 10);

        assert!(transfer_within(&mut account, dec(40)).is_err());
        assert_eq!(account.transactions().len(), 1);
    }

    #[rstest]
    #[case::ascending(0, 2)]
    #[case::descending(2, 0)]
    #[case::adjacent(1, 2)]
    fn test_pair_mut_returns_requested_elements(#[case] first: usize, #[case] second: usize) {
        let mut items = vec![10, 11, 12];

        let (a, b) = pair_mut(&mut items, first, second);
        assert_eq!(*a, 10 + first);
        assert_eq!(*b, 10 + second);

        *a = 0;
        *b = 1;
        assert_eq!(items[first], 0);
        assert_eq!(items[second], 1);
    }

    #[test]
    #[should_panic(expected = "distinct indices")]
    fn test_pair_mut_rejects_same_index() {
        let mut items = vec![1, 2];
        let _ = pair_mut(&mut items, 1, 1);
    }
}
