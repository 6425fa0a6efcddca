//! End-to-end registration scenarios against the in-memory adapters.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rstest::{fixture, rstest};

use bank_accounts::domain::ports::{
    AccountQuery, AccountRegistrationCommand, AccountRegistrationError, AccountStore,
    AccountStoreError, OwnerRegistryError,
};
use bank_accounts::domain::{
    Account, AccountNumber, AccountRegistrationService, AccountType, Currency, OwnerId,
};
use bank_accounts::outbound::memory::{InMemoryAccountStore, InMemoryOwnerRegistry};

const OWNER: OwnerId = OwnerId::new(26_456_437);

/// Store wrapper counting saves so tests can assert none happened.
#[derive(Default)]
struct CountingStore {
    inner: InMemoryAccountStore,
    saves: AtomicUsize,
}

impl CountingStore {
    fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountStore for CountingStore {
    async fn find(&self, number: AccountNumber) -> Result<Option<Account>, AccountStoreError> {
        self.inner.find(number).await
    }

    async fn save(&self, account: &Account) -> Result<(), AccountStoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(account).await
    }
}

struct Harness {
    store: Arc<CountingStore>,
    owners: Arc<InMemoryOwnerRegistry>,
    service: AccountRegistrationService<CountingStore, InMemoryOwnerRegistry>,
}

#[fixture]
fn harness() -> Harness {
    let store = Arc::new(CountingStore::default());
    let owners = Arc::new(InMemoryOwnerRegistry::new());
    let service = AccountRegistrationService::new(store.clone(), owners.clone());
    Harness {
        store,
        owners,
        service,
    }
}

fn account(number: u64, account_type: AccountType, currency: Currency) -> Account {
    Account::new(AccountNumber::new(number), account_type, currency, 10_000)
}

#[rstest]
#[tokio::test]
async fn fresh_checking_account_is_registered_and_attached(harness: Harness) {
    let new_account = account(123_456_789, AccountType::Checking, Currency::Local);

    harness
        .service
        .register_account(new_account.clone(), OWNER)
        .await
        .expect("registration succeeds");

    let found = harness
        .service
        .find_account(AccountNumber::new(123_456_789))
        .await
        .expect("lookup succeeds");
    assert_eq!(found, Some(new_account.clone()));
    let owner = harness
        .owners
        .owner(OWNER)
        .expect("registry lookup")
        .expect("owner profile");
    assert_eq!(owner.accounts(), &[new_account]);
}

#[rstest]
#[tokio::test]
async fn registering_the_same_number_twice_keeps_the_first_account(harness: Harness) {
    let first = account(123_456_789, AccountType::Checking, Currency::Local);
    let second = account(123_456_789, AccountType::Savings, Currency::Foreign);

    harness
        .service
        .register_account(first.clone(), OWNER)
        .await
        .expect("first registration");
    let error = harness
        .service
        .register_account(second, OwnerId::new(1))
        .await
        .expect_err("duplicate number");

    assert!(matches!(
        error,
        AccountRegistrationError::AccountAlreadyExists { .. }
    ));
    assert!(error.to_string().contains("123456789"));
    let found = harness
        .service
        .find_account(AccountNumber::new(123_456_789))
        .await
        .expect("lookup succeeds");
    assert_eq!(found, Some(first));
    assert_eq!(harness.store.saves(), 1);
    assert!(harness
        .owners
        .owner(OwnerId::new(1))
        .expect("registry lookup")
        .is_none());
}

#[rstest]
#[tokio::test]
async fn foreign_checking_account_leaves_store_untouched(harness: Harness) {
    let error = harness
        .service
        .register_account(
            account(123_456_789, AccountType::Checking, Currency::Foreign),
            OWNER,
        )
        .await
        .expect_err("unsupported product");

    assert!(matches!(
        error,
        AccountRegistrationError::UnsupportedAccountConfiguration { .. }
    ));
    let found = harness
        .service
        .find_account(AccountNumber::new(123_456_789))
        .await
        .expect("lookup succeeds");
    assert!(found.is_none());
    assert_eq!(harness.store.saves(), 0);
    assert!(harness
        .owners
        .owner(OWNER)
        .expect("registry lookup")
        .is_none());
}

#[rstest]
#[tokio::test]
async fn owner_with_checking_account_cannot_open_another(harness: Harness) {
    harness
        .service
        .register_account(
            account(123_456_789, AccountType::Checking, Currency::Local),
            OWNER,
        )
        .await
        .expect("first checking account");

    let error = harness
        .service
        .register_account(
            account(987_654_321, AccountType::Checking, Currency::Local),
            OWNER,
        )
        .await
        .expect_err("owner already has checking");

    assert_eq!(
        error,
        AccountRegistrationError::Owner(OwnerRegistryError::owner_already_has_account_type(
            OWNER,
            AccountType::Checking,
        ))
    );
    assert_eq!(harness.store.saves(), 1);
    let found = harness
        .service
        .find_account(AccountNumber::new(987_654_321))
        .await
        .expect("lookup succeeds");
    assert!(found.is_none());
}

#[rstest]
#[case(AccountType::Checking, Currency::Local)]
#[case(AccountType::Savings, Currency::Local)]
#[case(AccountType::Savings, Currency::Foreign)]
#[tokio::test]
async fn supported_products_are_found_after_registration(
    harness: Harness,
    #[case] account_type: AccountType,
    #[case] currency: Currency,
) {
    let new_account = account(42, account_type, currency);

    harness
        .service
        .register_account(new_account.clone(), OWNER)
        .await
        .expect("registration succeeds");

    let found = harness
        .service
        .find_account(AccountNumber::new(42))
        .await
        .expect("lookup succeeds");
    assert_eq!(found, Some(new_account));
}

#[rstest]
#[tokio::test]
async fn owner_may_hold_one_account_of_each_type(harness: Harness) {
    for (number, account_type) in [(1, AccountType::Checking), (2, AccountType::Savings)] {
        harness
            .service
            .register_account(account(number, account_type, Currency::Local), OWNER)
            .await
            .expect("distinct types are accepted");
    }

    let owner = harness
        .owners
        .owner(OWNER)
        .expect("registry lookup")
        .expect("owner profile");
    assert_eq!(owner.accounts().len(), 2);
    assert_eq!(harness.store.saves(), 2);
}
