//! Account API handlers.
//!
//! ```text
//! POST /api/v1/owners/26456437/accounts
//!   {"accountNumber":123456789,"balance":10000,"accountType":"checking","currency":"local"}
//! GET /api/v1/accounts/123456789
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::ports::{AccountRegistrationError, AccountStoreError, OwnerRegistryError};
use crate::domain::{Account, AccountNumber, AccountType, Currency, Error, OwnerId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/v1/owners/{owner_id}/accounts`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    /// Caller-assigned unique account number.
    #[schema(example = 123_456_789)]
    pub account_number: u64,
    /// Opening balance in minor currency units.
    #[schema(example = 10_000)]
    pub balance: i64,
    /// `checking` or `savings`.
    #[schema(example = "checking")]
    pub account_type: String,
    /// `local` or `foreign`.
    #[schema(example = "local")]
    pub currency: String,
}

/// Account representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    #[schema(example = 123_456_789)]
    pub account_number: u64,
    #[schema(example = 10_000)]
    pub balance: i64,
    #[schema(example = "checking")]
    pub account_type: String,
    #[schema(example = "local")]
    pub currency: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_number: account.number.get(),
            balance: account.balance,
            account_type: account.account_type.as_str().to_owned(),
            currency: account.currency.as_str().to_owned(),
        }
    }
}

fn invalid_field(field: &str, code: &str, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field, "code": code }))
}

fn parse_account_type(raw: &str) -> Result<AccountType, Error> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "checking" => Ok(AccountType::Checking),
        "savings" => Ok(AccountType::Savings),
        _ => Err(invalid_field(
            "accountType",
            "invalid_account_type",
            format!("unknown account type: {raw}"),
        )),
    }
}

fn parse_currency(raw: &str) -> Result<Currency, Error> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "local" => Ok(Currency::Local),
        "foreign" => Ok(Currency::Foreign),
        _ => Err(invalid_field(
            "currency",
            "invalid_currency",
            format!("unknown currency: {raw}"),
        )),
    }
}

fn parse_account_request(payload: AccountRequest) -> Result<Account, Error> {
    let account_type = parse_account_type(&payload.account_type)?;
    let currency = parse_currency(&payload.currency)?;
    Ok(Account::new(
        AccountNumber::new(payload.account_number),
        account_type,
        currency,
        payload.balance,
    ))
}

fn map_store_error(error: AccountStoreError) -> Error {
    match error {
        AccountStoreError::Connection { message } => {
            Error::service_unavailable(format!("account store unavailable: {message}"))
        }
        AccountStoreError::Query { message } => {
            Error::internal(format!("account store error: {message}"))
        }
    }
}

fn map_registration_error(error: AccountRegistrationError) -> Error {
    match error {
        AccountRegistrationError::AccountAlreadyExists { account_number } => {
            Error::conflict(error.to_string()).with_details(json!({
                "code": "account_already_exists",
                "accountNumber": account_number.get(),
            }))
        }
        AccountRegistrationError::UnsupportedAccountConfiguration {
            account_type,
            currency,
            ..
        } => Error::invalid_request(error.to_string()).with_details(json!({
            "code": "unsupported_account_configuration",
            "accountType": account_type.as_str(),
            "currency": currency.as_str(),
        })),
        AccountRegistrationError::Owner(OwnerRegistryError::OwnerAlreadyHasAccountType {
            owner_id,
            account_type,
        }) => Error::invalid_request(error.to_string()).with_details(json!({
            "code": "owner_already_has_account_type",
            "ownerId": owner_id.get(),
            "accountType": account_type.as_str(),
        })),
        AccountRegistrationError::Owner(OwnerRegistryError::Connection { message }) => {
            Error::service_unavailable(format!("owner registry unavailable: {message}"))
        }
        AccountRegistrationError::Store(inner) => map_store_error(inner),
    }
}

/// Register a new account under an owner.
#[utoipa::path(
    post,
    path = "/api/v1/owners/{owner_id}/accounts",
    request_body = AccountRequest,
    params(("owner_id" = u64, Path, description = "National identifier of the owner")),
    responses(
        (status = 201, description = "Account registered", body = AccountResponse),
        (status = 400, description = "Unsupported product or owner already holds the type", body = ErrorSchema),
        (status = 409, description = "Account number already registered", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "registerAccount"
)]
#[post("/owners/{owner_id}/accounts")]
pub async fn register_account(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<AccountRequest>,
) -> ApiResult<HttpResponse> {
    let owner_id = OwnerId::new(path.into_inner());
    let account = parse_account_request(payload.into_inner())?;

    state
        .registration
        .register_account(account.clone(), owner_id)
        .await
        .map_err(map_registration_error)?;

    info!(account_number = %account.number, owner_id = %owner_id, "account created via HTTP");
    Ok(HttpResponse::Created().json(AccountResponse::from(account)))
}

/// Fetch a registered account by number.
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{account_number}",
    params(("account_number" = u64, Path, description = "Account number")),
    responses(
        (status = 200, description = "Account", body = AccountResponse),
        (status = 404, description = "Account not found", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "findAccount"
)]
#[get("/accounts/{account_number}")]
pub async fn find_account(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<AccountResponse>> {
    let number = AccountNumber::new(path.into_inner());
    let account = state
        .accounts
        .find_account(number)
        .await
        .map_err(map_store_error)?
        .ok_or_else(|| Error::not_found(format!("account {number} not found")))?;

    Ok(web::Json(AccountResponse::from(account)))
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
