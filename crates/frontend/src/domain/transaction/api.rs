use contracts::domain::transaction::{
    CreateTransactionData, Transaction, TransactionId, TransactionListResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::api::fetch_with_auth;
use crate::system::auth::storage;

fn get_auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Fetch the ledger together with the current balance
pub async fn fetch_transactions() -> Result<TransactionListResponse, String> {
    let token = storage::get_access_token().ok_or("Not authenticated")?;
    fetch_with_auth("/api/transactions", &token).await
}

/// Create a transaction. The service assigns the id and the running balance.
pub async fn create_transaction(data: CreateTransactionData) -> Result<Transaction, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url("/api/transactions"))
        .header("Authorization", &auth_header)
        .json(&data)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create transaction: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a transaction by id
pub async fn delete_transaction(id: TransactionId) -> Result<(), String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&api_url(&format!("/api/transactions/{}", id.value())))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete transaction: {}", response.status()));
    }

    Ok(())
}
