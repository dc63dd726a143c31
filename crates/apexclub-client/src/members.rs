//! # Member Write Endpoints
//!
//! Fresh sale, renewal, and transfer submission.
//!
//! Every submission validates client-side first; a rule violation never
//! reaches the wire. A failed request leaves the session untouched so the
//! operator can correct and resubmit - there is no retry and no partial
//! state to unwind.

use tracing::info;

use apexclub_core::{validation, SaleSession};

use crate::auth::TokenProvider;
use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::payloads::{ApiAck, FreshSaleRequest, RenewRequest, TransferRequest};

impl<A: TokenProvider> ApiClient<A> {
    /// Submits a fresh sale for the session's member.
    ///
    /// ## Preconditions (checked here)
    /// - At least one plan selected
    /// - Every personal-training plan has a trainer
    pub async fn submit_sale(
        &self,
        session: &SaleSession,
        closed_by: &str,
    ) -> ClientResult<ApiAck> {
        validation::validate_sale_submission(session)?;
        let request = FreshSaleRequest::from_session(session, closed_by);

        info!(
            member_id = %request.member_id,
            plans = request.selected_plans.len(),
            payable = %request.total_amount,
            "submitting fresh sale"
        );
        self.post_json("/api/admin/members/sale", &request).await
    }

    /// Submits a renewal for the session's member.
    ///
    /// ## Preconditions (checked here)
    /// - Everything a fresh sale needs
    /// - A commitment date on every plan
    pub async fn submit_renewal(
        &self,
        session: &SaleSession,
        closed_by: &str,
    ) -> ClientResult<ApiAck> {
        validation::validate_renewal_submission(session)?;
        let request = RenewRequest::from_session(session, closed_by)?;

        info!(
            member_id = %request.member_id,
            package_id = %request.package_id,
            start = %request.start_date,
            payable = %request.total_amount,
            "submitting renewal"
        );
        self.post_json("/api/admin/members/renew", &request).await
    }

    /// Transfers a membership from `member_id` to another member.
    ///
    /// ## Preconditions (checked here)
    /// - Destination member id is well-formed
    /// - Transfer charge is positive
    pub async fn submit_transfer(
        &self,
        member_id: &str,
        request: &TransferRequest,
    ) -> ClientResult<ApiAck> {
        validation::validate_transfer(&request.transfer_to_member_id, request.transfer_charge)?;

        info!(
            from = %member_id,
            to = %request.transfer_to_member_id,
            charge = %request.transfer_charge,
            "submitting membership transfer"
        );
        self.post_json(
            &format!("/api/admin/members/{}/transfer", member_id),
            request,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;
    use crate::error::ClientError;
    use apexclub_core::{CoreError, Money, PaymentMethod, QuoteInputs, SaleQuote};

    fn offline_client() -> ApiClient<StaticToken> {
        // Unroutable on purpose: these tests must fail BEFORE the network.
        ApiClient::new("http://127.0.0.1:1", StaticToken::new("test-token")).unwrap()
    }

    #[tokio::test]
    async fn test_empty_sale_blocked_before_network() {
        let client = offline_client();
        let session = SaleSession::new("member-1");

        let err = client.submit_sale(&session, "admin").await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Validation(CoreError::NothingSelected)
        ));
    }

    #[tokio::test]
    async fn test_dateless_renewal_blocked_before_network() {
        let client = offline_client();
        let session = SaleSession::new("member-1");

        let err = client.submit_renewal(&session, "admin").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_zero_charge_transfer_blocked_before_network() {
        let client = offline_client();
        let quote = SaleQuote::from_amount(Money::zero(), &QuoteInputs::default());
        let request = TransferRequest::new(
            "550e8400-e29b-41d4-a716-446655440000",
            Money::zero(),
            &quote,
            PaymentMethod::Cash,
            None,
            "admin",
        );

        let err = client
            .submit_transfer("member-1", &request)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
