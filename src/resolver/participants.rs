use log::{info, warn};

use crate::api::{Category, Gateway, GatewayError, Participant, Product, or_empty};

/// Participants-screen mount: participants and categories, fetched together.
/// Each side falls back to empty on its own.
pub async fn load_participants_and_categories(
    gateway: &dyn Gateway,
) -> (Vec<Participant>, Vec<Category>) {
    let (participants, categories) = futures::join!(gateway.participants(), gateway.categories());
    let participants = or_empty(participants, "participants");
    let categories = or_empty(categories, "categories");
    info!(
        "Loaded {} participants, {} categories",
        participants.len(),
        categories.len()
    );
    (participants, categories)
}

/// Fetches one participant. Anything that is not a well-formed record is an
/// error, and the caller keeps whatever it was showing.
pub async fn load_participant_details(
    gateway: &dyn Gateway,
    id: i64,
) -> Result<Participant, GatewayError> {
    gateway.participant(id).await.inspect_err(|e| {
        warn!("Invalid participant details for {id}: {e}");
    })
}

pub async fn load_company_products(gateway: &dyn Gateway, company_id: i64) -> Vec<Product> {
    or_empty(
        gateway.company_products(company_id).await,
        &format!("products of company {company_id}"),
    )
}

pub async fn load_product_detail(gateway: &dyn Gateway, id: i64) -> Result<Product, GatewayError> {
    gateway.product(id).await.inspect_err(|e| {
        warn!("Failed to load product detail {id}: {e}");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeGateway, participant, product};

    #[tokio::test]
    async fn test_mount_loads_both_collections() {
        let gateway = FakeGateway::new()
            .with_participant(participant(1, "Acme", Some(3)))
            .with_category(3, "Food");

        let (participants, categories) = load_participants_and_categories(&gateway).await;
        assert_eq!(participants.len(), 1);
        assert_eq!(categories[0].name, "Food");
    }

    #[tokio::test]
    async fn test_mount_with_failing_backend_is_empty() {
        let gateway = FakeGateway::new()
            .with_participant(participant(1, "Acme", Some(3)))
            .failing_collections();

        let (participants, categories) = load_participants_and_categories(&gateway).await;
        assert!(participants.is_empty());
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_participant_details_found() {
        let gateway = FakeGateway::new().with_participant(participant(4, "Bilal", None));
        let p = load_participant_details(&gateway, 4).await.unwrap();
        assert_eq!(p.name, "Bilal");
    }

    #[tokio::test]
    async fn test_participant_details_failure_is_reported() {
        let gateway = FakeGateway::new().with_failing_participant(4);
        let err = load_participant_details(&gateway, 4).await.unwrap_err();
        assert!(matches!(err, GatewayError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_company_products_and_detail() {
        let gateway = FakeGateway::new().with_products(5, vec![product(10, "Widget")]);

        let products = load_company_products(&gateway, 5).await;
        assert_eq!(products.len(), 1);

        let detail = load_product_detail(&gateway, 10).await.unwrap();
        assert_eq!(detail.name, "Widget");
    }

    #[tokio::test]
    async fn test_unknown_company_has_no_products() {
        let gateway = FakeGateway::new();
        assert!(load_company_products(&gateway, 99).await.is_empty());
        assert!(load_product_detail(&gateway, 1).await.is_err());
    }
}
