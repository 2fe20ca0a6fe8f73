use log::{info, warn};

use crate::api::{
    EnrichedOffer, Gateway, GatewayError, NO_COMPANY, Offer, OfferDetails, UNKNOWN_COMPANY,
    or_empty,
};

use super::fanout::fetch_indexed;

/// Fetches all offers and attaches each one's company name.
///
/// Company lookups run concurrently. A failed lookup becomes
/// [`UNKNOWN_COMPANY`], a missing reference [`NO_COMPANY`]; neither drops the
/// offer. Output order matches the offers endpoint.
pub async fn load_offers_with_companies(gateway: &dyn Gateway) -> Vec<EnrichedOffer> {
    let offers = or_empty(gateway.offers().await, "offers");
    info!("Resolving companies for {} offers", offers.len());

    fetch_indexed(offers, |offer| async move {
        let company_name = company_name_for(gateway, &offer).await;
        EnrichedOffer {
            offer,
            company_name,
        }
    })
    .await
}

async fn company_name_for(gateway: &dyn Gateway, offer: &Offer) -> String {
    let Some(company_id) = offer.company else {
        return NO_COMPANY.to_string();
    };
    match gateway.participant(company_id).await {
        Ok(company) => company.name,
        Err(e) => {
            warn!(
                "Company {} for offer {} could not be resolved: {}",
                company_id, offer.id, e
            );
            UNKNOWN_COMPANY.to_string()
        }
    }
}

/// Fetches one offer and, if it names a company, that company's record.
///
/// The offer itself must load; a failed company lookup only leaves
/// `company` empty.
pub async fn load_offer_details(
    gateway: &dyn Gateway,
    id: i64,
) -> Result<OfferDetails, GatewayError> {
    let offer = gateway.offer(id).await.inspect_err(|e| {
        warn!("Failed to load offer details for {id}: {e}");
    })?;

    let company = match offer.company {
        Some(company_id) => match gateway.participant(company_id).await {
            Ok(company) => Some(company),
            Err(e) => {
                warn!("Company {company_id} for offer {id} unavailable: {e}");
                None
            }
        },
        None => None,
    };

    Ok(OfferDetails { offer, company })
}
