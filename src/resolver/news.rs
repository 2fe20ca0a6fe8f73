use log::warn;

use crate::api::{ArticleDetail, Gateway, GatewayError, NewsArticle, or_empty};

pub async fn load_articles(gateway: &dyn Gateway) -> Vec<NewsArticle> {
    or_empty(gateway.articles().await, "news articles")
}

pub async fn load_article_detail(
    gateway: &dyn Gateway,
    id: i64,
) -> Result<ArticleDetail, GatewayError> {
    gateway.article(id).await.inspect_err(|e| {
        warn!("Failed to fetch article details for {id}: {e}");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeGateway, article};

    #[tokio::test]
    async fn test_articles_and_detail() {
        let gateway = FakeGateway::new().with_article(article(1, "Opening"), "Doors open at nine.");

        let articles = load_articles(&gateway).await;
        assert_eq!(articles[0].headline, "Opening");

        let detail = load_article_detail(&gateway, 1).await.unwrap();
        assert_eq!(detail.article_text, "Doors open at nine.");
    }

    #[tokio::test]
    async fn test_missing_article_detail() {
        let gateway = FakeGateway::new();
        assert!(load_article_detail(&gateway, 3).await.is_err());
    }
}
