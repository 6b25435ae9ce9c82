//! Corpus statistics client.

use noesis_core::entities::Stats;
use noesis_core::wire::FetchedStats;

use crate::transport::ApiClient;
use crate::ClientError;

#[derive(Debug, serde::Deserialize)]
struct GetStatsResponse {
    stats: FetchedStats,
}

impl ApiClient {
    /// Fetch the aggregate corpus counts.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn statistics(&self) -> Result<Stats, ClientError> {
        let response: GetStatsResponse = self.get("common/statistics", &[]).await?;
        Ok(response.stats.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stats_response_parses_camel_case_counts() {
        let json = r#"{
            "stats": {
                "definitionCount": 120,
                "sourceCount": 40,
                "authorCount": 33,
                "currentQuarterDefinitionCount": 8,
                "currentQuarterSourceCount": 3,
                "currentQuarterAuthorCount": 2
            }
        }"#;
        let response: GetStatsResponse = serde_json::from_str(json).unwrap();
        let stats = Stats::from(response.stats);
        assert_eq!(stats.definition_count, 120);
        assert_eq!(stats.source_count, 40);
        assert_eq!(stats.current_quarter_definition_count, 8);
    }
}
