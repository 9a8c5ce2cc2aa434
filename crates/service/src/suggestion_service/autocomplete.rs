//! Read paths used while the user types.

use pms_suggest_core::{Customer, MatchPolicy, SuggestConfig};

use super::SuggestionService;
use crate::{LatestOnly, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionField {
    Mobile,
    Name,
    Description,
    Remark,
}

impl std::str::FromStr for SuggestionField {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(Self::Mobile),
            "name" => Ok(Self::Name),
            "description" => Ok(Self::Description),
            "remark" => Ok(Self::Remark),
            _ => Err(ServiceError::InvalidInput(format!("unknown suggestion field: {s}"))),
        }
    }
}

/// Minimum typed length before a field offers suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionPolicy {
    pub min_mobile_query_len: usize,
    pub min_text_query_len: usize,
}

impl SuggestionPolicy {
    #[must_use]
    pub fn from_config(config: &SuggestConfig) -> Self {
        Self {
            min_mobile_query_len: config.min_mobile_query_len,
            min_text_query_len: config.min_text_query_len,
        }
    }

    fn min_len(self, field: SuggestionField) -> usize {
        match field {
            SuggestionField::Mobile => self.min_mobile_query_len,
            SuggestionField::Name | SuggestionField::Description | SuggestionField::Remark => {
                self.min_text_query_len
            },
        }
    }

    /// Text fields ignore surrounding whitespace; mobile input counts as typed.
    #[must_use]
    pub fn allows(self, field: SuggestionField, partial: &str) -> bool {
        let typed = match field {
            SuggestionField::Mobile => partial,
            SuggestionField::Name | SuggestionField::Description | SuggestionField::Remark => {
                partial.trim()
            },
        };
        typed.chars().count() >= self.min_len(field)
    }
}

impl SuggestionService {
    /// Suggestions for `field`, empty while `partial` is below the threshold.
    pub async fn suggest(
        &self,
        field: SuggestionField,
        partial: &str,
    ) -> Result<Vec<String>, ServiceError> {
        if !self.policy.allows(field, partial) {
            return Ok(Vec::new());
        }
        let matches = match field {
            SuggestionField::Mobile => self.store.search_mobile_nos(partial).await?,
            SuggestionField::Name => self.store.search_customer_names(partial).await?,
            SuggestionField::Description => self.store.search_descriptions(partial).await?,
            SuggestionField::Remark => self.store.search_remarks(partial).await?,
        };
        Ok(matches)
    }

    /// Like [`suggest`](Self::suggest), but `None` when a newer query through
    /// the same gate has already been shown.
    pub async fn suggest_latest(
        &self,
        gate: &LatestOnly,
        field: SuggestionField,
        partial: &str,
    ) -> Result<Option<Vec<String>>, ServiceError> {
        let ticket = gate.issue();
        let matches = self.suggest(field, partial).await?;
        if gate.accept(ticket) {
            Ok(Some(matches))
        } else {
            tracing::debug!(sequence = ticket.sequence(), "discarding superseded suggestions");
            Ok(None)
        }
    }

    pub async fn suggest_mobile_nos(&self, partial: &str) -> Result<Vec<String>, ServiceError> {
        self.suggest(SuggestionField::Mobile, partial).await
    }

    pub async fn suggest_customer_names(&self, partial: &str) -> Result<Vec<String>, ServiceError> {
        self.suggest(SuggestionField::Name, partial).await
    }

    pub async fn suggest_descriptions(&self, partial: &str) -> Result<Vec<String>, ServiceError> {
        self.suggest(SuggestionField::Description, partial).await
    }

    pub async fn suggest_remarks(&self, partial: &str) -> Result<Vec<String>, ServiceError> {
        self.suggest(SuggestionField::Remark, partial).await
    }

    /// Name to fill in once a mobile number has been entered.
    pub async fn lookup_name(&self, mobile_no: &str) -> Result<Option<String>, ServiceError> {
        if mobile_no.is_empty() {
            return Ok(None);
        }
        let customer = self.store.get_customer_by_mobile(mobile_no).await?;
        Ok(customer.map(|c| c.customer_name))
    }

    /// Local data screen filter: name or mobile contains `query`, ignoring case.
    pub async fn filter_customers(&self, query: &str) -> Result<Vec<Customer>, ServiceError> {
        let customers = self.store.get_all_customers().await?;
        let policy = MatchPolicy::ContainsIgnoreCase;
        Ok(customers
            .into_iter()
            .filter(|c| {
                policy.matches(&c.customer_name, query) || policy.matches(&c.mobile_no, query)
            })
            .collect())
    }
}
