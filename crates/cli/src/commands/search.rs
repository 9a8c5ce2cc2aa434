use anyhow::Result;
use pms_suggest_service::{SuggestionField, SuggestionService};

use super::print_json;

pub(crate) async fn get(service: &SuggestionService, mobile: &str) -> Result<()> {
    match service.customer(mobile).await? {
        Some(customer) => print_json(&customer),
        None => {
            println!("Customer not found: {mobile}");
            Ok(())
        },
    }
}

pub(crate) async fn customers(service: &SuggestionService, filter: Option<&str>) -> Result<()> {
    let customers = match filter {
        Some(query) => service.filter_customers(query).await?,
        None => service.customers().await?,
    };
    print_json(&customers)
}

pub(crate) async fn suggest(service: &SuggestionService, field: &str, partial: &str) -> Result<()> {
    let field: SuggestionField = field.parse()?;
    print_json(&service.suggest(field, partial).await?)
}

pub(crate) async fn descriptions(service: &SuggestionService) -> Result<()> {
    print_json(&service.descriptions().await?)
}

pub(crate) async fn remarks(service: &SuggestionService) -> Result<()> {
    print_json(&service.remarks().await?)
}

pub(crate) async fn stats(service: &SuggestionService) -> Result<()> {
    print_json(&service.stats().await?)
}
