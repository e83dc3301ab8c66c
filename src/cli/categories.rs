use tabled::Table;

use crate::{
    catalog::Catalog,
    error, info,
    spotify::SpotifyClient,
    types::CategoryTableRow,
    utils,
};

pub async fn categories(limit: u32) {
    let client = match SpotifyClient::from_cache().await {
        Ok(c) => c,
        Err(e) => error!(
            "Failed to load token. Please run spotex auth\n Error: {}",
            e
        ),
    };

    let pb = utils::spinner("Fetching browse categories...");
    let result = client.categories(limit).await;
    pb.finish_and_clear();

    let categories = match result {
        Ok(c) => c,
        Err(e) => error!("Failed to fetch categories. Err: {}", e),
    };

    if categories.is_empty() {
        info!("No categories available for this market.");
        return;
    }

    let rows: Vec<CategoryTableRow> = categories
        .into_iter()
        .map(|c| CategoryTableRow {
            id: c.id,
            name: c.name,
        })
        .collect();

    println!("{}", Table::new(rows));
}
