use tabled::Table;

use crate::{
    error,
    management::{LibraryManager, TokenManager},
    types::GenreTableRow,
    warning,
};

pub async fn genres(search: Option<String>) {
    let token_mgr = match TokenManager::obtain().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to obtain a token. Please run spoplcli auth\n Error: {}",
                e
            );
        }
    };

    let library = match LibraryManager::fetch(token_mgr.access_token()).await {
        Ok(library) => library,
        Err(e) => error!("Failed to load your saved tracks: {}", e),
    };

    let mut genres = library.genres();

    if let Some(genre_search) = search {
        let search_term = genre_search.to_lowercase();
        genres.retain(|g| g.to_lowercase().contains(&search_term));
    }

    if genres.is_empty() {
        warning!("No genres found.");
        return;
    }

    // convert genres to table rows with artist counts
    let table_rows: Vec<GenreTableRow> = genres
        .into_iter()
        .map(|genre| {
            let artists = library
                .artists()
                .iter()
                .filter(|artist| artist.genres.contains(&genre))
                .count();
            GenreTableRow { genre, artists }
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
