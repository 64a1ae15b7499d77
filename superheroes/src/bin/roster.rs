//! Demo entry-point: seeds the in-memory catalogue, wires the services by
//! hand, and logs the roster plus one hit and one miss lookup.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use superheroes::domain::ports::{SuperHeroByNameQuery, SuperHeroRosterQuery};
use superheroes::domain::{
    SuperHero, SuperHeroLookupService, SuperHeroName, SuperHeroNameError, SuperHeroRosterService,
};
use superheroes::outbound::InMemorySuperHeroRepository;

fn seed_catalogue() -> Result<InMemorySuperHeroRepository, SuperHeroNameError> {
    let heroes = [
        (
            "Iron Man",
            true,
            "Genius engineer in powered armour.",
        ),
        ("Thor", true, "God of thunder, wielder of Mjolnir."),
        (
            "Wolverine",
            false,
            "Adamantium claws and a healing factor.",
        ),
    ];

    let mut catalogue = Vec::with_capacity(heroes.len());
    for (name, is_avenger, description) in heroes {
        catalogue.push(SuperHero::new(
            SuperHeroName::new(name)?,
            format!("https://img.example/{}.jpg", name.to_lowercase().replace(' ', "-")),
            is_avenger,
            description,
        ));
    }
    Ok(InMemorySuperHeroRepository::with_heroes(catalogue))
}

#[tokio::main]
async fn main() -> Result<(), SuperHeroNameError> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let repository = Arc::new(seed_catalogue()?);
    let lookup = SuperHeroLookupService::new(Arc::clone(&repository));
    let roster = SuperHeroRosterService::new(repository);

    for hero in roster.get_all().await {
        info!(
            name = %hero.name(),
            avenger = hero.is_avenger(),
            "{}",
            hero.description()
        );
    }

    let cancel = CancellationToken::new();
    for raw in ["Iron Man", "Fatman"] {
        let name = SuperHeroName::new(raw)?;
        match lookup.get(&name, &cancel).await {
            Ok(hero) => info!(name = %hero.name(), photo = hero.photo_url(), "loaded"),
            Err(error) => warn!(%error, "load failed"),
        }
    }

    Ok(())
}
