use adamstravel_cart::{
    config::CartConfig,
    dto::cart::NewCartItem,
    services::cart_service::CartStore,
    storage::FileStorage,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,adamstravel_cart=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CartConfig::from_env()?;
    let storage = FileStorage::from_config(&config)?;
    let mut store = CartStore::from_config(storage, &config);

    store.clear();
    seed_trips(&mut store);

    if store.last_write_failed() {
        anyhow::bail!("could not write cart to {}", store.storage().dir().display());
    }

    println!(
        "Seed completed. {} travellers, total {} Ft in {}",
        store.item_count(),
        store.total_price(),
        store.storage().dir().display()
    );
    Ok(())
}

fn seed_trips(store: &mut CartStore<FileStorage>) {
    let trips = vec![
        ("trip-balaton", "Balaton", "Hétvége a Balaton-felvidéken", 25000, 2),
        ("trip-hortobagy", "Hortobágy", "Pusztai lovasprogram", 18500, 1),
        ("trip-tokaj", "Tokaj", "Borkóstoló túra", 32000, 3),
    ];

    for (id, title, desc, price, qty) in trips {
        store.add(NewCartItem {
            id: id.to_string(),
            title: Some(title.to_string()),
            price: Some(price),
            img: Some(format!("img/{id}.jpg")),
            desc: Some(desc.to_string()),
            qty: Some(qty),
        });
    }

    tracing::info!("seeded trips");
}
