use filmql::error::Result;
use filmql::schema::SchemaBuilder;
use filmql::store::FilmStore;
use std::sync::Arc;

/// The fixed query this demo executes
const FILM_LIST_QUERY: &str = r#"
{
    list {
        id
        title
        year
    }
}
"#;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing; diagnostics go to stderr so stdout stays a single
    // result line
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = Arc::new(FilmStore::seed());
    tracing::info!("Seeded film catalog with {} films", store.len());

    let schema = SchemaBuilder::new(store).build_schema()?;

    let response = filmql::executor::run(&schema, FILM_LIST_QUERY).await?;

    filmql::output::write_response(&response, &mut std::io::stdout())?;

    Ok(())
}
