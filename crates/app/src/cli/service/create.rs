use clap::Args;
use darkroom_app::{
    database::Db,
    domain::catalog::{
        CatalogService, PgCatalogService,
        models::{NewService, ServiceCategory, ServiceUuid},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateServiceArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Display name, e.g. "Wedding Video"
    #[arg(long)]
    name: String,

    /// One of: video, audio, photo
    #[arg(long)]
    category: String,

    #[arg(long)]
    description: String,

    /// Price in minor units (cents/pence)
    #[arg(long)]
    price: u64,

    /// Opaque image store reference
    #[arg(long)]
    image: Option<String>,
}

pub(crate) async fn run(args: CreateServiceArgs) -> Result<(), String> {
    let category: ServiceCategory = args
        .category
        .parse()
        .map_err(|_| format!("unknown category '{}'", args.category))?;

    let pool = crate::cli::connect(&args.database_url).await?;

    let service = PgCatalogService::new(Db::new(pool));

    let created = service
        .create_service(NewService {
            uuid: ServiceUuid::new(),
            name: args.name,
            category,
            description: args.description,
            price: args.price,
            image: args.image,
        })
        .await
        .map_err(|error| format!("failed to create service: {error}"))?;

    println!("service_uuid: {}", created.uuid);
    println!("name: {}", created.name);
    println!("category: {}", created.category);
    println!("price: {}", created.price);

    Ok(())
}
