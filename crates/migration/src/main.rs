#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // sea-orm-migration's CLI reads DATABASE_URL; assemble it from the
    // GROUNDWORK_* variables when it is not set explicitly.
    if std::env::var("DATABASE_URL").is_err() {
        let config = migration::load_config_from_env();
        std::env::set_var("DATABASE_URL", config.build_connection_string());
    }

    sea_orm_migration::cli::run_cli(migration::Migrator).await;
}
