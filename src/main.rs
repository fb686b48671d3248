use dotenvy::dotenv;
use elenchos::logging::init_tracing;
use elenchos::router::init_router;
use elenchos::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Maintenance command: apply migrations and exit.
    if args.len() > 1 && args[1] == "migrate" {
        run_migrations().await;
        return;
    }

    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();
    println!("🚀 Server running on http://localhost:{port}");
    println!("📚 Swagger UI available at http://localhost:{port}/swagger-ui");
    println!("📖 Scalar UI available at http://localhost:{port}/scalar");
    axum::serve(listener, app).await.unwrap();
}

async fn run_migrations() {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(_) => println!("✅ Database migrations applied"),
        Err(e) => {
            eprintln!("❌ Migration failed: {}", e);
            std::process::exit(1);
        }
    }
}
