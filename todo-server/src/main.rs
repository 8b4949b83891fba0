use todo_server::{create_app, ServerConfig};
use todo_store::TodoStore;
use tracing::{info, Level};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = ServerConfig::default();

    let store = match TodoStore::open(&config.db_path) {
        Ok(store) => {
            info!("connected to the todo database at {}", config.db_path.display());
            store
        }
        Err(e) => {
            eprintln!("failed to open todo database: {e}");
            std::process::exit(1);
        }
    };

    let app = create_app(store);

    info!("server listening on http://localhost:{}", config.bind_port);
    info!("  GET  / - todo page");
    info!("  GET  /todos - list todos");
    info!("  POST /todos - create todo");

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .unwrap();
    axum::serve(listener, app).await.unwrap();
}
