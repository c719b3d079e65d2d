use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(error) = webinar_seats::run().await {
        error!("webinar-seats exited with error: {}", error);
        std::process::exit(1);
    }
}
