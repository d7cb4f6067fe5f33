#[tokio::main]
async fn main() {
    if let Err(e) = vocab_cli::run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
