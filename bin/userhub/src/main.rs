use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    userhub::run().await
}
