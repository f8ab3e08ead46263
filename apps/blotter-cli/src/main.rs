use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = blotter_cli::Args::parse();

	blotter_cli::run(args).await
}
