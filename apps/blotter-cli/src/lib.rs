use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use blotter_domain::{CriteriaField, SearchMode};
use blotter_service::{Phase, SearchController};

#[derive(Debug, Parser)]
#[command(version, rename_all = "kebab")]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Search trades by the fixed criteria fields.
	Filter {
		#[arg(long)]
		book: Option<String>,
		#[arg(long)]
		counterparty: Option<String>,
		#[arg(long)]
		trader: Option<String>,
		#[arg(long)]
		trade_status: Option<String>,
		#[arg(long, value_name = "YYYY-MM-DD")]
		start_date: Option<String>,
		#[arg(long, value_name = "YYYY-MM-DD")]
		end_date: Option<String>,
		#[arg(long, default_value_t = 0)]
		page: u32,
	},
	/// Search trades with an RSQL query string.
	Rsql {
		query: String,
		#[arg(long, default_value_t = 0)]
		page: u32,
	},
	/// Search trades whose settlement instructions contain the given text.
	Settlement { instructions: String },
	/// Look up a single trade by id.
	Trade { id: i64 },
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = blotter_config::load(&args.config)?;

	init_tracing(&config);

	let controller = SearchController::new(config);

	match args.command {
		Command::Filter {
			book,
			counterparty,
			trader,
			trade_status,
			start_date,
			end_date,
			page,
		} => {
			let fields = [
				(CriteriaField::Book, book),
				(CriteriaField::Counterparty, counterparty),
				(CriteriaField::Trader, trader),
				(CriteriaField::TradeStatus, trade_status),
				(CriteriaField::StartDate, start_date),
				(CriteriaField::EndDate, end_date),
			];

			for (field, value) in fields {
				if let Some(value) = value {
					controller.update_criteria(field, value);
				}
			}

			run_search(&controller, page).await
		},
		Command::Rsql { query, page } => {
			controller.set_mode(SearchMode::Rsql);
			controller.update_rsql_query(query);

			run_search(&controller, page).await
		},
		Command::Settlement { instructions } => {
			controller.set_mode(SearchMode::Settlement);
			controller.update_settlement_text(instructions);

			run_search(&controller, 0).await
		},
		Command::Trade { id } => {
			let trade = controller.trade(id).await?;

			println!("{}", serde_json::to_string_pretty(&trade)?);

			Ok(())
		},
	}
}

async fn run_search(controller: &SearchController, page: u32) -> color_eyre::Result<()> {
	let state = controller.search(page).await;

	match state.phase() {
		Phase::Error => {
			let message = state.error.unwrap_or_else(|| "Search failed.".to_string());

			Err(eyre::eyre!(message))
		},
		Phase::NoResults => {
			println!("No results found");

			Ok(())
		},
		_ => {
			let result = state.result.unwrap_or_default();

			tracing::info!(
				total = result.total_elements,
				page = result.current_page + 1,
				pages = result.total_pages,
				"Search complete."
			);

			for item in &result.items {
				println!("{}", serde_json::to_string(item)?);
			}

			Ok(())
		},
	}
}

fn init_tracing(config: &blotter_config::Config) {
	let filter = EnvFilter::try_new(&config.service.log_level)
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
