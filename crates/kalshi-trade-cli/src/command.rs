/*
[INPUT]:  Parsed subcommand and a configured Kalshi client
[OUTPUT]: Raw JSON response of the matching endpoint
[POS]:    Command layer - maps CLI subcommands to adapter calls
[UPDATE]: When exposing more endpoints on the command line
*/

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde_json::Value;
use tracing::info;

use kalshi_trade_adapter::{
    GetEventsParams, GetFillsParams, GetMarketsParams, GetOrdersParams, GetPositionsParams,
    KalshiClient,
};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the API version
    Version,
    /// Exchange and trading status
    Status,
    /// Portfolio balance in cents
    Balance,
    /// List events
    Events {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        series_ticker: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        cursor: Option<String>,
        #[arg(long)]
        with_nested_markets: bool,
    },
    /// Show one event
    Event {
        ticker: String,
        #[arg(long)]
        with_nested_markets: bool,
    },
    /// List markets (the client always adds limit=1000)
    Markets {
        #[arg(long)]
        event_ticker: Option<String>,
        #[arg(long)]
        series_ticker: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, value_delimiter = ',')]
        tickers: Vec<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        cursor: Option<String>,
    },
    /// Show one market
    Market { ticker: String },
    /// Order book for a market
    Orderbook {
        ticker: String,
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Candlesticks between two epoch-second timestamps
    Candlesticks {
        series_ticker: String,
        market_ticker: String,
        #[arg(long)]
        start: i64,
        #[arg(long)]
        end: i64,
        /// minute, hour or day
        #[arg(long, default_value = "hour")]
        interval: String,
    },
    /// Portfolio positions
    Positions {
        #[arg(long)]
        ticker: Option<String>,
        #[arg(long)]
        event_ticker: Option<String>,
    },
    /// Portfolio orders
    Orders {
        #[arg(long)]
        ticker: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Portfolio fills
    Fills {
        #[arg(long)]
        ticker: Option<String>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Version => "version",
            Command::Status => "status",
            Command::Balance => "balance",
            Command::Events { .. } => "events",
            Command::Event { .. } => "event",
            Command::Markets { .. } => "markets",
            Command::Market { .. } => "market",
            Command::Orderbook { .. } => "orderbook",
            Command::Candlesticks { .. } => "candlesticks",
            Command::Positions { .. } => "positions",
            Command::Orders { .. } => "orders",
            Command::Fills { .. } => "fills",
        }
    }
}

/// Run one subcommand against the API
pub async fn execute(client: &KalshiClient, command: &Command) -> Result<Value> {
    info!(command = command.name(), base_url = client.base_url(), "executing command");

    let response = match command.clone() {
        Command::Version => client.get_api_version().await,
        Command::Status => client.get_status().await,
        Command::Balance => client.get_balance().await,
        Command::Events {
            status,
            series_ticker,
            limit,
            cursor,
            with_nested_markets,
        } => {
            let params = GetEventsParams {
                limit,
                cursor,
                status,
                series_ticker,
                with_nested_markets: with_nested_markets.then_some(true),
            };
            client.get_events(&params).await
        }
        Command::Event {
            ticker,
            with_nested_markets,
        } => {
            client
                .get_event(&ticker, with_nested_markets.then_some(true))
                .await
        }
        Command::Markets {
            event_ticker,
            series_ticker,
            status,
            tickers,
            limit,
            cursor,
        } => {
            let params = GetMarketsParams {
                limit,
                cursor,
                event_ticker,
                series_ticker,
                status,
                tickers: (!tickers.is_empty()).then_some(tickers),
                ..GetMarketsParams::default()
            };
            client.get_markets(&params).await
        }
        Command::Market { ticker } => client.get_market(&ticker).await,
        Command::Orderbook { ticker, depth } => client.get_market_orderbook(&ticker, depth).await,
        Command::Candlesticks {
            series_ticker,
            market_ticker,
            start,
            end,
            interval,
        } => {
            let start = epoch_seconds(start)?;
            let end = epoch_seconds(end)?;
            client
                .get_market_candlesticks(&series_ticker, &market_ticker, &start, &end, &interval)
                .await
        }
        Command::Positions {
            ticker,
            event_ticker,
        } => {
            let params = GetPositionsParams {
                ticker,
                event_ticker,
                ..GetPositionsParams::default()
            };
            client.get_positions(&params).await
        }
        Command::Orders { ticker, status } => {
            let params = GetOrdersParams {
                ticker,
                status,
                ..GetOrdersParams::default()
            };
            client.get_orders(&params).await
        }
        Command::Fills { ticker } => {
            let params = GetFillsParams {
                ticker,
                ..GetFillsParams::default()
            };
            client.get_fills(&params).await
        }
    };

    response.with_context(|| format!("{} request failed", command.name()))
}

fn epoch_seconds(seconds: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .with_context(|| format!("timestamp {seconds} is out of range"))
}
